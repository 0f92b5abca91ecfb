use crate::{ConnectionRecord, DatasetError, Kilometers};

/// A parsed connection dataset together with the default query endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Connection records in file order.
    pub records: Vec<ConnectionRecord>,
    /// Source field of the first row.
    pub start: String,
    /// Destination field of the last row.
    pub finish: String,
}

/// Parses a `source, distance, destination` dataset, one connection per line.
///
/// Whitespace around each field is trimmed and blank lines are skipped,
/// but every line counts towards the line numbers reported in errors.
/// Distances only have to parse as numbers here; whether a value is
/// usable as a connection distance is decided by
/// [`RouteGraph::add_connection`](crate::RouteGraph::add_connection).
pub fn parse_dataset(input: &str) -> Result<Dataset, DatasetError> {
    let mut records = Vec::new();
    let mut start = None;
    let mut finish = None;

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_row(line, index + 1)?;
        if start.is_none() {
            start = Some(record.source.clone());
        }
        finish = Some(record.destination.clone());
        records.push(record);
    }

    match (start, finish) {
        (Some(start), Some(finish)) => Ok(Dataset {
            records,
            start,
            finish,
        }),
        _ => Err(DatasetError::Empty),
    }
}

fn parse_row(line: &str, line_number: usize) -> Result<ConnectionRecord, DatasetError> {
    let mut fields = line.split(',').map(str::trim);
    let (source, distance, destination) =
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(source), Some(distance), Some(destination), None) => {
                (source, distance, destination)
            }
            _ => return Err(DatasetError::MalformedRow { line: line_number }),
        };

    if source.is_empty() || distance.is_empty() || destination.is_empty() {
        return Err(DatasetError::MalformedRow { line: line_number });
    }

    let distance = distance
        .parse()
        .map(Kilometers::from_km)
        .map_err(|_| DatasetError::InvalidDistance {
            line: line_number,
            value: distance.to_owned(),
        })?;

    Ok(ConnectionRecord {
        source: source.to_owned(),
        distance,
        destination: destination.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn record(source: &str, km: f64, destination: &str) -> ConnectionRecord {
        ConnectionRecord {
            source: source.to_owned(),
            distance: Kilometers::from_km(km),
            destination: destination.to_owned(),
        }
    }

    #[test]
    fn dataset_001() {
        let dataset = parse_dataset(
            "Aldgate, 8.5, Brookfield\n\
             Brookfield ,17, Carden\n",
        )
        .unwrap();

        assert_eq!(
            dataset.records,
            [
                record("Aldgate", 8.5, "Brookfield"),
                record("Brookfield", 17.0, "Carden"),
            ]
        );
        assert_eq!(dataset.start, "Aldgate");
        assert_eq!(dataset.finish, "Carden");
    }

    #[test]
    fn dataset_002() {
        let dataset = parse_dataset(
            "\n\
             Aldgate, 8.5, Brookfield\n\
             \n\
             Brookfield, 17, Carden\n\
             \n",
        )
        .unwrap();

        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.start, "Aldgate");
        assert_eq!(dataset.finish, "Carden");
    }

    #[test]
    fn dataset_003() {
        assert_eq!(parse_dataset("").unwrap_err(), DatasetError::Empty);
        assert_eq!(parse_dataset("\n  \n\n").unwrap_err(), DatasetError::Empty);
    }

    #[test]
    fn dataset_004() {
        assert_eq!(
            parse_dataset("Aldgate, 8.5\n").unwrap_err(),
            DatasetError::MalformedRow { line: 1 }
        );
        assert_eq!(
            parse_dataset("Aldgate, 8.5, Brookfield, Carden\n").unwrap_err(),
            DatasetError::MalformedRow { line: 1 }
        );
        assert_eq!(
            parse_dataset(", 8.5, Brookfield\n").unwrap_err(),
            DatasetError::MalformedRow { line: 1 }
        );
        assert_eq!(
            parse_dataset("Aldgate, , Brookfield\n").unwrap_err(),
            DatasetError::MalformedRow { line: 1 }
        );
    }

    #[test]
    fn dataset_005() {
        // blank lines are skipped but still counted
        assert_eq!(
            parse_dataset(
                "Aldgate, 8.5, Brookfield\n\
                 \n\
                 Brookfield, pancake, Carden\n"
            )
            .unwrap_err(),
            DatasetError::InvalidDistance {
                line: 3,
                value: "pancake".to_owned(),
            }
        );
    }

    #[test]
    fn dataset_006() {
        // sign and finiteness are checked at graph construction, not here
        let dataset = parse_dataset("Aldgate, -3.0, Brookfield\n").unwrap();

        assert_eq!(dataset.records, [record("Aldgate", -3.0, "Brookfield")]);
    }
}
