use rustc_hash::FxHashMap;

use crate::{ConnectionRecord, GraphError, Kilometers};

/// One stored direction of an undirected connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub destination: String,
    pub distance: Kilometers,
}

/// Undirected weighted graph of named locations.
///
/// Every connection is stored twice, once per direction, so the
/// connections leaving any location can be enumerated directly.
/// Parallel connections between the same pair of locations are all
/// kept; the search decides which one wins.
///
/// The graph is built once through [`RouteGraph::add_connection`] and
/// is read-only afterwards, so a `&RouteGraph` can be shared across
/// any number of route queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteGraph {
    connections: FxHashMap<String, Vec<Connection>>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by inserting every record in order.
    /// Fails on the first record with an invalid distance.
    pub fn from_records(
        records: impl IntoIterator<Item = ConnectionRecord>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for record in records {
            graph.add_connection(&record.source, record.distance, &record.destination)?;
        }
        Ok(graph)
    }

    /// Inserts an undirected connection between `source` and `destination`.
    ///
    /// The connection is appended in both directions and both endpoints
    /// become known locations immediately. Inserting the same pair again
    /// adds a parallel connection rather than replacing the previous
    /// distance.
    pub fn add_connection(
        &mut self,
        source: &str,
        distance: Kilometers,
        destination: &str,
    ) -> Result<(), GraphError> {
        if !distance.km().is_finite() || distance.km() < 0.0 {
            return Err(GraphError::InvalidDistance(distance.km()));
        }
        self.connections
            .entry(source.to_owned())
            .or_default()
            .push(Connection {
                destination: destination.to_owned(),
                distance,
            });
        self.connections
            .entry(destination.to_owned())
            .or_default()
            .push(Connection {
                destination: source.to_owned(),
                distance,
            });
        Ok(())
    }

    /// Returns true if `name` appeared as either endpoint of an inserted
    /// connection.
    pub fn has_location(&self, name: &str) -> bool {
        self.connections.contains_key(name)
    }

    /// Returns the connections leaving `name` in insertion order.
    pub fn neighbors(&self, name: &str) -> Result<&[Connection], GraphError> {
        self.connections
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownLocation(name.to_owned()))
    }

    /// Iterates over all known location names, in no particular order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.connections.keys().map(String::as_str)
    }

    pub fn location_count(&self) -> usize {
        self.connections.len()
    }

    /// Infallible adjacency lookup for the search loop, which only asks
    /// about locations already known to the graph.
    pub(crate) fn outgoing(&self, name: &str) -> &[Connection] {
        self.connections.get(name).map_or(&[], Vec::as_slice)
    }
}
