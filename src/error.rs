use strum::Display;
use thiserror::Error;

/// Identifies which endpoint of a route query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Endpoint {
    Start,
    Finish,
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum GraphError {
    #[error("Connection distance is not valid, expected finite and >= 0: {0}")]
    InvalidDistance(f64),
    #[error("Location is not in the graph: {0}")]
    UnknownLocation(String),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum RouteError {
    #[error("Route {endpoint} is not in the graph: {name}")]
    InvalidLocation { endpoint: Endpoint, name: String },
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum DatasetError {
    #[error("Dataset contains no connections")]
    Empty,
    #[error("Dataset line {line} is malformed, expected a source, distance, destination row")]
    MalformedRow { line: usize },
    #[error("Dataset line {line} distance is not a number: {value}")]
    InvalidDistance { line: usize, value: String },
}
