#![doc = include_str!("../README.md")]

mod dataset;
mod error;
mod graph;
mod model;
mod routing;

pub use dataset::{Dataset, parse_dataset};
pub use error::{DatasetError, Endpoint, GraphError, RouteError};
pub use graph::{Connection, RouteGraph};
pub use model::{ConnectionRecord, Hours, Kilometers, Speed};
pub use routing::{
    OptimalRoute, RouteOutcome, RouterConfig, find_optimal_path, find_optimal_path_with,
};
