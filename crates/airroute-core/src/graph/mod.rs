//! Flight network model and shortest-path search
//!
//! - `directed`: airports and one-way flights
//! - `undirected`: symmetric min-cost projection used by spanning trees
//! - `algos`: label-correcting shortest-path search
//! - `paths`: search results and route reconstruction

pub mod algos;
pub mod directed;
pub mod paths;
pub mod types;
pub mod undirected;

pub use algos::{find_path_with_stops, find_paths_from, find_paths_with_stops};
pub use directed::Graph;
pub use paths::Paths;
pub use types::{Airport, Connection, EdgeKey, Flight, Route, UndirectedEdge, Weight};
pub use undirected::UndirectedGraph;
