//! Graph algorithm implementations
//!
//! - `dijkstra`: linear-scan shortest paths, with an exact-stops variant

pub mod dijkstra;

pub use dijkstra::{find_path_with_stops, find_paths_from, find_paths_with_stops};
