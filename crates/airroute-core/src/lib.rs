//! Airroute Core Library
//!
//! Shortest routes and minimum spanning trees over airline flight networks.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod tree;
