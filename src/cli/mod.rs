//! CLI argument parsing for airroute
//!
//! Global flags: --data, --config, --format, --quiet, --verbose

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use airroute_core::format::OutputFormat;
use airroute_core::tree::MstAlgorithm;
use parse::{parse_algorithm, parse_code, parse_format};

/// Airroute - shortest routes and spanning trees over flight networks
#[derive(Parser, Debug)]
#[command(name = "airroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Flight CSV file (overrides `data` in airroute.toml)
    #[arg(long, global = true, env = "AIRROUTE_DATA")]
    pub data: Option<PathBuf>,

    /// Configuration file (default: ./airroute.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: human or json
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `airroute_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest route between two airports, by distance
    Route {
        /// Departure airport code
        #[arg(value_parser = parse_code)]
        from: String,

        /// Arrival airport code
        #[arg(value_parser = parse_code)]
        to: String,
    },

    /// Shortest routes to every airport in a region (state)
    Region {
        /// Departure airport code
        #[arg(value_parser = parse_code)]
        from: String,

        /// Region tag, e.g. GA
        #[arg(value_parser = parse_code)]
        region: String,
    },

    /// Shortest route with exactly N intermediate stops
    Stops {
        /// Departure airport code
        #[arg(value_parser = parse_code)]
        from: String,

        /// Arrival airport code
        #[arg(value_parser = parse_code)]
        to: String,

        /// Number of intermediate stops
        stops: usize,
    },

    /// Minimum spanning tree over the undirected flight network
    Mst {
        /// Algorithm: prim or kruskal (default from config, else prim)
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<MstAlgorithm>,
    },

    /// List airports with their connection counts
    Airports {
        /// Only airports in this region
        #[arg(long, short, value_parser = parse_code)]
        region: Option<String>,
    },
}
