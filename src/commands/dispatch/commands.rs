//! Command implementations for all airroute commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use airroute_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::commands::{airports, mst, route};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        let loaded = ctx.load_config()?;
        let graph = ctx.load_graph(&loaded)?;
        let format = ctx.cli.format;

        match cmd {
            Commands::Route { from, to } => route::handle_route(&graph, format, from, to),
            Commands::Region { from, region } => {
                route::handle_region(&graph, format, from, region)
            }
            Commands::Stops { from, to, stops } => {
                route::handle_stops(&graph, format, from, to, *stops)
            }
            Commands::Mst { algorithm } => {
                let algorithm = algorithm.unwrap_or(loaded.config.mst.algorithm);
                mst::handle_mst(&graph, format, algorithm)
            }
            Commands::Airports { region } => {
                airports::handle_airports(&graph, format, region.as_deref())
            }
        }
    }
}
