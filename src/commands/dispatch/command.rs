//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::Cli;
use airroute_core::config::{RouteConfig, CONFIG_FILE_NAME};
use airroute_core::bail_usage;
use airroute_core::error::Result;
use airroute_core::graph::Graph;
use airroute_core::ingest;

/// Configuration plus the directory relative paths in it resolve against
pub struct LoadedConfig {
    pub config: RouteConfig,
    pub base: PathBuf,
}

/// Read `--config`, or `airroute.toml` under `root`, or fall back to defaults
pub fn load_config(cli: &Cli, root: &Path) -> Result<LoadedConfig> {
    if let Some(path) = &cli.config {
        let resolved = if path.is_absolute() {
            path.clone()
        } else {
            root.join(path)
        };
        if !resolved.is_file() {
            bail_usage!(format!("config file not found: {}", resolved.display()));
        }
        let base = resolved
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        return Ok(LoadedConfig {
            config: RouteConfig::load(&resolved)?,
            base,
        });
    }

    let config = RouteConfig::discover(root)?.unwrap_or_default();
    Ok(LoadedConfig {
        config,
        base: root.to_path_buf(),
    })
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn load_config(&self) -> Result<LoadedConfig> {
        load_config(self.cli, self.root)
    }

    /// Resolve the flight file and build the directed graph from it.
    ///
    /// `--data` is relative to the working directory; `data` in the config
    /// file is relative to the file that names it.
    pub fn load_graph(&self, loaded: &LoadedConfig) -> Result<Graph> {
        let path = match (&self.cli.data, &loaded.config.data) {
            (Some(path), _) => self.root.join(path),
            (None, Some(path)) => loaded.base.join(path),
            (None, None) => bail_usage!(format!(
                "no flight data: pass --data or set `data` in {}",
                CONFIG_FILE_NAME
            )),
        };

        let graph = ingest::load_graph(&path, &loaded.config.ingest)?;
        tracing::debug!(
            airports = graph.len(),
            flights = graph.flight_count(),
            elapsed = ?self.start.elapsed(),
            "load_graph"
        );
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("airroute {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest routes and spanning trees over flight networks.");
        println!();
        println!("Run `airroute --help` for usage information.");
        Ok(())
    }
}
