//! `airroute route`, `airroute region` and `airroute stops`

use std::time::Instant;

use airroute_core::error::Result;
use airroute_core::format::{region_table, route_sentence, stops_sentence, OutputFormat};
use airroute_core::graph::{find_path_with_stops, find_paths_from, Graph};
use airroute_core::trace_time;

/// Shortest route by distance between two airports
pub fn handle_route(graph: &Graph, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let start = Instant::now();
    let paths = find_paths_from(graph, from)?;
    trace_time!(start, "find_paths", origin = from);
    let route = paths.path_to(to)?;

    match format {
        OutputFormat::Human => println!("{}", route_sentence(from, to, route.as_ref())),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "route": route,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Shortest routes from one airport to every reachable airport in a region
pub fn handle_region(graph: &Graph, format: OutputFormat, from: &str, region: &str) -> Result<()> {
    let start = Instant::now();
    let paths = find_paths_from(graph, from)?;
    trace_time!(start, "find_paths", origin = from);
    let routes = paths.paths_to_region(region);
    tracing::debug!(region, routes = routes.len(), "region routes");

    match format {
        OutputFormat::Human => print!("{}", region_table(from, region, &routes)),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "region": region,
                "routes": routes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Shortest route whose final flight leaves after exactly `stops` stops
pub fn handle_stops(
    graph: &Graph,
    format: OutputFormat,
    from: &str,
    to: &str,
    stops: usize,
) -> Result<()> {
    let start = Instant::now();
    let route = find_path_with_stops(graph, from, to, stops)?;
    trace_time!(start, "find_path_with_stops", origin = from, stops = stops);

    match format {
        OutputFormat::Human => println!("{}", stops_sentence(from, to, stops, route.as_ref())),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "stops": stops,
                "route": route,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
