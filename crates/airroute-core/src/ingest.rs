//! Flight CSV ingestion
//!
//! Expected columns, in order:
//! `Origin_airport,Destination_airport,Origin_city,Destination_city,Distance,Cost`
//!
//! City fields look like `"Atlanta, GA"`; the text after the last comma is
//! used as the airport's region.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::config::IngestConfig;
use crate::error::{Result, RouteError};
use crate::graph::{Graph, Weight};

#[derive(Debug, Deserialize)]
struct FlightRecord {
    origin: String,
    destination: String,
    origin_city: String,
    destination_city: String,
    distance: Weight,
    cost: Weight,
}

/// Counters reported after a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub rows: usize,
    pub flights: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

/// Region tag from a `"City, ST"` field
pub fn region_of(city: &str) -> Option<String> {
    let (_, region) = city.rsplit_once(',')?;
    let region = region.trim();
    (!region.is_empty()).then(|| region.to_string())
}

/// Load a graph from a CSV file
pub fn load_graph(path: &Path, config: &IngestConfig) -> Result<Graph> {
    tracing::debug!(path = %path.display(), "loading flights");
    let file = File::open(path).map_err(|e| {
        RouteError::Other(format!("failed to open {}: {}", path.display(), e))
    })?;
    read_graph(file, config)
}

/// Build a graph from CSV data
pub fn read_graph<R: Read>(reader: R, config: &IngestConfig) -> Result<Graph> {
    let (graph, summary) = read_graph_with_summary(reader, config)?;
    tracing::info!(
        rows = summary.rows,
        airports = graph.len(),
        flights = summary.flights,
        duplicates = summary.duplicates,
        skipped = summary.skipped,
        "flights loaded"
    );
    Ok(graph)
}

/// Build a graph from CSV data and report what was kept
pub fn read_graph_with_summary<R: Read>(
    reader: R,
    config: &IngestConfig,
) -> Result<(Graph, IngestSummary)> {
    let Ok(delimiter) = u8::try_from(config.delimiter) else {
        crate::bail_invalid!("ingest.delimiter", config.delimiter);
    };
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(config.has_headers)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = Graph::new();
    let mut summary = IngestSummary::default();

    for row in csv_reader.records() {
        summary.rows += 1;
        let record = row
            .map_err(|e| {
                let line = e.position().map_or(0, |p| p.line());
                RouteError::invalid_record(line, e)
            })
            .and_then(|row| parse_row(&row));

        let record = match record {
            Ok(record) => record,
            Err(e) if config.skip_invalid => {
                tracing::warn!(error = %e, "skipping row");
                summary.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let (origin_region, destination_region) = match regions(&record) {
            Ok(regions) => regions,
            Err(reason) if config.skip_invalid => {
                tracing::warn!(line = record.line, reason = %reason, "skipping row");
                summary.skipped += 1;
                continue;
            }
            Err(reason) => return Err(RouteError::invalid_record(record.line, reason)),
        };

        let flight = &record.flight;
        graph.add_vertex(flight.origin.as_str(), origin_region);
        graph.add_vertex(flight.destination.as_str(), destination_region);
        if graph.add_edge(
            &flight.origin,
            &flight.destination,
            flight.distance,
            flight.cost,
        )? {
            summary.flights += 1;
        } else {
            summary.duplicates += 1;
        }
    }

    Ok((graph, summary))
}

struct ParsedRow {
    line: u64,
    flight: FlightRecord,
}

fn parse_row(row: &csv::StringRecord) -> Result<ParsedRow> {
    let line = row.position().map_or(0, |p| p.line());
    let flight: FlightRecord = row
        .deserialize(None)
        .map_err(|e| RouteError::invalid_record(line, e))?;
    if flight.origin.is_empty() || flight.destination.is_empty() {
        return Err(RouteError::invalid_record(line, "empty airport code"));
    }
    Ok(ParsedRow { line, flight })
}

fn regions(row: &ParsedRow) -> std::result::Result<(String, String), String> {
    let origin = region_of(&row.flight.origin_city)
        .ok_or_else(|| format!("no region in city {:?}", row.flight.origin_city))?;
    let destination = region_of(&row.flight.destination_city)
        .ok_or_else(|| format!("no region in city {:?}", row.flight.destination_city))?;
    Ok((origin, destination))
}
