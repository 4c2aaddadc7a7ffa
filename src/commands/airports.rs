//! `airroute airports`

use airroute_core::error::Result;
use airroute_core::format::OutputFormat;
use airroute_core::graph::{Airport, Graph};

pub fn handle_airports(graph: &Graph, format: OutputFormat, region: Option<&str>) -> Result<()> {
    let airports: Vec<&Airport> = match region {
        Some(region) => graph
            .region(region)
            .iter()
            .filter_map(|code| graph.airport(code))
            .collect(),
        None => graph.airports().collect(),
    };

    match format {
        OutputFormat::Human => {
            for airport in &airports {
                println!(
                    "{}\t{}\tin={}\tout={}",
                    airport.code(),
                    airport.region(),
                    airport.inbound(),
                    airport.outbound()
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = airports
                .iter()
                .map(|airport| {
                    serde_json::json!({
                        "code": airport.code(),
                        "region": airport.region(),
                        "inbound": airport.inbound(),
                        "outbound": airport.outbound(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
