//! `airroute mst`

use std::time::Instant;

use airroute_core::error::Result;
use airroute_core::format::{tree_table, OutputFormat};
use airroute_core::graph::{Graph, UndirectedGraph};
use airroute_core::trace_time;
use airroute_core::tree::{MstAlgorithm, Tree};

pub fn handle_mst(graph: &Graph, format: OutputFormat, algorithm: MstAlgorithm) -> Result<()> {
    let start = Instant::now();
    let ug = UndirectedGraph::from_graph(graph);
    let tree = Tree::build(&ug, algorithm);
    trace_time!(start, "spanning_tree", edges = tree.len());

    match format {
        OutputFormat::Human => print!("{}", tree_table(&tree)),
        OutputFormat::Json => {
            let edges: Vec<_> = tree
                .edges()
                .map(|(key, cost)| {
                    serde_json::json!({
                        "a": key.a(),
                        "b": key.b(),
                        "cost": cost,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "algorithm": algorithm,
                "edges": edges,
                "total_cost": tree.total_cost(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
