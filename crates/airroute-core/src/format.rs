//! Output format handling for airroute
//!
//! Supports two output formats:
//! - human: the sentence and table layout printed by the CLI
//! - json: stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::graph::Route;
use crate::tree::Tree;

/// Output format for airroute commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(RouteError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// `Shortest route from A to C: A -> B -> C. The length is 8. The cost is 8.`
pub fn route_sentence(from: &str, to: &str, route: Option<&Route>) -> String {
    match route {
        Some(route) => format!(
            "Shortest route from {} to {}: {}. The length is {}. The cost is {}.",
            from, to, route, route.distance, route.cost
        ),
        None => format!("Shortest route from {} to {}: None", from, to),
    }
}

/// Sentence for an exact-stops query
pub fn stops_sentence(from: &str, to: &str, stops: usize, route: Option<&Route>) -> String {
    let noun = if stops == 1 { "stop" } else { "stops" };
    match route {
        Some(route) => format!(
            "The shortest route from {} to {} with {} {}: {}. The length is {}. The cost is {}.",
            from, to, stops, noun, route, route.distance, route.cost
        ),
        None => format!(
            "Shortest route from {} to {} with {} {}: None",
            from, to, stops, noun
        ),
    }
}

/// Header plus one `path<TAB>length<TAB>cost` row per route
pub fn region_table(from: &str, region: &str, routes: &[Route]) -> String {
    let mut out = format!(
        "The shortest paths from {} to {} state airports are:\n\nPath\tLength\tCost\n",
        from, region
    );
    for route in routes {
        out.push_str(&format!("{}\t{}\t{}\n", route, route.distance, route.cost));
    }
    out
}

/// Edge table and total for a spanning tree
pub fn tree_table(tree: &Tree) -> String {
    let mut out = String::from("Minimal Spanning Tree\nEdge\tWeight\n");
    for (key, cost) in tree.edges() {
        out.push_str(&format!("{}\t{}\n", key, cost));
    }
    out.push_str(&format!("Total Cost of MST: {}\n", tree.total_cost()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, UndirectedGraph};

    fn route(airports: &[&str], distance: u64, cost: u64) -> Route {
        Route {
            airports: airports.iter().map(|s| s.to_string()).collect(),
            distance,
            cost,
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(
            "human".parse::<OutputFormat>().unwrap(),
            OutputFormat::Human
        );
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format() {
        let err = "records".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, RouteError::UnknownFormat(_)));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Human.to_string(), "human");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_route_sentence() {
        let r = route(&["A", "B", "C"], 8, 8);
        assert_eq!(
            route_sentence("A", "C", Some(&r)),
            "Shortest route from A to C: A -> B -> C. The length is 8. The cost is 8."
        );
        assert_eq!(
            route_sentence("A", "D", None),
            "Shortest route from A to D: None"
        );
    }

    #[test]
    fn test_stops_sentence_pluralization() {
        let r = route(&["A", "B", "C"], 2, 3);
        assert_eq!(
            stops_sentence("A", "C", 1, Some(&r)),
            "The shortest route from A to C with 1 stop: A -> B -> C. The length is 2. The cost is 3."
        );
        assert_eq!(
            stops_sentence("A", "C", 2, None),
            "Shortest route from A to C with 2 stops: None"
        );
    }

    #[test]
    fn test_region_table() {
        let table = region_table("A", "GA", &[route(&["A", "B"], 2, 20)]);
        assert!(table.starts_with("The shortest paths from A to GA state airports are:"));
        assert!(table.contains("Path\tLength\tCost\n"));
        assert!(table.ends_with("A -> B\t2\t20\n"));
    }

    #[test]
    fn test_tree_table() {
        let mut graph = Graph::new();
        for code in ["A", "B", "C"] {
            graph.add_vertex(code, "XX");
        }
        graph.add_edge("A", "B", 5, 5).unwrap();
        graph.add_edge("B", "C", 3, 3).unwrap();
        graph.add_edge("A", "C", 10, 10).unwrap();
        let tree = Tree::prim(&UndirectedGraph::from_graph(&graph));

        assert_eq!(
            tree_table(&tree),
            "Minimal Spanning Tree\nEdge\tWeight\nA - B\t5\nB - C\t3\nTotal Cost of MST: 8\n"
        );
    }
}
