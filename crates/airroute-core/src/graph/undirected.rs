use crate::graph::directed::Graph;
use crate::graph::types::{Connection, EdgeKey, UndirectedEdge, Weight};
use std::collections::{BTreeMap, HashSet};

/// Symmetric projection of a [`Graph`]
///
/// Every pair of airports joined by a flight in either direction gets
/// exactly one connection, stored on both sides, priced at the cheaper of
/// the flights observed between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    edges: BTreeMap<String, Vec<UndirectedEdge>>,
}

impl UndirectedGraph {
    #[tracing::instrument(skip(graph), fields(airports = graph.len()))]
    pub fn from_graph(graph: &Graph) -> Self {
        let mut edges: BTreeMap<String, Vec<UndirectedEdge>> = graph
            .codes()
            .map(|code| (code.to_string(), Vec::new()))
            .collect();

        for airport in graph.airports() {
            let u = airport.code();
            for flight in airport.flights() {
                let v = flight.destination.as_str();
                if u == v {
                    tracing::debug!(airport = u, "self-loop ignored in projection");
                    continue;
                }
                if lower_cost(&mut edges, u, v, flight.cost) {
                    lower_cost(&mut edges, v, u, flight.cost);
                } else {
                    connect(&mut edges, u, v, flight.cost);
                    connect(&mut edges, v, u, flight.cost);
                }
            }
        }

        let projection = Self { edges };
        tracing::debug!(
            connections = projection.edge_count(),
            "undirected projection built"
        );
        projection
    }

    /// Adjacency lists keyed by airport code
    pub fn edges(&self) -> &BTreeMap<String, Vec<UndirectedEdge>> {
        &self.edges
    }

    pub fn neighbors(&self, code: &str) -> Option<&[UndirectedEdge]> {
        self.edges.get(code).map(Vec::as_slice)
    }

    /// Airport codes in code order
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct connections
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn cost_between(&self, a: &str, b: &str) -> Option<Weight> {
        self.edges
            .get(a)?
            .iter()
            .find(|e| e.to == b)
            .map(|e| e.cost)
    }

    /// Each connection once, as `(a, b, cost)` with `a < b`, in the order
    /// first met while walking airports in code order.
    pub fn unique_edges(&self) -> Vec<Connection> {
        let mut seen: HashSet<EdgeKey> = HashSet::new();
        let mut out = Vec::with_capacity(self.edge_count());
        for (from, bucket) in &self.edges {
            for edge in bucket {
                let key = EdgeKey::new(from, &edge.to);
                if seen.insert(key.clone()) {
                    out.push(Connection {
                        a: key.a().to_string(),
                        b: key.b().to_string(),
                        cost: edge.cost,
                    });
                }
            }
        }
        out
    }
}

impl From<&Graph> for UndirectedGraph {
    fn from(graph: &Graph) -> Self {
        Self::from_graph(graph)
    }
}

/// Lower the stored `u -> v` cost to `cost` if cheaper; returns whether
/// the connection exists.
fn lower_cost(
    edges: &mut BTreeMap<String, Vec<UndirectedEdge>>,
    u: &str,
    v: &str,
    cost: Weight,
) -> bool {
    match edges
        .get_mut(u)
        .and_then(|bucket| bucket.iter_mut().find(|e| e.to == v))
    {
        Some(edge) => {
            edge.cost = edge.cost.min(cost);
            true
        }
        None => false,
    }
}

fn connect(edges: &mut BTreeMap<String, Vec<UndirectedEdge>>, u: &str, v: &str, cost: Weight) {
    edges.entry(u.to_string()).or_default().push(UndirectedEdge {
        to: v.to_string(),
        cost,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        for code in ["A", "B", "C"] {
            graph.add_vertex(code, "XX");
        }
        graph.add_edge("A", "B", 5, 5).unwrap();
        graph.add_edge("B", "C", 3, 3).unwrap();
        graph.add_edge("A", "C", 10, 10).unwrap();
        graph
    }

    #[test]
    fn test_projection_of_triangle() {
        let ug = UndirectedGraph::from_graph(&triangle());
        assert_eq!(ug.vertex_count(), 3);
        assert_eq!(ug.edge_count(), 3);
        assert_eq!(ug.cost_between("A", "B"), Some(5));
        assert_eq!(ug.cost_between("B", "A"), Some(5));
        assert_eq!(ug.cost_between("B", "C"), Some(3));
        assert_eq!(ug.cost_between("C", "A"), Some(10));
    }

    #[test]
    fn test_reciprocal_flights_merge_to_min_cost() {
        let mut graph = Graph::new();
        graph.add_vertex("A", "XX");
        graph.add_vertex("B", "XX");
        graph.add_edge("A", "B", 100, 90).unwrap();
        graph.add_edge("B", "A", 100, 40).unwrap();

        let ug = UndirectedGraph::from_graph(&graph);
        assert_eq!(ug.neighbors("A").unwrap().len(), 1);
        assert_eq!(ug.neighbors("B").unwrap().len(), 1);
        assert_eq!(ug.cost_between("A", "B"), Some(40));
        assert_eq!(ug.cost_between("B", "A"), Some(40));

        // Same result when the cheaper flight comes first
        let mut graph = Graph::new();
        graph.add_vertex("A", "XX");
        graph.add_vertex("B", "XX");
        graph.add_edge("A", "B", 100, 40).unwrap();
        graph.add_edge("B", "A", 100, 90).unwrap();
        let ug = UndirectedGraph::from_graph(&graph);
        assert_eq!(ug.cost_between("A", "B"), Some(40));
        assert_eq!(ug.cost_between("B", "A"), Some(40));
    }

    #[test]
    fn test_isolated_airport_appears() {
        let mut graph = triangle();
        graph.add_vertex("Z", "YY");
        let ug = UndirectedGraph::from_graph(&graph);
        assert_eq!(ug.vertex_count(), 4);
        assert_eq!(ug.neighbors("Z"), Some(&[][..]));
    }

    #[test]
    fn test_self_loop_ignored() {
        let mut graph = Graph::new();
        graph.add_vertex("A", "XX");
        graph.add_edge("A", "A", 1, 1).unwrap();
        let ug = UndirectedGraph::from_graph(&graph);
        assert_eq!(ug.edge_count(), 0);
        assert!(ug.unique_edges().is_empty());
    }

    #[test]
    fn test_unique_edges_once_per_pair() {
        let mut graph = triangle();
        graph.add_edge("C", "A", 10, 7).unwrap();
        graph.add_edge("B", "A", 5, 6).unwrap();
        let ug = UndirectedGraph::from_graph(&graph);

        let unique = ug.unique_edges();
        assert_eq!(
            unique,
            vec![
                Connection {
                    a: "A".into(),
                    b: "B".into(),
                    cost: 5
                },
                Connection {
                    a: "A".into(),
                    b: "C".into(),
                    cost: 7
                },
                Connection {
                    a: "B".into(),
                    b: "C".into(),
                    cost: 3
                },
            ]
        );
    }

    #[test]
    fn test_unique_edges_with_variable_width_codes() {
        let mut graph = Graph::new();
        for code in ["A", "AB", "BC", "C"] {
            graph.add_vertex(code, "XX");
        }
        graph.add_edge("A", "BC", 1, 1).unwrap();
        graph.add_edge("AB", "C", 1, 2).unwrap();

        let ug = UndirectedGraph::from_graph(&graph);
        assert_eq!(ug.unique_edges().len(), 2);
    }

    #[test]
    fn test_symmetric_storage() {
        let ug = UndirectedGraph::from_graph(&triangle());
        for (from, bucket) in ug.edges() {
            for edge in bucket {
                assert_eq!(ug.cost_between(&edge.to, from), Some(edge.cost));
            }
        }
    }
}
