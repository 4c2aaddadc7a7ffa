//! Minimum spanning trees over the undirected flight projection
//!
//! Two builders share one result type:
//! - `prim_mst`: grows a single tree from the first airport by code
//! - `kruskal_mst`: merges components cheapest-connection-first

pub mod union_find;

use crate::error::RouteError;
use crate::graph::types::{EdgeKey, Weight};
use crate::graph::UndirectedGraph;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

pub use union_find::UnionFind;

/// Spanning tree construction algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    #[default]
    Prim,
    Kruskal,
}

impl FromStr for MstAlgorithm {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prim" => Ok(MstAlgorithm::Prim),
            "kruskal" => Ok(MstAlgorithm::Kruskal),
            other => Err(RouteError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstAlgorithm::Prim => write!(f, "prim"),
            MstAlgorithm::Kruskal => write!(f, "kruskal"),
        }
    }
}

/// Selected connections, keyed by unordered endpoint pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    edges: BTreeMap<EdgeKey, Weight>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(ug: &UndirectedGraph, algorithm: MstAlgorithm) -> Self {
        match algorithm {
            MstAlgorithm::Prim => Self::prim(ug),
            MstAlgorithm::Kruskal => Self::kruskal(ug),
        }
    }

    pub fn prim(ug: &UndirectedGraph) -> Self {
        let mut tree = Self::new();
        tree.prim_mst(ug);
        tree
    }

    pub fn kruskal(ug: &UndirectedGraph) -> Self {
        let mut tree = Self::new();
        tree.kruskal_mst(ug);
        tree
    }

    /// Replace the contents with Prim's tree over `ug`.
    ///
    /// Starts from the first airport in code order and picks the cheapest
    /// outside airport by linear scan, ties going to the smaller code. On a
    /// disconnected projection only the start airport's component is
    /// spanned.
    #[tracing::instrument(skip_all, fields(airports = ug.vertex_count()))]
    pub fn prim_mst(&mut self, ug: &UndirectedGraph) {
        self.edges.clear();
        let vertices: Vec<&str> = ug.vertices().collect();
        let Some(&start) = vertices.first() else {
            return;
        };

        // A missing key means no known connection yet
        let mut key: HashMap<&str, Weight> = HashMap::new();
        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut in_tree: HashSet<&str> = HashSet::new();
        key.insert(start, 0);

        for _ in 0..vertices.len() {
            let mut next: Option<(&str, Weight)> = None;
            for &v in &vertices {
                if in_tree.contains(v) {
                    continue;
                }
                if let Some(&k) = key.get(v) {
                    if next.map_or(true, |(_, best)| k < best) {
                        next = Some((v, k));
                    }
                }
            }
            let Some((u, cost)) = next else {
                tracing::debug!(spanned = in_tree.len(), "projection is disconnected");
                break;
            };

            in_tree.insert(u);
            if let Some(&from) = parent.get(u) {
                self.edges.insert(EdgeKey::new(from, u), cost);
            }

            for edge in ug.neighbors(u).unwrap_or_default() {
                let v = edge.to.as_str();
                if in_tree.contains(v) {
                    continue;
                }
                if key.get(v).map_or(true, |&k| edge.cost < k) {
                    key.insert(v, edge.cost);
                    parent.insert(v, u);
                }
            }
        }

        tracing::debug!(edges = self.edges.len(), total = self.total_cost(), "prim done");
    }

    /// Replace the contents with Kruskal's forest over `ug`.
    ///
    /// Connections are taken in `unique_edges()` order, stably sorted by
    /// cost; one whose endpoints are already joined would close a cycle and
    /// is skipped.
    #[tracing::instrument(skip_all, fields(airports = ug.vertex_count()))]
    pub fn kruskal_mst(&mut self, ug: &UndirectedGraph) {
        self.edges.clear();
        let mut candidates = ug.unique_edges();
        candidates.sort_by_key(|c| c.cost);

        let mut sets = UnionFind::new(ug.vertices());
        for connection in candidates {
            if sets.union(&connection.a, &connection.b) {
                self.edges
                    .insert(EdgeKey::new(&connection.a, &connection.b), connection.cost);
            } else {
                tracing::trace!(a = %connection.a, b = %connection.b, "cycle edge skipped");
            }
        }

        tracing::debug!(
            edges = self.edges.len(),
            components = sets.set_count(),
            total = self.total_cost(),
            "kruskal done"
        );
    }

    /// Selected connections ordered by key
    pub fn edges(&self) -> impl Iterator<Item = (&EdgeKey, Weight)> {
        self.edges.iter().map(|(k, c)| (k, *c))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_cost(&self) -> u64 {
        self.edges.values().map(|c| u64::from(*c)).sum()
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.edges.contains_key(&EdgeKey::new(a, b))
    }

    pub fn cost(&self, a: &str, b: &str) -> Option<Weight> {
        self.edges.get(&EdgeKey::new(a, b)).copied()
    }
}
