//! Disjoint sets over airport codes

use std::collections::HashMap;

/// Union-find with path compression.
///
/// There is no union by rank or size, so a hostile union order can build
/// long chains before `find` flattens them. Fine for flight networks.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    index: HashMap<String, usize>,
    parent: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    /// One singleton set per item; repeated items are ignored
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut uf = Self::default();
        for item in items {
            let item = item.into();
            if uf.index.contains_key(&item) {
                continue;
            }
            let id = uf.parent.len();
            uf.index.insert(item, id);
            uf.parent.push(id);
            uf.sets += 1;
        }
        uf
    }

    /// Representative of the set containing `item`
    pub fn find(&mut self, item: &str) -> Option<usize> {
        let id = *self.index.get(item)?;
        Some(self.root(id))
    }

    fn root(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = id;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` if they were already joined or either is unknown.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if root_a == root_b {
            return false;
        }
        self.parent[root_a] = root_b;
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, a: &str, b: &str) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
