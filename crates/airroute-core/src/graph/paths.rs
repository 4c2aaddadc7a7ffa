//! Results of a single-source shortest-path search

use crate::error::{Result, RouteError};
use crate::graph::types::Route;
use std::collections::BTreeMap;

/// Distance label for airports the search never reached
pub const UNREACHED: u64 = u64::MAX;

/// Per-airport search labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Label {
    pub(crate) distance: u64,
    pub(crate) cost: u64,
    pub(crate) hops: usize,
    pub(crate) predecessor: Option<String>,
}

impl Label {
    pub(crate) fn origin() -> Self {
        Self {
            distance: 0,
            cost: 0,
            hops: 0,
            predecessor: None,
        }
    }

    pub(crate) fn unreached() -> Self {
        Self {
            distance: UNREACHED,
            cost: UNREACHED,
            hops: 0,
            predecessor: None,
        }
    }

    fn is_reached(&self) -> bool {
        self.distance != UNREACHED
    }
}

/// Snapshot of one search from a fixed origin
///
/// Holds codes and copied labels only; the graph it was computed from can be
/// dropped.
#[derive(Debug, Clone)]
pub struct Paths {
    origin: String,
    labels: BTreeMap<String, Label>,
    by_region: BTreeMap<String, Vec<String>>,
    settled: Vec<String>,
}

impl Paths {
    pub(crate) fn new(
        origin: String,
        labels: BTreeMap<String, Label>,
        by_region: BTreeMap<String, Vec<String>>,
        settled: Vec<String>,
    ) -> Self {
        Self {
            origin,
            labels,
            by_region,
            settled,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Best distance to `code`, or `None` if unknown or unreached
    pub fn distance(&self, code: &str) -> Option<u64> {
        self.labels
            .get(code)
            .filter(|l| l.is_reached())
            .map(|l| l.distance)
    }

    /// Cost accumulated along the best-distance route to `code`
    pub fn cost(&self, code: &str) -> Option<u64> {
        self.labels
            .get(code)
            .filter(|l| l.is_reached())
            .map(|l| l.cost)
    }

    /// Flights taken along the best-distance route to `code`
    pub fn hops(&self, code: &str) -> Option<usize> {
        self.labels
            .get(code)
            .filter(|l| l.is_reached())
            .map(|l| l.hops)
    }

    pub fn predecessor(&self, code: &str) -> Option<&str> {
        self.labels.get(code)?.predecessor.as_deref()
    }

    pub fn is_reachable(&self, code: &str) -> bool {
        code == self.origin || self.predecessor(code).is_some()
    }

    /// Airports in the order they were expanded by the search
    pub fn settled(&self) -> &[String] {
        &self.settled
    }

    /// Reconstruct the route from the origin to `code`.
    ///
    /// Returns `Ok(None)` when `code` was never reached. The origin itself
    /// yields a single-airport route.
    pub fn path_to(&self, code: &str) -> Result<Option<Route>> {
        let label = self
            .labels
            .get(code)
            .ok_or_else(|| RouteError::unknown_airport(code))?;
        if code != self.origin && label.predecessor.is_none() {
            return Ok(None);
        }

        let mut airports = vec![code.to_string()];
        let mut current = code;
        while let Some(prev) = self.predecessor(current) {
            airports.push(prev.to_string());
            current = prev;
        }
        airports.reverse();

        Ok(Some(Route {
            airports,
            distance: label.distance,
            cost: label.cost,
        }))
    }

    /// Routes to every reachable airport in `region`, in region order.
    ///
    /// The origin and unreachable airports are skipped; an unknown region
    /// yields no routes.
    pub fn paths_to_region(&self, region: &str) -> Vec<Route> {
        let Some(codes) = self.by_region.get(region) else {
            return Vec::new();
        };
        codes
            .iter()
            .filter(|code| **code != self.origin)
            .filter_map(|code| self.path_to(code).ok().flatten())
            .collect()
    }
}
