use crate::error::Result;
use crate::graph::directed::Graph;
use crate::graph::paths::{Label, Paths, UNREACHED};
use crate::graph::types::Route;
use std::collections::{BTreeMap, HashSet};

/// State tracked during a label-correcting search
struct SearchState {
    labels: BTreeMap<String, Label>,
    visited: HashSet<String>,
    settled: Vec<String>,
}

impl SearchState {
    fn new(graph: &Graph, origin: &str) -> Self {
        let labels = graph
            .codes()
            .map(|code| {
                let label = if code == origin {
                    Label::origin()
                } else {
                    Label::unreached()
                };
                (code.to_string(), label)
            })
            .collect();
        Self {
            labels,
            visited: HashSet::new(),
            settled: Vec::new(),
        }
    }

    /// Unvisited, non-terminal airport with the smallest finite distance.
    ///
    /// Labels are walked in code order and only a strictly smaller distance
    /// replaces the current pick, so ties go to the smallest code. Terminal
    /// airports still receive labels but are never expanded.
    fn next_frontier(&self, graph: &Graph) -> Option<String> {
        let mut best: Option<(&str, u64)> = None;
        for (code, label) in &self.labels {
            if label.distance >= best.map_or(UNREACHED, |(_, d)| d) {
                continue;
            }
            if self.visited.contains(code) {
                continue;
            }
            if graph.airport(code).map_or(true, |a| a.is_terminal()) {
                continue;
            }
            best = Some((code.as_str(), label.distance));
        }
        best.map(|(code, _)| code.to_string())
    }

    fn into_paths(self, graph: &Graph, origin: &str) -> Paths {
        Paths::new(
            origin.to_string(),
            self.labels,
            graph.region_index().clone(),
            self.settled,
        )
    }
}

/// Core search loop shared by both variants.
///
/// `accept(neighbor, current)` may veto a relaxation that would otherwise
/// improve `neighbor`'s distance.
fn search<F>(graph: &Graph, origin: &str, accept: F) -> Result<Paths>
where
    F: Fn(&str, &Label) -> bool,
{
    crate::ensure_airport!(graph, origin);

    let mut state = SearchState::new(graph, origin);
    let mut current = Some(origin.to_string());
    let mut relaxations = 0usize;

    while let Some(code) = current {
        let Some(from) = state.labels.get(&code).cloned() else {
            break;
        };

        for flight in graph.neighbors(&code)? {
            if state.visited.contains(&flight.destination) {
                continue;
            }
            let candidate = from.distance.saturating_add(u64::from(flight.distance));
            let Some(label) = state.labels.get_mut(&flight.destination) else {
                continue;
            };
            if candidate < label.distance && accept(&flight.destination, &from) {
                label.distance = candidate;
                label.cost = from.cost.saturating_add(u64::from(flight.cost));
                label.hops = from.hops + 1;
                label.predecessor = Some(code.clone());
                relaxations += 1;
            }
        }

        state.visited.insert(code.clone());
        state.settled.push(code);
        current = state.next_frontier(graph);
    }

    tracing::debug!(
        settled = state.settled.len(),
        relaxations,
        "search finished"
    );
    Ok(state.into_paths(graph, origin))
}

/// Shortest routes by distance from `origin` to every airport
///
/// Linear-scan Dijkstra: the frontier is chosen by scanning all labels
/// instead of a heap. Cost is accumulated along the best-distance route and
/// is not minimized on its own.
#[tracing::instrument(skip(graph), fields(airports = graph.len()))]
pub fn find_paths_from(graph: &Graph, origin: &str) -> Result<Paths> {
    search(graph, origin, |_, _| true)
}

/// Shortest-distance search where `to` may only be entered from an airport
/// reached with exactly `stops` flights.
///
/// This is "exactly `stops` intermediate airports on the final approach",
/// not "at most `stops`": a cheaper route with fewer stops is rejected
/// rather than kept. Relaxations into every other airport are unrestricted.
#[tracing::instrument(skip(graph), fields(airports = graph.len()))]
pub fn find_paths_with_stops(graph: &Graph, origin: &str, to: &str, stops: usize) -> Result<Paths> {
    crate::ensure_airport!(graph, to);
    search(graph, origin, |neighbor, current| {
        neighbor != to || current.hops == stops
    })
}

/// Route from `origin` to `to` with exactly `stops` intermediate airports
///
/// Returns `Ok(None)` when no such route is found, including when
/// `origin == to`.
pub fn find_path_with_stops(
    graph: &Graph,
    origin: &str,
    to: &str,
    stops: usize,
) -> Result<Option<Route>> {
    let paths = find_paths_with_stops(graph, origin, to, stops)?;
    if origin == to {
        return Ok(None);
    }
    paths.path_to(to)
}
