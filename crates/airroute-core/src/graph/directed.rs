use crate::error::{Result, RouteError};
use crate::graph::types::{Airport, Flight, Weight};
use std::collections::BTreeMap;

/// Directed flight network
///
/// Owns every airport and, through them, every flight. Airports are kept
/// in code order, which fixes iteration order for every algorithm built on
/// top of the graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    airports: BTreeMap<String, Airport>,
    by_region: BTreeMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an airport.
    ///
    /// Returns `false` and leaves the existing airport untouched if the code
    /// is already present.
    pub fn add_vertex(&mut self, code: impl Into<String>, region: impl Into<String>) -> bool {
        let code = code.into();
        if self.airports.contains_key(&code) {
            tracing::trace!(code = %code, "airport already present");
            return false;
        }
        let region = region.into();
        self.by_region
            .entry(region.clone())
            .or_default()
            .push(code.clone());
        self.airports
            .insert(code.clone(), Airport::new(code, region));
        true
    }

    /// Add a flight from `from` to `to`.
    ///
    /// Only the first flight for an ordered pair is kept: a later insert for
    /// the same pair returns `Ok(false)` and changes nothing.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        distance: Weight,
        cost: Weight,
    ) -> Result<bool> {
        crate::ensure_airport!(self, from);
        crate::ensure_airport!(self, to);

        let depart = self
            .airports
            .get_mut(from)
            .ok_or_else(|| RouteError::unknown_airport(from))?;
        if depart.flight_to(to).is_some() {
            tracing::trace!(from, to, "duplicate flight dropped");
            return Ok(false);
        }
        depart.flights.push(Flight::new(to, distance, cost));
        depart.outbound += 1;

        let arrive = self
            .airports
            .get_mut(to)
            .ok_or_else(|| RouteError::unknown_airport(to))?;
        arrive.inbound += 1;
        Ok(true)
    }

    /// Flights departing from `code`
    pub fn neighbors(&self, code: &str) -> Result<&[Flight]> {
        self.airport(code)
            .map(Airport::flights)
            .ok_or_else(|| RouteError::unknown_airport(code))
    }

    /// Whether `code` has no departing flights
    pub fn is_terminal(&self, code: &str) -> Result<bool> {
        self.airport(code)
            .map(Airport::is_terminal)
            .ok_or_else(|| RouteError::unknown_airport(code))
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    /// Airports in code order
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.airports.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn flight_count(&self) -> usize {
        self.airports.values().map(|a| a.flights.len()).sum()
    }

    /// Airport codes in `region`, in insertion order
    pub fn region(&self, region: &str) -> &[String] {
        self.by_region.get(region).map_or(&[], Vec::as_slice)
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.by_region.keys().map(String::as_str)
    }

    pub(crate) fn region_index(&self) -> &BTreeMap<String, Vec<String>> {
        &self.by_region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut graph = Graph::new();
        graph.add_vertex("ATL", "GA");
        graph.add_vertex("SAV", "GA");
        graph.add_vertex("BOS", "MA");
        graph.add_edge("ATL", "BOS", 946, 120).unwrap();
        graph.add_edge("ATL", "SAV", 215, 80).unwrap();
        graph.add_edge("BOS", "ATL", 946, 110).unwrap();
        graph
    }

    #[test]
    fn test_add_vertex_rejects_duplicate() {
        let mut graph = sample();
        assert!(!graph.add_vertex("ATL", "FL"));
        let atl = graph.airport("ATL").unwrap();
        assert_eq!(atl.region(), "GA");
        assert_eq!(atl.flights().len(), 2);
        assert_eq!(graph.region("FL"), &[] as &[String]);
        assert_eq!(graph.region("GA"), &["ATL".to_string(), "SAV".to_string()]);
    }

    #[test]
    fn test_add_edge_updates_counters() {
        let graph = sample();
        let atl = graph.airport("ATL").unwrap();
        assert_eq!(atl.outbound(), 2);
        assert_eq!(atl.inbound(), 1);
        let sav = graph.airport("SAV").unwrap();
        assert_eq!(sav.outbound(), 0);
        assert_eq!(sav.inbound(), 1);
        assert_eq!(graph.flight_count(), 3);
    }

    #[test]
    fn test_add_edge_first_write_wins() {
        let mut graph = sample();
        assert!(!graph.add_edge("ATL", "BOS", 1, 1).unwrap());

        let flight = graph.airport("ATL").unwrap().flight_to("BOS").unwrap();
        assert_eq!(flight.distance, 946);
        assert_eq!(flight.cost, 120);
        assert_eq!(graph.airport("ATL").unwrap().outbound(), 2);
        assert_eq!(graph.airport("BOS").unwrap().inbound(), 1);
    }

    #[test]
    fn test_add_edge_unknown_airport() {
        let mut graph = sample();
        assert!(matches!(
            graph.add_edge("XXX", "ATL", 1, 1),
            Err(RouteError::UnknownAirport { code }) if code == "XXX"
        ));
        assert!(matches!(
            graph.add_edge("ATL", "YYY", 1, 1),
            Err(RouteError::UnknownAirport { code }) if code == "YYY"
        ));
        assert_eq!(graph.flight_count(), 3);
    }

    #[test]
    fn test_neighbors_and_terminal() {
        let graph = sample();
        assert_eq!(graph.neighbors("ATL").unwrap().len(), 2);
        assert!(graph.neighbors("SAV").unwrap().is_empty());
        assert!(graph.is_terminal("SAV").unwrap());
        assert!(!graph.is_terminal("ATL").unwrap());
        assert!(graph.neighbors("XXX").is_err());
        assert!(graph.is_terminal("XXX").is_err());
    }

    #[test]
    fn test_terminal_iff_no_neighbors() {
        let graph = sample();
        for airport in graph.airports() {
            assert_eq!(
                graph.is_terminal(airport.code()).unwrap(),
                graph.neighbors(airport.code()).unwrap().is_empty()
            );
        }
    }

    #[test]
    fn test_airports_iterate_in_code_order() {
        let graph = sample();
        let codes: Vec<&str> = graph.codes().collect();
        assert_eq!(codes, vec!["ATL", "BOS", "SAV"]);
        let regions: Vec<&str> = graph.regions().collect();
        assert_eq!(regions, vec!["GA", "MA"]);
    }
}
