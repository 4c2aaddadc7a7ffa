use serde::Serialize;
use std::fmt;

/// Integer weight carried by a flight (distance or fare)
pub type Weight = u32;

/// A one-way flight to another airport
///
/// The destination is stored by code; resolve it through the owning
/// [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flight {
    pub destination: String,
    pub distance: Weight,
    pub cost: Weight,
}

impl Flight {
    pub fn new(destination: impl Into<String>, distance: Weight, cost: Weight) -> Self {
        Self {
            destination: destination.into(),
            distance,
            cost,
        }
    }
}

/// An airport and the flights departing from it
#[derive(Debug, Clone, Serialize)]
pub struct Airport {
    pub(crate) code: String,
    pub(crate) region: String,
    pub(crate) inbound: usize,
    pub(crate) outbound: usize,
    pub(crate) flights: Vec<Flight>,
}

impl Airport {
    pub(crate) fn new(code: String, region: String) -> Self {
        Self {
            code,
            region,
            inbound: 0,
            outbound: 0,
            flights: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Region (state) tag used for grouping
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Number of flights arriving at this airport
    pub fn inbound(&self) -> usize {
        self.inbound
    }

    /// Number of flights departing from this airport
    pub fn outbound(&self) -> usize {
        self.outbound
    }

    pub fn connections(&self) -> usize {
        self.inbound + self.outbound
    }

    /// Departing flights in insertion order
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn flight_to(&self, destination: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.destination == destination)
    }

    /// An airport with no departing flights
    pub fn is_terminal(&self) -> bool {
        self.flights.is_empty()
    }
}

/// One side of a symmetric undirected connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndirectedEdge {
    pub to: String,
    pub cost: Weight,
}

/// An undirected connection reported once, with `a < b`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub a: String,
    pub b: String,
    pub cost: Weight,
}

/// Key for an unordered pair of airport codes
///
/// The endpoints are stored sorted, so `EdgeKey::new("B", "A")` and
/// `EdgeKey::new("A", "B")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EdgeKey {
    a: String,
    b: String,
}

impl EdgeKey {
    pub fn new(x: &str, y: &str) -> Self {
        let (a, b) = if x <= y { (x, y) } else { (y, x) };
        Self {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    /// Lexicographically smaller endpoint
    pub fn a(&self) -> &str {
        &self.a
    }

    /// Lexicographically larger endpoint
    pub fn b(&self) -> &str {
        &self.b
    }

    /// Both codes joined without a separator (`"ATLBOS"`)
    pub fn concat(&self) -> String {
        format!("{}{}", self.a, self.b)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.a, self.b)
    }
}

/// A reconstructed route from the search origin to one airport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub airports: Vec<String>,
    pub distance: u64,
    pub cost: u64,
}

impl Route {
    /// Number of flights taken
    pub fn hops(&self) -> usize {
        self.airports.len().saturating_sub(1)
    }

    /// Number of intermediate airports
    pub fn stops(&self) -> usize {
        self.airports.len().saturating_sub(2)
    }

    pub fn origin(&self) -> Option<&str> {
        self.airports.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.airports.last().map(String::as_str)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.airports.join(" -> "))
    }
}
