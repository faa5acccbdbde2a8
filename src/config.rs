use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Boxed grid, one row per line.
    Grid,
    /// Single line, row-major.
    Compact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    TilesOutOfPlace,
    ManhattanDistance,
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::TilesOutOfPlace => write!(f, "tiles-out-of-place"),
            Heuristic::ManhattanDistance => write!(f, "manhattan-distance"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiles" | "tiles-out-of-place" => Ok(Heuristic::TilesOutOfPlace),
            "manhattan" | "manhattan-distance" => Ok(Heuristic::ManhattanDistance),
            _ => Err(format!("Unknown heuristic: {}", s)),
        }
    }
}

/// Bounds after which the search gives up and reports truncation.
///
/// `None` means unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Number of node expansions.
    pub max_iterations: Option<u32>,
    /// Number of nodes in the search tree.
    pub max_nodes: Option<usize>,
    /// Size of the open set - children that don't fit are dropped.
    pub open_capacity: Option<usize>,
}

impl Limits {
    pub fn unbounded() -> Self {
        Limits {
            max_iterations: None,
            max_nodes: None,
            open_capacity: None,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn with_open_capacity(mut self, open_capacity: usize) -> Self {
        self.open_capacity = Some(open_capacity);
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_iterations: Some(100_000),
            max_nodes: Some(1_000_000),
            open_capacity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_names() {
        for &h in &[Heuristic::TilesOutOfPlace, Heuristic::ManhattanDistance] {
            assert_eq!(h.to_string().parse::<Heuristic>(), Ok(h));
        }
        assert_eq!("tiles".parse(), Ok(Heuristic::TilesOutOfPlace));
        assert_eq!("manhattan".parse(), Ok(Heuristic::ManhattanDistance));
        assert!("euclid".parse::<Heuristic>().is_err());
    }

    #[test]
    fn limits_builders() {
        let limits = Limits::unbounded()
            .with_max_iterations(7)
            .with_open_capacity(3);
        assert_eq!(limits.max_iterations, Some(7));
        assert_eq!(limits.max_nodes, None);
        assert_eq!(limits.open_capacity, Some(3));

        let limits = Limits::default().with_max_nodes(10);
        assert_eq!(limits.max_iterations, Some(100_000));
        assert_eq!(limits.max_nodes, Some(10));
    }
}
