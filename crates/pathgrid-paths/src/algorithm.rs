use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The search strategy to run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Algorithm {
    /// Unweighted breadth-first search.
    Bfs,
    /// Uniform-cost search.
    Dijkstra,
    /// Heuristic best-first search with the Manhattan estimate.
    #[default]
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::Bfs, Self::Dijkstra, Self::Astar];

    /// Select by wire name: `"bfs"` and `"dijkstra"` pick those strategies;
    /// every other name, `"astar"` included, selects A*.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bfs" => Self::Bfs,
            "dijkstra" => Self::Dijkstra,
            _ => Self::Astar,
        }
    }

    /// The wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::Astar => "astar",
        }
    }
}

impl FromStr for Algorithm {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names() {
        assert_eq!(Algorithm::from_name("bfs"), Algorithm::Bfs);
        assert_eq!(Algorithm::from_name("dijkstra"), Algorithm::Dijkstra);
        assert_eq!(Algorithm::from_name("astar"), Algorithm::Astar);
    }

    #[test]
    fn unknown_names_fall_back_to_astar() {
        for name in ["", "BFS", "greedy", "Dijkstra "] {
            assert_eq!(Algorithm::from_name(name), Algorithm::Astar, "{name:?}");
        }
        assert_eq!("whatever".parse::<Algorithm>(), Ok(Algorithm::Astar));
    }

    #[test]
    fn names_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algo.name()), algo);
            assert_eq!(algo.to_string(), algo.name());
        }
    }
}
