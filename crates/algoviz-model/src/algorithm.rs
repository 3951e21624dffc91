use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Complexity;

/// The seven algorithms the visualizer animates.
///
/// The serde representation is the lowercase wire id (`"bubble"`, `"quick"`,
/// ...) used in `algorithm_type` fields throughout the service contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Quick,
    Merge,
    Selection,
    Insertion,
    Linear,
    Binary,
}

/// Whether an algorithm sorts or searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Searching,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown algorithm type: {id}")]
pub struct ParseAlgorithmError {
    pub id: String,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Linear,
        Algorithm::Binary,
    ];

    /// The wire identifier (`"bubble"`, `"linear"`, ...).
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Linear => "linear",
            Algorithm::Binary => "binary",
        }
    }

    /// Human-readable display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Linear => "Linear Search",
            Algorithm::Binary => "Binary Search",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Algorithm::Bubble
            | Algorithm::Quick
            | Algorithm::Merge
            | Algorithm::Selection
            | Algorithm::Insertion => Category::Sorting,
            Algorithm::Linear | Algorithm::Binary => Category::Searching,
        }
    }

    /// True for the two search algorithms, which require a target value.
    pub fn needs_target(self) -> bool {
        self.category() == Category::Searching
    }

    /// Static complexity metadata for this algorithm.
    pub fn complexity(self) -> Complexity {
        Complexity::of(self)
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parses a wire id. Matching is case-insensitive, as the service
    /// lowercases incoming identifiers before dispatch.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "quick" => Ok(Algorithm::Quick),
            "merge" => Ok(Algorithm::Merge),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "linear" => Ok(Algorithm::Linear),
            "binary" => Ok(Algorithm::Binary),
            _ => Err(ParseAlgorithmError { id: s.to_owned() }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_roundtrip_through_fromstr() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("Bubble".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
        assert_eq!("BINARY".parse::<Algorithm>().unwrap(), Algorithm::Binary);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "bogo".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.id, "bogo");
        assert_eq!(err.to_string(), "unknown algorithm type: bogo");
    }

    #[test]
    fn serde_uses_wire_ids() {
        assert_eq!(
            serde_json::to_string(&Algorithm::Insertion).unwrap(),
            "\"insertion\""
        );
        assert_eq!(
            serde_json::from_str::<Algorithm>("\"linear\"").unwrap(),
            Algorithm::Linear
        );
    }

    #[test]
    fn categories() {
        assert_eq!(Algorithm::Merge.category(), Category::Sorting);
        assert_eq!(Algorithm::Binary.category(), Category::Searching);
        assert!(Algorithm::Linear.needs_target());
        assert!(!Algorithm::Quick.needs_target());
    }
}
