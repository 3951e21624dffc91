use serde::{Deserialize, Serialize};
use thiserror::Error;

use algoviz_model::{Algorithm, Category, Complexity, Element, Step, Trace};

use crate::{searching, sorting};

/// Errors rejected at the dispatch boundary, before any engine runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown algorithm type: {0}")]
    UnknownAlgorithm(String),
    #[error("search_target is required for {}", .0.name())]
    MissingSearchTarget(Algorithm),
}

/// A finished run: the trace plus the static metadata the renderer shows
/// next to it. Each run owns a fresh trace; re-running replaces the previous
/// run wholesale rather than merging into it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub complexity: Complexity,
    pub trace: Trace,
}

impl AlgorithmRun {
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn category(&self) -> Category {
        self.algorithm.category()
    }

    pub fn steps(&self) -> &[Step] {
        &self.trace.steps
    }

    pub fn total_comparisons(&self) -> u64 {
        self.trace.comparisons
    }

    pub fn total_swaps(&self) -> u64 {
        self.trace.swaps
    }
}

/// Run `algorithm` over `values`, producing the trace and its metadata.
///
/// Search algorithms require `target`; sorts ignore it. This is the only
/// fallible surface of the engine — with a well-typed algorithm and target
/// the engines themselves are total.
pub fn run(
    algorithm: Algorithm,
    values: &[i64],
    target: Option<i64>,
) -> Result<AlgorithmRun, DispatchError> {
    let elements = Element::sequence(values);
    let trace = match algorithm {
        Algorithm::Bubble => sorting::bubble_sort(&elements),
        Algorithm::Quick => sorting::quick_sort(&elements),
        Algorithm::Merge => sorting::merge_sort(&elements),
        Algorithm::Selection => sorting::selection_sort(&elements),
        Algorithm::Insertion => sorting::insertion_sort(&elements),
        Algorithm::Linear => {
            let target = target.ok_or(DispatchError::MissingSearchTarget(algorithm))?;
            searching::linear_search(&elements, target)
        }
        Algorithm::Binary => {
            let target = target.ok_or(DispatchError::MissingSearchTarget(algorithm))?;
            searching::binary_search(&elements, target)
        }
    };
    Ok(AlgorithmRun {
        algorithm,
        complexity: algorithm.complexity(),
        trace,
    })
}

/// String-keyed entry point for callers holding a wire identifier.
pub fn run_by_id(id: &str, values: &[i64], target: Option<i64>) -> Result<AlgorithmRun, DispatchError> {
    let algorithm = id
        .parse::<Algorithm>()
        .map_err(|err| DispatchError::UnknownAlgorithm(err.id))?;
    run(algorithm, values, target)
}
