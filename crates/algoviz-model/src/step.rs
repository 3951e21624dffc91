use serde::{Deserialize, Serialize};

use crate::Element;

/// One recorded snapshot of the working array.
///
/// Counters are cumulative across the whole trace (`swaps` stays 0 for search
/// algorithms). Steps are immutable once recorded; playback only moves a
/// cursor over them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub array: Vec<Element>,
    pub comparisons: u64,
    pub swaps: u64,
    pub description: String,
}

/// The complete ordered step sequence produced by one engine invocation,
/// with the final cumulative totals.
///
/// A trace is owned by the session that requested it and is discarded whole
/// on reset or re-run, never merged with a previous one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub steps: Vec<Step>,
    pub comparisons: u64,
    pub swaps: u64,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The final snapshot, if any step was recorded.
    pub fn last_step(&self) -> Option<&Step> {
        self.steps.last()
    }
}
