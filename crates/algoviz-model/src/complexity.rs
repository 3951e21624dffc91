use serde::{Deserialize, Serialize};

use crate::Algorithm;

/// Static complexity metadata attached to every algorithm run.
///
/// The strings are display text ("O(n log n)" etc.); `stable` and `in_place`
/// describe the classic formulation of the algorithm, not a measured run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    pub time_best: String,
    pub time_average: String,
    pub time_worst: String,
    pub space: String,
    pub stable: bool,
    pub in_place: bool,
}

impl Complexity {
    /// The metadata table, keyed by algorithm.
    pub fn of(algorithm: Algorithm) -> Complexity {
        let (time_best, time_average, time_worst, space, stable, in_place) = match algorithm {
            Algorithm::Bubble => ("O(n)", "O(n²)", "O(n²)", "O(1)", true, true),
            Algorithm::Quick => ("O(n log n)", "O(n log n)", "O(n²)", "O(log n)", false, true),
            Algorithm::Merge => ("O(n log n)", "O(n log n)", "O(n log n)", "O(n)", true, false),
            Algorithm::Selection => ("O(n²)", "O(n²)", "O(n²)", "O(1)", false, true),
            Algorithm::Insertion => ("O(n)", "O(n²)", "O(n²)", "O(1)", true, true),
            Algorithm::Linear => ("O(1)", "O(n)", "O(n)", "O(1)", true, true),
            Algorithm::Binary => ("O(1)", "O(log n)", "O(log n)", "O(1)", true, true),
        };
        Complexity {
            time_best: time_best.to_owned(),
            time_average: time_average.to_owned(),
            time_worst: time_worst.to_owned(),
            space: space.to_owned(),
            stable,
            in_place,
        }
    }
}

/// Estimated operation counts for one input size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationEstimates {
    pub best: u64,
    pub average: u64,
    pub worst: u64,
}

/// Estimate how many operations an algorithm performs on an array of
/// `array_size` elements, for the best/average/worst case.
///
/// These are the coarse formulas shown in the complexity panel (n, n²/2, n²,
/// n·log₂n, log₂n), computed in f64 and truncated, not a step-count oracle.
pub fn estimate_operations(algorithm: Algorithm, array_size: usize) -> OperationEstimates {
    let n = array_size as u64;
    let n_log_n = if array_size > 1 {
        (array_size as f64 * (array_size as f64).log2()) as u64
    } else {
        n
    };
    let log_n = if array_size > 1 {
        (array_size as f64).log2() as u64
    } else {
        1
    };

    let (best, average, worst) = match algorithm {
        Algorithm::Bubble => (n, n * n / 2, n * n),
        Algorithm::Quick => (n_log_n, n_log_n, n * n),
        Algorithm::Merge => (n_log_n, n_log_n, n_log_n),
        Algorithm::Selection => (n * n, n * n, n * n),
        Algorithm::Insertion => (n, n * n / 2, n * n),
        Algorithm::Linear => (1, n / 2, n),
        Algorithm::Binary => (1, log_n, log_n),
    };
    OperationEstimates {
        best,
        average,
        worst,
    }
}
