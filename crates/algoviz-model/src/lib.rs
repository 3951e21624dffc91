//! `algoviz-model` defines the data structures flowing through an AlgoViz
//! trace: array elements with their visual status, recorded steps, algorithm
//! identifiers, and the static complexity metadata attached to every run.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the trace generation engine (`algoviz-engine`)
//! - the remote service client (`algoviz-client`)
//! - host UI layers via `serde` (JSON-safe schema; the `isComparing`-style
//!   flag names on the wire are the interop contract)

mod algorithm;
mod complexity;
mod element;
mod input;
mod step;

pub use algorithm::{Algorithm, Category, ParseAlgorithmError};
pub use complexity::{estimate_operations, Complexity, OperationEstimates};
pub use element::{Element, ElementStatus};
pub use input::{parse_value_list, random_values, ParseInputError};
pub use step::{Step, Trace};
