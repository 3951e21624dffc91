//! The two search engines. Searches never move elements, so `swaps` stays 0
//! throughout; only the comparison counter grows.

mod binary;
mod linear;

pub use binary::binary_search;
pub use linear::linear_search;
