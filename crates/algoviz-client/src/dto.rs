//! Wire DTOs for the backend's JSON contract.
//!
//! Shapes mirror the service's request/response models field for field;
//! [`Step`], [`Complexity`] and friends come straight from `algoviz-model`,
//! which already serializes in the wire layout.

use algoviz_model::{Algorithm, Category, Complexity, OperationEstimates, Step};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body of `POST /execute-algorithm`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteAlgorithmRequest {
    pub algorithm_type: Algorithm,
    pub array: Vec<i64>,
    /// Required by the service for `linear`/`binary`, omitted otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_target: Option<i64>,
}

impl ExecuteAlgorithmRequest {
    /// Request a sort run.
    pub fn sort(algorithm_type: Algorithm, array: Vec<i64>) -> Self {
        Self {
            algorithm_type,
            array,
            search_target: None,
        }
    }

    /// Request a search run.
    pub fn search(algorithm_type: Algorithm, array: Vec<i64>, target: i64) -> Self {
        Self {
            algorithm_type,
            array,
            search_target: Some(target),
        }
    }
}

/// Response of `POST /execute-algorithm`: the full trace plus metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteAlgorithmResponse {
    pub algorithm_type: Algorithm,
    pub algorithm_name: String,
    pub steps: Vec<Step>,
    pub complexity: Complexity,
    pub total_comparisons: u64,
    pub total_swaps: u64,
    /// Server-side ISO-8601 execution timestamp, passed through verbatim.
    pub timestamp: String,
    pub category: Category,
}

/// Body of `POST /analyze-complexity`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeComplexityRequest {
    pub algorithm_type: Algorithm,
    pub array_size: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeComplexityResponse {
    pub algorithm_type: Algorithm,
    pub algorithm_name: String,
    pub complexity: Complexity,
    pub estimated_operations: OperationEstimates,
    pub array_size: usize,
}

/// Body of `POST /ai/query`. The assistant is an opaque remote service; the
/// optional `context` is the wire id of the algorithm currently on screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiQueryRequest {
    pub user_query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiQueryResponse {
    pub response: String,
    pub timestamp: String,
}

/// One row of `GET /history`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub algorithm_type: Algorithm,
    pub array_size: usize,
    pub comparisons: u64,
    pub swaps: u64,
    pub timestamp: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntry>,
    pub total: u64,
}

/// Response of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}
