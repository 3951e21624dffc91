//! HTTP client for the AlgoViz backend service.
//!
//! The backend executes algorithm runs, answers AI-assistant queries, and
//! keeps an execution history; this crate speaks its JSON contract (the
//! `algorithm_type` / `search_target` / `user_query` field names are fixed
//! for interoperability) and surfaces every failure as a recoverable
//! [`ClientError`]. Nothing here is retried automatically, and nothing here
//! can affect trace generation — the engine never calls out.

mod client;
mod dto;

pub use client::{ApiClient, ClientError, DEFAULT_BASE_URL};
pub use dto::{
    AiQueryRequest, AiQueryResponse, AnalyzeComplexityRequest, AnalyzeComplexityResponse,
    ExecuteAlgorithmRequest, ExecuteAlgorithmResponse, HealthResponse, HistoryEntry,
    HistoryResponse,
};
