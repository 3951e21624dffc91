use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use algoviz_model::Algorithm;

use crate::dto::{
    AiQueryRequest, AiQueryResponse, AnalyzeComplexityRequest, AnalyzeComplexityResponse,
    ExecuteAlgorithmRequest, ExecuteAlgorithmResponse, HealthResponse, HistoryResponse,
};

/// Base URL used when `ALGOVIZ_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

const BASE_URL_ENV: &str = "ALGOVIZ_API_URL";

/// A failed call to the remote service.
///
/// Both variants are recoverable: callers show a message and keep their
/// session (and any in-flight or finished trace) intact. Calls are never
/// retried automatically.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service could not be reached or the body could not be read.
    #[error("remote service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("remote service returned {status}: {detail}")]
    Service { status: u16, detail: String },
}

/// Error body the service attaches to non-success statuses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Asynchronous client for the AlgoViz backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Read the base URL from `ALGOVIZ_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::new(std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute an algorithm remotely and fetch its full step trace.
    pub async fn execute_algorithm(
        &self,
        request: &ExecuteAlgorithmRequest,
    ) -> Result<ExecuteAlgorithmResponse, ClientError> {
        self.post("/execute-algorithm", request).await
    }

    /// Fetch complexity metadata and operation estimates for one input size.
    pub async fn analyze_complexity(
        &self,
        algorithm_type: Algorithm,
        array_size: usize,
    ) -> Result<AnalyzeComplexityResponse, ClientError> {
        self.post(
            "/analyze-complexity",
            &AnalyzeComplexityRequest {
                algorithm_type,
                array_size,
            },
        )
        .await
    }

    /// Ask the AI assistant a free-form question, optionally scoped to the
    /// algorithm currently on screen.
    pub async fn ask_ai(
        &self,
        user_query: impl Into<String>,
        context: Option<Algorithm>,
    ) -> Result<AiQueryResponse, ClientError> {
        self.post(
            "/ai/query",
            &AiQueryRequest {
                user_query: user_query.into(),
                context: context.map(|algorithm| algorithm.id().to_owned()),
            },
        )
        .await
    }

    /// Fetch recent executions, optionally filtered by algorithm.
    pub async fn history(
        &self,
        algorithm_type: Option<Algorithm>,
        limit: u32,
    ) -> Result<HistoryResponse, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(algorithm) = algorithm_type {
            query.push(("algorithm_type", algorithm.id().to_owned()));
        }
        query.push(("limit", limit.to_string()));

        let response = self
            .http
            .get(format!("{}/history", self.base_url))
            .query(&query)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            // FastAPI-style error bodies carry a `detail` field; fall back to
            // the bare status line when the body is something else.
            let detail = match response.json::<ErrorBody>().await {
                Ok(body) => body.detail,
                Err(_) => status.to_string(),
            };
            log::warn!("remote service returned {status}: {detail}");
            return Err(ClientError::Service {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response.json().await?)
    }
}
