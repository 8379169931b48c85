use gloo::net::http::Request;
use serde_json::Value;
use shared::{ErrorDetail, MonthlyReport};
use thiserror::Error;

/// Generic failure message for the report query, used when the server gives
/// no usable `detail`.
pub const REPORT_LOAD_FAILED: &str = "Failed to load report";
/// Generic failure message for the config load.
pub const CONFIG_LOAD_FAILED: &str = "Failed to load config";
/// Generic failure message for the config save.
pub const CONFIG_SAVE_FAILED: &str = "Failed to save config";

/// Failure kinds for backend calls.
///
/// Every variant's display form is the exact status-line message shown to
/// the operator; callers never need to post-process it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Input rejected locally, before any request was made.
    #[error("{0}")]
    InvalidInput(String),
    /// The request never completed (network failure, CORS, abort).
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-2xx status; the message is the
    /// server's `detail` when present, else a generic fallback.
    #[error("{0}")]
    Server(String),
    /// A 2xx response whose body did not parse as expected.
    #[error("{0}")]
    BadBody(String),
}

/// Extract the server's `detail` message from an error body, falling back
/// to the given generic message when the body is not parseable JSON or
/// lacks a `detail` field.
pub fn detail_or(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorDetail>(body)
        .map(|err| err.detail)
        .unwrap_or_else(|_| fallback.to_string())
}

/// API client for the report backend.
///
/// Calls are single-attempt with no retry and no timeout. Overlapping calls
/// are not guarded against: whichever response resolves last wins.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client issuing same-origin requests, matching the served page.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Client with an explicit base URL, for running against a backend on
    /// another origin.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the computed attendance report for one month.
    pub async fn monthly_report(&self, year: i32, month: u32) -> Result<MonthlyReport, ApiError> {
        let url = format!(
            "{}/api/report/monthly?year={}&month={}",
            self.base_url, year, month
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{}: {}", REPORT_LOAD_FAILED, e)))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server(detail_or(&body, REPORT_LOAD_FAILED)));
        }

        response
            .json::<MonthlyReport>()
            .await
            .map_err(|_| ApiError::BadBody(REPORT_LOAD_FAILED.to_string()))
    }

    /// URL the browser navigates to for the server-side spreadsheet export.
    /// The response is a file stream handled entirely by the browser.
    pub fn export_url(&self, year: i32, month: u32) -> String {
        format!(
            "{}/api/report/monthly/export?year={}&month={}",
            self.base_url, year, month
        )
    }

    /// Fetch the current config document as an opaque JSON value.
    pub async fn load_config(&self) -> Result<Value, ApiError> {
        let url = format!("{}/api/config", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{}: {}", CONFIG_LOAD_FAILED, e)))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server(detail_or(&body, CONFIG_LOAD_FAILED)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|_| ApiError::BadBody(CONFIG_LOAD_FAILED.to_string()))
    }

    /// Store a config document. Returns the server's canonical echo, which
    /// may differ from what was sent.
    pub async fn save_config(&self, config: &Value) -> Result<Value, ApiError> {
        let url = format!("{}/api/config", self.base_url);

        let response = Request::put(&url)
            .json(config)
            .map_err(|e| ApiError::Network(format!("{}: {}", CONFIG_SAVE_FAILED, e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{}: {}", CONFIG_SAVE_FAILED, e)))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server(detail_or(&body, CONFIG_SAVE_FAILED)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|_| ApiError::BadBody(CONFIG_SAVE_FAILED.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
