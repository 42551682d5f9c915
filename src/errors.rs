use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Domain-specific error types for the strategy analyzer.
/// The engine itself is total over a constructed `Strategy`; everything here
/// comes from request shape, contract fields, or process setup.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    InvalidContract(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(String),
}

impl AnalyzerError {
    /// Errors caused by the caller's payload, as opposed to the process.
    #[inline]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalyzerError::Parse(_) | AnalyzerError::InvalidRequest(_) | AnalyzerError::InvalidContract(_)
        )
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::Parse(e.to_string())
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(e: std::io::Error) -> Self {
        AnalyzerError::Io(e.to_string())
    }
}

impl IntoResponse for AnalyzerError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
