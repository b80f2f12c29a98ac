use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx answer. `detail` is the server's own explanation, if it sent one.
    #[error("Server responded with status {status}")]
    Server { status: u16, detail: Option<String> },
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Invalid request url: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        ApiError::Server {
            status: 404,
            detail: Some(detail.into()),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        ApiError::Server {
            status: 400,
            detail: Some(detail.into()),
        }
    }

    /// Text shown to the user. Server details pass through verbatim;
    /// transport and decode internals are replaced by `fallback`.
    pub fn user_text(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_server_reported(&self) -> bool {
        matches!(self, ApiError::Server { .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
