use thiserror::Error;

/// Unified error type for the entire route-analyzer-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input ───────────────────────────────────────────────────────
    #[error("{0}")]
    Validation(String),

    // ── API / Network ───────────────────────────────────────────────
    /// A non-2xx response. `message` is the server's `detail` when it sent
    /// one, otherwise the endpoint's generic failure text.
    #[error("{message}")]
    Request {
        endpoint: String,
        status: u16,
        detail: Option<String>,
        message: String,
    },

    #[error("Invalid response data: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(String),

    // ── Settings ────────────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Coarse classification of a [`CoreError`], for callers that only need to
/// branch on the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Request,
    Parse,
    Network,
    Configuration,
}

impl CoreError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Validation(_) => ErrorKind::Validation,
            CoreError::Request { .. } => ErrorKind::Request,
            CoreError::Parse(_) => ErrorKind::Parse,
            CoreError::Network(_) => ErrorKind::Network,
            CoreError::Configuration(_) => ErrorKind::Configuration,
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Parse(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CoreError::Parse(e.to_string())
        } else {
            CoreError::Network(e.to_string())
        }
    }
}
