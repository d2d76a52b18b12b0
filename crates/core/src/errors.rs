use thiserror::Error;

/// Unified error type for the entire portfolio-dashboard-core library.
/// Every public fallible function returns `Result<T, DashboardError>`.
#[derive(Debug, Error)]
pub enum DashboardError {
    // ── Transport ───────────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Backend ─────────────────────────────────────────────────────
    /// The backend answered but reported `success: false`.
    #[error("API error ({endpoint}): {message}")]
    Api { endpoint: String, message: String },

    // ── Input / Configuration ───────────────────────────────────────
    #[error("Asset validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl DashboardError {
    /// True for failures where the server could not be reached or its
    /// answer could not be understood.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DashboardError::Network(_)
                | DashboardError::HttpStatus { .. }
                | DashboardError::Deserialization(_)
        )
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return DashboardError::Deserialization(e.to_string());
        }
        if let Some(status) = e.status() {
            let endpoint = e
                .url()
                .map(|u| u.path().to_string())
                .unwrap_or_default();
            return DashboardError::HttpStatus {
                endpoint,
                status: status.as_u16(),
            };
        }
        DashboardError::Network(e.to_string())
    }
}
