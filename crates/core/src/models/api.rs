use serde::{Deserialize, Serialize};

use super::investment::Investment;
use super::lenient;
use super::portfolio::{PortfolioSnapshot, Totals};

// ── Backend response bodies ─────────────────────────────────────────

/// Body of `GET /api/portfolio`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub investments: Vec<Investment>,

    #[serde(default)]
    pub totals: Totals,

    #[serde(default)]
    pub error: Option<String>,

    /// Server-side traceback on 500s.
    #[serde(default)]
    pub details: Option<String>,
}

impl PortfolioResponse {
    /// Split a successful response into the snapshot the dashboard keeps.
    #[must_use]
    pub fn into_snapshot(self) -> PortfolioSnapshot {
        PortfolioSnapshot {
            investments: self.investments,
            totals: self.totals,
        }
    }
}

/// Body of `POST /api/update-assets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAssetsResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub updated_count: u32,

    /// Per-asset failures; `null` when every asset updated.
    #[serde(default)]
    pub errors: Option<Vec<String>>,

    #[serde(default)]
    pub error: Option<String>,
}

impl UpdateAssetsResponse {
    /// Number of assets the backend reported as failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.errors.as_ref().map_or(0, Vec::len)
    }
}

/// Body of `POST /api/add-asset` and `POST /api/edit-asset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    /// The stored row, when the backend echoes it back.
    #[serde(default)]
    pub data: Option<Investment>,

    #[serde(default)]
    pub error: Option<String>,
}
