use serde::{Deserialize, Serialize};

use super::investment::Investment;
use super::lenient;

/// Aggregate row summarizing all holdings, computed by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of `amount` over all holdings.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub quantity: f64,

    /// Sum of `total_money` over all holdings.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub money: f64,

    /// Sum of `purchase_value` over all holdings.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub purchase_value: f64,
}

/// The holdings and totals of one successful portfolio load.
///
/// Replaced wholesale on every load. Nothing is merged with a previous
/// snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub investments: Vec<Investment>,
    pub totals: Totals,
}

impl PortfolioSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.investments.len()
    }
}
