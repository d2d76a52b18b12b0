use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;

/// Backend row identifier.
///
/// The database hands out integer keys, but nothing on the client depends
/// on that, so the id is kept as its textual form. Deserializes from either
/// a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for AssetId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(AssetId(s)),
            Value::Number(n) => Ok(AssetId(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "asset id must be a number or string, got {other}"
            ))),
        }
    }
}

/// One holding as returned by `GET /api/portfolio`.
///
/// Every field is optional on the wire. Missing numbers default to zero so
/// a partial row still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    #[serde(default)]
    pub id: Option<AssetId>,

    /// ISIN or ticker, used as the asset key and for the quote link.
    #[serde(default)]
    pub isin: String,

    #[serde(default)]
    pub asset_name: String,

    /// Unit price paid at purchase.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub purchase_value: f64,

    /// Money invested in the asset.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub amount: f64,

    /// Latest unit price fetched by the backend.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub current_value: f64,

    /// `amount` adjusted by the profit/loss percentage.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_money: f64,

    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub profit_loss_percentage: Option<f64>,

    /// Category used for grouping (e.g. "Stocks", "Funds").
    #[serde(default)]
    pub investment_type: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Investment {
    pub fn new(isin: impl Into<String>, asset_name: impl Into<String>) -> Self {
        Self {
            isin: isin.into(),
            asset_name: asset_name.into(),
            ..Self::default()
        }
    }

    /// Category label, falling back to "Uncategorized".
    #[must_use]
    pub fn category(&self) -> &str {
        match self.investment_type.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => "Uncategorized",
        }
    }
}
