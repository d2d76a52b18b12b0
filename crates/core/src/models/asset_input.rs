use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

use super::investment::AssetId;

/// Form data for `POST /api/add-asset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAsset {
    pub isin: String,
    pub asset_name: String,
    pub purchase_value: f64,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_type: Option<String>,
}

impl NewAsset {
    pub fn new(
        isin: impl Into<String>,
        asset_name: impl Into<String>,
        purchase_value: f64,
        amount: f64,
    ) -> Self {
        Self {
            isin: isin.into().trim().to_string(),
            asset_name: asset_name.into().trim().to_string(),
            purchase_value,
            amount,
            investment_type: None,
        }
    }

    pub fn with_type(mut self, investment_type: impl Into<String>) -> Self {
        self.investment_type = Some(investment_type.into());
        self
    }

    /// The backend rejects empty and zero values for every required field,
    /// so do the same before spending a request on it.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.isin.trim().is_empty() {
            return Err(missing("isin"));
        }
        if self.asset_name.trim().is_empty() {
            return Err(missing("asset_name"));
        }
        check_number("purchase_value", self.purchase_value)?;
        check_number("amount", self.amount)?;
        Ok(())
    }
}

/// Fields of `POST /api/edit-asset`.
///
/// Leaving both numbers out asks the backend to only re-price the asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetUpdate {
    pub isin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl AssetUpdate {
    pub fn new(isin: impl Into<String>) -> Self {
        Self {
            isin: isin.into().trim().to_string(),
            ..Self::default()
        }
    }

    pub fn purchase_value(mut self, value: f64) -> Self {
        self.purchase_value = Some(value);
        self
    }

    pub fn amount(mut self, value: f64) -> Self {
        self.amount = Some(value);
        self
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.isin.trim().is_empty() {
            return Err(missing("isin"));
        }
        if let Some(v) = self.purchase_value {
            if !v.is_finite() {
                return Err(DashboardError::ValidationError(
                    "purchase_value must be a finite number".into(),
                ));
            }
        }
        if let Some(v) = self.amount {
            if !v.is_finite() {
                return Err(DashboardError::ValidationError(
                    "amount must be a finite number".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Wire body of `POST /api/edit-asset`: `{id, ...update}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditAssetRequest<'a> {
    pub id: &'a AssetId,
    #[serde(flatten)]
    pub update: &'a AssetUpdate,
}

fn missing(field: &str) -> DashboardError {
    DashboardError::ValidationError(format!("required field missing: {field}"))
}

fn check_number(field: &str, value: f64) -> Result<(), DashboardError> {
    if !value.is_finite() {
        return Err(DashboardError::ValidationError(format!(
            "{field} must be a finite number"
        )));
    }
    if value == 0.0 {
        return Err(missing(field));
    }
    Ok(())
}
