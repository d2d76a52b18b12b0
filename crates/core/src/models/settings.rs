use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

use super::control::WindowSpec;

/// Separators used when rendering money amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: char,

    /// Integer parts shorter than this many digits are not grouped.
    /// es-ES uses 5, so `1234,50` but `12.345,50`.
    pub min_grouping_digits: usize,
}

impl NumberFormat {
    /// Spanish (Spain) conventions.
    #[must_use]
    pub fn es_es() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '.',
            min_grouping_digits: 5,
        }
    }

    /// English (US) conventions.
    #[must_use]
    pub fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            min_grouping_digits: 4,
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::es_es()
    }
}

/// Dashboard configuration, supplied by the host page.
///
/// Every field has a default, so a host only needs to send what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the REST API, without trailing slash.
    pub api_base: String,

    /// Suffix appended to every money amount (e.g., "€").
    pub currency_symbol: String,

    pub number_format: NumberFormat,

    /// How long a banner stays on the page.
    pub banner_ttl_secs: u64,

    /// Per-request timeout. `None` waits as long as the transport allows.
    pub request_timeout_secs: Option<u64>,

    /// Prefix of the per-row quote link; the ISIN is appended.
    pub quote_url_base: String,

    pub add_window: WindowSpec,
    pub edit_window: WindowSpec,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:3000/api".to_string(),
            currency_symbol: "€".to_string(),
            number_format: NumberFormat::default(),
            banner_ttl_secs: 5,
            request_timeout_secs: None,
            quote_url_base: "https://finance.yahoo.com/quote/".to_string(),
            add_window: WindowSpec::new("/add-asset-window", "Add Asset", 600, 500),
            edit_window: WindowSpec::new("/edit-asset-window", "Edit Asset", 600, 400),
        }
    }
}

impl Settings {
    /// Parse a (possibly partial) JSON settings document and validate it.
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| DashboardError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        let base = self.api_base.trim();
        if base.is_empty() {
            return Err(DashboardError::InvalidSettings(
                "api_base must not be empty".into(),
            ));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(DashboardError::InvalidSettings(format!(
                "api_base '{base}' must be an absolute http(s) URL"
            )));
        }
        if self.banner_ttl_secs == 0 {
            return Err(DashboardError::InvalidSettings(
                "banner_ttl_secs must be at least 1".into(),
            ));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(DashboardError::InvalidSettings(
                "request_timeout_secs must be at least 1 when set".into(),
            ));
        }
        if self.number_format.decimal_separator == self.number_format.group_separator {
            return Err(DashboardError::InvalidSettings(
                "decimal and group separators must differ".into(),
            ));
        }
        for window in [&self.add_window, &self.edit_window] {
            if window.width == 0 || window.height == 0 {
                return Err(DashboardError::InvalidSettings(format!(
                    "window '{}' must have a non-zero size",
                    window.url
                )));
            }
        }
        Ok(())
    }

    /// `api_base` joined with an endpoint path, e.g. `portfolio`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
