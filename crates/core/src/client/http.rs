use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::DashboardError;
use crate::models::api::{MutationResponse, PortfolioResponse, UpdateAssetsResponse};
use crate::models::asset_input::{AssetUpdate, EditAssetRequest, NewAsset};
use crate::models::investment::AssetId;
use crate::models::settings::Settings;
use super::traits::PortfolioApi;

pub const PORTFOLIO_PATH: &str = "portfolio";
pub const UPDATE_ASSETS_PATH: &str = "update-assets";
pub const ADD_ASSET_PATH: &str = "add-asset";
pub const EDIT_ASSET_PATH: &str = "edit-asset";

/// `PortfolioApi` over the backend's REST endpoints.
///
/// - `GET /portfolio` treats any non-2xx status as a failure.
/// - The three `POST` endpoints report their own failures as
///   `{success: false, error}` bodies on 4xx/5xx, so their body is parsed
///   whatever the status.
///
/// Every failure is logged before being returned.
pub struct HttpPortfolioApi {
    client: Client,
    settings: Settings,
}

impl HttpPortfolioApi {
    pub fn new(settings: Settings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match settings.request_timeout_secs {
            Some(secs) => builder.timeout(Duration::from_secs(secs)),
            None => builder,
        };
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            settings,
        }
    }

    /// Use a preconfigured `reqwest::Client` (proxies, headers, ...).
    pub fn with_client(client: Client, settings: Settings) -> Self {
        Self { client, settings }
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.settings.api_base
    }

    /// Full URL of an endpoint path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        self.settings.endpoint(path)
    }

    async fn fetch_portfolio(&self) -> Result<PortfolioResponse, DashboardError> {
        let url = self.url(PORTFOLIO_PATH);
        debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DashboardError::HttpStatus {
                endpoint: PORTFOLIO_PATH.to_string(),
                status: status.as_u16(),
            });
        }
        read_json(PORTFOLIO_PATH, resp).await
    }

    async fn post_update_assets(&self) -> Result<UpdateAssetsResponse, DashboardError> {
        let url = self.url(UPDATE_ASSETS_PATH);
        debug!("POST {url}");
        let resp = self.client.post(&url).send().await?;
        read_json(UPDATE_ASSETS_PATH, resp).await
    }

    async fn post_add_asset(&self, asset: &NewAsset) -> Result<MutationResponse, DashboardError> {
        let url = self.url(ADD_ASSET_PATH);
        debug!("POST {url} isin={}", asset.isin);
        let resp = self.client.post(&url).json(asset).send().await?;
        read_json(ADD_ASSET_PATH, resp).await
    }

    async fn post_edit_asset(
        &self,
        id: &AssetId,
        update: &AssetUpdate,
    ) -> Result<MutationResponse, DashboardError> {
        let url = self.url(EDIT_ASSET_PATH);
        debug!("POST {url} id={id} isin={}", update.isin);
        let body = EditAssetRequest { id, update };
        let resp = self.client.post(&url).json(&body).send().await?;
        read_json(EDIT_ASSET_PATH, resp).await
    }
}

/// Read the whole body and decode it, tagging decode failures with the
/// endpoint they came from.
async fn read_json<T: DeserializeOwned>(
    endpoint: &str,
    resp: Response,
) -> Result<T, DashboardError> {
    let status = resp.status();
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        DashboardError::Deserialization(format!(
            "invalid JSON from {endpoint} (HTTP {}): {e}",
            status.as_u16()
        ))
    })
}

fn logged<T>(action: &str, result: Result<T, DashboardError>) -> Result<T, DashboardError> {
    if let Err(e) = &result {
        error!("Error {action}: {e}");
    }
    result
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PortfolioApi for HttpPortfolioApi {
    async fn get_portfolio(&self) -> Result<PortfolioResponse, DashboardError> {
        logged("fetching portfolio", self.fetch_portfolio().await)
    }

    async fn update_assets(&self) -> Result<UpdateAssetsResponse, DashboardError> {
        logged("updating assets", self.post_update_assets().await)
    }

    async fn add_asset(&self, asset: &NewAsset) -> Result<MutationResponse, DashboardError> {
        logged("adding asset", self.post_add_asset(asset).await)
    }

    async fn edit_asset(
        &self,
        id: &AssetId,
        update: &AssetUpdate,
    ) -> Result<MutationResponse, DashboardError> {
        logged("editing asset", self.post_edit_asset(id, update).await)
    }
}
