use async_trait::async_trait;

use crate::errors::DashboardError;
use crate::models::api::{MutationResponse, PortfolioResponse, UpdateAssetsResponse};
use crate::models::asset_input::{AssetUpdate, NewAsset};
use crate::models::investment::AssetId;

/// The portfolio backend as seen by the dashboard.
///
/// `HttpPortfolioApi` talks to the real REST endpoints; tests and hosts
/// with their own transport plug in another implementation. Each call is a
/// single request with no retry. A failure is returned to the caller, which
/// decides how to surface it.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PortfolioApi: Send + Sync {
    /// `GET /portfolio`: every holding plus the aggregate totals.
    async fn get_portfolio(&self) -> Result<PortfolioResponse, DashboardError>;

    /// `POST /update-assets`: ask the backend to re-price every asset.
    async fn update_assets(&self) -> Result<UpdateAssetsResponse, DashboardError>;

    /// `POST /add-asset`
    async fn add_asset(&self, asset: &NewAsset) -> Result<MutationResponse, DashboardError>;

    /// `POST /edit-asset` with body `{id, ...update}`.
    async fn edit_asset(
        &self,
        id: &AssetId,
        update: &AssetUpdate,
    ) -> Result<MutationResponse, DashboardError>;
}
