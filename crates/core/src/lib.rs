pub mod client;
pub mod errors;
pub mod models;
pub mod services;
pub mod view;

use std::sync::Arc;

use log::{debug, info, warn};

use client::http::HttpPortfolioApi;
use client::traits::PortfolioApi;
use errors::DashboardError;
use models::{
    analytics::{AllocationSlice, CategoryAllocation, CategorySummary, InvestmentCategory},
    api::{MutationResponse, UpdateAssetsResponse},
    asset_input::{AssetUpdate, NewAsset},
    banner::BannerKind,
    control::{Control, ControlState},
    investment::{AssetId, Investment},
    portfolio::{PortfolioSnapshot, Totals},
    settings::Settings,
};
use services::{
    analytics_service::AnalyticsService, banner_service::BannerService,
    render_service::RenderService,
};
use view::clock::{Clock, SystemClock};
use view::page::Page;

pub const UPDATE_LABEL: &str = "Update";
pub const UPDATING_LABEL: &str = "Updating...";
pub const CONNECTION_ERROR: &str =
    "Could not connect to the server. Make sure the API is running.";
pub const UPDATE_CONNECTION_ERROR: &str = "Error connecting to the server";
const UNKNOWN_ERROR: &str = "Unknown";

/// The dashboard's view controller.
///
/// Owns the holdings and totals of the last successful load and drives a
/// [`Page`]: every load replaces the whole table, every failure becomes a
/// banner. Operations take `&mut self`, so a controller runs one of them at
/// a time; the host decides what to do with activations that arrive while
/// one is in flight.
#[must_use]
pub struct PortfolioDashboard<P: Page> {
    api: Box<dyn PortfolioApi>,
    page: P,
    clock: Arc<dyn Clock>,
    settings: Settings,
    snapshot: PortfolioSnapshot,
    render_service: RenderService,
    banner_service: BannerService,
    analytics_service: AnalyticsService,
}

impl<P: Page + std::fmt::Debug> std::fmt::Debug for PortfolioDashboard<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioDashboard")
            .field("investments", &self.snapshot.investments.len())
            .field("totals", &self.snapshot.totals)
            .field("banners", &self.banner_service.active().len())
            .field("page", &self.page)
            .finish()
    }
}

impl<P: Page> PortfolioDashboard<P> {
    /// Dashboard talking to the REST API described by `settings`.
    pub fn connect(settings: Settings, page: P) -> Result<Self, DashboardError> {
        settings.validate()?;
        let api = HttpPortfolioApi::new(settings.clone());
        Ok(Self::new(Box::new(api), page, settings))
    }

    /// Dashboard over any `PortfolioApi`, using the wall clock.
    pub fn new(api: Box<dyn PortfolioApi>, page: P, settings: Settings) -> Self {
        Self::with_clock(api, page, settings, Arc::new(SystemClock))
    }

    pub fn with_clock(
        api: Box<dyn PortfolioApi>,
        page: P,
        settings: Settings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api,
            page,
            clock,
            render_service: RenderService::new(&settings),
            banner_service: BannerService::new(settings.banner_ttl_secs),
            analytics_service: AnalyticsService::new(),
            snapshot: PortfolioSnapshot::default(),
            settings,
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Load the portfolio once, then hook up the page's buttons.
    pub async fn init(&mut self) {
        // A failed first load is already on screen as a banner.
        let _ = self.load_portfolio_data().await;
        self.page.bind_controls(&Control::ALL);
        self.page
            .set_control_state(Control::UpdateAssets, &ControlState::enabled(UPDATE_LABEL));
    }

    /// Run the action behind a page button.
    pub async fn handle(&mut self, control: Control) {
        debug!("Control activated: {control}");
        match control {
            Control::UpdateAssets => {
                let _ = self.update_assets().await;
            }
            Control::AddAsset => self.open_add_asset_window(),
            Control::EditAsset => self.open_edit_asset_window(),
        }
    }

    // ── Loading & Rendering ─────────────────────────────────────────

    /// Fetch the portfolio and, on success, replace the in-memory state and
    /// re-render. On failure the previous render stays as it is and an
    /// error banner is shown.
    pub async fn load_portfolio_data(&mut self) -> Result<(), DashboardError> {
        self.page.set_loading(true);
        let result = self.api.get_portfolio().await;
        self.page.set_loading(false);

        match result {
            Ok(resp) if resp.success => {
                info!("Loaded {} investments", resp.investments.len());
                self.snapshot = resp.into_snapshot();
                self.render_table();
                self.render_totals();
                self.update_ui();
                Ok(())
            }
            Ok(resp) => {
                let message = resp.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                warn!("Portfolio load rejected by backend: {message}");
                self.show_error(format!("Failed to load data: {message}"));
                Err(DashboardError::Api {
                    endpoint: client::http::PORTFOLIO_PATH.to_string(),
                    message,
                })
            }
            Err(e) => {
                self.show_error(CONNECTION_ERROR);
                Err(e)
            }
        }
    }

    /// Replace the whole table body from the current holdings.
    pub fn render_table(&mut self) {
        debug!("Rendering {} rows", self.snapshot.investments.len());
        let html = self.render_service.table_body(&self.snapshot.investments);
        self.page.set_table_body(&html);
    }

    pub fn render_totals(&mut self) {
        let html = self.render_service.totals_row(&self.snapshot.totals);
        self.page.set_totals_row(&html);
    }

    /// Refresh the investment counter.
    pub fn update_ui(&mut self) {
        self.page.set_investment_count(self.snapshot.investments.len());
    }

    // ── Actions ─────────────────────────────────────────────────────

    /// Ask the backend to re-price every asset.
    ///
    /// The update button is disabled while the request is in flight and
    /// re-enabled once it settles, whatever the outcome. The backend only
    /// answers after it has stored the new prices, so a successful answer is
    /// followed directly by a reload.
    pub async fn update_assets(&mut self) -> Result<UpdateAssetsResponse, DashboardError> {
        self.page.set_control_state(
            Control::UpdateAssets,
            &ControlState::disabled(UPDATING_LABEL),
        );
        let result = self.api.update_assets().await;
        self.page
            .set_control_state(Control::UpdateAssets, &ControlState::enabled(UPDATE_LABEL));

        match result {
            Ok(resp) if resp.success => {
                info!(
                    "Asset update finished: {} updated, {} failed",
                    resp.updated_count,
                    resp.failed_count()
                );
                let message = resp
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("{} assets updated", resp.updated_count));
                self.show_message(format!("✅ {message}"), BannerKind::Success);
                if resp.failed_count() > 0 {
                    self.show_error(format!(
                        "{} assets could not be updated",
                        resp.failed_count()
                    ));
                }
                // Reload failures surface as their own banner.
                let _ = self.load_portfolio_data().await;
                Ok(resp)
            }
            Ok(resp) => {
                let message = resp
                    .error
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                warn!("Asset update rejected by backend: {message}");
                self.show_error(format!("Update failed: {message}"));
                Err(DashboardError::Api {
                    endpoint: client::http::UPDATE_ASSETS_PATH.to_string(),
                    message,
                })
            }
            Err(e) => {
                self.show_error(UPDATE_CONNECTION_ERROR);
                Err(e)
            }
        }
    }

    /// Submit a new holding, then reload on success.
    pub async fn add_asset(&mut self, asset: NewAsset) -> Result<MutationResponse, DashboardError> {
        if let Err(e) = asset.validate() {
            self.show_error(e.to_string());
            return Err(e);
        }
        let result = self.api.add_asset(&asset).await;
        let fallback = format!("Asset '{}' added", asset.asset_name);
        self.finish_mutation(client::http::ADD_ASSET_PATH, result, fallback)
            .await
    }

    /// Submit changes to an existing holding, then reload on success.
    pub async fn edit_asset(
        &mut self,
        id: &AssetId,
        update: AssetUpdate,
    ) -> Result<MutationResponse, DashboardError> {
        if let Err(e) = update.validate() {
            self.show_error(e.to_string());
            return Err(e);
        }
        let result = self.api.edit_asset(id, &update).await;
        let fallback = format!("Asset {} updated", update.isin);
        self.finish_mutation(client::http::EDIT_ASSET_PATH, result, fallback)
            .await
    }

    async fn finish_mutation(
        &mut self,
        endpoint: &str,
        result: Result<MutationResponse, DashboardError>,
        fallback: String,
    ) -> Result<MutationResponse, DashboardError> {
        match result {
            Ok(resp) if resp.success => {
                let message = resp.message.clone().unwrap_or(fallback);
                info!("{endpoint}: {message}");
                self.show_message(format!("✅ {message}"), BannerKind::Success);
                let _ = self.load_portfolio_data().await;
                Ok(resp)
            }
            Ok(resp) => {
                let message = resp
                    .error
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                warn!("{endpoint} rejected by backend: {message}");
                self.show_error(format!("Error: {message}"));
                Err(DashboardError::Api {
                    endpoint: endpoint.to_string(),
                    message,
                })
            }
            Err(e) => {
                self.show_error(UPDATE_CONNECTION_ERROR);
                Err(e)
            }
        }
    }

    /// Open the add-asset form in its own window.
    pub fn open_add_asset_window(&mut self) {
        self.page.open_window(&self.settings.add_window);
    }

    /// Open the edit-asset form in its own window.
    pub fn open_edit_asset_window(&mut self) {
        self.page.open_window(&self.settings.edit_window);
    }

    // ── Banners ─────────────────────────────────────────────────────

    /// Show a banner that removes itself after the configured TTL.
    pub fn show_message(&mut self, text: impl Into<String>, kind: BannerKind) {
        let banner = self.banner_service.push(kind, text, self.clock.now());
        let html = self.render_service.banner(&banner);
        self.page.show_banner(&banner, &html);
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.show_message(text, BannerKind::Error);
    }

    /// Remove every banner whose TTL has elapsed. Hosts call this from a
    /// timer. Returns how many were removed.
    pub fn expire_banners(&mut self) -> usize {
        let expired = self.banner_service.expire(self.clock.now());
        for banner in &expired {
            self.page.remove_banner(banner);
        }
        expired.len()
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[must_use]
    pub fn investments(&self) -> &[Investment] {
        &self.snapshot.investments
    }

    #[must_use]
    pub fn totals(&self) -> &Totals {
        &self.snapshot.totals
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// Banners currently on screen, oldest first.
    #[must_use]
    pub fn active_banners(&self) -> &[models::banner::Banner] {
        self.banner_service.active()
    }

    /// Per-category totals of the loaded holdings.
    #[must_use]
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        self.analytics_service
            .category_summaries(&self.snapshot.investments)
    }

    /// Share of total money per loaded holding, largest first.
    #[must_use]
    pub fn asset_allocation(&self) -> Vec<AllocationSlice> {
        self.analytics_service
            .asset_allocation(&self.snapshot.investments)
    }

    /// Loaded holdings sorted into the fixed categories.
    #[must_use]
    pub fn categorized(&self) -> Vec<(InvestmentCategory, Vec<&Investment>)> {
        self.analytics_service.categorize(&self.snapshot.investments)
    }

    /// Pie chart breakdown of the loaded holdings.
    #[must_use]
    pub fn category_allocation(&self) -> Vec<CategoryAllocation> {
        self.analytics_service
            .category_allocation(&self.snapshot.investments)
    }
}
