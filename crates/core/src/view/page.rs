use crate::models::banner::Banner;
use crate::models::control::{Control, ControlState, WindowSpec};

/// The surface the dashboard renders into.
///
/// A browser host maps each call onto the document (`#investments-body`,
/// `#totals-row`, `#investments-count`, the control buttons, the message
/// container and `window.open`). `MemoryPage` keeps everything in memory
/// for headless rendering. Calls are fire-and-forget; a host that lacks an
/// element simply ignores the call.
pub trait Page {
    /// Show or hide the loading indicator.
    fn set_loading(&mut self, loading: bool);

    /// Replace the whole table body with `html`.
    fn set_table_body(&mut self, html: &str);

    /// Replace the contents of the totals row with `html`.
    fn set_totals_row(&mut self, html: &str);

    fn set_investment_count(&mut self, count: usize);

    fn set_control_state(&mut self, control: Control, state: &ControlState);

    /// Route activations of `controls` back to `PortfolioDashboard::handle`.
    fn bind_controls(&mut self, controls: &[Control]);

    /// Add a banner to the message container, creating it if needed.
    fn show_banner(&mut self, banner: &Banner, html: &str);

    /// Remove a banner; the container goes away with its last banner.
    fn remove_banner(&mut self, banner: &Banner);

    fn open_window(&mut self, window: &WindowSpec);
}
