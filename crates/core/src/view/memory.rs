use std::collections::HashMap;

use crate::models::banner::Banner;
use crate::models::control::{Control, ControlState, WindowSpec};
use super::page::Page;

/// In-memory `Page`. Holds the latest markup for each container and a
/// history of state changes, so callers can inspect what a browser would
/// show.
#[derive(Debug, Default, Clone)]
pub struct MemoryPage {
    pub table_body: Option<String>,
    pub totals_row: Option<String>,
    pub investment_count: Option<usize>,
    pub loading: bool,
    pub bound_controls: Vec<Control>,
    pub controls: HashMap<Control, ControlState>,
    /// Every state a control went through, in order.
    pub control_history: Vec<(Control, ControlState)>,
    /// Banners currently visible, oldest first, with their markup.
    pub banners: Vec<(Banner, String)>,
    pub opened_windows: Vec<WindowSpec>,
    /// Number of times the table body was replaced.
    pub table_renders: usize,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `<tr>` rows in the current table body.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.table_body
            .as_deref()
            .map_or(0, |html| html.matches("<tr>").count())
    }

    #[must_use]
    pub fn control(&self, control: Control) -> Option<&ControlState> {
        self.controls.get(&control)
    }

    /// Text of the visible banners, oldest first.
    #[must_use]
    pub fn banner_texts(&self) -> Vec<&str> {
        self.banners.iter().map(|(b, _)| b.text.as_str()).collect()
    }

    /// Whether the message container would exist.
    #[must_use]
    pub fn has_message_container(&self) -> bool {
        !self.banners.is_empty()
    }
}

impl Page for MemoryPage {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_table_body(&mut self, html: &str) {
        self.table_body = Some(html.to_string());
        self.table_renders += 1;
    }

    fn set_totals_row(&mut self, html: &str) {
        self.totals_row = Some(html.to_string());
    }

    fn set_investment_count(&mut self, count: usize) {
        self.investment_count = Some(count);
    }

    fn set_control_state(&mut self, control: Control, state: &ControlState) {
        self.controls.insert(control, state.clone());
        self.control_history.push((control, state.clone()));
    }

    fn bind_controls(&mut self, controls: &[Control]) {
        for control in controls {
            if !self.bound_controls.contains(control) {
                self.bound_controls.push(*control);
            }
        }
    }

    fn show_banner(&mut self, banner: &Banner, html: &str) {
        self.banners.push((banner.clone(), html.to_string()));
    }

    fn remove_banner(&mut self, banner: &Banner) {
        self.banners.retain(|(b, _)| b.id != banner.id);
    }

    fn open_window(&mut self, window: &WindowSpec) {
        self.opened_windows.push(window.clone());
    }
}
