pub mod analytics;
pub mod api;
pub mod asset_input;
pub mod banner;
pub mod control;
pub mod investment;
pub mod portfolio;
pub mod settings;

mod lenient;
