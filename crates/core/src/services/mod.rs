pub mod analytics_service;
pub mod banner_service;
pub mod format_service;
pub mod render_service;
