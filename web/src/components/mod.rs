//! UI components

pub mod analyzer_overlay;
pub mod header;
pub mod results_display;
pub mod upload_area;
