pub mod endpoint_display;
pub mod header;
pub mod request_panel;
pub mod response_viewer;
pub mod status_indicator;
pub mod style;
