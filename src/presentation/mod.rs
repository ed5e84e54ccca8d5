// Presentation layer - Dashboard panel HTTP surface
pub mod app_state;
pub mod handlers;
