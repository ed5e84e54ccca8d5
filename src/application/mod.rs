// Application layer - Session lifecycle and chart state
pub mod chart_renderer;
pub mod monitor_backend;
pub mod session_controller;
