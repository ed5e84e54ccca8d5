// Domain layer - Plain data and invariants
pub mod error;
pub mod monitor;
pub mod network;
pub mod rolling_window;
pub mod sample;
