// Application state for HTTP handlers
use crate::application::session_controller::SessionController;
use crate::infrastructure::config::MonitorDefaults;

#[derive(Clone)]
pub struct AppState {
    pub controller: SessionController,
    pub defaults: MonitorDefaults,
}
