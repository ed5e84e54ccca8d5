// Monitoring session domain model
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Opaque identifier handed out by the backend when a session starts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonitorId(String);

impl MonitorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonitorStatus {
    Idle,
    Starting,
    Active,
    Completed,
    Failed,
}

/// Parameters of one bounded monitoring run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorRequest {
    pub ssid: String,
    pub duration_secs: u64,
    pub interval_secs: u64,
}

impl MonitorRequest {
    pub fn new(ssid: impl Into<String>, duration_secs: u64, interval_secs: u64) -> Self {
        Self {
            ssid: ssid.into(),
            duration_secs,
            interval_secs,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MonitorSession {
    pub session_id: Option<MonitorId>,
    pub target: Option<String>,
    pub duration_secs: u64,
    pub interval_secs: u64,
    pub status: MonitorStatus,
}

impl MonitorSession {
    pub fn idle() -> Self {
        Self {
            session_id: None,
            target: None,
            duration_secs: 0,
            interval_secs: 0,
            status: MonitorStatus::Idle,
        }
    }

    pub fn starting(request: &MonitorRequest) -> Self {
        Self {
            session_id: None,
            target: Some(request.ssid.clone()),
            duration_secs: request.duration_secs,
            interval_secs: request.interval_secs,
            status: MonitorStatus::Starting,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == MonitorStatus::Active
    }
}

impl Default for MonitorSession {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_session_copies_request() {
        let request = MonitorRequest::new("HomeWifi", 10, 2);
        let session = MonitorSession::starting(&request);

        assert_eq!(session.status, MonitorStatus::Starting);
        assert_eq!(session.target.as_deref(), Some("HomeWifi"));
        assert!(session.session_id.is_none());
        assert_eq!(request.interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_monitor_id_serializes_as_plain_string() {
        let id = MonitorId::new("abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
        assert_eq!(id.to_string(), "abc123");
    }
}
