// Backend trait for signal monitoring sessions
use crate::domain::error::MonitorError;
use crate::domain::monitor::{MonitorId, MonitorRequest};
use crate::domain::sample::SamplePoint;
use async_trait::async_trait;

#[async_trait]
pub trait MonitorBackend: Send + Sync {
    /// Ask the backend to begin sampling a network; returns the session id it assigned
    async fn start(&self, request: &MonitorRequest) -> Result<MonitorId, MonitorError>;

    /// Fetch samples gathered since the previous poll. No new samples is an empty vec.
    async fn fetch_samples(&self, id: &MonitorId) -> Result<Vec<SamplePoint>, MonitorError>;
}
