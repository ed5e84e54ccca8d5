// HTTP client for the signal monitoring backend
use crate::application::monitor_backend::MonitorBackend;
use crate::domain::error::MonitorError;
use crate::domain::monitor::{MonitorId, MonitorRequest};
use crate::domain::sample::{parse_timestamp, SamplePoint};
use crate::infrastructure::config::BackendSettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpMonitorBackend {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct StartBody<'a> {
    ssid: &'a str,
    duration: u64,
    interval: u64,
}

#[derive(Debug, Deserialize)]
struct StartResponse {
    monitor_id: MonitorId,
}

#[derive(Debug, Deserialize)]
struct DataResponse {
    #[serde(default)]
    data: Option<Vec<RawSample>>,
}

#[derive(Debug, Deserialize)]
struct RawSample {
    timestamp: String,
    signal: f64,
}

impl HttpMonitorBackend {
    pub fn new(settings: &BackendSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn data_url(&self, id: &MonitorId) -> String {
        format!(
            "{}/get_monitoring_data/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    async fn read_json<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T, MonitorError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MonitorError::Transport(format!(
                "backend returned {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| MonitorError::Transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| MonitorError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl MonitorBackend for HttpMonitorBackend {
    async fn start(&self, request: &MonitorRequest) -> Result<MonitorId, MonitorError> {
        let url = format!("{}/monitor_signal", self.base_url);
        let body = StartBody {
            ssid: &request.ssid,
            duration: request.duration_secs,
            interval: request.interval_secs,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MonitorError::Transport(e.to_string()))?;

        let started: StartResponse = Self::read_json(response).await?;
        Ok(started.monitor_id)
    }

    async fn fetch_samples(&self, id: &MonitorId) -> Result<Vec<SamplePoint>, MonitorError> {
        let response = self
            .client
            .get(self.data_url(id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| MonitorError::Transport(e.to_string()))?;

        let payload: DataResponse = Self::read_json(response).await?;

        let mut points = Vec::new();
        for raw in payload.data.unwrap_or_default() {
            match parse_timestamp(&raw.timestamp) {
                Some(ts) => points.push(SamplePoint::new(ts, raw.signal)),
                None => tracing::warn!("Skipping sample with bad timestamp '{}'", raw.timestamp),
            }
        }

        Ok(points)
    }
}
