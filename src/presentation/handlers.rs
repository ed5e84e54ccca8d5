// HTTP request handlers
use crate::application::session_controller::MonitorSnapshot;
use crate::domain::error::MonitorError;
use crate::domain::monitor::MonitorRequest;
use crate::domain::network::ObservedNetwork;
use crate::presentation::app_state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;

type ApiResult = Result<Json<MonitorSnapshot>, (StatusCode, String)>;

#[derive(Debug, Deserialize, Default)]
pub struct StartRequest {
    pub ssid: Option<String>,
    pub duration: Option<u64>,
    pub interval: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub ssid: String,
}

/// Discovery event: the set of networks currently known
#[derive(Debug, Deserialize)]
pub struct NetworksUpdate {
    #[serde(default)]
    pub networks: Vec<ObservedNetwork>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn get_monitor(State(state): State<Arc<AppState>>) -> Json<MonitorSnapshot> {
    Json(state.controller.snapshot().await)
}

/// Start monitoring. Without an explicit ssid the current selection is used.
pub async fn start_monitoring(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StartRequest>,
) -> ApiResult {
    let duration = body.duration.unwrap_or(state.defaults.default_duration_secs);
    let interval = body.interval.unwrap_or(state.defaults.default_interval_secs);

    let result = match body.ssid {
        Some(ssid) => {
            state
                .controller
                .start_monitoring(MonitorRequest::new(ssid, duration, interval))
                .await
        }
        None => state.controller.start_selected(duration, interval).await,
    };

    result.map_err(error_response)?;
    Ok(Json(state.controller.snapshot().await))
}

pub async fn stop_monitoring(State(state): State<Arc<AppState>>) -> Json<MonitorSnapshot> {
    state.controller.stop_monitoring().await;
    Json(state.controller.snapshot().await)
}

pub async fn select_network(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SelectRequest>,
) -> ApiResult {
    state
        .controller
        .select_network(&body.ssid)
        .await
        .map_err(error_response)?;
    Ok(Json(state.controller.snapshot().await))
}

pub async fn networks_updated(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NetworksUpdate>,
) -> Json<MonitorSnapshot> {
    state.controller.refresh_networks(body.networks).await;
    Json(state.controller.snapshot().await)
}

fn error_response(err: MonitorError) -> (StatusCode, String) {
    let status = match &err {
        MonitorError::Validation(_) => StatusCode::BAD_REQUEST,
        MonitorError::Transport(_) | MonitorError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        MonitorError::Cancelled => StatusCode::CONFLICT,
    };
    (status, err.to_string())
}
