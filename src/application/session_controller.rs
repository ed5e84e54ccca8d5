// Session controller - Lifecycle of the single live monitoring session
use crate::application::chart_renderer::{LineChart, RollingWindowRenderer};
use crate::application::monitor_backend::MonitorBackend;
use crate::domain::error::MonitorError;
use crate::domain::monitor::{MonitorId, MonitorRequest, MonitorSession, MonitorStatus};
use crate::domain::network::{NetworkSelection, ObservedNetwork};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

pub const MSG_STARTING: &str = "Starting monitoring...";
pub const MSG_ACTIVE: &str = "Monitoring in progress...";
pub const MSG_START_FAILED: &str = "Error starting monitoring";
pub const MSG_COMPLETED: &str = "Monitoring completed";

/// Longest accepted duration or poll interval (one week)
pub const MAX_SESSION_SECS: u64 = 7 * 24 * 60 * 60;

struct ControllerState {
    session: MonitorSession,
    message: String,
    // Bumped on every start and stop; in-flight work tagged with an older value is stale
    generation: u64,
    poll_timer: Option<JoinHandle<()>>,
    stop_timer: Option<JoinHandle<()>>,
}

impl ControllerState {
    fn cancel_timers(&mut self) {
        if let Some(handle) = self.poll_timer.take() {
            handle.abort();
        }
        if let Some(handle) = self.stop_timer.take() {
            handle.abort();
        }
    }

    fn complete(&mut self) {
        self.cancel_timers();
        self.generation += 1;
        self.session.session_id = None;
        match self.session.status {
            // A failed start keeps its error message
            MonitorStatus::Failed => {}
            MonitorStatus::Starting | MonitorStatus::Active => {
                self.session.status = MonitorStatus::Completed;
                self.message = MSG_COMPLETED.to_string();
            }
            MonitorStatus::Idle | MonitorStatus::Completed => {
                self.message = MSG_COMPLETED.to_string();
            }
        }
    }
}

/// Everything the dashboard panel shows at one instant
#[derive(Debug, Clone, Serialize)]
pub struct MonitorSnapshot {
    pub session: MonitorSession,
    pub message: String,
    pub networks: Vec<String>,
    pub selected: Option<String>,
    pub chart: Option<LineChart>,
}

#[derive(Clone)]
pub struct SessionController {
    backend: Arc<dyn MonitorBackend>,
    state: Arc<Mutex<ControllerState>>,
    renderer: Arc<Mutex<RollingWindowRenderer>>,
    selection: Arc<Mutex<NetworkSelection>>,
}

impl SessionController {
    pub fn new(backend: Arc<dyn MonitorBackend>, renderer: RollingWindowRenderer) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(ControllerState {
                session: MonitorSession::idle(),
                message: String::new(),
                generation: 0,
                poll_timer: None,
                stop_timer: None,
            })),
            renderer: Arc::new(Mutex::new(renderer)),
            selection: Arc::new(Mutex::new(NetworkSelection::new())),
        }
    }

    /// Start a bounded monitoring session. Any session already running is stopped first.
    pub async fn start_monitoring(&self, request: MonitorRequest) -> Result<MonitorId, MonitorError> {
        if let Err(err) = validate(&request) {
            self.state.lock().await.message = err.to_string();
            return Err(err);
        }

        let generation = {
            let mut state = self.state.lock().await;
            if state.session.is_active() {
                tracing::info!(
                    "Replacing active session {:?} for {:?}",
                    state.session.session_id,
                    state.session.target
                );
            }
            state.cancel_timers();
            state.generation += 1;
            state.session = MonitorSession::starting(&request);
            state.message = MSG_STARTING.to_string();
            state.generation
        };

        tracing::info!(
            "Starting monitoring of {} for {}s every {}s",
            request.ssid,
            request.duration_secs,
            request.interval_secs
        );
        let result = self.backend.start(&request).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::warn!("Start for {} superseded while in flight", request.ssid);
            return Err(MonitorError::Cancelled);
        }

        match result {
            Ok(id) => {
                state.session.session_id = Some(id.clone());
                state.session.status = MonitorStatus::Active;
                state.message = MSG_ACTIVE.to_string();
                self.renderer.lock().await.initialize(&request.ssid);

                state.poll_timer =
                    Some(self.spawn_poll_timer(generation, id.clone(), request.interval()));
                state.stop_timer = Some(self.spawn_stop_timer(generation, request.duration()));

                tracing::info!("Monitoring session {} active for {}", id, request.ssid);
                Ok(id)
            }
            Err(err) => {
                tracing::error!("Failed to start monitoring {}: {}", request.ssid, err);
                state.session.status = MonitorStatus::Failed;
                state.message = MSG_START_FAILED.to_string();
                self.renderer.lock().await.reset();
                Err(err)
            }
        }
    }

    /// Start monitoring whichever network is currently selected
    pub async fn start_selected(
        &self,
        duration_secs: u64,
        interval_secs: u64,
    ) -> Result<MonitorId, MonitorError> {
        let ssid = self
            .selection
            .lock()
            .await
            .selected()
            .map(str::to_string)
            .unwrap_or_default();

        self.start_monitoring(MonitorRequest::new(ssid, duration_secs, interval_secs))
            .await
    }

    /// Stop the current session and cancel both timers. Safe to call at any time.
    pub async fn stop_monitoring(&self) {
        let mut state = self.state.lock().await;
        if let Some(id) = &state.session.session_id {
            tracing::info!("Stopping monitoring session {}", id);
        }
        state.complete();
    }

    /// Rebuild the selectable networks from fresh discovery data
    pub async fn refresh_networks(&self, networks: Vec<ObservedNetwork>) {
        let mut selection = self.selection.lock().await;
        selection.refresh(networks);
        tracing::debug!(
            "Network list refreshed: {} options, selected {:?}",
            selection.options().len(),
            selection.selected()
        );
    }

    pub async fn select_network(&self, ssid: &str) -> Result<(), MonitorError> {
        self.selection.lock().await.select(ssid)
    }

    pub async fn status(&self) -> MonitorStatus {
        self.state.lock().await.session.status
    }

    pub async fn status_message(&self) -> String {
        self.state.lock().await.message.clone()
    }

    pub async fn snapshot(&self) -> MonitorSnapshot {
        let state = self.state.lock().await;
        let selection = self.selection.lock().await;
        let renderer = self.renderer.lock().await;

        MonitorSnapshot {
            session: state.session.clone(),
            message: state.message.clone(),
            networks: selection.options().to_vec(),
            selected: selection.selected().map(str::to_string),
            chart: renderer.chart().cloned(),
        }
    }

    fn spawn_poll_timer(&self, generation: u64, id: MonitorId, period: Duration) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                // Polls are not serialized; a slow one may overlap the next tick
                let controller = controller.clone();
                let id = id.clone();
                tokio::spawn(async move { controller.poll_once(generation, &id).await });
            }
        })
    }

    fn spawn_stop_timer(&self, generation: u64, duration: Duration) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            time::sleep(duration).await;
            let mut state = controller.state.lock().await;
            if state.generation == generation {
                tracing::info!("Monitoring duration elapsed for {:?}", state.session.target);
                state.complete();
            }
        })
    }

    async fn poll_once(&self, generation: u64, id: &MonitorId) {
        let result = self.backend.fetch_samples(id).await;

        let state = self.state.lock().await;
        if state.generation != generation || !state.session.is_active() {
            tracing::debug!("Dropping poll result for finished session {}", id);
            return;
        }

        match result {
            Ok(points) => {
                tracing::debug!("Poll for {} returned {} samples", id, points.len());
                self.renderer.lock().await.append(points);
            }
            Err(err) => {
                tracing::warn!("Error updating monitoring data for {}: {}", id, err);
            }
        }
    }
}

fn validate(request: &MonitorRequest) -> Result<(), MonitorError> {
    if request.ssid.trim().is_empty() {
        return Err(MonitorError::no_target());
    }
    if request.duration_secs == 0 || request.interval_secs == 0 {
        return Err(MonitorError::Validation(
            "Duration and interval must be positive".to_string(),
        ));
    }
    if request.duration_secs > MAX_SESSION_SECS || request.interval_secs > MAX_SESSION_SECS {
        return Err(MonitorError::Validation(format!(
            "Duration and interval must not exceed {} seconds",
            MAX_SESSION_SECS
        )));
    }
    Ok(())
}
