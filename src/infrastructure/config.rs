use serde::Deserialize;

const CONFIG_FILE: &str = "config/monitor";
const ENV_PREFIX: &str = "SIGNAL_MONITOR";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub monitor: MonitorDefaults,
    #[serde(default)]
    pub chart: ChartSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Values used when the dashboard does not supply its own duration/interval
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MonitorDefaults {
    pub default_duration_secs: u64,
    pub default_interval_secs: u64,
}

impl Default for MonitorDefaults {
    fn default() -> Self {
        Self {
            default_duration_secs: 60,
            default_interval_secs: 2,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartSettings {
    pub window_capacity: usize,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            window_capacity: 60,
            y_min: -100.0,
            y_max: -30.0,
        }
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from(CONFIG_FILE)
}

/// Optional TOML file layered under `SIGNAL_MONITOR__SECTION__KEY` environment overrides
pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
