// Selectable network list, rebuilt from discovery data
use super::error::MonitorError;
use serde::{Deserialize, Serialize};

/// A network seen by a discovery scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedNetwork {
    pub ssid: String,
    #[serde(default)]
    pub signal: Option<f64>,
}

impl ObservedNetwork {
    pub fn new(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            signal: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NetworkSelection {
    options: Vec<String>,
    selected: Option<String>,
}

impl NetworkSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the options from the known networks.
    /// The current selection is kept only when it is still among them.
    pub fn refresh<I>(&mut self, networks: I)
    where
        I: IntoIterator<Item = ObservedNetwork>,
    {
        let mut options: Vec<String> = Vec::new();
        for network in networks {
            if network.ssid.is_empty() || options.contains(&network.ssid) {
                continue;
            }
            options.push(network.ssid);
        }

        self.selected = self.selected.take().filter(|s| options.contains(s));
        self.options = options;
    }

    /// Select a network by name. An empty name clears the selection.
    pub fn select(&mut self, ssid: &str) -> Result<(), MonitorError> {
        if ssid.is_empty() {
            self.selected = None;
            return Ok(());
        }

        if !self.options.iter().any(|o| o == ssid) {
            return Err(MonitorError::Validation(format!(
                "Unknown network '{}'",
                ssid
            )));
        }

        self.selected = Some(ssid.to_string());
        Ok(())
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn networks(names: &[&str]) -> Vec<ObservedNetwork> {
        names.iter().map(|n| ObservedNetwork::new(*n)).collect()
    }

    #[test]
    fn test_refresh_keeps_valid_selection() {
        let mut selection = NetworkSelection::new();
        selection.refresh(networks(&["HomeWifi", "Cafe"]));
        selection.select("HomeWifi").unwrap();

        selection.refresh(networks(&["Office", "HomeWifi"]));

        assert_eq!(selection.selected(), Some("HomeWifi"));
        assert_eq!(selection.options(), &["Office".to_string(), "HomeWifi".to_string()]);
    }

    #[test]
    fn test_refresh_drops_vanished_selection() {
        let mut selection = NetworkSelection::new();
        selection.refresh(networks(&["HomeWifi"]));
        selection.select("HomeWifi").unwrap();

        selection.refresh(networks(&["Cafe"]));

        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_refresh_dedupes_and_skips_hidden() {
        let mut selection = NetworkSelection::new();
        selection.refresh(networks(&["A", "", "B", "A"]));

        assert_eq!(selection.options(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_select_unknown_network() {
        let mut selection = NetworkSelection::new();
        selection.refresh(networks(&["A"]));

        assert!(matches!(selection.select("Z"), Err(MonitorError::Validation(_))));
        assert_eq!(selection.selected(), None);

        selection.select("A").unwrap();
        selection.select("").unwrap();
        assert_eq!(selection.selected(), None);
    }
}
