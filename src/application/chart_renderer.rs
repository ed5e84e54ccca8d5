// Rolling window renderer - keeps the live chart in step with the sample window
use crate::domain::rolling_window::RollingWindow;
use crate::domain::sample::SamplePoint;
use crate::infrastructure::config::ChartSettings;
use serde::Serialize;

/// Line chart model handed to the dashboard for drawing
#[derive(Debug, Clone, Serialize)]
pub struct LineChart {
    pub label: String,
    pub y_min: f64,
    pub y_max: f64,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub revision: u64,
}

impl LineChart {
    fn new(ssid: &str, settings: &ChartSettings) -> Self {
        Self {
            label: format!("{} Signal Strength", ssid),
            y_min: settings.y_min,
            y_max: settings.y_max,
            labels: Vec::new(),
            values: Vec::new(),
            revision: 0,
        }
    }

    fn redraw(&mut self, window: &RollingWindow) {
        self.labels = window.iter().map(SamplePoint::time_label).collect();
        self.values = window.iter().map(|p| p.signal).collect();
        self.revision += 1;
    }
}

#[derive(Debug)]
pub struct RollingWindowRenderer {
    settings: ChartSettings,
    window: RollingWindow,
    chart: Option<LineChart>,
}

impl RollingWindowRenderer {
    pub fn new(settings: ChartSettings) -> Self {
        let window = RollingWindow::new(settings.window_capacity);
        Self {
            settings,
            window,
            chart: None,
        }
    }

    /// Empty the window and replace any existing chart with a fresh one for `ssid`
    pub fn initialize(&mut self, ssid: &str) {
        self.window.clear();
        if let Some(old) = self.chart.replace(LineChart::new(ssid, &self.settings)) {
            tracing::debug!("Discarded chart '{}' at revision {}", old.label, old.revision);
        }
    }

    /// Drop the chart and its samples entirely
    pub fn reset(&mut self) {
        self.window.clear();
        self.chart = None;
    }

    pub fn append(&mut self, points: Vec<SamplePoint>) {
        if points.is_empty() {
            return;
        }

        let added = points.len();
        let evicted = self.window.extend(points);
        tracing::debug!(
            "Appended {} samples ({} evicted, {} in window)",
            added,
            evicted,
            self.window.len()
        );

        match self.chart.as_mut() {
            Some(chart) => chart.redraw(&self.window),
            None => tracing::warn!("Samples appended before a chart was initialized"),
        }
    }

    pub fn chart(&self) -> Option<&LineChart> {
        self.chart.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn settings(capacity: usize) -> ChartSettings {
        ChartSettings {
            window_capacity: capacity,
            ..ChartSettings::default()
        }
    }

    fn points(range: std::ops::Range<i64>) -> Vec<SamplePoint> {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        range
            .map(|i| SamplePoint::new(base + Duration::seconds(i), -30.0 - i as f64))
            .collect()
    }

    #[test]
    fn test_initialize_labels_chart() {
        let mut renderer = RollingWindowRenderer::new(ChartSettings::default());
        renderer.initialize("HomeWifi");

        let chart = renderer.chart().unwrap();
        assert_eq!(chart.label, "HomeWifi Signal Strength");
        assert_eq!((chart.y_min, chart.y_max), (-100.0, -30.0));
        assert!(chart.values.is_empty());
    }

    #[test]
    fn test_chart_never_exceeds_capacity() {
        let mut renderer = RollingWindowRenderer::new(settings(60));
        renderer.initialize("HomeWifi");
        renderer.append(points(0..45));
        renderer.append(points(45..100));

        let chart = renderer.chart().unwrap();
        assert_eq!(chart.values.len(), 60);
        assert_eq!(chart.labels.len(), 60);
        assert_eq!(chart.values.first(), Some(&-70.0));
        assert_eq!(chart.values.last(), Some(&-129.0));
        assert_eq!(chart.revision, 2);
    }

    #[test]
    fn test_reinitialize_discards_previous_data() {
        let mut renderer = RollingWindowRenderer::new(ChartSettings::default());
        renderer.initialize("A");
        renderer.append(points(0..5));

        renderer.initialize("B");

        assert!(renderer.window.is_empty());
        let chart = renderer.chart().unwrap();
        assert_eq!(chart.label, "B Signal Strength");
        assert_eq!(chart.revision, 0);
    }

    #[test]
    fn test_reset_drops_chart() {
        let mut renderer = RollingWindowRenderer::new(ChartSettings::default());
        renderer.initialize("A");
        renderer.append(points(0..5));

        renderer.reset();

        assert!(renderer.window.is_empty());
        assert!(renderer.chart().is_none());
    }

    #[test]
    fn test_empty_batch_does_not_redraw() {
        let mut renderer = RollingWindowRenderer::new(ChartSettings::default());
        renderer.initialize("A");
        renderer.append(Vec::new());

        assert_eq!(renderer.chart().unwrap().revision, 0);
    }

    #[test]
    fn test_append_without_chart_still_fills_window() {
        let mut renderer = RollingWindowRenderer::new(ChartSettings::default());
        renderer.append(points(0..3));

        assert_eq!(renderer.window.len(), 3);
        assert!(renderer.chart().is_none());
    }
}
