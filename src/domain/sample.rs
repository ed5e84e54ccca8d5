// Signal sample domain model
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

/// One signal-strength reading in dBm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    pub timestamp: DateTime<Utc>,
    pub signal: f64,
}

impl SamplePoint {
    pub fn new(timestamp: DateTime<Utc>, signal: f64) -> Self {
        Self { timestamp, signal }
    }

    /// Wall-clock label used on the chart's x axis
    pub fn time_label(&self) -> String {
        self.time_label_in(&Local)
    }

    pub fn time_label_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.timestamp.with_timezone(tz).format("%H:%M:%S").to_string()
    }
}

/// Parse the backend's timestamps: RFC 3339, or a naive ISO-8601 instant in local time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    parse_timestamp_in(raw, &Local)
}

/// Naive timestamps are wall-clock time in `tz`. A time skipped by a DST jump is taken as UTC.
pub fn parse_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())?;

    Some(
        tz.from_local_datetime(&naive)
            .earliest()
            .map(|ts| ts.with_timezone(&Utc))
            .unwrap_or_else(|| naive.and_utc()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_parse_rfc3339() {
        let ts = parse_timestamp("2024-05-01T10:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_iso_in_utc() {
        let ts = parse_timestamp_in("2024-05-01T10:00:00.250000", &Utc).unwrap();
        assert_eq!(ts.timestamp_millis(), Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap().timestamp_millis() + 250);

        let ts = parse_timestamp_in("2024-05-01 10:00:00", &Utc).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_naive_time_keeps_wall_clock_label_outside_utc() {
        // UTC-4, New York summer time
        let new_york = FixedOffset::west_opt(4 * 3600).unwrap();
        let ts = parse_timestamp_in("2024-05-01T10:00:00", &new_york).unwrap();

        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap());
        assert_eq!(SamplePoint::new(ts, -65.0).time_label_in(&new_york), "10:00:00");
    }

    #[test]
    fn test_naive_time_label_matches_host_clock() {
        let point = SamplePoint::new(parse_timestamp("2024-05-01T10:00:00").unwrap(), -65.0);
        assert_eq!(point.time_label(), "10:00:00");
    }

    #[test]
    fn test_offset_timestamp_ignores_local_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let ts = parse_timestamp_in("2024-05-01T10:00:00Z", &tokyo).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
