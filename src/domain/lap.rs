use std::fmt::Display;

use chrono::NaiveDate;
use serde::Serialize;

/// Date format accepted from forms and the console
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// One recorded lap on a track.
///
/// Entries are immutable once recorded; the tracker only ever prepends them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapEntry {
    pub track_name: String,
    /// lap time in seconds
    pub lap_time: f64,
    pub date: NaiveDate,
}

impl LapEntry {
    pub fn new(track_name: impl Into<String>, lap_time: f64, date: NaiveDate) -> Self {
        Self {
            track_name: track_name.into(),
            lap_time,
            date,
        }
    }

    /// lap time the way tiles show it, e.g. `42.123s`
    pub fn display_time(&self) -> String {
        format!("{:.3}s", self.lap_time)
    }
}

/// Signed difference between the two most recent laps of a track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LapDelta(pub f64);

impl LapDelta {
    pub fn between(latest: &LapEntry, previous: &LapEntry) -> Self {
        Self(latest.lap_time - previous.lap_time)
    }
}

impl Display for LapDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 > 0.0 { "+" } else { "" };
        write!(f, "({sign}{:.3}s)", self.0)
    }
}

impl Serialize for LapDelta {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Reads a lap time typed by the user.
///
/// Returns None for blank or unparseable input, the same as a missing field.
pub fn parse_lap_time(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|t| !t.is_nan())
}

/// Reads a calendar date in `YYYY-MM-DD` form
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT).ok()
}
