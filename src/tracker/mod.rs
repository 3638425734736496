use chrono::NaiveDate;

use crate::{
    domain::{
        lap::{LapDelta, LapEntry},
        track::TrackSummary,
    },
    tracker::{error::TrackerError, operations::LapRecorded},
};

pub mod error;
pub mod operations;

/// Everything a presentation layer may do with lap data.
///
/// Screens and the console take an implementation of this trait instead of
/// reaching into tracker state.
pub trait LapTracking {
    fn add_track(&mut self, name: &str) -> Result<(), TrackerError>;

    /// `None` stands for a field the user left empty or typed unreadably
    fn record_lap(
        &mut self,
        track_name: &str,
        lap_time: Option<f64>,
        date: Option<NaiveDate>,
    ) -> Result<LapRecorded, TrackerError>;

    fn tracks(&self) -> &[String];

    /// laps of a track, newest first
    fn laps(&self, track_name: &str) -> &[LapEntry];

    fn latest_lap(&self, track_name: &str) -> Option<&LapEntry>;

    fn best_lap(&self, track_name: &str) -> Option<&LapEntry>;

    fn best_lap_overall(&self) -> Option<&LapEntry>;

    fn delta(&self, track_name: &str) -> Option<LapDelta>;

    fn summary(&self, track_name: &str) -> Option<TrackSummary> {
        if !self.tracks().iter().any(|t| t == track_name) {
            return None;
        }
        Some(TrackSummary {
            name: track_name.to_string(),
            latest: self.latest_lap(track_name).cloned(),
            best: self.best_lap(track_name).cloned(),
            delta: self.delta(track_name),
            lap_count: self.laps(track_name).len(),
        })
    }

    fn summaries(&self) -> Vec<TrackSummary> {
        self.tracks()
            .iter()
            .filter_map(|t| self.summary(t))
            .collect()
    }
}
