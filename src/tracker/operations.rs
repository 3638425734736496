use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    domain::{
        lap::{LapDelta, LapEntry},
        track::default_seed_tracks,
    },
    tracker::{
        LapTracking,
        error::{TrackerError, ValidationIssue},
    },
};

/// Outcome of a successfully recorded lap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapRecorded {
    pub entry: LapEntry,
    /// true when no faster lap exists on any track
    pub personal_best: bool,
}

/// Main structure that owns tracks and their laps
#[derive(Debug)]
pub struct LapTracker {
    tracks: Vec<String>,
    laps_by_track: HashMap<String, Vec<LapEntry>>,
}

impl Default for LapTracker {
    fn default() -> Self {
        Self::with_tracks(default_seed_tracks())
    }
}

impl LapTracker {
    /// creates a tracker knowing the given tracks and no laps.
    ///
    /// Blank and repeated names in the seed are skipped.
    pub fn with_tracks(seed: impl IntoIterator<Item = String>) -> Self {
        let mut tracker = Self {
            tracks: Vec::new(),
            laps_by_track: HashMap::new(),
        };
        for name in seed {
            if let Err(e) = tracker.add_track(&name) {
                log::warn!("skipping seed track '{name}': {e}");
            }
        }
        tracker
    }

    fn contains(&self, name: &str) -> bool {
        self.tracks.iter().any(|t| t == name)
    }

    fn validate_lap(
        lap_time: Option<f64>,
        date: Option<NaiveDate>,
    ) -> Result<(f64, NaiveDate), ValidationIssue> {
        let (Some(lap_time), Some(date)) = (lap_time, date) else {
            return Err(ValidationIssue::MissingFields);
        };
        if !lap_time.is_finite() || lap_time <= 0.0 {
            return Err(ValidationIssue::NonPositiveLapTime);
        }
        Ok((lap_time, date))
    }

    /// fastest lap among `laps`, earliest recorded wins ties
    fn fastest<'a>(laps: impl DoubleEndedIterator<Item = &'a LapEntry>) -> Option<&'a LapEntry> {
        laps.rev().fold(None::<&'a LapEntry>, |best, lap| match best {
            Some(b) if b.lap_time <= lap.lap_time => Some(b),
            _ => Some(lap),
        })
    }
}

impl LapTracking for LapTracker {
    fn add_track(&mut self, name: &str) -> Result<(), TrackerError> {
        if name.trim().is_empty() {
            log::info!("rejected blank track name");
            return Err(ValidationIssue::BlankTrackName.into());
        }
        if self.contains(name) {
            log::info!("rejected duplicate track '{name}'");
            return Err(TrackerError::Duplicate(name.to_string()));
        }

        self.tracks.push(name.to_string());
        log::debug!("added track '{name}', {} tracks known", self.tracks.len());
        Ok(())
    }

    fn record_lap(
        &mut self,
        track_name: &str,
        lap_time: Option<f64>,
        date: Option<NaiveDate>,
    ) -> Result<LapRecorded, TrackerError> {
        let (lap_time, date) = Self::validate_lap(lap_time, date).inspect_err(|issue| {
            log::info!("rejected lap for '{track_name}': {issue}");
        })?;
        if !self.contains(track_name) {
            log::info!("rejected lap for unknown track '{track_name}'");
            return Err(TrackerError::UnknownTrack(track_name.to_string()));
        }

        let personal_best = self
            .best_lap_overall()
            .is_none_or(|best| lap_time < best.lap_time);

        let entry = LapEntry::new(track_name, lap_time, date);
        self.laps_by_track
            .entry(track_name.to_string())
            .or_default()
            .insert(0, entry.clone());

        log::debug!(
            "recorded {} on '{track_name}' at {date}{}",
            entry.display_time(),
            if personal_best { ", new best lap" } else { "" }
        );
        Ok(LapRecorded {
            entry,
            personal_best,
        })
    }

    fn tracks(&self) -> &[String] {
        &self.tracks
    }

    fn laps(&self, track_name: &str) -> &[LapEntry] {
        self.laps_by_track
            .get(track_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn latest_lap(&self, track_name: &str) -> Option<&LapEntry> {
        self.laps(track_name).first()
    }

    fn best_lap(&self, track_name: &str) -> Option<&LapEntry> {
        Self::fastest(self.laps(track_name).iter())
    }

    fn best_lap_overall(&self) -> Option<&LapEntry> {
        let per_track = self
            .tracks
            .iter()
            .filter_map(|t| self.best_lap(t))
            .collect::<Vec<_>>();
        // tracks are in insertion order, so the first of equal times wins
        per_track.into_iter().fold(None, |best, lap| match best {
            Some(b) if b.lap_time <= lap.lap_time => Some(b),
            _ => Some(lap),
        })
    }

    fn delta(&self, track_name: &str) -> Option<LapDelta> {
        match self.laps(track_name) {
            [latest, previous, ..] => Some(LapDelta::between(latest, previous)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        domain::track::SEED_TRACKS,
        tracker::{
            LapTracking,
            error::{TrackerError, ValidationIssue},
            operations::LapTracker,
        },
    };

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn tracker_with_monza() -> LapTracker {
        let mut tracker = LapTracker::default();
        tracker.add_track("Monza").unwrap();
        tracker
    }

    #[test]
    fn test_default_tracker_is_seeded() {
        let tracker = LapTracker::default();

        assert_eq!(tracker.tracks().len(), SEED_TRACKS.len());
        assert_eq!(tracker.tracks()[0], "WRT Kapelanka");
        assert!(tracker.laps("WRT Kapelanka").is_empty());
    }

    #[test]
    fn test_seed_skips_blank_and_repeated_names() {
        let tracker = LapTracker::with_tracks(
            ["A", "", "B", "A"].into_iter().map(String::from),
        );

        assert_eq!(tracker.tracks(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_add_track_success() {
        let mut tracker = LapTracker::default();
        let before = tracker.tracks().len();

        tracker.add_track("Monza").unwrap();

        assert_eq!(tracker.tracks().len(), before + 1);
        assert!(tracker.tracks().contains(&"Monza".to_string()));
        // no laps are created for the new track
        assert!(tracker.laps("Monza").is_empty());
        assert!(tracker.latest_lap("Monza").is_none());
    }

    #[test]
    fn test_add_track_twice_is_duplicate() {
        let mut tracker = tracker_with_monza();
        let before = tracker.tracks().len();

        let err = tracker.add_track("Monza").unwrap_err();

        assert_eq!(err, TrackerError::Duplicate("Monza".to_string()));
        assert_eq!(tracker.tracks().len(), before);
    }

    #[test]
    fn test_add_track_duplicate_check_is_exact() {
        let mut tracker = tracker_with_monza();

        tracker.add_track("monza").unwrap();
        tracker.add_track(" Monza").unwrap();

        assert!(tracker.tracks().contains(&"monza".to_string()));
        assert!(tracker.tracks().contains(&" Monza".to_string()));
    }

    #[test]
    fn test_add_blank_track_fails() {
        let mut tracker = LapTracker::default();
        let before = tracker.tracks().len();

        for name in ["", "   ", "\t"] {
            let err = tracker.add_track(name).unwrap_err();
            assert_eq!(err, TrackerError::Validation(ValidationIssue::BlankTrackName));
        }
        assert_eq!(tracker.tracks().len(), before);
    }

    #[test]
    fn test_record_lap_prepends_entry() {
        let mut tracker = tracker_with_monza();

        tracker.record_lap("Monza", Some(45.210), date(2024, 1, 1)).unwrap();
        let recorded = tracker.record_lap("Monza", Some(44.980), date(2024, 1, 2)).unwrap();

        let laps = tracker.laps("Monza");
        assert_eq!(laps.len(), 2);
        assert_eq!(laps[0], recorded.entry);
        assert_eq!(laps[0].lap_time, 44.980);
        assert_eq!(laps[1].lap_time, 45.210);
        assert_eq!(laps[0].track_name, "Monza");
    }

    #[test]
    fn test_record_lap_same_input_adds_again() {
        let mut tracker = tracker_with_monza();

        tracker.record_lap("Monza", Some(45.0), date(2024, 1, 1)).unwrap();
        tracker.record_lap("Monza", Some(45.0), date(2024, 1, 1)).unwrap();

        assert_eq!(tracker.laps("Monza").len(), 2);
    }

    #[test]
    fn test_delta_faster_latest() {
        let mut tracker = tracker_with_monza();

        tracker.record_lap("Monza", Some(45.210), date(2024, 1, 1)).unwrap();
        tracker.record_lap("Monza", Some(44.980), date(2024, 1, 2)).unwrap();

        assert_eq!(tracker.delta("Monza").unwrap().to_string(), "(-0.230s)");
    }

    #[test]
    fn test_delta_slower_latest() {
        let mut tracker = tracker_with_monza();

        tracker.record_lap("Monza", Some(44.000), date(2024, 1, 3)).unwrap();
        tracker.record_lap("Monza", Some(46.500), date(2024, 1, 4)).unwrap();

        assert_eq!(tracker.delta("Monza").unwrap().to_string(), "(+2.500s)");
    }

    #[test]
    fn test_delta_uses_two_most_recent() {
        let mut tracker = tracker_with_monza();

        tracker.record_lap("Monza", Some(50.0), date(2024, 1, 1)).unwrap();
        tracker.record_lap("Monza", Some(44.0), date(2024, 1, 2)).unwrap();
        tracker.record_lap("Monza", Some(46.5), date(2024, 1, 3)).unwrap();

        assert_eq!(tracker.delta("Monza").unwrap().to_string(), "(+2.500s)");
    }

    #[test]
    fn test_delta_undefined_below_two_laps() {
        let mut tracker = tracker_with_monza();
        assert!(tracker.delta("Monza").is_none());

        tracker.record_lap("Monza", Some(44.0), date(2024, 1, 3)).unwrap();
        assert!(tracker.delta("Monza").is_none());
        assert!(tracker.delta("Nowhere").is_none());
    }

    #[test]
    fn test_missing_fields_rejected_without_mutation() {
        let mut tracker = tracker_with_monza();
        tracker.record_lap("Monza", Some(44.0), date(2024, 1, 3)).unwrap();

        let missing_date = tracker.record_lap("Monza", Some(43.0), None).unwrap_err();
        let missing_time = tracker.record_lap("Monza", None, date(2024, 1, 4)).unwrap_err();

        let expected = TrackerError::Validation(ValidationIssue::MissingFields);
        assert_eq!(missing_date, expected);
        assert_eq!(missing_time, expected);
        assert_eq!(tracker.laps("Monza").len(), 1);
    }

    #[test]
    fn test_non_positive_lap_time_rejected() {
        let mut tracker = tracker_with_monza();

        for time in [0.0, -1.5, f64::INFINITY, f64::NAN] {
            let err = tracker.record_lap("Monza", Some(time), date(2024, 1, 1)).unwrap_err();
            assert_eq!(err, TrackerError::Validation(ValidationIssue::NonPositiveLapTime));
        }
        assert!(tracker.laps("Monza").is_empty());
    }

    #[test]
    fn test_unknown_track_rejected() {
        let mut tracker = LapTracker::default();

        let err = tracker.record_lap("Monza", Some(44.0), date(2024, 1, 1)).unwrap_err();

        assert_eq!(err, TrackerError::UnknownTrack("Monza".to_string()));
        assert!(tracker.laps("Monza").is_empty());
    }

    #[test]
    fn test_latest_and_best_are_distinct() {
        let mut tracker = tracker_with_monza();

        tracker.record_lap("Monza", Some(44.0), date(2024, 1, 1)).unwrap();
        tracker.record_lap("Monza", Some(46.5), date(2024, 1, 2)).unwrap();

        assert_eq!(tracker.latest_lap("Monza").unwrap().lap_time, 46.5);
        assert_eq!(tracker.best_lap("Monza").unwrap().lap_time, 44.0);
    }

    #[test]
    fn test_best_lap_tie_keeps_earliest() {
        let mut tracker = tracker_with_monza();

        tracker.record_lap("Monza", Some(44.0), date(2024, 1, 1)).unwrap();
        tracker.record_lap("Monza", Some(44.0), date(2024, 1, 2)).unwrap();

        assert_eq!(tracker.best_lap("Monza").unwrap().date, date(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_best_lap_overall_spans_tracks() {
        let mut tracker = tracker_with_monza();
        assert!(tracker.best_lap_overall().is_none());

        tracker.record_lap("Monza", Some(44.0), date(2024, 1, 1)).unwrap();
        tracker.record_lap("E1 Chorzów", Some(39.7), date(2024, 1, 2)).unwrap();
        tracker.record_lap("Monza", Some(41.0), date(2024, 1, 3)).unwrap();

        let best = tracker.best_lap_overall().unwrap();
        assert_eq!(best.track_name, "E1 Chorzów");
        assert_eq!(best.lap_time, 39.7);
    }

    #[test]
    fn test_personal_best_flag() {
        let mut tracker = tracker_with_monza();

        let first = tracker.record_lap("Monza", Some(44.0), date(2024, 1, 1)).unwrap();
        let slower = tracker.record_lap("Monza", Some(45.0), date(2024, 1, 2)).unwrap();
        let equal = tracker.record_lap("E1 Chorzów", Some(44.0), date(2024, 1, 3)).unwrap();
        let faster = tracker.record_lap("E1 Chorzów", Some(43.9), date(2024, 1, 4)).unwrap();

        assert!(first.personal_best);
        assert!(!slower.personal_best);
        assert!(!equal.personal_best);
        assert!(faster.personal_best);
    }

    #[test]
    fn test_summary_of_track_without_laps() {
        let tracker = tracker_with_monza();

        let summary = tracker.summary("Monza").unwrap();

        assert_eq!(summary.lap_count, 0);
        assert!(summary.latest.is_none());
        assert!(summary.best.is_none());
        assert!(summary.delta.is_none());
        assert!(tracker.summary("Nowhere").is_none());
    }

    #[test]
    fn test_summaries_follow_track_order() {
        let mut tracker = tracker_with_monza();
        tracker.record_lap("Monza", Some(44.0), date(2024, 1, 1)).unwrap();
        tracker.record_lap("Monza", Some(43.0), date(2024, 1, 2)).unwrap();

        let summaries = tracker.summaries();

        assert_eq!(summaries.len(), SEED_TRACKS.len() + 1);
        let monza = summaries.last().unwrap();
        assert_eq!(monza.name, "Monza");
        assert_eq!(monza.lap_count, 2);
        assert_eq!(monza.latest.as_ref().unwrap().lap_time, 43.0);
        assert_eq!(monza.delta.unwrap().to_string(), "(-1.000s)");
    }
}
