use serde::Serialize;

use super::lap::{LapDelta, LapEntry};

/// Tracks every fresh tracker starts with
pub const SEED_TRACKS: &[&str] = &[
    "WRT Kapelanka",
    "WRT Nowa Huta",
    "ICF Rzeszów",
    "Reskart Rzeszów",
    "E1 Chorzów",
    "Go Karting Center",
];

pub fn default_seed_tracks() -> Vec<String> {
    SEED_TRACKS.iter().map(|t| t.to_string()).collect()
}

/// Read-only view of one track, as rendered on a tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSummary {
    pub name: String,
    /// most recently recorded lap
    pub latest: Option<LapEntry>,
    /// fastest lap on this track
    pub best: Option<LapEntry>,
    pub delta: Option<LapDelta>,
    pub lap_count: usize,
}
