use thiserror::Error;

use crate::i18n::MessageKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("track name is blank")]
    BlankTrackName,

    #[error("lap time or date is missing")]
    MissingFields,

    #[error("lap time must be a positive number of seconds")]
    NonPositiveLapTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationIssue),

    #[error("track {0} already exists")]
    Duplicate(String),

    #[error("track {0} is not known")]
    UnknownTrack(String),
}

impl TrackerError {
    /// message shown to the user for this error
    pub fn message_key(&self) -> MessageKey {
        match self {
            TrackerError::Validation(ValidationIssue::BlankTrackName) => MessageKey::EnterTrackName,
            TrackerError::Validation(ValidationIssue::MissingFields) => MessageKey::FillAllFields,
            TrackerError::Validation(ValidationIssue::NonPositiveLapTime) => {
                MessageKey::LapTimeMustBePositive
            }
            TrackerError::Duplicate(_) => MessageKey::TrackExists,
            TrackerError::UnknownTrack(_) => MessageKey::UnknownTrack,
        }
    }
}
