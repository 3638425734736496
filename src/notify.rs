//! Short-lived messages shown after a user action

use serde::Serialize;

use crate::{
    i18n::{Language, MessageKey},
    tracker::{error::TrackerError, operations::LapRecorded},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(language: Language, key: MessageKey) -> Self {
        let t = language.translation();
        Self {
            severity: Severity::Info,
            title: t.success.to_string(),
            description: t.message(key).to_string(),
        }
    }

    pub fn error(language: Language, err: &TrackerError) -> Self {
        let t = language.translation();
        Self {
            severity: Severity::Error,
            title: t.error.to_string(),
            description: t.message(err.message_key()).to_string(),
        }
    }

    pub fn track_added(language: Language) -> Self {
        Self::success(language, MessageKey::TrackAdded)
    }

    /// a faster-than-ever lap gets its own message
    pub fn lap_recorded(language: Language, recorded: &LapRecorded) -> Self {
        if recorded.personal_best {
            Self::success(language, MessageKey::NewBestLap)
        } else {
            Self::success(language, MessageKey::LapTimeUpdated)
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
