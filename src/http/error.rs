use rouille::Response;

use crate::{
    i18n::Language,
    notify::{Notification, Severity},
    tracker::error::TrackerError,
};

#[derive(Debug)]
pub enum ApiError {
    NotFound(Notification),
    BadRequest(Notification),
    Conflict(Notification),
    Internal(String),
}

impl ApiError {
    pub fn from_tracker(language: Language, err: &TrackerError) -> Self {
        let notification = Notification::error(language, err);
        match err {
            TrackerError::Validation(_) => ApiError::BadRequest(notification),
            TrackerError::Duplicate(_) => ApiError::Conflict(notification),
            TrackerError::UnknownTrack(_) => ApiError::NotFound(notification),
        }
    }

    /// request body that could not be read at all
    pub fn invalid_body(language: Language, err: &dyn std::fmt::Display) -> Self {
        ApiError::BadRequest(Notification {
            severity: Severity::Error,
            title: language.translation().error.to_string(),
            description: format!("invalid request body: {err}"),
        })
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::BadRequest(_) => 400,
            ApiError::Conflict(_) => 409,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound(n) | ApiError::BadRequest(n) | ApiError::Conflict(n) => {
                Response::json(&n).with_status_code(status)
            }

            ApiError::Internal(msg) => {
                log::error!("internal error: {msg}");
                Response::text("internal server error").with_status_code(status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::error::ValidationIssue;

    #[test]
    fn test_tracker_errors_map_to_status() {
        let cases = [
            (TrackerError::Validation(ValidationIssue::BlankTrackName), 400),
            (TrackerError::Duplicate("Monza".into()), 409),
            (TrackerError::UnknownTrack("Monza".into()), 404),
        ];

        for (err, status) in cases {
            let api = ApiError::from_tracker(Language::En, &err);
            assert_eq!(api.status_code(), status);
            assert_eq!(api.into_response().status_code, status);
        }
    }
}
