use log::info;
use rouille::{Request, Response};
use serde::Deserialize;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    config::HttpConfig,
    domain::lap::{parse_date, parse_lap_time},
    http::{error::ApiError, render},
    i18n::Language,
    notify::Notification,
    tracker::LapTracking,
};

pub struct HttpServer<T> {
    tracker: Arc<Mutex<T>>,
    pub config: HttpConfig,
    language: Language,
}

#[derive(Deserialize)]
struct AddTrackRequest {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct RecordLapRequest {
    track: String,
    lap_time: Option<f64>,
    date: Option<String>,
}

impl<T: LapTracking + Send + 'static> HttpServer<T> {
    pub fn new(tracker: T, config: HttpConfig, language: Language) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            config,
            language,
        }
    }

    pub fn run(self) {
        let addr = format!("{}:{}", self.config.bind_addr, self.config.port);
        rouille::start_server(addr, move |request| self.handle_request(request));
    }

    fn handle_request(&self, request: &Request) -> Response {
        Self::log_request(request);
        let language = self.request_language(request);

        let response = rouille::router!(request,
            (GET) (/) => {
                Response::html(render::home(language))
            },
            (GET) (/login) => {
                Response::html(render::login(language))
            },
            (GET) (/register) => {
                Response::html(render::register(language))
            },
            (GET) (/style) => {
                Response::from_data("text/css; charset=utf-8", render::STYLESHEET)
            },
            (GET) (/tracks) => {
                self.render_tracks(language, None)
            },
            (POST) (/tracks) => {
                self.handle_add_track_form(request, language)
            },
            (POST) (/tracks/laps) => {
                self.handle_record_lap_form(request, language)
            },
            (GET) (/api/tracks) => {
                self.handle_api_list_tracks()
            },
            (POST) (/api/tracks) => {
                Self::respond(self.api_add_track(request, language))
            },
            (POST) (/api/laps) => {
                Self::respond(self.api_record_lap(request, language))
            },
            _ => Response::empty_404()
        );

        info!("Response: {} {}", request.method(), response.status_code);
        response
    }

    fn log_request(request: &Request) {
        info!("{} {}", request.method(), request.url());
    }

    /// `?lang=` wins over the configured language
    fn request_language(&self, request: &Request) -> Language {
        request
            .get_param("lang")
            .and_then(|lang| lang.parse().ok())
            .unwrap_or(self.language)
    }

    fn lock(&self) -> Result<MutexGuard<'_, T>, ApiError> {
        self.tracker.lock().map_err(|e| {
            ApiError::Internal(format!("could not access lap tracker under lock: {e}"))
        })
    }

    fn respond(result: Result<Response, ApiError>) -> Response {
        match result {
            Ok(r) => r,
            Err(e) => e.into_response(),
        }
    }

    fn render_tracks(&self, language: Language, notification: Option<&Notification>) -> Response {
        let tracker = match self.lock() {
            Ok(t) => t,
            Err(e) => return e.into_response(),
        };
        let page = render::tracks(
            language,
            &tracker.summaries(),
            tracker.best_lap_overall(),
            notification,
        );
        Response::html(page)
    }

    /// url-encoded form fields of a POST request
    fn form_fields(request: &Request) -> Result<Vec<(String, String)>, Response> {
        rouille::input::post::raw_urlencoded_post_input(request)
            .map_err(|e| Response::text(format!("invalid form: {e}")).with_status_code(400))
    }

    fn form_field<'a>(fields: &'a [(String, String)], name: &str) -> &'a str {
        fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    fn handle_add_track_form(&self, request: &Request, language: Language) -> Response {
        let fields = match Self::form_fields(request) {
            Ok(f) => f,
            Err(resp) => return resp,
        };
        let name = Self::form_field(&fields, "name");

        let result = match self.lock() {
            Ok(mut tracker) => tracker.add_track(name),
            Err(e) => return e.into_response(),
        };

        let notification = match result {
            Ok(()) => Notification::track_added(language),
            Err(e) => Notification::error(language, &e),
        };
        self.render_tracks(language, Some(&notification))
    }

    fn handle_record_lap_form(&self, request: &Request, language: Language) -> Response {
        let fields = match Self::form_fields(request) {
            Ok(f) => f,
            Err(resp) => return resp,
        };
        let track = Self::form_field(&fields, "track");
        let lap_time = parse_lap_time(Self::form_field(&fields, "lap_time"));
        let date = parse_date(Self::form_field(&fields, "date"));

        let result = match self.lock() {
            Ok(mut tracker) => tracker.record_lap(track, lap_time, date),
            Err(e) => return e.into_response(),
        };

        let notification = match result {
            Ok(recorded) => Notification::lap_recorded(language, &recorded),
            Err(e) => Notification::error(language, &e),
        };
        self.render_tracks(language, Some(&notification))
    }

    fn handle_api_list_tracks(&self) -> Response {
        match self.lock() {
            Ok(tracker) => Response::json(&tracker.summaries()),
            Err(e) => e.into_response(),
        }
    }

    fn api_add_track(&self, request: &Request, language: Language) -> Result<Response, ApiError> {
        let body: AddTrackRequest = rouille::input::json_input(request)
            .map_err(|e| ApiError::invalid_body(language, &e))?;

        let mut tracker = self.lock()?;
        tracker
            .add_track(&body.name)
            .map_err(|e| ApiError::from_tracker(language, &e))?;

        let summary = tracker.summary(&body.name).ok_or_else(|| {
            ApiError::Internal(format!("track {} missing after adding", body.name))
        })?;
        Ok(Response::json(&summary).with_status_code(201))
    }

    fn api_record_lap(&self, request: &Request, language: Language) -> Result<Response, ApiError> {
        let body: RecordLapRequest = rouille::input::json_input(request)
            .map_err(|e| ApiError::invalid_body(language, &e))?;
        let date = body.date.as_deref().and_then(parse_date);

        let recorded = self
            .lock()?
            .record_lap(&body.track, body.lap_time, date)
            .map_err(|e| ApiError::from_tracker(language, &e))?;

        Ok(Response::json(&recorded).with_status_code(201))
    }
}

#[cfg(test)]
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: rouille::Response,
) -> anyhow::Result<T> {
    Ok(serde_json::from_reader(
        response.data.into_reader_and_size().0,
    )?)
}
