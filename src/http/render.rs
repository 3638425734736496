//! HTML screens built from the templates in `html/`

use crate::{
    domain::{lap::LapEntry, track::TrackSummary},
    i18n::{Language, Translation},
    notify::Notification,
};

pub const STYLESHEET: &str = include_str!("../../html/style.css");

const HOME: &str = include_str!("../../html/home.html");
const LOGIN: &str = include_str!("../../html/login.html");
const REGISTER: &str = include_str!("../../html/register.html");
const TRACKS: &str = include_str!("../../html/tracks.html");

/// Escapes text for use inside HTML elements and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Replaces `{{KEY}}` placeholders in one pass over the template.
///
/// Values must already be escaped. Inserted values are never scanned again,
/// so braces in user data come out as typed. Unknown keys are kept verbatim.
fn fill(template: &str, language: Language, values: &[(&str, String)]) -> String {
    let toggle_href = format!("?lang={}", language.toggled().code());
    let lookup = |key: &str| -> Option<&str> {
        match key {
            "LANG" => Some(language.code()),
            "TOGGLE_HREF" => Some(toggle_href.as_str()),
            "TOGGLE_LABEL" => Some(language.toggle_label()),
            _ => values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str()),
        }
    };

    let mut page = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        page.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let placeholder = &rest[start..start + 2 + end + 2];
        page.push_str(lookup(&after[..end]).unwrap_or(placeholder));
        rest = &after[end + 2..];
    }
    page.push_str(rest);
    page
}

pub fn home(language: Language) -> String {
    let t = language.translation();
    fill(
        HOME,
        language,
        &[
            ("TAGLINE", escape(t.tagline)),
            ("START_NOW", escape(t.start_now)),
            ("LOG_IN", escape(t.log_in)),
            ("TEST", escape(t.test)),
        ],
    )
}

pub fn login(language: Language) -> String {
    let t = language.translation();
    fill(
        LOGIN,
        language,
        &[
            ("TITLE", escape(t.login_title)),
            ("BACK_TO_HOME", escape(t.back_to_home)),
        ],
    )
}

pub fn register(language: Language) -> String {
    let t = language.translation();
    fill(
        REGISTER,
        language,
        &[
            ("TITLE", escape(t.register_title)),
            ("FIRST_NAME", escape(t.first_name)),
            ("LAST_NAME", escape(t.last_name)),
            ("EMAIL", escape(t.email)),
            ("PASSWORD", escape(t.password)),
            ("CONFIRM_PASSWORD", escape(t.confirm_password)),
            ("BACK_TO_HOME", escape(t.back_to_home)),
        ],
    )
}

/// The dashboard: one tile per track and a tile for adding tracks
pub fn tracks(
    language: Language,
    summaries: &[TrackSummary],
    overall_best: Option<&LapEntry>,
    notification: Option<&Notification>,
) -> String {
    let t = language.translation();
    let tiles = summaries
        .iter()
        .map(|s| tile(language, s))
        .collect::<Vec<_>>()
        .join("\n");

    fill(
        TRACKS,
        language,
        &[
            ("TITLE", escape(t.title)),
            ("NOTIFICATION", notification.map(toast).unwrap_or_default()),
            (
                "OVERALL_BEST",
                overall_best
                    .map(|best| overall_best_line(t, best))
                    .unwrap_or_default(),
            ),
            ("TILES", tiles),
            ("ADD_TRACK", escape(t.add_track)),
            ("TRACK_NAME_LABEL", escape(t.track_name_label)),
            ("ENTER_TRACK_NAME", escape(t.enter_track_name)),
            ("ADD_TRACK_BUTTON", escape(t.add_track_button)),
        ],
    )
}

fn toast(notification: &Notification) -> String {
    let class = if notification.is_error() {
        "toast error"
    } else {
        "toast"
    };
    format!(
        r#"<div class="{class}" role="status"><strong>{}</strong> {}</div>"#,
        escape(&notification.title),
        escape(&notification.description)
    )
}

fn overall_best_line(t: &Translation, best: &LapEntry) -> String {
    format!(
        r#"<p class="overall-best">{} {} ({}, {})</p>"#,
        escape(t.overall_best),
        best.display_time(),
        escape(&best.track_name),
        best.date.format(t.date_format)
    )
}

fn tile(language: Language, summary: &TrackSummary) -> String {
    let t = language.translation();
    let name = escape(&summary.name);

    let laps = match (&summary.latest, &summary.best) {
        (Some(latest), Some(best)) => {
            let mut lines = vec![
                format!(
                    "<p>{} {}</p>",
                    escape(t.latest_time),
                    latest.display_time()
                ),
                format!(
                    r#"<p class="muted">{} {}</p>"#,
                    escape(t.date),
                    latest.date.format(t.date_format)
                ),
                format!(
                    r#"<p class="muted">{} {}</p>"#,
                    escape(t.best_time),
                    best.display_time()
                ),
            ];
            if let Some(delta) = summary.delta {
                lines.push(format!(
                    r#"<p class="muted">{} {delta}</p>"#,
                    escape(t.difference)
                ));
            }
            lines.join("\n")
        }
        _ => format!("<p>{}</p>", escape(t.no_laps)),
    };

    format!(
        r#"<div class="tile">
  <h2>{name}</h2>
  {laps}
  <form method="post" action="/tracks/laps?lang={lang}">
    <fieldset>
      <legend>{legend}</legend>
      <input type="hidden" name="track" value="{name}">
      <label>{lap_time_label} <input type="number" name="lap_time" step="0.001" min="0"></label>
      <label>{date_label} <input type="date" name="date"></label>
      <button type="submit">{button}</button>
    </fieldset>
  </form>
</div>"#,
        lang = language.code(),
        legend = escape(&t.update_lap_time_for(&summary.name)),
        lap_time_label = escape(t.lap_time_label),
        date_label = escape(t.date_label),
        button = escape(t.update_lap_time_button),
    )
}
