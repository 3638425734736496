//! User-facing strings for both supported languages

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::Pl => Language::En,
            Language::En => Language::Pl,
        }
    }

    /// label of the button switching to the other language
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::Pl => "ENG",
            Language::En => "PL",
        }
    }

    pub fn translation(&self) -> &'static Translation {
        match self {
            Language::Pl => &PL,
            Language::En => &EN,
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pl" => Ok(Language::Pl),
            "en" => Ok(Language::En),
            other => Err(anyhow::anyhow!("unsupported language '{other}'")),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Keys for messages produced by tracker operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    TrackAdded,
    TrackExists,
    EnterTrackName,
    FillAllFields,
    LapTimeMustBePositive,
    UnknownTrack,
    LapTimeUpdated,
    NewBestLap,
}

pub struct Translation {
    pub title: &'static str,
    pub track_name_label: &'static str,
    pub lap_time_label: &'static str,
    pub date_label: &'static str,
    pub update_lap_time_button: &'static str,
    pub no_laps: &'static str,
    pub latest_time: &'static str,
    pub best_time: &'static str,
    pub date: &'static str,
    pub difference: &'static str,
    pub overall_best: &'static str,
    pub add_track: &'static str,
    pub enter_track_name: &'static str,
    pub add_track_button: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub track_added: &'static str,
    pub track_exists: &'static str,
    pub enter_track_name_error: &'static str,
    pub fill_all_fields: &'static str,
    pub lap_time_must_be_positive: &'static str,
    pub unknown_track: &'static str,
    pub lap_time_updated: &'static str,
    pub new_best_lap: &'static str,
    update_lap_time_for: &'static str,

    pub tagline: &'static str,
    pub start_now: &'static str,
    pub log_in: &'static str,
    pub test: &'static str,
    pub login_title: &'static str,
    pub register_title: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub confirm_password: &'static str,
    pub back_to_home: &'static str,

    /// chrono format used to show lap dates
    pub date_format: &'static str,
}

impl Translation {
    pub fn message(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::TrackAdded => self.track_added,
            MessageKey::TrackExists => self.track_exists,
            MessageKey::EnterTrackName => self.enter_track_name_error,
            MessageKey::FillAllFields => self.fill_all_fields,
            MessageKey::LapTimeMustBePositive => self.lap_time_must_be_positive,
            MessageKey::UnknownTrack => self.unknown_track,
            MessageKey::LapTimeUpdated => self.lap_time_updated,
            MessageKey::NewBestLap => self.new_best_lap,
        }
    }

    pub fn update_lap_time_for(&self, track_name: &str) -> String {
        format!("{} {track_name}", self.update_lap_time_for)
    }
}

pub static PL: Translation = Translation {
    title: "Czasy Okrążeń MyKart",
    track_name_label: "Nazwa Toru",
    lap_time_label: "Czas Okrążenia (sekundy)",
    date_label: "Data",
    update_lap_time_button: "Aktualizuj czas okrążenia",
    no_laps: "Brak okrążeń.",
    latest_time: "Ostatni czas:",
    best_time: "Najlepszy czas:",
    date: "Data:",
    difference: "Różnica:",
    overall_best: "Najlepsze okrążenie:",
    add_track: "Dodaj Tor",
    enter_track_name: "Nazwa toru",
    add_track_button: "Dodaj Tor",
    success: "Sukces",
    error: "Błąd",
    track_added: "Tor dodany do listy.",
    track_exists: "Tor już jest na liście.",
    enter_track_name_error: "Wprowadź nazwę toru.",
    fill_all_fields: "Wypełnij wszystkie pola.",
    lap_time_must_be_positive: "Czas okrążenia musi być większy od zera.",
    unknown_track: "Nie ma takiego toru.",
    lap_time_updated: "Czas okrążenia zaktualizowany.",
    new_best_lap: "Nowe najlepsze okrążenie!",
    update_lap_time_for: "Aktualizuj czas okrążenia dla",

    tagline: "Gromadź swoje wszystkie czasy w jednym miejscu!",
    start_now: "Zacznij już teraz!",
    log_in: "Zaloguj się",
    test: "Test",
    login_title: "Logowanie",
    register_title: "Rejestracja",
    first_name: "Imię",
    last_name: "Nazwisko",
    email: "Email",
    password: "Hasło",
    confirm_password: "Potwierdź Hasło",
    back_to_home: "Powrót na stronę główną",

    date_format: "%d.%m.%Y",
};

pub static EN: Translation = Translation {
    title: "MyKart Lap Times",
    track_name_label: "Track Name",
    lap_time_label: "Lap Time (seconds)",
    date_label: "Date",
    update_lap_time_button: "Update Lap Time",
    no_laps: "No laps recorded.",
    latest_time: "Latest Time:",
    best_time: "Best Time:",
    date: "Date:",
    difference: "Difference:",
    overall_best: "Best Lap:",
    add_track: "Add Track",
    enter_track_name: "Track name",
    add_track_button: "Add Track",
    success: "Success",
    error: "Error",
    track_added: "Track added to the list.",
    track_exists: "Track already exists.",
    enter_track_name_error: "Enter track name.",
    fill_all_fields: "Fill all fields.",
    lap_time_must_be_positive: "Lap time must be greater than zero.",
    unknown_track: "No such track.",
    lap_time_updated: "Lap time updated.",
    new_best_lap: "New best lap!",
    update_lap_time_for: "Update lap time for",

    tagline: "Collect all your lap times in one place!",
    start_now: "Start Now!",
    log_in: "Log In",
    test: "Test",
    login_title: "Login Form",
    register_title: "Register Form",
    first_name: "First Name",
    last_name: "Last Name",
    email: "Email",
    password: "Password",
    confirm_password: "Confirm Password",
    back_to_home: "Back to Home",

    date_format: "%B %-d, %Y",
};
