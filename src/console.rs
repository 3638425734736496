//! Line-oriented session over a lap tracker, for use in a terminal

use std::io::{BufRead, Write};

use crate::{
    domain::{
        lap::{INPUT_DATE_FORMAT, parse_date, parse_lap_time},
        track::TrackSummary,
    },
    i18n::{Language, Translation},
    notify::Notification,
    tracker::LapTracking,
};

const HELP: &str = "\
commands:
  tracks                          list tracks with their laps
  add <name>                      add a track
  lap <date> <seconds> <track>    record a lap, date as YYYY-MM-DD
  best                            show the best lap on any track
  lang <pl|en>                    switch language
  help                            show this text
  quit                            leave";

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Tracks,
    Add(&'a str),
    Lap {
        date: &'a str,
        lap_time: &'a str,
        track: &'a str,
    },
    Best,
    Lang(&'a str),
    Help,
    Quit,
}

impl<'a> Command<'a> {
    /// None for blank lines
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = next_token(line);

        let command = match word {
            "tracks" => Command::Tracks,
            "add" => Command::Add(rest),
            "lap" => {
                let (date, rest) = next_token(rest);
                let (lap_time, track) = next_token(rest);
                Command::Lap {
                    date,
                    lap_time,
                    track: track.trim_end(),
                }
            }
            "best" => Command::Best,
            "lang" => Command::Lang(rest),
            "quit" | "exit" => Command::Quit,
            _ => Command::Help,
        };
        Some(command)
    }
}

/// first whitespace-separated word and the remainder with leading whitespace removed
fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim_start()),
        None => (s, ""),
    }
}

/// A console session owning its tracker
pub struct Session<T> {
    tracker: T,
    language: Language,
}

impl<T: LapTracking> Session<T> {
    pub fn new(tracker: T, language: Language) -> Self {
        Self { tracker, language }
    }

    #[cfg(test)]
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Reads commands until `quit` or end of input
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        writeln!(output, "{}", self.language.translation().title)?;
        writeln!(output, "{HELP}")?;

        for line in input.lines() {
            let line = line?;
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            if command == Command::Quit {
                break;
            }
            self.execute(command, &mut output)?;
        }
        Ok(())
    }

    fn execute(&mut self, command: Command<'_>, output: &mut impl Write) -> anyhow::Result<()> {
        let t = self.language.translation();
        match command {
            Command::Tracks => {
                for summary in self.tracker.summaries() {
                    writeln!(output, "{}", describe(t, &summary))?;
                }
            }
            Command::Add(name) => {
                let notification = match self.tracker.add_track(name) {
                    Ok(()) => Notification::track_added(self.language),
                    Err(e) => Notification::error(self.language, &e),
                };
                print_notification(output, &notification)?;
            }
            Command::Lap {
                date,
                lap_time,
                track,
            } => {
                let result =
                    self.tracker
                        .record_lap(track, parse_lap_time(lap_time), parse_date(date));
                let notification = match result {
                    Ok(recorded) => Notification::lap_recorded(self.language, &recorded),
                    Err(e) => Notification::error(self.language, &e),
                };
                print_notification(output, &notification)?;
            }
            Command::Best => match self.tracker.best_lap_overall() {
                Some(best) => writeln!(
                    output,
                    "{} {} ({}, {})",
                    t.overall_best,
                    best.display_time(),
                    best.track_name,
                    best.date.format(t.date_format)
                )?,
                None => writeln!(output, "{}", t.no_laps)?,
            },
            Command::Lang(code) => match code.parse::<Language>() {
                Ok(language) => self.language = language,
                Err(e) => writeln!(output, "{e}")?,
            },
            Command::Help | Command::Quit => writeln!(output, "{HELP}")?,
        }
        Ok(())
    }
}

fn print_notification(output: &mut impl Write, notification: &Notification) -> std::io::Result<()> {
    writeln!(output, "[{}] {}", notification.title, notification.description)
}

fn describe(t: &Translation, summary: &TrackSummary) -> String {
    let (Some(latest), Some(best)) = (&summary.latest, &summary.best) else {
        return format!("{}: {}", summary.name, t.no_laps);
    };
    let mut line = format!(
        "{}: {} {} {} {} | {} {}",
        summary.name,
        t.latest_time,
        latest.display_time(),
        t.date,
        latest.date.format(INPUT_DATE_FORMAT),
        t.best_time,
        best.display_time()
    );
    if let Some(delta) = summary.delta {
        line.push_str(&format!(" | {} {delta}", t.difference));
    }
    line
}
