use crate::cli::run;

pub mod cli;
mod config;
mod console;
pub mod domain;
pub mod http;
mod i18n;
mod notify;
pub mod tracker;

fn main() -> anyhow::Result<()> {
    run()
}
