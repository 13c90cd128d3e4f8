mod app;
mod config;
mod error;
mod event;
mod focus;
mod screens;
mod term;
mod text;
mod theme;
mod toast;
mod widgets;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::term::Term;
use crate::theme::Theme;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::default();
    let log_file = File::create(config.log_file)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut term = Term::new()?;
    App::new(config, Theme::default()).run(&mut term)
}
