//! stowbox CLI - parametric storage box configurator
//!
//! Usage: stowbox <COMMAND>
//!
//! Commands:
//!   derive   Show every derived dimension for a box
//!   check    Validate a box (non-zero exit on errors)
//!   save     Save a configuration under a name
//!   plan     Write a print manifest

use std::io;
use std::sync::OnceLock;

use clap::Parser;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

mod cli;
mod commands;
mod ui;

use cli::Cli;
use stowbox::config::ColorMode;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.color);

    if let Err(e) = commands::run(&cli) {
        ui::error::print_error(&e, cli.json);
        std::process::exit(1);
    }
}

type StderrLayer = fmt::Layer<Registry, DefaultFields, Format, fn() -> io::Stderr>;

static LOG_LAYER: OnceLock<reload::Handle<StderrLayer, Registry>> = OnceLock::new();

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_logging(verbose: u8, color: Option<ColorMode>) {
    let filter = ["STOWBOX_LOG", "RUST_LOG"]
        .iter()
        .find_map(|key| {
            std::env::var(key)
                .ok()
                .filter(|v| !v.is_empty())
                .and_then(|v| EnvFilter::try_new(v).ok())
        })
        .unwrap_or_else(|| EnvFilter::new(level_for(verbose)));

    let layer: StderrLayer = fmt::layer()
        .with_writer(io::stderr as fn() -> io::Stderr)
        .with_ansi(log_ansi(color.unwrap_or_default()))
        .with_target(false);
    let (layer, handle) = reload::Layer::new(layer);

    if tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .is_ok()
    {
        let _ = LOG_LAYER.set(handle);
    }
}

/// Re-resolve log colors once the settings file has been read
pub(crate) fn set_log_color(mode: ColorMode) {
    if let Some(handle) = LOG_LAYER.get() {
        let ansi = log_ansi(mode);
        if let Err(err) = handle.modify(|layer| layer.set_ansi(ansi)) {
            tracing::debug!(%err, "could not update log colors");
        }
    }
}

fn log_ansi(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => ui::terminal::stderr_supports_color(),
    }
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(7), "trace");
    }

    #[test]
    fn explicit_color_modes_decide_log_ansi() {
        assert!(log_ansi(ColorMode::Always));
        assert!(!log_ansi(ColorMode::Never));
    }
}
