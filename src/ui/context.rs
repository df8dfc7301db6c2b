use stowbox::config::{ColorMode, Settings};

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output preferences for one command run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorMode>, settings: &Settings) -> Self {
        Self::from_caps(json, verbose, cli_color, settings, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorMode>,
        settings: &Settings,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = settings.output.unicode && caps.supports_unicode;

        // The flag wins over the settings file.
        let color = match cli_color.unwrap_or(settings.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            caps,
            color: color && !json,
            unicode,
        }
    }
}
