//! Per-run state shared by every command handler

use anyhow::Result;
use stowbox::config::{ConfigWarning, Settings};
use stowbox::YamlConfigRepository;

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};

pub struct CommandContext {
    pub command: &'static str,
    pub settings: Settings,
    pub settings_warnings: Vec<ConfigWarning>,
    pub ui: UiContext,
}

impl CommandContext {
    pub fn load(cli: &Cli) -> Result<Self> {
        let (settings, settings_warnings) = match &cli.settings {
            Some(path) => {
                let (settings, warnings) = Settings::load_with_warnings(path)?;
                tracing::debug!(path = %path.display(), "loaded settings");
                (settings.with_env_overrides(), warnings)
            }
            None => {
                let cwd = std::env::current_dir()?;
                Settings::load_or_default(Some(&cwd))
            }
        };

        // The flag wins over the settings file.
        crate::set_log_color(cli.color.unwrap_or(settings.output.color));
        let ui = UiContext::new(cli.json, cli.verbose, cli.color, &settings);

        Ok(Self {
            command: cli.command.name(),
            settings,
            settings_warnings,
            ui,
        })
    }

    pub fn repository(&self) -> Result<YamlConfigRepository> {
        Ok(YamlConfigRepository::new(&self.settings.storage.config_dir)?)
    }

    /// `start` event plus any settings warnings
    pub fn begin(&self) -> Result<()> {
        if self.ui.json {
            crate::ui::json::emit_event(&StartEvent::new(self.command))?;
        }
        crate::ui::output::print_config_warnings(self.command, &self.settings_warnings, &self.ui)?;
        Ok(())
    }

    pub fn data<T: serde::Serialize>(&self, data: T) -> Result<()> {
        crate::ui::json::emit_event(&DataEvent::new(self.command, data))?;
        Ok(())
    }

    pub fn finish(&self, success: bool) -> Result<()> {
        if self.ui.json {
            let event = if success {
                CompleteEvent::success(self.command)
            } else {
                CompleteEvent::failure(self.command)
            };
            crate::ui::json::emit_event(&event)?;
        }
        Ok(())
    }
}
