//! Settings types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConfigWarning, MaterialType, PrintMode, PrinterProfile};
use crate::error::BoxResult;

use super::loader;

/// Tool settings read from `stowbox.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub defaults: DefaultsSettings,
}

/// Where box documents are kept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Write the `_derived` section on every save
    #[serde(default)]
    pub include_derived: bool,
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("configs")
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            include_derived: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("unknown color mode '{other}'")),
        }
    }
}

/// Defaults for boxes built from CLI flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsSettings {
    #[serde(default)]
    pub material: MaterialType,

    #[serde(default)]
    pub printer: PrinterProfile,

    #[serde(default)]
    pub print_mode: PrintMode,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> BoxResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load settings and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> BoxResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the working directory, user config, or defaults
    pub fn load_or_default(cwd: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(cwd)
    }

    /// Apply environment variable overrides (STOWBOX_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
