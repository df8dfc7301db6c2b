//! Tool settings for stowbox
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STOWBOX_*)
//! 3. `./stowbox.toml`
//! 4. User config (`$XDG_CONFIG_HOME/stowbox/config.toml`)
//! 5. Built-in defaults (lowest priority)

pub(crate) mod keys;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{user_settings_path, PROJECT_SETTINGS_FILE};
pub use types::{ColorMode, DefaultsSettings, OutputSettings, Settings, StorageSettings};
