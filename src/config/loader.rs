//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{BoxError, BoxResult};

use super::keys::unknown_key_warnings;
use super::types::Settings;

/// Settings file looked up in the working directory
pub const PROJECT_SETTINGS_FILE: &str = "stowbox.toml";

const KNOWN_KEYS: &[&str] = &[
    "storage",
    "config_dir",
    "include_derived",
    "output",
    "color",
    "unicode",
    "defaults",
    "material",
    "printer",
    "print_mode",
];

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BoxResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BoxError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_key_warnings(unknown_paths, &content, path, KNOWN_KEYS);
    Ok((settings, warnings))
}

/// Load from `./stowbox.toml`, the user config, or defaults.
///
/// Unreadable files are logged and skipped.
pub fn load_or_default(cwd: Option<&Path>) -> (Settings, Vec<ConfigWarning>) {
    let candidates = cwd
        .map(|dir| dir.join(PROJECT_SETTINGS_FILE))
        .into_iter()
        .chain(user_settings_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((settings, warnings)) => {
                tracing::debug!(path = %path.display(), "loaded settings");
                return (with_env_overrides(settings), warnings);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring settings file");
            }
        }
    }

    (with_env_overrides(Settings::default()), Vec::new())
}

/// `$XDG_CONFIG_HOME/stowbox/config.toml`, or the platform config dir
pub fn user_settings_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("stowbox").join("config.toml"))
}

/// Apply environment variable overrides (STOWBOX_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    with_env_overrides_from(settings, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from<F>(mut settings: Settings, get_env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = get_env("STOWBOX_CONFIG_DIR").filter(|v| !v.is_empty()) {
        settings.storage.config_dir = PathBuf::from(dir);
    }

    if let Some(color) = get_env("STOWBOX_COLOR") {
        match color.parse() {
            Ok(mode) => settings.output.color = mode,
            Err(err) => tracing::warn!(%err, "ignoring STOWBOX_COLOR"),
        }
    }

    if let Some(material) = get_env("STOWBOX_MATERIAL") {
        match material.parse() {
            Ok(m) => settings.defaults.material = m,
            Err(err) => tracing::warn!(%err, "ignoring STOWBOX_MATERIAL"),
        }
    }

    if let Some(printer) = get_env("STOWBOX_PRINTER") {
        match printer.parse() {
            Ok(p) => settings.defaults.printer = p,
            Err(err) => tracing::warn!(%err, "ignoring STOWBOX_PRINTER"),
        }
    }

    settings
}
