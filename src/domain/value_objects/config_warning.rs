//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal problem found while loading a settings file or box document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key the loader does not know
    UnknownKey {
        key: String,
        file: PathBuf,
        /// 1-indexed, if the key could be located
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// A version tag that differs from ours but is still readable
    VersionMismatch {
        field: &'static str,
        found: String,
        expected: &'static str,
        file: PathBuf,
    },
}

impl ConfigWarning {
    pub fn file(&self) -> &PathBuf {
        match self {
            ConfigWarning::UnknownKey { file, .. } | ConfigWarning::VersionMismatch { file, .. } => {
                file
            }
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown key '{key}' in {}", file.display())?;
                if let Some(line) = line {
                    write!(f, ":{line}")?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{suggestion}'?)")?;
                }
                Ok(())
            }
            ConfigWarning::VersionMismatch {
                field,
                found,
                expected,
                file,
            } => write!(
                f,
                "{field} {found} in {} differs from {expected}",
                file.display()
            ),
        }
    }
}
