use stowbox::BoxError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::ci::{github_annotation, in_github_actions, AnnotationLevel};
use crate::ui::json::events::ErrorEvent;

/// Stable code used in the NDJSON `error` event
pub fn error_code(err: &BoxError) -> &'static str {
    match err {
        BoxError::ConfigNotFound { .. } => "config_not_found",
        BoxError::IncompatibleFormat { .. } => "incompatible_format",
        BoxError::InvalidDocument { .. } => "invalid_document",
        BoxError::InvalidSettings { .. } => "invalid_settings",
        BoxError::InvalidOption { .. } => "invalid_option",
        BoxError::UnknownPreset { .. } => "unknown_preset",
        BoxError::UnknownRule { .. } => "unknown_rule",
        BoxError::Io(_) => "io",
        BoxError::Yaml(_) => "yaml",
    }
}

fn fix_hint(err: &BoxError) -> Option<String> {
    match err {
        BoxError::ConfigNotFound { .. } => {
            Some("Run `stowbox list` to see saved configs.".to_string())
        }
        BoxError::IncompatibleFormat { expected, .. } => Some(format!(
            "Re-save the config with this version (format {expected})."
        )),
        BoxError::InvalidDocument { .. } => {
            Some("Fix the YAML or delete the file and save it again.".to_string())
        }
        BoxError::InvalidSettings { .. } => {
            Some("Fix the TOML or pass another file with --settings.".to_string())
        }
        BoxError::InvalidOption { .. } => {
            Some("Run `stowbox options` to list every accepted value.".to_string())
        }
        BoxError::UnknownPreset { .. } => {
            Some("Run `stowbox presets` to list the presets.".to_string())
        }
        _ => None,
    }
}

pub fn format_box_error(err: &BoxError, supports_color: bool, supports_unicode: bool) -> String {
    let mut block = ErrorBlock::new(err.to_string());
    if let Some(file) = err.file() {
        block = block.with_file(file);
    }
    if let Some(fix) = fix_hint(err) {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(box_err) = err.downcast_ref::<BoxError>() {
        return format_box_error(box_err, supports_color, supports_unicode);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    let box_err = err.downcast_ref::<BoxError>();

    if json {
        let code = box_err.map(error_code).unwrap_or("error");
        let mut event = ErrorEvent::new(code, format!("{:#}", err));
        if let Some(file) = box_err.and_then(BoxError::file) {
            event = event.with_file(file.display().to_string());
        }
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    if in_github_actions() {
        let file = box_err
            .and_then(BoxError::file)
            .map(|p| p.display().to_string());
        println!(
            "{}",
            github_annotation(AnnotationLevel::Error, &err.to_string(), file.as_deref())
        );
    }

    let caps = crate::ui::terminal::detect_capabilities();
    let color = crate::ui::terminal::stderr_supports_color();
    eprint!("{}", format_error(err, color, caps.supports_unicode));
}
