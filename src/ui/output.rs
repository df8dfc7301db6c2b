use stowbox::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;
use crate::ui::json::events::WarningEvent;

/// Report non-fatal warnings on stderr, or as `warning` events with `--json`.
pub fn print_warnings(command: &str, warnings: &[String], ui: &UiContext) -> std::io::Result<()> {
    if warnings.is_empty() {
        return Ok(());
    }

    if ui.json {
        for w in warnings {
            crate::ui::json::emit_event(&WarningEvent::new(command, w.as_str()))?;
        }
        return Ok(());
    }

    eprint!("{}", render_warnings(warnings, ui.color, ui.unicode));
    Ok(())
}

pub fn print_config_warnings(
    command: &str,
    warnings: &[ConfigWarning],
    ui: &UiContext,
) -> std::io::Result<()> {
    let messages: Vec<String> = warnings.iter().map(ToString::to_string).collect();
    print_warnings(command, &messages, ui)
}

fn render_warnings(warnings: &[String], supports_color: bool, supports_unicode: bool) -> String {
    let title = match warnings.len() {
        1 => "1 warning".to_string(),
        n => format!("{n} warnings"),
    };
    let mut block = WarningBlock::new(title);
    for w in warnings {
        block.add_line(w.as_str());
    }
    block.render(supports_color, supports_unicode)
}
