use stowbox::application::{CheckItem, CheckStatus};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_item(item: &CheckItem, supports_color: bool, supports_unicode: bool) -> String {
    let icon = match item.status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Warning => Icon::Warning,
        CheckStatus::Error => Icon::Error,
    }
    .colored(supports_color, supports_unicode);

    let message = match item.status {
        CheckStatus::Error => ColoredText::error(item.message.as_str()).render(supports_color),
        _ => item.message.clone(),
    };

    format!("  {} {} - {}\n", icon, item.name, message)
}
