use std::path::Path;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::Box;

pub fn render_config_list(
    dir: &Path,
    names: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut b = Box::with_title(format!("Saved configs in {}", dir.display()));
    b.add_empty();

    if names.is_empty() {
        b.add_line(ColoredText::dim("none yet, try `stowbox save <name>`").render(supports_color));
    }
    for name in names {
        b.add_line(format!(
            "{} {}",
            Icon::Bullet.colored(supports_color, supports_unicode),
            name
        ));
    }

    b.render(supports_color, supports_unicode)
}
