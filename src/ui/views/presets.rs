use stowbox::domain::entities::BoxConfig;
use stowbox::presets::BoxPreset;

use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::KeyValueTable;

pub fn render_presets(
    presets: &[(BoxPreset, BoxConfig)],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut table = KeyValueTable::new();
    for (preset, config) in presets {
        table.add(
            preset.as_str(),
            format!(
                "{:?}×{:?}×{:?} {} {}",
                config.width, config.depth, config.height, config.design, config.material
            ),
        );
        if !config.description.is_empty() {
            table.add(
                "",
                ColoredText::dim(config.description.as_str()).render(supports_color),
            );
        }
    }

    let mut b = Box::with_title(format!("Presets ({})", presets.len()));
    b.add_empty();
    b.add_lines(table.lines());
    b.render(supports_color, supports_unicode)
}
