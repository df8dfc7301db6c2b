use stowbox::application::PrintManifest;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::KeyValueTable;

pub fn render_manifest(
    manifest: &PrintManifest,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut table = KeyValueTable::new();
    table.add("Printer", manifest.printer.as_str());
    table.add("Material", manifest.material.as_str());
    table.blank();

    for file in &manifest.files {
        let quantity = if file.quantity > 1 {
            format!(" ×{}", file.quantity)
        } else {
            String::new()
        };
        table.add(
            format!("{}{quantity}", file.name),
            format!("{}  {}", file.time, file.weight),
        );
        if verbose > 0 {
            table.add(
                "",
                ColoredText::dim(format!(
                    "{}, infill {}, {} walls, supports {}",
                    file.orientation,
                    file.infill,
                    file.walls,
                    if file.supports { "yes" } else { "no" }
                ))
                .render(supports_color),
            );
            if !file.notes.is_empty() {
                table.add("", ColoredText::dim(file.notes.as_str()).render(supports_color));
            }
        }
    }

    table.blank();
    table.add(
        "Total",
        format!("{}  {}", manifest.total_time, manifest.total_weight),
    );

    let title = format!(
        "{} {}",
        Icon::Plan.colored(supports_color, supports_unicode),
        manifest.model
    );
    let mut b = Box::with_title(title);
    b.add_empty();
    b.add_lines(table.lines());

    b.add_empty();
    for note in &manifest.assembly_notes {
        b.add_line(format!(
            "{} {}",
            Icon::Bullet.render(supports_unicode),
            note
        ));
    }
    b.render(supports_color, supports_unicode)
}
