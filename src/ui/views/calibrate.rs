use stowbox::application::CalibrationKit;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::KeyValueTable;

fn join_mm(values: &[f64], precision: usize) -> String {
    values
        .iter()
        .map(|v| format!("{v:.precision$}"))
        .collect::<Vec<_>>()
        .join(" / ")
        + " mm"
}

pub fn render_calibration(kit: &CalibrationKit, supports_color: bool, supports_unicode: bool) -> String {
    let mut table = KeyValueTable::new();
    table.add("Material", kit.material.as_str());
    table.add("Printer", kit.printer.as_str());
    table.add(
        "Base tolerance",
        format!("{:.2} mm ({:+.2} printer)", kit.base_tolerance, kit.printer_modifier),
    );
    for (fit, value) in kit.tolerances.entries() {
        table.add(format!("  {fit}"), format!("{value:.2} mm"));
    }

    table.blank();
    table.section("Clearance ladders");
    for ladder in &kit.ladders {
        let label = if ladder.name == kit.recommended_ladder {
            ColoredText::success(format!("{} *", ladder.name))
                .bold()
                .render(supports_color)
        } else {
            ladder.name.to_string()
        };
        table.add(format!("  {label}"), join_mm(&ladder.clearances, 2));
    }

    table.blank();
    table.section("Test pieces");
    for piece in &kit.pieces {
        table.add(format!("  {}", piece.name), join_mm(&piece.values, 1));
        table.add("", ColoredText::dim(piece.purpose).render(supports_color));
    }

    table.blank();
    table.section("Whiskers");
    for sample in &kit.whiskers {
        table.add(
            format!("  {}", sample.variant),
            format!(
                "{:.1} × {:.0} mm, {}",
                sample.params.thickness, sample.params.length, sample.params.stiffness
            ),
        );
    }

    let title = format!(
        "{} Calibration kit (slide {:.2} mm)",
        Icon::Calibrate.colored(supports_color, supports_unicode),
        kit.recommended_slide
    );
    let mut b = Box::with_title(title);
    b.add_empty();
    b.add_lines(table.lines());
    b.render(supports_color, supports_unicode)
}
