use stowbox::domain::entities::BoxConfig;
use stowbox::domain::services::DerivedConfig;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{flag, ColoredText};
use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::KeyValueTable;

fn mm(value: f64) -> String {
    format!("{value:.1} mm")
}

fn dims(w: f64, d: f64, h: f64) -> String {
    format!("{w:.1} × {d:.1} × {h:.1} mm")
}

pub fn box_title(config: &BoxConfig) -> String {
    format!(
        "{:?}×{:?}×{:?} {}",
        config.width, config.depth, config.height, config.design
    )
}

pub fn render_derived(
    derived: &DerivedConfig<'_>,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let config = derived.config();
    let tol = derived.tolerances();
    let (cols, rows) = derived.divider_count();

    let mut table = KeyValueTable::new();
    table.add("Material", format!("{} on {}", config.material, config.printer));
    table.add("Print mode", config.print_mode.as_str());
    table.blank();
    table.add(
        "External",
        dims(config.width, config.depth, config.height),
    );
    table.add(
        "Internal",
        dims(
            derived.effective_inner_width(),
            derived.effective_inner_depth(),
            derived.effective_inner_height(),
        ),
    );
    table.add(
        "Drawer",
        dims(
            derived.drawer_width(),
            derived.drawer_depth(),
            derived.drawer_height(),
        ),
    );
    table.blank();
    table.add("Wall", mm(derived.wall_thickness()));
    table.add("Floor", mm(derived.floor_thickness()));
    table.add("Slide clearance", format!("{:.2} mm", tol.slide));
    table.add("Snap clearance", format!("{:.2} mm", tol.snap));
    table.add("Connection", derived.connection_auto().as_str());
    table.add("Dividers", format!("{cols}×{rows}"));

    if verbose > 0 {
        table.blank();
        table.section(ColoredText::dim("Details").render(supports_color));
        table.add("Between rails", mm(derived.space_between_rails()));
        table.add(
            "Front opening",
            format!(
                "{:.1} × {:.1} mm",
                derived.front_opening_width(),
                derived.front_opening_height()
            ),
        );
        table.add(
            "Drawer inside",
            dims(
                derived.drawer_inner_width(),
                derived.drawer_inner_length(),
                derived.drawer_inner_depth(),
            ),
        );
        table.add("Drawer wall", mm(derived.drawer_wall_thickness()));
        table.add("Front panel", mm(derived.front_panel_thickness()));
        table.add(
            "Lead-in",
            format!(
                "{:.1} mm at {:.2} mm",
                derived.lead_in_length(),
                derived.lead_in_tolerance()
            ),
        );
        let whisker = derived.whisker_params();
        table.add(
            "Whisker",
            format!(
                "{:.1} × {:.1} mm ({})",
                whisker.thickness, whisker.length, whisker.stiffness
            ),
        );
        table.add("Shadow gap", mm(derived.shadow_gap_size()));
        if let Some(pattern) = derived.pattern_params() {
            table.add(
                "Pattern",
                format!(
                    "{} at {}, every {:.1} mm",
                    pattern.kind, pattern.position, pattern.spacing
                ),
            );
        }
    }

    table.blank();
    table.section("Features");
    for (name, enabled) in derived.features_enabled().entries() {
        table.add(format!("  {name}"), flag(enabled, supports_color));
    }

    let title = format!(
        "{} {}",
        Icon::Box.colored(supports_color, supports_unicode),
        ColoredText::info(box_title(config))
            .bold()
            .render(supports_color)
    );
    let mut b = Box::with_title(title);
    b.add_empty();
    b.add_lines(table.lines());
    b.render(supports_color, supports_unicode)
}
