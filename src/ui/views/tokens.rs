use stowbox::domain::services::{DesignTokens, TokenParam};
use stowbox::domain::value_objects::{DesignStyle, PrintMode};

use crate::ui::primitives::text::flag;
use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::KeyValueTable;

fn param(value: &TokenParam) -> String {
    match value {
        TokenParam::Number(n) => format!("{n}"),
        TokenParam::Text(t) => (*t).to_string(),
    }
}

pub fn render_tokens(
    style: DesignStyle,
    mode: PrintMode,
    tokens: &DesignTokens,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut table = KeyValueTable::new();
    table.add("Outer radius", format!("{:.1} mm", tokens.radius_outer));
    table.add("Inner radius", format!("{:.1} mm", tokens.radius_inner));
    table.add("Chamfer", format!("{:.1} mm", tokens.chamfer));
    table.add(
        "Secondary chamfer",
        format!(
            "{:.1} mm at {:.0}°",
            tokens.chamfer_secondary, tokens.chamfer_secondary_angle
        ),
    );
    table.add(
        "Groove",
        format!(
            "{:.1} × {:.1} mm",
            tokens.groove_width, tokens.groove_depth
        ),
    );
    table.add("Pattern", tokens.pattern_type.as_str());
    for (key, value) in &tokens.pattern_params {
        table.add(format!("  {key}"), param(value));
    }
    table.blank();
    table.add("Handle", tokens.handle_profile.as_str());
    table.add(
        "Handle size",
        format!(
            "{:.1} × {:.1} mm, r{:.1}",
            tokens.handle_width, tokens.handle_height, tokens.handle_inner_radius
        ),
    );
    table.add(
        "Tactile mark",
        flag(tokens.handle_tactile_mark, supports_color),
    );
    table.add("Label frame", tokens.label_frame_style.as_str());
    table.add(
        "Label frame width",
        format!("{:.1} mm", tokens.label_frame_width),
    );
    table.add("Shadow gap", format!("{:.1} mm", tokens.shadow_gap));
    table.add("Version mark", flag(tokens.version_mark, supports_color));
    table.add("Rune key", flag(tokens.rune_key, supports_color));
    table.add("Rivet dots", flag(tokens.rivet_dots, supports_color));

    let mut b = Box::with_title(format!("Design tokens: {style} ({mode})"));
    b.add_empty();
    b.add_lines(table.lines());
    b.render(supports_color, supports_unicode)
}
