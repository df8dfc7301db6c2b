use stowbox::domain::policies::{RuleResults, RulesEngine};

use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::KeyValueTable;

pub fn render_rules(
    engine: &RulesEngine,
    results: &RuleResults,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut table = KeyValueTable::new();
    for (name, value) in results.iter() {
        table.add(name, value.to_string());
    }

    if verbose > 0 {
        table.blank();
        for rule in engine.rules() {
            table.add(rule.name(), rule.description());
        }
    }

    let mut b = Box::with_title(format!("Rules ({})", results.len()));
    b.add_empty();
    b.add_lines(table.lines());
    b.render(supports_color, supports_unicode)
}
