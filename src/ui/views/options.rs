use stowbox::domain::value_objects::OptionCatalogEntry;

use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::KeyValueTable;

pub fn render_options(
    catalog: &[OptionCatalogEntry],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut table = KeyValueTable::new();
    for entry in catalog {
        table.add(entry.name, entry.values.join(", "));
    }

    let mut b = Box::with_title("Options");
    b.add_empty();
    b.add_lines(table.lines());
    b.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowbox::domain::value_objects::option_catalog;

    #[test]
    fn material_values_are_listed_in_order() {
        let rendered = render_options(&option_catalog(), false, false);
        let line = rendered
            .lines()
            .find(|l| l.starts_with("| material "))
            .unwrap();
        assert!(line.contains("hyper_pla, petg, abs"));
    }
}
