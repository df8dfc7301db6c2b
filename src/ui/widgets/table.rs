use crate::ui::widgets::r#box::visible_width;

/// Label/value rows with the values aligned in one column
#[derive(Debug, Default, Clone)]
pub struct KeyValueTable {
    rows: Vec<Row>,
}

#[derive(Debug, Clone)]
enum Row {
    Pair(String, String),
    Section(String),
    Blank,
}

impl KeyValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push(Row::Pair(label.into(), value.into()));
    }

    /// Unaligned heading line
    pub fn section(&mut self, title: impl Into<String>) {
        self.rows.push(Row::Section(title.into()));
    }

    pub fn blank(&mut self) {
        self.rows.push(Row::Blank);
    }

    pub fn lines(&self) -> Vec<String> {
        let label_width = self
            .rows
            .iter()
            .filter_map(|row| match row {
                Row::Pair(label, _) => Some(visible_width(label)),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        self.rows
            .iter()
            .map(|row| match row {
                Row::Pair(label, value) => {
                    let pad = label_width - visible_width(label);
                    format!("{label}{}  {value}", " ".repeat(pad))
                }
                Row::Section(title) => title.clone(),
                Row::Blank => String::new(),
            })
            .collect()
    }
}
