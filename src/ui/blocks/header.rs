use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::visible_width;

/// Title line of a streaming command, followed by `Label: value` facts
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    facts: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            facts: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.facts.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(self.title.as_str())
                .bold()
                .render(supports_color)
        );

        let width = self
            .facts
            .iter()
            .map(|(label, _)| visible_width(label))
            .max()
            .unwrap_or(0);

        for (label, value) in &self.facts {
            let pad = " ".repeat(width - visible_width(label));
            let label = ColoredText::dim(format!("{label}:")).render(supports_color);
            out.push_str(&format!("{label}{pad} {value}\n"));
        }
        out
    }
}
