use stowbox::application::REPORT_VERSION;
use stowbox::infrastructure::repositories::{COMPAT_VERSION, FORMAT_VERSION};

use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_version(version: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut b = Box::with_style(BoxStyle::Info);
    b.add_line(format!("stowbox v{}", version));
    b.add_empty();
    b.add_line(format!("Config format:  {FORMAT_VERSION}"));
    b.add_line(format!("Compatible:     {COMPAT_VERSION}"));
    b.add_line(format!("Report version: {REPORT_VERSION}"));
    b.render(supports_color, supports_unicode)
}
