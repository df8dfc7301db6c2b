use stowbox::application::CheckResult;

use crate::ui::blocks::check_item::render_check_item;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_check_header(
    source: &str,
    strict_warnings: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Box Check");
    header.add("Source", source);
    if strict_warnings {
        header.add("Strict", "failing on warnings");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_check_report(
    result: &CheckResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    result
        .items
        .iter()
        .map(|item| render_check_item(item, supports_color, supports_unicode))
        .collect()
}

pub fn render_check_summary(
    result: &CheckResult,
    failed: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if failed {
        "Check FAILED"
    } else if result.warnings > 0 {
        "Check passed with warnings"
    } else {
        "All checks passed"
    };

    let mut summary = if failed || result.warnings > 0 {
        ResultSummary::partial(title)
    } else {
        ResultSummary::success(title)
    };

    summary.add_line(format!("{} passed", result.passed));
    summary.add_line(format!("{} warnings", result.warnings));
    summary.add_line(format!("{} errors", result.errors));
    if failed {
        summary.with_next_step("Adjust the dimensions and run `stowbox derive` to compare");
    }

    summary.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowbox::application::CheckUseCase;
    use stowbox::domain::entities::BoxConfig;

    #[test]
    fn default_box_passes_cleanly() {
        let result = CheckUseCase::default().execute(&BoxConfig::default(), &[]);

        let report = render_check_report(&result, false, false);
        assert_eq!(report.lines().count(), 6);
        assert!(report.lines().all(|l| l.starts_with("  [OK] ")));

        let summary = render_check_summary(&result, false, false, false);
        assert!(summary.contains("[OK] All checks passed"));
        assert!(summary.contains("| 6 passed"));
        assert!(!summary.contains("Next:"));
    }

    #[test]
    fn tiny_box_fails_with_next_step() {
        let config = BoxConfig::with_dimensions(54.0, 100.0, 20.0);
        let result = CheckUseCase::default().execute(&config, &[]);

        let summary = render_check_summary(&result, true, false, false);
        assert!(summary.contains("[WARN] Check FAILED"));
        assert!(summary.contains("| 2 errors"));
        assert!(summary.contains("Next:"));
    }

    #[test]
    fn header_mentions_strict_mode() {
        let rendered = render_check_header("preset mvp", true, false, false);
        assert!(rendered.contains("Strict: failing on warnings"));
    }
}
