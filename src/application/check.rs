//! Check Use Case
//!
//! Runs every validation over a configuration and classifies the outcome:
//! geometry limits that make the box unbuildable are errors, everything
//! else (raw config warnings, rule warnings, document warnings) is a warning.

use crate::domain::entities::BoxConfig;
use crate::domain::policies::RulesEngine;
use crate::domain::services::derived::{MAX_WALL, MIN_INNER_WIDTH, MIN_WALL};
use crate::domain::services::DerivedConfig;
use crate::domain::value_objects::ConfigWarning;

const MIN_DRAWER_INNER_DEPTH: f64 = 15.0;

/// Options for the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Treat warnings as errors
    pub strict_warnings: bool,
}

/// Result of a single check
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CheckItem {
    /// Name of the check
    pub name: String,
    pub status: CheckStatus,
    /// Human-readable message
    pub message: String,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub items: Vec<CheckItem>,
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl CheckResult {
    /// No errors
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }

    /// Whether the run should fail under the given options
    pub fn fails(&self, options: &CheckOptions) -> bool {
        !self.is_success() || (options.strict_warnings && self.warnings > 0)
    }

    fn push(&mut self, item: CheckItem) {
        match item.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(item);
    }
}

/// Check Use Case
pub struct CheckUseCase {
    rules: RulesEngine,
}

impl Default for CheckUseCase {
    fn default() -> Self {
        Self::new(RulesEngine::new())
    }
}

impl CheckUseCase {
    pub fn new(rules: RulesEngine) -> Self {
        Self { rules }
    }

    /// Check a config; `document_warnings` come from loading it, if it was loaded
    pub fn execute(&self, config: &BoxConfig, document_warnings: &[ConfigWarning]) -> CheckResult {
        self.execute_with_callback(config, document_warnings, |_| {})
    }

    /// Execute with a callback for each check (for streaming UI)
    pub fn execute_with_callback<F>(
        &self,
        config: &BoxConfig,
        document_warnings: &[ConfigWarning],
        mut on_check: F,
    ) -> CheckResult
    where
        F: FnMut(&CheckItem),
    {
        let mut result = CheckResult::default();
        let mut emit = |item: CheckItem| {
            on_check(&item);
            result.push(item);
        };

        let derived = DerivedConfig::new(config);

        let wall = derived.wall_thickness();
        emit(limit_check(
            "wall_thickness",
            (MIN_WALL..=MAX_WALL).contains(&wall),
            format!("{wall:.1} mm (allowed {MIN_WALL}..{MAX_WALL})"),
        ));

        let inner_w = derived.effective_inner_width();
        emit(limit_check(
            "inner_width",
            inner_w >= MIN_INNER_WIDTH,
            format!("{inner_w:.1} mm (minimum {MIN_INNER_WIDTH:.0})"),
        ));

        let drawer_depth = derived.drawer_inner_depth();
        emit(limit_check(
            "drawer_depth",
            drawer_depth >= MIN_DRAWER_INNER_DEPTH,
            format!("{drawer_depth:.1} mm (minimum {MIN_DRAWER_INNER_DEPTH:.0})"),
        ));

        warning_checks("config", config.validate(), &mut emit);
        warning_checks("rules", self.rules.validate_all(config), &mut emit);
        warning_checks(
            "document",
            document_warnings.iter().map(ToString::to_string).collect(),
            &mut emit,
        );

        tracing::debug!(
            passed = result.passed,
            warnings = result.warnings,
            errors = result.errors,
            "config checked"
        );
        result
    }
}

fn limit_check(name: &str, ok: bool, message: String) -> CheckItem {
    CheckItem {
        name: name.to_string(),
        status: if ok {
            CheckStatus::Pass
        } else {
            CheckStatus::Error
        },
        message,
    }
}

fn warning_checks(name: &str, messages: Vec<String>, emit: &mut impl FnMut(CheckItem)) {
    if messages.is_empty() {
        emit(CheckItem {
            name: name.to_string(),
            status: CheckStatus::Pass,
            message: "no warnings".to_string(),
        });
        return;
    }
    for message in messages {
        emit(CheckItem {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BoxConfig;
    use crate::domain::policies::{Rule, RuleValue};
    use crate::domain::value_objects::{MaterialType, RunePattern};
    use std::path::PathBuf;

    struct AlwaysWarn;

    impl Rule for AlwaysWarn {
        fn name(&self) -> &str {
            "always_warn"
        }

        fn evaluate(&self, _config: &BoxConfig) -> RuleValue {
            RuleValue::Flag(true)
        }

        fn validate(&self, _config: &BoxConfig) -> Vec<String> {
            vec!["custom rule warning".to_string()]
        }
    }

    #[test]
    fn check_result_default_is_empty() {
        let result = CheckResult::default();
        assert!(result.items.is_empty());
        assert!(result.is_clean());
    }

    #[test]
    fn default_box_is_clean() {
        let result = CheckUseCase::default().execute(&BoxConfig::default(), &[]);

        assert!(result.is_clean());
        assert_eq!(result.passed, 6);
        let names: Vec<_> = result.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            ["wall_thickness", "inner_width", "drawer_depth", "config", "rules", "document"]
        );
    }

    #[test]
    fn tiny_box_has_errors() {
        let config = BoxConfig::with_dimensions(54.0, 100.0, 20.0);
        let result = CheckUseCase::default().execute(&config, &[]);

        assert!(!result.is_success());
        assert_eq!(result.errors, 2);
        assert!(result.fails(&CheckOptions::default()));
    }

    #[test]
    fn warnings_fail_only_when_strict() {
        let config = BoxConfig {
            sealed: true,
            material: MaterialType::HyperPla,
            pattern: crate::domain::entities::PatternConfig {
                kind: RunePattern::WaveRune,
                ..Default::default()
            },
            ..BoxConfig::default()
        };
        let result = CheckUseCase::default().execute(&config, &[]);

        assert!(result.is_success());
        assert_eq!(result.warnings, 2);
        assert!(!result.fails(&CheckOptions::default()));
        assert!(result.fails(&CheckOptions {
            strict_warnings: true
        }));
    }

    #[test]
    fn custom_rule_and_document_warnings_are_reported() {
        let mut rules = RulesEngine::new();
        rules.add_rule(Box::new(AlwaysWarn));
        let warning = ConfigWarning::UnknownKey {
            key: "dimensions.widht".to_string(),
            file: PathBuf::from("configs/desk.yaml"),
            line: Some(2),
            suggestion: Some("width".to_string()),
        };

        let result = CheckUseCase::new(rules).execute(&BoxConfig::default(), &[warning]);

        assert_eq!(result.warnings, 2);
        let rule_item = result.items.iter().find(|i| i.name == "rules").unwrap();
        assert_eq!(rule_item.message, "custom rule warning");
        let doc_item = result.items.iter().find(|i| i.name == "document").unwrap();
        assert!(doc_item.message.contains("did you mean 'width'"));
    }

    #[test]
    fn callback_receives_every_item() {
        let mut seen = 0;
        let result = CheckUseCase::default().execute_with_callback(
            &BoxConfig::default(),
            &[],
            |_item| seen += 1,
        );
        assert_eq!(seen, result.items.len());
    }
}
