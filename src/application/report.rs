//! Design report
//!
//! One serializable bundle with everything a downstream mesh builder reads:
//! the config echo, derived dimensions, print-mode adjusted tokens, rule
//! results and warnings.

use serde::Serialize;

use crate::domain::entities::BoxConfig;
use crate::domain::policies::{RuleResults, RulesEngine};
use crate::domain::services::{DerivedConfig, DerivedSnapshot, DesignTokens};
use crate::error::BoxResult;

/// Bump when the report layout changes
pub const REPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignReport {
    pub report_version: u32,
    pub config: BoxConfig,
    pub derived: DerivedSnapshot,
    pub tokens: DesignTokens,
    pub rules: RuleResults,
    pub warnings: Vec<String>,
}

impl DesignReport {
    pub fn build(config: &BoxConfig, rules: &RulesEngine) -> Self {
        let derived = DerivedConfig::new(config);
        let tokens = DesignTokens::from_style(config.design, derived.wall_thickness())
            .apply_print_mode(config.print_mode);

        let mut warnings = derived.validate();
        warnings.extend(rules.validate_all(config));

        Self {
            report_version: REPORT_VERSION,
            config: config.clone(),
            derived: derived.snapshot(),
            tokens,
            rules: rules.evaluate_all(config),
            warnings,
        }
    }

    pub fn to_json(&self) -> BoxResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| std::io::Error::other(e).into())
    }
}
