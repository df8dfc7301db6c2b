//! Domain Policies
//!
//! Configuration rules that can be evaluated one at a time.

mod rules;

pub use rules::{
    ConnectionRule, DividerCountRule, EnableLabelRule, EnableSmartCartridgeRule, Rule,
    RuleResults, RuleValue, RulesEngine, ToleranceRule, WallThicknessRule,
};
