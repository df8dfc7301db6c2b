//! Rules engine
//!
//! The same derivation expressed as independent rule objects. Each rule can be
//! evaluated and validated on its own, and callers may register their own
//! rules next to the built-ins.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::entities::BoxConfig;
use crate::domain::services::derived::{
    connection_for, divider_grid, wall_thickness_for, RAIL_WIDTH,
};
use crate::domain::value_objects::ConnectionType;
use crate::error::{BoxError, BoxResult};

/// Value produced by a rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(f64),
    Flag(bool),
    Connection(ConnectionType),
    Grid(u32, u32),
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Number(n) => write!(f, "{n:.2}"),
            RuleValue::Flag(b) => write!(f, "{b}"),
            RuleValue::Connection(c) => write!(f, "{c}"),
            RuleValue::Grid(c, r) => write!(f, "{c}×{r}"),
        }
    }
}

/// A single configuration rule
pub trait Rule: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn evaluate(&self, config: &BoxConfig) -> RuleValue;

    /// Warnings for this rule; none unless overridden
    fn validate(&self, _config: &BoxConfig) -> Vec<String> {
        Vec::new()
    }
}

pub struct WallThicknessRule;

impl Rule for WallThicknessRule {
    fn name(&self) -> &str {
        "wall_thickness"
    }

    fn description(&self) -> &str {
        "Adaptive wall thickness based on size and load"
    }

    fn evaluate(&self, config: &BoxConfig) -> RuleValue {
        RuleValue::Number(wall_thickness_for(config))
    }
}

pub struct EnableLabelRule;

impl EnableLabelRule {
    const MIN_WIDTH: f64 = 60.0;
}

impl Rule for EnableLabelRule {
    fn name(&self) -> &str {
        "enable_label"
    }

    fn description(&self) -> &str {
        "Enable label based on minimum width"
    }

    fn evaluate(&self, config: &BoxConfig) -> RuleValue {
        RuleValue::Flag(config.width >= Self::MIN_WIDTH)
    }
}

pub struct ConnectionRule;

impl Rule for ConnectionRule {
    fn name(&self) -> &str {
        "connection_type"
    }

    fn description(&self) -> &str {
        "Smart connection type selection"
    }

    fn evaluate(&self, config: &BoxConfig) -> RuleValue {
        RuleValue::Connection(connection_for(config))
    }
}

pub struct ToleranceRule;

impl Rule for ToleranceRule {
    fn name(&self) -> &str {
        "base_tolerance"
    }

    fn description(&self) -> &str {
        "Material-specific base tolerance"
    }

    fn evaluate(&self, config: &BoxConfig) -> RuleValue {
        RuleValue::Number(config.material.base_tolerance())
    }
}

/// Divider grid estimated from external dimensions
pub struct DividerCountRule;

impl Rule for DividerCountRule {
    fn name(&self) -> &str {
        "divider_count"
    }

    fn description(&self) -> &str {
        "Auto-calculate divider grid based on target cell size"
    }

    fn evaluate(&self, config: &BoxConfig) -> RuleValue {
        let wall = wall_thickness_for(config);
        let tol = config.material.base_tolerance();
        let inner_w = config.width - 2.0 * wall - 2.0 * RAIL_WIDTH - 2.0 * tol;
        let inner_d = config.depth - 2.0 * wall;

        let (cols, rows) = divider_grid(config.dividers, config.target_cell_size, inner_w, inner_d);
        RuleValue::Grid(cols, rows)
    }
}

pub struct EnableSmartCartridgeRule;

impl EnableSmartCartridgeRule {
    const MIN_WIDTH: f64 = 80.0;
    const MIN_DEPTH: f64 = 100.0;
}

impl Rule for EnableSmartCartridgeRule {
    fn name(&self) -> &str {
        "enable_smart_cartridge"
    }

    fn description(&self) -> &str {
        "Enable smart cartridge based on minimum dimensions"
    }

    fn evaluate(&self, config: &BoxConfig) -> RuleValue {
        RuleValue::Flag(config.width >= Self::MIN_WIDTH && config.depth >= Self::MIN_DEPTH)
    }
}

/// Rule results keyed by rule name, in first-registration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleResults {
    entries: Vec<(String, RuleValue)>,
}

impl RuleResults {
    fn insert(&mut self, name: &str, value: RuleValue) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<RuleValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RuleValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RuleResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Ordered collection of rules
pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine {
    /// Engine with the built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(WallThicknessRule),
                Box::new(EnableLabelRule),
                Box::new(ConnectionRule),
                Box::new(ToleranceRule),
                Box::new(DividerCountRule),
                Box::new(EnableSmartCartridgeRule),
            ],
        }
    }

    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Evaluate every rule; a later rule with the same name wins
    pub fn evaluate_all(&self, config: &BoxConfig) -> RuleResults {
        let mut results = RuleResults::default();
        for rule in &self.rules {
            results.insert(rule.name(), rule.evaluate(config));
        }
        results
    }

    pub fn validate_all(&self, config: &BoxConfig) -> Vec<String> {
        self.rules
            .iter()
            .flat_map(|rule| rule.validate(config))
            .collect()
    }

    /// First rule registered under `name`
    pub fn get_rule(&self, name: &str) -> BoxResult<&dyn Rule> {
        self.rules
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.as_ref())
            .ok_or_else(|| BoxError::UnknownRule {
                name: name.to_string(),
            })
    }

    pub fn evaluate(&self, config: &BoxConfig, name: &str) -> BoxResult<RuleValue> {
        Ok(self.get_rule(name)?.evaluate(config))
    }
}
