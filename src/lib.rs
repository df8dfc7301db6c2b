//! stowbox - parametric storage box configurator
//!
//! Turns a handful of user choices (external dimensions, style, material,
//! printer) into every dimension, tolerance and visual parameter a mesh
//! builder needs, and keeps named configurations as versioned YAML.
//!
//! ```
//! use stowbox::{BoxConfig, DerivedConfig};
//!
//! let config = BoxConfig::with_dimensions(200.0, 220.0, 80.0);
//! let derived = DerivedConfig::new(&config);
//! assert_eq!(derived.wall_thickness(), 2.0);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presets;

// Re-exports for convenience
pub use config::Settings;
pub use domain::entities::BoxConfig;
pub use domain::policies::{Rule, RuleValue, RulesEngine};
pub use domain::ports::ConfigRepository;
pub use domain::services::{DerivedConfig, DesignTokens, ToleranceProfile};
pub use error::{BoxError, BoxResult};
pub use infrastructure::YamlConfigRepository;
pub use presets::{get_preset, BoxPreset};
