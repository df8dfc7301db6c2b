//! Domain Entities
//!
//! The user configuration record and its nested sections.

mod box_config;

pub use box_config::{BoxConfig, DetailsConfig, GeometryConfig, MechanicsConfig, PatternConfig};
