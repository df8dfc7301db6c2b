//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod yaml_config;

pub use yaml_config::{from_yaml, to_yaml, YamlConfigRepository, COMPAT_VERSION, FORMAT_VERSION};
