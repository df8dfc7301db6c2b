//! Domain Layer
//!
//! Pure box configuration logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The user configuration record (BoxConfig)
//! - `value_objects/` - Closed option sets and warnings
//! - `services/` - Derivation, tolerances and design tokens
//! - `policies/` - The rules engine
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Every derived value is a function of the config
//! 3. **Ports & Adapters** - Persistence goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
