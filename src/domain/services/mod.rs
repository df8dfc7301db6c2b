//! Domain Services
//!
//! Pure computations over a `BoxConfig`. No I/O, no state.

pub mod derived;
pub mod tokens;
pub mod tolerance;

pub use derived::{DerivedConfig, DerivedSnapshot, Features, PatternParams};
pub use tokens::{BelovodieLook, DesignTokens, PatternParamMap, TokenParam};
pub use tolerance::{ToleranceProfile, Tolerances, TEST_KIT_CLEARANCES};
