//! File System
//!
//! Local disk access used by the repositories.

mod local;

pub use local::LocalFs;
