//! Application Layer
//!
//! Use cases that orchestrate the domain for the CLI.
//! This layer:
//! - Depends on Domain layer (entities, services, policies, ports)
//! - Does NOT contain derivation rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - Validates a config and classifies the findings
//! - `PrintManifest` - Estimates print time and filament per part
//! - `CalibrationKit` - Plans the tolerance test pieces
//! - `DesignReport` - Bundles everything a mesh builder needs

pub mod calibration;
pub mod check;
pub mod manifest;
pub mod report;

pub use calibration::{CalibrationKit, ClearanceLadder, TestPiece, WhiskerSample};
pub use check::{CheckItem, CheckOptions, CheckResult, CheckStatus, CheckUseCase};
pub use manifest::{ManifestOptions, PrintFile, PrintManifest, MANIFEST_FILE};
pub use report::{DesignReport, REPORT_VERSION};
