//! Terminal and NDJSON presentation for the CLI.
//!
//! - `primitives/` - icons and colored text
//! - `widgets/` - boxes and aligned tables
//! - `blocks/` - headers, summaries, warnings and errors built from widgets
//! - `views/` - one renderer per command
//! - `json/` - typed events for `--json`

pub mod blocks;
pub mod ci;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
