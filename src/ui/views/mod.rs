pub mod calibrate;
pub mod check;
pub mod configs;
pub mod derive;
pub mod options;
pub mod plan;
pub mod presets;
pub mod rules;
pub mod tokens;
pub mod version;
