use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stowbox::config::ColorMode;
use stowbox::domain::value_objects::{
    BelovodiePreset, ConnectionType, DesignStyle, DividerLayout, MaterialType, Mount, PrintMode,
    PrinterProfile,
};
use stowbox::presets::BoxPreset;

/// stowbox - parametric storage box configurator
#[derive(Parser, Debug)]
#[command(name = "stowbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Settings file to use instead of ./stowbox.toml and the user config
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a box configuration comes from
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct BoxArgs {
    /// Start from a built-in preset
    #[arg(long, value_enum, conflicts_with = "config")]
    pub preset: Option<BoxPreset>,

    /// Start from a saved configuration
    #[arg(long, value_name = "NAME")]
    pub config: Option<String>,

    /// External width in mm
    #[arg(long)]
    pub width: Option<f64>,

    /// External depth in mm
    #[arg(long)]
    pub depth: Option<f64>,

    /// External height in mm
    #[arg(long)]
    pub height: Option<f64>,

    #[arg(long, value_enum)]
    pub style: Option<DesignStyle>,

    #[arg(long, value_enum)]
    pub material: Option<MaterialType>,

    #[arg(long, value_enum)]
    pub printer: Option<PrinterProfile>,

    #[arg(long, value_enum)]
    pub print_mode: Option<PrintMode>,

    #[arg(long, value_enum)]
    pub dividers: Option<DividerLayout>,

    #[arg(long, value_enum)]
    pub connection: Option<ConnectionType>,

    #[arg(long, value_enum)]
    pub mount: Option<Mount>,

    /// Number of stacked boxes
    #[arg(long)]
    pub stack_levels: Option<u32>,

    /// Expected load in grams
    #[arg(long)]
    pub weight: Option<f64>,

    /// Apply a belovodie look (sets the style to belovodie)
    #[arg(long, value_enum)]
    pub belovodie: Option<BelovodiePreset>,

    /// Sealed box without openings
    #[arg(long)]
    pub sealed: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every derived dimension for a box
    Derive {
        #[command(flatten)]
        source: BoxArgs,
    },

    /// Evaluate the rules engine
    Rules {
        #[command(flatten)]
        source: BoxArgs,
    },

    /// Show design tokens for the box style and print mode
    Tokens {
        #[command(flatten)]
        source: BoxArgs,
    },

    /// List built-in presets
    Presets,

    /// List accepted values for every option
    Options,

    /// Validate a box (non-zero exit on errors)
    Check {
        #[command(flatten)]
        source: BoxArgs,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Save a configuration under a name
    Save {
        name: String,

        #[command(flatten)]
        source: BoxArgs,

        /// Include derived values in the document
        #[arg(long)]
        derived: bool,
    },

    /// Load a saved configuration and show it
    Load { name: String },

    /// List saved configurations
    List,

    /// Delete a saved configuration
    Delete { name: String },

    /// Write a print manifest
    Plan {
        #[command(flatten)]
        source: BoxArgs,

        /// Directory for print_manifest.yaml
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Leave the calibration pieces out
        #[arg(long)]
        no_test_kit: bool,
    },

    /// Plan a calibration kit for the material and printer
    Calibrate {
        #[command(flatten)]
        source: BoxArgs,
    },

    /// Dump the full design report as JSON
    Report {
        #[command(flatten)]
        source: BoxArgs,
    },

    /// Show version information
    Version,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Derive { .. } => "derive",
            Commands::Rules { .. } => "rules",
            Commands::Tokens { .. } => "tokens",
            Commands::Presets => "presets",
            Commands::Options => "options",
            Commands::Check { .. } => "check",
            Commands::Save { .. } => "save",
            Commands::Load { .. } => "load",
            Commands::List => "list",
            Commands::Delete { .. } => "delete",
            Commands::Plan { .. } => "plan",
            Commands::Calibrate { .. } => "calibrate",
            Commands::Report { .. } => "report",
            Commands::Version => "version",
        }
    }
}
