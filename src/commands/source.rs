//! Turns the shared box flags into a configuration

use anyhow::Result;
use stowbox::config::{ConfigWarning, Settings};
use stowbox::domain::ports::ConfigRepository;
use stowbox::BoxConfig;

use crate::cli::BoxArgs;

use super::context::CommandContext;

/// A configuration plus where it came from
pub struct ResolvedBox {
    pub config: BoxConfig,
    pub warnings: Vec<ConfigWarning>,
    pub label: String,
}

pub fn resolve(args: &BoxArgs, ctx: &CommandContext) -> Result<ResolvedBox> {
    let (base, warnings, label) = if let Some(preset) = args.preset {
        (preset.build(), Vec::new(), format!("preset {preset}"))
    } else if let Some(name) = &args.config {
        let (config, warnings) = ctx.repository()?.load_with_warnings(name)?;
        (config, warnings, format!("config {name}"))
    } else {
        (defaults_from(&ctx.settings), Vec::new(), "flags".to_string())
    };

    let config = apply_overrides(base, args);
    tracing::debug!(
        source = %label,
        width = config.width,
        depth = config.depth,
        height = config.height,
        "resolved box"
    );

    Ok(ResolvedBox {
        config,
        warnings,
        label,
    })
}

fn defaults_from(settings: &Settings) -> BoxConfig {
    BoxConfig {
        material: settings.defaults.material,
        printer: settings.defaults.printer,
        print_mode: settings.defaults.print_mode,
        ..BoxConfig::default()
    }
}

pub(crate) fn apply_overrides(mut config: BoxConfig, args: &BoxArgs) -> BoxConfig {
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(style) = args.style {
        config.design = style;
    }
    if let Some(material) = args.material {
        config.material = material;
    }
    if let Some(printer) = args.printer {
        config.printer = printer;
    }
    if let Some(mode) = args.print_mode {
        config.print_mode = mode;
    }
    if let Some(dividers) = args.dividers {
        config.dividers = dividers;
    }
    if let Some(connection) = args.connection {
        config.connection = connection;
    }
    if let Some(mount) = args.mount {
        config.mount = mount;
    }
    if let Some(levels) = args.stack_levels {
        config.stack_levels = levels;
    }
    if let Some(weight) = args.weight {
        config.expected_weight = weight;
    }
    if args.sealed {
        config.sealed = true;
    }
    // Last, so the look can still flip `sealed` on.
    if let Some(look) = args.belovodie {
        config = config.with_belovodie_preset(look);
    }
    config
}
