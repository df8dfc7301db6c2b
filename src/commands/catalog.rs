//! presets, options and version

use anyhow::Result;
use serde::Serialize;
use stowbox::application::REPORT_VERSION;
use stowbox::domain::value_objects::option_catalog;
use stowbox::infrastructure::repositories::{COMPAT_VERSION, FORMAT_VERSION};
use stowbox::presets::all_presets;
use stowbox::BoxConfig;

use super::context::CommandContext;

pub fn cmd_presets(ctx: &CommandContext) -> Result<()> {
    ctx.begin()?;
    let presets = all_presets();

    if ctx.ui.json {
        #[derive(Serialize)]
        struct PresetEntry<'a> {
            name: &'static str,
            config: &'a BoxConfig,
        }
        #[derive(Serialize)]
        struct PresetsData<'a> {
            presets: Vec<PresetEntry<'a>>,
        }
        ctx.data(PresetsData {
            presets: presets
                .iter()
                .map(|(preset, config)| PresetEntry {
                    name: preset.as_str(),
                    config,
                })
                .collect(),
        })?;
    } else {
        print!(
            "{}",
            crate::ui::views::presets::render_presets(&presets, ctx.ui.color, ctx.ui.unicode)
        );
    }

    ctx.finish(true)
}

pub fn cmd_options(ctx: &CommandContext) -> Result<()> {
    ctx.begin()?;
    let catalog = option_catalog();

    if ctx.ui.json {
        #[derive(Serialize)]
        struct OptionsData<'a> {
            options: &'a [stowbox::domain::value_objects::OptionCatalogEntry],
        }
        ctx.data(OptionsData { options: &catalog })?;
    } else {
        print!(
            "{}",
            crate::ui::views::options::render_options(&catalog, ctx.ui.color, ctx.ui.unicode)
        );
    }

    ctx.finish(true)
}

pub fn cmd_version(ctx: &CommandContext) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if ctx.ui.json {
        ctx.begin()?;
        #[derive(Serialize)]
        struct VersionData {
            version: &'static str,
            format_version: &'static str,
            compat_version: &'static str,
            report_version: u32,
        }
        ctx.data(VersionData {
            version,
            format_version: FORMAT_VERSION,
            compat_version: COMPAT_VERSION,
            report_version: REPORT_VERSION,
        })?;
        return ctx.finish(true);
    }

    print!(
        "{}",
        crate::ui::views::version::render_version(version, ctx.ui.color, ctx.ui.unicode)
    );
    Ok(())
}
