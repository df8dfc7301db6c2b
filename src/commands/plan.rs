//! plan and calibrate

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use stowbox::application::{CalibrationKit, ManifestOptions, PrintManifest};
use stowbox::DerivedConfig;

use crate::cli::BoxArgs;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::output::{print_config_warnings, print_warnings};

use super::context::CommandContext;
use super::source::resolve;

#[derive(Serialize)]
struct PlanData<'a> {
    path: Option<String>,
    manifest: &'a PrintManifest,
}

pub fn cmd_plan(
    ctx: &CommandContext,
    args: &BoxArgs,
    output: Option<&PathBuf>,
    no_test_kit: bool,
) -> Result<()> {
    ctx.begin()?;
    let resolved = resolve(args, ctx)?;
    print_config_warnings(ctx.command, &resolved.warnings, &ctx.ui)?;

    let derived = DerivedConfig::new(&resolved.config);
    let options = ManifestOptions {
        test_kit: !no_test_kit,
    };
    let manifest = PrintManifest::build(&derived, &options);
    let path = output.map(|dir| manifest.save(dir)).transpose()?;

    if ctx.ui.json {
        ctx.data(PlanData {
            path: path.as_ref().map(|p| p.display().to_string()),
            manifest: &manifest,
        })?;
    } else {
        print!(
            "{}",
            crate::ui::views::plan::render_manifest(
                &manifest,
                ctx.ui.verbose,
                ctx.ui.color,
                ctx.ui.unicode
            )
        );
        if let Some(path) = &path {
            let mut summary = ResultSummary::success("Manifest Written");
            summary.add_line(path.display().to_string());
            print!("{}", summary.render(ctx.ui.color, ctx.ui.unicode));
        }
    }

    print_warnings(ctx.command, &derived.validate(), &ctx.ui)?;
    ctx.finish(true)
}

pub fn cmd_calibrate(ctx: &CommandContext, args: &BoxArgs) -> Result<()> {
    ctx.begin()?;
    let resolved = resolve(args, ctx)?;
    print_config_warnings(ctx.command, &resolved.warnings, &ctx.ui)?;

    let kit = CalibrationKit::for_config(&resolved.config);

    if ctx.ui.json {
        ctx.data(&kit)?;
    } else {
        print!(
            "{}",
            crate::ui::views::calibrate::render_calibration(&kit, ctx.ui.color, ctx.ui.unicode)
        );
    }

    ctx.finish(true)
}
