//! derive, rules, tokens and report handlers

use anyhow::Result;
use serde::Serialize;
use stowbox::application::DesignReport;
use stowbox::domain::services::{DerivedSnapshot, DesignTokens};
use stowbox::domain::value_objects::{DesignStyle, PrintMode};
use stowbox::{BoxConfig, DerivedConfig, RulesEngine};

use crate::cli::BoxArgs;
use crate::ui::output::{print_config_warnings, print_warnings};

use super::context::CommandContext;
use super::source::resolve;

#[derive(Serialize)]
struct DeriveData<'a> {
    source: &'a str,
    config: &'a BoxConfig,
    derived: DerivedSnapshot,
}

pub fn cmd_derive(ctx: &CommandContext, args: &BoxArgs) -> Result<()> {
    ctx.begin()?;
    let resolved = resolve(args, ctx)?;
    print_config_warnings(ctx.command, &resolved.warnings, &ctx.ui)?;

    let derived = DerivedConfig::new(&resolved.config);
    let warnings = derived.validate();

    if ctx.ui.json {
        ctx.data(DeriveData {
            source: &resolved.label,
            config: &resolved.config,
            derived: derived.snapshot(),
        })?;
    } else {
        print!(
            "{}",
            crate::ui::views::derive::render_derived(
                &derived,
                ctx.ui.verbose,
                ctx.ui.color,
                ctx.ui.unicode
            )
        );
    }

    print_warnings(ctx.command, &warnings, &ctx.ui)?;
    ctx.finish(true)
}

pub fn cmd_rules(ctx: &CommandContext, args: &BoxArgs) -> Result<()> {
    ctx.begin()?;
    let resolved = resolve(args, ctx)?;
    print_config_warnings(ctx.command, &resolved.warnings, &ctx.ui)?;

    let engine = RulesEngine::new();
    let results = engine.evaluate_all(&resolved.config);
    let warnings = engine.validate_all(&resolved.config);

    if ctx.ui.json {
        #[derive(Serialize)]
        struct RulesData<'a> {
            rules: &'a stowbox::domain::policies::RuleResults,
        }
        ctx.data(RulesData { rules: &results })?;
    } else {
        print!(
            "{}",
            crate::ui::views::rules::render_rules(
                &engine,
                &results,
                ctx.ui.verbose,
                ctx.ui.color,
                ctx.ui.unicode
            )
        );
    }

    print_warnings(ctx.command, &warnings, &ctx.ui)?;
    ctx.finish(true)
}

pub fn cmd_tokens(ctx: &CommandContext, args: &BoxArgs) -> Result<()> {
    ctx.begin()?;
    let resolved = resolve(args, ctx)?;
    print_config_warnings(ctx.command, &resolved.warnings, &ctx.ui)?;

    let config = &resolved.config;
    let wall = DerivedConfig::new(config).wall_thickness();
    let tokens = DesignTokens::from_style(config.design, wall).apply_print_mode(config.print_mode);

    if ctx.ui.json {
        #[derive(Serialize)]
        struct TokensData<'a> {
            style: DesignStyle,
            print_mode: PrintMode,
            tokens: &'a DesignTokens,
        }
        ctx.data(TokensData {
            style: config.design,
            print_mode: config.print_mode,
            tokens: &tokens,
        })?;
    } else {
        print!(
            "{}",
            crate::ui::views::tokens::render_tokens(
                config.design,
                config.print_mode,
                &tokens,
                ctx.ui.color,
                ctx.ui.unicode
            )
        );
    }

    ctx.finish(true)
}

/// Always JSON; with `--json` it is wrapped in a `data` event.
pub fn cmd_report(ctx: &CommandContext, args: &BoxArgs) -> Result<()> {
    ctx.begin()?;
    let resolved = resolve(args, ctx)?;
    print_config_warnings(ctx.command, &resolved.warnings, &ctx.ui)?;

    let report = DesignReport::build(&resolved.config, &RulesEngine::new());

    if ctx.ui.json {
        ctx.data(&report)?;
    } else {
        println!("{}", report.to_json()?);
    }

    ctx.finish(true)
}
