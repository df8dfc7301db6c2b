//! Command handlers, one function per subcommand

mod catalog;
mod check;
mod configs;
mod context;
mod derive;
mod plan;
mod source;

use anyhow::Result;

use crate::cli::{Cli, Commands};

use context::CommandContext;

pub fn run(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::load(cli)?;

    match &cli.command {
        Commands::Derive { source } => derive::cmd_derive(&ctx, source),
        Commands::Rules { source } => derive::cmd_rules(&ctx, source),
        Commands::Tokens { source } => derive::cmd_tokens(&ctx, source),
        Commands::Report { source } => derive::cmd_report(&ctx, source),
        Commands::Presets => catalog::cmd_presets(&ctx),
        Commands::Options => catalog::cmd_options(&ctx),
        Commands::Version => catalog::cmd_version(&ctx),
        Commands::Check {
            source,
            strict_warnings,
        } => check::cmd_check(&ctx, source, *strict_warnings),
        Commands::Save {
            name,
            source,
            derived,
        } => configs::cmd_save(&ctx, name, source, *derived),
        Commands::Load { name } => configs::cmd_load(&ctx, name),
        Commands::List => configs::cmd_list(&ctx),
        Commands::Delete { name } => configs::cmd_delete(&ctx, name),
        Commands::Plan {
            source,
            output,
            no_test_kit,
        } => plan::cmd_plan(&ctx, source, output.as_ref(), *no_test_kit),
        Commands::Calibrate { source } => plan::cmd_calibrate(&ctx, source),
    }
}
