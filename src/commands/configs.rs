//! save, load, list and delete

use anyhow::Result;
use serde::Serialize;
use stowbox::domain::ports::ConfigRepository;
use stowbox::DerivedConfig;

use crate::cli::BoxArgs;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::output::{print_config_warnings, print_warnings};

use super::context::CommandContext;
use super::source::resolve;

#[derive(Serialize)]
struct SavedData<'a> {
    name: &'a str,
    path: String,
    include_derived: bool,
}

pub fn cmd_save(ctx: &CommandContext, name: &str, args: &BoxArgs, derived: bool) -> Result<()> {
    ctx.begin()?;
    let resolved = resolve(args, ctx)?;
    print_config_warnings(ctx.command, &resolved.warnings, &ctx.ui)?;

    let repo = ctx.repository()?;
    let include_derived = derived || ctx.settings.storage.include_derived;
    let replaced = repo.exists(name);
    let path = repo.save(&resolved.config, name, include_derived)?;

    if ctx.ui.json {
        ctx.data(SavedData {
            name,
            path: path.display().to_string(),
            include_derived,
        })?;
    } else {
        let mut summary = ResultSummary::success(if replaced {
            "Config Replaced"
        } else {
            "Config Saved"
        });
        summary.add_line(path.display().to_string());
        summary.add_line(format!("from {}", resolved.label));
        if include_derived {
            summary.add_line("with derived values");
        }
        summary.with_next_step(format!("stowbox derive --config {name}"));
        print!("{}", summary.render(ctx.ui.color, ctx.ui.unicode));
    }

    ctx.finish(true)
}

pub fn cmd_load(ctx: &CommandContext, name: &str) -> Result<()> {
    ctx.begin()?;
    let repo = ctx.repository()?;
    let (config, warnings) = repo.load_with_warnings(name)?;
    print_config_warnings(ctx.command, &warnings, &ctx.ui)?;

    let derived = DerivedConfig::new(&config);

    if ctx.ui.json {
        #[derive(Serialize)]
        struct LoadedData<'a> {
            name: &'a str,
            config: &'a stowbox::BoxConfig,
        }
        ctx.data(LoadedData {
            name,
            config: &config,
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
        print_warnings(ctx.command, &derived.validate(), &ctx.ui)?;
    }

    ctx.finish(true)
}

pub fn cmd_list(ctx: &CommandContext) -> Result<()> {
    ctx.begin()?;
    let repo = ctx.repository()?;
    let names = repo.list_configs()?;

    if ctx.ui.json {
        #[derive(Serialize)]
        struct ListData<'a> {
            dir: String,
            count: usize,
            names: &'a [String],
        }
        ctx.data(ListData {
            dir: repo.dir().display().to_string(),
            count: names.len(),
            names: &names,
        })?;
    } else {
        print!(
            "{}",
            crate::ui::views::configs::render_config_list(
                repo.dir(),
                &names,
                ctx.ui.color,
                ctx.ui.unicode
            )
        );
    }

    ctx.finish(true)
}

pub fn cmd_delete(ctx: &CommandContext, name: &str) -> Result<()> {
    ctx.begin()?;
    let repo = ctx.repository()?;
    let deleted = repo.delete(name)?;

    if ctx.ui.json {
        #[derive(Serialize)]
        struct DeletedData<'a> {
            name: &'a str,
            deleted: bool,
        }
        ctx.data(DeletedData { name, deleted })?;
    } else if deleted {
        let mut summary = ResultSummary::success("Config Deleted");
        summary.add_line(repo.path_for(name).display().to_string());
        print!("{}", summary.render(ctx.ui.color, ctx.ui.unicode));
    } else {
        let mut summary = ResultSummary::partial("Nothing Deleted");
        summary.add_line(format!("no config named '{name}'"));
        summary.with_next_step("stowbox list");
        print!("{}", summary.render(ctx.ui.color, ctx.ui.unicode));
    }

    ctx.finish(true)
}
