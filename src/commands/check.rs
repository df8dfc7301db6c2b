use anyhow::Result;
use serde::Serialize;
use stowbox::application::{CheckItem, CheckOptions, CheckStatus, CheckUseCase};

use crate::cli::BoxArgs;
use crate::ui::ci::{github_annotation, in_github_actions, AnnotationLevel};
use crate::ui::views::check::{render_check_header, render_check_report, render_check_summary};

use super::context::CommandContext;
use super::source::resolve;

#[derive(Serialize)]
struct CheckEvent<'a> {
    event: &'static str,
    command: &'static str,
    #[serde(flatten)]
    item: &'a CheckItem,
}

#[derive(Serialize)]
struct CheckTotals {
    passed: usize,
    warnings: usize,
    errors: usize,
    strict_warnings: bool,
    success: bool,
}

pub fn cmd_check(ctx: &CommandContext, args: &BoxArgs, strict_warnings: bool) -> Result<()> {
    ctx.begin()?;
    let resolved = resolve(args, ctx)?;
    let ui = &ctx.ui;

    if !ui.json {
        print!(
            "{}",
            render_check_header(&resolved.label, strict_warnings, ui.color, ui.unicode)
        );
    }

    let options = CheckOptions { strict_warnings };
    let use_case = CheckUseCase::default();

    let result = if ui.json {
        let mut emit_error = None;
        let result = use_case.execute_with_callback(&resolved.config, &resolved.warnings, |item| {
            if emit_error.is_some() {
                return;
            }
            let event = CheckEvent {
                event: "check",
                command: "check",
                item,
            };
            if let Err(e) = crate::ui::json::emit_event(&event) {
                emit_error = Some(e);
            }
        });
        if let Some(e) = emit_error {
            return Err(e.into());
        }
        result
    } else {
        use_case.execute(&resolved.config, &resolved.warnings)
    };

    let failed = result.fails(&options);
    tracing::info!(
        passed = result.passed,
        warnings = result.warnings,
        errors = result.errors,
        failed,
        "check finished"
    );

    if ui.json {
        ctx.data(CheckTotals {
            passed: result.passed,
            warnings: result.warnings,
            errors: result.errors,
            strict_warnings,
            success: !failed,
        })?;
        ctx.finish(!failed)?;
    } else {
        print!("{}", render_check_report(&result, ui.color, ui.unicode));
        println!();
        print!(
            "{}",
            render_check_summary(&result, failed, ui.color, ui.unicode)
        );

        if ui.caps.is_ci && in_github_actions() {
            emit_github_annotations(&result.items);
        }
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}

fn emit_github_annotations(items: &[CheckItem]) {
    for item in items {
        let level = match item.status {
            CheckStatus::Pass => continue,
            CheckStatus::Warning => AnnotationLevel::Warning,
            CheckStatus::Error => AnnotationLevel::Error,
        };
        println!(
            "{}",
            github_annotation(level, &format!("{}: {}", item.name, item.message), None)
        );
    }
}
