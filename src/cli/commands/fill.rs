use crate::api::TimeTrackingApi;
use crate::cli::commands::{connect, identify, log_operation, report_notices};
use crate::cli::parser::Commands;
use crate::config::{Config, Settings};
use crate::core::filler::{FillSummary, plan_fillers, submit_fillers};
use crate::core::week::{Week, load_week};
use crate::errors::AppResult;
use crate::export::render_text;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::prompt::confirm_with;
use crate::utils::date::resolve_reference_date;
use std::io::{self, BufRead};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fill { date, yes, dry_run } = cmd {
        let settings = cfg.settings()?;
        let week = Week::containing(resolve_reference_date(date.as_deref(), settings.tz)?);

        let api = connect(cfg)?;
        let stdin = io::stdin();
        fill_week(&api, cfg, &settings, week, *yes, *dry_run, &mut stdin.lock()).await?;
    }

    Ok(())
}

/// Show the week's gaps and planned fillers, then create them once the
/// operator agrees. Returns `None` when nothing was submitted.
pub async fn fill_week<R: BufRead>(
    api: &dyn TimeTrackingApi,
    cfg: &Config,
    settings: &Settings,
    week: Week,
    yes: bool,
    dry_run: bool,
    input: &mut R,
) -> AppResult<Option<FillSummary>> {
    let (user, workspace) = identify(api, cfg).await?;
    info(format!("Filling gaps for {} in workspace {workspace}", user.display_name()));

    let data = load_week(api, settings, &workspace, &user.id, week).await?;
    report_notices(&data.report);
    print!("{}", render_text(&data.report, &settings.show_weekday));

    if !data.report.has_gaps() {
        success("No gaps to fill for this week.");
        return Ok(None);
    }

    let plans = plan_fillers(&data.report.days, &data.records, &settings.label);

    println!();
    header("Planned fillers");
    for plan in &plans {
        println!("  {}", plan.describe());
    }
    println!();

    if dry_run {
        info("Dry run: no entries created.");
        return Ok(None);
    }
    if !yes && !confirm_with("Create filler entries for shown gaps?", input, &mut io::stdout())? {
        info("Aborted: no entries created.");
        return Ok(None);
    }

    let summary = submit_fillers(api, &workspace, settings.tz, &plans).await;

    for plan in &summary.created {
        log_operation(cfg, "fill", &plan.date.to_string(), &plan.describe());
    }
    for (plan, e) in &summary.failed {
        log_operation(
            cfg,
            "fill_failed",
            &plan.date.to_string(),
            &format!("{}: {e}", plan.describe()),
        );
    }

    if summary.is_clean() {
        success(format!("Created {} filler entries", summary.created.len()));
    } else {
        warning(format!(
            "Created {} filler entries, {} failed",
            summary.created.len(),
            summary.failed.len()
        ));
    }

    Ok(Some(summary))
}
