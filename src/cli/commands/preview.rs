use crate::cli::commands::{connect, identify, report_notices};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::week::{Week, load_week};
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::utils::date::resolve_reference_date;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview {
        date,
        format,
        file,
        force,
    } = cmd
    {
        let settings = cfg.settings()?;
        let week = Week::containing(resolve_reference_date(date.as_deref(), settings.tz)?);

        let api = connect(cfg)?;
        let (user, workspace) = identify(&api, cfg).await?;
        let data = load_week(&api, &settings, &workspace, &user.id, week).await?;

        // json/csv on stdout must stay parseable
        if file.is_some() || *format == ExportFormat::Text {
            report_notices(&data.report);
        }

        ExportLogic::write_report(
            &data.report,
            *format,
            file.as_deref(),
            *force,
            &settings.show_weekday,
        )?;
    }

    Ok(())
}
