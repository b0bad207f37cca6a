pub mod config;
pub mod fill;
pub mod init;
pub mod log;
pub mod preview;
pub mod whoami;

use crate::api::{ApiUser, ReqwestTimeTrackingClient, TimeTrackingApi};
use crate::config::Config;
use crate::core::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::day::WeekReport;
use crate::ui::messages::warning;

pub(crate) fn connect(cfg: &Config) -> AppResult<ReqwestTimeTrackingClient> {
    ReqwestTimeTrackingClient::new(&cfg.api_base_url, cfg.api_key()?)
}

/// Current user plus the workspace to operate on.
pub(crate) async fn identify(
    api: &dyn TimeTrackingApi,
    cfg: &Config,
) -> AppResult<(ApiUser, String)> {
    let user = api.current_user().await?;

    let workspace = match cfg.configured_workspace() {
        Some(ws) => ws.to_string(),
        None => user
            .fallback_workspace()
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::MissingConfig(
                    "workspace_id (no active or default workspace on the account)".to_string(),
                )
            })?,
    };

    Ok((user, workspace))
}

/// Notices that go with a report: empty week and skipped entries.
pub(crate) fn report_notices(report: &WeekReport) {
    if report.entry_count == 0 {
        warning(format!(
            "No entries found for this week ({} → {}).",
            report.monday, report.sunday
        ));
    }
    for skipped in &report.skipped {
        warning(format!("Skipped entry {skipped}"));
    }
}

/// Append to the operation log; a failure is only a warning.
pub(crate) fn log_operation(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&cfg.log_path(), operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
