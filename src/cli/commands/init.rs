use crate::cli::commands::log_operation;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and a default configuration file when
/// missing. An existing file is never overwritten.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    println!("⚙️  Initializing rTimeGaps…");
    println!("📄 Config file : {}", path.display());

    if cli.test {
        info("Test mode: configuration file not written");
        return Ok(());
    }

    if Config::init_at(&path)? {
        let cfg = Config::load_from(&path)?;
        success(format!("Configuration file created at {}", path.display()));
        log_operation(
            &cfg,
            "init",
            "config",
            &format!("Configuration created at {}", path.display()),
        );
        info("Set api_key (or CLOCKIFY_KEY) and timezone before running preview or fill");
    } else {
        info("Configuration file already exists, left unchanged");
    }

    println!("🎉 rTimeGaps initialization completed!");
    Ok(())
}
