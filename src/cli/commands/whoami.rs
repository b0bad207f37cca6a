use crate::cli::commands::{connect, identify};
use crate::config::Config;
use crate::errors::AppResult;

/// Resolve the API key to an account and print it.
pub async fn handle(cfg: &Config) -> AppResult<()> {
    let api = connect(cfg)?;
    let (user, workspace) = identify(&api, cfg).await?;

    println!("👤 User      : {}", user.display_name());
    println!("🆔 User id   : {}", user.id);
    if let Some(email) = user.email.as_deref() {
        println!("✉️  Email     : {email}");
    }
    println!("🏢 Workspace : {workspace}");
    Ok(())
}
