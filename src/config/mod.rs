use crate::api::DEFAULT_API_BASE;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod settings; // resolved, validated view of the config

pub use settings::Settings;

pub const ENV_API_KEY: &str = "CLOCKIFY_KEY";
pub const ENV_WORKSPACE_ID: &str = "CLOCKIFY_WORKSPACE_ID";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_work_start")]
    pub work_start: String,
    #[serde(default = "default_work_end")]
    pub work_end: String,
    /// Set both lunch fields to `null` to disable the break.
    #[serde(default = "default_lunch_start")]
    pub lunch_start: Option<String>,
    #[serde(default = "default_lunch_end")]
    pub lunch_end: Option<String>,
    #[serde(default = "default_filler_description")]
    pub filler_description: String,
    #[serde(default)]
    pub split_midnight: bool,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}
fn default_timezone() -> String {
    "UTC".to_string()
}
fn default_work_start() -> String {
    "09:00".to_string()
}
fn default_work_end() -> String {
    "18:00".to_string()
}
fn default_lunch_start() -> Option<String> {
    Some("12:00".to_string())
}
fn default_lunch_end() -> Option<String> {
    Some("13:00".to_string())
}
fn default_filler_description() -> String {
    "[Dev Work, Reviewing code]".to_string()
}
fn default_show_weekday() -> String {
    "None".to_string()
}
fn default_log_file() -> String {
    Config::config_dir()
        .join("rtimegaps.log")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            workspace_id: None,
            api_base_url: default_api_base_url(),
            timezone: default_timezone(),
            work_start: default_work_start(),
            work_end: default_work_end(),
            lunch_start: default_lunch_start(),
            lunch_end: default_lunch_end(),
            filler_description: default_filler_description(),
            split_midnight: false,
            show_weekday: default_show_weekday(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimegaps")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimegaps")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimegaps.conf")
    }

    /// `--config` override, or the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load the file and apply the `CLOCKIFY_*` environment overrides, once.
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::resolve_path(custom))?;
        cfg.apply_overrides(env::var(ENV_API_KEY).ok(), env::var(ENV_WORKSPACE_ID).ok());
        Ok(cfg)
    }

    pub fn apply_overrides(&mut self, api_key: Option<String>, workspace_id: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(ws) = workspace_id.filter(|w| !w.trim().is_empty()) {
            self.workspace_id = Some(ws);
        }
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Create the config directory and a default config file if missing.
    /// Returns `true` when a new file was written.
    pub fn init_at(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    pub fn api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AppError::MissingConfig(format!("api_key (or the {ENV_API_KEY} env variable)"))
            })
    }

    pub fn configured_workspace(&self) -> Option<&str> {
        self.workspace_id
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    pub fn settings(&self) -> AppResult<Settings> {
        Settings::from_config(self)
    }

    /// Every problem found in the configuration, empty when it is usable.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.api_key().is_err() {
            problems.push(format!("api_key is not set (nor {ENV_API_KEY})"));
        }
        if let Err(e) = url::Url::parse(&self.api_base_url) {
            problems.push(format!("api_base_url '{}' is invalid: {e}", self.api_base_url));
        }
        if let Err(e) = settings::parse_timezone(&self.timezone) {
            problems.push(e.to_string());
        }
        if let Err(e) = settings::parse_window(self) {
            problems.push(e.to_string());
        }
        if self.filler_description.trim().is_empty() {
            problems.push("filler_description must not be empty".to_string());
        }
        if !matches!(
            self.show_weekday.to_ascii_lowercase().as_str(),
            "none" | "short" | "medium" | "long"
        ) {
            problems.push(format!(
                "show_weekday '{}' must be one of None, Short, Medium, Long",
                self.show_weekday
            ));
        }

        problems
    }
}
