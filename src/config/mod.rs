use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{Currency, DateFormat};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            company: "Construction Co. Ltd".to_string(),
            email: "admin@company.com".to_string(),
            phone: "+91 9876543210".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub currency: Currency,
    pub date_format: DateFormat,
    pub timezone: String,
    pub language: String,
    /// Minutes
    pub session_timeout: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            currency: Currency::Inr,
            date_format: DateFormat::DayFirst,
            timezone: "ist".to_string(),
            language: "en".to_string(),
            session_timeout: "30".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Notifications {
    pub email: bool,
    pub payment_alerts: bool,
    pub project_updates: bool,
    pub worker_alerts: bool,
    pub system_maintenance: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            email: true,
            payment_alerts: true,
            project_updates: true,
            worker_alerts: false,
            system_maintenance: true,
        }
    }
}

impl Notifications {
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("Email Notifications", self.email),
            ("Payment Alerts", self.payment_alerts),
            ("Project Updates", self.project_updates),
            ("Worker Alerts", self.worker_alerts),
            ("System Maintenance", self.system_maintenance),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Section id shown at startup
    pub start_section: String,

    /// How long a toast stays on the command line
    pub toast_seconds: u64,

    pub profile: Profile,
    pub preferences: Preferences,
    pub notifications: Notifications,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_section: "dashboard".to_string(),
            toast_seconds: 3,
            profile: Profile::default(),
            preferences: Preferences::default(),
            notifications: Notifications::default(),
        }
    }
}

/// Load the config, falling back to defaults when the file is missing or
/// unusable. Problems are logged, never fatal.
pub fn load(explicit: Option<&Path>) -> Config {
    let Some(path) = resolve_path(explicit) else {
        return Config::default();
    };
    if explicit.is_none() && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Config::default();
    }
    match load_from(&path) {
        Ok(config) => {
            debug!(path = %path.display(), "config loaded");
            config
        }
        Err(err) => {
            warn!(error = %err, "falling back to default config");
            Config::default()
        }
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config_path(),
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("LABOURDESK_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("labourdesk").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("labourdesk").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "labourdesk", "labourdesk")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("labourdesk"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("labourdesk"));
    }
    directories::ProjectDirs::from("io", "labourdesk", "labourdesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("labourdesk.log"))
}

pub fn export_dir() -> PathBuf {
    data_dir()
        .map(|dir| dir.join("exports"))
        .unwrap_or_else(|| PathBuf::from("labourdesk-exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.start_section, "dashboard");
        assert_eq!(config.toast_seconds, 3);
        assert_eq!(config.profile.name, "Admin User");
        assert_eq!(config.preferences.currency, Currency::Inr);
        assert!(!config.notifications.worker_alerts);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            start_section = "payments"

            [preferences]
            currency = "usd"
            date_format = "yyyy-mm-dd"

            [notifications]
            worker_alerts = true
            "#,
        )
        .unwrap();
        assert_eq!(config.start_section, "payments");
        assert_eq!(config.preferences.currency, Currency::Usd);
        assert_eq!(config.preferences.date_format, DateFormat::Iso);
        assert_eq!(config.preferences.timezone, "ist");
        assert!(config.notifications.worker_alerts);
        assert!(config.notifications.email);
        assert_eq!(config.profile.company, "Construction Co. Ltd");
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "toast_seconds = \"soon\"").unwrap();
        let err = load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_falls_back_on_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[profile\nname = ").unwrap();
        let config = load(Some(file.path()));
        assert_eq!(config.toast_seconds, 3);
    }

    #[test]
    fn load_reads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[profile]\nname = \"Priya\"\n").unwrap();
        let config = load(Some(file.path()));
        assert_eq!(config.profile.name, "Priya");
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
