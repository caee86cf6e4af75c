//! daybook configuration.
//!
//! Read from `~/.config/daybook/config.toml`, with `DAYBOOK_*` environment
//! variables layered on top (e.g. `DAYBOOK_EVENTS_FILE`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, DaybookResult};
use crate::view::CalendarView;

static DEFAULT_EVENTS_FILE: &str = "~/.daybook/events.json";
static DEFAULT_NOTIFY_INTERVAL: &str = "1s";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn default_notify_interval() -> String {
    DEFAULT_NOTIFY_INTERVAL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaybookConfig {
    /// JSON file holding all events
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,

    /// View used when a command doesn't ask for one
    #[serde(default)]
    pub default_view: CalendarView,

    /// How often `daybook notify` checks for due reminders (e.g. "1s", "30s")
    #[serde(default = "default_notify_interval")]
    pub notify_interval: String,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        DaybookConfig {
            events_file: default_events_file(),
            default_view: CalendarView::default(),
            notify_interval: default_notify_interval(),
        }
    }
}

impl DaybookConfig {
    pub fn config_path() -> DaybookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaybookError::Config("설정 디렉터리를 찾을 수 없습니다".into()))?
            .join("daybook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file on first run.
    pub fn load() -> DaybookResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DaybookResult<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
        }

        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("DAYBOOK"))
            .build()
            .map_err(|e| DaybookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DaybookError::Config(e.to_string()))
    }

    /// Events file with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn notify_interval(&self) -> DaybookResult<Duration> {
        let interval = humantime::parse_duration(&self.notify_interval).map_err(|e| {
            DaybookError::Config(format!(
                "잘못된 notify_interval '{}': {}",
                self.notify_interval, e
            ))
        })?;

        if interval.is_zero() {
            return Err(DaybookError::Config("notify_interval은 0보다 커야 합니다".into()));
        }
        Ok(interval)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DaybookResult<()> {
        let contents = format!(
            "\
# daybook configuration

# Where your events are stored:
# events_file = \"{}\"

# View shown by `daybook list` (week or month):
# default_view = \"month\"

# How often `daybook notify` checks for reminders:
# notify_interval = \"{}\"
",
            DEFAULT_EVENTS_FILE, DEFAULT_NOTIFY_INTERVAL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaybookError::Config(format!("설정 디렉터리를 만들 수 없습니다: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaybookError::Config(format!("설정 파일을 쓸 수 없습니다: {e}")))?;

        tracing::debug!(path = %path.display(), "wrote default config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daybook/config.toml");
        DaybookConfig::create_default_config(&path).unwrap();

        let config = DaybookConfig::load_from(&path).unwrap();
        assert_eq!(config.events_file, PathBuf::from(DEFAULT_EVENTS_FILE));
        assert_eq!(config.default_view, CalendarView::Month);
        assert_eq!(config.notify_interval().unwrap(), Duration::from_secs(1));
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "events_file = \"/tmp/daybook/events.json\"\n\
             default_view = \"week\"\n\
             notify_interval = \"30s\"\n",
        )
        .unwrap();

        let config = DaybookConfig::load_from(&path).unwrap();
        assert_eq!(config.events_path(), PathBuf::from("/tmp/daybook/events.json"));
        assert_eq!(config.default_view, CalendarView::Week);
        assert_eq!(config.notify_interval().unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DaybookConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.notify_interval, DEFAULT_NOTIFY_INTERVAL);
    }

    #[test]
    fn rejects_bad_intervals() {
        let mut config = DaybookConfig::default();
        config.notify_interval = "soon".into();
        assert!(config.notify_interval().is_err());
        config.notify_interval = "0s".into();
        assert!(config.notify_interval().is_err());
    }
}
