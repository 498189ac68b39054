//! Environment-driven configuration.

use std::path::PathBuf;

use chrono::NaiveDate;

use stocktrack_observability::LogFormat;

use crate::screen::Screen;

pub const ENV_SCREEN: &str = "STOCKTRACK_SCREEN";
pub const ENV_DATA_FILE: &str = "STOCKTRACK_DATA_FILE";
pub const ENV_EXPIRY_WINDOW_DAYS: &str = "STOCKTRACK_EXPIRY_WINDOW_DAYS";
pub const ENV_TODAY: &str = "STOCKTRACK_TODAY";
pub const ENV_LOG_FORMAT: &str = "STOCKTRACK_LOG_FORMAT";

pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub screen: Screen,
    /// When unset, the built-in mock table is used.
    pub data_file: Option<PathBuf>,
    pub expiry_window_days: i64,
    pub today: NaiveDate,
}

impl DashboardConfig {
    /// Defaults for everything except the reference date.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            screen: Screen::default(),
            data_file: None,
            expiry_window_days: DEFAULT_EXPIRY_WINDOW_DAYS,
            today,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(chrono::Local::now().date_naive());

        if let Some(raw) = lookup(ENV_SCREEN) {
            match raw.parse() {
                Ok(screen) => config.screen = screen,
                Err(e) => tracing::warn!(%e, "{ENV_SCREEN} invalid; using {}", config.screen),
            }
        }

        config.data_file = lookup(ENV_DATA_FILE)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        if let Some(raw) = lookup(ENV_EXPIRY_WINDOW_DAYS) {
            match raw.trim().parse() {
                Ok(days) => config.expiry_window_days = days,
                Err(e) => tracing::warn!(
                    %e,
                    "{ENV_EXPIRY_WINDOW_DAYS}={raw:?} invalid; using {DEFAULT_EXPIRY_WINDOW_DAYS}"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_TODAY) {
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(today) => config.today = today,
                Err(e) => tracing::warn!(%e, "{ENV_TODAY}={raw:?} invalid; using local date"),
            }
        }

        config
    }

    /// Read separately so logging can be set up before the rest of the config.
    pub fn log_format_from_env() -> LogFormat {
        std::env::var(ENV_LOG_FORMAT)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.screen, Screen::ViewInventory);
        assert_eq!(config.data_file, None);
        assert_eq!(config.expiry_window_days, DEFAULT_EXPIRY_WINDOW_DAYS);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_SCREEN, "analytics"),
            (ENV_DATA_FILE, "/tmp/inventory.json"),
            (ENV_EXPIRY_WINDOW_DAYS, "14"),
            (ENV_TODAY, "2024-11-01"),
        ]));
        assert_eq!(config.screen, Screen::Analytics);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/inventory.json")));
        assert_eq!(config.expiry_window_days, 14);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_SCREEN, "reports"),
            (ENV_EXPIRY_WINDOW_DAYS, "soon"),
            (ENV_DATA_FILE, "  "),
        ]));
        assert_eq!(config.screen, Screen::ViewInventory);
        assert_eq!(config.expiry_window_days, DEFAULT_EXPIRY_WINDOW_DAYS);
        assert_eq!(config.data_file, None);
    }
}
