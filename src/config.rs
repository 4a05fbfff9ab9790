use std::fmt::Write;
use std::path::PathBuf;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;

use crate::calendar::CategoryRegistry;
use crate::error::ConfigError;
use crate::theme::ThemeConfig;

pub const APP_NAME: &str = "category-calendar";

/// Same shape as a `dd.mm.yyyy` locale date.
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategorySeed {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub date_format: String,
    pub week_start: WeekStart,
    pub theme: ThemeConfig,
    pub categories: Vec<CategorySeed>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            week_start: WeekStart::default(),
            theme: ThemeConfig::default(),
            categories: Vec::new(),
        }
    }
}

impl Config {
    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        // NaiveDate cannot render time or zone fields.
        let mut rendered = String::new();
        if write!(rendered, "{}", NaiveDate::MIN.format(&config.date_format)).is_err() {
            return Err(ConfigError::DateFormat(config.date_format));
        }
        Ok(config)
    }

    pub fn category_registry(&self) -> CategoryRegistry {
        if self.categories.is_empty() {
            return CategoryRegistry::with_defaults();
        }
        CategoryRegistry::from_seeds(
            self.categories
                .iter()
                .map(|seed| (seed.name.as_str(), seed.color.as_str())),
        )
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.category_registry().len(), 4);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r##"
date_format = "%Y-%m-%d"
week_start = "monday"

[theme]
preset = "dracula"

[[categories]]
name = "Work"
color = "#ff0000"

[[categories]]
name = "Home"
color = "#0f0"
"##,
        )
        .unwrap();

        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.week_start.weekday(), Weekday::Mon);
        assert_eq!(config.theme.to_theme().name, "dracula");

        let registry = config.category_registry();
        let names: Vec<&str> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Work", "Home"]);
    }

    #[test]
    fn test_invalid_date_format_is_rejected() {
        let err = Config::from_toml(r#"date_format = "%Q""#).unwrap_err();
        assert!(matches!(err, ConfigError::DateFormat(f) if f == "%Q"));
    }

    #[test]
    fn test_time_fields_in_date_format_are_rejected() {
        for format in ["%d.%m.%Y %H:%M", "%Y-%m-%d %z"] {
            let toml = format!("date_format = \"{format}\"");
            let err = Config::from_toml(&toml).unwrap_err();
            assert!(matches!(err, ConfigError::DateFormat(f) if f == format));
        }
    }

    #[test]
    fn test_bad_toml_is_rejected() {
        assert!(matches!(
            Config::from_toml("week_start = \"friday\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
