use crate::errors::{AppError, AppResult};
use crate::rules::Thresholds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Rule thresholds, overridable through `~/.tsvalidator/tsvalidator.conf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_max_period_days")]
    pub max_period_days: i64,
    #[serde(default = "default_max_scheduled_hours")]
    pub max_scheduled_hours: f64,
    #[serde(default = "default_rounding_tolerance")]
    pub rounding_tolerance: f64,
    #[serde(default = "default_stale_after_months")]
    pub stale_after_months: u32,
}

fn default_max_period_days() -> i64 {
    14
}
fn default_max_scheduled_hours() -> f64 {
    80.0
}
fn default_rounding_tolerance() -> f64 {
    0.01
}
fn default_stale_after_months() -> u32 {
    12
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_period_days: default_max_period_days(),
            max_scheduled_hours: default_max_scheduled_hours(),
            rounding_tolerance: default_rounding_tolerance(),
            stale_after_months: default_stale_after_months(),
        }
    }
}

impl Config {
    /// Standard configuration directory (~/.tsvalidator)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tsvalidator")
    }

    /// Full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tsvalidator.conf")
    }

    /// Load the configuration from `path`, or return defaults if the file
    /// does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // un file vuoto equivale ai default
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.check()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the configuration file, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    fn check(&self) -> AppResult<()> {
        if self.max_period_days < 0 {
            return Err(AppError::Config(
                "max_period_days must not be negative".into(),
            ));
        }
        if !self.max_scheduled_hours.is_finite() || self.max_scheduled_hours < 0.0 {
            return Err(AppError::Config(
                "max_scheduled_hours must be a non-negative number".into(),
            ));
        }
        if !self.rounding_tolerance.is_finite() || self.rounding_tolerance < 0.0 {
            return Err(AppError::Config(
                "rounding_tolerance must be a non-negative number".into(),
            ));
        }
        Ok(())
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            max_period_days: self.max_period_days,
            max_scheduled_hours: self.max_scheduled_hours,
            rounding_tolerance: self.rounding_tolerance,
            stale_after_months: self.stale_after_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_rule_thresholds() {
        assert_eq!(Config::default().thresholds(), Thresholds::default());
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = Config::from_yaml("max_period_days: 31\n").unwrap();
        assert_eq!(cfg.max_period_days, 31);
        assert_eq!(cfg.max_scheduled_hours, 80.0);
        assert_eq!(cfg.stale_after_months, 12);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            Config::from_yaml("rounding_tolerance: -1\n"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Config::from_yaml("max_period_days: [1, 2]\n"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn save_and_reload() {
        let path = std::env::temp_dir()
            .join("tsvalidator_cfg_test")
            .join("tsvalidator.conf");
        std::fs::remove_file(&path).ok();

        let cfg = Config {
            max_scheduled_hours: 60.0,
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }
}
