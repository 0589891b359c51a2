//! CLI configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level learnease configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Study hours per day assumed when the flag is absent.
    #[serde(default = "default_hours_per_day")]
    pub default_hours_per_day: f64,
    /// Plan length in days assumed when the flag is absent.
    #[serde(default = "default_days")]
    pub default_days: u32,
    /// Output directory for reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Report format written when the flag is absent.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_hours_per_day() -> f64 {
    2.0
}
fn default_days() -> u32 {
    7
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./learnease-results")
}
fn default_format() -> String {
    "json".to_string()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_hours_per_day: default_hours_per_day(),
            default_days: default_days(),
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `learnease.toml` in the current directory
/// 2. `~/.config/learnease/config.toml`
///
/// Environment variable overrides: `LEARNEASE_HOURS_PER_DAY`, `LEARNEASE_DAYS`.
pub fn load_config_from(path: Option<&Path>) -> Result<PlannerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("learnease.toml");
        if local.exists() {
            Some(local)
        } else if let Some(dir) = dirs_path() {
            let global = dir.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<PlannerConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => PlannerConfig::default(),
    };

    // Apply env var overrides
    if let Ok(hours) = std::env::var("LEARNEASE_HOURS_PER_DAY") {
        match hours.parse::<f64>() {
            Ok(h) => config.default_hours_per_day = h,
            Err(_) => tracing::warn!(value = %hours, "ignoring invalid LEARNEASE_HOURS_PER_DAY"),
        }
    }
    if let Ok(days) = std::env::var("LEARNEASE_DAYS") {
        match days.parse::<u32>() {
            Ok(d) => config.default_days = d,
            Err(_) => tracing::warn!(value = %days, "ignoring invalid LEARNEASE_DAYS"),
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("learnease"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.default_hours_per_day, 2.0);
        assert_eq!(config.default_days, 7);
        assert_eq!(config.output_dir, PathBuf::from("./learnease-results"));
        assert_eq!(config.default_format, "json");
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
default_hours_per_day = 3.0
output_dir = "/tmp/plans"
"#;
        let config: PlannerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_hours_per_day, 3.0);
        assert_eq!(config.default_days, 7);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/plans"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/no/such/learnease.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn env_vars_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("learnease.toml");
        std::fs::write(&path, "default_days = 5\n").unwrap();

        std::env::set_var("LEARNEASE_HOURS_PER_DAY", "4.5");
        std::env::set_var("LEARNEASE_DAYS", "not a number");
        let config = load_config_from(Some(&path)).unwrap();
        std::env::remove_var("LEARNEASE_HOURS_PER_DAY");
        std::env::remove_var("LEARNEASE_DAYS");

        assert_eq!(config.default_hours_per_day, 4.5);
        // Invalid override is ignored, the file value stands.
        assert_eq!(config.default_days, 5);
    }
}
