use anyhow::{anyhow, Result};
use log::LevelFilter;
use std::str::FromStr;

pub const LOG_LEVEL_VAR: &str = "EDGAR_LOG_LEVEL";
pub const OUTPUT_FORMAT_VAR: &str = "EDGAR_OUTPUT_FORMAT";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Debug,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "debug" => Ok(OutputFormat::Debug),
            other => Err(anyhow!("unknown output format '{}', expected json or debug", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FinancialsConfig {
    pub log_level: LevelFilter,
    pub output_format: OutputFormat,
}

impl Default for FinancialsConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            output_format: OutputFormat::Json,
        }
    }
}

impl FinancialsConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = parse_log_level(&level)?;
        }

        if let Some(format) = lookup(OUTPUT_FORMAT_VAR) {
            config.output_format = format
                .parse()
                .map_err(|e| anyhow!("{} is invalid: {}", OUTPUT_FORMAT_VAR, e))?;
        }

        Ok(config)
    }
}

/// Accepts the `log` level names plus "warning".
pub fn parse_log_level(level: &str) -> Result<LevelFilter> {
    let level = level.trim().to_lowercase();
    if level == "warning" {
        return Ok(LevelFilter::Warn);
    }
    LevelFilter::from_str(&level).map_err(|_| anyhow!("invalid log level '{}'", level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<FinancialsConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        FinancialsConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, FinancialsConfig::default());
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[(LOG_LEVEL_VAR, "DEBUG"), (OUTPUT_FORMAT_VAR, "debug")]).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.output_format, OutputFormat::Debug);
    }

    #[test]
    fn test_warning_alias() {
        assert_eq!(parse_log_level("warning").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_log_level("off").unwrap(), LevelFilter::Off);
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[(LOG_LEVEL_VAR, "loud")]).is_err());
        assert!(config_from(&[(OUTPUT_FORMAT_VAR, "yaml")]).is_err());
    }
}
