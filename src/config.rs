//! Configuration management for resume conversion.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::domain::{NumberFormattingFlags, Scale, TemplatePostFormatter};
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for resume conversion.
#[derive(Debug, Clone)]
pub struct Config {
    /// Character budget for one-line text (default: 64)
    pub short_text_limit: i64,

    /// Character budget for contributions and descriptions (default: 1024)
    pub long_text_limit: i64,

    /// Decimal places for numbers such as GPA (default: 3)
    pub number_scale: Scale,

    /// Digit grouping and currency symbol (default: grouping only)
    pub number_flags: NumberFormattingFlags,

    /// Wraps a formatted remote location; `{}` marks where it goes
    /// (default: "Remote (Headquarters in {})")
    pub remote_location_template: String,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RESUME_SHORT_TEXT_LIMIT`: short text budget (default: 64)
    /// - `RESUME_LONG_TEXT_LIMIT`: long text budget (default: 1024)
    /// - `RESUME_NUMBER_SCALE`: decimal places, 1 to 3 (default: 3)
    /// - `RESUME_NUMBER_GROUPING`: group thousands (default: true)
    /// - `RESUME_NUMBER_MONETARY`: prefix a currency symbol (default: false)
    /// - `RESUME_REMOTE_LOCATION_TEMPLATE`: remote location wrapper, must
    ///   contain `{}` (default: "Remote (Headquarters in {})")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let defaults = Self::default();

        let short_text_limit =
            Self::parse_env_i64("RESUME_SHORT_TEXT_LIMIT", defaults.short_text_limit)?;
        let long_text_limit =
            Self::parse_env_i64("RESUME_LONG_TEXT_LIMIT", defaults.long_text_limit)?;

        let number_scale = match env::var("RESUME_NUMBER_SCALE") {
            Ok(val) => val
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(Scale::from_digits)
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: "RESUME_NUMBER_SCALE".to_string(),
                    reason: format!("Must be 1, 2 or 3, got: {}", val),
                })?,
            Err(_) => defaults.number_scale,
        };

        let number_flags = NumberFormattingFlags {
            grouping: Self::parse_env_bool("RESUME_NUMBER_GROUPING", defaults.number_flags.grouping)?,
            monetary: Self::parse_env_bool("RESUME_NUMBER_MONETARY", defaults.number_flags.monetary)?,
        };

        let remote_location_template = env::var("RESUME_REMOTE_LOCATION_TEMPLATE")
            .unwrap_or(defaults.remote_location_template);

        // Validate the template has somewhere to put the location
        if !remote_location_template.contains(TemplatePostFormatter::PLACEHOLDER) {
            return Err(ConfigError::InvalidValue {
                var: "RESUME_REMOTE_LOCATION_TEMPLATE".to_string(),
                reason: "Must contain {}".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            short_text_limit,
            long_text_limit,
            number_scale,
            number_flags,
            remote_location_template,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            short_text_limit: 64,
            long_text_limit: 1024,
            number_scale: Scale::Three,
            number_flags: NumberFormattingFlags {
                grouping: true,
                monetary: false,
            },
            remote_location_template: "Remote (Headquarters in {})".to_string(),
            log_level: "warn".to_string(),
        }
    }
}
