// Service configuration read from the environment.
//
// Every variable is optional. A present but invalid value is an error, so a typo
// in the conflict policy never silently falls back to a different behavior.

use crate::modules::tasks::core::resolve::{ConflictPolicy, UpdateRules};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const HOST_VAR: &str = "TASKS_HOST";
pub const PORT_VAR: &str = "TASKS_PORT";
pub const DATA_FILE_VAR: &str = "TASKS_DATA_FILE";
pub const CONFLICT_POLICY_VAR: &str = "TASKS_CONFLICT_POLICY";
pub const UPSERT_ON_MISS_VAR: &str = "TASKS_UPSERT_ON_MISS";
pub const SEED_DEMO_VAR: &str = "TASKS_SEED_DEMO";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub rules: UpdateRules,
    pub seed_demo: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            data_file: PathBuf::from("data/tasks.json"),
            rules: UpdateRules::default(),
            seed_demo: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: value(HOST_VAR).unwrap_or(defaults.host),
            port: parse_or(value(PORT_VAR), PORT_VAR, defaults.port)?,
            data_file: value(DATA_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            rules: UpdateRules {
                policy: parse_or::<ConflictPolicy>(
                    value(CONFLICT_POLICY_VAR),
                    CONFLICT_POLICY_VAR,
                    defaults.rules.policy,
                )?,
                upsert_on_miss: parse_flag(
                    value(UPSERT_ON_MISS_VAR),
                    UPSERT_ON_MISS_VAR,
                    defaults.rules.upsert_on_miss,
                )?,
            },
            seed_demo: parse_flag(value(SEED_DEMO_VAR), SEED_DEMO_VAR, defaults.seed_demo)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match raw {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_flag(raw: Option<String>, key: &str, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got `{other}`"),
        }),
    }
}
