//! Configuration file
//!
//! Optional JSON file; every key has a default:
//!
//! ```json
//! { "unknown_fields": "strip", "fail_fast": false, "log_level": "info" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::{Logger, Severity};
use crate::schema::{SchemaValidator, UnknownFields, ValidatorOptions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Policy for undeclared record fields (default "strip")
    #[serde(default)]
    pub unknown_fields: UnknownFields,

    /// Stop validating a record at its first issue (default false)
    #[serde(default)]
    pub fail_fast: bool,

    /// Minimum log severity: trace, info, warn or error (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unknown_fields: UnknownFields::default(),
            fail_fast: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.severity().map(|_| ())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(CliError::config)
    }

    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            unknown_fields: self.unknown_fields,
            fail_fast: self.fail_fast,
        }
    }

    pub fn validator(&self) -> SchemaValidator {
        SchemaValidator::new(self.validator_options())
    }

    pub fn logger(&self) -> CliResult<Logger> {
        Ok(Logger::new(self.severity()?))
    }
}
