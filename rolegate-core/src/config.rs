//! Configuration management

use crate::error::{ErrorContext, RolegateError, RolegateResult};
use crate::types::{GroupType, ResolverSettings, RolegateConfig, SessionSettings};
use crate::validation_error;

use std::path::Path;
use std::str::FromStr;

impl Default for RolegateConfig {
    fn default() -> Self {
        Self {
            session: SessionSettings {
                timeout_minutes: 480, // 8 hours
            },
            resolver: ResolverSettings {
                default_groups: vec![
                    "ADMIN".to_string(),
                    "USER".to_string(),
                    "GROUP2".to_string(),
                ],
                overrides: std::collections::HashMap::new(),
            },
            logging: crate::logging::LoggingConfig::default(),
        }
    }
}

impl RolegateConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> RolegateResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RolegateError::Config {
            message: format!("Failed to read config file: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        let config: RolegateConfig = toml::from_str(&content).map_err(|e| RolegateError::Config {
            message: format!("Failed to parse config: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("parse_toml")
                .with_suggestion("Check TOML syntax in config file"),
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> RolegateResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| RolegateError::Config {
            message: format!("Failed to serialize config: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config").with_operation("serialize_toml"),
        })?;

        std::fs::write(path, content).map_err(|e| RolegateError::Config {
            message: format!("Failed to write config file: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("write_file")
                .with_suggestion("Check if the directory exists and is writable"),
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> RolegateResult<()> {
        if self.session.timeout_minutes == 0 {
            return Err(validation_error!(
                "Session timeout must be greater than zero",
                "session.timeout_minutes",
                "config"
            ));
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(validation_error!(
                format!("Unknown log level: {}", self.logging.level),
                "logging.level",
                "config"
            ));
        }

        for name in self
            .resolver
            .default_groups
            .iter()
            .chain(self.resolver.overrides.values().flatten())
        {
            if GroupType::from_str(name).is_err() {
                return Err(validation_error!(
                    format!("Unknown group name: {}", name),
                    "resolver",
                    "config"
                ));
            }
        }

        Ok(())
    }
}
