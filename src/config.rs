// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! by the settings service. Configuration is loaded from the environment
//! once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `APP_PROFILE` | Settings profile (`development` or `production`) | `development` |
//! | `SETTINGS_FILE` | JSON settings file replacing the profile record | Unset |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::settings::{ConfigurationProvider, Profile, StaticProvider};

/// Environment variable selecting the settings profile.
pub const PROFILE_ENV: &str = "APP_PROFILE";

/// Environment variable pointing at a JSON settings file.
///
/// When set, the file replaces the profile record entirely.
pub const SETTINGS_FILE_ENV: &str = "SETTINGS_FILE";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Parse from `LOG_FORMAT`. Anything other than `json` is pretty.
    pub fn from_str(s: &str) -> LogFormat {
        if s.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Startup configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub profile: Profile,
    pub settings_file: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = match lookup(PROFILE_ENV) {
            Some(name) => Profile::from_str(&name).ok_or(ConfigError::UnknownProfile(name))?,
            None => Profile::default(),
        };

        let settings_file = lookup(SETTINGS_FILE_ENV)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup(PORT_ENV)
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let log_format = lookup(LOG_FORMAT_ENV)
            .map(|f| LogFormat::from_str(&f))
            .unwrap_or_default();

        Ok(Self {
            profile,
            settings_file,
            host,
            port,
            log_format,
        })
    }

    /// Build and validate the settings provider.
    ///
    /// Uses `SETTINGS_FILE` when set, the selected profile otherwise.
    pub fn load_provider(&self) -> Result<StaticProvider, ConfigError> {
        let provider = match &self.settings_file {
            Some(path) => StaticProvider::from_json_file(path)?,
            None => StaticProvider::for_profile(self.profile),
        };

        let settings = provider.get_settings();
        settings.validate()?;
        for field in settings.insecure_endpoints() {
            tracing::warn!(field, "Production settings use plain HTTP");
        }

        Ok(provider)
    }
}
