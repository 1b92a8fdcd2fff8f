// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Read-only access to the settings record.
//!
//! Consumers hold an `Arc<dyn ConfigurationProvider>` (see `AppState`) and
//! never see where the record came from, so swapping the profile or the
//! settings file changes what they observe without touching their code.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::{Profile, Settings};
use crate::error::ConfigError;

/// Supplies the settings record to the rest of the application.
pub trait ConfigurationProvider: Send + Sync {
    /// The settings record. Returns the same record on every call.
    fn get_settings(&self) -> &Settings;
}

/// Provider over a record fixed at construction.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    settings: Arc<Settings>,
}

impl StaticProvider {
    /// Wrap an explicitly constructed record.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Provider for one of the built-in profiles.
    pub fn for_profile(profile: Profile) -> Self {
        Self::new(profile.settings())
    }

    /// Read a record from a JSON file in the client's settings shape.
    ///
    /// The file replaces the whole record; fields are not merged with a
    /// profile.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(settings))
    }
}

impl ConfigurationProvider for StaticProvider {
    fn get_settings(&self) -> &Settings {
        &self.settings
    }
}
