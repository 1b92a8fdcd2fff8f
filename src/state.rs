// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::settings::{ConfigurationProvider, Profile, StaticProvider};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<dyn ConfigurationProvider>,
    /// Profile the active record was selected from; `None` for a settings file.
    pub profile: Option<Profile>,
}

impl AppState {
    pub fn new(settings: Arc<dyn ConfigurationProvider>, profile: Option<Profile>) -> Self {
        Self { settings, profile }
    }

    pub fn for_profile(profile: Profile) -> Self {
        Self::new(Arc::new(StaticProvider::for_profile(profile)), Some(profile))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::for_profile(Profile::default())
    }
}
