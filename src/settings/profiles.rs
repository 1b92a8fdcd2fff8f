// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Named configuration profiles.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Auth0Settings, Settings};

/// Auth0 domain prefix shared by every profile.
const AUTH0_DOMAIN: &str = "fsndmalavcoffee.us";

/// Auth0 API identifier shared by every profile.
const AUTH0_AUDIENCE: &str = "coffeeshop";

/// Public client ID of the coffee shop Auth0 application.
const AUTH0_CLIENT_ID: &str = "DpbnPAM96ONwNsFFXG1dOzCN7Pzf46kY";

/// Build/runtime variant of the settings record.
///
/// - `Development` - local Flask API and local client
/// - `Production` - deployed API and client over HTTPS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Local development
    Development,
    /// Deployed build
    Production,
}

impl Profile {
    /// Every known profile.
    pub fn all() -> [Profile; 2] {
        [Profile::Development, Profile::Production]
    }

    /// Parse profile from string (case-insensitive).
    /// Accepts the short forms `dev` and `prod`.
    pub fn from_str(s: &str) -> Option<Profile> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Some(Profile::Development),
            "prod" | "production" => Some(Profile::Production),
            _ => None,
        }
    }

    /// The settings record for this profile.
    pub fn settings(&self) -> Settings {
        match self {
            Profile::Development => Settings {
                production: false,
                api_server_url: "http://127.0.0.1:5046".to_string(),
                auth0: Auth0Settings {
                    url: AUTH0_DOMAIN.to_string(),
                    audience: AUTH0_AUDIENCE.to_string(),
                    client_id: AUTH0_CLIENT_ID.to_string(),
                    callback_url: "http://127.0.0.1:8104".to_string(),
                },
            },
            // Placeholder hosts; replace per deployment or use SETTINGS_FILE.
            Profile::Production => Settings {
                production: true,
                api_server_url: "https://api.coffeeshop.example.com".to_string(),
                auth0: Auth0Settings {
                    url: AUTH0_DOMAIN.to_string(),
                    audience: AUTH0_AUDIENCE.to_string(),
                    client_id: AUTH0_CLIENT_ID.to_string(),
                    callback_url: "https://coffeeshop.example.com".to_string(),
                },
            },
        }
    }
}

impl Default for Profile {
    /// Default profile is Development (matches a fresh checkout).
    fn default() -> Self {
        Profile::Development
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Profile::Development => write!(f, "development"),
            Profile::Production => write!(f, "production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_correctly() {
        assert_eq!(Profile::from_str("development"), Some(Profile::Development));
        assert_eq!(Profile::from_str("DEV"), Some(Profile::Development));
        assert_eq!(Profile::from_str(" Production "), Some(Profile::Production));
        assert_eq!(Profile::from_str("prod"), Some(Profile::Production));
        assert_eq!(Profile::from_str("staging"), None);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for profile in Profile::all() {
            assert_eq!(Profile::from_str(&profile.to_string()), Some(profile));
        }
    }

    #[test]
    fn default_profile_is_development() {
        assert_eq!(Profile::default(), Profile::Development);
    }

    #[test]
    fn development_record_matches_local_setup() {
        let settings = Profile::Development.settings();
        assert!(!settings.production);
        assert_eq!(settings.api_server_url, "http://127.0.0.1:5046");
        assert_eq!(settings.auth0.url, "fsndmalavcoffee.us");
        assert_eq!(settings.auth0.audience, "coffeeshop");
        assert_eq!(settings.auth0.client_id, "DpbnPAM96ONwNsFFXG1dOzCN7Pzf46kY");
        assert_eq!(settings.auth0.callback_url, "http://127.0.0.1:8104");
    }

    #[test]
    fn production_record_differs_in_mode_and_endpoints() {
        let dev = Profile::Development.settings();
        let prod = Profile::Production.settings();

        assert!(prod.production);
        assert_ne!(dev.api_server_url, prod.api_server_url);
        assert_ne!(dev.auth0.callback_url, prod.auth0.callback_url);
        assert!(prod.api_server_url.starts_with("https://"));
        assert!(prod.auth0.callback_url.starts_with("https://"));
    }

    #[test]
    fn every_profile_validates() {
        for profile in Profile::all() {
            assert!(profile.settings().validate().is_ok(), "{profile} is invalid");
        }
    }
}
