// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Startup validation of the settings record.
//!
//! A record that fails here is a configuration error: the service refuses to
//! start instead of handing a broken record to the client.

use url::Url;

use super::Settings;
use crate::error::ConfigError;

impl Settings {
    /// Check that every field is present and well formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_http_url("apiServerUrl", &self.api_server_url)?;

        check_non_empty("auth0.url", &self.auth0.url)?;
        check_domain_prefix(&self.auth0.url)?;
        check_non_empty("auth0.audience", &self.auth0.audience)?;
        check_non_empty("auth0.clientId", &self.auth0.client_id)?;
        check_http_url("auth0.callbackURL", &self.auth0.callback_url)?;

        Ok(())
    }

    /// URL fields of a production record that use plain `http`.
    ///
    /// Not a validation failure; the loader logs these once at startup.
    pub fn insecure_endpoints(&self) -> Vec<&'static str> {
        if !self.production {
            return Vec::new();
        }

        [
            ("apiServerUrl", &self.api_server_url),
            ("auth0.callbackURL", &self.auth0.callback_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.starts_with("http://"))
        .map(|(field, _)| field)
        .collect()
    }
}

fn check_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField(field));
    }
    Ok(())
}

fn check_http_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    check_non_empty(field, value)?;

    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            field,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl {
            field,
            reason: "missing host".to_string(),
        });
    }

    Ok(())
}

/// The Auth0 domain is a bare prefix such as `tenant.us`, not a URL.
///
/// Only dot-separated hostname labels are accepted, so the derived tenant
/// host cannot pick up a port, userinfo, path, query or fragment.
fn check_domain_prefix(value: &str) -> Result<(), ConfigError> {
    let valid = value.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    if !valid {
        return Err(ConfigError::InvalidDomain(value.to_string()));
    }
    Ok(())
}
