// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Auth0 tenant endpoints derived from [`Auth0Settings`].

use url::Url;

use crate::settings::Auth0Settings;

/// Auth0 hosted tenant suffix appended to the configured domain prefix.
const AUTH0_HOST_SUFFIX: &str = "auth0.com";

/// Token type requested from `/authorize` (implicit grant).
const RESPONSE_TYPE: &str = "token";

impl Auth0Settings {
    /// Tenant host, e.g. `fsndmalavcoffee.us.auth0.com`.
    pub fn tenant_host(&self) -> String {
        format!("{}.{AUTH0_HOST_SUFFIX}", self.url)
    }

    /// Expected `iss` claim of tokens issued by this tenant.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.tenant_host())
    }

    /// JWKS endpoint used to verify token signatures.
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.tenant_host())
    }

    /// Build the link that starts an Auth0 login.
    ///
    /// After authenticating, Auth0 redirects to `callbackURL` joined with
    /// `callback_path` and puts the access token in the URL fragment.
    pub fn login_link(&self, callback_path: &str) -> Result<Url, url::ParseError> {
        let mut link = Url::parse(&format!("https://{}/authorize", self.tenant_host()))?;
        let redirect_uri = if callback_path.is_empty() {
            self.callback_url.clone()
        } else {
            format!("{}{}", self.callback_url.trim_end_matches('/'), callback_path)
        };

        link.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", RESPONSE_TYPE)
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &redirect_uri);

        Ok(link)
    }
}
