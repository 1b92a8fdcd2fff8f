// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Settings Record
//!
//! The environment settings consumed by the coffee shop client: where the
//! drinks API lives and how to reach the Auth0 tenant.
//!
//! ## Lifecycle
//!
//! 1. A [`Profile`] is selected at startup (or a settings file is read)
//! 2. The record is validated once, before anything is served
//! 3. It is wrapped in a [`StaticProvider`] and injected into consumers
//!
//! The record is never mutated after construction.
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "mode": false,
//!   "apiServerUrl": "http://127.0.0.1:5046",
//!   "auth0": {
//!     "url": "fsndmalavcoffee.us",
//!     "audience": "coffeeshop",
//!     "clientId": "DpbnPAM96ONwNsFFXG1dOzCN7Pzf46kY",
//!     "callbackURL": "http://127.0.0.1:8104"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod profiles;
pub mod provider;
pub mod validate;

pub use profiles::Profile;
pub use provider::{ConfigurationProvider, StaticProvider};

/// Environment settings for the client application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Settings {
    /// `true` for production builds, `false` for development.
    #[serde(rename = "mode", alias = "production")]
    pub production: bool,

    /// Base URL of the drinks API server.
    #[serde(rename = "apiServerUrl")]
    #[schema(example = "http://127.0.0.1:5046")]
    pub api_server_url: String,

    /// Auth0 tenant and application settings.
    pub auth0: Auth0Settings,
}

/// Auth0 settings owned by a [`Settings`] record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Auth0Settings {
    /// Auth0 domain prefix (the part before `.auth0.com`).
    #[schema(example = "fsndmalavcoffee.us")]
    pub url: String,

    /// API identifier access tokens are issued for.
    #[schema(example = "coffeeshop")]
    pub audience: String,

    /// Public client ID of the registered Auth0 application.
    #[serde(rename = "clientId")]
    pub client_id: String,

    /// Base URL of the running client, where Auth0 redirects after login.
    #[serde(rename = "callbackURL")]
    #[schema(example = "http://127.0.0.1:8104")]
    pub callback_url: String,
}
