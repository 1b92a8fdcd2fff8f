// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Auth0 Integration
//!
//! Helpers that turn the `auth0` group of the settings record into the
//! endpoints the client talks to.
//!
//! ## Login Flow
//!
//! 1. Client fetches `/v1/auth/login-link` (or builds the same link itself)
//! 2. User authenticates on the Auth0 hosted page
//! 3. Auth0 redirects to `callbackURL` with the access token in the fragment
//! 4. Client calls the drinks API with `Authorization: Bearer <token>`
//!
//! The drinks API verifies those tokens against [`Auth0Settings::jwks_url`]
//! and [`Auth0Settings::issuer`] with the configured audience.
//!
//! [`Auth0Settings::jwks_url`]: crate::settings::Auth0Settings::jwks_url
//! [`Auth0Settings::issuer`]: crate::settings::Auth0Settings::issuer

pub mod tenant;
