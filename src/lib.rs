// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Coffee Shop Settings - Environment Settings Service
//!
//! This crate provides the immutable per-environment settings record used by
//! the coffee shop client (drinks API endpoint and Auth0 tenant values), and
//! a small HTTP service that hands the active record to the browser.
//!
//! ## Modules
//!
//! - `settings` - Settings record, profiles, provider and validation
//! - `auth` - Auth0 endpoints and login link derived from the record
//! - `api` - HTTP API handlers (Axum)
//! - `config` - Environment variables read at startup

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod settings;
pub mod state;
