// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Configuration errors raised while building the settings record.
///
/// These only occur at startup; `main` logs them and exits before the
/// server binds.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required field is empty
    #[error("missing required setting '{0}'")]
    MissingField(&'static str),
    /// A URL field does not parse as an absolute http(s) URL
    #[error("setting '{field}' is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },
    /// The Auth0 domain is not a bare domain prefix
    #[error("auth0.url must be a bare domain prefix, got '{0}'")]
    InvalidDomain(String),
    /// APP_PROFILE names no known profile
    #[error("unknown settings profile '{0}'")]
    UnknownProfile(String),
    /// Settings file could not be read
    #[error("failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Settings file is not a valid settings document
    #[error("failed to parse settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
