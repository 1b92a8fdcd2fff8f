// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::ApiError,
    settings::{Profile, Settings},
    state::AppState,
};

/// A known settings profile.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileInfo {
    pub name: Profile,
    /// Whether this profile is serving `/v1/settings`.
    pub active: bool,
}

/// Login link response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginLink {
    pub url: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginLinkQuery {
    /// Path appended to the callback URL, e.g. `/tabs/user-page`.
    #[serde(default)]
    pub callback_path: String,
}

#[utoipa::path(
    get,
    path = "/v1/settings",
    tag = "Settings",
    responses(
        (status = 200, description = "Active settings record", body = Settings)
    )
)]
pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.get_settings().clone())
}

#[utoipa::path(
    get,
    path = "/v1/settings/profiles",
    tag = "Settings",
    responses(
        (status = 200, description = "Known profiles", body = [ProfileInfo])
    )
)]
pub async fn list_profiles(State(state): State<AppState>) -> Json<Vec<ProfileInfo>> {
    let profiles = Profile::all()
        .into_iter()
        .map(|name| ProfileInfo {
            name,
            active: state.profile == Some(name),
        })
        .collect();
    Json(profiles)
}

#[utoipa::path(
    get,
    path = "/v1/settings/profiles/{name}",
    tag = "Settings",
    params(
        ("name" = String, Path, description = "Profile name (development, production)")
    ),
    responses(
        (status = 200, description = "Settings record for the profile", body = Settings),
        (status = 404, description = "Unknown profile")
    )
)]
pub async fn get_profile_settings(Path(name): Path<String>) -> Result<Json<Settings>, ApiError> {
    let profile = Profile::from_str(&name)
        .ok_or_else(|| ApiError::not_found(format!("unknown profile '{name}'")))?;
    Ok(Json(profile.settings()))
}

#[utoipa::path(
    get,
    path = "/v1/auth/login-link",
    tag = "Auth",
    params(LoginLinkQuery),
    responses(
        (status = 200, description = "Auth0 login link", body = LoginLink),
        (status = 400, description = "Invalid callback path"),
        (status = 500, description = "Auth0 settings cannot produce a login link")
    )
)]
pub async fn login_link(
    State(state): State<AppState>,
    Query(query): Query<LoginLinkQuery>,
) -> Result<Json<LoginLink>, ApiError> {
    if !query.callback_path.is_empty() && !query.callback_path.starts_with('/') {
        return Err(ApiError::bad_request("callback_path must start with '/'"));
    }

    let link = state
        .settings
        .get_settings()
        .auth0
        .login_link(&query.callback_path)
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build Auth0 login link");
            ApiError::internal("auth0 settings cannot produce a login link")
        })?;

    Ok(Json(LoginLink {
        url: link.to_string(),
    }))
}
