// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    settings::{Auth0Settings, Profile, Settings},
    state::AppState,
};

pub mod health;
pub mod settings;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/settings", get(settings::get_settings))
        .route("/settings/profiles", get(settings::list_profiles))
        .route(
            "/settings/profiles/{name}",
            get(settings::get_profile_settings),
        )
        .route("/auth/login-link", get(settings::login_link));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .nest("/v1", v1_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        settings::get_settings,
        settings::list_profiles,
        settings::get_profile_settings,
        settings::login_link,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            Settings,
            Auth0Settings,
            Profile,
            settings::ProfileInfo,
            settings::LoginLink,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Settings", description = "Environment settings for the client"),
        (name = "Auth", description = "Auth0 login helpers"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::settings::StaticProvider;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::default());
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn serves_active_settings() {
        let (status, body) = get_json(router(AppState::default()), "/v1/settings").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], false);
        assert_eq!(body["apiServerUrl"], "http://127.0.0.1:5046");
        assert_eq!(body["auth0"]["clientId"], "DpbnPAM96ONwNsFFXG1dOzCN7Pzf46kY");
        assert_eq!(body["auth0"]["callbackURL"], "http://127.0.0.1:8104");
    }

    #[tokio::test]
    async fn injected_provider_changes_served_settings() {
        let state = AppState::for_profile(Profile::Production);
        let (status, body) = get_json(router(state), "/v1/settings").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], true);
        assert_eq!(body["apiServerUrl"], "https://api.coffeeshop.example.com");
    }

    #[tokio::test]
    async fn lists_profiles_with_active_flag() {
        let (status, body) =
            get_json(router(AppState::default()), "/v1/settings/profiles").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!([
                { "name": "development", "active": true },
                { "name": "production", "active": false }
            ])
        );
    }

    #[tokio::test]
    async fn serves_named_profile() {
        let (status, body) = get_json(
            router(AppState::default()),
            "/v1/settings/profiles/production",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], true);
    }

    #[tokio::test]
    async fn unknown_profile_is_404() {
        let (status, body) =
            get_json(router(AppState::default()), "/v1/settings/profiles/staging").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown profile 'staging'");
    }

    #[tokio::test]
    async fn login_link_uses_active_settings() {
        let (status, body) = get_json(
            router(AppState::default()),
            "/v1/auth/login-link?callback_path=/tabs/user-page",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let url = body["url"].as_str().unwrap();
        assert!(url.starts_with("https://fsndmalavcoffee.us.auth0.com/authorize?"));
        assert!(url.contains("client_id=DpbnPAM96ONwNsFFXG1dOzCN7Pzf46kY"));
        assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8104%2Ftabs%2Fuser-page"));
    }

    #[tokio::test]
    async fn login_link_rejects_relative_callback_path() {
        let (status, _) = get_json(
            router(AppState::default()),
            "/v1/auth/login-link?callback_path=tabs",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn misconfigured_tenant_is_a_server_error() {
        let mut settings = Profile::Development.settings();
        settings.auth0.url = "tenant.us:443".to_string();
        let state = AppState::new(Arc::new(StaticProvider::new(settings)), None);

        let (status, body) = get_json(
            router(state.clone()),
            "/v1/auth/login-link?callback_path=/cb",
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "auth0 settings cannot produce a login link");

        let (status, body) = get_json(router(state), "/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["checks"]["settings"], "invalid");
    }

    #[tokio::test]
    async fn health_reports_ok_for_valid_settings() {
        let (status, body) = get_json(router(AppState::default()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["checks"]["settings"], "ok");
        assert_eq!(body["checks"]["profile"], "development");
    }

    #[tokio::test]
    async fn health_degrades_for_invalid_settings() {
        let mut settings = Profile::Development.settings();
        settings.auth0.client_id = String::new();
        let state = AppState::new(Arc::new(StaticProvider::new(settings)), None);

        let (status, body) = get_json(router(state), "/health/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["checks"]["settings"], "invalid");
        assert!(body["checks"].get("profile").is_none());
    }

    #[tokio::test]
    async fn liveness_is_always_ok() {
        let (status, body) = get_json(router(AppState::default()), "/health/live").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn openapi_document_lists_settings_path() {
        let (status, body) = get_json(router(AppState::default()), "/api-doc/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/v1/settings").is_some());
    }
}
