// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{net::SocketAddr, process, sync::Arc};

use coffee_shop_settings::{
    api::router,
    config::{LogFormat, ServerConfig, DEFAULT_LOG_FILTER},
    settings::ConfigurationProvider,
    state::AppState,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    };

    init_tracing(config.log_format);

    // Settings must be valid before anything is served
    let provider = match config.load_provider() {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!(error = %e, "Settings are invalid, refusing to start");
            process::exit(1);
        }
    };

    let settings = provider.get_settings();
    tracing::info!(
        profile = %config.profile,
        settings_file = ?config.settings_file,
        production = settings.production,
        api_server_url = %settings.api_server_url,
        auth0_tenant = %settings.auth0.tenant_host(),
        "Settings loaded"
    );

    let profile = config.settings_file.is_none().then_some(config.profile);
    let state = AppState::new(Arc::new(provider), profile);
    let app = router(state);

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(host = %config.host, port = config.port, error = %e, "Failed to parse bind address");
            process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            process::exit(1);
        }
    };

    tracing::info!("Coffee shop settings service listening on http://{addr} (docs at /docs)");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server failed");
        process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
