mod config;
mod routes;
mod services;
mod state;

use std::time::Duration;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();
    let port = config.port;
    let admin_seed = config.admin_seed.clone();
    let state = state::AppState::new(config);

    if let Some(seed) = admin_seed {
        match state.seed_admin(&seed).await {
            Ok(admin) => tracing::info!(username = %admin.username, "admin account seeded"),
            Err(e) => tracing::warn!(error = %e, "admin account not seeded"),
        }
    }
    tracing::debug!(accounts = state.users.count().await, "user directory ready");

    let _sweeper = state::spawn_session_sweeper(state.clone(), SESSION_SWEEP_INTERVAL);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos SSR unavailable, serving API routes only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "competny listening");
    axum::serve(listener, app).await
}
