mod app;
mod clock;
mod config;
mod error;
mod ident;
mod recipes;
mod state;
mod users;
mod validation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "cookbook=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = state::AppState::init().await?;
    error::set_diagnostic_mode(state.config.is_development());
    tracing::info!(db = %state.config.mongodb_db, "database connected");

    let config = state.config.clone();
    let app = app::build_app(state);
    app::serve(app, &config).await
}
