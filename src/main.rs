mod config;
mod routes;
mod state;

use std::process::ExitCode;

use leptos::prelude::get_configuration;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "rollcall failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::Config::from_env()?;
    let port = config.port;
    tracing::info!(
        frontend_api = %config.identity.frontend_api,
        development = config.identity.is_development(),
        upstream = %config.api_upstream,
        "configuration loaded"
    );
    if !config.proxy_verify_tls {
        tracing::warn!("api proxy accepts invalid upstream certificates");
    }

    let state = state::AppState::new(config)?;
    let leptos_options = get_configuration(None)
        .map_err(|e| StartupError::Leptos(e.to_string()))?
        .leptos_options;

    let app = routes::app(state, leptos_options);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "rollcall listening");
    axum::serve(listener, app).await?;
    Ok(())
}
