mod config;
mod routes;

use leptos::prelude::get_configuration;

use config::{HostConfig, HostError};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "milktea host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let host = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| HostError::LeptosConfig(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", host.port))
        .await
        .map_err(HostError::Bind)?;

    tracing::info!(port = host.port, "milktea assistant listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
