use stay_server::BoxError;
use stay_server::api;
use stay_server::config::Config;
use stay_server::state::AppState;

/// Env files tried in order; variables already set win.
const ENV_FILES: [&str; 4] = [".env", ".env.local", "../.env", "../.env.local"];

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env files
    for path in ENV_FILES {
        let _ = dotenvy::from_filename(path);
    }

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stay_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        environment = %config.environment,
        amount_convention = %config.amount_convention,
        "Starting stay-server"
    );
    match config.razorpay.masked_key_id() {
        Some(key) => tracing::info!(
            key_id = %key,
            secret_present = config.razorpay.key_secret.is_some(),
            "Razorpay key configured"
        ),
        None => tracing::warn!("Razorpay key not configured, card orders will fail"),
    }

    // Initialize application state
    let state = AppState::new(&config).await?;

    let app = api::create_router(state, &config.cors_origin);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("stay-server HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
