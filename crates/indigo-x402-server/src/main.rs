use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use indigo_server::{config::ServerConfig, cors::build_cors, routes, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let port = config.port;
    let allowed_origins = config.allowed_origins.clone();

    let state = AppState::from_config(config);

    tracing::info!("AI Indigo x402 API listening on port {port}");
    tracing::info!("Price: {} per query", x402::format_cents(state.config.price_cents));
    tracing::info!("Wallet: {}", state.config.wallet_address);
    tracing::info!("Facilitator: {}", state.config.facilitator_url);
    tracing::info!("Payment verification: {}", state.verifier.mode());
    if matches!(state.verifier.as_ref(), x402::Verifier::AcceptAny(_)) {
        tracing::warn!(
            "PAYMENT_VERIFICATION=accept-any - any non-empty X-PAYMENT header is treated as paid. \
             Set PAYMENT_VERIFICATION=facilitator for real verification."
        );
    }
    if state.config.metrics_token.is_none() {
        tracing::warn!("METRICS_TOKEN not set - /metrics endpoint is publicly accessible");
    }

    let state_data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(state_data.clone())
            .wrap(Logger::default())
            .wrap(build_cors(&allowed_origins))
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
