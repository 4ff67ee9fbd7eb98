use checkout_orders::lifecycle::{setup_tracing, AppConfig, CheckoutSystem};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    let system = CheckoutSystem::new(&config);
    let app = system.router().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    let listener = tokio::net::TcpListener::bind(&config.http_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {}", config.http_addr, e))?;
    info!(addr = %config.http_addr, backend = ?config.store_backend, "Order service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("server error: {}", e))?;

    system.shutdown().await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
