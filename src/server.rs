use crate::config::ServerConfig;
use crate::detector::detect_carrier;
use crate::registry::CarrierRegistry;
use axum::{
    extract::Path,
    http::Method,
    response::{IntoResponse, Json},
    routing::get,
    Extension, Router,
};
use hyper::Server;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info};

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "parcel-tracker",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Tracking endpoint: detect the carrier, resolve it in the registry and
/// return the carrier's tracking result as JSON.
async fn track_handler(
    Extension(registry): Extension<Arc<CarrierRegistry>>,
    Path(tracking_number): Path<String>,
) -> impl IntoResponse {
    info!("Tracking request for: {tracking_number}");

    let carrier_id = detect_carrier(&tracking_number);
    let carrier = registry.resolve(carrier_id);

    match carrier.track(&tracking_number).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            error!("Tracking error: {e}");
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to track parcel" })),
            )
                .into_response()
        }
    }
}

/// Create the HTTP server with all routes
pub fn create_server(registry: Arc<CarrierRegistry>, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/health", get(health))
        .route("/api/track/:tracking_number", get(track_handler))
        .layer(Extension(registry));

    // Serve the built frontend in production; unmatched routes fall back to
    // index.html so client-side routing keeps working.
    if config.serve_static {
        let static_dir = PathBuf::from(&config.static_dir);
        let spa = ServeDir::new(&static_dir)
            .not_found_service(ServeFile::new(static_dir.join("index.html")));
        router = router.fallback_service(spa);
    }

    router.layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the configured port
pub async fn start_server(registry: Arc<CarrierRegistry>, config: ServerConfig) -> anyhow::Result<()> {
    let app = create_server(registry, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    println!("🚀 Server running on http://localhost:{}", config.port);
    println!("💚 Health check: http://localhost:{}/health", config.port);
    println!(
        "📦 Tracking API: http://localhost:{}/api/track/{{trackingNumber}}",
        config.port
    );

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
