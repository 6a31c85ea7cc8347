mod handlers;
mod types;
pub use handlers::*;
pub use types::*;

use tokio::net::TcpListener;
use axum::{
    Router,
    routing::get
};
use tower_http::cors::{Any, CorsLayer};
use std::net::SocketAddr;
use tracing::info;
use anyhow::Result;
use std::time::Duration;

pub fn router() -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    // Build router with routes and middleware
    Router::new()
        // Core endpoints
        .route("/health", get(health_check))

        // Formula endpoints
        .route("/bmi", get(get_bmi))
        .route("/bodyfat", get(get_body_fat))
        .route("/idealweight", get(get_ideal_weight))
        .route("/caloriesburned", get(get_calories_burned))
        .layer(cors)
}

pub async fn serve(host: String, port: u16) -> Result<()> {
    let app = router();

    // Create socket address
    let addr = format!("{}:{}", host, port)
        .parse::<SocketAddr>()?;

    // Create TCP listener
    let listener = TcpListener::bind(&addr).await?;

    info!("API server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
