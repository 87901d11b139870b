mod api;
mod db;
mod error;
mod models;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Router,
};
use dotenv::dotenv;
use std::{env, sync::Arc, time::Duration};
use tower_http::cors::CorsLayer;

use crate::{
    api::{like::like_router, room::room_router},
    db::connection::Database,
};

#[derive(Clone)]
pub struct SharedState {
    pub db: Arc<Database>,
}

async fn banner() -> &'static str {
    "Roommate listing server is up and running"
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db = Arc::new(
        Database::init()
            .await
            .expect("❌ Failed to connect to MongoDB"),
    );

    let shared_state = SharedState { db };

    let origin = env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());
    let cors = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(&origin).expect("❌ CORS_ORIGIN is not a valid header value"),
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .route("/", get(banner))
        .nest("/api", room_router().merge(like_router()))
        .layer(cors)
        .with_state(shared_state);

    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("0.0.0.0:{port}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("❌ Failed to bind server address");

    tracing::info!("Server is running on {addr}");

    axum::serve(listener, app).await.expect("❌ Server error");
}
