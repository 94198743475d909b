use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LISTEN_ON: &str = "127.0.0.1:8000";

#[derive(Serialize)]
struct Greeting {
    message: String,
}

async fn root() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello World".to_string(),
    })
}

fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let listener = TcpListener::bind(LISTEN_ON).await?;
    info!("hello-api started, listen on: {}", LISTEN_ON);
    axum::serve(listener, app()).await?;

    Ok(())
}
