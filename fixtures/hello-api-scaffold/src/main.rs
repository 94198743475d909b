use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LISTEN_ON: &str = "127.0.0.1:8001";

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
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
    info!("hello-api-scaffold started, listen on: {}", LISTEN_ON);
    axum::serve(listener, app()).await?;

    Ok(())
}

#[cfg(test)]
mod test {
    use axum::body::{Body, Bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::app;

    async fn send(method: Method) -> (StatusCode, Option<String>, Bytes) {
        let request = Request::builder()
            .method(method)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, content_type, body)
    }

    #[tokio::test]
    async fn get_root_returns_the_greeting() {
        let (status, content_type, body) = send(Method::GET).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(&body[..], br#"{"message":"Hello World"}"#);
    }

    #[tokio::test]
    async fn get_root_is_idempotent() {
        let (_, _, first) = send(Method::GET).await;
        let (_, _, second) = send(Method::GET).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn no_other_method_is_routed() {
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let (status, _, _) = send(method).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        }
    }
}
