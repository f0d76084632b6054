//! Axum application setup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/types", post(handlers::create_types))
        .route("/words", post(handlers::count_words))
        .route("/slug", post(handlers::create_slug))
        .route("/api-keys", post(handlers::calculate_api_keys))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state)
}

/// Start the web server and run until Ctrl+C.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use toolbench::WordCountOptions;
    use tower::ServiceExt;

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn app() -> Router {
        create_router(AppState::default())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_types_success_and_failure() {
        let (status, body) = post_json(
            app(),
            "/api/types",
            json!({"data": {"id": 1}, "useTypeAlias": true}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "generatedTypes": "type GeneratedType = {\n  id: number;\n};"})
        );

        let (status, body) = post_json(app(), "/api/types", json!({"data": []})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false, "error": "Invalid JSON input"}));
    }

    #[tokio::test]
    async fn test_words_with_and_without_options() {
        let (status, body) = post_json(
            app(),
            "/api/words",
            json!({"text": "The cat sat. The cat ran!"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["wordCount"], 6);
        assert_eq!(body["stats"]["uniqueWords"], 4);
        assert_eq!(body["stats"]["sentences"], 2);
        assert_eq!(body["topWords"][0], json!({"word": "the", "count": 2}));
        assert_eq!(body["topWords"][1], json!({"word": "cat", "count": 2}));

        let (_, body) = post_json(
            app(),
            "/api/words",
            json!({"text": "<p>Hello</p>", "options": {"stripHtml": false}}),
        )
        .await;
        assert_eq!(body["wordCount"], 1);
    }

    #[tokio::test]
    async fn test_words_use_server_defaults() {
        let state = AppState::new()
            .with_word_options(WordCountOptions::raw())
            .with_top_words(1);
        let app = create_router(state);

        let (status, body) = post_json(
            app.clone(),
            "/api/words",
            json!({"text": "<p> Hello </p> again again"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        // Raw options keep the tags as words.
        assert_eq!(body["wordCount"], 5);
        assert_eq!(body["topWords"], json!([{"word": "again", "count": 2}]));

        // Explicit request options override the server defaults.
        let (_, body) = post_json(
            app,
            "/api/words",
            json!({"text": "<p> Hello </p> again again", "options": {}}),
        )
        .await;
        assert_eq!(body["wordCount"], 3);
        assert_eq!(body["topWords"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_words_null_option_takes_default() {
        let (status, body) = post_json(
            app(),
            "/api/words",
            json!({"text": "<p> Hello </p>", "options": {"stripHtml": null}}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["wordCount"], 1);
    }

    #[tokio::test]
    async fn test_slug() {
        let (status, body) = post_json(
            app(),
            "/api/slug",
            json!({"text": "Hello World!", "useUnderscore": true}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"slug": "hello_world"}));
    }

    #[tokio::test]
    async fn test_api_keys_success() {
        let (status, body) = post_json(
            app(),
            "/api/api-keys",
            json!({"requestsPerMonth": 10000, "operationInterval": 10, "requestsPerOperation": 2}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["requiredKeys"], 1);
        assert_eq!(body["daysBeforeLimit"], 34);
        assert!(body.get("newInterval").is_none());
    }

    #[tokio::test]
    async fn test_api_keys_insufficient_data_is_bad_request() {
        let (status, body) = post_json(
            app(),
            "/api/api-keys",
            json!({"requestsPerMonth": 10000, "operationInterval": 10}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "insufficient_data");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/slug")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }
}
