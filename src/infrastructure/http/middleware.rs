//! HTTP Middleware
//!
//! - 状态码错误日志
//! - 处理器 panic 捕获，与处理器内部错误返回同一个 500 JSON

use std::any::Any;
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::IntoResponse, response::Response};
use tower_http::catch_panic::CatchPanicLayer;

use super::error::ApiError;

/// 状态码错误日志中间件
///
/// 4xx 记为 warn，5xx 记为 error
/// 注意：错误详情在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// 捕获处理器中的 panic
pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn missing_handler() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    async fn panic_handler() -> &'static str {
        panic!("boom")
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/missing", get(missing_handler))
            .route("/panic", get(panic_handler))
            .layer(catch_panic_layer())
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    fn request(uri: &str) -> HttpRequest<Body> {
        HttpRequest::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_ok_response_passes_through() {
        let response = create_test_router().oneshot(request("/ok")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_client_error_passes_through() {
        let response = create_test_router()
            .oneshot(request("/missing"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let response = create_test_router()
            .oneshot(request("/panic"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "error": "Internal server error",
                "message": "An unexpected error occurred"
            })
        );
    }
}
