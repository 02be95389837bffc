//! HTTP driver for integration testing.
//!
//! Sends requests through the full router (middleware included) with
//! `tower::ServiceExt::oneshot`, no socket involved.

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

pub struct HttpClient {
    router: Router,
}

/// A fully buffered response.
#[derive(Debug)]
pub struct HttpResult {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResult {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Body is not JSON ({}): {}",
                e,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Asserts the full CORS header set is present.
    pub fn assert_cors(&self) {
        assert_eq!(self.header("access-control-allow-origin"), Some("*"));
        assert_eq!(
            self.header("access-control-allow-methods"),
            Some("GET, POST, OPTIONS")
        );
        assert_eq!(
            self.header("access-control-allow-headers"),
            Some("Content-Type, Authorization, Accept, X-Requested-With")
        );
        assert_eq!(self.header("access-control-max-age"), Some("86400"));
    }
}

impl HttpClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn send(&self, request: Request<Body>) -> HttpResult {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        HttpResult {
            status,
            headers,
            body,
        }
    }

    pub async fn request(&self, method: Method, path: &str) -> HttpResult {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .expect("Valid request");
        self.send(request).await
    }

    pub async fn get(&self, path: &str) -> HttpResult {
        self.request(Method::GET, path).await
    }

    /// POST a GraphQL document as `{"query": ...}` to `path`.
    pub async fn post_graphql(&self, path: &str, query: &str) -> HttpResult {
        self.post_json(path, &serde_json::json!({ "query": query })).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> HttpResult {
        self.post_raw(path, "application/json", body.to_string()).await
    }

    pub async fn post_raw(&self, path: &str, content_type: &str, body: String) -> HttpResult {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .expect("Valid request");
        self.send(request).await
    }
}
