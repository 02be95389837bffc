//! Application setup and server configuration.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{create_chat_completion, BaseChatCompletion, Environment};
use crate::server::error::panic_response;
use crate::server::graphql::{create_schema, Schema};
use crate::server::middleware::cors_middleware;
use crate::server::routes::{
    graphql_get_handler, graphql_post_handler, health_handler, not_found_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub schema: Arc<Schema>,
    /// Bindings copied into every request context
    pub environment: Option<Arc<Environment>>,
    pub chat: Arc<dyn BaseChatCompletion>,
    pub graphiql_enabled: bool,
    pub version: String,
}

impl AxumAppState {
    pub fn new(
        environment: Option<Environment>,
        chat: Arc<dyn BaseChatCompletion>,
        graphiql_enabled: bool,
        version: impl Into<String>,
    ) -> Self {
        Self {
            schema: Arc::new(create_schema()),
            environment: environment.map(Arc::new),
            chat,
            graphiql_enabled,
            version: version.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Some(Environment::from_config(config)),
            create_chat_completion(config),
            config.graphiql_enabled,
            config.app_version.clone(),
        )
    }
}

/// Build the Axum application router
///
/// `/` and `/graphql` execute GraphQL, `/health` reports liveness, everything
/// else is a 404. Every response carries the CORS header set.
pub fn build_app(state: AxumAppState) -> Router {
    let graphql = get(graphql_get_handler)
        .post(graphql_post_handler)
        .fallback(not_found_handler);

    let health = get(health_handler)
        .post(health_handler)
        .fallback(not_found_handler);

    Router::new()
        .route("/", graphql.clone())
        .route("/graphql", graphql)
        .route("/health", health)
        .fallback(not_found_handler)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
