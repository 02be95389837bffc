use std::future::Future;
use std::sync::Arc;

use axum::http::{HeaderMap, Method, Uri};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::kernel::{BaseChatCompletion, Environment};

/// The inbound HTTP request as seen by resolvers.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
}

/// Per-request execution handle.
///
/// Carries the request id used in logs and lets callers attach detached
/// background work to the request.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub request_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }

    /// Run `work` in the background; the response does not wait for it.
    pub fn wait_until<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let request_id = self.request_id;
        tokio::spawn(async move {
            work.await;
            tracing::debug!(%request_id, "Background work finished");
        });
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// GraphQL request context
///
/// Built once per request; resolvers get the environment bindings, the raw
/// request and the execution handle from here.
pub struct GraphQLContext {
    pub environment: Option<Arc<Environment>>,
    pub request: RequestInfo,
    pub execution: ExecutionContext,
    pub chat: Arc<dyn BaseChatCompletion>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    /// Context builder. Pure construction, no I/O.
    pub fn build(
        request: RequestInfo,
        environment: Option<Arc<Environment>>,
        execution: ExecutionContext,
        chat: Arc<dyn BaseChatCompletion>,
    ) -> Self {
        Self {
            environment,
            request,
            execution,
            chat,
        }
    }

    /// Provider credential from the environment bindings.
    pub fn api_key(&self) -> Option<&str> {
        self.environment.as_deref().and_then(Environment::credential)
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_deref()
    }
}
