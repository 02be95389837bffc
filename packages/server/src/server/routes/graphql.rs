use std::panic::AssertUnwindSafe;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderMap, Method, StatusCode, Uri,
    },
    response::{Html, IntoResponse, Response},
    Json,
};
use futures::FutureExt;
use juniper::http::{GraphQLBatchRequest, GraphQLRequest};
use juniper::{Definition, InputValue, OperationType};
use serde::Deserialize;
use tracing::{debug, info_span, Instrument};

use crate::server::app::AxumAppState;
use crate::server::error::AppError;
use crate::server::graphql::{ExecutionContext, GraphQLContext, RequestInfo, Schema};

/// Query-string form of a GraphQL request (`GET /graphql?query=...`).
#[derive(Debug, Deserialize)]
pub struct GraphQLGetParams {
    query: Option<String>,
    #[serde(rename = "operationName")]
    operation_name: Option<String>,
    /// JSON-encoded variables object
    variables: Option<String>,
}

/// GraphQL GET endpoint
///
/// Serves GraphiQL to browsers (when enabled) if no query is given.
/// Mutations are refused with 405; they must be POSTed.
pub async fn graphql_get_handler(
    State(state): State<AxumAppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    params: Result<Query<GraphQLGetParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let Some(query) = params.query else {
        if state.graphiql_enabled && accepts_html(&headers) {
            return Ok(graphql_playground(uri.path()).into_response());
        }
        return Err(AppError::BadRequest(
            "Missing `query` parameter".to_string(),
        ));
    };

    let operation = selected_operation_type(
        &state.schema,
        &query,
        params.operation_name.as_deref(),
    );
    if operation == Some(OperationType::Mutation) {
        return Err(AppError::MethodNotAllowed(
            "Mutations must be sent with POST".to_string(),
        ));
    }

    let variables = params
        .variables
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(serde_json::from_str::<InputValue>)
        .transpose()
        .map_err(|e| AppError::BadRequest(format!("Invalid `variables` parameter: {}", e)))?;

    let request = GraphQLBatchRequest::Single(GraphQLRequest::new(
        query,
        params.operation_name,
        variables,
    ));

    execute_request(state, RequestInfo { method, uri, headers }, request).await
}

/// GraphQL POST endpoint
///
/// Accepts a single JSON request, a JSON array (batch), or an
/// `application/graphql` body holding the bare query.
pub async fn graphql_post_handler(
    State(state): State<AxumAppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let request = if is_graphql_content_type(&headers) {
        let query = String::from_utf8(body.to_vec())
            .map_err(|_| AppError::BadRequest("Request body is not valid UTF-8".to_string()))?;
        GraphQLBatchRequest::Single(GraphQLRequest::new(query, None, None))
    } else {
        serde_json::from_slice::<GraphQLBatchRequest>(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request body: {}", e)))?
    };

    execute_request(state, RequestInfo { method, uri, headers }, request).await
}

/// Build the per-request context and run the request through juniper.
///
/// Parse and validation failures come back from juniper as 400; a panic
/// anywhere in execution becomes the 500 envelope.
async fn execute_request(
    state: AxumAppState,
    request_info: RequestInfo,
    request: GraphQLBatchRequest,
) -> Result<Response, AppError> {
    let execution = ExecutionContext::new();
    let request_id = execution.request_id;

    let context = GraphQLContext::build(
        request_info,
        state.environment.clone(),
        execution,
        state.chat.clone(),
    );

    let response = AssertUnwindSafe(request.execute(&*state.schema, &context))
        .catch_unwind()
        .instrument(info_span!("graphql", %request_id))
        .await
        .map_err(AppError::from_panic)?;

    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    debug!(%request_id, %status, "GraphQL response");

    Ok((status, Json(response)).into_response())
}

/// Type of the operation a request would run.
///
/// `None` when the document does not parse or the operation cannot be picked;
/// the executor reports those itself.
fn selected_operation_type(
    schema: &Schema,
    query: &str,
    operation_name: Option<&str>,
) -> Option<OperationType> {
    let document = juniper::parser::parse_document_source(query, &schema.schema).ok()?;

    let mut operations = document.iter().filter_map(|definition| match definition {
        Definition::Operation(operation) => Some(&operation.item),
        Definition::Fragment(_) => None,
    });

    match operation_name {
        Some(name) => operations
            .find(|op| op.name.as_ref().is_some_and(|n| n.item == name))
            .map(|op| op.operation_type),
        None => {
            let first = operations.next()?;
            match operations.next() {
                Some(_) => None,
                None => Some(first.operation_type),
            }
        }
    }
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("text/html"))
}

fn is_graphql_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/graphql"))
}

/// GraphQL playground (GraphiQL) pointed at the path it was served from
pub fn graphql_playground(endpoint: &str) -> Html<String> {
    Html(juniper::http::graphiql::graphiql_source(endpoint, None))
}
