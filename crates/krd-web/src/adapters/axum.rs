use crate::pages::Query;
use crate::{KRD_RUNTIME_JS, RUNTIME_PATH, Site};
use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{self, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use std::sync::Arc;

/// Every page route plus the client runtime. Unknown paths are 404.
pub fn router(site: Arc<Site>) -> Router {
    Router::new()
        .route(RUNTIME_PATH, get(runtime_js))
        .fallback(render_page)
        .with_state(site)
}

async fn runtime_js() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        KRD_RUNTIME_JS,
    )
        .into_response()
}

async fn render_page(
    State(site): State<Arc<Site>>,
    uri: Uri,
    query: Result<extract::Query<Query>, QueryRejection>,
) -> Response {
    let path = uri.path();
    let query = query_or_empty(query);
    tracing::info!(path, query = ?uri.query(), "request");

    match site.render(path, &query).await {
        Some(html) => Html(html).into_response(),
        None => {
            tracing::debug!(path, "no page at route");
            (StatusCode::NOT_FOUND, "not found").into_response()
        }
    }
}

/// Decoded query pairs of `uri`, for callers rendering outside a request.
pub fn query_from_uri(uri: &Uri) -> Query {
    query_or_empty(extract::Query::try_from_uri(uri))
}

// An undecodable query renders the page in its default state.
fn query_or_empty(query: Result<extract::Query<Query>, QueryRejection>) -> Query {
    match query {
        Ok(extract::Query(query)) => query,
        Err(err) => {
            tracing::debug!(error = %err, "ignoring undecodable query");
            Query::new()
        }
    }
}
