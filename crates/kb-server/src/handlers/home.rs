//! Homepage endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;

/// Handle GET on the site base URL.
pub(crate) async fn get_homepage(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    // Check If-None-Match header for conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == state.homepage_etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::ETAG, state.homepage_etag.clone()),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Html(state.homepage_html.clone()),
    )
        .into_response()
}
