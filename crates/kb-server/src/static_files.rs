//! Static file serving.
//!
//! Serves images and stylesheets from the configured asset directory below
//! the site base URL.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{Uri, header};
use axum::response::{IntoResponse, Response};

use crate::error::ServerError;
use crate::state::AppState;

/// Serve a static asset, or a JSON 404.
pub(crate) async fn serve_asset(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let path = uri.path();
    let Some(asset_path) = path.strip_prefix(state.links.base_url()) else {
        return ServerError::NotFound(path.to_owned()).into_response();
    };

    match state.assets.get(asset_path) {
        Some(content) => (
            [(header::CONTENT_TYPE, kb_assets::mime_for(asset_path))],
            content.into_owned(),
        )
            .into_response(),
        None => ServerError::NotFound(path.to_owned()).into_response(),
    }
}
