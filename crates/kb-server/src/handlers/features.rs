//! Feature cards API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use kb_site::FeatureCatalog;

use crate::state::AppState;

/// Handle GET /api/features.
pub(crate) async fn get_features(State(state): State<Arc<AppState>>) -> Response {
    Json(FeatureCatalog {
        cards: state.features.cards(),
    })
    .into_response()
}
