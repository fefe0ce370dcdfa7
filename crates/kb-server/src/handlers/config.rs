//! Site configuration API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    title: String,
    tagline: String,
    base_url: String,
    version: String,
    feature_cards: bool,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        title: state.site.title.clone(),
        tagline: state.site.tagline.clone(),
        base_url: state.links.base_url().to_owned(),
        version: state.version.clone(),
        feature_cards: state.site.feature_cards,
    })
}
