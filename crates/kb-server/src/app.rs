//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// Routes are mounted below the site base URL.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let base = state.links.base_url().to_owned();

    let router = Router::new()
        .route(&base, get(handlers::home::get_homepage))
        .route(&format!("{base}api/config"), get(handlers::config::get_config))
        .route(
            &format!("{base}api/features"),
            get(handlers::features::get_features),
        )
        .fallback(static_files::serve_asset);

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use kb_assets::AssetDir;
    use kb_site::{AssetRef, AssetResolver, SiteInfo, SiteLinks};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    struct AllAssets;

    impl AssetResolver for AllAssets {
        fn resolve(&self, asset: &AssetRef) -> Option<String> {
            Some(format!("/{}", asset.path()))
        }
    }

    fn router(base_url: &str) -> Router {
        router_with_assets(base_url, AssetDir::default())
    }

    fn router_with_assets(base_url: &str, assets: AssetDir) -> Router {
        let state = AppState::new(
            SiteInfo::default(),
            SiteLinks::new(base_url, false),
            assets,
            &AllAssets,
            "0.1.0".to_owned(),
            false,
        );
        create_router(Arc::new(state))
    }

    async fn get(router: Router, uri: &str) -> axum::response::Response {
        router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn homepage_is_html_with_etag() {
        let response = get(router("/"), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert_eq!(response.headers()["x-frame-options"], "DENY");
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");

        let body = body_string(response).await;
        assert!(body.contains("Proxmox Virtualization"));
        assert!(body.contains("Technologies Covered"));
    }

    #[tokio::test]
    async fn homepage_not_modified_when_etag_matches() {
        let app = router("/");
        let first = get(app.clone(), "/").await;
        let etag = first.headers()[header::ETAG].clone();

        let response = app
            .oneshot(
                Request::get("/")
                    .header(header::IF_NONE_MATCH, etag)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn features_api_lists_cards_in_order() {
        let response = get(router("/"), "/api/features").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        let titles: Vec<&str> = json["cards"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Proxmox Virtualization",
                "MikroTik Configuration",
                "Networking Fundamentals"
            ]
        );
        assert_eq!(json["cards"][0]["imageSize"]["width"], 200);
    }

    #[tokio::test]
    async fn config_api() {
        let response = get(router("/kb/"), "/kb/api/config").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["baseUrl"], "/kb/");
        assert_eq!(json["version"], "0.1.0");
    }

    #[tokio::test]
    async fn routes_mounted_under_base_url() {
        let app = router("/kb/");
        assert_eq!(get(app.clone(), "/kb/").await.status(), StatusCode::OK);
        assert_eq!(get(app, "/").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_path_is_json_not_found() {
        let response = get(router("/"), "/missing/asset.png").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["error"], "Not found");
        assert_eq!(json["path"], "/missing/asset.png");
    }

    #[tokio::test]
    async fn assets_served_from_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("css")).unwrap();
        std::fs::write(dir.path().join("css/site.css"), "body { margin: 0 }").unwrap();

        let response = get(
            router_with_assets("/kb/", AssetDir::new(dir.path())),
            "/kb/css/site.css",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
        assert_eq!(body_string(response).await, "body { margin: 0 }");
    }
}
