//! Application state.
//!
//! Shared, immutable state for all request handlers. The homepage is rendered
//! once when the state is built.

use kb_assets::AssetDir;
use kb_site::{
    AssetResolver, FeatureSection, Homepage, RenderContext, SiteInfo, SiteLinks, homepage_features,
    render_homepage,
};

use crate::handlers::compute_etag;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site identity.
    pub(crate) site: SiteInfo,
    /// Route resolution (base URL).
    pub(crate) links: SiteLinks,
    /// Images and stylesheets served below the base URL.
    pub(crate) assets: AssetDir,
    /// Rendered homepage document.
    pub(crate) homepage_html: String,
    /// `ETag` of the rendered homepage.
    pub(crate) homepage_etag: String,
    /// Feature cards for the JSON API.
    pub(crate) features: FeatureSection<'static>,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}

impl AppState {
    /// Render the homepage and capture everything handlers need.
    pub(crate) fn new(
        site: SiteInfo,
        links: SiteLinks,
        assets: AssetDir,
        resolver: &dyn AssetResolver,
        version: String,
        verbose: bool,
    ) -> Self {
        let homepage = Homepage::new(site.clone());
        let rendered = render_homepage(
            &homepage,
            &RenderContext {
                links: &links,
                assets: resolver,
            },
        );

        if verbose {
            for warning in &rendered.warnings {
                tracing::warn!(warning = %warning, "Homepage render warning");
            }
        }

        let homepage_etag = compute_etag(&version, &rendered.html);
        Self {
            site,
            links,
            assets,
            homepage_html: rendered.html,
            homepage_etag,
            features: homepage_features(),
            version,
        }
    }
}
