//! Image reference resolution.
//!
//! Feature records carry an opaque [`AssetRef`]; turning it into a URL is the
//! job of an [`AssetResolver`] supplied by whoever renders the page.

use kb_assets::AssetDir;
use serde::Serialize;

use crate::links::SiteLinks;

/// Inline image substituted when an asset cannot be resolved.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns=%27http://www.w3.org/2000/svg%27 \
     viewBox=%270 0 200 200%27%3E%3Crect width=%27200%27 height=%27200%27 fill=%27%23e2e8f0%27/%3E%3C/svg%3E";

/// Reference to a static asset, relative to the asset root (e.g. `img/logo.svg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetRef(&'static str);

impl AssetRef {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub const fn path(&self) -> &'static str {
        self.0
    }
}

/// Maps asset references to loadable URLs.
pub trait AssetResolver: Send + Sync {
    /// Return the URL for `asset`, or `None` if it does not exist.
    fn resolve(&self, asset: &AssetRef) -> Option<String>;
}

/// Resolver backed by the files in an [`AssetDir`].
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    links: SiteLinks,
    dir: AssetDir,
}

impl StaticAssets {
    pub fn new(links: SiteLinks, dir: AssetDir) -> Self {
        Self { links, dir }
    }
}

impl AssetResolver for StaticAssets {
    fn resolve(&self, asset: &AssetRef) -> Option<String> {
        self.dir
            .exists(asset.path())
            .then(|| self.links.asset(asset.path()))
    }
}

/// Resolve `asset`, falling back to [`PLACEHOLDER_IMAGE`] and recording a warning.
pub(crate) fn resolve_or_placeholder(
    assets: &dyn AssetResolver,
    asset: &AssetRef,
    warnings: &mut Vec<String>,
) -> String {
    if let Some(url) = assets.resolve(asset) {
        return url;
    }
    tracing::warn!(asset = asset.path(), "Asset not found, using placeholder");
    warnings.push(format!("Asset not found: {}", asset.path()));
    PLACEHOLDER_IMAGE.to_owned()
}

#[cfg(test)]
pub(crate) mod testing {
    //! Resolvers for unit tests that don't touch the filesystem.

    use super::{AssetRef, AssetResolver};

    /// Resolves every asset under `/`.
    pub(crate) struct AllAssets;

    impl AssetResolver for AllAssets {
        fn resolve(&self, asset: &AssetRef) -> Option<String> {
            Some(format!("/{}", asset.path()))
        }
    }

    /// Resolves nothing.
    pub(crate) struct NoAssets;

    impl AssetResolver for NoAssets {
        fn resolve(&self, _asset: &AssetRef) -> Option<String> {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{AllAssets, NoAssets};
    use super::*;

    #[test]
    fn resolved_asset_has_no_warning() {
        let mut warnings = Vec::new();
        let url = resolve_or_placeholder(&AllAssets, &AssetRef::new("img/a.svg"), &mut warnings);
        assert_eq!(url, "/img/a.svg");
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_asset_uses_placeholder() {
        let mut warnings = Vec::new();
        let url = resolve_or_placeholder(&NoAssets, &AssetRef::new("img/a.svg"), &mut warnings);
        assert_eq!(url, PLACEHOLDER_IMAGE);
        assert_eq!(warnings, vec!["Asset not found: img/a.svg".to_owned()]);
    }

    #[test]
    fn static_assets_reject_missing_files() {
        let assets = StaticAssets::default();
        assert!(assets.resolve(&AssetRef::new("img/does-not-exist.svg")).is_none());
    }

    #[test]
    fn static_assets_resolve_against_their_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("img")).unwrap();
        std::fs::write(dir.path().join("img/a.svg"), "<svg/>").unwrap();

        let assets = StaticAssets::new(SiteLinks::new("/kb/", false), AssetDir::new(dir.path()));

        assert_eq!(
            assets.resolve(&AssetRef::new("img/a.svg")).as_deref(),
            Some("/kb/img/a.svg")
        );
    }

    #[test]
    fn asset_ref_serializes_as_path() {
        let json = serde_json::to_string(&AssetRef::new("img/a.svg")).unwrap();
        assert_eq!(json, "\"img/a.svg\"");
    }
}
