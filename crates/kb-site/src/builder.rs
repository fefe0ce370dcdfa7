//! Static site builder.
//!
//! Writes the rendered homepage, the feature card catalog and every bundled
//! asset into an output directory that any static file host can serve.

use std::fs;
use std::path::{Path, PathBuf};

use kb_assets::AssetDir;
use serde::Serialize;

use crate::assets::{AssetResolver, StaticAssets};
use crate::features::{FeatureCard, homepage_features};
use crate::homepage::{Homepage, SiteInfo};
use crate::links::SiteLinks;
use crate::template::{RenderContext, render_homepage};

/// Configuration for static site building.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Site identity.
    pub site: SiteInfo,
    /// Route resolution for generated links.
    pub links: SiteLinks,
    /// Where images and stylesheets are read from.
    pub asset_dir: AssetDir,
    /// Fail instead of substituting placeholders for missing images.
    pub strict_assets: bool,
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset not found: {0}")]
    MissingAsset(String),
}

/// Summary of a finished build.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Files written relative to the output directory, in write order.
    pub pages: Vec<PathBuf>,
    /// Number of static assets copied.
    pub assets: usize,
    /// Non-fatal problems (e.g. placeholder images).
    pub warnings: Vec<String>,
}

/// JSON body listing the homepage feature cards.
#[derive(Debug, Serialize)]
pub struct FeatureCatalog<'a> {
    pub cards: &'a [FeatureCard<'a>],
}

/// Builds the static site.
pub struct StaticSiteBuilder {
    config: BuildConfig,
    assets: Box<dyn AssetResolver>,
}

impl StaticSiteBuilder {
    /// Create a builder resolving images against the bundled assets.
    pub fn new(config: BuildConfig) -> Self {
        let assets = Box::new(StaticAssets::new(
            config.links.clone(),
            config.asset_dir.clone(),
        ));
        Self { config, assets }
    }

    /// Replace the asset resolver.
    #[must_use]
    pub fn with_assets(mut self, assets: Box<dyn AssetResolver>) -> Self {
        self.assets = assets;
        self
    }

    /// Build the site into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::MissingAsset` in strict mode when a feature image
    /// does not resolve, and `BuildError::Io`/`Json` when writing fails.
    pub fn build(&self, output_dir: &Path) -> Result<BuildReport, BuildError> {
        if self.config.strict_assets {
            self.check_assets()?;
        }

        fs::create_dir_all(output_dir)?;
        let mut report = BuildReport::default();

        let homepage = Homepage::new(self.config.site.clone());
        let ctx = RenderContext {
            links: &self.config.links,
            assets: self.assets.as_ref(),
        };
        let rendered = render_homepage(&homepage, &ctx);
        write_file(output_dir, Path::new("index.html"), rendered.html.as_bytes())?;
        report.pages.push(PathBuf::from("index.html"));
        report.warnings.extend(rendered.warnings);

        let section = homepage_features();
        let catalog = FeatureCatalog {
            cards: section.cards(),
        };
        let json = serde_json::to_string_pretty(&catalog)?;
        let catalog_path = Path::new("api").join("features.json");
        write_file(output_dir, &catalog_path, json.as_bytes())?;
        report.pages.push(catalog_path);

        report.assets = copy_assets(&self.config.asset_dir, output_dir)?;

        for warning in &report.warnings {
            tracing::warn!(warning = %warning, "Build warning");
        }
        tracing::info!(
            output = %output_dir.display(),
            pages = report.pages.len(),
            assets = report.assets,
            "Static site built"
        );

        Ok(report)
    }

    /// Fail on the first feature image that does not resolve.
    ///
    /// Images are only checked when the page shows the feature cards.
    fn check_assets(&self) -> Result<(), BuildError> {
        if !self.config.site.feature_cards {
            return Ok(());
        }
        for card in homepage_features().cards() {
            if self.assets.resolve(card.image).is_none() {
                return Err(BuildError::MissingAsset(card.image.path().to_owned()));
            }
        }
        Ok(())
    }
}

/// Write `contents` to `output_dir/relative`, creating parent directories.
fn write_file(output_dir: &Path, relative: &Path, contents: &[u8]) -> Result<(), BuildError> {
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, contents)?;
    tracing::debug!(path = %path.display(), "Wrote file");
    Ok(())
}

/// Copy every asset in `assets` into the output directory.
fn copy_assets(assets: &AssetDir, output_dir: &Path) -> Result<usize, BuildError> {
    let mut copied = 0;
    for path in assets.paths() {
        let Some(content) = assets.get(&path) else {
            continue;
        };
        write_file(output_dir, Path::new(&path), &content)?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::testing::{AllAssets, NoAssets};
    use pretty_assertions::assert_eq;

    fn builder(config: BuildConfig, assets: Box<dyn AssetResolver>) -> StaticSiteBuilder {
        StaticSiteBuilder::new(config).with_assets(assets)
    }

    #[test]
    fn build_writes_homepage_and_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let report = builder(BuildConfig::default(), Box::new(AllAssets))
            .build(dir.path())
            .unwrap();

        assert_eq!(
            report.pages,
            vec![PathBuf::from("index.html"), Path::new("api").join("features.json")]
        );
        assert!(report.warnings.is_empty());

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("<section class=\"features\">"));
        assert!(index.contains("Proxmox Virtualization"));

        let json = fs::read_to_string(dir.path().join("api/features.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let titles: Vec<&str> = value["cards"]
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
    }

    #[test]
    fn build_creates_nested_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("deep/site");
        builder(BuildConfig::default(), Box::new(AllAssets))
            .build(&output)
            .unwrap();
        assert!(output.join("index.html").is_file());
    }

    #[test]
    fn lenient_build_reports_missing_images() {
        let dir = tempfile::tempdir().unwrap();
        let report = builder(BuildConfig::default(), Box::new(NoAssets))
            .build(dir.path())
            .unwrap();
        assert_eq!(report.warnings.len(), 3);
        assert!(dir.path().join("index.html").is_file());
    }

    #[test]
    fn strict_build_fails_on_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig {
            strict_assets: true,
            ..BuildConfig::default()
        };
        let err = builder(config, Box::new(NoAssets))
            .build(dir.path())
            .unwrap_err();

        assert!(matches!(err, BuildError::MissingAsset(ref path) if path == "img/undraw_docusaurus_mountain.svg"));
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn strict_build_skips_images_when_cards_hidden() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig {
            site: SiteInfo {
                feature_cards: false,
                ..SiteInfo::default()
            },
            strict_assets: true,
            ..BuildConfig::default()
        };
        let report = builder(config, Box::new(NoAssets))
            .build(dir.path())
            .unwrap();

        assert!(report.warnings.is_empty());
        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(!index.contains("<section class=\"features\">"));
    }

    #[test]
    fn strict_build_reads_assets_from_configured_root() {
        let project = tempfile::tempdir().unwrap();
        let static_dir = project.path().join("static");
        fs::create_dir_all(static_dir.join("img")).unwrap();
        fs::write(
            static_dir.join("img/undraw_docusaurus_mountain.svg"),
            "<svg xmlns=\"http://www.w3.org/2000/svg\"/>",
        )
        .unwrap();

        let output = project.path().join("build");
        let config = BuildConfig {
            asset_dir: AssetDir::new(&static_dir),
            strict_assets: true,
            ..BuildConfig::default()
        };
        let report = StaticSiteBuilder::new(config).build(&output).unwrap();

        assert!(report.warnings.is_empty());
        assert!(report.assets >= 1);
        assert!(output.join("img/undraw_docusaurus_mountain.svg").is_file());
        let index = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(index.contains("src=\"/img/undraw_docusaurus_mountain.svg\""));
    }

    #[test]
    fn strict_build_uses_workspace_static_dir_from_any_cwd() {
        let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../static");
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig {
            asset_dir: AssetDir::new(static_dir),
            strict_assets: true,
            ..BuildConfig::default()
        };

        let report = StaticSiteBuilder::new(config).build(dir.path()).unwrap();

        assert!(report.warnings.is_empty());
        assert!(dir.path().join("css/custom.css").is_file());
    }

    #[test]
    fn build_respects_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig {
            links: SiteLinks::new("/kb/", false),
            ..BuildConfig::default()
        };
        builder(config, Box::new(AllAssets)).build(dir.path()).unwrap();

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("href=\"/kb/docs/intro\""));
    }
}
