//! Homepage rendering and static site generation for the knowledge base.
//!
//! This crate provides:
//! - [`FeatureRenderer`]: maps the fixed [`FEATURES`] list to card descriptors
//! - [`Homepage`] and [`render_homepage`]: the full homepage document
//! - [`SiteLinks`] and [`AssetResolver`]: route and image resolution
//! - [`StaticSiteBuilder`]: writes the site to a directory
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use kb_site::{BuildConfig, StaticSiteBuilder};
//!
//! let report = StaticSiteBuilder::new(BuildConfig::default()).build(Path::new("build"))?;
//! assert_eq!(report.pages.len(), 2);
//! # Ok(())
//! # }
//! ```

mod assets;
mod builder;
mod features;
mod homepage;
mod links;
mod markup;
mod template;
mod theme;

pub use assets::{AssetRef, AssetResolver, PLACEHOLDER_IMAGE, StaticAssets};
pub use builder::{BuildConfig, BuildError, BuildReport, FeatureCatalog, StaticSiteBuilder};
pub use features::{
    CARD_HEADING_LEVEL, FEATURE_IMAGE_SIZE, FEATURES, FeatureCard, FeatureRecord,
    FeatureRenderer, FeatureSection, ImageSize, homepage_features,
};
pub use homepage::{
    ButtonStyle, CONTACT_LINKS, CallToAction, ContactLink, HERO, HeroContent, Homepage,
    PAGE_DESCRIPTION, QUICK_LINKS, QuickLink, STATS, SiteInfo, Stat, TECHNOLOGIES, TOPICS,
    TechBadge, TopicItem,
};
pub use links::SiteLinks;
pub use markup::{escape, render_inline};
pub use template::{RenderContext, RenderedPage, STYLESHEET, render_homepage};
pub use theme::{AnchorIds, Heading, HeadingLevel, slugify};
