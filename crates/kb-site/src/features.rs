//! Feature cards.
//!
//! [`FEATURES`] is the fixed, ordered list shown on the homepage.
//! [`FeatureRenderer`] maps records to [`FeatureCard`] descriptors one-to-one,
//! preserving order; [`FeatureSection`] emits the grid markup.

use std::fmt::Write;

use serde::Serialize;

use crate::assets::{AssetRef, AssetResolver, resolve_or_placeholder};
use crate::links::SiteLinks;
use crate::markup::{escape, render_inline};
use crate::template::RenderedPage;
use crate::theme::{Heading, HeadingLevel};

/// Display size of feature images, in CSS pixels.
pub const FEATURE_IMAGE_SIZE: ImageSize = ImageSize {
    width: 200,
    height: 200,
};

/// Heading level of card titles.
pub const CARD_HEADING_LEVEL: HeadingLevel = HeadingLevel::H3;

const MOUNTAIN: &str = "img/undraw_docusaurus_mountain.svg";

/// Homepage features, in display order.
pub static FEATURES: [FeatureRecord; 3] = [
    FeatureRecord::new(
        "Proxmox Virtualization",
        MOUNTAIN,
        "Learn how to effectively manage virtual machines and containers using Proxmox.",
    ),
    FeatureRecord::new(
        "MikroTik Configuration",
        MOUNTAIN,
        "Master MikroTik router configurations for optimal network performance.",
    ),
    FeatureRecord::new(
        "Networking Fundamentals",
        MOUNTAIN,
        "Understand the core concepts of networking, including protocols and topologies.",
    ),
];

/// Image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Static display metadata for one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRecord {
    title: &'static str,
    image: AssetRef,
    description: &'static str,
}

impl FeatureRecord {
    /// Create a record. Empty fields fail const evaluation for statics.
    ///
    /// # Panics
    ///
    /// Panics if any field is empty.
    pub const fn new(
        title: &'static str,
        image: &'static str,
        description: &'static str,
    ) -> Self {
        assert!(!title.is_empty(), "feature title cannot be empty");
        assert!(!image.is_empty(), "feature image cannot be empty");
        assert!(!description.is_empty(), "feature description cannot be empty");
        Self {
            title,
            image: AssetRef::new(image),
            description,
        }
    }

    pub const fn title(&self) -> &'static str {
        self.title
    }

    pub const fn image(&self) -> &AssetRef {
        &self.image
    }

    /// Inline Markdown description.
    pub const fn description(&self) -> &'static str {
        self.description
    }
}

/// Visual card produced for one [`FeatureRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCard<'a> {
    pub title: &'a str,
    pub image: &'a AssetRef,
    pub image_size: ImageSize,
    pub description: &'a str,
}

impl<'a> FeatureCard<'a> {
    /// Card title as a themed heading.
    pub const fn heading(&self) -> Heading<'a> {
        Heading::new(CARD_HEADING_LEVEL, self.title)
    }
}

/// Maps feature records to card descriptors.
pub struct FeatureRenderer;

impl FeatureRenderer {
    /// Produce one card per record, in input order.
    ///
    /// Pure: no deduplication, no reordering, text is borrowed unchanged.
    pub fn render(records: &[FeatureRecord]) -> Vec<FeatureCard<'_>> {
        records.iter().map(Self::card).collect()
    }

    fn card(record: &FeatureRecord) -> FeatureCard<'_> {
        FeatureCard {
            title: record.title,
            image: &record.image,
            image_size: FEATURE_IMAGE_SIZE,
            description: record.description,
        }
    }
}

/// Render the homepage feature list.
pub fn homepage_features() -> FeatureSection<'static> {
    FeatureSection::new(FeatureRenderer::render(&FEATURES))
}

/// Card grid wrapped in its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureSection<'a> {
    cards: Vec<FeatureCard<'a>>,
}

impl<'a> FeatureSection<'a> {
    pub fn new(cards: Vec<FeatureCard<'a>>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[FeatureCard<'a>] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append the section markup to `page`.
    ///
    /// Unresolvable images are replaced by a placeholder and reported in
    /// `page.warnings`.
    pub fn write_html(&self, page: &mut RenderedPage, links: &SiteLinks, assets: &dyn AssetResolver) {
        page.html.push_str("<section class=\"features\">\n");
        page.html.push_str("<div class=\"container\">\n<div class=\"row\">\n");
        for card in &self.cards {
            write_card(page, card, links, assets);
        }
        page.html.push_str("</div>\n</div>\n</section>\n");
    }
}

fn write_card(
    page: &mut RenderedPage,
    card: &FeatureCard<'_>,
    links: &SiteLinks,
    assets: &dyn AssetResolver,
) {
    let src = resolve_or_placeholder(assets, card.image, &mut page.warnings);
    let RenderedPage { html, anchors, .. } = page;

    html.push_str("<div class=\"col col--4\">\n");
    html.push_str("<div class=\"text--center\">\n");
    let _ = writeln!(
        html,
        "<img class=\"feature-svg\" role=\"img\" src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\">",
        escape(&src),
        escape(card.title),
        card.image_size.width,
        card.image_size.height,
    );
    html.push_str("</div>\n");
    html.push_str("<div class=\"text--center padding-horiz--md\">\n");
    card.heading().write_html(html, None, anchors);
    let _ = writeln!(html, "<p>{}</p>", render_inline(card.description, links));
    html.push_str("</div>\n</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::PLACEHOLDER_IMAGE;
    use crate::assets::testing::{AllAssets, NoAssets};
    use pretty_assertions::assert_eq;

    fn record(title: &'static str) -> FeatureRecord {
        FeatureRecord::new(title, "img/card.svg", "Some *rich* text.")
    }

    fn titles<'a>(cards: &[FeatureCard<'a>]) -> Vec<&'a str> {
        cards.iter().map(|c| c.title).collect()
    }

    fn render_section(section: &FeatureSection<'_>, assets: &dyn AssetResolver) -> RenderedPage {
        let mut page = RenderedPage::default();
        section.write_html(&mut page, &SiteLinks::default(), assets);
        page
    }

    #[test]
    fn render_preserves_order() {
        let records = [record("A"), record("B")];
        assert_eq!(titles(&FeatureRenderer::render(&records)), vec!["A", "B"]);
    }

    #[test]
    fn render_empty_list() {
        assert!(FeatureRenderer::render(&[]).is_empty());
    }

    #[test]
    fn render_produces_one_card_per_record() {
        for n in 0..8 {
            let records: Vec<FeatureRecord> = (0..n).map(|_| record("X")).collect();
            assert_eq!(FeatureRenderer::render(&records).len(), n);
        }
    }

    #[test]
    fn render_is_idempotent() {
        let first = FeatureRenderer::render(&FEATURES);
        let second = FeatureRenderer::render(&FEATURES);
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_titles_are_kept() {
        let records = [record("Same"), record("Same")];
        let cards = FeatureRenderer::render(&records);
        assert_eq!(titles(&cards), vec!["Same", "Same"]);
    }

    #[test]
    fn duplicate_titles_get_distinct_anchors() {
        let records = [record("Same"), record("Same")];
        let section = FeatureSection::new(FeatureRenderer::render(&records));
        let page = render_section(&section, &AllAssets);

        assert_eq!(page.html.matches("id=\"same\"").count(), 1);
        assert_eq!(page.html.matches("id=\"same-1\"").count(), 1);
        assert_eq!(page.html.matches(">Same</h3>").count(), 2);
    }

    #[test]
    fn card_fields_match_record() {
        let records = [FeatureRecord::new("Title", "img/x.svg", "Body with `code`.")];
        let cards = FeatureRenderer::render(&records);
        assert_eq!(
            cards[0],
            FeatureCard {
                title: "Title",
                image: &AssetRef::new("img/x.svg"),
                image_size: FEATURE_IMAGE_SIZE,
                description: "Body with `code`.",
            }
        );
        assert_eq!(cards[0].heading().level, HeadingLevel::H3);
    }

    #[test]
    fn homepage_features_matches_static_list() {
        let section = homepage_features();
        assert_eq!(
            titles(section.cards()),
            vec![
                "Proxmox Virtualization",
                "MikroTik Configuration",
                "Networking Fundamentals"
            ]
        );
        for (card, record) in section.cards().iter().zip(&FEATURES) {
            assert_eq!(card.description, record.description());
            assert_eq!(card.image, record.image());
        }
    }

    #[test]
    fn html_has_one_column_per_card_in_order() {
        let records = [record("First"), record("Second"), record("Third")];
        let section = FeatureSection::new(FeatureRenderer::render(&records));
        let page = render_section(&section, &AllAssets);

        assert_eq!(page.html.matches("col col--4").count(), 3);
        let first = page.html.find(">First</h3>").unwrap();
        let second = page.html.find(">Second</h3>").unwrap();
        let third = page.html.find(">Third</h3>").unwrap();
        assert!(first < second && second < third);
        assert!(page.warnings.is_empty());
    }

    #[test]
    fn html_card_markup() {
        let records = [FeatureRecord::new("Proxmox", "img/p.svg", "Run *VMs*.")];
        let section = FeatureSection::new(FeatureRenderer::render(&records));
        let page = render_section(&section, &AllAssets);

        assert!(page.html.starts_with("<section class=\"features\">"));
        assert!(page.html.contains(
            "<img class=\"feature-svg\" role=\"img\" src=\"/img/p.svg\" alt=\"Proxmox\" width=\"200\" height=\"200\">"
        ));
        assert!(page.html.contains("<h3 id=\"proxmox\">Proxmox</h3>"));
        assert!(page.html.contains("<p>Run <em>VMs</em>.</p>"));
    }

    #[test]
    fn html_escapes_titles() {
        let records = [FeatureRecord::new("<VPN> & Tunnels", "img/v.svg", "Text")];
        let section = FeatureSection::new(FeatureRenderer::render(&records));
        let page = render_section(&section, &AllAssets);

        assert!(page.html.contains("&lt;VPN&gt; &amp; Tunnels"));
        assert!(!page.html.contains("<VPN>"));
    }

    #[test]
    fn html_empty_section_has_wrapper_only() {
        let page = render_section(&FeatureSection::new(Vec::new()), &AllAssets);
        assert!(page.html.contains("<div class=\"row\">"));
        assert!(!page.html.contains("col--4"));
    }

    #[test]
    fn missing_images_use_placeholder() {
        let page = render_section(&homepage_features(), &NoAssets);
        assert_eq!(page.html.matches(PLACEHOLDER_IMAGE).count(), 3);
        assert_eq!(page.warnings.len(), 3);
    }

    #[test]
    fn cards_serialize_camel_case() {
        let records = [FeatureRecord::new("A", "img/a.svg", "B")];
        let json = serde_json::to_value(FeatureRenderer::render(&records)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "title": "A",
                "image": "img/a.svg",
                "imageSize": { "width": 200, "height": 200 },
                "description": "B"
            }])
        );
    }
}
