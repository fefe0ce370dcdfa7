//! HTML page template for the homepage.
//!
//! Produces a complete document: navbar, hero banner with stats, the optional
//! feature cards, technology badges, topic grid, quick start links, contact
//! links and footer.

use std::fmt::Write;

use crate::assets::AssetResolver;
use crate::homepage::{Homepage, PAGE_DESCRIPTION};
use crate::links::SiteLinks;
use crate::markup::escape;
use crate::theme::{AnchorIds, Heading, HeadingLevel};

/// Stylesheet path, relative to the asset root.
pub const STYLESHEET: &str = "css/custom.css";

/// Collaborators used while rendering.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub links: &'a SiteLinks,
    pub assets: &'a dyn AssetResolver,
}

/// Rendered HTML plus non-fatal problems found along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub warnings: Vec<String>,
    /// Heading anchors emitted so far.
    pub anchors: AnchorIds,
}

/// Render the complete homepage document.
pub fn render_homepage(page: &Homepage, ctx: &RenderContext<'_>) -> RenderedPage {
    let mut out = RenderedPage {
        html: String::with_capacity(16384),
        ..RenderedPage::default()
    };

    render_head(&mut out.html, page, ctx.links);
    out.html.push_str("<body>\n");
    render_navbar(&mut out.html, page, ctx.links);
    render_hero(&mut out.html, page, ctx.links, &mut out.anchors);

    out.html.push_str("<main>\n");
    if let Some(features) = &page.features {
        features.write_html(&mut out, ctx.links, ctx.assets);
    }
    let RenderedPage { html, anchors, .. } = &mut out;
    render_technologies(html, page, anchors);
    render_topics(html, page, anchors);
    render_quick_start(html, page, ctx.links, anchors);
    render_connect(html, page, ctx.links, anchors);
    html.push_str("</main>\n");

    render_footer(html, page);
    html.push_str("</body>\n</html>");
    out
}

fn render_head(html: &mut String, page: &Homepage, links: &SiteLinks) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(&page.page_title()));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape(PAGE_DESCRIPTION)
    );
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape(&links.asset(STYLESHEET))
    );
    html.push_str("</head>\n");
}

fn render_navbar(html: &mut String, page: &Homepage, links: &SiteLinks) {
    html.push_str("<nav class=\"navbar\">\n");
    let _ = writeln!(
        html,
        "<a class=\"navbar__brand\" href=\"{}\">{}</a>",
        escape(links.base_url()),
        escape(&page.site.title)
    );
    for (label, route) in [("Docs", "/docs/intro"), ("Blog", "/blog")] {
        let _ = writeln!(
            html,
            "<a class=\"navbar__link\" href=\"{}\">{label}</a>",
            escape(&links.resolve(route))
        );
    }
    html.push_str("</nav>\n");
}

fn render_hero(html: &mut String, page: &Homepage, links: &SiteLinks, ids: &mut AnchorIds) {
    html.push_str("<header class=\"hero-banner\">\n<div class=\"hero-content\">\n");
    Heading::new(HeadingLevel::H1, &page.hero_title()).write_html(html, Some("hero-title"), ids);
    let _ = writeln!(html, "<p class=\"hero-subtitle\">{}</p>", escape(page.hero.subtitle));
    let _ = writeln!(
        html,
        "<p class=\"hero-description\">{}</p>",
        escape(page.hero.description)
    );

    html.push_str("<div class=\"button-group\">\n");
    for action in page.hero.actions {
        let _ = writeln!(
            html,
            "<a class=\"{}\" href=\"{}\">{}</a>",
            action.style.class(),
            escape(&links.resolve(action.route)),
            escape(action.label)
        );
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"stats-container\">\n");
    for stat in page.stats {
        let _ = writeln!(
            html,
            "<div class=\"stat-card\"><div class=\"stat-number\">{}</div>\
             <div class=\"stat-label\">{}</div></div>",
            escape(stat.value),
            escape(stat.label)
        );
    }
    html.push_str("</div>\n");
    html.push_str("</div>\n</header>\n");
}

fn render_technologies(html: &mut String, page: &Homepage, ids: &mut AnchorIds) {
    html.push_str("<section class=\"technologies-section\">\n<div class=\"container\">\n");
    Heading::new(HeadingLevel::H2, "Technologies Covered").write_html(html, Some("tech-title"), ids);
    html.push_str("<div class=\"tech-grid\">\n");
    for badge in page.technologies {
        let _ = writeln!(
            html,
            "<div class=\"tech-badge\"><span class=\"tech-icon\">{}</span><span>{}</span></div>",
            escape(badge.icon),
            escape(badge.name)
        );
    }
    html.push_str("</div>\n</div>\n</section>\n");
}

fn render_topics(html: &mut String, page: &Homepage, ids: &mut AnchorIds) {
    html.push_str("<section class=\"features-section\">\n<div class=\"container\">\n");
    Heading::new(HeadingLevel::H2, "What You'll Find Here").write_html(html, Some("section-title"), ids);
    html.push_str("<div class=\"feature-grid\">\n");
    for topic in page.topics {
        html.push_str("<div class=\"feature-item\">\n");
        let _ = writeln!(html, "<span class=\"feature-icon\">{}</span>", escape(topic.icon));
        Heading::new(HeadingLevel::H3, topic.title).write_html(html, None, ids);
        let _ = writeln!(html, "<p>{}</p>", escape(topic.description));
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</div>\n</section>\n");
}

fn render_quick_start(
    html: &mut String,
    page: &Homepage,
    links: &SiteLinks,
    ids: &mut AnchorIds,
) {
    html.push_str("<section class=\"quick-start\">\n<div class=\"container\">\n");
    Heading::new(HeadingLevel::H2, "Quick Start").write_html(html, Some("section-title"), ids);
    html.push_str("<div class=\"quick-start-grid\">\n");
    for link in page.quick_links {
        let _ = writeln!(
            html,
            "<a class=\"quick-start-card\" href=\"{}\">",
            escape(&links.resolve(link.route))
        );
        let _ = writeln!(html, "<div class=\"quick-start-icon\">{}</div>", escape(link.icon));
        Heading::new(HeadingLevel::H3, link.title).write_html(html, None, ids);
        let _ = writeln!(html, "<p>{}</p>", escape(link.description));
        html.push_str("</a>\n");
    }
    html.push_str("</div>\n</div>\n</section>\n");
}

fn render_connect(html: &mut String, page: &Homepage, links: &SiteLinks, ids: &mut AnchorIds) {
    html.push_str("<section class=\"connect-section\">\n<div class=\"container\">\n");
    Heading::new(HeadingLevel::H2, "Get in Touch").write_html(html, Some("connect-title"), ids);
    html.push_str(
        "<p class=\"connect-description\">Have questions or feedback? Found a missing guide? \
         I&#x27;d love to hear from you!</p>\n",
    );
    html.push_str("<div class=\"contact-links\">\n");
    for contact in page.contact_links {
        let href = links.resolve(contact.href);
        let target = if contact.new_tab {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<a class=\"contact-link\" href=\"{}\"{target}><span>{}</span><span>{}</span></a>",
            escape(&href),
            escape(contact.icon),
            escape(contact.label)
        );
    }
    html.push_str("</div>\n</div>\n</section>\n");
}

fn render_footer(html: &mut String, page: &Homepage) {
    let _ = writeln!(
        html,
        "<footer class=\"footer\">Copyright © {}. Built with kb.</footer>",
        escape(&page.site.title)
    );
}
