//! Inline rich text and HTML escaping.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::links::SiteLinks;

/// Render a short inline Markdown fragment to HTML.
///
/// Paragraph wrappers are dropped since callers place the fragment inside
/// their own block element. Raw HTML in the source is escaped, never passed
/// through. Link targets are resolved with `links`.
pub fn render_inline(markdown: &str, links: &SiteLinks) -> String {
    let mut html = String::with_capacity(markdown.len() + 16);
    let mut paragraphs = 0usize;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Paragraph) => {
                if paragraphs > 0 {
                    html.push_str("<br>");
                }
                paragraphs += 1;
            }
            Event::Start(Tag::Emphasis) => html.push_str("<em>"),
            Event::End(TagEnd::Emphasis) => html.push_str("</em>"),
            Event::Start(Tag::Strong) => html.push_str("<strong>"),
            Event::End(TagEnd::Strong) => html.push_str("</strong>"),
            Event::Start(Tag::Link { dest_url, .. }) => {
                html.push_str("<a href=\"");
                html.push_str(&escape(&links.resolve(&dest_url)));
                html.push_str("\">");
            }
            Event::End(TagEnd::Link) => html.push_str("</a>"),
            Event::Code(code) => {
                html.push_str("<code>");
                html.push_str(&escape(&code));
                html.push_str("</code>");
            }
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                html.push_str(&escape(&text));
            }
            Event::SoftBreak => html.push(' '),
            Event::HardBreak => html.push_str("<br>"),
            _ => {}
        }
    }

    html
}

/// Escape HTML special characters.
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
