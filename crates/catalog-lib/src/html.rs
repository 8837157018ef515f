//! Static HTML rendering of the catalog, sharing markup and class names with
//! the wasm frontend so the same stylesheet serves both.

use std::fmt::Write;

use crate::{
    catalog::{Card, Summary, NSFW_BADGE, REGION_BADGE},
    surface::RenderSurface,
};

pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Static cards start with the entrance class already set, no script runs to add it.
pub fn card(card: &Card) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="source-card animate-in" style="--index: {index}">
  <div class="source-header">
    <img src="{icon}" alt="{name}" class="source-icon" onerror="this.style.display='none'">
    <h3 class="source-name">{name}</h3>
  </div>
  <div class="source-status">
    <span class="badge {status_class}">{status}</span>
    <span class="badge badge-fr">{region}</span>"#,
        index = card.index,
        icon = escape(&card.icon),
        name = escape(&card.name),
        status_class = card.status_class(),
        status = card.status_badge(),
        region = REGION_BADGE,
    );
    if card.nsfw {
        let _ = write!(html, "\n    <span class=\"badge badge-nsfw\">{NSFW_BADGE}</span>");
    }
    let _ = write!(
        html,
        r#"
  </div>
  <div class="source-version">{version}</div>
  <div class="source-id">{id}</div>
</div>"#,
        version = escape(&card.version_line()),
        id = escape(&card.id),
    );
    html
}

#[derive(Debug, Clone, PartialEq)]
enum Content {
    Empty,
    Message(String),
    Cards(Vec<Card>),
}

/// A [`RenderSurface`] that accumulates a standalone HTML document
#[derive(Debug, Clone)]
pub struct StaticPage {
    title: String,
    description: Option<String>,
    content: Content,
}

impl Default for StaticPage {
    fn default() -> Self {
        Self {
            title: "JohanDevl's French Sources".to_string(),
            description: None,
            content: Content::Empty,
        }
    }
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_count(&self) -> usize {
        match &self.content {
            Content::Cards(cards) => cards.len(),
            _ => 0,
        }
    }

    pub fn into_html(self) -> String {
        let body = match self.content {
            Content::Empty => String::new(),
            Content::Message(message) => {
                format!(r#"<div class="loading">{}</div>"#, escape(&message))
            }
            Content::Cards(cards) => cards.iter().map(card).collect::<Vec<_>>().join("\n"),
        };

        let description = self
            .description
            .map(|d| format!("<p>{}</p>", escape(&d)))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="style.css">
</head>
<body>
<section class="guide-section">
{description}
</section>
<div id="sources-list" class="sources-grid">
{body}
</div>
</body>
</html>
"#,
            title = escape(&self.title),
        )
    }
}

impl RenderSurface for StaticPage {
    fn show_loading(&mut self, message: &str) {
        self.content = Content::Message(message.to_string());
    }

    fn show_failure(&mut self, message: &str) {
        self.content = Content::Message(message.to_string());
    }

    fn render_cards(&mut self, cards: &[Card]) {
        self.content = Content::Cards(cards.to_vec());
    }

    fn update_summary(&mut self, summary: &Summary) {
        self.description = Some(summary.description());
        self.title = summary.title();
    }

    // cards are already visible on a static page
    fn register_for_visibility(&mut self) {}
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        catalog::FAILURE_MESSAGE,
        classification::Classification,
        error::Error,
        models::{Manifest, SourceDescriptor},
        surface::Renderer,
    };

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_card_markup() {
        let mut source = SourceDescriptor::new("fr.fmteam", "FM <Team>");
        source.nsfw = 1;
        let html = card(&Card::new(&source, &Classification::default(), 2));

        assert!(html.contains("class=\"source-card animate-in\""));
        assert!(html.contains("style=\"--index: 2\""));
        assert!(html.contains("FM &lt;Team&gt;"));
        assert!(html.contains("✅ Active"));
        assert!(html.contains("badge-nsfw"));
        assert!(html.contains("Version 1 · Custom"));
        assert!(html.contains("src=\"./icons/fr.fmteam.png\""));
    }

    #[test]
    fn test_card_without_nsfw() {
        let source = SourceDescriptor::new("fr.mangascan", "MangaScan");
        let html = card(&Card::new(&source, &Classification::default(), 0));

        assert!(html.contains("❌ Offline"));
        assert!(!html.contains("badge-nsfw"));
    }

    #[test]
    fn test_static_page() {
        let renderer = Renderer::default();
        let mut page = StaticPage::new();
        let manifest = Manifest::from_json(
            r#"{"sources": [
                {"id": "fr.sushiscan", "name": "B", "version": 1},
                {"id": "fr.astralmanga", "name": "A", "version": 1},
                {"id": "fr.lelmanga", "name": "C", "version": 1}
            ]}"#,
        );

        renderer.render(&mut page, manifest).unwrap();
        assert_eq!(page.card_count(), 3);

        let html = page.into_html();
        assert_eq!(html.matches("class=\"source-card animate-in\"").count(), 3);
        assert!(html.contains("<title>JohanDevl&#39;s French Sources - 3 Sources Available</title>"));
        assert!(html.contains("3 French sources for Aidoku (2 active, 1 offline)"));
        let astral = html.find("fr.astralmanga").unwrap();
        let lel = html.find("fr.lelmanga").unwrap();
        let sushi = html.find("fr.sushiscan").unwrap();
        assert!(astral < lel && lel < sushi);
    }

    #[test]
    fn test_static_page_failure() {
        let renderer = Renderer::default();
        let mut page = StaticPage::new();

        let _ = renderer.render(&mut page, Err(Error::Fetch { status: 404 }));

        assert_eq!(page.card_count(), 0);
        assert!(page.into_html().contains(FAILURE_MESSAGE));
    }
}
