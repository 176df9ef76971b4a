//! Standalone HTML page around a card grid.

use shoe_catalog::card::CardView;

use crate::card::render_card_grid;
use crate::escape::html_escape;
use crate::style::card_stylesheet;

/// A full HTML document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Page title.
    pub title: String,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Body content.
    pub body: String,
}

impl Document {
    /// Create a document with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
        .with_meta("viewport", "width=device-width, initial-scale=1")
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Set the body to a grid of cards.
    pub fn with_cards(mut self, cards: &[CardView]) -> Self {
        self.body = render_card_grid(cards);
        self
    }

    /// Render to HTML.
    pub fn render(&self) -> String {
        let meta: String = self
            .meta
            .iter()
            .map(|(name, content)| {
                format!(
                    "<meta name=\"{}\" content=\"{}\">\n",
                    html_escape(name),
                    html_escape(content)
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
{meta}<title>{title}</title>
<style>{style}</style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
            meta = meta,
            title = html_escape(&self.title),
            style = card_stylesheet(),
            body = self.body,
        )
    }
}

/// Render a standalone page listing `cards`.
pub fn render_document(title: &str, cards: &[CardView]) -> String {
    Document::new(title).with_cards(cards).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let html = render_document("Shoes & More", &[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Shoes &amp; More</title>"));
        assert!(html.contains(r#"name="viewport""#));
        assert!(html.contains(r#"data-count="0""#));
        assert!(html.contains("--color-primary"));
    }
}
