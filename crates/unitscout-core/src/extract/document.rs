//! Read-only view over a parsed listing page.

use lazy_static::lazy_static;
use scraper::{Html, Node, Selector};

lazy_static! {
    static ref TITLE: Selector = Selector::parse("title").unwrap();
    static ref NAV_LABELLED: Selector = Selector::parse("nav[aria-label]").unwrap();
    static ref LIST_ITEM: Selector = Selector::parse("li").unwrap();
    static ref TYPED_SCRIPT: Selector = Selector::parse("script[type]").unwrap();
    static ref LINK: Selector = Selector::parse("a[href]").unwrap();
}

/// MIME type of embedded linked-data blocks.
const LD_JSON: &str = "application/ld+json";

/// Elements whose descendant text never counts as visible.
const HIDDEN_CONTAINERS: [&str; 4] = ["script", "style", "noscript", "template"];

/// A parsed HTML listing page.
pub struct ListingPage {
    html: Html,
}

impl ListingPage {
    /// Parse a full HTML document. Parsing never fails; broken markup is
    /// repaired the way a browser would.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Trimmed text of the first `<title>` element.
    pub fn title(&self) -> Option<String> {
        self.html
            .select(&TITLE)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Text of the last `<li>` in the first `nav[aria-label=breadcrumb]`.
    pub fn breadcrumb_tail(&self) -> Option<String> {
        let nav = self.html.select(&NAV_LABELLED).find(|el| {
            el.value()
                .attr("aria-label")
                .is_some_and(|label| label.trim().eq_ignore_ascii_case("breadcrumb"))
        })?;

        nav.select(&LIST_ITEM)
            .map(|li| li.text().map(str::trim).collect::<String>())
            .last()
            .filter(|t| !t.is_empty())
    }

    /// Raw text of every `<script type="application/ld+json">` block, in
    /// document order.
    pub fn linked_data_blocks(&self) -> Vec<String> {
        self.html
            .select(&TYPED_SCRIPT)
            .filter(|el| {
                el.value()
                    .attr("type")
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case(LD_JSON))
            })
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    /// `href` values of every anchor.
    pub fn link_targets(&self) -> Vec<&str> {
        self.html
            .select(&LINK)
            .filter_map(|el| el.value().attr("href"))
            .collect()
    }

    /// Visible text: trimmed text nodes joined by single spaces, cut to
    /// `limit` characters.
    pub fn visible_text(&self, limit: usize) -> String {
        let mut out = String::new();
        let mut chars = 0usize;

        for node in self.html.tree.root().descendants() {
            let Node::Text(text) = node.value() else {
                continue;
            };

            let hidden = node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|el| HIDDEN_CONTAINERS.contains(&el.name()))
            });
            if hidden {
                continue;
            }

            let piece = text.trim();
            if piece.is_empty() {
                continue;
            }

            if !out.is_empty() {
                out.push(' ');
                chars += 1;
            }
            out.push_str(piece);
            chars += piece.chars().count();

            if chars >= limit {
                break;
            }
        }

        if chars > limit {
            out = out.chars().take(limit).collect();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
        <html><head>
          <title>  Marina Gate 1 | Bayut  </title>
          <style>.price { color: red }</style>
          <script type="application/ld+json">{"@type": "Apartment"}</script>
          <script type="text/javascript">var unit = "Unit 1";</script>
        </head><body>
          <nav aria-label="Breadcrumb"><ol>
            <li><a href="/">Home</a></li>
            <li><a href="/dubai">Dubai</a></li>
            <li> Apartments </li>
          </ol></nav>
          <h1>Spacious   2BR</h1>
          <p>Call <a href="tel:+971500000000">us</a></p>
        </body></html>"#;

    #[test]
    fn test_title_trimmed() {
        let page = ListingPage::parse(PAGE);
        assert_eq!(page.title(), Some("Marina Gate 1 | Bayut".to_string()));
    }

    #[test]
    fn test_breadcrumb_tail() {
        let page = ListingPage::parse(PAGE);
        assert_eq!(page.breadcrumb_tail(), Some("Apartments".to_string()));
    }

    #[test]
    fn test_breadcrumb_missing() {
        let page = ListingPage::parse("<nav aria-label='main'><li>Home</li></nav>");
        assert_eq!(page.breadcrumb_tail(), None);
    }

    #[test]
    fn test_linked_data_blocks() {
        let page = ListingPage::parse(PAGE);
        assert_eq!(page.linked_data_blocks(), vec![r#"{"@type": "Apartment"}"#.to_string()]);
    }

    #[test]
    fn test_visible_text_skips_scripts_and_styles() {
        let page = ListingPage::parse(PAGE);
        let text = page.visible_text(5000);
        assert!(text.starts_with("Marina Gate 1 | Bayut"));
        assert!(text.contains("Home Dubai Apartments Spacious   2BR Call us"));
        assert!(!text.contains("Unit 1"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_visible_text_skips_nested_hidden_markup() {
        let page = ListingPage::parse(
            r#"<body><p>Listing</p>
               <template><div><p>Unit 555</p></div></template>
               <noscript><span>Enable <b>Unit 556</b></span></noscript>
               <p>Flat 3</p></body>"#,
        );
        assert_eq!(page.visible_text(5000), "Listing Flat 3");
    }

    #[test]
    fn test_visible_text_truncated() {
        let body = "word ".repeat(3000);
        let page = ListingPage::parse(&format!("<p>{body}</p>"));
        assert_eq!(page.visible_text(5000).chars().count(), 5000);
        assert_eq!(page.visible_text(4), "word");
    }

    #[test]
    fn test_link_targets() {
        let page = ListingPage::parse(PAGE);
        assert_eq!(page.link_targets(), vec!["/", "/dubai", "tel:+971500000000"]);
    }
}
