// Markdown extraction helpers.
// Pure functions over README text; every list preserves document order.

use lazy_static::lazy_static;
use regex::Regex;

use super::front_matter::FrontMatter;

lazy_static! {
    static ref IMAGE_RE: Regex = Regex::new(r"!\[.*?\]\((.*?)\)").unwrap();
    static ref LINK_RE: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    /// Tried in order; the first pattern that matches anywhere wins.
    static ref DEMO_PATTERNS: [Regex; 4] = [
        Regex::new(r"(?i)\[.*?demo.*?\]\((https?://[^)]+)\)").unwrap(),
        Regex::new(r"(?i)\[.*?live.*?\]\((https?://[^)]+)\)").unwrap(),
        Regex::new(r"(?i)demo:?\s*(https?://\S+)").unwrap(),
        Regex::new(r"(?i)live:?\s*(https?://\S+)").unwrap(),
    ];
}

/// A markdown link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

/// Resolve a project's live demo URL.
///
/// Front matter `demo` always wins; otherwise the body is scanned for demo
/// and live links.
pub fn extract_demo_url(body: &str, metadata: &FrontMatter) -> Option<String> {
    if let Some(demo) = metadata.demo() {
        return Some(demo.to_string());
    }

    DEMO_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// URLs of every `![alt](url)` image.
pub fn extract_images(markdown: &str) -> Vec<String> {
    IMAGE_RE
        .captures_iter(markdown)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every `[text](url)` link. Image syntax also matches, as the inner
/// `[alt](url)`.
pub fn extract_links(markdown: &str) -> Vec<Link> {
    LINK_RE
        .captures_iter(markdown)
        .map(|caps| Link {
            text: caps[1].to_string(),
            url: caps[2].to_string(),
        })
        .collect()
}

/// First blank-line separated block that is neither a heading nor an image.
pub fn first_paragraph(markdown: &str) -> String {
    let normalized = markdown.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .find(|para| !para.is_empty() && !para.starts_with('#') && !para.starts_with('!'))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readme::parse_front_matter;

    fn no_meta() -> FrontMatter {
        FrontMatter::default()
    }

    #[test]
    fn demo_link_label() {
        assert_eq!(
            extract_demo_url("Check the [demo](https://x.example/app)", &no_meta()),
            Some("https://x.example/app".to_string())
        );
    }

    #[test]
    fn live_prefix_line() {
        assert_eq!(
            extract_demo_url("live: https://y.example", &no_meta()),
            Some("https://y.example".to_string())
        );
    }

    #[test]
    fn nothing_to_find() {
        assert_eq!(extract_demo_url("no links here", &no_meta()), None);
    }

    #[test]
    fn front_matter_demo_always_wins() {
        let parsed = parse_front_matter(
            "---\ndemo: https://front.example\n---\nSee the [demo](https://body.example)",
        );
        assert_eq!(
            extract_demo_url(&parsed.body, &parsed.metadata),
            Some("https://front.example".to_string())
        );
    }

    #[test]
    fn demo_label_beats_earlier_live_label() {
        let body = "[Live site](https://live.example)\n\n[Demo video](https://demo.example)";
        assert_eq!(
            extract_demo_url(body, &no_meta()),
            Some("https://demo.example".to_string())
        );
    }

    #[test]
    fn label_match_is_case_insensitive() {
        assert_eq!(
            extract_demo_url("[LIVE DEMO](https://a.example)", &no_meta()),
            Some("https://a.example".to_string())
        );
    }

    #[test]
    fn demo_without_colon_and_non_http_link_is_skipped() {
        assert_eq!(
            extract_demo_url("[demo](./docs/demo.gif)\nDemo https://b.example/x", &no_meta()),
            Some("https://b.example/x".to_string())
        );
    }

    #[test]
    fn images_in_order() {
        let md = "![logo](logo.png)\ntext ![x]() ![](empty) ![shot](https://img.example/s.png)";
        assert_eq!(
            extract_images(md),
            vec![
                "logo.png".to_string(),
                "empty".to_string(),
                "https://img.example/s.png".to_string()
            ]
        );
    }

    #[test]
    fn images_skip_empty_targets() {
        assert!(extract_images("![nothing]()").is_empty());
    }

    #[test]
    fn links_in_order() {
        let links = extract_links("[Docs](https://docs.example) and [Repo](https://git.example)");
        assert_eq!(
            links,
            vec![
                Link {
                    text: "Docs".to_string(),
                    url: "https://docs.example".to_string()
                },
                Link {
                    text: "Repo".to_string(),
                    url: "https://git.example".to_string()
                },
            ]
        );
    }

    #[test]
    fn first_paragraph_skips_headings_and_images() {
        let md = "# Title\n\n![badge](b.svg)\n\n  Folio renders a portfolio.  \n\nMore text.";
        assert_eq!(first_paragraph(md), "Folio renders a portfolio.");
    }

    #[test]
    fn first_paragraph_empty_when_none() {
        assert_eq!(first_paragraph("# Only a heading"), "");
        assert_eq!(first_paragraph(""), "");
    }
}
