// YAML front matter at the head of a README.
// Parsing never fails outward: anything malformed is treated as "no front matter".

use serde_yaml::{Mapping, Value};

const DELIMITER: &str = "---";

/// Key/value metadata from a front matter block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter(Mapping);

impl FrontMatter {
    pub fn new(mapping: Mapping) -> Self {
        Self(mapping)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get_str("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.get_str("description")
    }

    /// `tags` as a list of strings; non-string entries are skipped.
    pub fn tags(&self) -> Vec<String> {
        match self.get("tags") {
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Only a literal boolean `true` marks a project as featured.
    /// Strings such as `"yes"` or `"true"` do not.
    pub fn is_featured(&self) -> bool {
        matches!(self.get("featured"), Some(Value::Bool(true)))
    }

    /// Non-empty `demo` URL, if set.
    pub fn demo(&self) -> Option<&str> {
        self.get_str("demo").filter(|d| !d.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A README split into its markdown body and front matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadmeData {
    pub body: String,
    pub metadata: FrontMatter,
}

/// Split an optional `---` delimited YAML block from the head of `text`.
///
/// Without a well-formed block the metadata is empty and the body is `text`
/// unchanged.
pub fn parse_front_matter(text: &str) -> ReadmeData {
    let unchanged = || ReadmeData {
        body: text.to_string(),
        metadata: FrontMatter::default(),
    };

    let Some((yaml, body)) = split_block(text) else {
        return unchanged();
    };

    if yaml.trim().is_empty() {
        return ReadmeData {
            body: body.to_string(),
            metadata: FrontMatter::default(),
        };
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(mapping)) => ReadmeData {
            body: body.to_string(),
            metadata: FrontMatter::new(mapping),
        },
        Ok(Value::Null) => ReadmeData {
            body: body.to_string(),
            metadata: FrontMatter::default(),
        },
        Ok(_) => {
            tracing::debug!("Front matter is not a mapping, ignoring");
            unchanged()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Malformed front matter, ignoring");
            unchanged()
        }
    }
}

/// Returns `(yaml, body)` when `text` opens with a delimiter line and a
/// later line closes the block.
fn split_block(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let (first, rest) = match text.find('\n') {
        Some(i) => (&text[..i], &text[i + 1..]),
        None => (text, ""),
    };
    if first.trim_end() != DELIMITER {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_delimiters_returns_text_unchanged() {
        let text = "# Project\n\nJust a readme.";
        let parsed = parse_front_matter(text);
        assert_eq!(parsed.body, text);
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn parses_known_and_extra_keys() {
        let text = "---\ntitle: Folio\ndescription: Terminal portfolio\ntags: [rust, tui]\nfeatured: true\ndemo: https://folio.example\ncolor: teal\n---\n# Folio\n";
        let parsed = parse_front_matter(text);

        assert_eq!(parsed.body, "# Folio\n");
        let meta = &parsed.metadata;
        assert_eq!(meta.title(), Some("Folio"));
        assert_eq!(meta.description(), Some("Terminal portfolio"));
        assert_eq!(meta.tags(), vec!["rust".to_string(), "tui".to_string()]);
        assert!(meta.is_featured());
        assert_eq!(meta.demo(), Some("https://folio.example"));
        assert_eq!(meta.get("color").and_then(Value::as_str), Some("teal"));
        assert_eq!(meta.len(), 6);
    }

    #[test]
    fn featured_requires_boolean_true() {
        for value in ["\"true\"", "yes_please", "1", "false"] {
            let text = format!("---\nfeatured: {value}\n---\nbody");
            assert!(
                !parse_front_matter(&text).metadata.is_featured(),
                "featured: {value} should not count"
            );
        }
        assert!(!parse_front_matter("no front matter").metadata.is_featured());
    }

    #[test]
    fn malformed_yaml_degrades_to_no_metadata() {
        let text = "---\ntitle: [unclosed\n---\nbody";
        let parsed = parse_front_matter(text);
        assert_eq!(parsed.body, text);
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn unterminated_block_is_not_front_matter() {
        let text = "---\ntitle: Folio\n\n# Heading";
        let parsed = parse_front_matter(text);
        assert_eq!(parsed.body, text);
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn scalar_block_is_ignored() {
        let text = "---\njust a string\n---\nbody";
        assert_eq!(parse_front_matter(text).body, text);
    }

    #[test]
    fn empty_block_strips_delimiters() {
        let parsed = parse_front_matter("---\n---\nbody");
        assert_eq!(parsed.body, "body");
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn handles_crlf_line_endings() {
        let parsed = parse_front_matter("---\r\nfeatured: true\r\n---\r\nbody");
        assert!(parsed.metadata.is_featured());
        assert_eq!(parsed.body, "body");
    }

    #[test]
    fn horizontal_rule_later_in_body_is_not_front_matter() {
        let text = "# Title\n\n---\n\nfooter";
        assert_eq!(parse_front_matter(text).body, text);
    }

    #[test]
    fn blank_demo_is_ignored() {
        let parsed = parse_front_matter("---\ndemo: \"  \"\n---\n");
        assert_eq!(parsed.metadata.demo(), None);
    }
}
