// Language swatch colors and byte-count breakdowns.

use crate::github::Languages;

/// Color for a language GitHub reports but we have no entry for.
pub const UNKNOWN_LANGUAGE_COLOR: &str = "#808080";
/// Color for a repository with no detected language.
pub const NO_LANGUAGE_COLOR: &str = "#6e7681";

/// Hex color for a repository's primary language.
pub fn language_color(language: Option<&str>) -> &'static str {
    let Some(language) = language else {
        return NO_LANGUAGE_COLOR;
    };

    match language {
        "JavaScript" => "#f7df1e",
        "TypeScript" => "#3178c6",
        "Python" => "#3776ab",
        "Java" => "#007396",
        "C++" => "#00599c",
        "C" => "#555555",
        "C#" => "#239120",
        "Ruby" => "#cc342d",
        "Go" => "#00add8",
        "Rust" => "#dea584",
        "PHP" => "#777bb4",
        "Swift" => "#ffac45",
        "Kotlin" => "#7f52ff",
        "Dart" => "#0175c2",
        "HTML" => "#e34c26",
        "CSS" => "#1572b6",
        "Vue" => "#42b883",
        "React" => "#61dafb",
        "Svelte" => "#ff3e00",
        _ => UNKNOWN_LANGUAGE_COLOR,
    }
}

/// Parse `#rrggbb` into its components.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Share of each language in a repository, largest first.
pub fn language_breakdown(languages: &Languages) -> Vec<(String, f64)> {
    let total: u64 = languages.values().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut shares: Vec<(String, f64)> = languages
        .iter()
        .map(|(name, bytes)| (name.clone(), *bytes as f64 * 100.0 / total as f64))
        .collect();
    shares.sort_by(|a, b| b.1.total_cmp(&a.1));
    shares
}
