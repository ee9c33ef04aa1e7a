// Colors for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::portfolio::language::{NO_LANGUAGE_COLOR, language_color, parse_hex};
use crate::state::Theme;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub border: Color,
    pub error: Color,
    pub loading: Color,
    pub featured: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::Yellow,
                selection_bg: Color::DarkGray,
                border: Color::DarkGray,
                error: Color::Red,
                loading: Color::Yellow,
                featured: Color::Yellow,
            },
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                accent: Color::Blue,
                highlight: Color::Magenta,
                selection_bg: Color::Rgb(0xdd, 0xe4, 0xee),
                border: Color::Gray,
                error: Color::Red,
                loading: Color::Rgb(0xb5, 0x89, 0x00),
                featured: Color::Rgb(0xb5, 0x89, 0x00),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }
}

/// Swatch color for a language.
pub fn language_swatch(language: Option<&str>) -> Color {
    let (r, g, b) = parse_hex(language_color(language))
        .or_else(|| parse_hex(NO_LANGUAGE_COLOR))
        .unwrap_or((0x80, 0x80, 0x80));
    Color::Rgb(r, g, b)
}
