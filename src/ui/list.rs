// Shared placeholders for sections whose data is still loading or failed.

use ratatui::{prelude::*, widgets::*};

use super::palette::Palette;

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, palette: &Palette, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.loading));
    frame.render_widget(text, area);
}

/// Render an error message. Upstream detail goes to the log, not the screen.
pub fn render_error(frame: &mut Frame, area: Rect, palette: &Palette, what: &str) {
    let text = Paragraph::new(vec![
        Line::from(format!("❌ Couldn't load {}", what)),
        Line::from(Span::styled("Press r to retry", palette.muted())),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(palette.error));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, palette: &Palette, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(palette.muted());
    frame.render_widget(text, area);
}
