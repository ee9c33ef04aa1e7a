// Section bar rendering.
// Highlights the active section and shows a count badge on Projects once loaded.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Section};

use super::palette::Palette;

/// Draw the section bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let project_count = app.portfolio.projects.data().map(Vec::len);

    let tab_titles: Vec<Line> = Section::ALL
        .iter()
        .map(|section| {
            let title = match (section, project_count) {
                (Section::Projects, Some(count)) => format!("{} ({})", section.title(), count),
                _ => section.title().to_string(),
            };

            let style = if *section == app.active_section {
                Style::default()
                    .fg(palette.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };

            Line::from(Span::styled(title, style))
        })
        .collect();

    let selected_index = Section::ALL
        .iter()
        .position(|s| *s == app.active_section)
        .unwrap_or(0);

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border))
                .title(format!(" folio · {} ", app.username))
                .title_style(palette.title()),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(palette.highlight))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
