// UI module for rendering the TUI.
// Contains the section bar, per-section views, status bar, and overlays.

mod list;
mod modal;
pub mod palette;
mod projects;
mod sections;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Section};

use palette::Palette;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.theme());
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let [tabs_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(3), // Section bar
        Constraint::Min(1),    // Main content
        Constraint::Length(1), // Status bar
    ])
    .areas(frame.area());

    tabs::draw_tabs(frame, app, &palette, tabs_area);
    draw_content(frame, app, &palette, content_area);
    draw_status_bar(frame, app, &palette, status_area);

    if app.portfolio.detail_open && app.active_section == Section::Projects {
        if let Some(project) = app.portfolio.selected_project() {
            let languages = app.portfolio.languages.get(&project.id);
            modal::draw_project_detail(frame, project, languages, &palette);
        }
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame, &palette);
    }
}

fn draw_content(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    match app.active_section {
        Section::Hero => sections::draw_hero(frame, app, palette, area),
        Section::About => sections::draw_about(frame, app, palette, area),
        Section::Skills => sections::draw_skills(frame, app, palette, area),
        Section::Projects => projects::draw_projects(frame, app, palette, area),
        Section::Contact => sections::draw_contact(frame, app, palette, area),
    }
}

/// Draw the status bar with keybinding hints and rate limit.
fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let hint = |key: &'static str, what: &'static str| {
        [
            Span::styled(format!(" {} ", key), palette.key()),
            Span::styled(format!("{} ", what), palette.muted()),
        ]
    };

    let mut hints: Vec<Span> = if app.portfolio.search_active {
        [hint("↵", "Done"), hint("Esc", "Clear")].concat()
    } else if app.active_section == Section::Projects {
        [
            hint("↑↓", "Navigate"),
            hint("←→", "Filter"),
            hint("/", "Search"),
            hint("↵", "Details"),
            hint("Tab", "Switch"),
            hint("?", "Help"),
            hint("q", "Quit"),
        ]
        .concat()
    } else {
        [
            hint("Tab", "Switch"),
            hint("t", "Theme"),
            hint("r", "Refresh"),
            hint("?", "Help"),
            hint("q", "Quit"),
        ]
        .concat()
    };

    // Nothing to show until the first response arrives.
    let rate = app.client().rate_limit();
    if rate.limit > 0 {
        let rate_color = if rate.remaining < 10 {
            palette.error
        } else if rate.remaining < 20 {
            palette.loading
        } else {
            palette.muted
        };
        hints.push(Span::styled(
            format!("  API: {}/{}", rate.remaining, rate.limit),
            Style::default().fg(rate_color),
        ));
        if rate.remaining == 0 {
            if let Some(reset) = chrono::DateTime::from_timestamp(rate.reset as i64, 0) {
                hints.push(Span::styled(
                    format!(" (resets {})", reset.with_timezone(&chrono::Local).format("%H:%M")),
                    Style::default().fg(rate_color),
                ));
            }
        }
    }

    if let Some(notice) = &app.notice {
        hints.push(Span::styled(format!("  {}", notice), palette.accent()));
    }

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame, palette: &Palette) {
    let popup_area = modal::centered(frame.area(), 50, 18);
    frame.render_widget(Clear, popup_area);

    let shortcut = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", keys), palette.accent()),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        shortcut("Tab/Shift-Tab", "Next / previous section"),
        shortcut("↑/↓ or j/k", "Select project"),
        shortcut("←/→ or h/l", "Cycle technology filter"),
        shortcut("/", "Search projects"),
        shortcut("Enter", "Project details"),
        shortcut("Esc", "Close / clear filters"),
        shortcut("t", "Toggle light/dark theme"),
        shortcut("r", "Refresh from GitHub"),
        shortcut("?", "Show/hide this help"),
        shortcut("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", palette.muted()),
            Span::styled("Esc", palette.key()),
            Span::styled(" or ", palette.muted()),
            Span::styled("?", palette.key()),
            Span::styled(" to close", palette.muted()),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.accent())
                .title(" Help ")
                .title_style(palette.title()),
        )
        .style(palette.base())
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
