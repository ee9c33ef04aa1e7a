// Projects section: filter bar, search line, and the grouped project list.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::portfolio::Project;
use crate::portfolio::format::{format_number, format_relative_time};
use crate::state::LoadingState;
use crate::state::filter::partition_by_demo;

use super::list::{render_empty, render_error, render_loading};
use super::palette::{Palette, language_swatch};

/// Technology badges shown per row before collapsing into "+n".
const MAX_BADGES: usize = 4;

pub fn draw_projects(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let [filter_area, search_area, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    match &app.portfolio.projects {
        LoadingState::Idle | LoadingState::Loading => {
            render_loading(frame, list_area, palette, "Loading projects");
            return;
        }
        LoadingState::Error(_) => {
            render_error(frame, list_area, palette, "projects");
            return;
        }
        LoadingState::Loaded(_) => {}
    }

    draw_filter_bar(frame, app, palette, filter_area);
    draw_search_line(frame, app, palette, search_area);
    draw_list(frame, app, palette, list_area);
}

fn draw_filter_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let selected = app.portfolio.selected_technology.as_deref();
    let chip = |label: &str, active: bool| {
        let style = if active {
            Style::default()
                .fg(palette.bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.muted()
        };
        Span::styled(format!(" {} ", label), style)
    };

    let mut spans = vec![Span::styled("←→ ", palette.key()), chip("All", selected.is_none())];
    for tech in app.portfolio.technologies() {
        spans.push(Span::raw(" "));
        let active = selected.is_some_and(|s| s.eq_ignore_ascii_case(&tech));
        spans.push(chip(&tech, active));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_search_line(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let portfolio = &app.portfolio;
    let line = if portfolio.search_active {
        Line::from(vec![
            Span::styled("/", palette.key()),
            Span::raw(portfolio.search_query.clone()),
            Span::styled("█", palette.key()),
        ])
    } else if portfolio.search_query.is_empty() {
        Line::from(vec![
            Span::styled("/ ", palette.key()),
            Span::styled("Search projects...", palette.muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled("/", palette.key()),
            Span::raw(portfolio.search_query.clone()),
            Span::styled("  (Esc clears)", palette.muted()),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn project_item<'a>(project: &Project, palette: &Palette) -> ListItem<'a> {
    let mut spans = Vec::new();
    if project.featured {
        spans.push(Span::styled("⭐ ", Style::default().fg(palette.featured)));
    } else {
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(
        project.name.clone(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ));
    if let Some(language) = &project.language {
        spans.push(Span::styled(
            "  ●",
            Style::default().fg(language_swatch(Some(language))),
        ));
        spans.push(Span::styled(format!(" {}", language), palette.muted()));
    }
    spans.push(Span::styled(
        format!(
            "  ★ {}  ⑂ {}  {}",
            format_number(project.stars),
            format_number(project.forks),
            format_relative_time(&project.updated_at)
        ),
        palette.muted(),
    ));

    let mut badges: Vec<String> = project
        .technologies
        .iter()
        .take(MAX_BADGES)
        .cloned()
        .collect();
    if project.technologies.len() > MAX_BADGES {
        badges.push(format!("+{}", project.technologies.len() - MAX_BADGES));
    }
    if !badges.is_empty() {
        spans.push(Span::styled(
            format!("  [{}]", badges.join(", ")),
            Style::default().fg(palette.highlight),
        ));
    }

    let description = if project.description.is_empty() {
        "No description available".to_string()
    } else {
        project.description.clone()
    };

    ListItem::new(vec![
        Line::from(spans),
        Line::from(Span::styled(
            format!("     {}", description),
            Style::default().fg(palette.fg),
        )),
    ])
}

fn header_item<'a>(title: &str, palette: &Palette) -> ListItem<'a> {
    ListItem::new(Line::from(Span::styled(
        format!("── {} ", title),
        palette.title(),
    )))
}

/// Position in the rendered list, headers included, of the `index`th project.
fn display_index(index: usize, demo_count: usize, other_count: usize) -> usize {
    let demo_header = usize::from(demo_count > 0);
    if index < demo_count {
        index + demo_header
    } else {
        let other_header = usize::from(other_count > 0);
        index + demo_header + other_header
    }
}

fn draw_list(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let visible = app.portfolio.visible_projects();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" Projects ({}) ", visible.len()));

    if visible.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty(frame, inner, palette, "No projects found matching your criteria.");
        return;
    }

    let (demos, others) = partition_by_demo(&visible);
    let mut items = Vec::with_capacity(visible.len() + 2);
    if !demos.is_empty() {
        items.push(header_item("With demos", palette));
        items.extend(demos.iter().map(|p| project_item(p, palette)));
    }
    if !others.is_empty() {
        items.push(header_item("Other projects", palette));
        items.extend(others.iter().map(|p| project_item(p, palette)));
    }

    let mut list_state = ListState::default();
    list_state.select(
        app.portfolio
            .list_state
            .selected()
            .map(|i| display_index(i, demos.len(), others.len())),
    );

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(palette.selected())
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list_state);
}
