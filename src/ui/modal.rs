// Modal overlays.
// Project detail drawn on top of the project list.

use ratatui::{prelude::*, widgets::*};

use crate::github::Languages;
use crate::portfolio::Project;
use crate::portfolio::format::{format_date, format_number};
use crate::portfolio::language::language_breakdown;
use crate::readme::{extract_images, extract_links, first_paragraph, parse_front_matter};
use crate::state::LoadingState;

use super::palette::{Palette, language_swatch};

/// README links listed in the detail view.
const MAX_LINKS: usize = 5;
/// Languages shown before the rest are summed into "other".
const MAX_LANGUAGES: usize = 4;

/// Area of `width` x `height` centered in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn languages_line<'a>(
    languages: Option<&LoadingState<Languages>>,
    palette: &Palette,
) -> Option<Line<'a>> {
    let mut spans = vec![Span::styled(format!("{:<10}", "Languages"), palette.muted())];
    match languages? {
        LoadingState::Idle => return None,
        LoadingState::Loading => spans.push(Span::styled("loading…", palette.muted())),
        LoadingState::Error(_) => spans.push(Span::styled("unavailable", palette.muted())),
        LoadingState::Loaded(languages) => {
            let shares = language_breakdown(languages);
            if shares.is_empty() {
                return None;
            }
            for (name, share) in shares.iter().take(MAX_LANGUAGES) {
                spans.push(Span::styled(
                    "● ",
                    Style::default().fg(language_swatch(Some(name))),
                ));
                spans.push(Span::raw(format!("{} {:.1}%  ", name, share)));
            }
            let rest: f64 = shares.iter().skip(MAX_LANGUAGES).map(|(_, s)| s).sum();
            if rest > 0.0 {
                spans.push(Span::styled(format!("other {:.1}%", rest), palette.muted()));
            }
        }
    }
    Some(Line::from(spans))
}

fn detail_lines<'a>(
    project: &Project,
    languages: Option<&LoadingState<Languages>>,
    palette: &Palette,
) -> Vec<Line<'a>> {
    let label = |text: &'static str| Span::styled(format!("{:<10}", text), palette.muted());
    let mut lines = Vec::new();

    if !project.description.is_empty() {
        lines.push(Line::from(project.description.clone()));
        lines.push(Line::from(""));
    }

    let mut meta = Vec::new();
    if let Some(language) = &project.language {
        meta.push(Span::styled(
            "● ",
            Style::default().fg(language_swatch(Some(language))),
        ));
        meta.push(Span::raw(format!("{}   ", language)));
    }
    meta.push(Span::styled(
        format!(
            "★ {}   ⑂ {}   created {}",
            format_number(project.stars),
            format_number(project.forks),
            format_date(&project.created_at)
        ),
        palette.muted(),
    ));
    lines.push(Line::from(meta));
    lines.extend(languages_line(languages, palette));

    if !project.technologies.is_empty() {
        lines.push(Line::from(vec![
            label("Tech"),
            Span::styled(
                project.technologies.join(", "),
                Style::default().fg(palette.highlight),
            ),
        ]));
    }
    lines.push(Line::from(""));

    if let Some(readme) = &project.readme {
        let parsed = parse_front_matter(readme);
        let meta = &parsed.metadata;
        let summary = meta
            .description()
            .map(str::to_string)
            .unwrap_or_else(|| first_paragraph(&parsed.body));
        if !summary.is_empty() {
            let heading = meta.title().unwrap_or("README").to_string();
            lines.push(Line::from(Span::styled(heading, palette.title())));
            lines.push(Line::from(summary));
            lines.push(Line::from(""));
        }
        if !meta.is_empty() {
            let tags = meta.tags();
            if !tags.is_empty() {
                lines.push(Line::from(vec![
                    label("Tags"),
                    Span::styled(tags.join(" · "), Style::default().fg(palette.highlight)),
                ]));
            }
        }

        let links = extract_links(&parsed.body);
        for link in links.iter().take(MAX_LINKS) {
            lines.push(Line::from(vec![
                Span::styled("  • ", palette.muted()),
                Span::raw(link.text.clone()),
                Span::styled(format!("  {}", link.url), palette.accent()),
            ]));
        }
        if links.len() > MAX_LINKS {
            lines.push(Line::from(Span::styled(
                format!("  … {} more links", links.len() - MAX_LINKS),
                palette.muted(),
            )));
        }

        let images = extract_images(&parsed.body).len();
        if images > 0 {
            lines.push(Line::from(Span::styled(
                format!("  {} image(s) in README", images),
                palette.muted(),
            )));
        }
        lines.push(Line::from(""));
    }

    if let Some(live) = &project.live_url {
        lines.push(Line::from(vec![
            label("Live demo"),
            Span::styled(live.clone(), palette.accent()),
        ]));
    }
    lines.push(Line::from(vec![
        label("Source"),
        Span::styled(project.github_url.clone(), palette.accent()),
    ]));

    lines
}

/// Draw the selected project's details on top of the current view.
pub fn draw_project_detail(
    frame: &mut Frame,
    project: &Project,
    languages: Option<&LoadingState<Languages>>,
    palette: &Palette,
) {
    let modal_area = centered(frame.area(), 80, 24);
    frame.render_widget(Clear, modal_area);

    let [body_area, instructions_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(modal_area);

    let title = if project.featured {
        format!(" ⭐ {} ", project.name)
    } else {
        format!(" {} ", project.name)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.accent())
        .title(title)
        .title_style(palette.title());

    let body = Paragraph::new(detail_lines(project, languages, palette))
        .block(block)
        .style(palette.base())
        .wrap(Wrap { trim: false });
    frame.render_widget(body, body_area);

    let instructions = Line::from(vec![
        Span::styled(" Esc", palette.key()),
        Span::styled(" = Close ", palette.muted()),
    ]);
    frame.render_widget(
        Paragraph::new(instructions)
            .alignment(Alignment::Center)
            .style(palette.base()),
        instructions_area,
    );
}
