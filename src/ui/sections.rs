// Hero, about, skills and contact sections.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::portfolio::format::{extract_domain, format_date, format_number};
use crate::portfolio::skills::group_by_category;
use crate::state::LoadingState;

use super::list::{render_error, render_loading};
use super::palette::Palette;

/// Name for the hero: configured, else from the profile, else the login.
fn display_name(app: &App) -> String {
    if let Some(name) = &app.profile_copy.name {
        return name.clone();
    }
    app.portfolio
        .profile
        .data()
        .map(|p| p.display_name().to_string())
        .unwrap_or_else(|| app.username.clone())
}

pub fn draw_hero(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Hi, I'm ", Style::default().fg(palette.fg)),
            Span::styled(display_name(app), palette.title()),
        ]),
        Line::from(""),
    ];

    if let Some(role) = app.current_role() {
        lines.push(Line::from(vec![
            Span::styled(role.to_string(), Style::default().fg(palette.highlight)),
            Span::styled("▌", palette.muted()),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        app.profile_copy.tagline.clone(),
        Style::default().fg(palette.fg),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Tab", palette.key()),
        Span::styled(" to view my work", palette.muted()),
    ]));

    let top = area.height.saturating_sub(lines.len() as u16) / 3;
    let [_, body] = Layout::vertical([Constraint::Length(top), Constraint::Min(1)]).areas(area);

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, body);
}

pub fn draw_about(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" About Me ")
        .title_style(palette.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let profile = match &app.portfolio.profile {
        LoadingState::Idle | LoadingState::Loading => {
            render_loading(frame, inner, palette, "Loading profile");
            return;
        }
        LoadingState::Error(_) => {
            render_error(frame, inner, palette, "the profile");
            return;
        }
        LoadingState::Loaded(profile) => profile,
    };

    let label = |text: &'static str| Span::styled(format!("{:<10}", text), palette.muted());
    let mut lines = vec![
        Line::from(Span::styled(profile.display_name().to_string(), palette.title())),
        Line::from(Span::styled(format!("@{}", profile.login), palette.muted())),
        Line::from(""),
    ];

    if let Some(bio) = &profile.bio {
        lines.push(Line::from(bio.clone()));
        lines.push(Line::from(""));
    }
    if let Some(location) = &profile.location {
        lines.push(Line::from(vec![label("Location"), Span::raw(location.clone())]));
    }
    if let Some(blog) = &profile.blog {
        lines.push(Line::from(vec![
            label("Website"),
            Span::styled(extract_domain(blog), palette.accent()),
        ]));
    }
    lines.push(Line::from(vec![
        label("Joined"),
        Span::raw(format_date(&profile.created_at)),
    ]));
    lines.push(Line::from(vec![
        label("Avatar"),
        Span::styled(profile.avatar_url.clone(), palette.muted()),
    ]));
    lines.push(Line::from(""));

    let stat = |value: u64, name: &'static str| {
        vec![
            Span::styled(
                format_number(value),
                Style::default()
                    .fg(palette.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}   ", name), palette.muted()),
        ]
    };
    let mut stats = stat(profile.public_repos, "repositories");
    stats.extend(stat(profile.followers, "followers"));
    stats.extend(stat(profile.following, "following"));
    lines.push(Line::from(stats));

    let about = Paragraph::new(lines)
        .style(Style::default().fg(palette.fg))
        .wrap(Wrap { trim: true });
    frame.render_widget(about, inner);
}

pub fn draw_skills(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let groups = group_by_category(&app.portfolio.skills);
    if groups.is_empty() {
        super::list::render_empty(frame, area, palette, "No skills configured");
        return;
    }

    let columns = Layout::horizontal(vec![Constraint::Ratio(1, groups.len() as u32); groups.len()])
        .spacing(1)
        .split(area);

    for ((category, skills), column) in groups.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(format!(" {} ", category.title()))
            .title_style(palette.title());
        let inner = block.inner(*column);
        frame.render_widget(block, *column);

        let rows = Layout::vertical(vec![Constraint::Length(2); skills.len()]).split(inner);
        for (skill, row) in skills.iter().zip(rows.iter()) {
            let gauge = LineGauge::default()
                .label(Line::from(vec![
                    Span::styled(format!("{:<14}", skill.name), Style::default().fg(palette.fg)),
                    Span::styled(format!("{:>3}% ", skill.proficiency.min(100)), palette.muted()),
                ]))
                .ratio(skill.ratio())
                .filled_style(Style::default().fg(palette.accent))
                .unfilled_style(Style::default().fg(palette.border));
            frame.render_widget(gauge, *row);
        }
    }
}

pub fn draw_contact(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" Get In Touch ")
        .title_style(palette.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = |label: String, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), palette.muted()),
            Span::styled(value, palette.accent()),
        ])
    };

    let mut lines = Vec::new();
    if let Some(profile) = app.portfolio.profile.data() {
        if let Some(email) = &profile.email {
            lines.push(row("Email".to_string(), email.clone()));
        }
        if let Some(blog) = &profile.blog {
            lines.push(row("Website".to_string(), extract_domain(blog)));
        }
        lines.push(row("GitHub".to_string(), profile.html_url.clone()));
        if let Some(twitter) = &profile.twitter_username {
            lines.push(row(
                "Twitter".to_string(),
                format!("https://twitter.com/{}", twitter),
            ));
        }
    } else {
        lines.push(row(
            "GitHub".to_string(),
            format!("https://github.com/{}", app.username),
        ));
    }
    for social in &app.socials {
        lines.push(row(social.platform.clone(), social.url.clone()));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
