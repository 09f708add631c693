use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::theme;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Key hints
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_hint_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let num = format!("{}", i + 1);
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(format!("{num}:"), Style::default().fg(theme::TEXT_DIM)),
                    Span::styled(
                        format!("{s}"),
                        Style::default()
                            .fg(theme::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("{num}:{s}"),
                    Style::default().fg(theme::TEXT_DIM),
                ))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Entry => super::screens::entry::render(f, area, app),
        Screen::Summary => super::screens::summary::render(f, area, app),
        Screen::Table => super::screens::table::render(f, area, app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode = Span::styled(
        format!(" {} ", app.input_mode),
        match app.input_mode {
            InputMode::Normal => theme::header_style(),
            InputMode::Editing(_) => theme::selected_style(),
        },
    );
    let msg = Span::styled(format!(" {}", app.status_message), theme::status_bar_style());
    let line = Line::from(vec![mode, msg]);
    f.render_widget(
        Paragraph::new(line).style(theme::status_bar_style()),
        area,
    );
}

fn render_hint_bar(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.input_mode {
        InputMode::Editing(field) => format!(" {field}: type, Enter commit, Esc cancel"),
        InputMode::Normal => match app.screen {
            Screen::Entry => {
                " i income  a amount  n new category  h/l category  1-3 screens  ? help  q quit"
                    .to_string()
            }
            Screen::Table => {
                " j/k move  g/G top/bottom  1-3 screens  ? help  q quit".to_string()
            }
            Screen::Summary => " 1-3 screens  ? help  q quit".to_string(),
        },
    };
    f.render_widget(Paragraph::new(hints).style(theme::dim_style()), area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let width = 52.min(area.width);
    let height = 16.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Keys",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("  1/2/3, Tab    switch screen"),
        Line::from("  i             set income"),
        Line::from("  a             add transaction (uses selected category)"),
        Line::from("  h/l or ←/→    select category"),
        Line::from("  n             register a new category"),
        Line::from("  j/k           move in the transaction table"),
        Line::from("  g/G           jump to top/bottom of the table"),
        Line::from("  Enter / Esc   commit / cancel an edit"),
        Line::from("  q, Ctrl-q     quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  A transaction is rejected when it would push total",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            "  spending past the declared income.",
            theme::dim_style(),
        )),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(" Help (any key to close) "),
        ),
        popup,
    );
}
