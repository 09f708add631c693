use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let headroom = app.ledger.headroom();
    // Headroom can legitimately be negative after income is lowered; the
    // card turns red instead of hiding it.
    let headroom_color = if headroom < 0.0 {
        theme::RED
    } else {
        theme::GREEN
    };

    render_card(f, cards[0], "Total income", app.ledger.income(), theme::GREEN);
    render_card(f, cards[1], "Total spent", app.ledger.total_spent(), theme::RED);
    render_card(f, cards[2], "Headroom", headroom, headroom_color);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: f64, color: ratatui::style::Color) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).centered().block(block), area);
}
