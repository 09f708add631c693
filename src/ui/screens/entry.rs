use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::{App, Field, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Input fields
            Constraint::Min(3),    // Transaction list
            Constraint::Length(3), // Running total
        ])
        .split(area);

    render_fields(f, chunks[0], app);
    render_transaction_list(f, chunks[1], app);
    render_total(f, chunks[2], app);
}

fn editing(app: &App, field: Field) -> bool {
    app.input_mode == InputMode::Editing(field)
}

fn field_line<'a>(label: &'a str, value: Span<'a>, active: bool) -> Line<'a> {
    let label_style = if active {
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        theme::dim_style()
    };
    Line::from(vec![Span::styled(format!(" {label:<10}"), label_style), value])
}

fn render_fields(f: &mut Frame, area: Rect, app: &App) {
    let income = if editing(app, Field::Income) {
        Span::styled(format!("{}▏", app.input), theme::selected_style())
    } else {
        Span::styled(format_amount(app.ledger.income()), theme::income_style())
    };

    let category = if editing(app, Field::NewCategory) {
        Span::styled(format!("{}▏", app.input), theme::selected_style())
    } else {
        match app.selected_category() {
            Some(cat) => Span::styled(
                format!("◂ {cat} ▸"),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("(none registered)", theme::dim_style()),
        }
    };

    let amount = if editing(app, Field::Amount) {
        Span::styled(format!("{}▏", app.input), theme::selected_style())
    } else {
        Span::styled("press 'a' to add a transaction", theme::dim_style())
    };

    let lines = vec![
        field_line("Income:", income, editing(app, Field::Income)),
        field_line(
            "Category:",
            category,
            editing(app, Field::NewCategory),
        ),
        field_line("Amount:", amount, editing(app, Field::Amount)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(Span::styled(
            " Finance Tracker ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_transaction_list(f: &mut Frame, area: Rect, app: &App) {
    let txns = app.ledger.transactions();
    let title = format!(" Transactions ({}) ", txns.len());

    if txns.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Set an income with 'i', then add one with 'a'",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(title, theme::dim_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let visible = area.height.saturating_sub(2) as usize;
    // Keep the newest entries in view; the full history lives on the
    // Table screen.
    let skip = txns.len().saturating_sub(visible);

    let items: Vec<ListItem> = txns
        .iter()
        .skip(skip)
        .map(|txn| {
            let amount_style = if txn.is_refund() {
                theme::income_style()
            } else {
                theme::normal_style()
            };
            // Refunds read better as "+$30.00" than "-$30.00" in a list
            // of expenses.
            let amount = if txn.is_refund() {
                format!("+{}", format_amount(txn.abs_amount()))
            } else {
                format_amount(txn.amount)
            };
            let cat_width = width.saturating_sub(amount.len() + 3);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:<cat_width$}", truncate(&txn.category, cat_width)),
                    theme::normal_style(),
                ),
                Span::styled(amount, amount_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}

fn render_total(f: &mut Frame, area: Rect, app: &App) {
    let total = app.ledger.total_spent();
    let line = Line::from(vec![
        Span::styled("Total spent: ", theme::dim_style()),
        Span::styled(
            format_amount(total),
            Style::default()
                .fg(theme::RED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   of ", theme::dim_style()),
        Span::styled(format_amount(app.ledger.income()), theme::income_style()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY));
    f.render_widget(Paragraph::new(line).centered().block(block), area);
}
