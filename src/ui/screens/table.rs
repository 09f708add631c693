use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let txns = app.ledger.transactions();

    if txns.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions recorded", theme::dim_style())),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Transactions (0) ", theme::dim_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["#", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = txns
        .iter()
        .enumerate()
        .skip(app.txn_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.txn_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let amount_style = if i == app.txn_index {
                style
            } else if txn.is_refund() {
                theme::income_style()
            } else {
                theme::expense_style()
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(style),
                Cell::from(truncate(&txn.category, 30)).style(style),
                Cell::from(format_amount(txn.amount)).style(amount_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(20),
            Constraint::Length(15),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .title(Span::styled(
                format!(
                    " Transactions ({}) — total {} ",
                    txns.len(),
                    format_amount(app.ledger.total_spent())
                ),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(table, area);
}
