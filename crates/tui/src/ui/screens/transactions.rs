use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Clear, Paragraph, Row, Table, TableState},
};

use api_types::transaction::TransactionKind;

use crate::{
    app::{AppState, Mode, TransactionForm, TxField},
    ui::{
        centered_rect,
        components::{card::Card, money::styled_amount},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    render_table(frame, area, state, &theme);

    if let Mode::Transaction(form) = &state.mode {
        render_form(frame, area, form, &state.data.categories, &theme);
    }
}

fn render_table(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let header = Row::new(["Date", "Description", "Category", "Type", "Amount", ""])
        .style(Style::default().fg(theme.dim).add_modifier(Modifier::BOLD));

    let rows = state.data.transactions.iter().map(|tx| {
        let kind = match tx.kind {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        Row::new(vec![
            Cell::from(tx.date.clone()),
            Cell::from(tx.description.clone()),
            Cell::from(tx.category.clone()),
            Cell::from(kind),
            Cell::from(Line::from(styled_amount(tx.amount_minor, theme))),
            Cell::from(if tx.recurring { "recurring" } else { "" }),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Min(18),
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(14),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .row_highlight_style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("» ");

    let mut table_state = TableState::default();
    if !state.data.transactions.is_empty() {
        table_state.select(Some(state.selected));
    }

    let card = Card::new("Transactions", theme).focused(matches!(state.mode, Mode::Browse));
    let inner = card.inner(area);
    card.render_frame(frame, area);
    frame.render_stateful_widget(table, inner, &mut table_state);
}

fn render_form(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &TransactionForm,
    categories: &[String],
    theme: &Theme,
) {
    let rect = centered_rect(60, 60, area);
    frame.render_widget(Clear, rect);

    let title = if form.editing.is_some() {
        "Edit transaction"
    } else {
        "Add transaction"
    };

    let mut lines: Vec<Line> = TxField::ALL
        .iter()
        .map(|field| {
            let focused = *field == form.focus;
            let label_style = if focused {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dim)
            };
            let cursor = if focused && !field.is_toggle() { "_" } else { "" };
            Line::from(vec![
                Span::styled(format!("{:<12}", field.label()), label_style),
                Span::styled(
                    format!("{}{cursor}", form.value(*field)),
                    Style::default().fg(theme.text),
                ),
            ])
        })
        .collect();

    lines.push(Line::default());
    if form.focus == TxField::Category {
        lines.push(Line::from(Span::styled(
            categories.join(", "),
            Style::default().fg(theme.dim),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Tab next  Space toggle  Enter save  Esc cancel",
        Style::default().fg(theme.dim),
    )));

    Card::new(title, theme)
        .focused(true)
        .render_with(frame, rect, Paragraph::new(lines));
}
