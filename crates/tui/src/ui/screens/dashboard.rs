use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use api_types::analytics::Period;

use crate::{
    app::{AppState, SpendingView},
    ui::{
        components::{
            card::{Card, StatCard},
            charts::{ascii_bar, render_spending_chart},
            money::{format_money, styled_amount},
        },
        theme::Theme,
    },
};

const RECENT_ROWS: usize = 5;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(RECENT_ROWS as u16 + 2),
        ])
        .split(area);

    render_stats(frame, layout[0], state, &theme);
    render_spending(frame, layout[1], state, &theme);
    render_recent(frame, layout[2], state, &theme);
}

fn render_stats(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let overview = &state.data.overview;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let window = match state.period {
        Period::Month => "this month",
        Period::SixMonths => "last 6 months",
        Period::Year => "last year",
    };

    StatCard::new("Income", styled_amount(overview.income_minor, theme), theme)
        .subtitle(window)
        .render(frame, cols[0]);
    StatCard::new(
        "Expenses",
        styled_amount(-overview.expenses_minor, theme),
        theme,
    )
    .subtitle(window)
    .render(frame, cols[1]);
    StatCard::new("Savings", styled_amount(overview.savings_minor, theme), theme)
        .subtitle(window)
        .render(frame, cols[2]);
    StatCard::new(
        "Net worth",
        styled_amount(overview.net_worth_minor, theme),
        theme,
    )
    .subtitle("all accounts")
    .render(frame, cols[3]);
}

fn render_spending(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Spending by category", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let spending = &state.data.spending;
    if spending.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No expenses in this window.",
                Style::default().fg(theme.dim),
            ))),
            inner,
        );
        return;
    }

    match state.spending_view {
        SpendingView::Chart => render_spending_chart(frame, inner, spending, theme),
        SpendingView::List => {
            let max = spending
                .iter()
                .map(|group| group.amount_minor.max(0).unsigned_abs())
                .max()
                .unwrap_or(0);
            let width = spending.iter().map(|g| g.category.len()).max().unwrap_or(0);
            let items: Vec<ListItem> = spending
                .iter()
                .map(|group| {
                    let bar = ascii_bar(group.amount_minor.max(0).unsigned_abs(), max, 20);
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:<width$}  ", group.category),
                            Style::default().fg(theme.text),
                        ),
                        Span::styled(bar, Style::default().fg(theme.accent)),
                        Span::raw(format!("  {}", format_money(group.amount_minor))),
                    ]))
                })
                .collect();
            frame.render_widget(List::new(items), inner);
        }
    }
}

fn render_recent(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let items: Vec<ListItem> = state
        .data
        .transactions
        .iter()
        .take(RECENT_ROWS)
        .map(|tx| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}  ", tx.date), Style::default().fg(theme.dim)),
                Span::raw(format!("{:<24} ", tx.description)),
                Span::styled(
                    format!("{:<16} ", tx.category),
                    Style::default().fg(theme.dim),
                ),
                styled_amount(tx.amount_minor, theme),
            ]))
        })
        .collect();

    Card::new("Recent transactions", theme).render_with(frame, area, List::new(items));
}
