use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use api_types::budget::BudgetGoalsView;
use engine::{Bucket, EngineError};

use crate::{
    app::{AppState, GoalField, GoalsForm, Mode},
    ui::{
        components::{
            card::Card,
            money::{format_money, share_gauge, styled_allocation, styled_amount},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(6)])
        .split(cols[0]);

    let (goals, view, form) = match &state.mode {
        Mode::Goals(form) => (form.entered(), form.preview(), Some(form)),
        _ => (
            engine::BudgetGoals::from(&state.data.goals.goals),
            Ok(state.data.goals),
            None,
        ),
    };

    render_goals(frame, left[0], &goals, &view, form, &theme);
    render_shares(frame, left[1], &goals, &theme);
    render_accounts(frame, cols[1], state, &theme);
}

fn render_goals(
    frame: &mut Frame<'_>,
    area: Rect,
    goals: &engine::BudgetGoals,
    view: &Result<BudgetGoalsView, EngineError>,
    form: Option<&GoalsForm>,
    theme: &Theme,
) {
    let mut lines: Vec<Line> = GoalField::ALL
        .iter()
        .map(|field| {
            let (value, label_style) = match form {
                Some(form) if form.focus == *field => (
                    format!("{}_", form.value(*field)),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Some(form) => (form.value(*field).to_string(), Style::default().fg(theme.dim)),
                None => (
                    format_money(field.amount(goals).cents()),
                    Style::default().fg(theme.dim),
                ),
            };
            Line::from(vec![
                Span::styled(format!("{:<16}", field.label()), label_style),
                Span::styled(value, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    lines.push(Line::default());
    match view {
        Ok(view) => {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<16}", "Allocated"), Style::default().fg(theme.dim)),
                Span::raw(format_money(view.allocation.total_allocated_minor)),
            ]));
            lines.push(Line::from(styled_allocation(&view.allocation, theme)));
        }
        Err(err) => lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(theme.error),
        ))),
    }

    let title = if form.is_some() {
        "Budget goals (Enter save, Esc cancel)"
    } else {
        "Budget goals (e edit)"
    };
    Card::new(title, theme)
        .focused(form.is_some())
        .render_with(frame, area, Paragraph::new(lines));
}

fn render_shares(frame: &mut Frame<'_>, area: Rect, goals: &engine::BudgetGoals, theme: &Theme) {
    let card = Card::new("Share of income", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(Bucket::ALL.map(|_| Constraint::Length(1)))
        .split(inner);

    for (bucket, row) in Bucket::ALL.iter().zip(rows.iter()) {
        frame.render_widget(
            share_gauge(bucket.label(), goals.share(*bucket), theme),
            *row,
        );
    }
}

fn render_accounts(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let header = Row::new(["Account", "Type", "Balance", "Monthly"])
        .style(Style::default().fg(theme.dim).add_modifier(Modifier::BOLD));

    let rows = state.data.accounts.iter().map(|account| {
        Row::new(vec![
            Cell::from(account.name.clone()),
            Cell::from(account.kind.clone()),
            Cell::from(Line::from(styled_amount(account.balance_minor, theme))),
            Cell::from(format_money(account.monthly_contribution_minor)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(14),
            Constraint::Min(18),
            Constraint::Length(14),
            Constraint::Length(12),
        ],
    )
    .header(header);

    Card::new("Accounts", theme).render_with(frame, area, table);
}
