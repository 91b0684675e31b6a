use api_types::analytics::CategorySpending;
use ratatui::{
    Frame,
    layout::{Direction, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup},
};

use crate::ui::{components::money::format_money, theme::Theme};

/// Horizontal bars, one per category, labelled with the formatted amount.
pub fn render_spending_chart(
    frame: &mut Frame<'_>,
    area: Rect,
    spending: &[CategorySpending],
    theme: &Theme,
) {
    let bars: Vec<Bar> = spending
        .iter()
        .map(|group| {
            Bar::default()
                .label(Line::from(group.category.clone()))
                .value(group.amount_minor.max(0).unsigned_abs())
                .text_value(format_money(group.amount_minor))
        })
        .collect();

    let chart = BarChart::default()
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(theme.accent))
        .value_style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(theme.dim));

    frame.render_widget(chart, area);
}

/// `████░░░░` sized to `value / max`.
#[must_use]
pub fn ascii_bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
