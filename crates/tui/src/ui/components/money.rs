use api_types::budget::{Allocation, AllocationStatus};
use engine::MoneyCents;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::Gauge,
};

use crate::ui::theme::Theme;

/// `$1,234.56`, with a leading `-` for negative amounts.
pub fn format_money(cents: i64) -> String {
    MoneyCents::new(cents).to_string()
}

/// Amount colored by sign: income green, expenses red.
#[must_use]
pub fn styled_amount(cents: i64, theme: &Theme) -> Span<'static> {
    let color = if cents > 0 {
        theme.positive
    } else if cents < 0 {
        theme.negative
    } else {
        theme.text
    };
    Span::styled(format_money(cents), Style::default().fg(color))
}

/// Allocation summary line for the goals editor.
pub fn allocation_text(allocation: &Allocation) -> String {
    match allocation.status {
        AllocationStatus::FullyAllocated => "Fully allocated".to_string(),
        AllocationStatus::Unallocated { amount_minor } => {
            format!("Unallocated {}", format_money(amount_minor))
        }
        AllocationStatus::OverBudget { amount_minor } => {
            format!("Over budget by {}", format_money(amount_minor))
        }
    }
}

#[must_use]
pub fn styled_allocation(allocation: &Allocation, theme: &Theme) -> Span<'static> {
    let color = match allocation.status {
        AllocationStatus::FullyAllocated => theme.positive,
        AllocationStatus::Unallocated { .. } => theme.warning,
        AllocationStatus::OverBudget { .. } => theme.negative,
    };
    Span::styled(
        allocation_text(allocation),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Gauge for one bucket's share of monthly income. Shares over 100% are
/// drawn full and labelled with the real figure.
#[must_use]
pub fn share_gauge(label: &str, share: u16, theme: &Theme) -> Gauge<'static> {
    let color = if share > 100 {
        theme.negative
    } else {
        theme.accent
    };
    Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(share.min(100))
        .label(format!("{label} {share}%"))
}
