pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Mode, Tab};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tabs
            Constraint::Length(u16::from(state.banner.is_some())),
            Constraint::Min(0),
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.tab, &theme);
    if let Some(message) = &state.banner {
        components::banner::render(frame, layout[2], message, &theme);
    }

    match state.tab {
        Tab::Dashboard => screens::dashboard::render(frame, layout[3], state),
        Tab::Transactions => screens::transactions::render(frame, layout[3], state),
        Tab::Health => screens::health::render(frame, layout[3], state),
    }

    render_bottom_bar(frame, layout[4], state, &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let (source, source_style) = if state.offline {
        ("offline sample data", Style::default().fg(theme.warning))
    } else {
        ("server", Style::default().fg(theme.positive))
    };

    let line = Line::from(vec![
        Span::styled(" Budget Tracker  ", Style::default().fg(theme.accent)),
        Span::styled("Window", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.period.as_str())),
        Span::styled("Source", Style::default().fg(theme.dim)),
        Span::raw(": "),
        Span::styled(source, source_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.accent));
    let sep = || Span::styled("  │  ", Style::default().fg(theme.border));

    let parts = match (&state.mode, state.tab) {
        (Mode::Browse, tab) => {
            let mut parts = components::tabs::tab_shortcuts(theme);
            parts.push(sep());
            parts.extend([
                key("m"),
                Span::raw("/"),
                key("6"),
                Span::raw("/"),
                key("y"),
                Span::raw(" window  "),
                key("r"),
                Span::raw(" refresh"),
            ]);
            parts.push(sep());
            match tab {
                Tab::Dashboard => parts.extend([key("c"), Span::raw(" chart/list")]),
                Tab::Transactions => parts.extend([
                    key("a"),
                    Span::raw(" add  "),
                    key("e"),
                    Span::raw(" edit  "),
                    key("d"),
                    Span::raw(" delete"),
                ]),
                Tab::Health => parts.extend([key("e"), Span::raw(" edit goals")]),
            }
            parts.push(sep());
            parts.extend([key("q"), Span::raw(" quit")]);
            parts
        }
        _ => vec![
            key("Tab"),
            Span::raw(" next  "),
            key("Enter"),
            Span::raw(" save  "),
            key("Esc"),
            Span::raw(" cancel"),
        ],
    };

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Rect of `percent_x` by `percent_y` centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        app::{GoalField, GoalsForm},
        source::{DataSource, LocalStore},
    };

    async fn sample_state(tab: Tab) -> AppState {
        let source = DataSource::Local(LocalStore::with_sample_data(chrono_tz::Tz::UTC));
        let (data, _) = source.load(Default::default()).await;
        AppState {
            tab,
            data,
            offline: true,
            ..AppState::default()
        }
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    async fn rendered(tab: Tab, banner: Option<&str>) -> String {
        let state = AppState {
            banner: banner.map(str::to_string),
            ..sample_state(tab).await
        };
        draw(&state)
    }

    #[tokio::test]
    async fn dashboard_shows_cards_and_banner() {
        let screen = rendered(Tab::Dashboard, Some("Server unreachable")).await;
        assert!(screen.contains("Net worth"));
        assert!(screen.contains("Spending by category"));
        assert!(screen.contains("Server unreachable"));
    }

    #[tokio::test]
    async fn health_shows_allocation_and_accounts() {
        let screen = rendered(Tab::Health, None).await;
        assert!(screen.contains("Fully allocated"));
        assert!(screen.contains("Emergency Fund"));
    }

    #[tokio::test]
    async fn health_shares_cover_every_bucket() {
        let screen = rendered(Tab::Health, None).await;
        for label in ["Debt payments", "Savings", "Investments", "Discretionary"] {
            assert!(screen.contains(label), "{label}");
        }
    }

    #[tokio::test]
    async fn goals_editor_survives_overflowing_input() {
        let mut state = sample_state(Tab::Health).await;
        let mut form = GoalsForm::new(&state.data.goals.goals);
        for field in [GoalField::DebtPayments, GoalField::Savings] {
            form.focus = field;
            while !form.value(field).is_empty() {
                form.backspace();
            }
            for ch in "90000000000000000".chars() {
                form.input(ch);
            }
        }
        state.mode = Mode::Goals(form);

        let screen = draw(&state);
        assert!(screen.contains("Invalid amount: total out of range"));
        assert!(!screen.contains("Fully allocated"));
    }

    #[tokio::test]
    async fn transactions_table_lists_samples() {
        let screen = rendered(Tab::Transactions, None).await;
        assert!(screen.contains("Rent Payment"));
        assert!(screen.contains("-$1,200.00"));
    }

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 60, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 30);
        assert_eq!(inner.x, 20);
    }
}
