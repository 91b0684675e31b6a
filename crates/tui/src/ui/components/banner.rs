use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

/// One-line error strip; `x` dismisses it.
pub fn render(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            " ! ",
            Style::default()
                .fg(theme.surface)
                .bg(theme.error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {message}  "), Style::default().fg(theme.error)),
        Span::styled("x", Style::default().fg(theme.accent)),
        Span::raw(" dismiss"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
