// Clock bar component
//
// Total elapsed time, the ordering policy, and a PAUSED marker.

use super::formatters::format_time;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut spans = vec![
        Span::styled(
            " Total Time Elapsed: ",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format_time(app.discussion.total_duration()),
            Style::default().fg(theme.clock).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   ({})", app.discussion.priority_mode().label()),
            Style::default().fg(theme.past),
        ),
    ];

    if app.is_paused() {
        spans.push(Span::styled(
            "   PAUSED",
            Style::default()
                .fg(theme.paused)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        ));
    }

    let clock = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(clock, area);
}
