// Hints panel component - key reference beside the roster

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HINTS: &[(&str, &str)] = &[
    ("C-n", "Next speaker"),
    ("C-b", "Previous speaker"),
    ("C-p", "Pause the clock"),
    ("C-h", "Toggle hints"),
    ("C-r", "Re-render"),
    ("C-d", "Exit"),
    ("Tab", "Accept suggestion"),
    ("Enter", "Choose 1 / 2 / !"),
];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let lines: Vec<Line> = HINTS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<6}", key),
                    Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(theme.fg)),
            ])
        })
        .collect();

    let hints = Paragraph::new(lines).block(
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(hints, area);
}
