// Prompt bar component
//
// "Add Speaker:" input line, with a second line for the autocomplete guess,
// the kind question, or the pause notice depending on input mode.

use crate::tui::app::App;
use crate::tui::input::InputMode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PROMPT_TEXT: &str = "Add Speaker: ";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let input = Line::from(vec![
        Span::styled(PROMPT_TEXT, Style::default().fg(theme.title)),
        Span::styled(app.prompt.text(), Style::default().fg(theme.fg)),
    ]);

    let second = match app.mode {
        InputMode::Name => match app.prompt.guess() {
            Some(guess) => Line::from(vec![
                Span::raw(" ".repeat(PROMPT_TEXT.width())),
                Span::styled(guess, Style::default().fg(theme.guess)),
                Span::styled("  (Tab)", Style::default().fg(theme.past)),
            ]),
            None => Line::default(),
        },
        InputMode::Kind => Line::from(Span::styled(
            "Type? 1 = new point, 2 = response, ! = speak now (Esc cancels)",
            Style::default().fg(theme.current),
        )),
        InputMode::Paused => Line::from(Span::styled(
            "Clock Paused: Press any key to continue...",
            Style::default()
                .fg(theme.paused)
                .add_modifier(Modifier::BOLD),
        )),
    };

    let prompt = Paragraph::new(vec![input, second]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(prompt, area);

    // Cursor after the typed text while naming
    if app.mode == InputMode::Name {
        let x = area.x + 1 + (PROMPT_TEXT.width() + app.prompt.text().width()) as u16;
        if x < area.right().saturating_sub(1) {
            f.set_cursor_position((x, area.y + 1));
        }
    }
}
