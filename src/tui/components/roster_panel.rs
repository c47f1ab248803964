// Roster panel component
//
// Draws the RosterItem stream: a rule at each line-break marker, arrows and
// bold text between highlight markers, one row per speech, and a count row
// where the queue was cut.

use super::formatters::{display_name, dot_leader, format_time};
use crate::discussion::{Discussion, Speech};
use crate::tui::app::App;
use crate::tui::roster::{self, RosterItem};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Row text for one speech, exactly `width` columns when it fits
///
/// `→ 1. Naman ........ 0:05 / 1:10 ←` for the current speech; responses
/// are marked `2.`.
pub fn entry_text(discussion: &Discussion, speech: &Speech, width: usize, highlighted: bool) -> String {
    let speaker = discussion.speaker_of(speech);
    let marker = if speech.is_response() { "2." } else { "1." };
    let (left, right) = if highlighted { ("→", "←") } else { (" ", " ") };

    let label = format!("{} {} {}", left, marker, display_name(speaker.name()));
    let value = format!(
        "{} / {} {}",
        format_time(speech.duration()),
        format_time(speaker.total_speaking_time()),
        right
    );

    dot_leader(&label, &value, width)
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let discussion = &app.discussion;

    let block = Block::default()
        .title(" Speaking Order ")
        .title_style(Style::default().fg(theme.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    let width = inner.width as usize;

    if !discussion.has_started() {
        let hint = Line::styled(
            " Type a name and press Enter to start the clock",
            Style::default().fg(theme.past),
        );
        f.render_widget(Paragraph::new(hint).block(block), area);
        return;
    }

    let items = roster::build(discussion, inner.height as usize);

    let mut lines: Vec<Line> = Vec::with_capacity(items.len());
    let mut highlighted = false;
    let mut past_current = false;

    for item in items {
        match item {
            RosterItem::LineBreakOn | RosterItem::LineBreakOff => {
                lines.push(Line::styled("─".repeat(width), Style::default().fg(theme.rule)));
            }
            RosterItem::Hidden(count) => {
                lines.push(Line::styled(
                    format!("   * {} more waiting", count),
                    Style::default().fg(theme.past),
                ));
            }
            RosterItem::HighlightOn => highlighted = true,
            RosterItem::HighlightOff => {
                highlighted = false;
                past_current = true;
            }
            RosterItem::Entry(speech) => {
                let style = if highlighted {
                    theme.current_style()
                } else if past_current {
                    theme.pending_style(speech.is_response())
                } else {
                    theme.past_style()
                };
                lines.push(Line::styled(
                    entry_text(discussion, speech, width, highlighted),
                    style,
                ));
            }
        }
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
