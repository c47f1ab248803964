// Status bar component
//
// Bottom line: roster size and pending counts, plus the most recent warning
// from the log buffer.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: Full format with labels
/// - Narrow: Compact counts
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let discussion = &app.discussion;
    let (new_points, responses) = discussion.pending_counts();
    let bp = Breakpoint::from_width(area.width);

    let counts = if discussion.roster().is_empty() {
        " No speakers yet".to_string()
    } else if bp.at_least(Breakpoint::Wide) {
        format!(
            " {} speakers │ {} responses waiting │ {} new points waiting",
            discussion.roster().len(),
            responses,
            new_points
        )
    } else {
        format!(
            " 👥 {} │ ↩ {} │ + {}",
            discussion.roster().len(),
            responses,
            new_points
        )
    };

    let mut spans = vec![Span::styled(counts, Style::default().fg(theme.status_bar))];

    if let Some(entry) = app.log_buffer.latest_warning() {
        let color = match entry.level {
            LogLevel::Error => theme.log_error,
            _ => theme.log_warn,
        };
        spans.push(Span::styled(
            format!(
                " │ {} {} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message
            ),
            Style::default().fg(color),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::discussion::{Discussion, DiscussionOptions};
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};

    fn status_line(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 2)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, 1)].symbol())
            .collect()
    }

    #[test]
    fn empty_roster_says_so() {
        let app = App::new(
            Discussion::new(DiscussionOptions::default()),
            &Config::default(),
            LogBuffer::new(),
        );
        assert!(status_line(&app, 100).contains("No speakers yet"));
    }

    #[test]
    fn wide_status_counts_pools() {
        let mut discussion = Discussion::new(DiscussionOptions::default());
        discussion.add_speech("ada", false, false).unwrap();
        discussion.add_speech("bob", true, false).unwrap();
        discussion.add_speech("cy", false, false).unwrap();
        let app = App::new(discussion, &Config::default(), LogBuffer::new());

        let line = status_line(&app, 100);
        assert!(line.contains("3 speakers"), "{}", line);
        assert!(line.contains("1 responses waiting"), "{}", line);
        assert!(line.contains("1 new points waiting"), "{}", line);
    }
}
