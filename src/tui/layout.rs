//! Responsive breakpoint system for TUI layout decisions.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the key hints sidebar
pub const HINTS_WIDTH: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: roster only
    Compact,
    /// 60-99 cols: roster plus hints
    Normal,
    /// 100+ cols: full status text
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Screen regions for one frame
#[derive(Debug, Clone, Copy)]
pub struct Regions {
    pub roster: Rect,
    pub hints: Option<Rect>,
    pub clock: Rect,
    pub prompt: Rect,
    pub status: Rect,
}

/// Split the frame into roster, clock bar, prompt and status bar, with the
/// hints sidebar beside the roster when requested and wide enough.
pub fn regions(area: Rect, show_hints: bool) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Roster (+ hints)
            Constraint::Length(3), // Clock bar
            Constraint::Length(4), // Prompt + autocomplete line
            Constraint::Length(2), // Status bar
        ])
        .split(area);

    let bp = Breakpoint::from_width(area.width);
    let (roster, hints) = if show_hints && bp.at_least(Breakpoint::Normal) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(HINTS_WIDTH)])
            .split(rows[0]);
        (cols[0], Some(cols[1]))
    } else {
        (rows[0], None)
    };

    Regions {
        roster,
        hints,
        clock: rows[1],
        prompt: rows[2],
        status: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(200), Breakpoint::Wide);
    }

    #[test]
    fn at_least_comparisons() {
        let normal = Breakpoint::Normal;
        assert!(normal.at_least(Breakpoint::Compact));
        assert!(normal.at_least(Breakpoint::Normal));
        assert!(!normal.at_least(Breakpoint::Wide));
    }

    #[test]
    fn hints_hidden_on_narrow_terminals() {
        let narrow = regions(Rect::new(0, 0, 50, 30), true);
        assert!(narrow.hints.is_none());
        assert_eq!(narrow.roster.width, 50);

        let wide = regions(Rect::new(0, 0, 100, 30), true);
        let hints = wide.hints.expect("hints fit at 100 cols");
        assert_eq!(hints.width, HINTS_WIDTH);
        assert_eq!(wide.roster.width, 100 - HINTS_WIDTH);
    }

    #[test]
    fn hints_toggle_off() {
        let layout = regions(Rect::new(0, 0, 100, 30), false);
        assert!(layout.hints.is_none());
    }

    #[test]
    fn fixed_rows_are_reserved() {
        let layout = regions(Rect::new(0, 0, 80, 30), false);
        assert_eq!(layout.clock.height, 3);
        assert_eq!(layout.prompt.height, 4);
        assert_eq!(layout.status.height, 2);
        assert_eq!(layout.roster.height, 30 - 9);
    }
}
