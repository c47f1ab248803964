// Theme system for the TUI
//
// Each theme defines colors for every element the timer draws. The
// terminal theme leaves colors to the terminal and relies on modifiers.

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Terminal,
}

impl ThemeKind {
    /// Parse a theme name from config. Unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "terminal" | "none" => ThemeKind::Terminal,
            "dark" => ThemeKind::Dark,
            other => {
                tracing::warn!("Unknown theme '{}', using dark", other);
                ThemeKind::Dark
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
            ThemeKind::Terminal => "terminal",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Terminal => Theme::terminal(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub title: Color,

    // Roster
    pub past: Color,
    pub current: Color,
    pub new_point: Color,
    pub response: Color,
    pub rule: Color,

    // Clock and prompt
    pub clock: Color,
    pub paused: Color,
    pub guess: Color,

    // Status bar
    pub status_bar: Color,
    pub log_warn: Color,
    pub log_error: Color,

    // Toast
    pub toast_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            title: Color::Cyan,

            past: Color::DarkGray,
            current: Color::Yellow,
            new_point: Color::White,
            response: Color::LightBlue,
            rule: Color::Gray,

            clock: Color::Cyan,
            paused: Color::Red,
            guess: Color::DarkGray,

            status_bar: Color::Green,
            log_warn: Color::Yellow,
            log_error: Color::Red,

            toast_border: Color::Yellow,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            title: Color::Blue,

            past: Color::Gray,
            current: Color::Rgb(184, 134, 11), // Dark goldenrod
            new_point: Color::Black,
            response: Color::Blue,
            rule: Color::DarkGray,

            clock: Color::Blue,
            paused: Color::Red,
            guess: Color::Gray,

            status_bar: Color::DarkGray,
            log_warn: Color::Rgb(184, 134, 11),
            log_error: Color::Red,

            toast_border: Color::Blue,
        }
    }

    /// Terminal defaults only
    pub fn terminal() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Reset,
            border: Color::Reset,
            title: Color::Reset,

            past: Color::Reset,
            current: Color::Reset,
            new_point: Color::Reset,
            response: Color::Reset,
            rule: Color::Reset,

            clock: Color::Reset,
            paused: Color::Reset,
            guess: Color::Reset,

            status_bar: Color::Reset,
            log_warn: Color::Reset,
            log_error: Color::Reset,

            toast_border: Color::Reset,
        }
    }

    /// Style for the current speech row
    pub fn current_style(&self) -> Style {
        Style::default()
            .fg(self.current)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for already-held speeches
    pub fn past_style(&self) -> Style {
        Style::default().fg(self.past).add_modifier(Modifier::DIM)
    }

    pub fn pending_style(&self, is_response: bool) -> Style {
        let color = if is_response {
            self.response
        } else {
            self.new_point
        };
        Style::default().fg(color)
    }
}
