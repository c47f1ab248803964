// TUI application state
//
// Owns the one Discussion for the session plus everything the screen needs
// around it: the prompt, input mode, hints toggle, toast and theme. Commands
// from the key map are applied here.

use super::components::formatters::display_name;
use super::components::Toast;
use super::input::{Command, InputMode, Prompt, SpeechKind};
use super::theme::{Theme, ThemeKind};
use crate::clock::{SecondClock, TimeSource};
use crate::config::Config;
use crate::discussion::{prefix_match, Discussion};
use crate::logging::LogBuffer;

/// Main application state for the TUI
pub struct App {
    pub discussion: Discussion,

    /// Name being typed and its autocomplete guess
    pub prompt: Prompt,

    /// What the next key press means
    pub mode: InputMode,

    /// Whether the key hints sidebar is shown
    pub show_hints: bool,

    /// Transient notification (bad input etc.)
    pub toast: Option<Toast>,

    /// Log buffer for the status bar
    pub log_buffer: LogBuffer,

    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Clear the terminal before the next draw
    pub needs_clear: bool,

    /// Drop elapsed wall-clock time on the next clock poll
    resync_clock: bool,
}

impl App {
    pub fn new(discussion: Discussion, config: &Config, log_buffer: LogBuffer) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        tracing::debug!("Using {} theme", theme_kind.name());

        Self {
            discussion,
            prompt: Prompt::default(),
            mode: InputMode::Name,
            show_hints: config.hints,
            toast: None,
            log_buffer,
            theme: theme_kind.theme(),
            should_quit: false,
            needs_clear: false,
            resync_clock: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.mode == InputMode::Paused
    }

    /// Give the discussion one tick if a new second has begun
    ///
    /// Returns true when a tick was applied.
    pub fn poll_clock<S: TimeSource>(&mut self, clock: &mut SecondClock<S>) -> bool {
        if self.resync_clock {
            clock.resync();
            self.resync_clock = false;
            return false;
        }
        if self.is_paused() {
            return false;
        }
        if clock.poll() {
            self.discussion.tick();
            return true;
        }
        false
    }

    /// Drop the toast once it has been on screen long enough
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Insert(c) => {
                self.prompt.insert(c);
                self.refresh_guess();
            }
            Command::Backspace => {
                self.prompt.backspace();
                self.refresh_guess();
            }
            Command::Complete => {
                if self.prompt.accept_guess() {
                    self.refresh_guess();
                }
            }
            Command::Submit => {
                if !self.prompt.is_blank() {
                    self.mode = InputMode::Kind;
                }
            }
            Command::Choose(kind) => self.add_speech(kind),
            Command::Cancel => match self.mode {
                InputMode::Kind => self.mode = InputMode::Name,
                _ => self.prompt.clear(),
            },
            Command::Advance => self.discussion.advance(),
            Command::Rewind => self.discussion.rewind(),
            Command::Pause => {
                self.mode = InputMode::Paused;
                tracing::info!("Clock paused");
            }
            Command::Resume => {
                self.mode = InputMode::Name;
                self.resync_clock = true;
                tracing::info!("Clock resumed");
            }
            Command::ToggleHints => self.show_hints = !self.show_hints,
            Command::Redraw => self.needs_clear = true,
            Command::Quit => self.should_quit = true,
        }
    }

    fn add_speech(&mut self, kind: SpeechKind) {
        let (is_response, force_now) = match kind {
            SpeechKind::NewPoint => (false, false),
            SpeechKind::Response => (true, false),
            SpeechKind::ForceNow => (
                self.discussion
                    .current_speech()
                    .is_some_and(|speech| speech.is_response()),
                true,
            ),
        };

        if let Err(e) = self
            .discussion
            .add_speech(self.prompt.text(), is_response, force_now)
        {
            tracing::warn!("Rejected speaker {:?}: {}", self.prompt.text(), e);
            self.toast = Some(Toast::new(capitalize_first(&e.to_string())));
        }

        self.prompt.clear();
        self.mode = InputMode::Name;
    }

    fn refresh_guess(&mut self) {
        let guess = self
            .discussion
            .find_speaker(self.prompt.text(), prefix_match)
            .map(|speaker| display_name(speaker.name()));
        self.prompt.set_guess(guess);
    }
}

fn capitalize_first(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
