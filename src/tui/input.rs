// Input handling - key map and the name prompt
//
// Keys are translated into `Command`s according to the current input mode,
// then applied by the app. Keeping the mapping pure lets it be tested without
// a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the next key press means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Typing a speaker name
    #[default]
    Name,
    /// Name entered, waiting for 1 / 2 / !
    Kind,
    /// Clock paused, any key resumes
    Paused,
}

/// How a submitted name joins the discussion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechKind {
    NewPoint,
    Response,
    /// Take the floor immediately, in the current speech's category
    ForceNow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(char),
    Backspace,
    Complete,
    Submit,
    Choose(SpeechKind),
    Cancel,
    Advance,
    Rewind,
    Pause,
    Resume,
    ToggleHints,
    Redraw,
    Quit,
}

/// Map a key event to a command for the given mode
pub fn map_key(mode: InputMode, key: KeyEvent) -> Option<Command> {
    // Terminals that report key releases would otherwise double every action
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Quit works in every mode
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d')) {
        return Some(Command::Quit);
    }

    match mode {
        InputMode::Paused => Some(Command::Resume),
        InputMode::Kind => match key.code {
            KeyCode::Char('1') => Some(Command::Choose(SpeechKind::NewPoint)),
            KeyCode::Char('2') => Some(Command::Choose(SpeechKind::Response)),
            KeyCode::Char('!') => Some(Command::Choose(SpeechKind::ForceNow)),
            KeyCode::Esc => Some(Command::Cancel),
            _ => None,
        },
        InputMode::Name if ctrl => match key.code {
            KeyCode::Char('n') => Some(Command::Advance),
            KeyCode::Char('b') => Some(Command::Rewind),
            KeyCode::Char('p') => Some(Command::Pause),
            KeyCode::Char('h') => Some(Command::ToggleHints),
            KeyCode::Char('r') => Some(Command::Redraw),
            _ => None,
        },
        InputMode::Name => match key.code {
            KeyCode::Char(c) if c == ' ' || c.is_ascii_alphabetic() => Some(Command::Insert(c)),
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Tab => Some(Command::Complete),
            KeyCode::Enter => Some(Command::Submit),
            KeyCode::Esc => Some(Command::Cancel),
            KeyCode::F(1) => Some(Command::ToggleHints),
            _ => None,
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Prompt
// ─────────────────────────────────────────────────────────────────────────────

/// The "Add speaker" line and its autocomplete guess
#[derive(Debug, Default)]
pub struct Prompt {
    text: String,
    guess: Option<String>,
}

impl Prompt {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn guess(&self) -> Option<&str> {
        self.guess.as_deref()
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn set_guess(&mut self, guess: Option<String>) {
        self.guess = guess;
    }

    /// Replace the typed text with the guess. Returns false when there is none.
    pub fn accept_guess(&mut self) -> bool {
        match self.guess.take() {
            Some(guess) => {
                self.text = guess;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.guess = None;
    }
}
