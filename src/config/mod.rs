//! Configuration for the discussion timer
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (highest priority, applied by `cli`)
//! 2. Environment variables
//! 3. Config file (~/.config/speakeasy/config.toml)
//! 4. Built-in defaults (lowest priority)

use crate::discussion::{DiscussionOptions, PriorityMode};
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;


pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Exit Summary
// ─────────────────────────────────────────────────────────────────────────────

/// What to print once the TUI has closed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    /// Plain speaker table (default)
    #[default]
    Text,
    /// One JSON document
    Json,
    /// Print nothing
    None,
}

impl SummaryFormat {
    /// Parse format string from config. Unknown values return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "none" | "off" => Some(Self::None),
            _ => None,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::None => "none",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Ordering policy for pending speeches
    pub priority_mode: PriorityMode,

    /// Show the key hints panel at startup
    pub hints: bool,

    /// Check scheduler invariants after every command (debug aid)
    pub audit: bool,

    /// Theme name: "dark", "light", "terminal"
    pub theme: String,

    /// Exit summary format
    pub summary: SummaryFormat,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            priority_mode: PriorityMode::default(),
            hints: true,
            audit: false,
            theme: "dark".to_string(),
            summary: SummaryFormat::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Scheduler options derived from this configuration
    pub fn discussion_options(&self) -> DiscussionOptions {
        DiscussionOptions {
            priority_mode: self.priority_mode,
            audit: self.audit,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub priority_mode: Option<String>,
    pub hints: Option<bool>,
    pub audit: Option<bool>,
    pub theme: Option<String>,
    pub summary: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Truthy env flag: "1" or "true"
fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl Config {
    /// Get the config file path: ~/.config/speakeasy/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("speakeasy").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// Exits the process if the config file exists but cannot be parsed.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `speakeasy config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Layer environment lookups over a parsed config file
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Priority mode: env > file > default. Unknown names keep the default.
        let priority_mode = env("SPEAKEASY_MODE")
            .or(file.priority_mode)
            .map(|name| {
                PriorityMode::parse(&name).unwrap_or_else(|| {
                    eprintln!(
                        "Unknown priority mode {:?}, using {}",
                        name,
                        defaults.priority_mode.as_str()
                    );
                    defaults.priority_mode
                })
            })
            .unwrap_or(defaults.priority_mode);

        // Hints: SPEAKEASY_NO_HINTS disables
        let hints = env("SPEAKEASY_NO_HINTS")
            .map(|off| !is_truthy(&off))
            .or(file.hints)
            .unwrap_or(defaults.hints);

        let audit = env("SPEAKEASY_AUDIT")
            .map(|on| is_truthy(&on))
            .or(file.audit)
            .unwrap_or(defaults.audit);

        let theme = env("SPEAKEASY_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let summary = file
            .summary
            .and_then(|s| SummaryFormat::parse(&s))
            .unwrap_or(defaults.summary);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            priority_mode,
            hints,
            audit,
            theme,
            summary,
            logging,
        }
    }
}
