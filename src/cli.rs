// CLI module - command-line argument parsing and handlers
//
// Flags override the resolved configuration for a single run. Subcommands
// manage the config file:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path

use crate::config::{Config, SummaryFormat, VERSION};
use crate::discussion::PriorityMode;
use clap::{Parser, Subcommand};
use std::io::Write;

/// speakeasy - a speaking-order timer for moderated discussions
#[derive(Parser, Debug)]
#[command(name = "speakeasy")]
#[command(version = VERSION)]
#[command(about = "Speaking-order timer for moderated discussions", long_about = None)]
pub struct Cli {
    /// Ordering for pending turns: least-time, fifo, fewest-speeches
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<PriorityMode>,

    /// Start with the key hints panel hidden
    #[arg(long)]
    pub no_hints: bool,

    /// Check scheduler invariants after every command
    #[arg(long)]
    pub audit: bool,

    /// Theme: dark, light, terminal
    #[arg(long)]
    pub theme: Option<String>,

    /// Exit summary: text, json, none
    #[arg(long, value_parser = parse_summary)]
    pub summary: Option<SummaryFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

fn parse_mode(s: &str) -> Result<PriorityMode, String> {
    PriorityMode::parse(s)
        .ok_or_else(|| format!("unknown mode '{}' (expected least-time, fifo, fewest-speeches)", s))
}

fn parse_summary(s: &str) -> Result<SummaryFormat, String> {
    SummaryFormat::parse(s).ok_or_else(|| format!("unknown summary '{}' (expected text, json, none)", s))
}

impl Cli {
    /// Apply command-line overrides on top of env/file/default config
    pub fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.priority_mode = mode;
        }
        if self.no_hints {
            config.hints = false;
        }
        if self.audit {
            config.audit = true;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(summary) = self.summary {
            config.summary = summary;
        }
    }
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> bool {
    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show(cli);
            } else if reset {
                handle_config_reset();
            } else {
                // No flag provided, show help
                println!("Usage: speakeasy config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        None => false, // No subcommand, run the timer
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show(cli: &Cli) {
    let mut config = Config::from_env();
    cli.apply(&mut config);

    println!("# Effective configuration (flags > env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if let Err(e) = std::io::stdin().read_line(&mut input) {
            eprintln!("Error reading answer: {}", e);
            std::process::exit(1);
        }

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}
