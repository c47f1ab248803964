//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        format!(
            r#"# speakeasy configuration

# Speaking order for pending turns:
#   least-time       - speakers with the least total time go first (default)
#   fifo             - first come, first served
#   fewest-speeches  - reserved, currently ordered like fifo
# Responses are always called before new points.
priority_mode = "{mode}"

# Show the key hints panel (toggle at runtime with Ctrl-H)
hints = {hints}

# Check scheduler invariants after every command (development aid)
audit = {audit}

# Theme: dark, light, terminal
theme = "{theme}"

# Printed when the timer exits: text, json, none
summary = "{summary}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-memory TUI buffer)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            mode = self.priority_mode.as_str(),
            hints = self.hints,
            audit = self.audit,
            theme = self.theme,
            summary = self.summary.as_str(),
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
