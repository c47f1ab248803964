// Exit summary - printed to stdout after the terminal is restored

use crate::config::SummaryFormat;
use crate::discussion::DiscussionSummary;
use crate::tui::components::formatters::{display_name, format_time};
use anyhow::{Context, Result};
use std::fmt::Write;

pub fn print(summary: &DiscussionSummary, format: SummaryFormat) -> Result<()> {
    match format {
        SummaryFormat::Text => print!("{}", render_text(summary)),
        SummaryFormat::Json => {
            let json = serde_json::to_string_pretty(summary)
                .context("Failed to serialize discussion summary")?;
            println!("{}", json);
        }
        SummaryFormat::None => {}
    }
    Ok(())
}

pub fn render_text(summary: &DiscussionSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Discussion: {} over {} speeches ({})",
        format_time(summary.total_duration),
        summary.speeches_held,
        summary.priority_mode.label()
    );

    if summary.pending_new_points + summary.pending_responses > 0 {
        let _ = writeln!(
            out,
            "Still waiting: {} new points, {} responses",
            summary.pending_new_points, summary.pending_responses
        );
    }

    if summary.speakers.is_empty() {
        return out;
    }

    let name_width = summary
        .speakers
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Speaker".len());

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<name_width$}  {:>8}  {:>8}", "Speaker", "Time", "Speeches");

    let mut speakers: Vec<_> = summary.speakers.iter().collect();
    speakers.sort_by(|a, b| b.total_speaking_time.cmp(&a.total_speaking_time));
    for speaker in speakers {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>8}  {:>8}",
            display_name(&speaker.name),
            format_time(speaker.total_speaking_time),
            speaker.speeches_given
        );
    }

    out
}
