// Time and name formatters
//
// Shared formatting utilities for the roster, the clock bar and the exit
// summary.

/// Format whole seconds as minutes and zero-padded seconds
///
/// Minutes are not wrapped into hours.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_time(65), "1:05");
/// assert_eq!(format_time(3661), "61:01");
/// ```
pub fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Title-case a canonical (uppercase) speaker name for display
///
/// # Examples
/// ```ignore
/// assert_eq!(display_name("MARY ANNE"), "Mary Anne");
/// ```
pub fn display_name(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Join a label and a value with dot leaders so the result fills `width`
/// columns. Falls back to a single space when they do not fit.
pub fn dot_leader(label: &str, value: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    let used = label.width() + value.width() + 2;
    if used >= width {
        return format!("{} {}", label, value);
    }
    format!("{} {} {}", label, ".".repeat(width - used), value)
}
