// Roster view model
//
// Flattens the discussion into the typed sequence the roster panel draws:
// recent history, the current speech framed by markers, then the upcoming
// order cut to whatever rows are left. A cut queue ends with a count of the
// hidden speeches and, room permitting, the last one queued.

use crate::discussion::{Discussion, Speech};

/// Number of already-held speeches shown above the current one
pub const PAST_SHOWN: usize = 3;

/// Rows taken by the current speech and its two rules
const FRAMED_ROWS: usize = 3;

#[derive(Debug, Clone, Copy)]
pub enum RosterItem<'a> {
    Entry(&'a Speech),
    HighlightOn,
    HighlightOff,
    LineBreakOn,
    LineBreakOff,
    /// Pending speeches left out for lack of rows
    Hidden(usize),
}

/// Rows an item occupies when drawn
pub fn rows_of(item: &RosterItem<'_>) -> usize {
    match item {
        RosterItem::Entry(_)
        | RosterItem::LineBreakOn
        | RosterItem::LineBreakOff
        | RosterItem::Hidden(_) => 1,
        RosterItem::HighlightOn | RosterItem::HighlightOff => 0,
    }
}

/// Build the item stream for a panel `rows` tall
///
/// Empty before the discussion starts. The current speech always fits in
/// `rows`; its rules are dropped below three rows and past entries only get
/// the rows the current block leaves. Pending entries fill what remains.
pub fn build(discussion: &Discussion, rows: usize) -> Vec<RosterItem<'_>> {
    let Some(current) = discussion.current_speech() else {
        return Vec::new();
    };

    let framed = rows >= FRAMED_ROWS;
    let current_rows = if framed { FRAMED_ROWS } else { 1 };

    let past = discussion.past_speeches();
    let shown = rows.saturating_sub(current_rows).min(PAST_SHOWN);
    let skip = past.len().saturating_sub(shown);

    let mut items: Vec<RosterItem<'_>> = past.skip(skip).map(RosterItem::Entry).collect();
    if framed {
        items.extend([
            RosterItem::LineBreakOn,
            RosterItem::HighlightOn,
            RosterItem::Entry(current),
            RosterItem::HighlightOff,
            RosterItem::LineBreakOff,
        ]);
    } else {
        items.extend([
            RosterItem::HighlightOn,
            RosterItem::Entry(current),
            RosterItem::HighlightOff,
        ]);
    }

    let used: usize = items.iter().map(rows_of).sum();
    push_pending(&mut items, discussion.pending_order(), rows.saturating_sub(used));

    items
}

/// Append up to `rows` rows of the pending order
///
/// On overflow the last row shown is the final queued speech, preceded by a
/// `Hidden` count. With only two rows the head entry is kept instead.
fn push_pending<'a>(items: &mut Vec<RosterItem<'a>>, pending: Vec<&'a Speech>, rows: usize) {
    if pending.len() <= rows || rows < 2 {
        items.extend(pending.into_iter().take(rows).map(RosterItem::Entry));
        return;
    }

    let tail = usize::from(rows >= 3);
    let head = rows - 1 - tail;
    let hidden = pending.len() - head - tail;

    items.extend(pending[..head].iter().copied().map(RosterItem::Entry));
    items.push(RosterItem::Hidden(hidden));
    if tail == 1 {
        if let Some(&last) = pending.last() {
            items.push(RosterItem::Entry(last));
        }
    }
}
