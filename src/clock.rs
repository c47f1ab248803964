// Second clock - turns wall-clock time into discrete discussion ticks
//
// The event loop polls this several times a second. A tick is due whenever the
// whole wall-clock second has moved past the last one recorded. Several missed
// seconds still produce a single tick, and leaving pause re-synchronizes to
// the current second without ticking.

use chrono::Utc;

/// Source of whole wall-clock seconds
pub trait TimeSource {
    fn now_secs(&self) -> i64;
}

/// Real time, via chrono
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn now_secs(&self) -> i64 {
        Utc::now().timestamp()
    }
}

#[derive(Debug)]
pub struct SecondClock<S: TimeSource = WallClock> {
    source: S,
    last_recorded: i64,
}

impl SecondClock<WallClock> {
    pub fn new() -> Self {
        Self::with_source(WallClock)
    }
}

impl Default for SecondClock<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TimeSource> SecondClock<S> {
    pub fn with_source(source: S) -> Self {
        let last_recorded = source.now_secs();
        Self {
            source,
            last_recorded,
        }
    }

    /// Returns true when a tick is due, and records the current second
    pub fn poll(&mut self) -> bool {
        let now = self.source.now_secs();
        if now > self.last_recorded {
            self.last_recorded = now;
            true
        } else {
            false
        }
    }

    /// Forget any seconds elapsed since the last poll
    pub fn resync(&mut self) {
        self.last_recorded = self.source.now_secs();
    }
}
