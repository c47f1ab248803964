// A single turn on the floor
//
// Speeches know who is speaking and for how long, never where they sit in the
// speaking order. Position is tracked by the Discussion alone.

use super::speaker::{Roster, SpeakerId};

/// Stable handle to a speech, independent of pool or history position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeechId(usize);

impl SpeechId {
    pub(super) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Speech {
    speaker: SpeakerId,
    is_response: bool,
    duration: u64,
    /// Set the first time this speech becomes current
    started: bool,
}

impl Speech {
    pub(super) fn new(speaker: SpeakerId, is_response: bool) -> Self {
        Self {
            speaker,
            is_response,
            duration: 0,
            started: false,
        }
    }

    pub fn speaker(&self) -> SpeakerId {
        self.speaker
    }

    pub fn is_response(&self) -> bool {
        self.is_response
    }

    /// Seconds this speech has been current
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// One second on the floor, credited to the speaker as well
    pub(super) fn tick(&mut self, roster: &mut Roster) {
        self.duration += 1;
        roster.tick(self.speaker);
    }

    /// Returns true only on the first call
    pub(super) fn mark_started(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_credits_speech_and_speaker() {
        let mut roster = Roster::new();
        let who = roster.find_or_create("Evan").unwrap();
        let mut speech = Speech::new(who, false);

        speech.tick(&mut roster);
        speech.tick(&mut roster);

        assert_eq!(speech.duration(), 2);
        assert_eq!(roster.get(who).total_speaking_time(), 2);
    }

    #[test]
    fn mark_started_reports_first_time_only() {
        let mut roster = Roster::new();
        let who = roster.find_or_create("Grace").unwrap();
        let mut speech = Speech::new(who, true);

        assert!(speech.mark_started());
        assert!(!speech.mark_started());
        assert!(speech.is_response());
    }
}
