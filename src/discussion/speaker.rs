//! Speaker registry
//!
//! Speakers are registered once, by canonical (upper-cased, trimmed) name, and
//! live for the whole discussion. The registry keeps registration order, which
//! is also the order lookups scan in.

use super::DiscussionError;

/// Stable handle to a registered speaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeakerId(usize);

impl SpeakerId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Matching predicate for roster lookups: `(canonical query, stored name)`
pub type MatchFn = fn(&str, &str) -> bool;

/// Exact match on canonical names (the default lookup)
pub fn exact_match(query: &str, name: &str) -> bool {
    query == name
}

/// Autocomplete match: the query is a non-empty prefix of the stored name
pub fn prefix_match(query: &str, name: &str) -> bool {
    !query.is_empty() && name.starts_with(query)
}

/// Canonical form of a speaker name. Returns `None` when nothing is left
/// after trimming.
pub fn canonicalize(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

#[derive(Debug, Clone)]
pub struct Speaker {
    name: String,
    total_speaking_time: u64,
    speeches_given: u32,
}

impl Speaker {
    fn new(name: String) -> Self {
        Self {
            name,
            total_speaking_time: 0,
            speeches_given: 0,
        }
    }

    /// Canonical name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seconds spoken across every speech by this speaker
    pub fn total_speaking_time(&self) -> u64 {
        self.total_speaking_time
    }

    pub fn speeches_given(&self) -> u32 {
        self.speeches_given
    }
}

/// All speakers of a discussion, in registration order
#[derive(Debug, Default)]
pub struct Roster {
    speakers: Vec<Speaker>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the speaker registered under `name`, registering it if needed
    pub fn find_or_create(&mut self, name: &str) -> Result<SpeakerId, DiscussionError> {
        let canonical = canonicalize(name).ok_or(DiscussionError::InvalidName)?;

        if let Some(id) = self.position(&canonical, exact_match) {
            return Ok(id);
        }

        tracing::debug!(speaker = %canonical, "registering speaker");
        self.speakers.push(Speaker::new(canonical));
        Ok(SpeakerId(self.speakers.len() - 1))
    }

    /// First speaker, in registration order, that `matches` the query
    pub fn find(&self, query: &str, matches: MatchFn) -> Option<&Speaker> {
        let canonical = query.trim().to_uppercase();
        self.position(&canonical, matches).map(|id| self.get(id))
    }

    fn position(&self, canonical: &str, matches: MatchFn) -> Option<SpeakerId> {
        self.speakers
            .iter()
            .position(|s| matches(canonical, &s.name))
            .map(SpeakerId)
    }

    /// Ids are only handed out by this roster, so lookup cannot miss
    pub fn get(&self, id: SpeakerId) -> &Speaker {
        &self.speakers[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpeakerId, &Speaker)> {
        self.speakers
            .iter()
            .enumerate()
            .map(|(i, s)| (SpeakerId(i), s))
    }

    pub fn len(&self) -> usize {
        self.speakers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }

    pub(super) fn tick(&mut self, id: SpeakerId) {
        self.speakers[id.0].total_speaking_time += 1;
    }

    pub(super) fn record_speech_given(&mut self, id: SpeakerId) {
        self.speakers[id.0].speeches_given += 1;
    }
}
