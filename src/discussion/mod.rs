//! Discussion scheduler
//!
//! Owns every speaker and speech of one moderated discussion and decides who
//! speaks next. A speech moves `pending -> current -> past`; `rewind` walks the
//! single back-edge `past -> current -> pending (front)`, and force-now speeches
//! skip the pending pools entirely.
//!
//! Mutation happens only through [`Discussion`] methods: the input layer issues
//! `add_speech` / `advance` / `rewind`, the clock driver issues `tick`.

mod ordering;
mod speaker;
mod speech;

#[cfg(test)]
mod tests;

pub use ordering::PriorityMode;
pub use speaker::{prefix_match, MatchFn, Roster, Speaker};
pub use speech::{Speech, SpeechId};

use serde::Serialize;
use std::collections::VecDeque;
use thiserror::Error;

/// Errors surfaced by the scheduler
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscussionError {
    #[error("speaker name must not be empty")]
    InvalidName,
}

/// One of the two pending pools, with its tracked size
#[derive(Debug, Default)]
struct PendingPool {
    speeches: VecDeque<SpeechId>,
    count: usize,
}

impl PendingPool {
    fn push_back(&mut self, id: SpeechId) {
        self.speeches.push_back(id);
        self.count += 1;
    }

    fn push_front(&mut self, id: SpeechId) {
        self.speeches.push_front(id);
        self.count += 1;
    }

    /// Remove by identity; positions are not stable across orderings
    fn remove(&mut self, id: SpeechId) -> bool {
        match self.speeches.iter().position(|&s| s == id) {
            Some(at) => {
                self.speeches.remove(at);
                self.count -= 1;
                true
            }
            None => false,
        }
    }
}

/// Construction-time options handed in by startup configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscussionOptions {
    pub priority_mode: PriorityMode,
    /// Run `audit_invariants` after every mutation
    pub audit: bool,
}

#[derive(Debug)]
pub struct Discussion {
    roster: Roster,
    /// Arena of every speech ever added, indexed by `SpeechId`
    speeches: Vec<Speech>,
    current: Option<SpeechId>,
    past: Vec<SpeechId>,
    new_points: PendingPool,
    responses: PendingPool,
    total_duration: u64,
    priority_mode: PriorityMode,
    audit: bool,
}

impl Discussion {
    pub fn new(options: DiscussionOptions) -> Self {
        if options.priority_mode == PriorityMode::FewestSpeeches {
            tracing::debug!("fewest-speeches ordering is not distinct yet, pending turns run first come first served");
        }
        Self {
            roster: Roster::new(),
            speeches: Vec::new(),
            current: None,
            past: Vec::new(),
            new_points: PendingPool::default(),
            responses: PendingPool::default(),
            total_duration: 0,
            priority_mode: options.priority_mode,
            audit: options.audit,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read interface
    // ─────────────────────────────────────────────────────────────────────

    pub fn priority_mode(&self) -> PriorityMode {
        self.priority_mode
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Whether any speech has been current yet
    pub fn has_started(&self) -> bool {
        self.current.is_some()
    }

    /// Seconds on the floor across the current speech and the history
    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }

    pub fn current_speech(&self) -> Option<&Speech> {
        self.current.map(|id| self.speech(id))
    }

    /// Previously current speeches, oldest first
    pub fn past_speeches(&self) -> impl DoubleEndedIterator<Item = &Speech> + ExactSizeIterator {
        self.past.iter().map(|&id| self.speech(id))
    }

    pub fn speech(&self, id: SpeechId) -> &Speech {
        &self.speeches[id.index()]
    }

    pub fn speaker_of(&self, speech: &Speech) -> &Speaker {
        self.roster.get(speech.speaker())
    }

    /// Roster lookup; see [`Roster::find`]
    pub fn find_speaker(&self, query: &str, matches: MatchFn) -> Option<&Speaker> {
        self.roster.find(query, matches)
    }

    /// Tracked pending counts as `(new points, responses)`
    pub fn pending_counts(&self) -> (usize, usize) {
        (self.new_points.count, self.responses.count)
    }

    /// The speaking order of pending speeches: responses first, then new
    /// points, each pool ordered by the priority mode. Recomputed per call.
    pub fn pending_order(&self) -> Vec<&Speech> {
        self.pending_order_ids()
            .into_iter()
            .map(|id| self.speech(id))
            .collect()
    }

    fn pending_order_ids(&self) -> Vec<SpeechId> {
        let mut order = self.ordered_pool(&self.responses);
        order.extend(self.ordered_pool(&self.new_points));
        order
    }

    fn ordered_pool(&self, pool: &PendingPool) -> Vec<SpeechId> {
        match self.priority_mode {
            PriorityMode::LeastTime => ordering::least_key_first(&pool.speeches, |id| {
                self.speaker_of(self.speech(id)).total_speaking_time()
            }),
            PriorityMode::Fifo | PriorityMode::FewestSpeeches => {
                pool.speeches.iter().copied().collect()
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────

    /// Queue a speech for `speaker_name`, or with `force_now` put it on the
    /// floor immediately. Before the discussion has started the new speech
    /// becomes current either way.
    pub fn add_speech(
        &mut self,
        speaker_name: &str,
        is_response: bool,
        force_now: bool,
    ) -> Result<SpeechId, DiscussionError> {
        let speaker = self.roster.find_or_create(speaker_name)?;
        let id = SpeechId::new(self.speeches.len());
        self.speeches.push(Speech::new(speaker, is_response));

        match self.current {
            None => {
                tracing::info!(speaker = %self.roster.get(speaker).name(), "discussion started");
                self.make_current(id);
            }
            Some(previous) if force_now => {
                tracing::info!(
                    speaker = %self.roster.get(speaker).name(),
                    is_response,
                    "force-now speech takes the floor"
                );
                self.past.push(previous);
                self.make_current(id);
            }
            Some(_) => {
                tracing::debug!(
                    speaker = %self.roster.get(speaker).name(),
                    is_response,
                    "speech queued"
                );
                self.pool_mut(is_response).push_back(id);
            }
        }

        self.after_mutation();
        Ok(id)
    }

    /// Move to the next speech in the speaking order. No-op when nothing is
    /// pending.
    pub fn advance(&mut self) {
        let Some(next) = self.pending_order_ids().first().copied() else {
            tracing::debug!("advance ignored: nothing pending");
            return;
        };
        let Some(previous) = self.current else {
            return;
        };

        let is_response = self.speech(next).is_response();
        let removed = self.pool_mut(is_response).remove(next);
        debug_assert!(removed, "pending order yielded a speech outside its pool");

        self.past.push(previous);
        self.make_current(next);
        // A speech that was rewound earlier brings its time back onto the floor
        self.total_duration += self.speech(next).duration();

        tracing::debug!(speech = next.index(), "advanced");
        self.after_mutation();
    }

    /// Step back to the previous speech, returning the current one to the
    /// front of its pending pool. No-op with an empty history.
    ///
    /// The returned speech is not re-sorted; under least-time-first it sits
    /// at the pool front until the next ordering is computed. Its duration is
    /// kept (and stays credited to its speaker) but leaves `total_duration`
    /// until it is current again.
    pub fn rewind(&mut self) {
        let Some(previous) = self.past.pop() else {
            tracing::debug!("rewind ignored: no history");
            return;
        };
        let Some(bumped) = self.current.replace(previous) else {
            return;
        };

        let (is_response, duration) = {
            let speech = self.speech(bumped);
            (speech.is_response(), speech.duration())
        };
        self.total_duration -= duration;
        self.pool_mut(is_response).push_front(bumped);

        tracing::debug!(speech = previous.index(), "rewound");
        self.after_mutation();
    }

    /// One elapsed second. No-op until the discussion has started.
    pub fn tick(&mut self) {
        let Some(current) = self.current else {
            return;
        };
        self.total_duration += 1;
        self.speeches[current.index()].tick(&mut self.roster);
        self.after_mutation();
    }

    fn make_current(&mut self, id: SpeechId) {
        self.current = Some(id);
        let speech = &mut self.speeches[id.index()];
        if speech.mark_started() {
            self.roster.record_speech_given(speech.speaker());
        }
    }

    fn pool_mut(&mut self, is_response: bool) -> &mut PendingPool {
        if is_response {
            &mut self.responses
        } else {
            &mut self.new_points
        }
    }

    fn after_mutation(&self) {
        if self.audit {
            self.audit_invariants();
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Diagnostics
    // ─────────────────────────────────────────────────────────────────────

    /// Recompute the tracked invariants from scratch and describe every one
    /// that does not hold
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if let Some(current) = self.current_speech() {
            let summed =
                current.duration() + self.past_speeches().map(Speech::duration).sum::<u64>();
            if summed != self.total_duration {
                violations.push(format!(
                    "total duration {} != current + past {}",
                    self.total_duration, summed
                ));
            }
        } else {
            if self.total_duration != 0 {
                violations.push(format!(
                    "total duration {} before discussion start",
                    self.total_duration
                ));
            }
            if !self.speeches.is_empty() {
                violations.push("speeches exist but none is current".to_string());
            }
        }

        for (label, pool, want_response) in [
            ("new point", &self.new_points, false),
            ("response", &self.responses, true),
        ] {
            if pool.count != pool.speeches.len() {
                violations.push(format!(
                    "{} pool tracks {} but holds {}",
                    label,
                    pool.count,
                    pool.speeches.len()
                ));
            }
            if let Some(stray) = pool
                .speeches
                .iter()
                .find(|&&id| self.speech(id).is_response() != want_response)
            {
                violations.push(format!("speech {} is in the {} pool", stray.index(), label));
            }
        }

        // Every speech sits in exactly one location
        let mut seen = vec![0u8; self.speeches.len()];
        let locations = self
            .current
            .iter()
            .chain(self.past.iter())
            .chain(self.new_points.speeches.iter())
            .chain(self.responses.speeches.iter());
        for id in locations {
            seen[id.index()] += 1;
        }
        for (index, times) in seen.iter().enumerate() {
            if *times != 1 {
                violations.push(format!("speech {} appears {} times", index, times));
            }
        }

        let mut spoken = vec![0u64; self.roster.len()];
        for speech in &self.speeches {
            spoken[speech.speaker().index()] += speech.duration();
        }
        for ((_, speaker), expected) in self.roster.iter().zip(spoken) {
            if speaker.total_speaking_time() != expected {
                violations.push(format!(
                    "{} total {} != sum of speeches {}",
                    speaker.name(),
                    speaker.total_speaking_time(),
                    expected
                ));
            }
        }

        violations
    }

    /// Development-time contract check. Violations are logged and, in debug
    /// builds, abort via `debug_assert!`.
    pub fn audit_invariants(&self) {
        let violations = self.invariant_violations();
        for violation in &violations {
            tracing::error!(%violation, "discussion invariant broken");
        }
        debug_assert!(
            violations.is_empty(),
            "discussion invariants broken: {:?}",
            violations
        );
    }

    // ─────────────────────────────────────────────────────────────────────
    // Summary
    // ─────────────────────────────────────────────────────────────────────

    pub fn summary(&self) -> DiscussionSummary {
        let (pending_new_points, pending_responses) = self.pending_counts();
        DiscussionSummary {
            total_duration: self.total_duration,
            priority_mode: self.priority_mode,
            speeches_held: self.past.len() + usize::from(self.current.is_some()),
            pending_new_points,
            pending_responses,
            speakers: self
                .roster
                .iter()
                .map(|(_, s)| SpeakerSummary {
                    name: s.name().to_string(),
                    total_speaking_time: s.total_speaking_time(),
                    speeches_given: s.speeches_given(),
                })
                .collect(),
        }
    }
}

/// End-of-discussion report
#[derive(Debug, Clone, Serialize)]
pub struct DiscussionSummary {
    pub total_duration: u64,
    pub priority_mode: PriorityMode,
    /// Speeches that have been current at least once and are not pending
    pub speeches_held: usize,
    pub pending_new_points: usize,
    pub pending_responses: usize,
    pub speakers: Vec<SpeakerSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeakerSummary {
    pub name: String,
    pub total_speaking_time: u64,
    pub speeches_given: u32,
}
