//! Scheduler tests
//!
//! Scenario tests pin the documented orderings; the proptest section drives
//! random command sequences and checks every invariant after each step.

use super::speaker::exact_match;
use super::*;
use proptest::prelude::*;

fn discussion(mode: PriorityMode) -> Discussion {
    Discussion::new(DiscussionOptions {
        priority_mode: mode,
        audit: true,
    })
}

fn current_name(d: &Discussion) -> String {
    let speech = d.current_speech().expect("discussion should have started");
    d.speaker_of(speech).name().to_string()
}

fn order_names(d: &Discussion) -> Vec<String> {
    d.pending_order()
        .into_iter()
        .map(|s| d.speaker_of(s).name().to_string())
        .collect()
}

fn speak(d: &mut Discussion, name: &str, seconds: u64) {
    d.add_speech(name, false, true).unwrap();
    for _ in 0..seconds {
        d.tick();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Start and queueing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn first_speech_becomes_current() {
    let mut d = discussion(PriorityMode::LeastTime);
    assert!(!d.has_started());
    assert!(d.current_speech().is_none());

    d.add_speech("Imane", false, false).unwrap();

    assert!(d.has_started());
    assert_eq!(current_name(&d), "IMANE");
    assert_eq!(d.pending_counts(), (0, 0));
    assert_eq!(d.past_speeches().len(), 0);
}

#[test]
fn ticks_before_start_are_ignored() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.tick();
    d.tick();
    assert_eq!(d.total_duration(), 0);
}

#[test]
fn later_speeches_are_queued_by_kind() {
    let mut d = discussion(PriorityMode::Fifo);
    d.add_speech("Imane", false, false).unwrap();
    d.add_speech("Cici", false, false).unwrap();
    d.add_speech("Cici", true, false).unwrap();
    d.add_speech("Imane", true, false).unwrap();

    assert_eq!(d.pending_counts(), (1, 2));
    assert_eq!(d.roster().len(), 2);
    assert_eq!(current_name(&d), "IMANE");
}

#[test]
fn empty_name_is_rejected_without_side_effects() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.add_speech("Imane", false, false).unwrap();

    assert_eq!(d.add_speech("  ", false, false), Err(DiscussionError::InvalidName));
    assert_eq!(d.add_speech("", true, true), Err(DiscussionError::InvalidName));

    assert_eq!(d.pending_counts(), (0, 0));
    assert_eq!(d.roster().len(), 1);
    assert_eq!(current_name(&d), "IMANE");
}

// ─────────────────────────────────────────────────────────────────────────────
// Ordering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn least_time_first_orders_by_total_speaking_time() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.add_speech("Chair", false, false).unwrap();
    speak(&mut d, "B", 5);
    speak(&mut d, "C", 2);
    speak(&mut d, "Chair", 0);

    d.add_speech("B", false, false).unwrap();
    d.add_speech("A", false, false).unwrap();
    d.add_speech("C", false, false).unwrap();

    assert_eq!(order_names(&d), vec!["A", "C", "B"]);
}

#[test]
fn fifo_keeps_insertion_order() {
    let mut d = discussion(PriorityMode::Fifo);
    d.add_speech("Chair", false, false).unwrap();
    speak(&mut d, "B", 5);
    speak(&mut d, "Chair", 0);

    d.add_speech("B", false, false).unwrap();
    d.add_speech("A", false, false).unwrap();

    assert_eq!(order_names(&d), vec!["B", "A"]);
}

#[test]
fn fewest_speeches_falls_back_to_fifo() {
    let mut d = discussion(PriorityMode::FewestSpeeches);
    d.add_speech("Chair", false, false).unwrap();
    speak(&mut d, "B", 9);
    speak(&mut d, "Chair", 0);

    d.add_speech("B", false, false).unwrap();
    d.add_speech("A", false, false).unwrap();

    assert_eq!(order_names(&d), vec!["B", "A"]);
}

#[test]
fn responses_always_precede_new_points() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.add_speech("Chair", false, false).unwrap();
    speak(&mut d, "Talker", 30);
    speak(&mut d, "Chair", 0);

    d.add_speech("Quiet", false, false).unwrap();
    d.add_speech("Talker", true, false).unwrap();

    assert_eq!(order_names(&d), vec!["TALKER", "QUIET"]);
}

#[test]
fn least_time_ties_keep_pool_order() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.add_speech("Chair", false, false).unwrap();
    d.add_speech("Naman", false, false).unwrap();
    d.add_speech("Evan", false, false).unwrap();
    d.add_speech("Grace", false, false).unwrap();

    assert_eq!(order_names(&d), vec!["NAMAN", "EVAN", "GRACE"]);
}

#[test]
fn ordering_follows_time_spoken_since_queueing() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.add_speech("Chair", false, false).unwrap();
    d.add_speech("A", false, false).unwrap();
    d.add_speech("B", false, false).unwrap();
    assert_eq!(order_names(&d), vec!["A", "B"]);

    // A picks up time through an interrupt while still queued
    speak(&mut d, "A", 3);
    speak(&mut d, "Chair", 0);

    assert_eq!(order_names(&d), vec!["B", "A"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn advance_takes_head_of_order() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.add_speech("Chair", false, false).unwrap();
    speak(&mut d, "B", 4);
    speak(&mut d, "Chair", 0);
    d.add_speech("B", false, false).unwrap();
    d.add_speech("A", false, false).unwrap();

    d.advance();

    assert_eq!(current_name(&d), "A");
    assert_eq!(order_names(&d), vec!["B"]);
    assert_eq!(d.pending_counts(), (1, 0));
}

#[test]
fn advance_with_nothing_pending_is_noop() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.add_speech("Chair", false, false).unwrap();
    d.tick();

    d.advance();

    assert_eq!(current_name(&d), "CHAIR");
    assert_eq!(d.past_speeches().len(), 0);
    assert_eq!(d.total_duration(), 1);
}

#[test]
fn rewind_with_no_history_is_noop() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.rewind();
    assert!(!d.has_started());

    d.add_speech("Chair", false, false).unwrap();
    d.add_speech("Evan", false, false).unwrap();
    d.rewind();

    assert_eq!(current_name(&d), "CHAIR");
    assert_eq!(d.pending_counts(), (1, 0));
}

#[test]
fn advance_then_rewind_restores_current() {
    let mut d = discussion(PriorityMode::LeastTime);
    let chair = d.add_speech("Chair", false, false).unwrap();
    d.add_speech("Evan", false, false).unwrap();
    d.add_speech("Lily", true, false).unwrap();

    d.advance();
    assert_eq!(current_name(&d), "LILY");
    d.rewind();

    assert_eq!(d.current_speech().map(Speech::id), Some(chair));
    assert_eq!(d.pending_counts(), (1, 1));
    assert_eq!(d.past_speeches().len(), 0);
}

#[test]
fn rewind_puts_current_at_pool_front_without_resorting() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.add_speech("Chair", false, false).unwrap();
    d.add_speech("Talker", false, false).unwrap();
    d.add_speech("Quiet", false, false).unwrap();

    // Talker speaks; Quiet stays at zero
    d.advance();
    assert_eq!(current_name(&d), "TALKER");
    for _ in 0..10 {
        d.tick();
    }

    d.rewind();
    assert_eq!(current_name(&d), "CHAIR");

    // Pool holds [Talker, Quiet]; order recomputes from totals
    assert_eq!(order_names(&d), vec!["QUIET", "TALKER"]);

    d.advance();
    assert_eq!(current_name(&d), "QUIET");
}

#[test]
fn rewound_speech_keeps_its_duration() {
    let mut d = discussion(PriorityMode::Fifo);
    d.add_speech("Chair", false, false).unwrap();
    let evan = d.add_speech("Evan", false, false).unwrap();
    d.advance();
    d.tick();
    d.tick();

    d.rewind();

    // Evan's time leaves the floor timeline but stays credited to Evan
    assert_eq!(d.speech(evan).duration(), 2);
    assert_eq!(d.total_duration(), 0);
    assert_eq!(
        d.find_speaker("evan", exact_match).unwrap().total_speaking_time(),
        2
    );
    assert!(d.invariant_violations().is_empty());

    d.advance();
    d.tick();
    assert_eq!(d.speech(evan).duration(), 3);
    assert_eq!(d.total_duration(), 3);
}

#[test]
fn force_now_bypasses_pools() {
    let mut d = discussion(PriorityMode::LeastTime);
    let chair = d.add_speech("Chair", false, false).unwrap();
    d.add_speech("Evan", false, false).unwrap();
    d.add_speech("Lily", true, false).unwrap();

    let point = d.add_speech("Moderator", true, true).unwrap();

    assert_eq!(d.current_speech().map(Speech::id), Some(point));
    assert_eq!(d.past_speeches().last().map(Speech::id), Some(chair));
    assert_eq!(d.pending_counts(), (1, 1));
    assert_eq!(order_names(&d), vec!["LILY", "EVAN"]);
}

#[test]
fn rewinding_a_force_now_speech_queues_it() {
    let mut d = discussion(PriorityMode::Fifo);
    d.add_speech("Chair", false, false).unwrap();
    d.add_speech("Evan", true, false).unwrap();
    d.add_speech("Moderator", true, true).unwrap();

    d.rewind();

    assert_eq!(current_name(&d), "CHAIR");
    assert_eq!(order_names(&d), vec!["MODERATOR", "EVAN"]);
    assert_eq!(d.pending_counts(), (0, 2));
}

// ─────────────────────────────────────────────────────────────────────────────
// Time accounting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn ticks_credit_current_speech_and_speaker() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.add_speech("Naman", false, false).unwrap();
    d.add_speech("Cici", false, false).unwrap();
    d.tick();
    d.tick();
    d.advance();
    d.tick();
    d.add_speech("Naman", true, false).unwrap();
    d.advance();
    d.tick();

    let naman = d.find_speaker("naman", exact_match).unwrap();
    let cici = d.find_speaker("cici", exact_match).unwrap();
    assert_eq!(naman.total_speaking_time(), 3);
    assert_eq!(cici.total_speaking_time(), 1);
    assert_eq!(d.total_duration(), 4);
}

#[test]
fn speeches_given_counts_first_time_on_floor() {
    let mut d = discussion(PriorityMode::Fifo);
    d.add_speech("Chair", false, false).unwrap();
    d.add_speech("Evan", false, false).unwrap();
    d.add_speech("Evan", true, false).unwrap();

    d.advance();
    d.rewind();
    d.advance();
    d.advance();

    let evan = d.find_speaker("evan", exact_match).unwrap();
    let chair = d.find_speaker("chair", exact_match).unwrap();
    assert_eq!(evan.speeches_given(), 2);
    assert_eq!(chair.speeches_given(), 1);
}

#[test]
fn summary_reports_roster_in_registration_order() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.add_speech("Naman", false, false).unwrap();
    d.tick();
    d.add_speech("Nick", false, false).unwrap();
    d.add_speech("Cici", true, false).unwrap();

    let summary = d.summary();

    assert_eq!(summary.total_duration, 1);
    assert_eq!(summary.speeches_held, 1);
    assert_eq!(summary.pending_new_points, 1);
    assert_eq!(summary.pending_responses, 1);
    let names: Vec<_> = summary.speakers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["NAMAN", "NICK", "CICI"]);
    assert_eq!(summary.speakers[0].total_speaking_time, 1);
}

#[test]
fn prefix_lookup_through_discussion() {
    let mut d = discussion(PriorityMode::LeastTime);
    d.add_speech("Naman", false, false).unwrap();
    d.add_speech("Nick", false, false).unwrap();

    assert_eq!(d.find_speaker("NA", prefix_match).unwrap().name(), "NAMAN");
}

// ─────────────────────────────────────────────────────────────────────────────
// Random command sequences
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add {
        speaker: usize,
        is_response: bool,
        force_now: bool,
    },
    Advance,
    Rewind,
    Tick,
}

const NAMES: [&str; 5] = ["Naman", "Evan", "Grace", "Cici", "Lily"];

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..NAMES.len(), any::<bool>(), prop::bool::weighted(0.15)).prop_map(
            |(speaker, is_response, force_now)| Op::Add {
                speaker,
                is_response,
                force_now,
            }
        ),
        2 => Just(Op::Advance),
        1 => Just(Op::Rewind),
        4 => Just(Op::Tick),
    ]
}

fn mode_strategy() -> impl Strategy<Value = PriorityMode> {
    prop_oneof![
        Just(PriorityMode::Fifo),
        Just(PriorityMode::LeastTime),
        Just(PriorityMode::FewestSpeeches),
    ]
}

fn apply(d: &mut Discussion, op: &Op) {
    match *op {
        Op::Add {
            speaker,
            is_response,
            force_now,
        } => {
            d.add_speech(NAMES[speaker], is_response, force_now).unwrap();
        }
        Op::Advance => d.advance(),
        Op::Rewind => d.rewind(),
        Op::Tick => d.tick(),
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_every_command(
        mode in mode_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..80),
    ) {
        let mut d = discussion(mode);
        for op in &ops {
            apply(&mut d, op);
            let violations = d.invariant_violations();
            prop_assert!(violations.is_empty(), "after {:?}: {:?}", op, violations);

            let summed = d.current_speech().map_or(0, Speech::duration)
                + d.past_speeches().map(Speech::duration).sum::<u64>();
            prop_assert_eq!(d.total_duration(), summed);
        }
    }

    #[test]
    fn pending_counts_match_stored_speeches(
        ops in prop::collection::vec(op_strategy(), 1..60),
    ) {
        let mut d = discussion(PriorityMode::LeastTime);
        for op in &ops {
            apply(&mut d, op);
        }
        let order = d.pending_order();
        let responses = order.iter().filter(|s| s.is_response()).count();
        let new_points = order.len() - responses;
        prop_assert_eq!(d.pending_counts(), (new_points, responses));
    }

    #[test]
    fn least_time_order_is_non_decreasing_per_category(
        ops in prop::collection::vec(op_strategy(), 1..80),
    ) {
        let mut d = discussion(PriorityMode::LeastTime);
        for op in &ops {
            apply(&mut d, op);
        }
        let order = d.pending_order();
        let split = order.iter().take_while(|s| s.is_response()).count();
        prop_assert!(order[split..].iter().all(|s| !s.is_response()));

        for category in [&order[..split], &order[split..]] {
            for pair in category.windows(2) {
                let a = d.speaker_of(pair[0]).total_speaking_time();
                let b = d.speaker_of(pair[1]).total_speaking_time();
                prop_assert!(a <= b, "{} before {}", a, b);
            }
        }
    }

    #[test]
    fn advance_then_rewind_round_trips_current(
        mode in mode_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..60),
    ) {
        let mut d = discussion(mode);
        for op in &ops {
            apply(&mut d, op);
        }
        let before = d.current_speech().map(Speech::id);
        let had_pending = !d.pending_order().is_empty();

        d.advance();
        if had_pending {
            prop_assert_ne!(d.current_speech().map(Speech::id), before);
            d.rewind();
        }

        prop_assert_eq!(d.current_speech().map(Speech::id), before);
    }

    #[test]
    fn force_now_always_takes_the_floor(
        mode in mode_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..60),
        is_response in any::<bool>(),
    ) {
        let mut d = discussion(mode);
        for op in &ops {
            apply(&mut d, op);
        }
        let before = d.current_speech().map(Speech::id);
        let history = d.past_speeches().len();
        let pending = d.pending_counts();

        let id = d.add_speech("Moderator", is_response, true).unwrap();

        prop_assert_eq!(d.current_speech().map(Speech::id), Some(id));
        prop_assert_eq!(d.pending_counts(), pending);
        if let Some(before) = before {
            prop_assert_eq!(d.past_speeches().len(), history + 1);
            prop_assert_eq!(d.past_speeches().last().map(Speech::id), Some(before));
        }
    }
}
