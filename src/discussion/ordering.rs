// Pending-turn ordering policies
//
// Pools store speech ids in insertion order. The speaking order is derived
// from them fresh on every call, so nothing here mutates a pool.

use super::speech::SpeechId;
use serde::Serialize;
use std::collections::VecDeque;

/// Policy for ordering pending speeches within each pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityMode {
    /// Insertion order
    Fifo,
    /// Speakers with the least total speaking time go first
    #[default]
    LeastTime,
    /// Speakers with the fewest speeches go first (ordered as FIFO for now)
    FewestSpeeches,
}

impl PriorityMode {
    /// Parse a mode name from config or env. Unknown values return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fifo" | "fcfs" => Some(Self::Fifo),
            "least-time" | "least_time" | "brevity" => Some(Self::LeastTime),
            "fewest-speeches" | "fewest_speeches" => Some(Self::FewestSpeeches),
            _ => None,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::LeastTime => "least-time",
            Self::FewestSpeeches => "fewest-speeches",
        }
    }

    /// Short label for the clock bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fifo => "first come",
            Self::LeastTime => "least time first",
            Self::FewestSpeeches => "fewest speeches",
        }
    }
}

/// Stable insertion sort of `pool` by `key`.
///
/// Each element is placed just before the first already-placed element with a
/// strictly greater key, so equal keys keep their pool order.
pub fn least_key_first<K, F>(pool: &VecDeque<SpeechId>, key: F) -> Vec<SpeechId>
where
    K: Ord,
    F: Fn(SpeechId) -> K,
{
    let mut sorted: Vec<(K, SpeechId)> = Vec::with_capacity(pool.len());

    for &id in pool {
        let k = key(id);
        let at = sorted
            .iter()
            .position(|(placed, _)| *placed > k)
            .unwrap_or(sorted.len());
        sorted.insert(at, (k, id));
    }

    sorted.into_iter().map(|(_, id)| id).collect()
}
