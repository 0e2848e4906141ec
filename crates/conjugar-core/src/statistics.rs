//! Session accuracy counters and their persistence.

use serde::{Deserialize, Serialize};

use crate::model::Outcome;
use crate::storage::KeyValueStore;

/// Storage key holding the JSON-encoded [`SessionStats`].
pub const STATS_KEY: &str = "drill_stats";

/// Correct/incorrect counters across every answered card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub correct: u64,
    pub incorrect: u64,
    #[serde(rename = "totalAnswered")]
    pub total_answered: u64,
}

impl SessionStats {
    /// Stats with the total derived from the counters; the total saturates.
    pub fn new(correct: u64, incorrect: u64) -> Self {
        Self {
            correct,
            incorrect,
            total_answered: correct.saturating_add(incorrect),
        }
    }

    /// Like [`SessionStats::new`], but `None` when the total would overflow.
    pub fn checked(correct: u64, incorrect: u64) -> Option<Self> {
        let total_answered = correct.checked_add(incorrect)?;
        Some(Self {
            correct,
            incorrect,
            total_answered,
        })
    }

    /// Percentage of correct answers, rounded; 0 when nothing was answered.
    pub fn accuracy(&self) -> u32 {
        if self.total_answered == 0 {
            return 0;
        }
        (self.correct as f64 / self.total_answered as f64 * 100.0).round() as u32
    }

    /// Split of a progress bar aimed at `target` cards.
    pub fn progress(&self, target: u32) -> Progress {
        let display_total = u64::from(target).max(self.total_answered);
        let pct = |n: u64| {
            if display_total == 0 {
                0.0
            } else {
                n as f64 / display_total as f64 * 100.0
            }
        };
        Progress {
            display_total,
            correct_pct: pct(self.correct),
            incorrect_pct: pct(self.incorrect),
        }
    }
}

/// Correct and incorrect shares of a progress bar, in percent.
///
/// The bar stretches to the number answered once the target is exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub display_total: u64,
    pub correct_pct: f64,
    pub incorrect_pct: f64,
}

/// Owns the [`SessionStats`] and writes every change through to a store.
pub struct StatsTracker<S: KeyValueStore> {
    stats: SessionStats,
    store: S,
}

impl<S: KeyValueStore> StatsTracker<S> {
    /// Load persisted stats, falling back to zero on absence or corruption.
    pub fn load(store: S) -> Self {
        let stats = match store.get(STATS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<SessionStats>(&raw) {
                Ok(saved) => SessionStats::checked(saved.correct, saved.incorrect)
                    .unwrap_or_else(|| {
                        tracing::warn!("ignoring malformed {STATS_KEY}: counters overflow");
                        SessionStats::default()
                    }),
                Err(e) => {
                    tracing::warn!("ignoring malformed {STATS_KEY}: {e}");
                    SessionStats::default()
                }
            },
            Ok(None) => SessionStats::default(),
            Err(e) => {
                tracing::warn!("failed to read {STATS_KEY}: {e}");
                SessionStats::default()
            }
        };
        tracing::debug!(
            correct = stats.correct,
            incorrect = stats.incorrect,
            "loaded session stats"
        );
        Self { stats, store }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Count one scored answer. Dropped, with a warning, once a counter is full.
    pub fn record(&mut self, outcome: Outcome) -> SessionStats {
        let SessionStats {
            correct, incorrect, ..
        } = self.stats;
        let next = match outcome {
            Outcome::Correct => correct
                .checked_add(1)
                .and_then(|c| SessionStats::checked(c, incorrect)),
            Outcome::Incorrect => incorrect
                .checked_add(1)
                .and_then(|i| SessionStats::checked(correct, i)),
        };
        let Some(next) = next else {
            tracing::warn!(%outcome, "session stats counters are full, answer not counted");
            return self.stats;
        };
        self.stats = next;
        self.persist();
        self.stats
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.stats = SessionStats::default();
        tracing::info!("session stats reset");
        self.persist();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Write-through; a failed write is logged and the in-memory value kept.
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.stats) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("failed to encode session stats: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(STATS_KEY, &json) {
            tracing::warn!("failed to persist session stats: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store_with(raw: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(STATS_KEY, raw).unwrap();
        store
    }

    #[test]
    fn load_defaults_when_absent() {
        let tracker = StatsTracker::load(MemoryStore::new());
        assert_eq!(tracker.stats(), SessionStats::default());
    }

    #[test]
    fn load_defaults_when_malformed() {
        let tracker = StatsTracker::load(store_with("{not json"));
        assert_eq!(tracker.stats(), SessionStats::default());
    }

    #[test]
    fn load_defaults_when_fields_missing() {
        let tracker = StatsTracker::load(store_with(r#"{"correct": 3}"#));
        assert_eq!(tracker.stats(), SessionStats::default());
    }

    #[test]
    fn load_defaults_when_counters_overflow() {
        let tracker = StatsTracker::load(store_with(
            r#"{"correct": 18446744073709551615, "incorrect": 1, "totalAnswered": 0}"#,
        ));
        assert_eq!(tracker.stats(), SessionStats::default());
    }

    #[test]
    fn record_stops_at_full_counters() {
        let mut tracker = StatsTracker::load(store_with(
            r#"{"correct": 18446744073709551615, "incorrect": 0, "totalAnswered": 0}"#,
        ));
        let full = SessionStats::new(u64::MAX, 0);
        assert_eq!(tracker.stats(), full);

        assert_eq!(tracker.record(Outcome::Correct), full);
        assert_eq!(tracker.record(Outcome::Incorrect), full);
        assert_eq!(tracker.stats().total_answered, u64::MAX);
    }

    #[test]
    fn new_saturates_total() {
        assert_eq!(SessionStats::new(u64::MAX, 5).total_answered, u64::MAX);
        assert_eq!(SessionStats::checked(u64::MAX, 5), None);
    }

    #[test]
    fn load_recomputes_total() {
        let tracker = StatsTracker::load(store_with(
            r#"{"correct": 3, "incorrect": 2, "totalAnswered": 99}"#,
        ));
        assert_eq!(tracker.stats(), SessionStats::new(3, 2));
        assert_eq!(tracker.stats().total_answered, 5);
    }

    #[test]
    fn record_round_trips_through_store() {
        let mut tracker = StatsTracker::load(MemoryStore::new());
        tracker.record(Outcome::Correct);
        tracker.record(Outcome::Incorrect);

        let reloaded = StatsTracker::load(tracker.into_store());
        assert_eq!(
            reloaded.stats(),
            SessionStats {
                correct: 1,
                incorrect: 1,
                total_answered: 2
            }
        );
    }

    #[test]
    fn persisted_json_uses_camel_case_total() {
        let mut tracker = StatsTracker::load(MemoryStore::new());
        tracker.record(Outcome::Correct);
        let raw = tracker.store().get(STATS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"correct":1,"incorrect":0,"totalAnswered":1}"#);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut tracker = StatsTracker::load(store_with(
            r#"{"correct": 4, "incorrect": 1, "totalAnswered": 5}"#,
        ));
        tracker.reset();
        assert_eq!(tracker.stats(), SessionStats::default());
        tracker.reset();
        assert_eq!(tracker.stats(), SessionStats::default());

        let reloaded = StatsTracker::load(tracker.into_store());
        assert_eq!(reloaded.stats(), SessionStats::default());
    }

    #[test]
    fn accuracy_rounds() {
        assert_eq!(SessionStats::default().accuracy(), 0);
        assert_eq!(SessionStats::new(2, 1).accuracy(), 67);
        assert_eq!(SessionStats::new(1, 1).accuracy(), 50);
    }

    #[test]
    fn progress_stretches_past_target() {
        let p = SessionStats::new(5, 5).progress(20);
        assert_eq!(p.display_total, 20);
        assert!((p.correct_pct - 25.0).abs() < f64::EPSILON);

        let p = SessionStats::new(15, 15).progress(20);
        assert_eq!(p.display_total, 30);
        assert!((p.correct_pct - 50.0).abs() < f64::EPSILON);
        assert!((p.incorrect_pct - 50.0).abs() < f64::EPSILON);

        let p = SessionStats::default().progress(0);
        assert_eq!(p.correct_pct, 0.0);
    }
}
