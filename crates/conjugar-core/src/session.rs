//! The drill session: the single owner of catalog, filters, card, and stats.
//!
//! Presentation layers talk to a [`Session`] only. Scored answers flow from
//! the drill engine straight into the statistics tracker here, so nothing
//! else can mutate the counters.

use std::sync::Arc;

use rand::Rng;

use crate::catalog::Catalog;
use crate::drill::{DrillEngine, DrillFilters};
use crate::error::DrillError;
use crate::model::{Card, Outcome, Tense, Verb};
use crate::statistics::{Progress, SessionStats, StatsTracker};
use crate::storage::KeyValueStore;

pub struct Session<S: KeyValueStore, R: Rng> {
    catalog: Catalog,
    engine: DrillEngine,
    tracker: StatsTracker<S>,
    rng: R,
}

impl<S: KeyValueStore, R: Rng> Session<S, R> {
    /// Start a session with default filters, loading stats from `store`.
    pub fn new(catalog: Catalog, store: S, rng: R) -> Self {
        let filters = DrillFilters::new(&catalog);
        Self {
            engine: DrillEngine::new(filters),
            tracker: StatsTracker::load(store),
            catalog,
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn list_verbs(&self) -> &[Arc<Verb>] {
        self.catalog.verbs()
    }

    pub fn filters(&self) -> &DrillFilters {
        self.engine.filters()
    }

    pub fn set_active_tenses(&mut self, tenses: impl IntoIterator<Item = Tense>) -> bool {
        self.engine.filters_mut().set_active_tenses(tenses)
    }

    pub fn set_active_verb_ids<I, T>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.engine.filters_mut().set_active_verb_ids(ids)
    }

    pub fn set_target_card_count(&mut self, count: u32) -> Result<(), DrillError> {
        self.engine.filters_mut().set_target_card_count(count)
    }

    pub fn toggle_tense(&mut self, tense: Tense) {
        self.engine.filters_mut().toggle_tense(tense);
    }

    pub fn toggle_verb(&mut self, id: &str) {
        self.engine.filters_mut().toggle_verb(id);
    }

    pub fn toggle_all_verbs(&mut self) {
        self.engine.filters_mut().toggle_all_verbs(&self.catalog);
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.engine.current_card()
    }

    pub fn feedback(&self) -> Option<Outcome> {
        self.engine.feedback()
    }

    /// Draw the next card; `None` when the filters leave nothing to draw.
    pub fn draw_card(&mut self) -> Option<&Card> {
        self.engine.draw_card(&self.catalog, &mut self.rng)
    }

    /// Score an answer and record the outcome.
    pub fn evaluate(&mut self, submitted: &str) -> Option<Outcome> {
        let outcome = self.engine.evaluate(submitted)?;
        self.tracker.record(outcome);
        Some(outcome)
    }

    pub fn input(&self) -> &str {
        self.engine.input()
    }

    /// Update the answer buffer; ignored once the current card is scored.
    pub fn set_input(&mut self, text: &str) {
        self.engine.set_input(text);
    }

    /// Score the answer buffer and record the outcome.
    pub fn submit(&mut self) -> Option<Outcome> {
        let outcome = self.engine.submit()?;
        self.tracker.record(outcome);
        Some(outcome)
    }

    pub fn stats(&self) -> SessionStats {
        self.tracker.stats()
    }

    pub fn reset_stats(&mut self) {
        self.tracker.reset();
    }

    pub fn accuracy(&self) -> u32 {
        self.tracker.stats().accuracy()
    }

    /// Progress toward the current target card count.
    pub fn progress(&self) -> Progress {
        self.tracker
            .stats()
            .progress(self.engine.filters().target_card_count())
    }

    pub fn into_store(self) -> S {
        self.tracker.into_store()
    }
}
