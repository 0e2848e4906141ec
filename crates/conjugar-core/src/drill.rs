//! Card selection and answer scoring.
//!
//! The [`DrillEngine`] owns the filters, the current card, the pending
//! feedback, and the answer buffer. Randomness is passed in on every draw so
//! callers can use a seeded generator.

use std::collections::BTreeSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::error::DrillError;
use crate::model::{Card, GrammaticalPerson, Outcome, Tense, Verb};

/// Allowed values for [`DrillFilters::target_card_count`].
pub const CARD_COUNT_PRESETS: &[u32] = &[10, 20, 50];

pub const DEFAULT_CARD_COUNT: u32 = 20;

/// User-controlled subset of tenses and verbs eligible for drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillFilters {
    active_tenses: BTreeSet<Tense>,
    active_verb_ids: BTreeSet<String>,
    target_card_count: u32,
}

impl DrillFilters {
    /// Present tense only, every catalog verb, 20 cards.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            active_tenses: BTreeSet::from([Tense::Present]),
            active_verb_ids: catalog.ids().map(str::to_string).collect(),
            target_card_count: DEFAULT_CARD_COUNT,
        }
    }

    pub fn active_tenses(&self) -> &BTreeSet<Tense> {
        &self.active_tenses
    }

    pub fn active_verb_ids(&self) -> &BTreeSet<String> {
        &self.active_verb_ids
    }

    pub fn target_card_count(&self) -> u32 {
        self.target_card_count
    }

    pub fn is_tense_active(&self, tense: Tense) -> bool {
        self.active_tenses.contains(&tense)
    }

    pub fn is_verb_active(&self, id: &str) -> bool {
        self.active_verb_ids.contains(id)
    }

    /// Replace the active tenses. An empty set is ignored; returns whether it applied.
    pub fn set_active_tenses(&mut self, tenses: impl IntoIterator<Item = Tense>) -> bool {
        let tenses: BTreeSet<Tense> = tenses.into_iter().collect();
        if tenses.is_empty() {
            return false;
        }
        self.active_tenses = tenses;
        true
    }

    /// Replace the active verb ids. An empty set is ignored; returns whether it applied.
    pub fn set_active_verb_ids<I, T>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let ids: BTreeSet<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return false;
        }
        self.active_verb_ids = ids;
        true
    }

    pub fn set_target_card_count(&mut self, count: u32) -> Result<(), DrillError> {
        if !CARD_COUNT_PRESETS.contains(&count) {
            return Err(DrillError::UnsupportedCardCount {
                requested: count,
                allowed: CARD_COUNT_PRESETS,
            });
        }
        self.target_card_count = count;
        Ok(())
    }

    /// Add the tense, or remove it unless it is the last one.
    pub fn toggle_tense(&mut self, tense: Tense) {
        if self.active_tenses.contains(&tense) {
            if self.active_tenses.len() > 1 {
                self.active_tenses.remove(&tense);
            }
        } else {
            self.active_tenses.insert(tense);
        }
    }

    /// Add the verb, or remove it unless it is the last one.
    pub fn toggle_verb(&mut self, id: &str) {
        if self.active_verb_ids.contains(id) {
            if self.active_verb_ids.len() > 1 {
                self.active_verb_ids.remove(id);
            }
        } else {
            self.active_verb_ids.insert(id.to_string());
        }
    }

    /// Select every catalog verb, or narrow to the first one if all are selected.
    pub fn toggle_all_verbs(&mut self, catalog: &Catalog) {
        let all_selected = catalog.ids().all(|id| self.active_verb_ids.contains(id));
        if all_selected {
            if let Some(first) = catalog.ids().next() {
                self.active_verb_ids = BTreeSet::from([first.to_string()]);
            }
        } else {
            self.active_verb_ids = catalog.ids().map(str::to_string).collect();
        }
    }
}

/// Draws cards from the filtered catalog and scores answers against them.
#[derive(Debug, Clone)]
pub struct DrillEngine {
    filters: DrillFilters,
    card: Option<Card>,
    feedback: Option<Outcome>,
    input: String,
}

impl DrillEngine {
    pub fn new(filters: DrillFilters) -> Self {
        Self {
            filters,
            card: None,
            feedback: None,
            input: String::new(),
        }
    }

    pub fn filters(&self) -> &DrillFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut DrillFilters {
        &mut self.filters
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    /// Outcome of the current card, once it has been scored.
    pub fn feedback(&self) -> Option<Outcome> {
        self.feedback
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Update the answer buffer. Ignored once the card has been scored.
    pub fn set_input(&mut self, text: &str) {
        if self.feedback.is_none() {
            self.input = text.to_string();
        }
    }

    /// Verbs eligible for drawing, in catalog order.
    pub fn eligible_verbs<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Arc<Verb>> {
        catalog
            .verbs()
            .iter()
            .filter(|v| self.filters.is_verb_active(&v.id))
            .collect()
    }

    /// Replace the current card with a random one from the filtered universe.
    ///
    /// Returns `None` and leaves the previous card in place when no verb or
    /// no tense is eligible.
    pub fn draw_card<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) -> Option<&Card> {
        let verbs = self.eligible_verbs(catalog);
        let tenses: Vec<Tense> = self.filters.active_tenses.iter().copied().collect();

        let verb = verbs.choose(rng)?;
        let tense = *tenses.choose(rng)?;
        let person = *GrammaticalPerson::ALL.choose(rng)?;

        let card = Card::new(Arc::clone(verb), tense, person);
        tracing::debug!(
            verb = %card.verb.infinitive,
            %tense,
            %person,
            "drew card"
        );
        self.card = Some(card);
        self.feedback = None;
        self.input.clear();
        self.card.as_ref()
    }

    /// Score `submitted` against the current card, at most once per card.
    ///
    /// Returns `None` without changing state when there is no card, the card
    /// was already scored, or the trimmed answer is empty.
    pub fn evaluate(&mut self, submitted: &str) -> Option<Outcome> {
        let card = self.card.as_ref()?;
        if self.feedback.is_some() {
            return None;
        }
        let answer = submitted.trim();
        if answer.is_empty() {
            return None;
        }
        let outcome = if answers_match(answer, &card.expected_answer) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        tracing::debug!(%outcome, expected = %card.expected_answer, "scored answer");
        self.feedback = Some(outcome);
        Some(outcome)
    }

    /// Score the answer buffer.
    pub fn submit(&mut self) -> Option<Outcome> {
        let input = self.input.clone();
        self.evaluate(&input)
    }
}

/// Case-insensitive exact match. Accents are significant.
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    submitted.trim().to_lowercase() == expected.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (Catalog, DrillEngine) {
        let catalog = Catalog::default();
        let engine = DrillEngine::new(DrillFilters::new(&catalog));
        (catalog, engine)
    }

    /// Draw until the card matches, so tests can pin a verb/tense/person.
    fn draw_specific(
        engine: &mut DrillEngine,
        catalog: &Catalog,
        verb_id: &str,
        tense: Tense,
        person: GrammaticalPerson,
    ) {
        engine.filters_mut().set_active_verb_ids([verb_id]);
        engine.filters_mut().set_active_tenses([tense]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let card = engine.draw_card(catalog, &mut rng).unwrap();
            if card.person == person {
                return;
            }
        }
        panic!("never drew {verb_id} {tense} {person}");
    }

    #[test]
    fn default_filters() {
        let (catalog, engine) = setup();
        let filters = engine.filters();
        assert_eq!(filters.active_tenses().len(), 1);
        assert!(filters.is_tense_active(Tense::Present));
        assert_eq!(filters.active_verb_ids().len(), catalog.len());
        assert_eq!(filters.target_card_count(), 20);
    }

    #[test]
    fn removing_last_tense_is_noop() {
        let (_, mut engine) = setup();
        engine.filters_mut().toggle_tense(Tense::Present);
        assert_eq!(engine.filters().active_tenses().len(), 1);
        assert!(engine.filters().is_tense_active(Tense::Present));

        engine.filters_mut().toggle_tense(Tense::Future);
        engine.filters_mut().toggle_tense(Tense::Present);
        assert_eq!(
            engine.filters().active_tenses().iter().copied().collect::<Vec<_>>(),
            vec![Tense::Future]
        );
    }

    #[test]
    fn removing_last_verb_is_noop() {
        let (_, mut engine) = setup();
        assert!(engine.filters_mut().set_active_verb_ids(["v-3"]));
        engine.filters_mut().toggle_verb("v-3");
        assert!(engine.filters().is_verb_active("v-3"));
        engine.filters_mut().toggle_verb("v-4");
        engine.filters_mut().toggle_verb("v-3");
        assert!(!engine.filters().is_verb_active("v-3"));
        assert!(engine.filters().is_verb_active("v-4"));
    }

    #[test]
    fn empty_sets_are_rejected() {
        let (_, mut engine) = setup();
        assert!(!engine.filters_mut().set_active_tenses(Vec::<Tense>::new()));
        assert!(!engine
            .filters_mut()
            .set_active_verb_ids(Vec::<String>::new()));
        assert_eq!(engine.filters().active_tenses().len(), 1);
        assert_eq!(engine.filters().active_verb_ids().len(), 50);
    }

    #[test]
    fn toggle_all_verbs_narrows_then_widens() {
        let (catalog, mut engine) = setup();
        engine.filters_mut().toggle_all_verbs(&catalog);
        assert_eq!(
            engine.filters().active_verb_ids().iter().collect::<Vec<_>>(),
            vec!["v-0"]
        );
        engine.filters_mut().toggle_all_verbs(&catalog);
        assert_eq!(engine.filters().active_verb_ids().len(), catalog.len());
    }

    #[test]
    fn card_count_presets_only() {
        let (_, mut engine) = setup();
        engine.filters_mut().set_target_card_count(50).unwrap();
        assert_eq!(engine.filters().target_card_count(), 50);
        assert!(engine.filters_mut().set_target_card_count(15).is_err());
        assert_eq!(engine.filters().target_card_count(), 50);
    }

    #[test]
    fn draw_respects_filters() {
        let (catalog, mut engine) = setup();
        engine.filters_mut().set_active_verb_ids(["v-1", "v-2"]);
        engine
            .filters_mut()
            .set_active_tenses([Tense::Preterite, Tense::Future]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut persons = BTreeSet::new();
        for _ in 0..200 {
            let card = engine.draw_card(&catalog, &mut rng).unwrap().clone();
            assert!(card.verb.id == "v-1" || card.verb.id == "v-2");
            assert_ne!(card.tense, Tense::Present);
            assert_eq!(
                card.expected_answer,
                card.verb.conjugation_table.get(card.tense, card.person)
            );
            persons.insert(card.person);
        }
        assert_eq!(persons.len(), 6, "every person should be drawable");
    }

    #[test]
    fn draw_is_deterministic_under_seed() {
        let (catalog, mut a) = setup();
        let mut b = a.clone();
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let ca = a.draw_card(&catalog, &mut rng_a).cloned();
            let cb = b.draw_card(&catalog, &mut rng_b).cloned();
            assert_eq!(ca, cb);
        }
    }

    #[test]
    fn draw_with_no_eligible_verbs_keeps_previous_card() {
        let (catalog, mut engine) = setup();
        let mut rng = StdRng::seed_from_u64(3);
        let first = engine.draw_card(&catalog, &mut rng).cloned();
        assert!(first.is_some());

        engine.filters_mut().set_active_verb_ids(["not-in-catalog"]);
        assert!(engine.draw_card(&catalog, &mut rng).is_none());
        assert_eq!(engine.current_card().cloned(), first);
    }

    #[test]
    fn draw_clears_feedback_and_input() {
        let (catalog, mut engine) = setup();
        let mut rng = StdRng::seed_from_u64(9);
        engine.draw_card(&catalog, &mut rng);
        engine.set_input("xyz");
        engine.submit();
        assert!(engine.feedback().is_some());

        engine.draw_card(&catalog, &mut rng);
        assert_eq!(engine.feedback(), None);
        assert_eq!(engine.input(), "");
    }

    #[test]
    fn evaluate_without_card_is_noop() {
        let (_, mut engine) = setup();
        assert_eq!(engine.evaluate("hablo"), None);
    }

    #[test]
    fn evaluate_ignores_blank_input() {
        let (catalog, mut engine) = setup();
        engine.draw_card(&catalog, &mut StdRng::seed_from_u64(0));
        assert_eq!(engine.evaluate("   "), None);
        assert_eq!(engine.feedback(), None);
    }

    #[test]
    fn evaluate_is_case_and_whitespace_insensitive() {
        let (catalog, mut engine) = setup();
        draw_specific(
            &mut engine,
            &catalog,
            "v-0",
            Tense::Present,
            GrammaticalPerson::FirstSingular,
        );
        assert_eq!(engine.current_card().unwrap().expected_answer, "Hablo");
        assert_eq!(engine.evaluate(" HABLO "), Some(Outcome::Correct));
    }

    #[test]
    fn evaluate_is_accent_sensitive() {
        let (catalog, mut engine) = setup();
        draw_specific(
            &mut engine,
            &catalog,
            "v-0",
            Tense::Preterite,
            GrammaticalPerson::FirstSingular,
        );
        assert_eq!(engine.current_card().unwrap().expected_answer, "Hablé");
        assert_eq!(engine.evaluate("hable"), Some(Outcome::Incorrect));
    }

    #[test]
    fn evaluate_at_most_once_per_card() {
        let (catalog, mut engine) = setup();
        draw_specific(
            &mut engine,
            &catalog,
            "v-1",
            Tense::Present,
            GrammaticalPerson::ThirdPlural,
        );
        assert_eq!(engine.evaluate("wrong"), Some(Outcome::Incorrect));
        assert_eq!(engine.evaluate("Comen"), None);
        assert_eq!(engine.feedback(), Some(Outcome::Incorrect));
    }

    #[test]
    fn input_locked_after_scoring() {
        let (catalog, mut engine) = setup();
        engine.draw_card(&catalog, &mut StdRng::seed_from_u64(5));
        engine.set_input("abc");
        engine.submit();
        engine.set_input("def");
        assert_eq!(engine.input(), "abc");
    }

    #[test]
    fn filter_change_does_not_alter_drawn_card() {
        let (catalog, mut engine) = setup();
        draw_specific(
            &mut engine,
            &catalog,
            "v-2",
            Tense::Future,
            GrammaticalPerson::FirstSingular,
        );
        engine.filters_mut().set_active_verb_ids(["v-0"]);
        engine.filters_mut().set_active_tenses([Tense::Present]);
        assert_eq!(engine.current_card().unwrap().expected_answer, "Viviré");
        assert_eq!(engine.evaluate("viviré"), Some(Outcome::Correct));
    }

    #[test]
    fn answers_match_rules() {
        assert!(answers_match("  comEN\t", "Comen"));
        assert!(!answers_match("vivio", "Vivió"));
        assert!(answers_match("VIVIÓ", "Vivió"));
    }
}
