//! The `conjugar drill` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use conjugar_core::catalog::Catalog;
use conjugar_core::model::{ConjugationType, Outcome, Tense};
use conjugar_core::session::Session;
use conjugar_core::storage::KeyValueStore;

/// Typed to quit the drill.
const QUIT: &str = ":q";

/// Drill options from the command line.
pub struct DrillArgs {
    pub tenses: Option<String>,
    pub verbs: Option<String>,
    pub conjugation_type: Option<String>,
    pub cards: Option<u32>,
    pub seed: Option<u64>,
}

pub fn execute(config_path: Option<PathBuf>, args: DrillArgs) -> Result<()> {
    let (config, store) = super::open_store(config_path)?;
    let catalog = Catalog::default();

    let tenses: Vec<Tense> = match &args.tenses {
        Some(list) => split_list(list)
            .map(|s| s.parse::<Tense>())
            .collect::<Result<_, _>>()?,
        None => config.default_tenses.clone(),
    };
    anyhow::ensure!(!tenses.is_empty(), "no tenses given, expected present, preterite or future");

    let verb_ids = resolve_verbs(&catalog, args.verbs.as_deref(), args.conjugation_type.as_deref())?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = Session::new(catalog, store, rng);
    session.set_target_card_count(args.cards.unwrap_or(config.target_cards))?;
    session.set_active_tenses(tenses);
    if let Some(ids) = verb_ids {
        session.set_active_verb_ids(ids);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, stdin.lock(), stdout.lock())
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Turn `--verbs` and `--type` into a set of verb ids, or `None` for all verbs.
fn resolve_verbs(
    catalog: &Catalog,
    verbs: Option<&str>,
    type_filter: Option<&str>,
) -> Result<Option<Vec<String>>> {
    let conjugation_type = type_filter
        .map(|t| t.parse::<ConjugationType>())
        .transpose()?;

    let mut ids: Vec<String> = match verbs {
        Some(list) => split_list(list)
            .map(|key| {
                catalog
                    .find(key)
                    .map(|v| v.id.clone())
                    .with_context(|| format!("unknown verb '{key}'"))
            })
            .collect::<Result<_>>()?,
        None if conjugation_type.is_some() => catalog.ids().map(str::to_string).collect(),
        None => return Ok(None),
    };

    if let Some(t) = conjugation_type {
        ids.retain(|id| catalog.get(id).is_some_and(|v| v.conjugation_type == t));
    }
    anyhow::ensure!(!ids.is_empty(), "no verbs match the given filters");
    Ok(Some(ids))
}

/// Drive the drill loop until `:q` or end of input.
pub fn run<S, R, I, O>(session: &mut Session<S, R>, input: I, mut out: O) -> Result<()>
where
    S: KeyValueStore,
    R: rand::Rng,
    I: BufRead,
    O: Write,
{
    let mut lines = input.lines();
    let target = session.filters().target_card_count();
    let mut answered = 0u32;

    'cards: loop {
        let Some(card) = session.draw_card().cloned() else {
            writeln!(out, "No verbs or tenses selected. Adjust --verbs or --tenses.")?;
            break;
        };

        writeln!(out)?;
        writeln!(
            out,
            "[{}/{}] {} — {}",
            answered + 1,
            target,
            card.tense.spanish_name(),
            if card.verb.is_regular { "regular" } else { "irregular" }
        )?;
        writeln!(
            out,
            "{} ... {} ({})",
            card.person.pronoun(),
            card.verb.infinitive,
            card.verb.translation
        )?;

        let outcome = loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                break 'cards;
            };
            let line = line.context("failed to read answer")?;
            if line.trim() == QUIT {
                break 'cards;
            }
            if let Some(outcome) = session.evaluate(&line) {
                break outcome;
            }
        };
        answered += 1;

        match outcome {
            Outcome::Correct => writeln!(out, "Correct! {}", card.expected_answer)?,
            Outcome::Incorrect => {
                writeln!(out, "Incorrect. Expected: {}", card.expected_answer)?;
                writeln!(out, "Hint: {}", card.verb.rule)?;
            }
        }
    }

    let stats = session.stats();
    let progress = session.progress();
    writeln!(out)?;
    writeln!(
        out,
        "Session: {answered} answered. Totals: {} correct, {} wrong, {}% accuracy",
        stats.correct,
        stats.incorrect,
        session.accuracy()
    )?;
    writeln!(
        out,
        "Progress: {:.0}% correct, {:.0}% wrong of {} cards",
        progress.correct_pct, progress.incorrect_pct, progress.display_total
    )?;
    Ok(())
}
