//! Rule-based conjugation generator.
//!
//! Present and preterite forms are `stem + ending`, where the stem is the
//! infinitive without its two-letter suffix. Future forms append a shared
//! set of endings to the whole infinitive.

use crate::model::{ConjugationTable, ConjugationType, GrammaticalPerson, Tense};

const AR_PRESENT: [&str; 6] = ["o", "as", "a", "amos", "áis", "an"];
const AR_PRETERITE: [&str; 6] = ["é", "aste", "ó", "amos", "asteis", "aron"];

const ER_PRESENT: [&str; 6] = ["o", "es", "e", "emos", "éis", "en"];
const ER_PRETERITE: [&str; 6] = ["í", "iste", "ió", "imos", "isteis", "ieron"];

const IR_PRESENT: [&str; 6] = ["o", "es", "e", "imos", "ís", "en"];
const IR_PRETERITE: [&str; 6] = ER_PRETERITE;

/// Future endings, identical for every conjugation type.
pub const FUTURE_ENDINGS: [&str; 6] = ["é", "ás", "á", "emos", "éis", "án"];

/// Person-ordered endings for a conjugation type and tense.
pub fn endings(conjugation_type: ConjugationType, tense: Tense) -> &'static [&'static str; 6] {
    match (conjugation_type, tense) {
        (_, Tense::Future) => &FUTURE_ENDINGS,
        (ConjugationType::First, Tense::Present) => &AR_PRESENT,
        (ConjugationType::First, Tense::Preterite) => &AR_PRETERITE,
        (ConjugationType::Second, Tense::Present) => &ER_PRESENT,
        (ConjugationType::Second, Tense::Preterite) => &ER_PRETERITE,
        (ConjugationType::Third, Tense::Present) => &IR_PRESENT,
        (ConjugationType::Third, Tense::Preterite) => &IR_PRETERITE,
    }
}

/// The infinitive with its final two characters removed.
pub fn stem(infinitive: &str) -> &str {
    match infinitive.char_indices().rev().nth(1) {
        Some((idx, _)) => &infinitive[..idx],
        None => "",
    }
}

/// Conjugate a single cell.
pub fn conjugate(
    infinitive: &str,
    conjugation_type: ConjugationType,
    tense: Tense,
    person: GrammaticalPerson,
) -> String {
    let base = match tense {
        Tense::Future => infinitive,
        Tense::Present | Tense::Preterite => stem(infinitive),
    };
    let ending = endings(conjugation_type, tense)[person.index()];
    format!("{base}{ending}")
}

/// Build the full 3×6 table using the regular endings for `conjugation_type`.
///
/// The suffix of `infinitive` is not checked against `conjugation_type`.
pub fn generate_table(infinitive: &str, conjugation_type: ConjugationType) -> ConjugationTable {
    let forms = Tense::ALL.map(|tense| {
        GrammaticalPerson::ALL.map(|person| conjugate(infinitive, conjugation_type, tense, person))
    });
    ConjugationTable::from_forms(forms)
}
