//! Core data model types for conjugar.
//!
//! Verbs, tenses, grammatical persons, conjugation tables, and the cards
//! the drill engine hands out.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ParseError;

/// One of the three supported indicative tenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Preterite,
    Future,
}

impl Tense {
    /// Every tense in canonical order.
    pub const ALL: [Tense; 3] = [Tense::Present, Tense::Preterite, Tense::Future];

    /// Position of this tense in [`Tense::ALL`].
    pub fn index(self) -> usize {
        match self {
            Tense::Present => 0,
            Tense::Preterite => 1,
            Tense::Future => 2,
        }
    }

    /// Spanish display name.
    pub fn spanish_name(self) -> &'static str {
        match self {
            Tense::Present => "Presente",
            Tense::Preterite => "Pretérito Indefinido",
            Tense::Future => "Futuro",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tense::Present => write!(f, "present"),
            Tense::Preterite => write!(f, "preterite"),
            Tense::Future => write!(f, "future"),
        }
    }
}

impl FromStr for Tense {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" | "presente" => Ok(Tense::Present),
            "preterite" | "pretérito" | "preterito" | "past" => Ok(Tense::Preterite),
            "future" | "futuro" => Ok(Tense::Future),
            other => Err(ParseError::UnknownTense(other.to_string())),
        }
    }
}

/// Subject category that selects the verb ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammaticalPerson {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl GrammaticalPerson {
    /// Every person in canonical order (1st-sg … 3rd-pl).
    pub const ALL: [GrammaticalPerson; 6] = [
        GrammaticalPerson::FirstSingular,
        GrammaticalPerson::SecondSingular,
        GrammaticalPerson::ThirdSingular,
        GrammaticalPerson::FirstPlural,
        GrammaticalPerson::SecondPlural,
        GrammaticalPerson::ThirdPlural,
    ];

    /// Position of this person in [`GrammaticalPerson::ALL`].
    pub fn index(self) -> usize {
        match self {
            GrammaticalPerson::FirstSingular => 0,
            GrammaticalPerson::SecondSingular => 1,
            GrammaticalPerson::ThirdSingular => 2,
            GrammaticalPerson::FirstPlural => 3,
            GrammaticalPerson::SecondPlural => 4,
            GrammaticalPerson::ThirdPlural => 5,
        }
    }

    /// Subject pronoun shown on a card.
    pub fn pronoun(self) -> &'static str {
        match self {
            GrammaticalPerson::FirstSingular => "Yo",
            GrammaticalPerson::SecondSingular => "Tú",
            GrammaticalPerson::ThirdSingular => "Él/Ella/Ud.",
            GrammaticalPerson::FirstPlural => "Nosotros",
            GrammaticalPerson::SecondPlural => "Vosotros",
            GrammaticalPerson::ThirdPlural => "Ellos/Ellas/Uds.",
        }
    }
}

impl fmt::Display for GrammaticalPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pronoun())
    }
}

/// Regular verb class, named after the infinitive suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConjugationType {
    /// `-ar` verbs.
    First,
    /// `-er` verbs.
    Second,
    /// `-ir` verbs.
    Third,
}

impl ConjugationType {
    /// The two-letter infinitive suffix for this class.
    pub fn suffix(self) -> &'static str {
        match self {
            ConjugationType::First => "ar",
            ConjugationType::Second => "er",
            ConjugationType::Third => "ir",
        }
    }

    /// Infer the class from an infinitive's ending, if it has one.
    pub fn from_infinitive(infinitive: &str) -> Option<Self> {
        let lower = infinitive.to_lowercase();
        [
            ConjugationType::First,
            ConjugationType::Second,
            ConjugationType::Third,
        ]
        .into_iter()
        .find(|t| lower.ends_with(t.suffix()))
    }
}

impl fmt::Display for ConjugationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.suffix())
    }
}

impl FromStr for ConjugationType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('-').to_lowercase().as_str() {
            "ar" | "first" | "1" => Ok(ConjugationType::First),
            "er" | "second" | "2" => Ok(ConjugationType::Second),
            "ir" | "third" | "3" => Ok(ConjugationType::Third),
            other => Err(ParseError::UnknownConjugationType(other.to_string())),
        }
    }
}

/// Surface forms for every (tense, person) pair.
///
/// Stored as a fixed 3×6 grid, so a table can never be missing a cell.
/// Serialized as `{tense: {person: form}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FormMap")]
pub struct ConjugationTable {
    forms: [[String; 6]; 3],
}

type FormMap = BTreeMap<Tense, BTreeMap<GrammaticalPerson, String>>;

impl TryFrom<FormMap> for ConjugationTable {
    type Error = String;

    fn try_from(mut map: FormMap) -> Result<Self, Self::Error> {
        let mut forms: [[String; 6]; 3] = Default::default();
        for tense in Tense::ALL {
            let mut row = map
                .remove(&tense)
                .ok_or_else(|| format!("conjugation table is missing {tense}"))?;
            for person in GrammaticalPerson::ALL {
                forms[tense.index()][person.index()] = row.remove(&person).ok_or_else(|| {
                    format!("conjugation table is missing {tense} {person:?}")
                })?;
            }
        }
        Ok(Self { forms })
    }
}

impl Serialize for ConjugationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Row<'a>(&'a [String; 6]);

        impl Serialize for Row<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for person in GrammaticalPerson::ALL {
                    map.serialize_entry(&person, &self.0[person.index()])?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(self.forms.len()))?;
        for tense in Tense::ALL {
            map.serialize_entry(&tense, &Row(self.tense(tense)))?;
        }
        map.end()
    }
}

impl ConjugationTable {
    pub(crate) fn from_forms(forms: [[String; 6]; 3]) -> Self {
        Self { forms }
    }

    /// The form for a tense and person.
    pub fn get(&self, tense: Tense, person: GrammaticalPerson) -> &str {
        &self.forms[tense.index()][person.index()]
    }

    /// The six forms of one tense, in canonical person order.
    pub fn tense(&self, tense: Tense) -> &[String; 6] {
        &self.forms[tense.index()]
    }

    /// Iterate over all cells as `(tense, person, form)`.
    pub fn iter(&self) -> impl Iterator<Item = (Tense, GrammaticalPerson, &str)> + '_ {
        Tense::ALL.into_iter().flat_map(move |tense| {
            GrammaticalPerson::ALL
                .into_iter()
                .map(move |person| (tense, person, self.get(tense, person)))
        })
    }

    /// Number of cells; always 18.
    pub fn len(&self) -> usize {
        self.forms.iter().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A catalog verb with its precomputed conjugation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    /// Stable identifier (`v-0`, `v-1`, …).
    pub id: String,
    /// Dictionary form, e.g. "Hablar".
    pub infinitive: String,
    /// English gloss.
    pub translation: String,
    pub conjugation_type: ConjugationType,
    /// Real-world regularity. Display only: generation always uses regular endings.
    pub is_regular: bool,
    /// Study hint derived from `is_regular`.
    pub rule: String,
    pub conjugation_table: ConjugationTable,
}

/// Outcome of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn is_correct(self) -> bool {
        self == Outcome::Correct
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "correct"),
            Outcome::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// One drill round: a verb, tense, and person with the answer fixed at draw time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub verb: Arc<Verb>,
    pub tense: Tense,
    pub person: GrammaticalPerson,
    pub expected_answer: String,
}

impl Card {
    /// Build a card, reading the expected answer from the verb's table.
    pub fn new(verb: Arc<Verb>, tense: Tense, person: GrammaticalPerson) -> Self {
        let expected_answer = verb.conjugation_table.get(tense, person).to_string();
        Self {
            verb,
            tense,
            person,
            expected_answer,
        }
    }
}
