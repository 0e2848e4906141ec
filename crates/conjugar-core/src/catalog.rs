//! The built-in verb catalog.
//!
//! Verbs are declared as raw records and enriched with their conjugation
//! tables once, when the catalog is constructed.

use std::sync::Arc;

use crate::conjugation::generate_table;
use crate::model::ConjugationType::{First as AR, Second as ER, Third as IR};
use crate::model::{ConjugationType, Verb};

/// A raw verb record before its table is generated.
#[derive(Debug, Clone, Copy)]
pub struct VerbRecord {
    pub infinitive: &'static str,
    pub translation: &'static str,
    pub conjugation_type: ConjugationType,
    pub is_regular: bool,
}

const fn verb(
    infinitive: &'static str,
    translation: &'static str,
    conjugation_type: ConjugationType,
    is_regular: bool,
) -> VerbRecord {
    VerbRecord {
        infinitive,
        translation,
        conjugation_type,
        is_regular,
    }
}

/// Catalog declaration order; ids are assigned from positions in this list.
pub const COMMON_VERBS: [VerbRecord; 50] = [
    verb("Hablar", "To speak", AR, true),
    verb("Comer", "To eat", ER, true),
    verb("Vivir", "To live", IR, true),
    verb("Caminar", "To walk", AR, true),
    verb("Correr", "To run", ER, true),
    verb("Escribir", "To write", IR, true),
    verb("Bailar", "To dance", AR, true),
    verb("Beber", "To drink", ER, true),
    verb("Abrir", "To open", IR, true),
    verb("Aprender", "To learn", ER, true),
    verb("Cocinar", "To cook", AR, true),
    verb("Cantar", "To sing", AR, true),
    verb("Viajar", "To travel", AR, true),
    verb("Mirar", "To look", AR, true),
    verb("Escuchar", "To listen", AR, true),
    verb("Comprar", "To buy", AR, true),
    verb("Vender", "To sell", ER, true),
    verb("Subir", "To go up", IR, true),
    verb("Bajar", "To go down", AR, true),
    verb("Entender", "To understand", ER, false),
    verb("Perder", "To lose", ER, false),
    verb("Ganar", "To win", AR, true),
    verb("Pagar", "To pay", AR, true),
    verb("Trabajar", "To work", AR, true),
    verb("Llamar", "To call", AR, true),
    verb("Llegar", "To arrive", AR, true),
    verb("Llevar", "To carry", AR, true),
    verb("Creer", "To believe", ER, true),
    verb("Parecer", "To seem", ER, false),
    verb("Esperar", "To wait", AR, true),
    verb("Quedar", "To stay", AR, true),
    verb("Pasar", "To pass", AR, true),
    verb("Deber", "To must", ER, true),
    verb("Dejar", "To leave", AR, true),
    verb("Seguir", "To follow", IR, false),
    verb("Tomar", "To take", AR, true),
    verb("Pensar", "To think", AR, false),
    verb("Querer", "To want", ER, false),
    verb("Sentir", "To feel", IR, false),
    verb("Preguntar", "To ask", AR, true),
    verb("Responder", "To answer", ER, true),
    verb("Ayudar", "To help", AR, true),
    verb("Gustar", "To like", AR, true),
    verb("Necesitar", "To need", AR, true),
    verb("Olvidar", "To forget", AR, true),
    verb("Recordar", "To remember", AR, false),
    verb("Explicar", "To explain", AR, true),
    verb("Estudiar", "To study", AR, true),
    verb("Terminar", "To finish", AR, true),
    verb("Empezar", "To start", AR, false),
];

/// Study hint shown alongside a card.
pub fn rule_for(conjugation_type: ConjugationType, is_regular: bool) -> String {
    if is_regular {
        format!(
            "Standard {} conjugation: follow the classic endings pattern.",
            conjugation_type.suffix()
        )
    } else {
        "Irregular stem change occurs in this verb. Pay attention to the root.".to_string()
    }
}

/// Ordered, immutable list of enriched verbs.
#[derive(Debug, Clone)]
pub struct Catalog {
    verbs: Vec<Arc<Verb>>,
}

impl Catalog {
    /// Build a catalog from raw records, generating each verb's table.
    pub fn from_records(records: &[VerbRecord]) -> Self {
        let verbs = records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                Arc::new(Verb {
                    id: format!("v-{i}"),
                    infinitive: r.infinitive.to_string(),
                    translation: r.translation.to_string(),
                    conjugation_type: r.conjugation_type,
                    is_regular: r.is_regular,
                    rule: rule_for(r.conjugation_type, r.is_regular),
                    conjugation_table: generate_table(r.infinitive, r.conjugation_type),
                })
            })
            .collect();
        Self { verbs }
    }

    /// Verbs in declaration order.
    pub fn verbs(&self) -> &[Arc<Verb>] {
        &self.verbs
    }

    /// Every verb id, in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.verbs.iter().map(|v| v.id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Verb>> {
        self.verbs.iter().find(|v| v.id == id)
    }

    /// Look up a verb by id or by infinitive (case-insensitive).
    pub fn find(&self, key: &str) -> Option<&Arc<Verb>> {
        let key = key.trim();
        self.get(key).or_else(|| {
            self.verbs
                .iter()
                .find(|v| v.infinitive.eq_ignore_ascii_case(key))
        })
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_records(&COMMON_VERBS)
    }
}
