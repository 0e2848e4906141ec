//! The `conjugar conjugate` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use conjugar_core::catalog::Catalog;
use conjugar_core::model::{GrammaticalPerson, Tense};

pub fn execute(key: String, json: bool) -> Result<()> {
    let catalog = Catalog::default();
    let Some(verb) = catalog.find(&key) else {
        anyhow::bail!("unknown verb '{key}', see `conjugar verbs`");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&**verb)?);
        return Ok(());
    }

    println!(
        "{} ({}) — {} verb",
        verb.infinitive, verb.translation, verb.conjugation_type
    );
    println!("{}\n", verb.rule);

    let mut table = Table::new();
    let mut header = vec![Cell::new("")];
    header.extend(Tense::ALL.iter().map(|t| Cell::new(t.spanish_name())));
    table.set_header(header);

    for person in GrammaticalPerson::ALL {
        let mut row = vec![Cell::new(person.pronoun())];
        row.extend(
            Tense::ALL
                .iter()
                .map(|&t| Cell::new(verb.conjugation_table.get(t, person))),
        );
        table.add_row(row);
    }

    println!("{table}");

    Ok(())
}
