//! The `conjugar verbs` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use conjugar_core::catalog::Catalog;
use conjugar_core::model::ConjugationType;

pub fn execute(type_filter: Option<String>) -> Result<()> {
    let conjugation_type = type_filter
        .map(|t| t.parse::<ConjugationType>())
        .transpose()?;

    let catalog = Catalog::default();

    let mut table = Table::new();
    table.set_header(vec!["ID", "Infinitive", "Translation", "Type", "Regular"]);

    let mut count = 0usize;
    for verb in catalog.verbs() {
        if conjugation_type.is_some_and(|t| t != verb.conjugation_type) {
            continue;
        }
        count += 1;
        table.add_row(vec![
            Cell::new(&verb.id),
            Cell::new(&verb.infinitive),
            Cell::new(&verb.translation),
            Cell::new(verb.conjugation_type.suffix().to_uppercase()),
            Cell::new(if verb.is_regular { "yes" } else { "no" }),
        ]);
    }

    println!("{table}");
    println!("{count} verb(s)");

    Ok(())
}
