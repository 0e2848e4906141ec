//! The `conjugar init` command.

use anyhow::Result;

use conjugar_core::config::SAMPLE_CONFIG;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("conjugar.toml");
    if path.exists() {
        println!("conjugar.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created conjugar.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit conjugar.toml to pick your default tenses");
    println!("  2. Run: conjugar verbs");
    println!("  3. Run: conjugar drill");

    Ok(())
}
