//! The `conjugar stats` and `conjugar reset` commands.

use std::path::PathBuf;

use anyhow::Result;

use conjugar_core::statistics::StatsTracker;

pub fn execute(config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let (config, store) = super::open_store(config_path)?;
    let stats = StatsTracker::load(store).stats();

    if json {
        println!("{}", serde_json::to_string(&stats)?);
        return Ok(());
    }

    let progress = stats.progress(config.target_cards);
    println!("Correct:   {}", stats.correct);
    println!("Incorrect: {}", stats.incorrect);
    println!("Total:     {}", stats.total_answered);
    println!("Accuracy:  {}%", stats.accuracy());
    println!(
        "Progress:  {:.0}% correct, {:.0}% wrong (target {} cards)",
        progress.correct_pct, progress.incorrect_pct, config.target_cards
    );

    Ok(())
}

pub fn reset(config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;
    let mut tracker = StatsTracker::load(store);
    tracker.reset();
    println!("Session stats reset.");
    Ok(())
}
