//! conjugar CLI — Spanish verb conjugation drills in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "conjugar", version, about = "Spanish verb conjugation drills")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive drill
    Drill {
        /// Tenses to practice (comma-separated: present, preterite, future)
        #[arg(long)]
        tenses: Option<String>,

        /// Verbs to practice, by id or infinitive (comma-separated)
        #[arg(long)]
        verbs: Option<String>,

        /// Only practice verbs of this class (ar, er, ir)
        #[arg(long = "type")]
        conjugation_type: Option<String>,

        /// Progress target: 10, 20, or 50 cards
        #[arg(long)]
        cards: Option<u32>,

        /// Seed for reproducible card order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the verb catalog
    Verbs {
        /// Filter by class (ar, er, ir)
        #[arg(long = "type")]
        conjugation_type: Option<String>,
    },

    /// Show the full conjugation table of a verb
    Conjugate {
        /// Verb id or infinitive
        verb: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show session statistics
    Stats {
        /// Print the stats as JSON (total recomputed from the counters)
        #[arg(long)]
        json: bool,
    },

    /// Reset session statistics to zero
    Reset,

    /// Create a starter config file
    Init,
}

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("conjugar=info,conjugar_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Drill {
            tenses,
            verbs,
            conjugation_type,
            cards,
            seed,
        } => commands::drill::execute(
            config,
            commands::drill::DrillArgs {
                tenses,
                verbs,
                conjugation_type,
                cards,
                seed,
            },
        ),
        Commands::Verbs { conjugation_type } => commands::verbs::execute(conjugation_type),
        Commands::Conjugate { verb, json } => commands::conjugate::execute(verb, json),
        Commands::Stats { json } => commands::stats::execute(config, json),
        Commands::Reset => commands::stats::reset(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
