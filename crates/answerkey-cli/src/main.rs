//! answerkey CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "answerkey",
    version,
    about = "Generate per-student answer keys with controlled random errors"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one answer key per student
    Generate {
        /// Quiz text file (questions as "1. ...", correct options prefixed with '+')
        #[arg(long)]
        quiz: PathBuf,

        /// Roster text file, one student per line
        #[arg(long)]
        roster: PathBuf,

        /// Maximum number of wrong answers per student (default: from config, else 0)
        #[arg(long, allow_hyphen_values = true)]
        max_errors: Option<String>,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also pack the answer files into this zip archive
        #[arg(long)]
        archive: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show a parsed quiz and warn about questions that cannot be corrupted
    Validate {
        /// Quiz text file
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Create starter config, sample quiz and roster
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("answerkey=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            quiz,
            roster,
            max_errors,
            seed,
            output,
            archive,
            config,
        } => commands::generate::execute(quiz, roster, max_errors, seed, output, archive, config),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
