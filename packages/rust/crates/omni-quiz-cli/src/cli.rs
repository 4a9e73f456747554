use std::path::PathBuf;

use clap::{Parser, Subcommand};

use omni_quiz::FactorCoverage;

#[derive(Parser)]
#[command(name = "omni-quiz-cli")]
#[command(about = "Personality quiz: answer sampled questions, then find your closest match in a catalog.")]
pub(crate) struct Cli {
    /// Override config directory (holds `omni-quiz/settings.yaml`).
    #[arg(long, global = true)]
    pub(crate) conf: Option<PathBuf>,

    /// Override the data directory holding questions and `.people` catalogs.
    #[arg(long, global = true)]
    pub(crate) data_dir: Option<PathBuf>,

    /// Similarity coverage: `union` (default) or `query_factors`.
    #[arg(long, global = true)]
    pub(crate) coverage: Option<FactorCoverage>,

    /// Debug logging (same as `RUST_LOG=omni_quiz=debug`).
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Interactive quiz: answer questions, then pick catalogs to compare against.
    Run {
        /// Number of questions; prompts when missing or out of range.
        #[arg(long, short = 'n')]
        questions: Option<usize>,

        /// Seed for question sampling (reproducible runs).
        #[arg(long)]
        seed: Option<u64>,

        /// Print each match as a JSON line instead of prose.
        #[arg(long)]
        json: bool,
    },
    /// List the configured catalogs.
    Catalogs,
    /// One-shot match from raw factor scores.
    Match {
        /// Catalog name (see `catalogs`).
        #[arg(long)]
        catalog: String,

        /// Raw scores, e.g. `O=2,C=-1,E=0`.
        #[arg(long)]
        scores: String,

        /// Print the top K candidates instead of the single best match.
        #[arg(long)]
        top: Option<usize>,

        /// JSON output.
        #[arg(long)]
        json: bool,
    },
}
