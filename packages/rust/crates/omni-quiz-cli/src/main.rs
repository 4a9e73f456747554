//! omni-quiz-cli: interactive quiz, catalog listing, one-shot match.
//!
//! Logging: set `RUST_LOG=omni_quiz=debug` (or `info`, `warn`) to see logs on stderr.

mod cli;

use anyhow::{Result, anyhow};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use omni_quiz::Matcher;
use omni_quiz::loader::load_questions;
use omni_quiz_cli::{
    Prompter, RunOptions, find_catalog, load_quiz_settings, parse_scores, project_root,
    resolve_catalogs, run_interactive, run_match, set_config_home_override,
};

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(conf_dir) = cli.conf.clone() {
        set_config_home_override(conf_dir);
    }

    // RUST_LOG overrides; --verbose => debug; else warn so prompts stay clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "omni_quiz=debug,omni_quiz_cli=debug"
        } else {
            "omni_quiz=warn,omni_quiz_cli=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let settings = load_quiz_settings();
    let root = project_root();
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| settings.data_dir(&root));
    let matcher = Matcher::new(cli.coverage.unwrap_or_else(|| settings.coverage()));
    tracing::debug!(data_dir = %data_dir.display(), coverage = matcher.coverage().as_str(), "resolved settings");

    let catalogs = resolve_catalogs(&settings, &data_dir)?;

    match cli.command {
        Command::Run {
            questions,
            seed,
            json,
        } => {
            let questions_path = settings.questions_path(&data_dir);
            let pool = load_questions(&questions_path)?;
            let options = RunOptions {
                question_count: questions.or(settings.quiz.question_count),
                json,
                matcher,
            };
            let rng = match seed.or(settings.quiz.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let stdin = std::io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), std::io::stdout().lock());
            run_interactive(&mut prompter, pool, rng, &catalogs, &options)?;
            Ok(())
        }
        Command::Catalogs => {
            for (idx, source) in catalogs.iter().enumerate() {
                println!("{}. {} ({})", idx + 1, source.name, source.path.display());
            }
            Ok(())
        }
        Command::Match {
            catalog,
            scores,
            top,
            json,
        } => {
            let source = find_catalog(&catalogs, &catalog)
                .ok_or_else(|| anyhow!("unknown catalog {catalog:?}; see `omni-quiz-cli catalogs`"))?;
            let scores = parse_scores(&scores)?;
            run_match(&mut std::io::stdout().lock(), source, &scores, top, json, &matcher)
        }
    }
}
