//! Command-line front end for omni-quiz.
//!
//! - Settings: YAML system defaults merged with user overrides.
//! - Catalogs: configured menu or discovered `*.people` files.
//! - Flows: interactive quiz over any `BufRead`/`Write` pair, one-shot match.

#![allow(missing_docs)]

mod catalogs;
mod prompt;
mod quiz;
mod settings;

pub use catalogs::{CatalogSource, discover_catalogs, find_catalog, resolve_catalogs};
pub use prompt::Prompter;
pub use quiz::{MatchReport, RunOptions, parse_scores, run_interactive, run_match};
pub use settings::{
    CatalogEntry, QuizSection, QuizSettings, load_quiz_settings, load_quiz_settings_from_paths,
    project_root, quiz_settings_paths, set_config_home_override,
};
