//! omni-quiz - Personality quiz scoring and profile matching.
//!
//! Samples questions without replacement, aggregates Likert answers into
//! factor scores and finds the closest reference profile by cosine
//! similarity:
//!
//! ```text
//! question pool ──draw──▶ answers ──aggregate──▶ raw scores
//!                                                  │ normalize
//!                                                  ▼
//! catalog ──normalize each──▶ cosine similarity ──▶ best match
//! ```
//!
//! The core does no IO. `loader` parses the record files for callers that
//! need it.
//!
//! # Examples
//!
//! ```rust
//! use omni_quiz::{Likert, Profile, Question, aggregate, best_match};
//!
//! let question = Question::new("I like plans", [('O', -1), ('C', 1)]).unwrap();
//! let strongly_agree = Likert::new(5).unwrap();
//! let scores = aggregate([(&question, &strongly_agree)]);
//!
//! let people = [
//!     Profile::new("Planner", [('O', -1), ('C', 1)]),
//!     Profile::new("Rebel", [('O', 1), ('C', -1)]),
//! ];
//! let found = best_match(&scores, &people).unwrap();
//! assert_eq!(found.profile.name(), "Planner");
//! ```

// ============================================================================
// Core modules
// ============================================================================

mod aggregate;
mod catalog;
mod error;
mod matcher;
mod record;
mod sampler;
mod session;
mod vector;

pub mod loader;

// ============================================================================
// Public exports
// ============================================================================

pub use aggregate::aggregate;
pub use catalog::Catalog;
pub use error::{QuizError, Result};
pub use matcher::{Match, Matcher, best_match};
pub use record::{AnswerSheet, FactorId, Likert, Profile, Question, RawScores, UnitScores};
pub use sampler::{draw_many, draw_one};
pub use session::{QuizSession, clamp_question_count};
pub use vector::{
    FactorCoverage, cosine_similarity, cosine_similarity_with, euclidean_norm, normalize,
};
