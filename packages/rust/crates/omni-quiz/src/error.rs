//! Error kinds surfaced by the scoring-and-matching pipeline.
//!
//! Every variant is fatal to the current attempt; callers decide whether to
//! abort the session or re-prompt.

use thiserror::Error;

use crate::record::FactorId;

/// Errors raised by the quiz core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The sampler was asked to draw from an exhausted pool.
    #[error("question pool is empty")]
    EmptyPool,

    /// A score map with no direction (empty or all zeros) was normalized.
    #[error("score map has zero norm")]
    ZeroNorm,

    /// The matcher received no candidate profiles.
    #[error("candidate set is empty")]
    EmptyCandidates,

    /// The matcher received an empty query score map.
    #[error("query scores are empty")]
    EmptyScores,

    /// Answer value outside the five-point scale.
    #[error("answer must be in [1, 5], got {0}")]
    AnswerOutOfRange(i64),

    /// A question was built without any factor weights.
    #[error("question {0:?} has no factors")]
    EmptyFactors(String),

    /// A question factor weight other than +1 or -1.
    #[error("question {text:?}: factor {factor:?} has weight {weight}, expected +1 or -1")]
    InvalidWeight {
        /// Question text.
        text: String,
        /// Offending factor.
        factor: FactorId,
        /// Offending weight.
        weight: i32,
    },
}

/// Result alias for the quiz core.
pub type Result<T> = std::result::Result<T, QuizError>;
