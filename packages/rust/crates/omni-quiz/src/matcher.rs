//! Nearest-profile selection by cosine similarity.
//!
//! The query is normalized once; each candidate is normalized and scored
//! against it. The first candidate in iteration order wins ties, so callers
//! that need reproducible results iterate a name-ordered collection.

use serde::Serialize;

use crate::error::{QuizError, Result};
use crate::record::{Profile, RawScores, UnitScores};
use crate::vector::{FactorCoverage, cosine_similarity_with, normalize};

/// Starting point for the running maximum, below any cosine similarity.
const SIMILARITY_FLOOR: f64 = -2.0;

/// A scored candidate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Match<'a> {
    /// The matched profile.
    pub profile: &'a Profile,
    /// Cosine similarity against the query, in `[-1, 1]`.
    pub similarity: f64,
}

/// Profile matcher with a configurable similarity coverage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    coverage: FactorCoverage,
}

impl Matcher {
    /// Create a matcher using `coverage` for every similarity sum.
    #[must_use]
    pub fn new(coverage: FactorCoverage) -> Self {
        Self { coverage }
    }

    /// Coverage in use.
    #[must_use]
    pub fn coverage(&self) -> FactorCoverage {
        self.coverage
    }

    /// Return the candidate most similar to `query`.
    ///
    /// Only a strictly greater similarity replaces the current best.
    ///
    /// # Errors
    ///
    /// - [`QuizError::EmptyCandidates`] when `candidates` yields nothing
    /// - [`QuizError::EmptyScores`] when `query` is empty
    /// - [`QuizError::ZeroNorm`] when the query or any candidate is all zeros
    pub fn best_match<'a, I>(&self, query: &RawScores, candidates: I) -> Result<Match<'a>>
    where
        I: IntoIterator<Item = &'a Profile>,
    {
        let mut candidates = candidates.into_iter().peekable();
        let query = self.prepare_query(query, candidates.peek().is_none())?;

        let mut best: Option<Match<'a>> = None;
        let mut best_similarity = SIMILARITY_FLOOR;
        for profile in candidates {
            let similarity = self.score(&query, profile)?;
            if similarity > best_similarity {
                best_similarity = similarity;
                best = Some(Match {
                    profile,
                    similarity,
                });
            }
        }

        let best = best.ok_or(QuizError::EmptyCandidates)?;
        log::debug!(
            "best match {:?} with similarity {:.4}",
            best.profile.name(),
            best.similarity
        );
        Ok(best)
    }

    /// Score every candidate and sort by descending similarity.
    ///
    /// The sort is stable, so equal similarities keep iteration order and the
    /// head of the list equals [`Matcher::best_match`].
    ///
    /// # Errors
    ///
    /// Same as [`Matcher::best_match`].
    pub fn rank<'a, I>(&self, query: &RawScores, candidates: I) -> Result<Vec<Match<'a>>>
    where
        I: IntoIterator<Item = &'a Profile>,
    {
        let mut candidates = candidates.into_iter().peekable();
        let query = self.prepare_query(query, candidates.peek().is_none())?;

        let mut ranked = candidates
            .map(|profile| {
                self.score(&query, profile).map(|similarity| Match {
                    profile,
                    similarity,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        ranked.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(ranked)
    }

    fn prepare_query(&self, query: &RawScores, no_candidates: bool) -> Result<UnitScores> {
        if no_candidates {
            return Err(QuizError::EmptyCandidates);
        }
        if query.is_empty() {
            return Err(QuizError::EmptyScores);
        }
        log::trace!(
            "normalizing query over {} factors ({})",
            query.len(),
            self.coverage.as_str()
        );
        normalize(query)
    }

    fn score(&self, query: &UnitScores, profile: &Profile) -> Result<f64> {
        let candidate = normalize(profile.factors()).inspect_err(|_| {
            log::warn!("profile {:?} has an all-zero score map", profile.name());
        })?;
        Ok(cosine_similarity_with(query, &candidate, self.coverage))
    }
}

/// [`Matcher::best_match`] with the default union coverage.
///
/// # Errors
///
/// Same as [`Matcher::best_match`].
pub fn best_match<'a, I>(query: &RawScores, candidates: I) -> Result<Match<'a>>
where
    I: IntoIterator<Item = &'a Profile>,
{
    Matcher::default().best_match(query, candidates)
}
