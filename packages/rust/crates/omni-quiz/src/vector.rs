//! Sparse factor-vector math: unit normalization and cosine similarity.
//!
//! Maps are sparse; an absent factor reads as zero.

use std::collections::BTreeMap;
use std::iter::Peekable;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};
use crate::record::{FactorId, UnitScores};

/// Which factors a similarity sum visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCoverage {
    /// Every factor present on either side; a missing factor is zero.
    #[default]
    Union,
    /// Only the factors of the first (query) argument.
    QueryFactors,
}

impl FactorCoverage {
    /// String form used in settings and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::QueryFactors => "query_factors",
        }
    }
}

impl std::str::FromStr for FactorCoverage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "union" => Ok(Self::Union),
            "query_factors" | "query" => Ok(Self::QueryFactors),
            other => Err(format!("unknown factor coverage {other:?}")),
        }
    }
}

/// Scale `scores` to unit Euclidean length.
///
/// # Errors
///
/// Returns [`QuizError::ZeroNorm`] when the map is empty or all zeros.
pub fn normalize<V>(scores: &BTreeMap<FactorId, V>) -> Result<UnitScores>
where
    V: Copy + Into<f64>,
{
    let norm = euclidean_norm(scores);
    if norm == 0.0 {
        return Err(QuizError::ZeroNorm);
    }
    Ok(scores
        .iter()
        .map(|(&factor, &value)| (factor, Into::<f64>::into(value) / norm))
        .collect())
}

/// Euclidean length of a sparse vector.
#[must_use]
pub fn euclidean_norm<V>(scores: &BTreeMap<FactorId, V>) -> f64
where
    V: Copy + Into<f64>,
{
    scores
        .values()
        .map(|&value| {
            let value: f64 = value.into();
            value * value
        })
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity of two unit vectors over the union of their factors.
#[must_use]
pub fn cosine_similarity(a: &UnitScores, b: &UnitScores) -> f64 {
    cosine_similarity_with(a, b, FactorCoverage::Union)
}

/// Cosine similarity of two unit vectors with explicit factor coverage.
///
/// Both coverages give the same number: a factor missing from either side
/// contributes a zero product.
#[must_use]
pub fn cosine_similarity_with(a: &UnitScores, b: &UnitScores, coverage: FactorCoverage) -> f64 {
    match coverage {
        FactorCoverage::Union => UnionIter::new(a, b).map(|(_, x, y)| x * y).sum(),
        FactorCoverage::QueryFactors => a
            .iter()
            .filter_map(|(factor, x)| b.get(factor).map(|y| x * y))
            .sum(),
    }
}

/// Merge-walk over two ordered maps yielding `(factor, a, b)` with zeros for
/// absent entries.
struct UnionIter<'a> {
    left: Peekable<std::collections::btree_map::Iter<'a, FactorId, f64>>,
    right: Peekable<std::collections::btree_map::Iter<'a, FactorId, f64>>,
}

impl<'a> UnionIter<'a> {
    fn new(a: &'a UnitScores, b: &'a UnitScores) -> Self {
        Self {
            left: a.iter().peekable(),
            right: b.iter().peekable(),
        }
    }
}

impl Iterator for UnionIter<'_> {
    type Item = (FactorId, f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.left.peek(), self.right.peek()) {
            (Some(&(&lk, &lv)), Some(&(&rk, &rv))) => match lk.cmp(&rk) {
                std::cmp::Ordering::Less => {
                    self.left.next();
                    Some((lk, lv, 0.0))
                }
                std::cmp::Ordering::Greater => {
                    self.right.next();
                    Some((rk, 0.0, rv))
                }
                std::cmp::Ordering::Equal => {
                    self.left.next();
                    self.right.next();
                    Some((lk, lv, rv))
                }
            },
            (Some(&(&lk, &lv)), None) => {
                self.left.next();
                Some((lk, lv, 0.0))
            }
            (None, Some(&(&rk, &rv))) => {
                self.right.next();
                Some((rk, 0.0, rv))
            }
            (None, None) => None,
        }
    }
}
