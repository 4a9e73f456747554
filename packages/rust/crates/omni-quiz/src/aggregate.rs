//! Fold answered questions into raw factor scores.

use crate::record::{Likert, Question, RawScores};

/// Sum `weight * (answer - 3)` per factor over all answers.
///
/// A neutral answer still inserts its factors with a zero contribution. An
/// empty input yields an empty map.
pub fn aggregate<'a, I>(answers: I) -> RawScores
where
    I: IntoIterator<Item = (&'a Question, &'a Likert)>,
{
    let mut scores = RawScores::new();
    for (question, answer) in answers {
        let offset = answer.centered();
        for (&factor, &weight) in question.factors() {
            *scores.entry(factor).or_insert(0) += weight * offset;
        }
    }
    scores
}
