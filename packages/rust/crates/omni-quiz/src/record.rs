//! Record types for the quiz: questions, reference profiles and answers.
//!
//! `Question` and `Profile` compare and order by their text/name only, so a
//! `BTreeSet` of either behaves as a keyed, name-ordered collection.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{QuizError, Result};

/// Identifier of a personality factor (one OCEAN letter in shipped data).
pub type FactorId = char;

/// Unnormalized integer score per factor.
pub type RawScores = BTreeMap<FactorId, i32>;

/// Unit-length score per factor.
pub type UnitScores = BTreeMap<FactorId, f64>;

/// A quiz statement with the factors it pushes up (+1) or down (-1).
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    text: String,
    factors: BTreeMap<FactorId, i32>,
}

impl Question {
    /// Build a question.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::EmptyFactors`] for an empty factor map and
    /// [`QuizError::InvalidWeight`] for any weight other than +1 or -1.
    pub fn new(
        text: impl Into<String>,
        factors: impl IntoIterator<Item = (FactorId, i32)>,
    ) -> Result<Self> {
        let text = text.into();
        let factors: BTreeMap<FactorId, i32> = factors.into_iter().collect();
        if factors.is_empty() {
            return Err(QuizError::EmptyFactors(text));
        }
        if let Some((&factor, &weight)) = factors.iter().find(|(_, w)| !matches!(**w, 1 | -1)) {
            return Err(QuizError::InvalidWeight {
                text,
                factor,
                weight,
            });
        }
        Ok(Self { text, factors })
    }

    /// Statement shown to the user.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Factor weights, each +1 or -1.
    #[must_use]
    pub fn factors(&self) -> &BTreeMap<FactorId, i32> {
        &self.factors
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Question {}

impl PartialOrd for Question {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Question {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

/// A catalog entry: a named reference person with precomputed factor scores.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    name: String,
    factors: RawScores,
}

impl Profile {
    /// Build a profile. Scores may be any integer.
    #[must_use]
    pub fn new(name: impl Into<String>, factors: impl IntoIterator<Item = (FactorId, i32)>) -> Self {
        Self {
            name: name.into(),
            factors: factors.into_iter().collect(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw factor scores.
    #[must_use]
    pub fn factors(&self) -> &RawScores {
        &self.factors
    }
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Profile {}

impl PartialOrd for Profile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Profile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Five-point agreement answer: 1 = strongly disagree ... 5 = strongly agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Likert(u8);

impl Likert {
    /// Lowest value on the scale.
    pub const MIN: u8 = 1;
    /// Highest value on the scale.
    pub const MAX: u8 = 5;
    /// The neutral midpoint.
    pub const NEUTRAL: Self = Self(3);

    /// Validate an answer value.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::AnswerOutOfRange`] outside `[1, 5]`.
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(QuizError::AnswerOutOfRange(value))
    }

    /// Raw scale value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Offset from neutral, in `[-2, 2]`.
    #[must_use]
    pub fn centered(self) -> i32 {
        i32::from(self.0) - i32::from(Self::NEUTRAL.0)
    }
}

impl TryFrom<i64> for Likert {
    type Error = QuizError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

/// Answers collected during one session, keyed by question.
///
/// Answering the same question twice keeps the latest value.
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    answers: BTreeMap<Question, Likert>,
}

impl AnswerSheet {
    /// Empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the one it replaced.
    pub fn record(&mut self, question: Question, answer: Likert) -> Option<Likert> {
        self.answers.insert(question, answer)
    }

    /// Answer given for `question`, if any.
    #[must_use]
    pub fn get(&self, question: &Question) -> Option<Likert> {
        self.answers.get(question).copied()
    }

    /// Answers in question-text order.
    pub fn iter(&self) -> impl Iterator<Item = (&Question, &Likert)> {
        self.answers.iter()
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether nothing has been answered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(Question, Likert)> for AnswerSheet {
    fn from_iter<T: IntoIterator<Item = (Question, Likert)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AnswerSheet {
    type Item = (&'a Question, &'a Likert);
    type IntoIter = std::collections::btree_map::Iter<'a, Question, Likert>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}
