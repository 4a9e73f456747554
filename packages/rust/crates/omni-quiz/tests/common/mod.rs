//! Shared test helpers for omni-quiz.

#![allow(dead_code)]

use omni_quiz::{Likert, Profile, Question};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Build a question, panicking on invalid weights.
pub fn question(text: &str, factors: &[(char, i32)]) -> Question {
    Question::new(text, factors.iter().copied()).expect("valid question")
}

/// Build a profile.
pub fn profile(name: &str, factors: &[(char, i32)]) -> Profile {
    Profile::new(name, factors.iter().copied())
}

/// Likert answer, panicking outside the scale.
pub fn likert(value: i64) -> Likert {
    Likert::new(value).expect("valid likert value")
}

/// Deterministic RNG for reproducible draws.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Small OCEAN question pool.
pub fn ocean_pool() -> Vec<Question> {
    vec![
        question("I like plans", &[('O', -1), ('C', 1)]),
        question("I enjoy parties", &[('E', 1)]),
        question("I worry a lot", &[('N', 1)]),
        question("I trust people", &[('A', 1)]),
        question("I try new foods", &[('O', 1)]),
        question("I leave chores undone", &[('C', -1)]),
        question("I stay calm", &[('N', -1), ('E', 1)]),
    ]
}

/// Sum of squares of a normalized map.
pub fn sum_of_squares(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().map(|v| v * v).sum()
}
