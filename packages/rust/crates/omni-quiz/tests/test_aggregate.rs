//! Aggregator tests.

mod common;

use common::{likert, ocean_pool, question};
use omni_quiz::{AnswerSheet, Likert, Question, RawScores, aggregate};

#[test]
fn test_single_answer() {
    let q = question("I like plans", &[('O', -1), ('C', 1)]);
    let scores = aggregate([(&q, &likert(5))]);

    let expected: RawScores = [('O', -2), ('C', 2)].into_iter().collect();
    assert_eq!(scores, expected);
}

#[test]
fn test_empty_answers_yield_empty_map() {
    let scores = aggregate(std::iter::empty::<(&Question, &Likert)>());
    assert!(scores.is_empty());
}

#[test]
fn test_order_independent() {
    let pool = ocean_pool();
    let answers: Vec<(Question, Likert)> = pool
        .iter()
        .zip([1, 2, 4, 5, 3, 1, 5])
        .map(|(q, a)| (q.clone(), likert(a)))
        .collect();

    let forward = aggregate(answers.iter().map(|(q, a)| (q, a)));
    let backward = aggregate(answers.iter().rev().map(|(q, a)| (q, a)));
    assert_eq!(forward, backward);
}

#[test]
fn test_neutral_answers_score_zero() {
    let sheet: AnswerSheet = ocean_pool()
        .into_iter()
        .map(|q| (q, Likert::NEUTRAL))
        .collect();

    let scores = aggregate(&sheet);
    assert!(!scores.is_empty());
    assert!(scores.values().all(|&v| v == 0));
}

#[test]
fn test_accumulates_across_questions() {
    let a = question("I like plans", &[('C', 1)]);
    let b = question("I leave chores undone", &[('C', -1)]);
    let c = question("I enjoy parties", &[('E', 1)]);

    let scores = aggregate([(&a, &likert(5)), (&b, &likert(1)), (&c, &likert(2))]);

    assert_eq!(scores.get(&'C'), Some(&4));
    assert_eq!(scores.get(&'E'), Some(&-1));
    assert_eq!(scores.get(&'O'), None);
}
