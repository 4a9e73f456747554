//! QuizSession tests.

mod common;

use common::{likert, ocean_pool, seeded};
use omni_quiz::{QuizError, QuizSession, clamp_question_count};

#[test]
fn test_clamp_question_count() {
    assert_eq!(clamp_question_count(0, 10), None);
    assert_eq!(clamp_question_count(1, 10), Some(1));
    assert_eq!(clamp_question_count(10, 10), Some(10));
    assert_eq!(clamp_question_count(11, 10), None);
    assert_eq!(clamp_question_count(1, 0), None);
}

#[test]
fn test_session_draws_and_scores() {
    let pool = ocean_pool();
    let total = pool.len();
    let mut session = QuizSession::new(pool.into_iter().collect(), seeded(11));

    for _ in 0..3 {
        let q = session.next_question().expect("question available");
        session.answer(q, likert(5));
    }

    assert_eq!(session.remaining(), total - 3);
    assert_eq!(session.answered(), 3);
    assert!(!session.scores().is_empty());
}

#[test]
fn test_session_exhaustion() {
    let pool = ocean_pool();
    let total = pool.len();
    let mut session = QuizSession::new(pool.into_iter().collect(), seeded(5));

    for _ in 0..total {
        let q = session.next_question().expect("question available");
        session.answer(q, likert(3));
    }
    assert!(matches!(session.next_question(), Err(QuizError::EmptyPool)));
    assert!(session.scores().values().all(|&v| v == 0));
}

#[test]
fn test_session_reproducible_with_seed() {
    let run = |seed| {
        let mut session = QuizSession::new(ocean_pool().into_iter().collect(), seeded(seed));
        (0..4)
            .map(|_| {
                session
                    .next_question()
                    .expect("question available")
                    .text()
                    .to_string()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn test_session_keeps_latest_answer() {
    let mut session = QuizSession::new(ocean_pool().into_iter().collect(), seeded(21));
    let q = session.next_question().expect("question available");

    session.answer(q.clone(), likert(1));
    session.answer(q.clone(), likert(5));

    assert_eq!(session.answered(), 1);
    assert_eq!(session.answers().get(&q), Some(likert(5)));
    let expected: i32 = q.factors().values().map(|w| w * 2).sum();
    assert_eq!(session.scores().values().sum::<i32>(), expected);
}
