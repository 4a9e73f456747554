//! Record file loader tests.

mod common;

use omni_quiz::QuizError;
use omni_quiz::loader::{
    LoadError, load_profiles, load_questions, parse_profile_line, parse_profiles,
    parse_question_line, parse_questions,
};
use std::io::Write;

#[test]
fn test_parse_question_line() {
    let q = parse_question_line(1, "I like to make plans. O:-1 C:1")
        .expect("parse")
        .expect("non-blank");
    assert_eq!(q.text(), "I like to make plans");
    assert_eq!(q.factors().get(&'O'), Some(&-1));
    assert_eq!(q.factors().get(&'C'), Some(&1));
}

#[test]
fn test_blank_lines_skipped() {
    assert!(parse_question_line(3, "   ").expect("parse").is_none());
    assert!(parse_profile_line(3, "").expect("parse").is_none());
}

#[test]
fn test_question_without_factors_rejected() {
    let err = parse_question_line(4, "Just text.").expect_err("no factors");
    assert!(matches!(
        err,
        LoadError::Record {
            line: 4,
            source: QuizError::EmptyFactors(_)
        }
    ));
}

#[test]
fn test_question_weight_must_be_unit() {
    let err = parse_question_line(2, "Loud. E:3").expect_err("weight 3");
    assert!(matches!(
        err,
        LoadError::Record {
            source: QuizError::InvalidWeight { weight: 3, .. },
            ..
        }
    ));
}

#[test]
fn test_missing_dot_is_syntax_error() {
    let err = parse_profile_line(9, "No separator O:1").expect_err("no dot");
    assert!(matches!(err, LoadError::Syntax { line: 9, .. }));
    assert!(err.to_string().starts_with("line 9:"));
}

#[test]
fn test_bad_token_is_syntax_error() {
    assert!(matches!(
        parse_profile_line(1, "Yoda. O=1"),
        Err(LoadError::Syntax { .. })
    ));
    assert!(matches!(
        parse_profile_line(1, "Yoda. O:x"),
        Err(LoadError::Syntax { .. })
    ));
}

#[test]
fn test_profile_scores_any_integer() {
    let p = parse_profile_line(1, "Yoda. O:5 C:-12 E:0")
        .expect("parse")
        .expect("non-blank");
    assert_eq!(p.name(), "Yoda");
    assert_eq!(p.factors().len(), 3);
    assert_eq!(p.factors().get(&'C'), Some(&-12));
}

#[test]
fn test_profile_without_name_skipped() {
    assert!(parse_profile_line(1, ". O:1").expect("parse").is_none());
}

#[test]
fn test_parse_questions_dedups_by_text() {
    let body = "I like plans. C:1\n\nI like plans. O:1\nI enjoy parties. E:1\n";
    let pool = parse_questions(body).expect("parse");
    assert_eq!(pool.len(), 2);
    let first = pool.iter().find(|q| q.text() == "I like plans").expect("present");
    assert!(first.factors().contains_key(&'C'));
}

#[test]
fn test_parse_reports_line_number() {
    let body = "Fine. O:1\nBroken O:1\n";
    assert!(matches!(
        parse_questions(body),
        Err(LoadError::Syntax { line: 2, .. })
    ));
}

#[test]
fn test_parse_profiles_keeps_file_order() {
    let body = "Zed. O:1\r\nAmy. C:1\r\n";
    let names: Vec<String> = parse_profiles(body)
        .expect("parse")
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(names, vec!["Zed", "Amy"]);
}

#[test]
fn test_load_from_files() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let questions_path = dir.path().join("questions.txt");
    let people_path = dir.path().join("Pair.people");

    let mut file = std::fs::File::create(&questions_path).expect("create questions");
    writeln!(file, "I like plans. O:-1 C:1").expect("write");
    writeln!(file, "I enjoy parties. E:1").expect("write");
    std::fs::write(&people_path, "Planner. O:-1 C:1\nRebel. O:1 C:-1\n").expect("write people");

    assert_eq!(load_questions(&questions_path).expect("load").len(), 2);
    assert_eq!(load_profiles(&people_path).expect("load").len(), 2);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let missing = dir.path().join("nope.people");
    match load_profiles(&missing) {
        Err(LoadError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected io error, got {other:?}"),
    }
}
