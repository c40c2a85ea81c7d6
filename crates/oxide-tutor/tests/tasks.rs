//! Reference answers against every exercise and challenge.

use oxide_sandbox::Sandbox;
use oxide_tutor::prelude::*;

#[test]
fn test_every_exercise_solution_passes() {
    let sandbox = Sandbox::fixture();
    for exercise in EXERCISES {
        let attempt = exercise.check(&sandbox, exercise.solution);
        assert!(
            attempt.passed,
            "{} failed with {:?}",
            exercise.id, attempt.outcome
        );
    }
}

#[test]
fn test_challenge_reference_answers() {
    let answers = [
        ("c1", "SELECT * FROM users WHERE role != 'admin'"),
        ("c2", "SELECT COUNT(*) FROM posts"),
        (
            "c3",
            "SELECT users.name, posts.title FROM users JOIN posts ON users.id = posts.user_id WHERE published = true",
        ),
        (
            "c4",
            "SELECT users.name, orders.total FROM users JOIN orders ON users.id = orders.user_id WHERE total > 100",
        ),
        ("c5", "SELECT user_id, COUNT(*) FROM posts GROUP BY user_id"),
        (
            "c6",
            "SELECT user_id, COUNT(*) FROM posts GROUP BY user_id ORDER BY count DESC LIMIT 1",
        ),
        ("c7", "SELECT * FROM orders ORDER BY created_at DESC LIMIT 3"),
        (
            "c8",
            "SELECT * FROM comments JOIN posts ON comments.post_id = posts.id WHERE user_id = 1",
        ),
    ];

    let sandbox = Sandbox::fixture();
    assert_eq!(answers.len(), CHALLENGES.len());
    for (id, sql) in answers {
        let attempt = require_task(id).unwrap().check(&sandbox, sql);
        assert!(attempt.passed, "{id} failed with {:?}", attempt.outcome);
    }
}

#[test]
fn test_wrong_answers_fail() {
    let sandbox = Sandbox::fixture();
    let cases = [
        ("c1", "SELECT * FROM users"),
        ("c2", "SELECT * FROM posts"),
        ("agg-total", "SELECT COUNT(*) FROM users"),
        ("crud-select", "SELECT * FROM users"),
        (
            "join-filter",
            "SELECT users.name, posts.title FROM users JOIN posts ON users.id = posts.user_id",
        ),
        ("returning-update", "UPDATE users SET role = 'admin' WHERE id = 2"),
    ];
    for (id, sql) in cases {
        assert!(!require_task(id).unwrap().check(&sandbox, sql).passed, "{id}");
    }
}

#[test]
fn test_errors_never_pass() {
    let sandbox = Sandbox::fixture();
    let attempt = require_task("c8").unwrap().check(&sandbox, "SELECT * FROM ghosts");
    assert!(!attempt.passed);
    assert!(attempt.outcome.is_error());
}

#[test]
fn test_find_task() {
    assert_eq!(find_task("ex1").map(|t| t.id()), Some("ex1"));
    assert_eq!(find_task("c3").map(|t| t.hint()), Some("JOIN users and posts, filter by published"));
    assert!(find_task("c42").is_none());

    let err = require_task("c42").err().unwrap();
    assert_eq!(err.to_string(), "No exercise or challenge with id 'c42'");
}

#[test]
fn test_attempt_serializes_outcome() {
    let attempt = require_task("c2")
        .unwrap()
        .check(&Sandbox::fixture(), "SELECT COUNT(*) FROM posts");
    let json = serde_json::to_value(&attempt).unwrap();
    assert_eq!(json["passed"], true);
    assert_eq!(json["outcome"]["results"][0]["count"], 5);
}
