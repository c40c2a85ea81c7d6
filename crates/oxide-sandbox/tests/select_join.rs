//! Tests for the single inner JOIN.

mod common;
use common::*;

use oxide_sandbox::Value;

#[test]
fn join_users_posts_one_row_per_post() {
    let set = rows(
        "SELECT users.name, posts.title FROM users JOIN posts ON users.id = posts.user_id",
    );
    assert_eq!(set.row_count, 5);
    for row in &set.results {
        assert_eq!(keys(row), vec!["name", "title"]);
    }
    assert_eq!(set.results[0].get("name"), Some(&Value::from("Alice")));
    assert_eq!(
        set.results[0].get("title"),
        Some(&Value::from("Getting Started with SQL"))
    );
}

#[test]
fn join_with_published_filter_excludes_draft() {
    let set = rows(
        "SELECT users.name, posts.title FROM users JOIN posts ON users.id = posts.user_id \
         WHERE posts.published = true",
    );
    assert_eq!(set.row_count, 4);
    assert!(
        set.results
            .iter()
            .all(|r| r.get("title") != Some(&Value::from("Draft Post")))
    );
}

#[test]
fn join_keywords_are_case_insensitive() {
    let set = rows("select * from users inner join posts on users.id = posts.user_id");
    assert_eq!(set.row_count, 5);
}

#[test]
fn join_is_inner_only() {
    // David has no posts and is dropped.
    let set = rows("SELECT users.name FROM users LEFT JOIN posts ON users.id = posts.user_id");
    assert!(
        set.results
            .iter()
            .all(|r| r.get("name") != Some(&Value::from("David")))
    );
    assert_eq!(set.row_count, 5);
}

#[test]
fn join_orders_over_threshold() {
    let set = rows(
        "SELECT users.name, orders.total FROM users JOIN orders ON users.id = orders.user_id \
         WHERE total > 100",
    );
    assert_eq!(
        column(&set.results, "name"),
        vec![Some(&Value::from("Bob")), Some(&Value::from("Carol"))]
    );
}

#[test]
fn join_adds_synthetic_id_of_joined_row() {
    let set = rows("SELECT * FROM comments JOIN posts ON comments.post_id = posts.id");
    assert_eq!(set.row_count, 5);
    assert_eq!(
        column(&set.results, "posts_id"),
        vec![
            Some(&Value::Int(1)),
            Some(&Value::Int(1)),
            Some(&Value::Int(2)),
            Some(&Value::Int(3)),
            Some(&Value::Int(5)),
        ]
    );
}

#[test]
fn join_unknown_table_is_error() {
    let err = error("SELECT * FROM users JOIN ghosts ON users.id = ghosts.user_id");
    assert_eq!(
        err,
        "Join table 'ghosts' not found. Available: users, posts, comments, orders"
    );
}

#[test]
fn only_first_join_is_applied() {
    let set = rows(
        "SELECT * FROM comments JOIN posts ON comments.post_id = posts.id \
         JOIN users ON posts.user_id = users.id",
    );
    assert_eq!(set.row_count, 5);
    assert!(set.results.iter().all(|r| !r.contains("users_id")));
}
