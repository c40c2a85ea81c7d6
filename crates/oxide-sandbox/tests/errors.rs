//! Tests for error outcomes and their JSON shape.

mod common;
use common::*;

use oxide_sandbox::{Dataset, Row, execute_sql_with};

#[test]
fn unknown_table_lists_available_tables() {
    let err = error("SELECT * FROM ghosts");
    assert_eq!(
        err,
        "Table 'ghosts' not found. Available: users, posts, comments, orders"
    );
}

#[test]
fn missing_from_clause() {
    assert_eq!(error("SELECT 1 + 1"), "Missing FROM clause");
}

#[test]
fn unsupported_statements() {
    for sql in [
        "DROP TABLE users",
        "CREATE TABLE t (id INT)",
        "WITH admins AS (SELECT * FROM users) SELECT * FROM admins",
        "",
        "   ",
    ] {
        assert!(
            error(sql).starts_with("Unsupported query type"),
            "expected unsupported for {sql:?}"
        );
    }
}

#[test]
fn results_and_error_are_exclusive() {
    for sql in [
        "SELECT * FROM users",
        "SELECT * FROM nowhere",
        "INSERT INTO users (name) VALUES ('a') RETURNING *",
        "UPDATE users SET name = 'b'",
        "DELETE FROM users",
        "TRUNCATE users",
    ] {
        let outcome = run(sql);
        assert!(outcome.results().is_some() != outcome.error().is_some(), "{sql}");

        let json = serde_json::to_value(&outcome).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("results") != object.contains_key("error"), "{sql}");
    }
}

#[test]
fn error_serializes_to_error_object() {
    let json = serde_json::to_string(&run("DROP TABLE users")).unwrap();
    assert_eq!(
        json,
        r#"{"error":"Unsupported query type. Try SELECT, INSERT, UPDATE, or DELETE."}"#
    );
}

#[test]
fn custom_dataset_names_its_own_tables() {
    let dataset = Dataset::new()
        .with_table("books", vec![Row::new().with("id", 1)])
        .with_table("authors", Vec::new());
    let outcome = execute_sql_with("SELECT * FROM users", &dataset);
    assert_eq!(
        outcome.error(),
        Some("Table 'users' not found. Available: books, authors")
    );
}

#[test]
fn custom_dataset_from_json() {
    let dataset = Dataset::from_json_str(
        r#"{"pets": [{"id": 1, "name": "Rex", "good": true}, {"id": 2, "name": "Tom", "good": false}]}"#,
    )
    .unwrap();
    let outcome = execute_sql_with("SELECT name FROM pets WHERE good = true", &dataset);
    assert_eq!(outcome.results().unwrap(), &[Row::new().with("name", "Rex")]);
}
