//! Tests for simulated INSERT, UPDATE and DELETE.

mod common;
use common::*;

use chrono::NaiveDate;
use oxide_sandbox::{Dataset, EngineOptions, Row, Sandbox, Value};

#[test]
fn insert_returning_yields_synthesized_row() {
    let set = rows("INSERT INTO users (name, email) VALUES ('X','y@z.com') RETURNING *");
    assert_eq!(set.results.len(), 1);
    assert_eq!(set.row_count, 1);
    let row = &set.results[0];
    assert_eq!(row.get("id"), Some(&Value::Int(5)));
    assert!(row.contains("created_at"));
    assert!(set.message.as_deref().unwrap().contains("RETURNING"));
}

#[test]
fn insert_without_returning_yields_no_rows() {
    let set = rows("INSERT INTO users (name, email) VALUES ('X','y@z.com')");
    assert!(set.results.is_empty());
    assert!(set.message.is_some());
}

#[test]
fn insert_uses_pinned_date() {
    let sandbox = Sandbox::fixture().with_options(
        EngineOptions::new().with_today(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()),
    );
    let outcome = sandbox.execute("INSERT INTO orders (total) VALUES (10) RETURNING id");
    assert_eq!(
        outcome.results().unwrap(),
        &[Row::new().with("id", 5).with("created_at", "2025-12-31")]
    );
}

#[test]
fn insert_into_empty_table_starts_at_one() {
    let dataset = Dataset::new().with_table("notes", Vec::new());
    let outcome = oxide_sandbox::execute_sql_with(
        "INSERT INTO notes (body) VALUES ('hi') RETURNING *",
        &dataset,
    );
    assert_eq!(outcome.results().unwrap()[0].get("id"), Some(&Value::Int(1)));
}

#[test]
fn insert_without_into_is_invalid() {
    assert_eq!(error("INSERT users VALUES (1)"), "Invalid INSERT syntax");
}

#[test]
fn insert_does_not_mutate_dataset() {
    let sandbox = Sandbox::fixture();
    sandbox.execute("INSERT INTO users (name) VALUES ('Eve') RETURNING *");
    assert_eq!(sandbox.dataset(), &Dataset::fixture());
    assert_eq!(rows("SELECT * FROM users").row_count, 4);
}

#[test]
fn update_returning_placeholder() {
    let outcome = run("UPDATE users SET role = 'admin' WHERE id = 2 RETURNING *");
    assert_eq!(
        outcome.results().unwrap(),
        &[Row::new().with("id", 1).with("updated", true)]
    );
    assert!(outcome.message().unwrap().contains("RETURNING"));
}

#[test]
fn update_without_returning() {
    let set = rows("UPDATE users SET role = 'admin'");
    assert!(set.results.is_empty());
    assert_eq!(set.message.as_deref(), Some("UPDATE successful (simulated)"));
}

#[test]
fn delete_returning_placeholder() {
    let outcome = run("delete from posts where id = 4 returning id");
    assert_eq!(
        outcome.results().unwrap(),
        &[Row::new().with("id", 1).with("deleted", true)]
    );
    assert_eq!(outcome.message(), Some("DELETE with RETURNING (simulated)"));
}
