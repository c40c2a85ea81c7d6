#![allow(dead_code)]

use oxide_sandbox::{QueryOutcome, ResultSet, Row, Sandbox, Value};

pub fn run(sql: &str) -> QueryOutcome {
    Sandbox::fixture().execute(sql)
}

pub fn rows(sql: &str) -> ResultSet {
    match run(sql) {
        QueryOutcome::Rows(set) => set,
        QueryOutcome::Error { error } => panic!("Query failed: {sql}\nError: {error}"),
    }
}

pub fn error(sql: &str) -> String {
    match run(sql) {
        QueryOutcome::Error { error } => error,
        QueryOutcome::Rows(set) => panic!("Expected an error for: {sql}, got {set:?}"),
    }
}

pub fn column<'a>(rows: &'a [Row], name: &str) -> Vec<Option<&'a Value>> {
    rows.iter().map(|row| row.get(name)).collect()
}

pub fn keys(row: &Row) -> Vec<&str> {
    row.column_names().collect()
}
