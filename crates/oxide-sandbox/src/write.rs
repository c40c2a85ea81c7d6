//! Simulated INSERT, UPDATE and DELETE.
//!
//! None of these touch the dataset. They recognize the statement shape and
//! fabricate the response a real database would give.

use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{Result, SandboxError};
use crate::extract;
use crate::options::EngineOptions;
use crate::outcome::ResultSet;
use crate::value::{Row, Value};

/// Simulates an INSERT.
///
/// The synthesized row gets an `id` one past the table's largest id (or `1`
/// for tables the dataset does not know) and today's `created_at`.
///
/// # Errors
///
/// Returns [`SandboxError::InvalidSyntax`] if the statement has no
/// `INSERT INTO <table>`.
pub fn simulate_insert(sql: &str, dataset: &Dataset, options: &EngineOptions) -> Result<ResultSet> {
    let table = extract::insert_table(sql).ok_or(SandboxError::InvalidSyntax("INSERT"))?;
    let id = next_id(dataset, &table);
    debug!(table = %table, id, "Simulated INSERT");

    if extract::has_returning(sql) {
        let row = Row::new()
            .with("id", id)
            .with("created_at", options.today().format("%Y-%m-%d").to_string());
        return Ok(ResultSet::simulated(
            vec![row],
            1,
            "INSERT with RETURNING - new row returned (simulated)",
        ));
    }
    Ok(ResultSet::simulated(
        Vec::new(),
        1,
        "INSERT successful (simulated). Use RETURNING to get the inserted row!",
    ))
}

/// Simulates an UPDATE. Returns a placeholder row under RETURNING.
#[must_use]
pub fn simulate_update(sql: &str) -> ResultSet {
    simulate_change(sql, "UPDATE", "updated")
}

/// Simulates a DELETE. Returns a placeholder row under RETURNING.
#[must_use]
pub fn simulate_delete(sql: &str) -> ResultSet {
    simulate_change(sql, "DELETE", "deleted")
}

fn simulate_change(sql: &str, verb: &str, flag: &str) -> ResultSet {
    if extract::has_returning(sql) {
        let row = Row::new().with("id", 1).with(flag, true);
        ResultSet::simulated(vec![row], 1, format!("{verb} with RETURNING (simulated)"))
    } else {
        ResultSet::simulated(Vec::new(), 1, format!("{verb} successful (simulated)"))
    }
}

fn next_id(dataset: &Dataset, table: &str) -> i64 {
    dataset
        .table(table)
        .and_then(|rows| {
            rows.iter()
                .filter_map(|row| match row.get("id") {
                    Some(Value::Int(n)) => Some(*n),
                    _ => None,
                })
                .max()
        })
        .map_or(1, |max| max.saturating_add(1))
}
