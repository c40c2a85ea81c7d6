//! The SELECT pipeline.
//!
//! Clauses are applied to a working set of rows in a fixed order:
//! FROM, JOIN, WHERE, ORDER BY, LIMIT, GROUP BY, projection. Every clause
//! except FROM is optional.

use std::cmp::Ordering;

use tracing::debug;

use crate::condition::Condition;
use crate::dataset::Dataset;
use crate::error::{Result, SandboxError};
use crate::extract::{self, JoinClause, OrderBy, OrderDirection, SelectItem};
use crate::options::{CountSource, EngineOptions};
use crate::outcome::ResultSet;
use crate::value::{Row, Value};

/// Evaluates a SELECT statement against a dataset.
///
/// # Errors
///
/// Returns [`SandboxError::MissingClause`] without a FROM clause,
/// [`SandboxError::UnknownTable`] / [`SandboxError::UnknownJoinTable`] for
/// tables missing from the dataset, and
/// [`SandboxError::UnsupportedPredicate`] for unrecognized conditions in
/// strict mode.
pub fn execute_select(sql: &str, dataset: &Dataset, options: &EngineOptions) -> Result<ResultSet> {
    let sql = extract::collapse_whitespace(sql);

    let table_name = extract::from_table(&sql).ok_or(SandboxError::MissingClause)?;
    let table = dataset
        .table(&table_name)
        .ok_or_else(|| SandboxError::UnknownTable {
            table: table_name.clone(),
            available: dataset.table_names(),
        })?;
    let mut rows = table.to_vec();
    debug!(table = %table_name, rows = rows.len(), "Fetched table");

    if let Some(join) = extract::join_clause(&sql) {
        rows = apply_join(&rows, &table_name, &join, dataset)?;
        debug!(table = %join.table, rows = rows.len(), "Applied JOIN");
    }

    if let Some(condition) = extract::where_clause(&sql) {
        rows = Condition::parse(condition, options.strict_predicates)?.filter(rows);
        debug!(condition = %condition, rows = rows.len(), "Applied WHERE");
    }

    if let Some(order) = extract::order_by(&sql) {
        apply_order(&mut rows, &order);
    }

    if let Some(limit) = extract::limit(&sql) {
        rows.truncate(limit);
    }

    let group_column = extract::group_by(&sql);
    if let Some(column) = &group_column {
        rows = apply_group(&rows, column);
        debug!(column = %column, groups = rows.len(), "Applied GROUP BY");
    }

    if let Some(projection) = extract::projection(&sql) {
        if !projection.is_wildcard() {
            if projection.has_count_star() && group_column.is_none() {
                let count = match options.count_source {
                    CountSource::Table => table.len(),
                    CountSource::WorkingSet => rows.len(),
                };
                return Ok(ResultSet::rows(vec![Row::new().with("count", count)]));
            }
            rows = project(&rows, &projection.items());
        }
    }

    Ok(ResultSet::rows(rows))
}

/// Inner nested-loop join of the working set with the joined table.
///
/// Each `ON` side reads from the left row when its qualifier names the FROM
/// table and from the right row otherwise. Values match under
/// [`Value::strict_eq`]; two missing values match each other but never a
/// present one, `Null` included. A kept pair becomes the left row
/// overlaid with the right row, plus `<table>_id` holding the right row's id.
fn apply_join(
    rows: &[Row],
    from_table: &str,
    join: &JoinClause,
    dataset: &Dataset,
) -> Result<Vec<Row>> {
    let right_rows = dataset
        .table(&join.table)
        .ok_or_else(|| SandboxError::UnknownJoinTable {
            table: join.table.clone(),
            available: dataset.table_names(),
        })?;

    let side = |qualifier: &str, column: &str, left: &Row, right: &Row| -> Option<Value> {
        if qualifier == from_table {
            left.get(column).cloned()
        } else {
            right.get(column).cloned()
        }
    };

    let id_column = format!("{}_id", join.table);
    let mut joined = Vec::new();
    for left in rows {
        for right in right_rows {
            let lhs = side(&join.left_table, &join.left_column, left, right);
            let rhs = side(&join.right_table, &join.right_column, left, right);
            let matched = match (lhs, rhs) {
                (Some(a), Some(b)) => a.strict_eq(&b),
                (None, None) => true,
                _ => false,
            };
            if matched {
                let mut row = left.merged(right);
                if let Some(id) = right.get("id") {
                    row.insert(id_column.clone(), id.clone());
                }
                joined.push(row);
            }
        }
    }
    Ok(joined)
}

/// Stable sort by one column. A missing column sorts like `Null`.
fn apply_order(rows: &mut [Row], order: &OrderBy) {
    rows.sort_by(|a, b| {
        let ordering = match (a.get(&order.column), b.get(&order.column)) {
            (Some(x), Some(y)) => x.sort_cmp(y),
            (Some(x), None) => x.sort_cmp(&Value::Null),
            (None, Some(y)) => Value::Null.sort_cmp(y),
            (None, None) => Ordering::Equal,
        };
        match order.direction {
            OrderDirection::Asc => ordering,
            OrderDirection::Desc => ordering.reverse(),
        }
    });
}

struct Group {
    key: String,
    value: Option<Value>,
    count: usize,
}

/// Replaces the working set with one `{<column>, count}` row per distinct
/// value. Keys that read as array indices (`0`, `1`, ...) come first in
/// ascending order, the rest follow in order of first appearance.
fn apply_group(rows: &[Row], column: &str) -> Vec<Row> {
    let mut groups: Vec<Group> = Vec::new();
    for row in rows {
        let value = row.get(column);
        let key = value.map_or_else(String::new, ToString::to_string);
        let present = value.is_some();
        match groups
            .iter_mut()
            .find(|g| g.key == key && g.value.is_some() == present)
        {
            Some(group) => group.count += 1,
            None => groups.push(Group {
                key,
                value: value.cloned(),
                count: 1,
            }),
        }
    }

    groups.sort_by_key(|group| index_key(&group.key).map_or((1, 0), |n| (0, n)));

    groups
        .into_iter()
        .map(|group| {
            let mut row = Row::new();
            if let Some(value) = group.value {
                row.insert(column, value);
            }
            row.insert("count", group.count);
            row
        })
        .collect()
}

/// A key in canonical array-index form: no sign, no leading zeros, below
/// `u32::MAX`.
fn index_key(key: &str) -> Option<u32> {
    let n: u32 = key.parse().ok()?;
    (n != u32::MAX && n.to_string() == key).then_some(n)
}

/// Keeps only the requested columns, renamed to their aliases. Columns the
/// row does not have are left out.
fn project(rows: &[Row], items: &[SelectItem]) -> Vec<Row> {
    rows.iter()
        .map(|row| {
            items
                .iter()
                .filter_map(|item| {
                    row.get(&item.source)
                        .map(|value| (item.alias.clone(), value.clone()))
                })
                .collect()
        })
        .collect()
}
