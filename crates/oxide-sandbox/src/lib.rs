//! # oxide-sandbox
//!
//! A small SQL interpreter over an in-memory dataset, built for giving
//! feedback on tutorial exercises.
//!
//! The interpreter is a pattern matcher, not a parser: each clause is found
//! with its own regular expression and the clauses are applied in a fixed
//! order. It understands a single-table `SELECT` with at most one inner
//! `JOIN`, a conjunctive `WHERE`, `ORDER BY`, `LIMIT`, `GROUP BY` (counting
//! only) and a column list with aliases. `INSERT`, `UPDATE` and `DELETE`
//! are simulated without touching the data.
//!
//! ## Example
//!
//! ```rust
//! use oxide_sandbox::execute_sql;
//!
//! let outcome = execute_sql("SELECT name FROM users WHERE role = 'admin'");
//! let rows = outcome.results().unwrap();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].get("name").unwrap().to_string(), "Alice");
//!
//! let outcome = execute_sql("SELECT * FROM ghosts");
//! assert!(outcome.error().unwrap().contains("users, posts, comments, orders"));
//! ```
//!
//! Outcomes serialize to the JSON shape the exercise front end expects:
//!
//! ```rust
//! use oxide_sandbox::execute_sql;
//!
//! let json = serde_json::to_string(&execute_sql("SELECT COUNT(*) FROM posts")).unwrap();
//! assert_eq!(json, r#"{"results":[{"count":5}],"rowCount":1}"#);
//! ```

pub mod condition;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod extract;
pub mod options;
pub mod outcome;
pub mod select;
pub mod value;
pub mod write;

pub use dataset::{Dataset, Table};
pub use engine::{Sandbox, StatementKind};
pub use error::{Result, SandboxError};
pub use options::{CountSource, EngineOptions};
pub use outcome::{QueryOutcome, ResultSet};
pub use value::{Row, Value};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::condition::{CompareOp, Condition, Predicate};
    pub use crate::dataset::{Dataset, Table};
    pub use crate::engine::{Sandbox, StatementKind};
    pub use crate::error::{Result, SandboxError};
    pub use crate::extract::{JoinClause, OrderBy, OrderDirection, Projection, SelectItem};
    pub use crate::options::{CountSource, EngineOptions};
    pub use crate::outcome::{QueryOutcome, ResultSet};
    pub use crate::value::{Row, Value};
}

/// Evaluates a statement against the built-in fixture.
#[must_use]
pub fn execute_sql(sql: &str) -> QueryOutcome {
    Sandbox::fixture().execute(sql)
}

/// Evaluates a statement against the given dataset with default options.
#[must_use]
pub fn execute_sql_with(sql: &str, dataset: &Dataset) -> QueryOutcome {
    Sandbox::new(dataset.clone()).execute(sql)
}
