//! Query outcomes as seen by callers.

use serde::Serialize;

use crate::error::SandboxError;
use crate::value::Row;

/// Rows produced by a successful statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    /// Result rows.
    pub results: Vec<Row>,
    /// Reported row count.
    pub row_count: usize,
    /// Status message for simulated writes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResultSet {
    /// A result whose row count is the number of rows.
    #[must_use]
    pub fn rows(results: Vec<Row>) -> Self {
        Self {
            row_count: results.len(),
            results,
            message: None,
        }
    }

    /// A simulated write result.
    #[must_use]
    pub fn simulated(results: Vec<Row>, row_count: usize, message: impl Into<String>) -> Self {
        Self {
            results,
            row_count,
            message: Some(message.into()),
        }
    }
}

/// The outcome of evaluating one statement: rows or an error, never both.
///
/// Serializes to `{"results": [...], "rowCount": n}` (plus `"message"` for
/// writes) or to `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    /// The statement succeeded.
    Rows(ResultSet),
    /// The statement failed.
    Error {
        /// Human-readable diagnosis.
        error: String,
    },
}

impl QueryOutcome {
    /// Returns the result set, if the statement succeeded.
    #[must_use]
    pub const fn result_set(&self) -> Option<&ResultSet> {
        match self {
            Self::Rows(set) => Some(set),
            Self::Error { .. } => None,
        }
    }

    /// Returns the result rows, if the statement succeeded.
    #[must_use]
    pub fn results(&self) -> Option<&[Row]> {
        self.result_set().map(|set| set.results.as_slice())
    }

    /// Returns the error message, if the statement failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Rows(_) => None,
            Self::Error { error } => Some(error),
        }
    }

    /// Returns the write status message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.result_set().and_then(|set| set.message.as_deref())
    }

    /// Returns `true` if the statement failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<SandboxError> for QueryOutcome {
    fn from(err: SandboxError) -> Self {
        Self::Error {
            error: err.to_string(),
        }
    }
}

impl From<crate::error::Result<ResultSet>> for QueryOutcome {
    fn from(result: crate::error::Result<ResultSet>) -> Self {
        result.map_or_else(Self::from, Self::Rows)
    }
}
