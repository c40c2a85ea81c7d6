//! Statement dispatch.

use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{Result, SandboxError};
use crate::extract;
use crate::options::EngineOptions;
use crate::outcome::{QueryOutcome, ResultSet};
use crate::select::execute_select;
use crate::write::{simulate_delete, simulate_insert, simulate_update};

/// The statement types the sandbox understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// SELECT
    Select,
    /// INSERT
    Insert,
    /// UPDATE
    Update,
    /// DELETE
    Delete,
}

impl StatementKind {
    /// Classifies a statement by its leading keyword (case-insensitive,
    /// surrounding whitespace ignored).
    #[must_use]
    pub fn classify(sql: &str) -> Option<Self> {
        let normalized = extract::collapse_whitespace(sql).to_lowercase();
        [
            ("select", Self::Select),
            ("insert", Self::Insert),
            ("update", Self::Update),
            ("delete", Self::Delete),
        ]
        .into_iter()
        .find(|(keyword, _)| normalized.starts_with(keyword))
        .map(|(_, kind)| kind)
    }
}

/// A query sandbox over a read-only dataset.
///
/// Every call parses the statement from scratch; the sandbox holds no state
/// between calls and never mutates its dataset.
#[derive(Debug, Clone, Default)]
pub struct Sandbox {
    dataset: Dataset,
    options: EngineOptions,
}

impl Sandbox {
    /// Creates a sandbox over a dataset with default options.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            options: EngineOptions::default(),
        }
    }

    /// Creates a sandbox over the built-in fixture.
    #[must_use]
    pub fn fixture() -> Self {
        Self::new(Dataset::fixture())
    }

    /// Replaces the engine options.
    #[must_use]
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the engine options.
    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Evaluates one statement. Failures come back as
    /// [`QueryOutcome::Error`]; this never panics on bad input.
    #[must_use]
    pub fn execute(&self, sql: &str) -> QueryOutcome {
        let result = self.try_execute(sql);
        if let Err(err) = &result {
            debug!(error = %err, "Query failed");
        }
        result.into()
    }

    /// Evaluates one statement, returning failures as errors.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::UnsupportedStatement`] for anything other
    /// than SELECT, INSERT, UPDATE or DELETE, and the errors of the
    /// matching pipeline otherwise.
    pub fn try_execute(&self, sql: &str) -> Result<ResultSet> {
        let kind = StatementKind::classify(sql).ok_or(SandboxError::UnsupportedStatement)?;
        debug!(?kind, sql = %sql.trim(), "Executing statement");

        match kind {
            StatementKind::Select => execute_select(sql, &self.dataset, &self.options),
            StatementKind::Insert => simulate_insert(sql, &self.dataset, &self.options),
            StatementKind::Update => Ok(simulate_update(sql)),
            StatementKind::Delete => Ok(simulate_delete(sql)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            StatementKind::classify("  select * from users"),
            Some(StatementKind::Select)
        );
        assert_eq!(
            StatementKind::classify("\nINSERT INTO users"),
            Some(StatementKind::Insert)
        );
        assert_eq!(StatementKind::classify("Update users"), Some(StatementKind::Update));
        assert_eq!(StatementKind::classify("DELETE FROM x"), Some(StatementKind::Delete));
        assert_eq!(StatementKind::classify("DROP TABLE users"), None);
        assert_eq!(StatementKind::classify(""), None);
    }

    #[test]
    fn test_select_keeps_literal_case() {
        let outcome = Sandbox::fixture().execute("SELECT * FROM users WHERE name = 'Alice'");
        assert_eq!(outcome.results().map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_unsupported_statement() {
        let outcome = Sandbox::fixture().execute("DROP TABLE users");
        assert_eq!(
            outcome.error(),
            Some("Unsupported query type. Try SELECT, INSERT, UPDATE, or DELETE.")
        );
    }
}
