//! The common shape of exercises and challenges.

use oxide_sandbox::{QueryOutcome, ResultSet, Sandbox};
use serde::Serialize;
use tracing::debug;

/// A validator over a successful result. Failed statements never pass.
pub type Validator = fn(&ResultSet) -> bool;

/// The outcome of checking a learner's SQL against a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attempt {
    /// Whether the task's validator accepted the result.
    pub passed: bool,
    /// What the sandbox returned.
    pub outcome: QueryOutcome,
}

/// Something a learner answers with a SQL statement.
pub trait Task {
    /// Unique id.
    fn id(&self) -> &'static str;

    /// What the learner is asked to do.
    fn prompt(&self) -> &'static str;

    /// A nudge towards the answer.
    fn hint(&self) -> &'static str;

    /// Accepts or rejects a result.
    fn validate(&self, result: &ResultSet) -> bool;

    /// Runs `sql` in the sandbox and validates the outcome.
    fn check(&self, sandbox: &Sandbox, sql: &str) -> Attempt {
        let outcome = sandbox.execute(sql);
        let passed = outcome.result_set().is_some_and(|set| self.validate(set));
        debug!(task = self.id(), passed, "Checked attempt");
        Attempt { passed, outcome }
    }
}
