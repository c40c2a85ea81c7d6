//! SQL tutorial content built on `oxide-sandbox`.
//!
//! The tutor owns everything a learner sees around the sandbox: the table
//! documentation, the curriculum exercises with their validators, and the
//! open-ended challenges. Every task is checked by running the learner's SQL
//! through [`oxide_sandbox::Sandbox::execute`] and inspecting the outcome.
//!
//! # Example
//!
//! ```rust
//! use oxide_sandbox::Sandbox;
//! use oxide_tutor::prelude::*;
//!
//! let sandbox = Sandbox::fixture();
//! let task = find_task("crud-where").unwrap();
//! assert!(task.check(&sandbox, "SELECT * FROM users WHERE role = 'admin'").passed);
//! assert!(!task.check(&sandbox, "SELECT * FROM users").passed);
//! ```

use std::path::Path;

use oxide_sandbox::Dataset;

pub mod challenge;
pub mod error;
pub mod exercise;
pub mod schema;
pub mod task;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::challenge::{CHALLENGES, Challenge, Difficulty, challenge};
    pub use crate::error::{Result, TutorError};
    pub use crate::exercise::{EXERCISES, Exercise, exercise, module_exercises};
    pub use crate::schema::{ColumnDoc, TableDoc, TABLES, module_tables, table_doc};
    pub use crate::task::{Attempt, Task, Validator};
    pub use crate::{find_task, load_dataset, require_task};
}

use crate::error::{Result, TutorError};
use crate::task::Task;

/// Looks up an exercise or challenge by id.
#[must_use]
pub fn find_task(id: &str) -> Option<&'static dyn Task> {
    exercise::exercise(id)
        .map(|e| e as &'static dyn Task)
        .or_else(|| challenge::challenge(id).map(|c| c as &'static dyn Task))
}

/// Looks up a task, failing with [`TutorError::UnknownTask`].
///
/// # Errors
///
/// Returns an error if neither an exercise nor a challenge has the id.
pub fn require_task(id: &str) -> Result<&'static dyn Task> {
    find_task(id).ok_or_else(|| TutorError::UnknownTask(id.to_string()))
}

/// Reads a JSON dataset file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON object of
/// table name to row array.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let json = std::fs::read_to_string(path).map_err(|source| TutorError::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Dataset::from_json_str(&json)?)
}
