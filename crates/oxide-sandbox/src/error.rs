//! Error types for the query sandbox.

/// Errors that can occur while evaluating a statement.
#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    /// A SELECT without a FROM clause.
    #[error("Missing FROM clause")]
    MissingClause,

    /// The FROM table does not exist in the dataset.
    #[error("Table '{table}' not found. Available: {}", .available.join(", "))]
    UnknownTable {
        /// The table that was referenced.
        table: String,
        /// Tables present in the dataset, in dataset order.
        available: Vec<String>,
    },

    /// The JOIN table does not exist in the dataset.
    #[error("Join table '{table}' not found. Available: {}", .available.join(", "))]
    UnknownJoinTable {
        /// The table that was referenced.
        table: String,
        /// Tables present in the dataset, in dataset order.
        available: Vec<String>,
    },

    /// The statement does not have the minimal shape for its type.
    #[error("Invalid {0} syntax")]
    InvalidSyntax(&'static str),

    /// The leading keyword is not SELECT, INSERT, UPDATE or DELETE.
    #[error("Unsupported query type. Try SELECT, INSERT, UPDATE, or DELETE.")]
    UnsupportedStatement,

    /// A WHERE condition matched none of the recognized forms (strict mode).
    #[error("Unsupported WHERE condition: {0}")]
    UnsupportedPredicate(String),

    /// A custom dataset could not be decoded.
    #[error("Invalid dataset: {0}")]
    Dataset(#[from] serde_json::Error),
}

/// Result type for sandbox operations.
pub type Result<T> = std::result::Result<T, SandboxError>;
