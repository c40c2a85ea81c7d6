//! Engine options.

use chrono::{NaiveDate, Utc};

/// Which rows a `COUNT(*)` projection counts when there is no `GROUP BY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountSource {
    /// The rows fetched by `FROM`, before any other clause.
    #[default]
    Table,
    /// The rows left after `JOIN`, `WHERE`, `ORDER BY` and `LIMIT`.
    WorkingSet,
}

/// Options controlling how leniently statements are evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Rows counted by `COUNT(*)`.
    pub count_source: CountSource,
    /// Reject WHERE conditions that match no recognized form instead of
    /// letting them pass every row.
    pub strict_predicates: bool,
    /// Date stamped on simulated inserts. `None` uses the current UTC date.
    pub today: Option<NaiveDate>,
}

impl EngineOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `COUNT(*)` row source.
    #[must_use]
    pub fn with_count_source(mut self, source: CountSource) -> Self {
        self.count_source = source;
        self
    }

    /// Enables strict predicate recognition.
    #[must_use]
    pub fn with_strict_predicates(mut self) -> Self {
        self.strict_predicates = true;
        self
    }

    /// Pins the date used for simulated inserts.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The date stamped on simulated inserts.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}
