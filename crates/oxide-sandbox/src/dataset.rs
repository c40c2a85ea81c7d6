//! In-memory datasets and the built-in fixture.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::value::Row;

/// A named table: an ordered sequence of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Rows in insertion order.
    pub rows: Vec<Row>,
}

/// A read-only set of tables queried by the sandbox.
///
/// Tables keep the order they were added in; error messages listing the
/// available tables use that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    tables: Vec<Table>,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a table.
    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        let name = name.into();
        if let Some(table) = self.tables.iter_mut().find(|t| t.name == name) {
            table.rows = rows;
        } else {
            self.tables.push(Table { name, rows });
        }
        self
    }

    /// Returns the rows of a table.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&[Row]> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.rows.as_slice())
    }

    /// Returns the table names in dataset order.
    #[must_use]
    pub fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.name.clone()).collect()
    }

    /// Iterates over all tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    /// Decodes a dataset from a JSON object of table name to row array.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SandboxError::Dataset`] if the JSON is malformed or
    /// does not have that shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in fixture used by every exercise.
    #[must_use]
    pub fn fixture() -> Self {
        Self::new()
            .with_table("users", fixture_users())
            .with_table("posts", fixture_posts())
            .with_table("comments", fixture_comments())
            .with_table("orders", fixture_orders())
    }
}

fn user(id: i64, name: &str, email: &str, role: &str, created_at: &str) -> Row {
    Row::new()
        .with("id", id)
        .with("name", name)
        .with("email", email)
        .with("role", role)
        .with("created_at", created_at)
}

fn fixture_users() -> Vec<Row> {
    vec![
        user(1, "Alice", "alice@example.com", "admin", "2024-01-15"),
        user(2, "Bob", "bob@example.com", "user", "2024-02-20"),
        user(3, "Carol", "carol@example.com", "user", "2024-03-10"),
        user(4, "David", "david@example.com", "moderator", "2024-03-15"),
    ]
}

fn post(id: i64, user_id: i64, title: &str, content: &str, published: bool, created_at: &str) -> Row {
    Row::new()
        .with("id", id)
        .with("user_id", user_id)
        .with("title", title)
        .with("content", content)
        .with("published", published)
        .with("created_at", created_at)
}

fn fixture_posts() -> Vec<Row> {
    vec![
        post(1, 1, "Getting Started with SQL", "SQL is...", true, "2024-01-20"),
        post(2, 1, "Advanced Queries", "JOINs are...", true, "2024-02-01"),
        post(3, 2, "My First Post", "Hello...", true, "2024-02-25"),
        post(4, 3, "Draft Post", "WIP...", false, "2024-03-12"),
        post(5, 2, "PostgreSQL Tips", "Postgres...", true, "2024-03-20"),
    ]
}

fn comment(id: i64, post_id: i64, user_id: i64, text: &str, created_at: &str) -> Row {
    Row::new()
        .with("id", id)
        .with("post_id", post_id)
        .with("user_id", user_id)
        .with("text", text)
        .with("created_at", created_at)
}

fn fixture_comments() -> Vec<Row> {
    vec![
        comment(1, 1, 2, "Great intro!", "2024-01-21"),
        comment(2, 1, 3, "Very helpful", "2024-01-22"),
        comment(3, 2, 3, "I learned a lot", "2024-02-02"),
        comment(4, 3, 1, "Welcome!", "2024-02-26"),
        comment(5, 5, 4, "Nice tips", "2024-03-21"),
    ]
}

fn order(id: i64, user_id: i64, total: f64, status: &str, created_at: &str) -> Row {
    Row::new()
        .with("id", id)
        .with("user_id", user_id)
        .with("total", total)
        .with("status", status)
        .with("created_at", created_at)
}

fn fixture_orders() -> Vec<Row> {
    vec![
        order(1, 1, 99.99, "completed", "2024-01-25"),
        order(2, 2, 149.50, "completed", "2024-02-28"),
        order(3, 1, 75.00, "pending", "2024-03-15"),
        order(4, 3, 200.00, "completed", "2024-03-18"),
    ]
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tables.len()))?;
        for table in &self.tables {
            map.serialize_entry(&table.name, &table.rows)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DatasetVisitor;

        impl<'de> Visitor<'de> for DatasetVisitor {
            type Value = Dataset;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of table name to an array of rows")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Dataset, A::Error> {
                let mut dataset = Dataset::new();
                while let Some((name, rows)) = access.next_entry::<String, Vec<Row>>()? {
                    dataset = dataset.with_table(name, rows);
                }
                Ok(dataset)
            }
        }

        deserializer.deserialize_map(DatasetVisitor)
    }
}
