//! Descriptions of the fixture tables shown next to the editor.

use serde::Serialize;

/// A documented column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDoc {
    /// Column name.
    pub name: &'static str,
    /// SQL type shown to the learner.
    pub sql_type: &'static str,
    /// Short note (key, allowed values), possibly empty.
    pub note: &'static str,
}

/// A documented table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableDoc {
    /// Table name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Columns in table order.
    pub columns: &'static [ColumnDoc],
    /// Foreign-key relationships, written `parent.col → child.col`.
    pub relationships: &'static [&'static str],
}

const fn col(name: &'static str, sql_type: &'static str, note: &'static str) -> ColumnDoc {
    ColumnDoc {
        name,
        sql_type,
        note,
    }
}

/// Documentation for every fixture table.
pub const TABLES: &[TableDoc] = &[
    TableDoc {
        name: "users",
        description: "User accounts",
        columns: &[
            col("id", "INT", "Primary key"),
            col("name", "TEXT", ""),
            col("email", "TEXT", "Unique"),
            col("role", "TEXT", "admin, user, moderator"),
            col("created_at", "DATE", ""),
        ],
        relationships: &[],
    },
    TableDoc {
        name: "posts",
        description: "Blog posts",
        columns: &[
            col("id", "INT", "Primary key"),
            col("user_id", "INT", "FK → users.id"),
            col("title", "TEXT", ""),
            col("content", "TEXT", ""),
            col("published", "BOOL", "true/false"),
            col("created_at", "DATE", ""),
        ],
        relationships: &["users.id → posts.user_id"],
    },
    TableDoc {
        name: "comments",
        description: "Comments on posts",
        columns: &[
            col("id", "INT", "Primary key"),
            col("post_id", "INT", "FK → posts.id"),
            col("user_id", "INT", "FK → users.id"),
            col("text", "TEXT", ""),
            col("created_at", "DATE", ""),
        ],
        relationships: &["posts.id → comments.post_id", "users.id → comments.user_id"],
    },
    TableDoc {
        name: "orders",
        description: "Purchase orders",
        columns: &[
            col("id", "INT", "Primary key"),
            col("user_id", "INT", "FK → users.id"),
            col("total", "DECIMAL", "Order total"),
            col("status", "TEXT", "pending, completed"),
            col("created_at", "DATE", ""),
        ],
        relationships: &["users.id → orders.user_id"],
    },
];

/// Tables worth having open while working through each module.
pub const MODULE_TABLE_HINTS: &[(&str, &[&str])] = &[
    ("data-flow-basics", &["users"]),
    ("crud-concepts", &["users", "posts"]),
    ("where-filtering", &["posts", "users"]),
    ("join-flow", &["users", "posts", "comments"]),
    ("aggregation", &["posts", "comments"]),
    ("pg-types", &["users"]),
    ("returning-clause", &["users"]),
    ("cte-flow", &["users"]),
    ("upsert", &["users"]),
    ("transactions", &["orders"]),
    ("supabase-architecture", &["users"]),
    ("rls-concept", &["posts"]),
    ("client-patterns", &["posts"]),
];

/// Looks up a table's documentation.
#[must_use]
pub fn table_doc(name: &str) -> Option<&'static TableDoc> {
    TABLES.iter().find(|t| t.name == name)
}

/// Tables hinted for a module; empty for modules without hints.
#[must_use]
pub fn module_tables(module: &str) -> &'static [&'static str] {
    MODULE_TABLE_HINTS
        .iter()
        .find(|(id, _)| *id == module)
        .map_or(&[] as &[&str], |&(_, tables)| tables)
}

#[cfg(test)]
mod tests {
    use oxide_sandbox::Dataset;

    use super::*;

    #[test]
    fn test_docs_match_fixture_columns() {
        let dataset = Dataset::fixture();
        for doc in TABLES {
            let rows = dataset.table(doc.name).unwrap();
            let documented: Vec<_> = doc.columns.iter().map(|c| c.name).collect();
            let actual: Vec<_> = rows[0].column_names().collect();
            assert_eq!(documented, actual, "{}", doc.name);
        }
    }

    #[test]
    fn test_module_tables() {
        assert_eq!(module_tables("join-flow"), &["users", "posts", "comments"]);
        assert!(module_tables("auth-flow").is_empty());
    }
}
