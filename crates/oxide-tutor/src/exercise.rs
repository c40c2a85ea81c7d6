//! Curriculum exercises answered with SQL.

use std::fmt;

use oxide_sandbox::{ResultSet, Row, Value};

use crate::task::{Task, Validator};

/// An exercise attached to a curriculum module.
#[derive(Clone, Copy)]
pub struct Exercise {
    /// Unique id.
    pub id: &'static str,
    /// Id of the curriculum module the exercise belongs to.
    pub module: &'static str,
    /// What the learner is asked to do.
    pub prompt: &'static str,
    /// A nudge towards the answer.
    pub hint: &'static str,
    /// Text the editor starts with.
    pub starter_code: &'static str,
    /// A reference answer.
    pub solution: &'static str,
    validator: Validator,
}

impl fmt::Debug for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exercise")
            .field("id", &self.id)
            .field("module", &self.module)
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}

impl Task for Exercise {
    fn id(&self) -> &'static str {
        self.id
    }

    fn prompt(&self) -> &'static str {
        self.prompt
    }

    fn hint(&self) -> &'static str {
        self.hint
    }

    fn validate(&self, result: &ResultSet) -> bool {
        (self.validator)(result)
    }
}

pub(crate) fn text<'a>(row: &'a Row, column: &str) -> Option<&'a str> {
    match row.get(column) {
        Some(Value::Text(s)) => Some(s),
        _ => None,
    }
}

/// Non-empty text, the way the front end tests a field for presence.
pub(crate) fn has_text(row: &Row, column: &str) -> bool {
    text(row, column).is_some_and(|s| !s.is_empty())
}

fn message_mentions_returning(result: &ResultSet) -> bool {
    result
        .message
        .as_deref()
        .is_some_and(|m| m.contains("RETURNING"))
}

/// All exercises, in curriculum order.
pub const EXERCISES: &[Exercise] = &[
    Exercise {
        id: "ex1",
        module: "data-flow-basics",
        prompt: "Select all columns from the users table to see what data we have:",
        hint: "Use SELECT * FROM tablename",
        starter_code: "SELECT ",
        solution: "SELECT * FROM users",
        validator: |r| r.results.len() == 4,
    },
    Exercise {
        id: "crud-select",
        module: "crud-concepts",
        prompt: "Select just the name and email columns from users:",
        hint: "List specific columns instead of using *",
        starter_code: "SELECT ",
        solution: "SELECT name, email FROM users",
        validator: |r| {
            r.results
                .first()
                .is_some_and(|row| row.contains("name") && row.contains("email") && !row.contains("id"))
        },
    },
    Exercise {
        id: "crud-where",
        module: "crud-concepts",
        prompt: "Find users with the role 'admin':",
        hint: "Use WHERE role = 'value'",
        starter_code: "SELECT * FROM users WHERE ",
        solution: "SELECT * FROM users WHERE role = 'admin'",
        validator: |r| r.results.len() == 1 && text(&r.results[0], "role") == Some("admin"),
    },
    Exercise {
        id: "crud-insert",
        module: "crud-concepts",
        prompt: "Insert a new user and get the inserted row back using RETURNING:",
        hint: "INSERT INTO table (cols) VALUES (vals) RETURNING *",
        starter_code: "INSERT INTO users (name, email) VALUES ('Test', 'test@ex.com') ",
        solution: "INSERT INTO users (name, email) VALUES ('Test', 'test@ex.com') RETURNING *",
        validator: |r| !r.results.is_empty() && message_mentions_returning(r),
    },
    Exercise {
        id: "where-multiple",
        module: "where-filtering",
        prompt: "Find posts that are published AND have user_id = 1:",
        hint: "Combine conditions with AND",
        starter_code: "SELECT * FROM posts WHERE ",
        solution: "SELECT * FROM posts WHERE published = true AND user_id = 1",
        validator: |r| {
            r.results.len() == 2
                && r.results.iter().all(|row| {
                    row.get("published") == Some(&Value::Bool(true))
                        && row.get("user_id") == Some(&Value::Int(1))
                })
        },
    },
    Exercise {
        id: "where-like",
        module: "where-filtering",
        prompt: "Find posts with 'SQL' anywhere in the title:",
        hint: "Use LIKE with % wildcards: LIKE '%pattern%'",
        starter_code: "SELECT * FROM posts WHERE title ",
        solution: "SELECT * FROM posts WHERE title LIKE '%SQL%'",
        validator: |r| {
            !r.results.is_empty()
                && r
                    .results
                    .iter()
                    .all(|row| text(row, "title").is_some_and(|t| t.contains("SQL")))
        },
    },
    Exercise {
        id: "join-basic",
        module: "join-flow",
        prompt: "Join users with posts to see who wrote each post:",
        hint: "SELECT ... FROM users JOIN posts ON users.id = posts.user_id",
        starter_code: "SELECT users.name, posts.title FROM users ",
        solution: "SELECT users.name, posts.title FROM users JOIN posts ON users.id = posts.user_id",
        validator: |r| {
            r.results.len() == 5 && has_text(&r.results[0], "name") && has_text(&r.results[0], "title")
        },
    },
    Exercise {
        id: "join-filter",
        module: "join-flow",
        prompt: "Join users with posts, but only show published posts:",
        hint: "Add WHERE after the JOIN",
        starter_code: "SELECT users.name, posts.title FROM users JOIN posts ON users.id = posts.user_id ",
        solution: "SELECT users.name, posts.title FROM users JOIN posts ON users.id = posts.user_id WHERE posts.published = true",
        validator: |r| {
            r.results.len() == 4
                && r
                    .results
                    .iter()
                    .all(|row| text(row, "title") != Some("Draft Post"))
        },
    },
    Exercise {
        id: "agg-count",
        module: "aggregation",
        prompt: "Count how many posts each user has (group by user_id):",
        hint: "SELECT column, COUNT(*) FROM table GROUP BY column",
        starter_code: "SELECT user_id, ",
        solution: "SELECT user_id, COUNT(*) FROM posts GROUP BY user_id",
        validator: |r| r.results.len() >= 3 && r.results[0].contains("count"),
    },
    Exercise {
        id: "agg-total",
        module: "aggregation",
        prompt: "Find the total number of comments in the database:",
        hint: "Use COUNT(*) without GROUP BY for a total",
        starter_code: "SELECT ",
        solution: "SELECT COUNT(*) FROM comments",
        validator: |r| {
            r.results
                .first()
                .is_some_and(|row| row.get("count") == Some(&Value::Int(5)))
        },
    },
    Exercise {
        id: "pg-types-1",
        module: "pg-types",
        prompt: "Select all users, ordered by when they were created (newest first):",
        hint: "ORDER BY column DESC",
        starter_code: "SELECT * FROM users ",
        solution: "SELECT * FROM users ORDER BY created_at DESC",
        validator: |r| match (r.results.first(), r.results.last()) {
            (Some(first), Some(last)) => {
                match (text(first, "created_at"), text(last, "created_at")) {
                    (Some(newest), Some(oldest)) => newest >= oldest,
                    _ => false,
                }
            }
            _ => false,
        },
    },
    Exercise {
        id: "returning-insert",
        module: "returning-clause",
        prompt: "Insert a new user and get the full row back:",
        hint: "Add RETURNING * at the end",
        starter_code: "INSERT INTO users (name, email) VALUES ('New User', 'new@ex.com') ",
        solution: "INSERT INTO users (name, email) VALUES ('New User', 'new@ex.com') RETURNING *",
        validator: message_mentions_returning,
    },
    Exercise {
        id: "returning-update",
        module: "returning-clause",
        prompt: "Update a user and get the updated row back:",
        hint: "RETURNING works with UPDATE too",
        starter_code: "UPDATE users SET role = 'admin' WHERE id = 2 ",
        solution: "UPDATE users SET role = 'admin' WHERE id = 2 RETURNING *",
        validator: message_mentions_returning,
    },
];

/// Looks up an exercise by id.
#[must_use]
pub fn exercise(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

/// Exercises of one curriculum module, in order.
pub fn module_exercises(module: &str) -> impl Iterator<Item = &'static Exercise> + '_ {
    EXERCISES.iter().filter(move |e| e.module == module)
}
