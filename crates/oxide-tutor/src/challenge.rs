//! Open-ended sandbox challenges.

use std::fmt;

use oxide_sandbox::{ResultSet, Value};
use serde::Serialize;

use crate::exercise::{has_text, text};
use crate::task::{Task, Validator};

/// How hard a challenge is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// A challenge with no reference solution, only a validator.
#[derive(Clone, Copy)]
pub struct Challenge {
    /// Unique id.
    pub id: &'static str,
    /// How hard it is.
    pub difficulty: Difficulty,
    /// What the learner is asked to do.
    pub prompt: &'static str,
    /// A nudge towards the answer.
    pub hint: &'static str,
    validator: Validator,
}

impl fmt::Debug for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Challenge")
            .field("id", &self.id)
            .field("difficulty", &self.difficulty)
            .finish_non_exhaustive()
    }
}

impl Task for Challenge {
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

/// All challenges, in presentation order.
pub const CHALLENGES: &[Challenge] = &[
    Challenge {
        id: "c1",
        difficulty: Difficulty::Easy,
        prompt: "Find all users who are NOT admins",
        hint: "Use != or <> for not equal",
        validator: |r| {
            r.results.len() == 3 && r.results.iter().all(|u| text(u, "role") != Some("admin"))
        },
    },
    Challenge {
        id: "c2",
        difficulty: Difficulty::Easy,
        prompt: "Count the total number of posts",
        hint: "Use COUNT(*)",
        validator: |r| {
            r.results
                .first()
                .is_some_and(|row| row.get("count") == Some(&Value::Int(5)))
        },
    },
    Challenge {
        id: "c3",
        difficulty: Difficulty::Medium,
        prompt: "Find all published posts with their author names",
        hint: "JOIN users and posts, filter by published",
        validator: |r| {
            r.results.len() == 4 && has_text(&r.results[0], "name") && has_text(&r.results[0], "title")
        },
    },
    Challenge {
        id: "c4",
        difficulty: Difficulty::Medium,
        prompt: "Find users who have placed orders over $100",
        hint: "JOIN users and orders, use WHERE total > 100",
        validator: |r| r.results.len() >= 2 && r.results.iter().all(|u| has_text(u, "name")),
    },
    Challenge {
        id: "c5",
        difficulty: Difficulty::Medium,
        prompt: "Count how many posts each user has written",
        hint: "GROUP BY user_id with COUNT",
        validator: |r| r.results.len() >= 3 && r.results[0].contains("count"),
    },
    Challenge {
        id: "c6",
        difficulty: Difficulty::Hard,
        prompt: "Find the user with the most posts",
        hint: "GROUP BY, ORDER BY count DESC, LIMIT 1",
        validator: |r| r.results.len() == 1,
    },
    Challenge {
        id: "c7",
        difficulty: Difficulty::Easy,
        prompt: "Get the 3 most recent orders",
        hint: "ORDER BY created_at DESC LIMIT 3",
        validator: |r| r.results.len() == 3,
    },
    Challenge {
        id: "c8",
        difficulty: Difficulty::Medium,
        prompt: "Find all comments on posts written by Alice",
        hint: "You need to join comments → posts → users",
        validator: |r| !r.results.is_empty(),
    },
];

/// Looks up a challenge by id.
#[must_use]
pub fn challenge(id: &str) -> Option<&'static Challenge> {
    CHALLENGES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Hard.to_string(), "hard");
        assert_eq!(
            serde_json::to_string(&Difficulty::Medium).unwrap(),
            r#""medium""#
        );
    }

    #[test]
    fn test_lookup() {
        assert_eq!(CHALLENGES.len(), 8);
        assert_eq!(challenge("c6").map(|c| c.difficulty), Some(Difficulty::Hard));
        assert!(challenge("c9").is_none());
    }
}
