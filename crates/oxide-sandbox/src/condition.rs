//! WHERE condition evaluation.
//!
//! A condition is a conjunction of atomic predicates joined by `AND`. Each
//! atomic predicate is recognized by trying a fixed list of patterns in
//! order; the first pattern that matches decides the predicate.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::error::{Result, SandboxError};
use crate::extract::cached;
use crate::value::{Row, Value};

/// Ordered comparison operators against an integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Greater than (>)
    Gt,
    /// Less than (<)
    Lt,
    /// Greater than or equal (>=)
    Gte,
}

impl CompareOp {
    fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Gt => lhs > rhs,
            Self::Lt => lhs < rhs,
            Self::Gte => lhs >= rhs,
        }
    }
}

/// A recognized atomic predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `col = 'text'`, comparing the column's text form.
    TextEq { column: String, value: String },
    /// `col = <int>`
    NumberEq { column: String, value: f64 },
    /// `col != 'text'`
    TextNe { column: String, value: String },
    /// `col > <int>`, `col < <int>`, `col >= <int>`
    Compare {
        column: String,
        op: CompareOp,
        value: f64,
    },
    /// `col LIKE '%needle%'`, case-insensitive containment.
    Contains { column: String, needle: String },
    /// `col IS NULL`
    IsNull { column: String },
    /// `col IS NOT NULL`
    IsNotNull { column: String },
    /// `col = true` / `col = false`
    BoolEq { column: String, value: bool },
}

impl Predicate {
    /// Recognizes an atomic condition, or returns `None` if no form matches.
    #[must_use]
    pub fn parse(condition: &str) -> Option<Self> {
        static TEXT_EQ: OnceLock<Regex> = OnceLock::new();
        static NUMBER_EQ: OnceLock<Regex> = OnceLock::new();
        static TEXT_NE: OnceLock<Regex> = OnceLock::new();
        static GT: OnceLock<Regex> = OnceLock::new();
        static LT: OnceLock<Regex> = OnceLock::new();
        static GTE: OnceLock<Regex> = OnceLock::new();
        static LIKE: OnceLock<Regex> = OnceLock::new();
        static IS_NULL: OnceLock<Regex> = OnceLock::new();
        static IS_NOT_NULL: OnceLock<Regex> = OnceLock::new();
        static BOOL_EQ: OnceLock<Regex> = OnceLock::new();

        if let Some(c) = cached(&TEXT_EQ, r"(?i)(\w+)\s*=\s*'([^']+)'").captures(condition) {
            return Some(Self::TextEq {
                column: c[1].to_string(),
                value: c[2].to_string(),
            });
        }
        if let Some(c) = cached(&NUMBER_EQ, r"(?i)(\w+)\s*=\s*(\d+)").captures(condition) {
            return Some(Self::NumberEq {
                column: c[1].to_string(),
                value: parse_number(&c[2]),
            });
        }
        if let Some(c) = cached(&TEXT_NE, r"(?i)(\w+)\s*!=\s*'([^']+)'").captures(condition) {
            return Some(Self::TextNe {
                column: c[1].to_string(),
                value: c[2].to_string(),
            });
        }
        let ordered = [
            (&GT, r"(?i)(\w+)\s*>\s*(\d+)", CompareOp::Gt),
            (&LT, r"(?i)(\w+)\s*<\s*(\d+)", CompareOp::Lt),
            (&GTE, r"(?i)(\w+)\s*>=\s*(\d+)", CompareOp::Gte),
        ];
        for (cell, pattern, op) in ordered {
            if let Some(c) = cached(cell, pattern).captures(condition) {
                return Some(Self::Compare {
                    column: c[1].to_string(),
                    op,
                    value: parse_number(&c[2]),
                });
            }
        }
        if let Some(c) = cached(&LIKE, r"(?i)(\w+)\s+like\s+'%([^%]+)%'").captures(condition) {
            return Some(Self::Contains {
                column: c[1].to_string(),
                needle: c[2].to_lowercase(),
            });
        }
        if let Some(c) = cached(&IS_NULL, r"(?i)(\w+)\s+is\s+null").captures(condition) {
            return Some(Self::IsNull {
                column: c[1].to_string(),
            });
        }
        if let Some(c) = cached(&IS_NOT_NULL, r"(?i)(\w+)\s+is\s+not\s+null").captures(condition)
        {
            return Some(Self::IsNotNull {
                column: c[1].to_string(),
            });
        }
        if let Some(c) = cached(&BOOL_EQ, r"(?i)(\w+)\s*=\s*(true|false)").captures(condition) {
            return Some(Self::BoolEq {
                column: c[1].to_string(),
                value: c[2].eq_ignore_ascii_case("true"),
            });
        }
        None
    }

    /// Evaluates the predicate against one row.
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Self::TextEq { column, value } => row.get(column).is_some_and(|v| v.to_string() == *value),
            Self::NumberEq { column, value } => row
                .get(column)
                .and_then(Value::as_f64)
                .is_some_and(|n| n == *value),
            Self::TextNe { column, value } => row.get(column).is_none_or(|v| v.to_string() != *value),
            Self::Compare { column, op, value } => row
                .get(column)
                .and_then(Value::as_comparable_number)
                .is_some_and(|n| op.holds(n, *value)),
            Self::Contains { column, needle } => row
                .get(column)
                .is_some_and(|v| v.to_string().to_lowercase().contains(needle.as_str())),
            Self::IsNull { column } => row.get(column).is_none_or(Value::is_null),
            Self::IsNotNull { column } => row.get(column).is_some_and(|v| !v.is_null()),
            Self::BoolEq { column, value } => row.get(column) == Some(&Value::Bool(*value)),
        }
    }
}

fn parse_number(digits: &str) -> f64 {
    digits.parse().unwrap_or(f64::INFINITY)
}

/// A conjunctive WHERE condition split into its atomic parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    parts: Vec<(String, Option<Predicate>)>,
}

impl Condition {
    /// Splits a condition on `AND` and recognizes each part.
    ///
    /// # Errors
    ///
    /// With `strict` set, returns [`SandboxError::UnsupportedPredicate`] for
    /// the first part that matches no recognized form. Otherwise such a part
    /// holds for every row.
    pub fn parse(condition: &str, strict: bool) -> Result<Self> {
        static AND: OnceLock<Regex> = OnceLock::new();
        let and_re = cached(&AND, r"(?i)\s+and\s+");

        let mut parts = Vec::new();
        for part in and_re.split(condition) {
            let part = part.trim();
            let predicate = Predicate::parse(part);
            if predicate.is_none() {
                if strict {
                    return Err(SandboxError::UnsupportedPredicate(part.to_string()));
                }
                warn!(condition = %part, "Unrecognized condition passes every row");
            }
            parts.push((part.to_string(), predicate));
        }
        Ok(Self { parts })
    }

    /// Whether every recognized part holds for the row.
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        self.parts
            .iter()
            .all(|(_, predicate)| predicate.as_ref().is_none_or(|p| p.matches(row)))
    }

    /// Keeps the rows for which the condition holds.
    #[must_use]
    pub fn filter(&self, rows: Vec<Row>) -> Vec<Row> {
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Row {
        Row::new()
            .with("id", 1)
            .with("name", "Alice")
            .with("role", "admin")
            .with("total", 99.99)
            .with("published", true)
            .with("deleted_at", Value::Null)
    }

    fn eval(condition: &str) -> bool {
        Condition::parse(condition, false).unwrap().matches(&alice())
    }

    #[test]
    fn test_text_equality() {
        assert!(eval("role = 'admin'"));
        assert!(!eval("role = 'user'"));
        assert!(eval("id = '1'"));
    }

    #[test]
    fn test_number_equality_is_strict() {
        assert!(eval("id = 1"));
        assert!(!eval("id = 2"));
        assert!(!eval("name = 1"));
    }

    #[test]
    fn test_text_inequality() {
        assert!(eval("role != 'user'"));
        assert!(!eval("role != 'admin'"));
        assert!(eval("missing != 'x'"));
    }

    #[test]
    fn test_ordered_comparisons() {
        assert!(eval("total > 50"));
        assert!(!eval("total > 100"));
        assert!(eval("total < 100"));
        assert!(eval("id >= 1"));
        assert!(!eval("name > 1"));
    }

    #[test]
    fn test_like_two_sided_case_insensitive() {
        assert!(eval("name LIKE '%lic%'"));
        assert!(eval("name like '%ALI%'"));
        assert!(!eval("name LIKE '%bob%'"));
    }

    #[test]
    fn test_one_sided_like_is_unrecognized() {
        assert_eq!(Predicate::parse("name LIKE 'Al%'"), None);
    }

    #[test]
    fn test_null_checks() {
        assert!(eval("deleted_at IS NULL"));
        assert!(eval("missing IS NULL"));
        assert!(!eval("name IS NULL"));
        assert!(eval("name IS NOT NULL"));
        assert!(!eval("deleted_at IS NOT NULL"));
    }

    #[test]
    fn test_boolean_equality() {
        assert!(eval("published = true"));
        assert!(!eval("published = FALSE"));
    }

    #[test]
    fn test_qualified_column_uses_last_identifier() {
        assert!(eval("users.role = 'admin'"));
    }

    #[test]
    fn test_conjunction() {
        assert!(eval("role = 'admin' AND id = 1"));
        assert!(!eval("role = 'admin' and id = 2"));
    }

    #[test]
    fn test_unrecognized_passes_when_lenient() {
        assert!(eval("role IN ('user')"));
    }

    #[test]
    fn test_unrecognized_fails_when_strict() {
        let err = Condition::parse("role IN ('user')", true).unwrap_err();
        assert!(matches!(err, SandboxError::UnsupportedPredicate(p) if p == "role IN ('user')"));
    }

    #[test]
    fn test_priority_text_eq_before_bool() {
        assert_eq!(
            Predicate::parse("flag = 'true'"),
            Some(Predicate::TextEq {
                column: "flag".into(),
                value: "true".into()
            })
        );
    }
}
