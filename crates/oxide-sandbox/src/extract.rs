//! Clause extractors.
//!
//! Each extractor scans the whole statement text for one clause and returns
//! it if present, independent of every other clause. The select pipeline
//! decides the order in which the extracted clauses are applied.

use std::sync::OnceLock;

use regex::Regex;

pub(crate) fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("clause pattern is a valid regex"))
}

/// Collapses every whitespace run into one space and trims the ends.
///
/// Case is preserved so that string literals keep their spelling.
#[must_use]
pub fn collapse_whitespace(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `JOIN <table> ON <t1>.<c1> = <t2>.<c2>`, all identifiers lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    /// The joined table.
    pub table: String,
    /// Table qualifier of the left side of `ON`.
    pub left_table: String,
    /// Column of the left side of `ON`.
    pub left_column: String,
    /// Table qualifier of the right side of `ON`.
    pub right_table: String,
    /// Column of the right side of `ON`.
    pub right_column: String,
}

/// Sort direction for `ORDER BY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// `ORDER BY <column> [ASC|DESC]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Column to sort by, as written.
    pub column: String,
    /// Sort direction.
    pub direction: OrderDirection,
}

/// One entry of the projection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    /// Column read from the working set (qualifier stripped).
    pub source: String,
    /// Column name in the result row.
    pub alias: String,
}

/// The text between `SELECT` and `FROM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    text: String,
}

impl Projection {
    /// The trimmed projection text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `SELECT *`.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.text == "*"
    }

    /// Whether `count(*)` appears anywhere in the list (case-insensitive).
    #[must_use]
    pub fn has_count_star(&self) -> bool {
        self.text.to_lowercase().contains("count(*)")
    }

    /// Splits the list into items, resolving `AS` aliases and stripping
    /// `table.` qualifiers. A `COUNT(*)` item reads the `count` column
    /// produced by grouping.
    #[must_use]
    pub fn items(&self) -> Vec<SelectItem> {
        static AS: OnceLock<Regex> = OnceLock::new();
        static QUALIFIER: OnceLock<Regex> = OnceLock::new();
        let as_re = cached(&AS, r"(?i)\s+as\s+");
        let qualifier_re = cached(&QUALIFIER, r"^\w+\.");

        self.text
            .split(',')
            .map(|item| {
                let mut parts = as_re.splitn(item.trim(), 3);
                let expr = parts.next().unwrap_or_default();
                let alias = parts.next().filter(|a| !a.is_empty());

                let compact: String = expr.split_whitespace().collect();
                let source = if compact.eq_ignore_ascii_case("count(*)") {
                    String::from("count")
                } else {
                    qualifier_re.replace(expr, "").into_owned()
                };
                SelectItem {
                    alias: alias.map_or_else(|| source.clone(), str::to_string),
                    source,
                }
            })
            .collect()
    }
}

/// `FROM <table>`, lower-cased.
#[must_use]
pub fn from_table(sql: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)from\s+(\w+)").captures(sql)?;
    Some(caps[1].to_lowercase())
}

/// The first `JOIN ... ON a.x = b.y` in the statement.
#[must_use]
pub fn join_clause(sql: &str) -> Option<JoinClause> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(
        &RE,
        r"(?i)join\s+(\w+)\s+on\s+(\w+)\.(\w+)\s*=\s*(\w+)\.(\w+)",
    );
    let caps = re.captures(sql)?;
    Some(JoinClause {
        table: caps[1].to_lowercase(),
        left_table: caps[2].to_lowercase(),
        left_column: caps[3].to_lowercase(),
        right_table: caps[4].to_lowercase(),
        right_column: caps[5].to_lowercase(),
    })
}

/// The `WHERE` condition, up to `order`, `group`, `limit` or the end.
#[must_use]
pub fn where_clause(sql: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(&RE, r"(?i)where\s+(.+?)(?:\s+order|\s+group|\s+limit|$)");
    let caps = re.captures(sql)?;
    caps.get(1).map(|m| m.as_str().trim())
}

/// `ORDER BY <column> [ASC|DESC]`.
#[must_use]
pub fn order_by(sql: &str) -> Option<OrderBy> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)order\s+by\s+(\w+)(?:\s+(asc|desc))?").captures(sql)?;
    let direction = match caps.get(2) {
        Some(dir) if dir.as_str().eq_ignore_ascii_case("desc") => OrderDirection::Desc,
        _ => OrderDirection::Asc,
    };
    Some(OrderBy {
        column: caps[1].to_string(),
        direction,
    })
}

/// `LIMIT <n>`. Counts beyond `usize` saturate.
#[must_use]
pub fn limit(sql: &str) -> Option<usize> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)limit\s+(\d+)").captures(sql)?;
    Some(caps[1].parse().unwrap_or(usize::MAX))
}

/// `GROUP BY <column>`.
#[must_use]
pub fn group_by(sql: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)group\s+by\s+(\w+)").captures(sql)?;
    Some(caps[1].to_string())
}

/// The projection list between `SELECT` and `FROM`.
#[must_use]
pub fn projection(sql: &str) -> Option<Projection> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)select\s+(.+?)\s+from").captures(sql)?;
    Some(Projection {
        text: caps[1].trim().to_string(),
    })
}

/// Whether the statement asks for `RETURNING` anywhere in its text.
#[must_use]
pub fn has_returning(sql: &str) -> bool {
    sql.to_lowercase().contains("returning")
}

/// `INSERT INTO <table>`, lower-cased.
#[must_use]
pub fn insert_table(sql: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)insert\s+into\s+(\w+)").captures(sql)?;
    Some(caps[1].to_lowercase())
}
