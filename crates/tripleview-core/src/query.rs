//! Pattern query parsing
//!
//! Queries use a restricted Cypher-like surface syntax:
//!
//! ```text
//! MATCH (s)-[p]->(o) WHERE s = "microgravity"
//! ```
//!
//! The `MATCH` pattern is a structural gate only; placeholder names are
//! ignored. At most one `field = value` equality is supported.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::triple::{Field, Triple};

/// Canonical example shown to users when a query is rejected
pub const EXAMPLE_QUERY: &str = r#"MATCH (s)-[p]->(o) WHERE s = "value""#;

static MATCH_PATTERN: OnceLock<Regex> = OnceLock::new();
static WHERE_CLAUSE: OnceLock<Regex> = OnceLock::new();

fn match_pattern() -> &'static Regex {
    MATCH_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)MATCH\s*\(.*?\)\s*-\s*\[.*?\]\s*->\s*\(.*?\)")
            .expect("Invalid MATCH pattern")
    })
}

fn where_clause() -> &'static Regex {
    WHERE_CLAUSE
        .get_or_init(|| Regex::new(r"(?i)\bWHERE\b\s*(.*)").expect("Invalid WHERE pattern"))
}

/// Query parse failure, rendered verbatim to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid syntax. Use: MATCH (s)-[p]->(o) WHERE s = \"value\"")]
    InvalidSyntax,

    #[error("Invalid WHERE clause. Example: WHERE s = \"value\"")]
    InvalidWhereClause,

    #[error("Unknown filter field '{0}'. Use s, p, or o.")]
    UnknownField(String),
}

/// Discriminant of a [`ParseError`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    InvalidSyntax,
    InvalidWhereClause,
    UnknownField,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::InvalidSyntax => ParseErrorKind::InvalidSyntax,
            Self::InvalidWhereClause => ParseErrorKind::InvalidWhereClause,
            Self::UnknownField(_) => ParseErrorKind::UnknownField,
        }
    }
}

/// A single `field = value` equality from a WHERE clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub field: Field,

    /// Comparison value, quotes stripped; compared case-insensitively
    pub value: String,
}

impl Condition {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Case-insensitive exact comparison against the addressed field
    pub fn matches(&self, triple: &Triple) -> bool {
        triple.field(self.field).to_lowercase() == self.value.to_lowercase()
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = \"{}\"", self.field, self.value)
    }
}

/// Outcome of parsing a query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuery {
    /// Blank input; callers clear their results
    Empty,
    /// A MATCH pattern without WHERE: every triple matches
    All,
    /// A MATCH pattern restricted by one equality
    Where(Condition),
}

impl ParsedQuery {
    pub fn condition(&self) -> Option<&Condition> {
        match self {
            Self::Where(condition) => Some(condition),
            Self::Empty | Self::All => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Parse and validate a query string
pub fn parse(input: &str) -> Result<ParsedQuery, ParseError> {
    if input.trim().is_empty() {
        return Ok(ParsedQuery::Empty);
    }

    let pattern = match_pattern()
        .find(input)
        .ok_or(ParseError::InvalidSyntax)?;

    let rest = &input[pattern.end()..];
    let Some(captures) = where_clause().captures(rest) else {
        tracing::trace!("No WHERE clause, matching all triples");
        return Ok(ParsedQuery::All);
    };

    let clause = captures.get(1).map_or("", |m| m.as_str());
    let condition = parse_condition(clause)?;
    tracing::trace!("Parsed condition: {}", condition);
    Ok(ParsedQuery::Where(condition))
}

fn parse_condition(clause: &str) -> Result<Condition, ParseError> {
    let unquoted: String = clause.chars().filter(|c| *c != '"' && *c != '\'').collect();
    let parts: Vec<&str> = unquoted.trim().split('=').map(str::trim).collect();

    let [lhs, rhs] = parts.as_slice() else {
        return Err(ParseError::InvalidWhereClause);
    };
    if lhs.is_empty() || rhs.is_empty() {
        return Err(ParseError::InvalidWhereClause);
    }

    let field = Field::from_token(lhs).ok_or_else(|| ParseError::UnknownField(lhs.to_string()))?;
    Ok(Condition::new(field, *rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(query: &str) -> Condition {
        match parse(query).unwrap() {
            ParsedQuery::Where(condition) => condition,
            other => panic!("expected a condition, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_query_is_empty() {
        assert_eq!(parse("").unwrap(), ParsedQuery::Empty);
        assert_eq!(parse("   \n\t").unwrap(), ParsedQuery::Empty);
    }

    #[test]
    fn test_rejects_missing_pattern() {
        for query in [
            "hello",
            "MATCH",
            "MATCH (s)",
            "MATCH (s)-[p]-(o)",
            "MATCH (s)->(o)",
            "MATCH s-[p]->o",
            r#"WHERE s = "x""#,
            "MATCH (s\n)-[p]->(o)",
        ] {
            let err = parse(query).unwrap_err();
            assert_eq!(err.kind(), ParseErrorKind::InvalidSyntax, "query: {query:?}");
        }
    }

    #[test]
    fn test_syntax_message_shows_example() {
        let message = parse("nonsense").unwrap_err().to_string();
        assert!(message.contains(EXAMPLE_QUERY));
    }

    #[test]
    fn test_pattern_is_case_and_whitespace_tolerant() {
        assert_eq!(parse("MATCH (s)-[p]->(o)").unwrap(), ParsedQuery::All);
        assert_eq!(parse("match(a)-[b]->(c)").unwrap(), ParsedQuery::All);
        assert_eq!(parse("  Match ( x ) - [ ] -> ( )  ").unwrap(), ParsedQuery::All);
        assert_eq!(parse("please MATCH ()-[]->() now").unwrap(), ParsedQuery::All);
    }

    #[test]
    fn test_field_aliases() {
        let short = condition(r#"MATCH (s)-[p]->(o) WHERE s = "x""#);
        let long = condition(r#"MATCH (s)-[p]->(o) WHERE subject = "x""#);
        assert_eq!(short, long);
        assert_eq!(short, Condition::new(Field::Subject, "x"));

        assert_eq!(
            condition("MATCH (s)-[p]->(o) WHERE p = affects").field,
            Field::Predicate
        );
        assert_eq!(
            condition("MATCH (s)-[p]->(o) WHERE predicate = affects").field,
            Field::Predicate
        );
        assert_eq!(condition("MATCH (s)-[p]->(o) WHERE o = DNA").field, Field::Object);
        assert_eq!(
            condition("MATCH (s)-[p]->(o) WHERE object = DNA").field,
            Field::Object
        );
    }

    #[test]
    fn test_where_keyword_is_case_insensitive() {
        let cond = condition(r#"MATCH (s)-[p]->(o) where o = 'bone density'"#);
        assert_eq!(cond, Condition::new(Field::Object, "bone density"));
    }

    #[test]
    fn test_quotes_stripped_and_value_kept_verbatim() {
        let cond = condition(r#"MATCH (s)-[p]->(o) WHERE s = "COVID-19's  spread""#);
        assert_eq!(cond.value, "COVID-19s  spread");
    }

    #[test]
    fn test_unknown_field() {
        let err = parse(r#"MATCH (s)-[p]->(o) WHERE x = "y""#).unwrap_err();
        assert_eq!(err, ParseError::UnknownField("x".to_string()));
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_field_tokens_are_case_sensitive() {
        let err = parse(r#"MATCH (s)-[p]->(o) WHERE S = "y""#).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnknownField);
    }

    #[test]
    fn test_malformed_where() {
        for query in [
            "MATCH (s)-[p]->(o) WHERE s",
            "MATCH (s)-[p]->(o) WHERE s = a = b",
            "MATCH (s)-[p]->(o) WHERE s =",
            r#"MATCH (s)-[p]->(o) WHERE = "a""#,
            r#"MATCH (s)-[p]->(o) WHERE s = """#,
            "MATCH (s)-[p]->(o) WHERE",
        ] {
            let err = parse(query).unwrap_err();
            assert_eq!(err.kind(), ParseErrorKind::InvalidWhereClause, "query: {query:?}");
        }
    }

    #[test]
    fn test_where_only_reads_rest_of_line() {
        let cond = condition("MATCH (s)-[p]->(o) WHERE s = radiation\nand more");
        assert_eq!(cond.value, "radiation");

        let cond = condition("MATCH (s)-[p]->(o) WHERE\n  o = DNA");
        assert_eq!(cond, Condition::new(Field::Object, "DNA"));
    }

    #[test]
    fn test_where_inside_placeholder_is_ignored() {
        assert_eq!(
            parse("MATCH (somewhere x)-[p]->(o)").unwrap(),
            ParsedQuery::All
        );
    }

    #[test]
    fn test_condition_matches_case_insensitively() {
        let cond = Condition::new(Field::Subject, "covid-19");
        assert!(cond.matches(&Triple::new("COVID-19", "causes", "fever")));
        assert!(!cond.matches(&Triple::new("COVID-19 variant", "causes", "fever")));
    }
}
