//! Typed query clauses for the emulated document store.
//!
//! The dynamic operator mappings of a real document database (shapes like
//! `{"schedule_details.days": {"$in": [...]}}`) are replaced here by a
//! closed set of clause variants covering exactly the query shapes the
//! surrounding application issues. Clauses combine with logical AND; a
//! query with no clauses matches every document.
//!
//! # Query Building
//!
//! Queries are assembled from [`Filter`] constructors:
//!
//! ```ignore
//! use docstub::query::{Query, Filter};
//!
//! let query = Query::new()
//!     .with(Filter::days_intersect(["Monday", "Friday"]))
//!     .with(Filter::start_time_at_least("15:00"))
//!     .with(Filter::end_time_at_most("17:00"));
//! ```

/// A single predicate clause over a stored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Matches documents whose `schedule_details.days` list shares at least
    /// one entry with the given day list. A document without the field is
    /// treated as having an empty list and never matches.
    DaysIntersect(Vec<String>),
    /// Matches documents whose `schedule_details.start_time` is
    /// lexicographically greater than or equal to the given "HH:MM" bound.
    /// A document without the field fails this clause.
    StartTimeAtLeast(String),
    /// Matches documents whose `schedule_details.end_time` is
    /// lexicographically less than or equal to the given "HH:MM" bound.
    /// A document without the field passes this clause.
    EndTimeAtMost(String),
    /// Selects the document with the given identifier. Honored by point
    /// lookups and updates; imposes no constraint in a scan.
    IdEquals(String),
}

/// A conjunction of clauses describing which documents an operation targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Clauses combined with logical AND. An empty list matches everything.
    pub clauses: Vec<Clause>,
}

impl Query {
    /// Creates an empty query matching every document.
    pub fn new() -> Self {
        Query { clauses: Vec::new() }
    }

    /// Creates a point-lookup query for the given identifier.
    pub fn by_id(id: impl Into<String>) -> Self {
        Query {
            clauses: vec![Clause::IdEquals(id.into())],
        }
    }

    /// Appends a clause to this query.
    pub fn with(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Returns the identifier this query points at, if any.
    ///
    /// Point operations (`find_one`, `update_one`) honor only this clause
    /// shape; a query without one yields their not-found result.
    pub fn id_lookup(&self) -> Option<&str> {
        self.clauses.iter().find_map(|clause| match clause {
            Clause::IdEquals(id) => Some(id.as_str()),
            _ => None,
        })
    }
}

/// Helper struct for constructing query clauses.
///
/// All methods accept values as `Into<String>` for ergonomics.
pub struct Filter;

impl Filter {
    /// Creates a day-intersection clause.
    ///
    /// Matches documents scheduled on at least one of the given weekdays.
    pub fn days_intersect<I, S>(days: I) -> Clause
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Clause::DaysIntersect(days.into_iter().map(Into::into).collect())
    }

    /// Creates a start-time lower bound clause ("HH:MM").
    ///
    /// Matches documents starting at or after the bound.
    pub fn start_time_at_least(bound: impl Into<String>) -> Clause {
        Clause::StartTimeAtLeast(bound.into())
    }

    /// Creates an end-time upper bound clause ("HH:MM").
    ///
    /// Matches documents ending at or before the bound.
    pub fn end_time_at_most(bound: impl Into<String>) -> Clause {
        Clause::EndTimeAtMost(bound.into())
    }

    /// Creates an identifier equality clause.
    pub fn id_equals(id: impl Into<String>) -> Clause {
        Clause::IdEquals(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_lookup_finds_identifier_clause() {
        let query = Query::new()
            .with(Filter::days_intersect(["Monday"]))
            .with(Filter::id_equals("Chess Club"));

        assert_eq!(query.id_lookup(), Some("Chess Club"));
    }

    #[test]
    fn id_lookup_is_none_without_identifier_clause() {
        let query = Query::new().with(Filter::start_time_at_least("15:00"));

        assert_eq!(query.id_lookup(), None);
        assert_eq!(Query::new().id_lookup(), None);
    }

    #[test]
    fn by_id_builds_a_single_identifier_clause() {
        let query = Query::by_id("mchen");

        assert_eq!(query.clauses, vec![Clause::IdEquals("mchen".to_string())]);
    }
}
