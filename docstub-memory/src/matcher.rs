//! Clause evaluation for in-memory document filtering.
//!
//! The matcher resolves the nested `schedule_details` fields a clause
//! inspects, falling back to an empty list or empty string when a document
//! lacks them. The fallbacks are asymmetric on purpose: a missing start
//! time fails a lower bound, while a missing end time passes an upper
//! bound. Callers of the emulation rely on both behaviors.

use std::collections::BTreeSet;

use bson::{Bson, Document};

use docstub_core::query::{Clause, Query};

/// Field holding the structured schedule on activity documents.
const SCHEDULE_DETAILS: &str = "schedule_details";

/// Evaluates query clauses against a single stored document.
pub(crate) struct ClauseMatcher<'a> {
    document: &'a Document,
}

impl<'a> ClauseMatcher<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// True if every clause in the query holds for this document.
    pub fn matches(&self, query: &Query) -> bool {
        query
            .clauses
            .iter()
            .all(|clause| self.matches_clause(clause))
    }

    fn matches_clause(&self, clause: &Clause) -> bool {
        match clause {
            Clause::DaysIntersect(days) => {
                let scheduled = self.schedule_days();
                days.iter().any(|day| scheduled.contains(&day.as_str()))
            }
            Clause::StartTimeAtLeast(bound) => self.schedule_time("start_time") >= bound.as_str(),
            Clause::EndTimeAtMost(bound) => self.schedule_time("end_time") <= bound.as_str(),
            // Identifier clauses are resolved by point lookup, not by scanning.
            Clause::IdEquals(_) => true,
        }
    }

    fn schedule_details(&self) -> Option<&'a Document> {
        self.document
            .get(SCHEDULE_DETAILS)
            .and_then(Bson::as_document)
    }

    /// Scheduled weekday names; empty when the document has no schedule.
    pub fn schedule_days(&self) -> Vec<&'a str> {
        self.schedule_details()
            .and_then(|details| details.get("days"))
            .and_then(Bson::as_array)
            .map(|days| days.iter().filter_map(Bson::as_str).collect())
            .unwrap_or_default()
    }

    /// A schedule time field; empty string when absent.
    fn schedule_time(&self, field: &str) -> &'a str {
        self.schedule_details()
            .and_then(|details| details.get(field))
            .and_then(Bson::as_str)
            .unwrap_or("")
    }
}

/// Collects the distinct weekday names across documents, sorted
/// lexicographically.
pub(crate) fn distinct_schedule_days<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
) -> Vec<String> {
    let mut days = BTreeSet::new();
    for document in documents {
        days.extend(ClauseMatcher::new(document).schedule_days());
    }

    days.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use docstub_core::query::Filter;

    fn scheduled(days: &[&str], start_time: &str, end_time: &str) -> Document {
        doc! {
            "description": "test activity",
            "schedule_details": {
                "days": days.to_vec(),
                "start_time": start_time,
                "end_time": end_time,
            },
        }
    }

    #[test]
    fn day_intersection_requires_a_shared_day() {
        let chess = scheduled(&["Monday", "Friday"], "15:15", "16:45");

        let friday = Query::new().with(Filter::days_intersect(["Friday"]));
        let sunday = Query::new().with(Filter::days_intersect(["Sunday"]));

        assert!(ClauseMatcher::new(&chess).matches(&friday));
        assert!(!ClauseMatcher::new(&chess).matches(&sunday));
    }

    #[test]
    fn empty_day_list_matches_nothing() {
        let chess = scheduled(&["Monday"], "15:15", "16:45");
        let query = Query::new().with(Filter::days_intersect(Vec::<String>::new()));

        assert!(!ClauseMatcher::new(&chess).matches(&query));
    }

    #[test]
    fn time_bounds_compare_lexicographically() {
        let basketball = scheduled(&["Wednesday", "Friday"], "15:15", "17:00");
        let fitness = scheduled(&["Monday", "Wednesday", "Friday"], "06:30", "07:45");

        let window = Query::new()
            .with(Filter::start_time_at_least("15:00"))
            .with(Filter::end_time_at_most("17:00"));

        assert!(ClauseMatcher::new(&basketball).matches(&window));
        assert!(!ClauseMatcher::new(&fitness).matches(&window));
    }

    #[test]
    fn missing_schedule_fails_day_and_start_clauses() {
        let bare = doc! { "description": "no schedule" };

        let by_day = Query::new().with(Filter::days_intersect(["Monday"]));
        let by_start = Query::new().with(Filter::start_time_at_least("08:00"));

        assert!(!ClauseMatcher::new(&bare).matches(&by_day));
        assert!(!ClauseMatcher::new(&bare).matches(&by_start));
    }

    #[test]
    fn missing_schedule_passes_end_clause() {
        // The absent end time compares as the empty string, which is <= any bound.
        let bare = doc! { "description": "no schedule" };
        let by_end = Query::new().with(Filter::end_time_at_most("08:00"));

        assert!(ClauseMatcher::new(&bare).matches(&by_end));
    }

    #[test]
    fn identifier_clause_imposes_no_constraint_in_a_scan() {
        let chess = scheduled(&["Monday"], "15:15", "16:45");
        let query = Query::new().with(Filter::id_equals("Something Else"));

        assert!(ClauseMatcher::new(&chess).matches(&query));
    }

    #[test]
    fn empty_query_matches_everything() {
        let bare = doc! {};

        assert!(ClauseMatcher::new(&bare).matches(&Query::new()));
    }

    #[test]
    fn distinct_days_are_sorted_and_deduplicated() {
        let chess = scheduled(&["Monday", "Friday"], "15:15", "16:45");
        let fitness = scheduled(&["Monday", "Wednesday", "Friday"], "06:30", "07:45");
        let bare = doc! { "description": "no schedule" };

        let days = distinct_schedule_days([&chess, &fitness, &bare]);

        assert_eq!(days, vec!["Friday", "Monday", "Wednesday"]);
    }
}
