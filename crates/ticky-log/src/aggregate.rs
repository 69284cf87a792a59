use crate::classifier::LineClassifier;
use crate::ir::{Event, UserCounts};
use crate::report::{ErrorReport, UserReport};
use std::collections::BTreeMap;

/// Running aggregates for one pass over a log.
///
/// Holds the error-message frequencies and the per-user tallies. Both maps are
/// ordered, so iteration (and therefore report output) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    errors: BTreeMap<String, u64>,
    users: BTreeMap<String, UserCounts>,
    matched: u64,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds every line of `lines` that classifies into an event.
    pub fn from_lines<'a, I>(classifier: &LineClassifier, lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut aggregator = Self::new();
        for line in lines {
            if let Some(event) = classifier.classify(line) {
                aggregator.accumulate(event);
            }
        }
        aggregator
    }

    /// Folds one event into the aggregates.
    ///
    /// `ERROR` events count against their message. Every event with a non-empty
    /// user materialises that user's record, even if its severity has no counter.
    pub fn accumulate(&mut self, event: Event) {
        self.matched = self.matched.saturating_add(1);

        if event.severity.is_error() {
            let count = self.errors.entry(event.message).or_default();
            *count = count.saturating_add(1);
        }

        if !event.user.is_empty() {
            self.users
                .entry(event.user)
                .or_default()
                .record(&event.severity);
        }
    }

    /// Merges a shard produced from a disjoint slice of the same input.
    pub fn merge(&mut self, other: Aggregator) {
        self.matched = self.matched.saturating_add(other.matched);
        for (message, count) in other.errors {
            let entry = self.errors.entry(message).or_default();
            *entry = entry.saturating_add(count);
        }
        for (user, counts) in other.users {
            self.users.entry(user).or_default().absorb(counts);
        }
    }

    pub fn error_counts(&self) -> &BTreeMap<String, u64> {
        &self.errors
    }

    pub fn user_stats(&self) -> &BTreeMap<String, UserCounts> {
        &self.users
    }

    /// Number of events folded in so far.
    pub fn matched_events(&self) -> u64 {
        self.matched
    }

    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }

    pub fn error_report(&self) -> ErrorReport {
        ErrorReport::from_counts(&self.errors)
    }

    pub fn user_report(&self) -> UserReport {
        UserReport::from_stats(&self.users)
    }
}
