//! Lazy predicate scan over a dataset

use std::iter::FusedIterator;

use crate::catalog::{Approach, Dataset};
use crate::filter::ApproachPredicate;
use crate::model::EventId;
use crate::observability::{log_event_with_fields, Event};

/// Counters for one query stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Approaches tested against the predicate
    pub scanned_count: usize,
    /// Approaches yielded
    pub returned_count: usize,
}

/// A lazy stream of approaches matching a predicate
///
/// Holds a cursor into the dataset; each `next()` tests approaches until one
/// matches or the dataset is exhausted.
pub struct Query<'a, P: ApproachPredicate + ?Sized> {
    dataset: &'a Dataset,
    predicate: &'a P,
    cursor: usize,
    stats: QueryStats,
    finished: bool,
}

/// Starts a lazy query. No approach is tested until the first `next()`.
pub fn query<'a, P>(dataset: &'a Dataset, predicate: &'a P) -> Query<'a, P>
where
    P: ApproachPredicate + ?Sized,
{
    Query {
        dataset,
        predicate,
        cursor: 0,
        stats: QueryStats::default(),
        finished: false,
    }
}

impl<'a, P: ApproachPredicate + ?Sized> Query<'a, P> {
    /// Counters so far
    pub fn stats(&self) -> QueryStats {
        self.stats
    }

    /// Approaches tested so far
    pub fn scanned(&self) -> usize {
        self.stats.scanned_count
    }

    /// Approaches yielded so far
    pub fn returned(&self) -> usize {
        self.stats.returned_count
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        let scanned = self.stats.scanned_count.to_string();
        let returned = self.stats.returned_count.to_string();
        log_event_with_fields(
            Event::QueryComplete,
            &[("scanned", scanned.as_str()), ("returned", returned.as_str())],
        );
    }
}

impl<'a, P: ApproachPredicate + ?Sized> Iterator for Query<'a, P> {
    type Item = Approach<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(approach) = self.dataset.approach(EventId(self.cursor)) {
            self.cursor += 1;
            self.stats.scanned_count += 1;
            if self.predicate.test(&approach) {
                self.stats.returned_count += 1;
                return Some(approach);
            }
        }
        self.finish();
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dataset.approach_count().saturating_sub(self.cursor);
        (0, Some(remaining))
    }
}

impl<P: ApproachPredicate + ?Sized> FusedIterator for Query<'_, P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{AttributeFilter, FilterSet};
    use crate::model::{ApproachEvent, AstroObject};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::cell::Cell;

    struct Counting<'c> {
        calls: &'c Cell<usize>,
        accept: bool,
    }

    impl ApproachPredicate for Counting<'_> {
        fn test(&self, _approach: &Approach<'_>) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.accept
        }
    }

    fn dataset() -> Dataset {
        let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
        Dataset::build(
            vec![
                AstroObject::new("433", Some("Eros".into()), Some(16.84), false),
                AstroObject::new("2020 BS", None, None, true),
            ],
            vec![
                ApproachEvent::new("433", at("2020-01-01 10:00"), 0.30, 5.0),
                ApproachEvent::new("2020 BS", at("2020-01-02 11:00"), 0.01, 12.0),
                ApproachEvent::new("433", at("2020-01-03 12:00"), 0.20, 6.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_query_is_lazy() {
        let dataset = dataset();
        let calls = Cell::new(0);
        let predicate = Counting {
            calls: &calls,
            accept: true,
        };

        let mut results = query(&dataset, &predicate);
        assert_eq!(calls.get(), 0);

        results.next();
        assert_eq!(calls.get(), 1);
        assert_eq!(results.scanned(), 1);
    }

    #[test]
    fn test_empty_filters_yield_everything_in_order() {
        let dataset = dataset();
        let filters = FilterSet::new();
        let ids: Vec<usize> = query(&dataset, &filters).map(|a| a.id().index()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_query_filters_in_order() {
        let dataset = dataset();
        let filters: FilterSet = vec![AttributeFilter::hazardous(false)].into();

        let mut results = query(&dataset, &filters);
        let times: Vec<String> = results.by_ref().map(|a| a.event().time_str()).collect();
        assert_eq!(times, vec!["2020-01-01 10:00", "2020-01-03 12:00"]);
        assert_eq!(
            results.stats(),
            QueryStats {
                scanned_count: 3,
                returned_count: 2
            }
        );
    }

    #[test]
    fn test_query_is_repeatable() {
        let dataset = dataset();
        let filters: FilterSet =
            vec![AttributeFilter::date_from(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap())].into();

        let first: Vec<usize> = query(&dataset, &filters).map(|a| a.id().index()).collect();
        let second: Vec<usize> = query(&dataset, &filters).map(|a| a.id().index()).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 2]);
    }

    #[test]
    fn test_exhausted_query_stays_exhausted() {
        let dataset = dataset();
        let calls = Cell::new(0);
        let predicate = Counting {
            calls: &calls,
            accept: false,
        };

        let mut results = query(&dataset, &predicate);
        assert!(results.next().is_none());
        assert!(results.next().is_none());
        assert_eq!(calls.get(), 3);
    }
}
