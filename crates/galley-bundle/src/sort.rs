//! Comparator and sort-order materialization.
//!
//! The comparator contract: missing values sort before everything ascending
//! and after everything descending (missing is "worse", directionally);
//! strings compare on their pre-lowercased keys; numbers compare
//! numerically; exact ties break by ascending entity id, so every order is
//! total and deterministic. Missing is never coerced to a sentinel number
//! that could tie with real data.

use std::cmp::Ordering;

/// Sort direction for one materialized order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Key suffix used in the sortedIds map ("name.asc", "finalPrice.desc").
    pub fn suffix(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// One comparator input. A given sort field always produces the same
/// variant for every entity, so Num/Str never actually mix within a field;
/// the cross-variant ordering below just keeps the comparator total.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Missing,
    Num(f64),
    Str(String),
}

impl SortValue {
    pub fn num(n: impl Into<f64>) -> Self {
        SortValue::Num(n.into())
    }

    pub fn opt_num(n: Option<impl Into<f64>>) -> Self {
        n.map_or(SortValue::Missing, |v| SortValue::Num(v.into()))
    }

    pub fn str(s: &str) -> Self {
        SortValue::Str(s.to_string())
    }
}

/// Direction-independent total order: Missing < Num < Str.
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    use SortValue::*;
    match (a, b) {
        (Missing, Missing) => Ordering::Equal,
        (Missing, _) => Ordering::Less,
        (_, Missing) => Ordering::Greater,
        (Num(x), Num(y)) => x.total_cmp(y),
        (Num(_), Str(_)) => Ordering::Less,
        (Str(_), Num(_)) => Ordering::Greater,
        (Str(x), Str(y)) => x.cmp(y),
    }
}

/// Produce a total ordering of every id from (id, key) pairs.
///
/// The direction flips the value comparison only; the ascending-id
/// tie-break is applied afterwards and never flips. Flipping the whole
/// comparison would also put missing values first in descending order,
/// which is the opposite of the contract.
pub fn materialize<Id: Ord + Copy>(mut entries: Vec<(Id, SortValue)>, dir: Direction) -> Vec<Id> {
    entries.sort_by(|a, b| {
        let by_value = match dir {
            Direction::Ascending => compare_values(&a.1, &b.1),
            Direction::Descending => compare_values(&b.1, &a.1),
        };
        by_value.then(a.0.cmp(&b.0))
    });
    entries.into_iter().map(|(id, _)| id).collect()
}
