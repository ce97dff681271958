//! Frontier entry and its ordering.

use std::cmp::Ordering;

/// One element of the frontier.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry<K> {
    /// Identity of the queued element.
    pub key: K,
    /// Current best cost. Only ever decreases while queued.
    pub cost: f64,
    /// Element that currently offers `cost`, if any.
    pub parent: Option<K>,
    /// Insertion sequence, used to break cost ties.
    pub(crate) seq: u64,
}

impl<K> FrontierEntry<K> {
    pub(crate) fn new(key: K, cost: f64, parent: Option<K>, seq: u64) -> Self {
        Self {
            key,
            cost,
            parent,
            seq,
        }
    }

    /// Insertion sequence number (0 for the first insert).
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.seq
    }

    /// Heap order: lower cost first, then earlier insertion.
    /// NaN costs sort after every number.
    pub(crate) fn priority_cmp(&self, other: &Self) -> Ordering {
        let by_cost = match (self.cost.is_nan(), other.cost.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .cost
                .partial_cmp(&other.cost)
                .unwrap_or(Ordering::Equal),
        };
        by_cost.then(self.seq.cmp(&other.seq))
    }
}
