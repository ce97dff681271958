//! Array-backed indexed min-heap.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, GraphResult};

use super::entry::FrontierEntry;

/// Mutable min-priority queue keyed by `K` with decrease-key support.
///
/// Not synchronized: all mutation goes through `&mut self`.
#[derive(Debug, Clone)]
pub struct Frontier<K> {
    heap: Vec<FrontierEntry<K>>,
    positions: HashMap<K, usize>,
    next_seq: u64,
}

impl<K> Default for Frontier<K>
where
    K: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Frontier<K>
where
    K: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Queue `key` with `cost` and no parent.
    ///
    /// # Errors
    /// * `GraphError::DuplicateEntry` - `key` is already queued
    pub fn insert(&mut self, key: K, cost: f64) -> GraphResult<()> {
        self.insert_with_parent(key, cost, None)
    }

    /// Queue `key` with `cost` and an initial parent.
    ///
    /// # Errors
    /// * `GraphError::DuplicateEntry` - `key` is already queued
    pub fn insert_with_parent(&mut self, key: K, cost: f64, parent: Option<K>) -> GraphResult<()> {
        if self.positions.contains_key(&key) {
            return Err(GraphError::DuplicateEntry(format!("{:?}", key)));
        }

        let position = self.heap.len();
        self.positions.insert(key.clone(), position);
        self.heap
            .push(FrontierEntry::new(key, cost, parent, self.next_seq));
        self.next_seq += 1;
        self.sift_up(position);
        Ok(())
    }

    /// Remove and return the entry with the smallest cost.
    ///
    /// Among equal costs the earliest inserted entry wins.
    ///
    /// # Errors
    /// * `GraphError::EmptyFrontier` - nothing is queued
    pub fn extract_min(&mut self) -> GraphResult<FrontierEntry<K>> {
        if self.heap.is_empty() {
            return Err(GraphError::EmptyFrontier);
        }

        let last = self.heap.len() - 1;
        self.swap_entries(0, last);
        let entry = self.heap.pop().ok_or(GraphError::EmptyFrontier)?;
        self.positions.remove(&entry.key);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(entry)
    }

    /// Lower the cost of a queued key and record its new parent.
    ///
    /// Returns `true` when the entry changed. Unknown or already extracted
    /// keys, and costs that are not strictly lower (including NaN), leave the
    /// frontier untouched and return `false`.
    pub fn change_cost(&mut self, key: &K, parent: K, cost: f64) -> bool {
        let Some(&position) = self.positions.get(key) else {
            return false;
        };

        let entry = &mut self.heap[position];
        if cost.is_nan() || cost >= entry.cost {
            return false;
        }

        entry.cost = cost;
        entry.parent = Some(parent);
        self.sift_up(position);
        true
    }

    /// Number of queued entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Current cost of a queued key.
    pub fn cost_of(&self, key: &K) -> Option<f64> {
        self.positions.get(key).map(|&p| self.heap[p].cost)
    }

    /// Current parent candidate of a queued key.
    pub fn parent_of(&self, key: &K) -> Option<&K> {
        self.positions
            .get(key)
            .and_then(|&p| self.heap[p].parent.as_ref())
    }

    /// The entry `extract_min` would return next.
    pub fn peek(&self) -> Option<&FrontierEntry<K>> {
        self.heap.first()
    }

    /// Check that the position map matches the array and that every parent
    /// slot orders before its children.
    pub fn is_consistent(&self) -> bool {
        if self.positions.len() != self.heap.len() {
            return false;
        }

        self.heap.iter().enumerate().all(|(i, entry)| {
            let mapped = self.positions.get(&entry.key) == Some(&i);
            let ordered = i == 0 || self.heap[(i - 1) / 2].priority_cmp(entry).is_le();
            mapped && ordered
        })
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.heap[position].priority_cmp(&self.heap[parent]).is_lt() {
                self.swap_entries(position, parent);
                position = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;

            if left < len && self.heap[left].priority_cmp(&self.heap[smallest]).is_lt() {
                smallest = left;
            }
            if right < len && self.heap[right].priority_cmp(&self.heap[smallest]).is_lt() {
                smallest = right;
            }
            if smallest == position {
                break;
            }

            self.swap_entries(position, smallest);
            position = smallest;
        }
    }

    /// Swap two slots and keep the position map in step.
    fn swap_entries(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(p) = self.positions.get_mut(&self.heap[a].key) {
            *p = a;
        }
        if let Some(p) = self.positions.get_mut(&self.heap[b].key) {
            *p = b;
        }
    }
}
