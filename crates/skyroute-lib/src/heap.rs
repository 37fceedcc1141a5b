//! Indexable binary min-heap over airport codes.
//!
//! Dijkstra performs up to one decrease-key per edge examined, so the heap
//! keeps a code-to-slot map alongside the dense entry array. The map is
//! updated on every swap, push, and pop, which is what makes membership and
//! priority lookup O(1) and decrease-key O(log n).

use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry {
    code: String,
    priority: f64,
}

/// Min-priority queue keyed by airport code, supporting decrease-key.
///
/// Tie-breaking among equal priorities is arbitrary heap order; the search
/// only needs some shortest path, not a canonical one among ties.
#[derive(Debug, Clone, Default)]
pub struct IndexedHeap {
    entries: Vec<Entry>,
    slots: HashMap<String, usize>,
}

impl IndexedHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `code` is still on the frontier (inserted and not yet popped).
    pub fn contains(&self, code: &str) -> bool {
        self.slots.contains_key(code)
    }

    /// Current priority of a present code.
    pub fn priority(&self, code: &str) -> Option<f64> {
        self.slots.get(code).map(|&slot| self.entries[slot].priority)
    }

    /// Insert a new entry. Call sites must not insert a code twice; a
    /// duplicate would orphan the original slot.
    pub fn insert(&mut self, code: impl Into<String>, priority: f64) {
        let code = code.into();
        debug_assert!(!self.slots.contains_key(&code), "duplicate heap key {code}");
        let slot = self.entries.len();
        self.slots.insert(code.clone(), slot);
        self.entries.push(Entry { code, priority });
        self.sift_up(slot);
    }

    /// Lower the priority of an already-present code and restore heap order.
    ///
    /// Returns `false` when the code is absent. The structure does not reject
    /// an increase, but the search invariant only holds for decreases; that
    /// is the caller's responsibility.
    pub fn decrease_key(&mut self, code: &str, priority: f64) -> bool {
        let Some(&slot) = self.slots.get(code) else {
            return false;
        };
        self.entries[slot].priority = priority;
        self.sift_up(slot);
        true
    }

    /// Remove and return the minimum-priority entry.
    pub fn pop_min(&mut self) -> Option<(String, f64)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let min = self.entries.pop().expect("non-empty heap");
        self.slots.remove(&min.code);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((min.code, min.priority))
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[parent].priority <= self.entries[slot].priority {
                break;
            }
            self.swap(parent, slot);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < self.entries.len()
                && self.entries[left].priority < self.entries[smallest].priority
            {
                smallest = left;
            }
            if right < self.entries.len()
                && self.entries[right].priority < self.entries[smallest].priority
            {
                smallest = right;
            }
            if smallest == slot {
                break;
            }

            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.slots.insert(self.entries[a].code.clone(), a);
        self.slots.insert(self.entries[b].code.clone(), b);
    }
}
