//! `EventQueue` — pending entries ordered by virtual time, then submission.
//!
//! Every push is stamped with a monotonically increasing sequence number.
//! The `(time, seq)` pair is the map key, so two entries scheduled for the
//! same instant pop in the order they were pushed: first scheduled, first
//! executed.  Simultaneous batch arrivals and simultaneous machine
//! completions depend on this.
//!
//! `BTreeMap` gives O(log P) push and pop where P is the number of pending
//! entries.  P is bounded by machines + 1 arrival stream + fired signals, so
//! it stays small.

use std::collections::BTreeMap;

use upms_core::SimTime;

/// Ordering key of a pending entry.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct EventKey {
    pub time: SimTime,
    pub seq:  u64,
}

/// A priority queue mapping `(time, seq)` → item.
#[derive(Debug)]
pub struct EventQueue<T> {
    inner:    BTreeMap<EventKey, T>,
    next_seq: u64,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            inner:    BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `item` at `time`.  Returns the key it was filed under.
    pub fn push(&mut self, time: SimTime, item: T) -> EventKey {
        let key = EventKey { time, seq: self.next_seq };
        self.next_seq += 1;
        self.inner.insert(key, item);
        key
    }

    /// Remove and return the earliest entry.
    pub fn pop(&mut self) -> Option<(EventKey, T)> {
        self.inner.pop_first()
    }

    /// The time of the earliest entry, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|k| k.time)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
