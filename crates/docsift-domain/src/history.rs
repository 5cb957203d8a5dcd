//! Bounded history stores

use crate::traits::HistoryStore;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Ring buffer keeping the most recent `capacity` entries
#[derive(Debug, Clone)]
pub struct BoundedHistory<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedHistory<T> {
    /// Create a history holding at most `capacity` entries
    ///
    /// A capacity of zero is raised to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use docsift_domain::{BoundedHistory, HistoryStore};
    ///
    /// let mut history = BoundedHistory::new(2);
    /// history.record(1);
    /// history.record(2);
    /// history.record(3);
    /// assert_eq!(history.snapshot(), vec![2, 3]);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of retained entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Clone> HistoryStore<T> for BoundedHistory<T> {
    fn record(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    fn snapshot(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Clonable handle to a mutex-guarded [`BoundedHistory`]
///
/// Used when several processor or analyzer instances record into one log,
/// e.g. one instance per request in a server.
#[derive(Debug)]
pub struct SharedHistory<T> {
    inner: Arc<Mutex<BoundedHistory<T>>>,
}

impl<T> SharedHistory<T> {
    /// Create a shared history holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BoundedHistory::new(capacity))),
        }
    }
}

impl<T> Clone for SharedHistory<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> HistoryStore<T> for SharedHistory<T> {
    fn record(&mut self, entry: T) {
        // A poisoned lock still guards a structurally valid ring buffer.
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.record(entry);
    }

    fn snapshot(&self) -> Vec<T> {
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.snapshot()
    }

    fn len(&self) -> usize {
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.len()
    }
}
