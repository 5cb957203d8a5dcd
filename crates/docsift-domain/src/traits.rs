//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and the stores
//! callers hand to it. Implementations live in [`crate::history`] or in
//! the caller's own code.

/// Append-only log of pipeline results
///
/// The processor and analyzer record every successful result into an
/// attached store. Stores decide their own retention; the ones shipped in
/// this crate are bounded.
pub trait HistoryStore<T> {
    /// Append an entry
    fn record(&mut self, entry: T);

    /// Copy of the retained entries, oldest first
    fn snapshot(&self) -> Vec<T>;

    /// Number of retained entries
    fn len(&self) -> usize;

    /// Whether nothing is retained
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
