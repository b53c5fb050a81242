//! Expiry Index Module
//!
//! Orders keys by expiration time so purges only visit expired entries.

use std::collections::BTreeSet;

// == Expiry Index ==
/// Set of `(expires_at, key)` pairs, earliest expiry first.
#[derive(Debug, Default)]
pub struct ExpiryIndex {
    deadlines: BTreeSet<(u64, String)>,
}

impl ExpiryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, expires_at: u64, key: &str) {
        self.deadlines.insert((expires_at, key.to_string()));
    }

    /// Removes the pair; the caller must pass the deadline it inserted.
    pub fn remove(&mut self, expires_at: u64, key: &str) {
        self.deadlines.remove(&(expires_at, key.to_string()));
    }

    // == Drain Expired ==
    /// Removes and returns every key whose deadline is `<= now_ms`,
    /// earliest first.
    pub fn drain_expired(&mut self, now_ms: u64) -> Vec<String> {
        let mut expired = Vec::new();
        while let Some((deadline, _)) = self.deadlines.first() {
            if *deadline > now_ms {
                break;
            }
            if let Some((_, key)) = self.deadlines.pop_first() {
                expired.push(key);
            }
        }
        expired
    }

    /// Earliest deadline still tracked.
    pub fn next_expiry(&self) -> Option<u64> {
        self.deadlines.first().map(|(deadline, _)| *deadline)
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_only_expired_in_deadline_order() {
        let mut index = ExpiryIndex::new();
        index.insert(300, "c");
        index.insert(100, "a");
        index.insert(200, "b");

        assert_eq!(index.drain_expired(200), vec!["a", "b"]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.next_expiry(), Some(300));
    }

    #[test]
    fn test_drain_nothing_expired() {
        let mut index = ExpiryIndex::new();
        index.insert(1_000, "a");

        assert!(index.drain_expired(999).is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_remove_exact_pair() {
        let mut index = ExpiryIndex::new();
        index.insert(100, "a");
        index.insert(100, "b");

        index.remove(100, "a");
        // Wrong deadline leaves the pair alone
        index.remove(999, "b");

        assert_eq!(index.drain_expired(u64::MAX), vec!["b"]);
    }

    #[test]
    fn test_clear() {
        let mut index = ExpiryIndex::new();
        index.insert(1, "a");
        index.clear();

        assert_eq!(index.next_expiry(), None);
    }
}
