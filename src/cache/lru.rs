//! LRU Tracker Module
//!
//! Recency index used for capacity eviction.

use std::collections::{BTreeMap, HashMap};

// == LRU Tracker ==
/// Orders keys by last access.
///
/// Every touch stamps the key with a fresh sequence number; the smallest
/// stamp is the least recently used key.
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Access sequence -> key
    order: BTreeMap<u64, String>,
    /// Key -> its current access sequence
    stamps: HashMap<String, u64>,
    next_seq: u64,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used, tracking it if new.
    pub fn touch(&mut self, key: &str) {
        let seq = self.next_seq;
        self.next_seq += 1;

        match self.stamps.get_mut(key) {
            Some(stamp) => {
                self.order.remove(&*stamp);
                *stamp = seq;
            }
            None => {
                self.stamps.insert(key.to_string(), seq);
            }
        }
        self.order.insert(seq, key.to_string());
    }

    // == Remove ==
    /// Stops tracking a key. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        if let Some(seq) = self.stamps.remove(key) {
            self.order.remove(&seq);
        }
    }

    // == Pop Oldest ==
    /// Removes and returns the least recently used key.
    pub fn pop_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.stamps.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order.values().next().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.stamps.contains_key(key)
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
        self.stamps.clear();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_new() {
        let lru = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.peek_oldest(), None);
    }

    #[test]
    fn test_lru_oldest_is_first_touched() {
        let mut lru = LruTracker::new();

        lru.touch("posts:page1");
        lru.touch("posts:page2");
        lru.touch("menu:primary");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some("posts:page1"));
    }

    #[test]
    fn test_lru_retouch_moves_key_to_newest() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");
        lru.touch("a");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.pop_oldest(), Some("b".to_string()));
        assert_eq!(lru.pop_oldest(), Some("c".to_string()));
        assert_eq!(lru.pop_oldest(), Some("a".to_string()));
        assert_eq!(lru.pop_oldest(), None);
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.remove("a");
        lru.remove("nonexistent");

        assert_eq!(lru.len(), 1);
        assert!(!lru.contains("a"));
        assert_eq!(lru.peek_oldest(), Some("b"));
    }

    #[test]
    fn test_lru_touch_same_key_repeatedly() {
        let mut lru = LruTracker::new();

        for _ in 0..5 {
            lru.touch("key1");
        }

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.pop_oldest(), Some("key1".to_string()));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_clear() {
        let mut lru = LruTracker::new();
        lru.touch("a");
        lru.touch("b");

        lru.clear();

        assert!(lru.is_empty());
        assert_eq!(lru.pop_oldest(), None);
    }
}
