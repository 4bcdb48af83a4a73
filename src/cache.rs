//! Caller-owned memoization of computed scores.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Scores keyed by requester id, then candidate id.
///
/// スコアは入力から決定的に再計算できるため、いつ破棄してもよい。
/// Lookups borrow the ids, so a cache hit allocates nothing.
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct ScoreCache {
    entries: Arc<RwLock<FxHashMap<String, FxHashMap<String, u8>>>>,
}

impl ScoreCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, requester_id: &str, candidate_id: &str) -> Option<u8> {
        self.entries
            .read()
            .get(requester_id)
            .and_then(|scores| scores.get(candidate_id))
            .copied()
    }

    /// Stores a score, returning the one it replaced.
    pub fn insert(&self, requester_id: &str, candidate_id: &str, score: u8) -> Option<u8> {
        let mut entries = self.entries.write();
        if let Some(scores) = entries.get_mut(requester_id) {
            return scores.insert(candidate_id.to_string(), score);
        }

        entries
            .entry(requester_id.to_string())
            .or_default()
            .insert(candidate_id.to_string(), score)
    }

    /// Returns the cached score or computes and stores it.
    ///
    /// `compute` runs without holding the lock, so two workers racing on the
    /// same key may both compute; the results are identical.
    pub fn get_or_compute<F>(&self, requester_id: &str, candidate_id: &str, compute: F) -> u8
    where
        F: FnOnce() -> u8,
    {
        if let Some(score) = self.get(requester_id, candidate_id) {
            return score;
        }

        let score = compute();
        self.insert(requester_id, candidate_id, score);
        score
    }

    /// Drops every score computed for `requester_id`, e.g. after a profile edit.
    pub fn invalidate_requester(&self, requester_id: &str) -> usize {
        let scores = self.entries.write().remove(requester_id);
        let removed = scores.map_or(0, |scores| scores.len());
        if removed > 0 {
            tracing::debug!(requester_id, removed, "invalidated cached scores");
        }
        removed
    }

    /// Drops every score involving `candidate_id`.
    pub fn invalidate_candidate(&self, candidate_id: &str) -> usize {
        let mut entries = self.entries.write();
        let removed = entries
            .values_mut()
            .filter_map(|scores| scores.remove(candidate_id))
            .count();
        // 空になった依頼者のマップは残さない
        entries.retain(|_, scores| !scores.is_empty());
        removed
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().values().map(FxHashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().values().all(FxHashMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = ScoreCache::new();
        assert_eq!(cache.get("u1", "c1"), None);
        assert_eq!(cache.insert("u1", "c1", 72), None);
        assert_eq!(cache.insert("u1", "c1", 80), Some(72));
        assert_eq!(cache.get("u1", "c1"), Some(80));
        assert_eq!(cache.get("u2", "c1"), None);
    }

    #[test]
    fn get_or_compute_runs_once() {
        let cache = ScoreCache::new();
        let mut calls = 0;
        let first = cache.get_or_compute("u1", "c1", || {
            calls += 1;
            64
        });
        let second = cache.get_or_compute("u1", "c1", || {
            calls += 1;
            0
        });
        assert_eq!((first, second), (64, 64));
        assert_eq!(calls, 1);
    }

    #[test]
    fn invalidation_is_scoped() {
        let cache = ScoreCache::new();
        cache.insert("u1", "c1", 10);
        cache.insert("u1", "c2", 20);
        cache.insert("u2", "c1", 30);

        assert_eq!(cache.invalidate_requester("u1"), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("u2", "c1"), Some(30));

        assert_eq!(cache.invalidate_candidate("c1"), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidating_a_candidate_prunes_emptied_requesters() {
        let cache = ScoreCache::new();
        cache.insert("u1", "c1", 10);
        cache.insert("u2", "c1", 20);
        cache.insert("u2", "c2", 30);
        assert_eq!(cache.len(), 3);

        assert_eq!(cache.invalidate_candidate("c1"), 2);
        assert_eq!(cache.len(), 1);
        assert!(!cache.entries.read().contains_key("u1"));
        assert_eq!(cache.invalidate_requester("u1"), 0);
        assert_eq!(cache.get("u2", "c2"), Some(30));
    }

    #[test]
    fn clones_share_entries() {
        let cache = ScoreCache::new();
        let handle = cache.clone();
        handle.insert("u1", "c1", 55);
        assert_eq!(cache.get("u1", "c1"), Some(55));
        cache.clear();
        assert!(handle.is_empty());
    }
}
