//! Transposition cache for search results
//!
//! Maps (position key, remaining depth) to a previously computed score. The
//! key also carries the searching side and the evaluator, because a score
//! only means something relative to whose eyes it was computed through.
//! With that, one cache can safely serve several engines.
//!
//! Alpha-beta produces bounds as well as exact values, so each entry records
//! which one it holds and a probe only answers when the stored value decides
//! the current window.
//!
//! # Sharing
//!
//! An engine owns its cache behind a [`SharedCache`] handle. Engines that
//! should cooperate (self-play) are built from clones of the same handle.
//! Searches are synchronous: the lock is taken once per move selection and
//! held for the whole search, so there is no per-node locking. Engines
//! sharing a cache must use the same [`crate::config::RulesConfig`].
//!
//! # Example
//!
//! ```
//! use hasami::board::Side;
//! use hasami::eval::EvalKind;
//! use hasami::search::{CacheKey, EntryType, TranspositionCache};
//!
//! let mut tt = TranspositionCache::new(1024);
//! let key = CacheKey::new(0x1234_5678_9ABC_DEF0, 3, Side::Black, EvalKind::Baseline);
//! tt.store(key, 1.5, EntryType::Exact);
//! assert_eq!(tt.probe(key, f64::NEG_INFINITY, f64::INFINITY), Some(1.5));
//! ```

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use crate::board::Side;
use crate::eval::EvalKind;

/// Default number of entries before the cache is flushed.
pub const DEFAULT_CAPACITY: usize = 1 << 20;

/// Handle to a cache that may be shared between engines.
pub type SharedCache = Arc<Mutex<TranspositionCache>>;

/// Create a fresh cache behind a shareable handle.
#[must_use]
pub fn shared_cache(capacity: usize) -> SharedCache {
    Arc::new(Mutex::new(TranspositionCache::new(capacity)))
}

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the node was searched with no cutoff inside the window
    Exact,
    /// Lower bound - true score >= stored value (fail high)
    LowerBound,
    /// Upper bound - true score <= stored value (fail low)
    UpperBound,
}

/// Cache key: position, remaining depth and the search's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub position: u64,
    pub depth: u8,
    pub perspective: Side,
    pub evaluator: EvalKind,
}

impl CacheKey {
    #[inline]
    pub fn new(position: u64, depth: u8, perspective: Side, evaluator: EvalKind) -> Self {
        Self {
            position,
            depth,
            perspective,
            evaluator,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    score: f64,
    entry_type: EntryType,
}

/// Memo table of search scores.
pub struct TranspositionCache {
    entries: FxHashMap<CacheKey, CacheEntry>,
    capacity: usize,
}

impl TranspositionCache {
    /// Create a cache holding at most `capacity` entries. When full, the
    /// table is flushed before the next insertion.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity: capacity.max(1),
        }
    }

    /// Score usable for the window `(alpha, beta)`, if any.
    #[must_use]
    pub fn probe(&self, key: CacheKey, alpha: f64, beta: f64) -> Option<f64> {
        let entry = self.entries.get(&key)?;
        match entry.entry_type {
            EntryType::Exact => Some(entry.score),
            EntryType::LowerBound if entry.score >= beta => Some(entry.score),
            EntryType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Store a score. An exact value is never overwritten by a bound.
    pub fn store(&mut self, key: CacheKey, score: f64, entry_type: EntryType) {
        if let Some(existing) = self.entries.get(&key) {
            if existing.entry_type == EntryType::Exact && entry_type != EntryType::Exact {
                return;
            }
        } else if self.entries.len() >= self.capacity {
            tracing::debug!(capacity = self.capacity, "transposition cache full, flushing");
            self.entries.clear();
        }
        self.entries.insert(key, CacheEntry { score, entry_type });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TranspositionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
