use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::image_pipeline::cfa::{BayerPattern, CfaMasks};
use crate::image_pipeline::common::Shape;

type Key = (BayerPattern, Shape);

/// Entries kept when no capacity is given.
pub(crate) const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Default)]
struct Entries {
    masks: HashMap<Key, Arc<CfaMasks>>,
    /// Insertion order, oldest first.
    order: VecDeque<Key>,
}

/// Masks shared across calls, keyed by pattern and grid shape.
///
/// Entries are immutable once inserted, so readers on any thread can hold
/// them while other threads insert. At most `capacity` entries are kept; the
/// oldest one is dropped to make room. Callers still holding an evicted
/// `Arc` keep it alive.
#[derive(Debug)]
pub struct MaskCache {
    entries: RwLock<Entries>,
    capacity: usize,
}

impl Default for MaskCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl MaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of zero disables storage: every lookup builds fresh masks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            capacity,
        }
    }

    pub fn get_or_insert(&self, pattern: BayerPattern, shape: Shape) -> Arc<CfaMasks> {
        let key = (pattern, shape);
        if let Some(masks) = self.entries.read().masks.get(&key) {
            trace!(%pattern, ?shape, "Mask cache hit");
            return Arc::clone(masks);
        }

        let masks = Arc::new(CfaMasks::new(pattern, shape));
        if self.capacity == 0 {
            return masks;
        }

        let mut entries = self.entries.write();
        if let Some(existing) = entries.masks.get(&key) {
            return Arc::clone(existing);
        }
        while entries.masks.len() >= self.capacity {
            let Some(oldest) = entries.order.pop_front() else {
                break;
            };
            entries.masks.remove(&oldest);
            trace!(pattern = %oldest.0, shape = ?oldest.1, "Mask cache eviction");
        }
        entries.order.push_back(key);
        entries.masks.insert(key, Arc::clone(&masks));
        masks
    }

    /// Whether masks for `pattern` and `shape` are currently stored.
    pub fn contains(&self, pattern: BayerPattern, shape: Shape) -> bool {
        self.entries.read().masks.contains_key(&(pattern, shape))
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.read().masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().masks.is_empty()
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write();
        entries.masks.clear();
        entries.order.clear();
    }
}
