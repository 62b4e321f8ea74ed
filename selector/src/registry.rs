use alloc::vec::Vec;

use crate::key::{KeyGeometryMap, SelectionKey};
use crate::{Geometry, Item, ItemValue};

/// Accumulates per-item geometry reports as items are measured,
/// independent of selection state.
///
/// Measurement callbacks fire at arbitrary points after an item enters the
/// render tree, out of order and possibly more than once (multi-pass
/// layout). The registry is therefore an upsert-only keyed map with an
/// explicit "pending" state: [`lookup`](Self::lookup) returns `None` until
/// a report has arrived for that value. Consumers must treat `None` as a
/// valid, non-error state and hold their previous target.
#[derive(Clone, Debug)]
pub struct LayoutRegistry<K = ItemValue> {
    entries: KeyGeometryMap<K>,
}

impl<K: SelectionKey> Default for LayoutRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SelectionKey> LayoutRegistry<K> {
    pub fn new() -> Self {
        Self {
            entries: KeyGeometryMap::<K>::default(),
        }
    }

    /// Idempotent upsert; the last report for a given value wins.
    pub fn report(&mut self, value: K, geometry: Geometry) {
        strace!(
            offset = geometry.offset,
            extent = geometry.extent,
            "LayoutRegistry::report"
        );
        self.entries.insert(value, geometry);
    }

    /// Geometry for `value`, or `None` while measurement is still pending.
    pub fn lookup(&self, value: &K) -> Option<Geometry> {
        self.entries.get(value).copied()
    }

    pub fn contains(&self, value: &K) -> bool {
        self.entries.contains_key(value)
    }

    /// Drops entries whose value no longer satisfies `keep`.
    ///
    /// Must run before lookups on every reconciliation so stale geometry
    /// from removed items is never served.
    pub fn prune(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.entries.retain(|k, _| keep(k));
    }

    /// Prunes to the values present in `items`.
    pub fn prune_to_items(&mut self, items: &[Item<K>]) {
        let before = self.entries.len();
        self.entries
            .retain(|k, _| items.iter().any(|it| it.value == *k));
        sdebug!(
            before,
            after = self.entries.len(),
            "LayoutRegistry::prune_to_items"
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the cached geometry (value → geometry) without
    /// allocations.
    pub fn for_each(&self, mut f: impl FnMut(&K, Geometry)) {
        for (k, g) in self.entries.iter() {
            f(k, *g);
        }
    }

    /// Exports the cached geometry as a `Vec` (useful for persistence
    /// across remounts).
    pub fn export(&self) -> Vec<(K, Geometry)> {
        let mut out = Vec::with_capacity(self.entries.len());
        self.for_each(|k, g| out.push((k.clone(), g)));
        out
    }

    /// Replaces the cached geometry from an iterator (useful when
    /// restoring state).
    pub fn import(&mut self, entries: impl IntoIterator<Item = (K, Geometry)>) {
        self.entries.clear();
        let mut n = 0usize;
        for (k, g) in entries {
            self.entries.insert(k, g);
            n = n.saturating_add(1);
        }
        sdebug!(entries = n, "LayoutRegistry::import");
    }
}
