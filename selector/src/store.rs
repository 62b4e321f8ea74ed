use alloc::vec::Vec;
use core::cell::Cell;

use crate::key::SelectionKey;
use crate::{ControlMode, Item, ItemValue, Reconcile, Selection, SelectorOptions};

/// The single source of truth for "what is selected".
///
/// The store reconciles two equivalent selection APIs (by value or by
/// index), each of which may be externally controlled or left to internal
/// defaulting. Resolution runs as a pure function over `(props, items)`
/// with the documented precedence rather than by incremental state
/// patching, so prop refreshes cannot drift from user selections.
///
/// This type is intentionally UI-agnostic: the surrounding widget supplies
/// items and control props on every render and forwards activation events
/// to [`select`](Self::select).
#[derive(Clone, Debug)]
pub struct SelectionStore<K = ItemValue> {
    options: SelectorOptions<K>,
    selection: Option<Selection<K>>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: SelectionKey> SelectionStore<K> {
    /// Creates a store and resolves the initial selection.
    ///
    /// Resolution order: controlled `value` if it matches an enabled item,
    /// then `default_value`, then the item at the controlled `index` when in
    /// range and enabled, then the first enabled item. A non-empty list with
    /// every item disabled resolves to index 0; an empty list resolves to no
    /// selection.
    pub fn new(options: SelectorOptions<K>) -> Self {
        let selection = Self::resolve(&options);
        sdebug!(
            item_count = options.items.len(),
            resolved = selection.is_some(),
            "SelectionStore::new"
        );
        Self {
            options,
            selection,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &SelectorOptions<K> {
        &self.options
    }

    pub fn items(&self) -> &[Item<K>] {
        &self.options.items
    }

    pub fn item_count(&self) -> usize {
        self.options.items.len()
    }

    /// `Controlled` when the caller supplies a `value` or `index` prop.
    pub fn mode(&self) -> ControlMode {
        if self.options.value.is_some() || self.options.index.is_some() {
            ControlMode::Controlled
        } else {
            ControlMode::Uncontrolled
        }
    }

    pub fn selection(&self) -> Option<&Selection<K>> {
        self.selection.as_ref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.as_ref().map(|s| s.index)
    }

    pub fn selected_value(&self) -> Option<&K> {
        self.selection.as_ref().map(|s| &s.value)
    }

    /// Position of `value` in the current item list.
    pub fn index_of(&self, value: &K) -> Option<usize> {
        self.options.items.iter().position(|it| it.value == *value)
    }

    /// Handles an activation event for the item at `index`.
    ///
    /// No-op (no state change, no callbacks) when the index is out of range,
    /// the item is disabled, or the index is already selected. Otherwise the
    /// value- and index-keyed change callbacks each fire exactly once; in
    /// uncontrolled mode internal state updates *before* they fire, so a
    /// re-render triggered from a callback observes the new selection.
    ///
    /// Returns `true` when a selection event was emitted.
    pub fn select(&mut self, index: usize) -> bool {
        let (value, item_disabled) = match self.options.items.get(index) {
            Some(it) => (it.value.clone(), it.disabled),
            None => {
                strace!(index, "select: index out of range");
                return false;
            }
        };
        if item_disabled {
            strace!(index, "select: item disabled");
            return false;
        }
        if self.selection.as_ref().is_some_and(|s| s.index == index) {
            return false;
        }

        sdebug!(index, mode = ?self.mode(), "select");
        if self.mode() == ControlMode::Uncontrolled {
            self.selection = Some(Selection {
                index,
                value: value.clone(),
            });
        }

        if let Some(cb) = &self.options.on_value_change {
            cb(&value);
        }
        if let Some(cb) = &self.options.on_index_change {
            cb(index);
        }
        self.notify();
        true
    }

    /// Replaces the item list after it changed identity (items added,
    /// removed, or reordered by value).
    ///
    /// Selection follows the *value*: if the selected value still exists its
    /// index is re-derived from the new position. If it no longer exists (or
    /// became disabled) the selection falls back to the initial resolution
    /// order — the widgets this engine serves default to item 0 rather than
    /// rendering unselected, and that contract is preserved here.
    ///
    /// Never fires the value/index change callbacks; only `on_change`.
    pub fn reconcile(&mut self, items: Vec<Item<K>>) -> Reconcile {
        let replaced = !items.is_empty()
            && !self.options.items.is_empty()
            && !items
                .iter()
                .any(|it| self.options.items.iter().any(|old| old.value == it.value));

        self.options.items = items;

        let outcome = if replaced {
            self.selection = Self::resolve(&self.options);
            Reconcile::Replaced
        } else if let Some(prev) = self.selection.take() {
            match self.index_of(&prev.value) {
                Some(i) if !self.options.items[i].disabled => {
                    let moved = i != prev.index;
                    self.selection = Some(Selection {
                        index: i,
                        value: prev.value,
                    });
                    if moved {
                        Reconcile::Moved
                    } else {
                        Reconcile::Unchanged
                    }
                }
                _ => {
                    self.selection = Self::resolve(&self.options);
                    Reconcile::Fallback
                }
            }
        } else {
            self.selection = Self::resolve(&self.options);
            if self.selection.is_some() {
                Reconcile::Fallback
            } else {
                Reconcile::Unchanged
            }
        };

        sdebug!(
            item_count = self.options.items.len(),
            outcome = ?outcome,
            "reconcile"
        );
        self.notify();
        outcome
    }

    /// Refreshes the full props configuration, as on every re-render.
    ///
    /// In controlled mode the selection is re-resolved from the incoming
    /// props. In uncontrolled mode the most recent selection is kept when
    /// its value survives in the new item list — this also covers a
    /// controlled → uncontrolled flip without losing the selection.
    pub fn set_options(&mut self, options: SelectorOptions<K>) {
        self.options = options;

        let controlled = self.options.value.is_some() || self.options.index.is_some();
        if controlled {
            self.selection = Self::resolve(&self.options);
        } else if let Some(prev) = self.selection.take() {
            match self.index_of(&prev.value) {
                Some(i) if !self.options.items[i].disabled => {
                    self.selection = Some(Selection {
                        index: i,
                        value: prev.value,
                    });
                }
                _ => {
                    self.selection = Self::resolve(&self.options);
                }
            }
        } else {
            self.selection = Self::resolve(&self.options);
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SelectorOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_value_change(
        &mut self,
        on_value_change: Option<impl Fn(&K) + Send + Sync + 'static>,
    ) {
        self.options.on_value_change = on_value_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    pub fn set_on_index_change(
        &mut self,
        on_index_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.options.on_index_change = on_index_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&SelectionStore<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    /// Captures a snapshot of the current selection for persistence.
    pub fn selection_state(&self) -> crate::SelectionState<K> {
        crate::SelectionState {
            value: self.selected_value().cloned(),
        }
    }

    /// Restores a previously captured selection snapshot.
    ///
    /// Applies only when the snapshot's value names an enabled item in the
    /// current list; otherwise the existing selection stands. Never fires
    /// the value/index change callbacks.
    pub fn restore_selection_state(&mut self, state: crate::SelectionState<K>) -> bool {
        let Some(value) = state.value else {
            return false;
        };
        let Some(i) = self
            .options
            .items
            .iter()
            .position(|it| !it.disabled && it.value == value)
        else {
            return false;
        };
        self.selection = Some(Selection { index: i, value });
        self.notify();
        true
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for adapters that refresh items, control props, and
    /// selection together on one render pass.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Pure selection resolution over `(props, items)`.
    ///
    /// A control prop naming a disabled item is skipped so the invariant
    /// "the selection indexes an enabled item whenever one exists" holds
    /// unconditionally.
    fn resolve(options: &SelectorOptions<K>) -> Option<Selection<K>> {
        let items = &options.items;
        if items.is_empty() {
            return None;
        }

        let enabled_position =
            |v: &K| items.iter().position(|it| !it.disabled && it.value == *v);

        if let Some(v) = &options.value {
            if let Some(i) = enabled_position(v) {
                return Some(Selection {
                    index: i,
                    value: items[i].value.clone(),
                });
            }
            swarn!("resolve: controlled value absent or disabled, falling back");
        }
        if let Some(v) = &options.default_value {
            if let Some(i) = enabled_position(v) {
                return Some(Selection {
                    index: i,
                    value: items[i].value.clone(),
                });
            }
        }
        if let Some(i) = options.index {
            if items.get(i).is_some_and(|it| !it.disabled) {
                return Some(Selection {
                    index: i,
                    value: items[i].value.clone(),
                });
            }
        }

        let i = items.iter().position(|it| !it.disabled).unwrap_or(0);
        Some(Selection {
            index: i,
            value: items[i].value.clone(),
        })
    }
}
