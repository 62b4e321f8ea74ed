use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::store::SelectionStore;
use crate::{Item, ItemValue};

/// A callback fired once per user-initiated selection, keyed by value.
pub type OnValueChange<K> = Arc<dyn Fn(&K) + Send + Sync>;

/// A callback fired once per user-initiated selection, keyed by index.
///
/// Observes the same logical event as [`OnValueChange`]; both fire for every
/// accepted `select`, neither fires for no-ops.
pub type OnIndexChange = Arc<dyn Fn(usize) + Send + Sync>;

/// A callback fired when the store's state changes for any reason
/// (selection, prop refresh, reconciliation).
pub type OnChangeCallback<K> = Arc<dyn Fn(&SelectionStore<K>) + Send + Sync>;

/// Configuration for [`crate::SelectionStore`].
///
/// This type is designed to be cheap to clone: callbacks are stored in
/// `Arc`s so callers can update a few fields and call
/// `SelectionStore::set_options` without reallocating closures.
///
/// Selection control props resolve with a fixed precedence:
/// `value` > `default_value` > `index` > first enabled item. Callers rely
/// on value taking precedence over index.
pub struct SelectorOptions<K = ItemValue> {
    pub items: Vec<Item<K>>,

    /// Externally controlled selected value. When set, `select` fires the
    /// change callbacks but leaves internal state to the owner.
    pub value: Option<K>,

    /// Initial selected value for uncontrolled operation. Only consulted
    /// when resolving a selection from scratch, never on refresh.
    pub default_value: Option<K>,

    /// Externally controlled selected index. Lower precedence than `value`.
    pub index: Option<usize>,

    pub on_value_change: Option<OnValueChange<K>>,
    pub on_index_change: Option<OnIndexChange>,

    /// Optional callback fired when the store's internal state changes.
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> SelectorOptions<K> {
    pub fn new(items: Vec<Item<K>>) -> Self {
        Self {
            items,
            value: None,
            default_value: None,
            index: None,
            on_value_change: None,
            on_index_change: None,
            on_change: None,
        }
    }

    pub fn with_value(mut self, value: Option<K>) -> Self {
        self.value = value;
        self
    }

    pub fn with_default_value(mut self, default_value: Option<K>) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn with_index(mut self, index: Option<usize>) -> Self {
        self.index = index;
        self
    }

    pub fn with_on_value_change(
        mut self,
        on_value_change: Option<impl Fn(&K) + Send + Sync + 'static>,
    ) -> Self {
        self.on_value_change = on_value_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_index_change(
        mut self,
        on_index_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&SelectionStore<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K: Clone> Clone for SelectorOptions<K> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            value: self.value.clone(),
            default_value: self.default_value.clone(),
            index: self.index,
            on_value_change: self.on_value_change.clone(),
            on_index_change: self.on_index_change.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<K> core::fmt::Debug for SelectorOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectorOptions")
            .field("item_count", &self.items.len())
            .field("value_controlled", &self.value.is_some())
            .field("default_value_set", &self.default_value.is_some())
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
