use alloc::string::String;

/// Default item value type.
pub type ItemValue = String;

/// A selectable item supplied by the surrounding UI on every render.
///
/// Identity is by `value`, not by array position: positions shift when the
/// list mutates, values do not.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<K = ItemValue> {
    pub value: K,
    pub label: String,
    pub disabled: bool,
}

impl<K> Item<K> {
    pub fn new(value: K, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// An item's position and size along the layout axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub offset: f32,
    pub extent: f32,
}

impl Geometry {
    pub fn new(offset: f32, extent: f32) -> Self {
        Self { offset, extent }
    }

    pub fn end(&self) -> f32 {
        self.offset + self.extent
    }
}

/// The resolved selection: an index into the current item list plus the
/// value it carries. The value is authoritative; the index is re-derived
/// whenever the list changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection<K = ItemValue> {
    pub index: usize,
    pub value: K,
}

/// Where the selection's source of truth lives.
///
/// `Controlled` when the caller supplies a `value` or `index` prop;
/// `Uncontrolled` when the store manages selection internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlMode {
    Controlled,
    Uncontrolled,
}

/// Outcome of [`crate::SelectionStore::reconcile`], telling adapters how to
/// move the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reconcile {
    /// Selection kept its value and index.
    Unchanged,
    /// Selection kept its value at a new index; animate to the new position.
    Moved,
    /// The selected value left the list; selection was re-resolved. Snap.
    Fallback,
    /// The entire list identity changed (no shared values). Snap.
    Replaced,
}
