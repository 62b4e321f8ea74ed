use crate::ItemValue;

/// A lightweight, serializable snapshot of the current selection.
///
/// Useful for restoring a widget's selection across remounts or sessions
/// without coupling the store to any specific UI framework. Pair with
/// [`crate::LayoutRegistry::export`] to also persist measured geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionState<K = ItemValue> {
    /// The selected value, or `None` when nothing is selected.
    pub value: Option<K>,
}
