use crate::Geometry;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyGeometryMap<K> = HashMap<K, Geometry>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyGeometryMap<K> = BTreeMap<K, Geometry>;

/// Bound for item values used as identity keys.
///
/// Selection and geometry follow the item *value* across list mutations;
/// array positions do not survive reorders.
#[cfg(feature = "std")]
pub trait SelectionKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> SelectionKey for K {}

#[cfg(not(feature = "std"))]
pub trait SelectionKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> SelectionKey for K {}
