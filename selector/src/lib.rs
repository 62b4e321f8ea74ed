//! A headless selection-state engine for selector-style widgets.
//!
//! For indicator animation and scroll synchronization, see the
//! `selector-adapter` crate.
//!
//! Segmented controls, tab bars, and filter/pagination selectors all share
//! the same hard problem: reconciling "which item is selected" across two
//! alternative control APIs (value-keyed vs index-keyed, each possibly
//! externally controlled), while per-item geometry arrives asynchronously
//! and the item list mutates underneath. This crate is that shared engine.
//!
//! It is UI-agnostic. A widget layer is expected to provide:
//! - the item list and control props on every render
//! - activation events (tap/click on item *i*)
//! - per-item layout measurements as they become available
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod options;
mod registry;
mod state;
mod store;
mod types;

#[cfg(test)]
mod tests;

pub use key::SelectionKey;
pub use options::{OnChangeCallback, OnIndexChange, OnValueChange, SelectorOptions};
pub use registry::LayoutRegistry;
pub use state::SelectionState;
pub use store::SelectionStore;
pub use types::{ControlMode, Geometry, Item, ItemValue, Reconcile, Selection};
