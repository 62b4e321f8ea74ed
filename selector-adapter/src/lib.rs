//! Adapter utilities for the `selector` crate.
//!
//! The `selector` crate is UI-agnostic and focuses on selection state and
//! layout bookkeeping. This crate provides the framework-neutral pieces a
//! widget adapter needs on top of that:
//!
//! - Indicator animation with mid-flight retargeting (no "teleport" when
//!   the user taps rapidly between items)
//! - Scroll synchronization for fluid/scrollable layouts
//! - A controller composing the whole engine behind four operations:
//!   activate, measure, reconcile, tick
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui/DOM
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod indicator;
mod scroll;
mod tween;


pub use controller::{Controller, ControllerConfig};
pub use indicator::IndicatorAnimator;
pub use scroll::{ScrollSync, ensure_visible_offset};
pub use tween::{Easing, GeometryTween, Tween};
