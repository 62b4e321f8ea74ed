use alloc::vec::Vec;

use selector::{
    Geometry, Item, ItemValue, LayoutRegistry, Reconcile, Selection, SelectionKey, SelectionStore,
    SelectorOptions,
};

use crate::{Easing, IndicatorAnimator, ScrollSync};

/// Timing and layout-mode configuration for [`Controller`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerConfig {
    pub indicator_duration_ms: u64,
    pub indicator_easing: Easing,
    pub scroll_duration_ms: u64,
    pub scroll_easing: Easing,
    /// Extra space kept between the selected item and the viewport edges
    /// when scrolling it into view.
    pub scroll_padding: f32,
    /// Fluid layout mode: items may overflow the container horizontally
    /// and the controller keeps the selection scrolled into view.
    pub fluid: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            indicator_duration_ms: 280,
            indicator_easing: Easing::EaseInOutCubic,
            scroll_duration_ms: 240,
            scroll_easing: Easing::SmoothStep,
            scroll_padding: 0.0,
            fluid: false,
        }
    }
}

impl ControllerConfig {
    pub fn with_indicator(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.indicator_duration_ms = duration_ms;
        self.indicator_easing = easing;
        self
    }

    pub fn with_scroll(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.scroll_duration_ms = duration_ms;
        self.scroll_easing = easing;
        self
    }

    pub fn with_scroll_padding(mut self, scroll_padding: f32) -> Self {
        self.scroll_padding = scroll_padding;
        self
    }

    pub fn with_fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }
}

/// A framework-neutral controller wiring the whole engine together:
/// selection store, layout registry, indicator animator, and (in fluid
/// mode) scroll synchronization.
///
/// This type does not hold any UI objects. A widget adapter drives it by
/// calling:
/// - [`activate`](Self::activate) when an item is tapped/clicked
/// - [`measure`](Self::measure) as per-item layout reports arrive
/// - [`reconcile`](Self::reconcile) when the item list changes identity
/// - [`tick`](Self::tick) once per display frame
///
/// and paints from [`indicator_geometry`](Self::indicator_geometry) /
/// [`scroll_offset`](Self::scroll_offset).
///
/// Ordering guarantee: within one `activate` call the value/index change
/// callbacks are delivered before any indicator retarget is attempted, so
/// a listener always observes the new logical selection before any visual
/// change begins.
#[derive(Clone, Debug)]
pub struct Controller<K = ItemValue> {
    store: SelectionStore<K>,
    registry: LayoutRegistry<K>,
    indicator: IndicatorAnimator,
    scroll: ScrollSync,
    config: ControllerConfig,
    viewport_extent: f32,
    pending_snap: bool,
}

impl<K: SelectionKey> Controller<K> {
    pub fn new(options: SelectorOptions<K>, config: ControllerConfig) -> Self {
        Self {
            store: SelectionStore::new(options),
            registry: LayoutRegistry::new(),
            indicator: IndicatorAnimator::new(),
            scroll: ScrollSync::new(0.0),
            config,
            viewport_extent: 0.0,
            pending_snap: false,
        }
    }

    pub fn store(&self) -> &SelectionStore<K> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SelectionStore<K> {
        &mut self.store
    }

    pub fn registry(&self) -> &LayoutRegistry<K> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut LayoutRegistry<K> {
        &mut self.registry
    }

    pub fn config(&self) -> ControllerConfig {
        self.config
    }

    pub fn selection(&self) -> Option<&Selection<K>> {
        self.store.selection()
    }

    /// The interpolated indicator geometry to paint this frame.
    pub fn indicator_geometry(&self) -> Geometry {
        self.indicator.current()
    }

    /// Whether the indicator should be painted at all: false until the
    /// first measurement for a selected item resolves, and false again
    /// whenever there is no selection (empty item list).
    pub fn indicator_visible(&self) -> bool {
        self.indicator.has_geometry() && self.store.selection().is_some()
    }

    /// The scroll offset the container should apply (fluid mode).
    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn is_animating(&self) -> bool {
        self.indicator.is_animating() || self.scroll.is_animating()
    }

    /// Sets the viewport size along the layout axis, used by fluid mode to
    /// judge visibility. Until a positive extent is supplied,
    /// ensure-visible scrolling is skipped.
    pub fn set_viewport_extent(&mut self, viewport_extent: f32) {
        self.viewport_extent = viewport_extent;
    }

    /// Handles a user activation of the item at `index`.
    ///
    /// Selection callbacks fire first (inside the store), then the
    /// indicator retargets from its live position; in fluid mode the
    /// selection is also scrolled into view. Returns `false` for no-ops
    /// (out of range, disabled, already selected).
    pub fn activate(&mut self, index: usize, now_ms: u64) -> bool {
        if !self.store.select(index) {
            return false;
        }
        self.sync_indicator(now_ms, false);
        true
    }

    /// Handles a layout measurement report for `value`.
    ///
    /// Reports for non-selected items only feed the registry; a report for
    /// the selected item retargets the indicator (snapping when it never
    /// had geometry, or when a pending snap was deferred until the
    /// measurement arrived).
    pub fn measure(&mut self, value: K, geometry: Geometry, now_ms: u64) {
        self.registry.report(value.clone(), geometry);
        if self.store.selected_value() == Some(&value) {
            self.sync_indicator(now_ms, false);
        }
    }

    /// Handles an item-list identity change.
    ///
    /// The registry is pruned before any lookup so stale geometry from
    /// removed items is never served. A selection that survives by value
    /// animates to its new position; a fallback or wholesale replacement
    /// snaps instead of sliding from stale geometry.
    pub fn reconcile(&mut self, items: Vec<Item<K>>, now_ms: u64) -> Reconcile {
        self.registry.prune_to_items(&items);
        let outcome = self.store.reconcile(items);
        match outcome {
            Reconcile::Unchanged => {}
            Reconcile::Moved => self.sync_indicator(now_ms, false),
            Reconcile::Fallback | Reconcile::Replaced => self.sync_indicator(now_ms, true),
        }
        outcome
    }

    /// Refreshes the full props configuration, as on every re-render.
    ///
    /// Detects wholesale list replacement (no shared values) and snaps in
    /// that case, matching [`reconcile`](Self::reconcile).
    pub fn set_options(&mut self, options: SelectorOptions<K>, now_ms: u64) {
        let replaced = !options.items.is_empty()
            && !self.store.items().is_empty()
            && !options
                .items
                .iter()
                .any(|it| self.store.items().iter().any(|old| old.value == it.value));
        self.store.set_options(options);
        self.registry
            .prune(|k| self.store.items().iter().any(|it| it.value == *k));
        self.sync_indicator(now_ms, replaced);
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut SelectorOptions<K>), now_ms: u64) {
        let mut next = self.store.options().clone();
        f(&mut next);
        self.set_options(next, now_ms);
    }

    /// Call when the user scrolls the container directly (fluid mode);
    /// cancels any programmatic scroll without touching the indicator.
    pub fn on_scroll(&mut self, offset: f32) {
        self.scroll.set_offset(offset);
    }

    /// Advances indicator and scroll animations. Returns `true` while
    /// anything is still animating, so the frame driver knows whether to
    /// keep ticking.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let indicator_active = self.indicator.tick(now_ms).is_some();
        let scroll_active = if self.config.fluid {
            self.scroll.tick(now_ms).is_some()
        } else {
            false
        };
        indicator_active || scroll_active
    }

    /// Points the indicator at the selected item's geometry.
    ///
    /// When the geometry is still pending (not yet measured since the value
    /// entered the list), the indicator holds its previous valid target
    /// rather than collapsing to a degenerate rect; a requested snap is
    /// remembered and applied once the measurement arrives.
    fn sync_indicator(&mut self, now_ms: u64, snap: bool) {
        let snap = snap || self.pending_snap;
        let Some(value) = self.store.selected_value() else {
            // Nothing to point at; stop any in-flight slide toward a
            // target that no longer exists.
            self.indicator.cancel();
            self.pending_snap = false;
            return;
        };
        let Some(geometry) = self.registry.lookup(value) else {
            self.pending_snap = snap;
            return;
        };
        self.pending_snap = false;

        if snap {
            self.indicator.snap(geometry);
        } else {
            self.indicator.retarget(
                geometry,
                now_ms,
                self.config.indicator_duration_ms,
                self.config.indicator_easing,
            );
        }

        if self.config.fluid && self.viewport_extent > 0.0 {
            self.scroll.ensure_visible(
                geometry,
                self.viewport_extent,
                self.config.scroll_padding,
                now_ms,
                self.config.scroll_duration_ms,
                self.config.scroll_easing,
            );
        }
    }
}
