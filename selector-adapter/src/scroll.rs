use selector::Geometry;

use crate::{Easing, Tween};

/// Computes the minimal scroll offset that places `item` within the padded
/// viewport `[scroll_offset + padding, scroll_offset + viewport_extent - padding]`.
///
/// Returns `scroll_offset` unchanged when the item is already fully
/// visible (a zero-delta no-op). When the item overflows the near edge it
/// is aligned to the near edge; otherwise to the far edge, whichever move
/// is smaller. The result is clamped to non-negative offsets.
pub fn ensure_visible_offset(
    item: Geometry,
    viewport_extent: f32,
    scroll_offset: f32,
    padding: f32,
) -> f32 {
    let visible_start = scroll_offset + padding;
    let visible_end = scroll_offset + viewport_extent - padding;
    if item.offset >= visible_start && item.end() <= visible_end {
        return scroll_offset;
    }

    let target = if item.offset < visible_start {
        item.offset - padding
    } else {
        item.end() + padding - viewport_extent
    };
    target.max(0.0)
}

/// Keeps the selected item visible in fluid (scrollable) layout mode.
///
/// Owns the scroll offset and animates it independently of the indicator:
/// a scroll tween never blocks or retimes an indicator tween. Recompute on
/// every selection change and after any geometry report for the selected
/// item, since its geometry may shift after its own render.
#[derive(Clone, Copy, Debug)]
pub struct ScrollSync {
    offset: f32,
    tween: Option<Tween>,
}

impl ScrollSync {
    pub fn new(initial_offset: f32) -> Self {
        Self {
            offset: initial_offset,
            tween: None,
        }
    }

    /// The offset the scroll container should currently apply.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The offset an in-flight scroll is heading toward (equals `offset`
    /// when idle).
    pub fn target_offset(&self) -> f32 {
        match &self.tween {
            Some(t) => t.to,
            None => self.offset,
        }
    }

    /// Call when the user scrolls the container directly; cancels any
    /// in-flight programmatic scroll.
    pub fn set_offset(&mut self, offset: f32) {
        self.tween = None;
        self.offset = offset;
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }

    /// Starts (or retargets) a smooth scroll so that `item` becomes fully
    /// visible. Visibility is judged against the offset the scroll is
    /// already heading toward, so repeated calls don't fight an in-flight
    /// scroll. Returns the target offset.
    pub fn ensure_visible(
        &mut self,
        item: Geometry,
        viewport_extent: f32,
        padding: f32,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f32 {
        let heading = self.target_offset();
        let target = ensure_visible_offset(item, viewport_extent, heading, padding);
        if target == heading {
            return target;
        }
        match &mut self.tween {
            Some(t) => t.retarget(now_ms, target, duration_ms),
            None => {
                self.tween = Some(Tween::new(self.offset, target, now_ms, duration_ms, easing));
            }
        }
        target
    }

    /// Advances the scroll tween. Returns the updated offset while
    /// animating; `None` once idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        if tween.is_done(now_ms) {
            self.offset = tween.to;
            self.tween = None;
        } else {
            self.offset = tween.sample(now_ms);
        }
        Some(self.offset)
    }
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self::new(0.0)
    }
}
