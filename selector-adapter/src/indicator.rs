use selector::Geometry;

use crate::{Easing, GeometryTween};

/// Produces a continuously-interpolated geometry that tracks the selected
/// item, with smooth mid-flight retargeting.
///
/// The animator is an explicit Idle → Animating → Idle state machine. Its
/// own `current` value is the authoritative start point for any retarget:
/// when the user taps rapidly between items before a transition finishes,
/// the new animation begins from wherever the indicator actually is, never
/// from the old or new target. This is what prevents the indicator from
/// "teleporting".
#[derive(Clone, Copy, Debug)]
pub struct IndicatorAnimator {
    current: Geometry,
    tween: Option<GeometryTween>,
    has_geometry: bool,
}

impl IndicatorAnimator {
    pub fn new() -> Self {
        Self {
            current: Geometry::default(),
            tween: None,
            has_geometry: false,
        }
    }

    /// Whether any geometry has ever been applied. Until then the render
    /// layer should not paint the indicator at all.
    pub fn has_geometry(&self) -> bool {
        self.has_geometry
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The live display geometry; pure read, safe to call every frame.
    pub fn current(&self) -> Geometry {
        self.current
    }

    /// The geometry the animator is heading toward (equals `current` when
    /// idle).
    pub fn target(&self) -> Geometry {
        match &self.tween {
            Some(t) => t.to,
            None => self.current,
        }
    }

    /// Jumps straight to `target` with no animation: first mount, or the
    /// item list identity changed so a slide from stale geometry would be
    /// meaningless.
    pub fn snap(&mut self, target: Geometry) {
        self.current = target;
        self.tween = None;
        self.has_geometry = true;
    }

    /// Animates toward `target`.
    ///
    /// While a tween is in flight this only swaps its destination; `current`
    /// is left exactly where it is at the moment of the call. The very first
    /// target snaps instead (there is no meaningful origin to animate from).
    /// Retargeting to the current target is a no-op.
    pub fn retarget(&mut self, target: Geometry, now_ms: u64, duration_ms: u64, easing: Easing) {
        if !self.has_geometry {
            self.snap(target);
            return;
        }
        if self.target() == target {
            return;
        }
        match &mut self.tween {
            Some(t) => t.retarget(now_ms, target, duration_ms),
            None => {
                self.tween = Some(GeometryTween::new(
                    self.current,
                    target,
                    now_ms,
                    duration_ms,
                    easing,
                ));
            }
        }
    }

    /// Freezes the animation at the current value.
    pub fn cancel(&mut self) {
        self.tween = None;
    }

    /// Advances `current` toward the target.
    ///
    /// Returns the updated geometry while animating; `None` once idle, so
    /// callers can stop ticking after convergence.
    pub fn tick(&mut self, now_ms: u64) -> Option<Geometry> {
        let tween = self.tween?;
        if tween.is_done(now_ms) {
            self.current = tween.to;
            self.tween = None;
        } else {
            self.current = tween.sample(now_ms);
        }
        Some(self.current)
    }
}

impl Default for IndicatorAnimator {
    fn default() -> Self {
        Self::new()
    }
}
