use selector::Geometry;

/// A small tween helper for adapter-driven animation of a scalar value
/// (used for scroll offsets).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let eased = eased_t(self.start_ms, self.duration_ms, self.easing, now_ms);
        self.from + (self.to - self.from) * eased
    }

    /// Restarts toward `new_to` from the live sampled value, never from
    /// `from` or the old `to`.
    pub fn retarget(&mut self, now_ms: u64, new_to: f32, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

/// A two-axis tween over indicator geometry.
///
/// Offset and extent are interpolated with a single shared eased `t`, so
/// the indicator's leading and trailing edges move in lockstep.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryTween {
    pub from: Geometry,
    pub to: Geometry,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl GeometryTween {
    pub fn new(
        from: Geometry,
        to: Geometry,
        start_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> Geometry {
        let eased = eased_t(self.start_ms, self.duration_ms, self.easing, now_ms);
        Geometry {
            offset: self.from.offset + (self.to.offset - self.from.offset) * eased,
            extent: self.from.extent + (self.to.extent - self.from.extent) * eased,
        }
    }

    /// Restarts toward `new_to` from the live sampled geometry.
    pub fn retarget(&mut self, now_ms: u64, new_to: Geometry, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

fn eased_t(start_ms: u64, duration_ms: u64, easing: Easing, now_ms: u64) -> f32 {
    let elapsed = now_ms.saturating_sub(start_ms);
    let t = (elapsed as f32 / duration_ms as f32).clamp(0.0, 1.0);
    easing.sample(t)
}

/// Monotonic easing curves; convergence within `duration_ms` is guaranteed
/// because `sample(1.0) == 1.0` for every variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
