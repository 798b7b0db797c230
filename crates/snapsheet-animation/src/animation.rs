//! Time-based tween animation with an overshooting ease-out curve.
//!
//! The engine is externally pumped: a run is a pure sampler over
//! caller-supplied millisecond timestamps. This crate owns no clock and
//! schedules no frames.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Overshoot amplitude of the ease-out-back cubic. The value is the classic
/// Penner constant; changing it changes how far the sheet springs past its
/// target before settling.
const BACK_OVERSHOOT: f32 = 1.70158;

/// Easing functions for sheet transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Identity mapping (no easing).
    Linear,
    /// Cubic ease-out that overshoots the target before settling. This is
    /// the sheet's spring character: intermediate output exceeds 1, so
    /// callers must not clamp the eased fraction.
    EaseOutBack,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    ///
    /// Exact at the boundaries: `transform(0.0) == 0.0` and
    /// `transform(1.0) == 1.0` for every curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::EaseOutBack => ease_out_back(fraction),
        }
    }
}

/// `1 + c3*(t-1)^3 + overshoot*(t-1)^2` with `c3 = overshoot + 1`.
fn ease_out_back(fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let c3 = BACK_OVERSHOOT + 1.0;
    let shifted = fraction - 1.0;
    1.0 + c3 * shifted * shifted * shifted + BACK_OVERSHOOT * shifted * shifted
}

/// Animation specification combining duration and easing.
///
/// The motion controller always animates with the default spec; the duration
/// field is the extension point for making that configurable later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::EaseOutBack)
    }
}

/// One in-flight transition from a start offset to a target offset.
///
/// The start time is anchored to the first sampled timestamp, so a run
/// created between frames begins animating on the frame that first observes
/// it. Runs are superseded, never merged: interrupting a transition creates
/// a fresh run starting from the live interpolated value.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRun {
    start_value: f32,
    target_value: f32,
    spec: AnimationSpec,
    start_time_ms: Option<u64>,
}

impl AnimationRun {
    pub fn new(start_value: f32, target_value: f32, spec: AnimationSpec) -> Self {
        Self {
            start_value,
            target_value,
            spec,
            start_time_ms: None,
        }
    }

    /// The offset the run started from.
    pub fn start_value(&self) -> f32 {
        self.start_value
    }

    /// The offset the run is heading toward.
    pub fn target(&self) -> f32 {
        self.target_value
    }

    /// Sample the run at `now_ms`, returning the interpolated value and
    /// whether the run has finished.
    ///
    /// The first call anchors the start time. A timestamp earlier than the
    /// anchor (clock regression) clamps progress to 0 rather than going
    /// negative. On completion the value is exactly the target.
    pub fn sample(&mut self, now_ms: u64) -> (f32, bool) {
        let start = *self.start_time_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        let duration = self.spec.duration_millis.max(1);
        let linear = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);

        if linear >= 1.0 {
            (self.target_value, true)
        } else {
            let eased = self.spec.easing.transform(linear);
            (self.start_value.lerp(&self.target_value, eased), false)
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
