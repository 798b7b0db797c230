//! Shared gesture constants for the drag-to-snap pipeline.
//!
//! Velocities are expressed in offset units (viewport percentage) per
//! millisecond so that thresholds behave the same on any screen size.

/// Release velocity at or above which a drag counts as a fling.
///
/// A fling biases the destination toward the gesture's direction instead of
/// pure proximity. 0.5 offset-units/ms means crossing half the viewport in
/// 100 ms, fast enough that slow repositioning never triggers it while a
/// deliberate flick reliably does.
pub const FLING_VELOCITY_THRESHOLD: f32 = 0.5;

/// Upper bound on the instantaneous velocity estimate.
///
/// Pointer timestamps can arrive bunched up (event coalescing, scheduler
/// hiccups), and a one-millisecond gap across a large position jump would
/// read as an absurd speed. Samples are clamped to this magnitude rather
/// than rejected; continuous input noise must never interrupt interaction.
pub const MAX_DRAG_VELOCITY: f32 = 10.0;
