//! Drag tracking and snap resolution for the snapsheet motion engine.
//!
//! Converts raw pointer samples into clamped sheet offsets and an
//! instantaneous velocity estimate, and decides at release which snap point
//! the sheet should settle at.

pub mod gesture;
pub mod gesture_constants;

pub use gesture::{DragSample, GestureTracker};
pub use gesture_constants::{FLING_VELOCITY_THRESHOLD, MAX_DRAG_VELOCITY};
