//! Motion controller for a snap-point sheet.
//!
//! The controller owns the authoritative sheet offset and the
//! Idle/Dragging/Animating state machine. It is pulled, not self-driving:
//! the rendering layer forwards pointer samples, pumps [`MotionController::tick`]
//! once per frame, and reads the current offset and phase back. No timers,
//! no locking, no rendering concerns.

pub mod clock;
pub mod controller;

pub use clock::MonotonicClock;
pub use controller::{EngineState, MotionController, MotionError, MotionPhase};

pub use snapsheet_animation::{AnimationRun, AnimationSpec, Easing};
pub use snapsheet_core::{ConfigurationError, SnapPoint, SnapPointTable};
pub use snapsheet_foundation::{GestureTracker, FLING_VELOCITY_THRESHOLD, MAX_DRAG_VELOCITY};
