//! Easing and tween primitives for the snapsheet motion engine.

pub mod animation;

pub use animation::{AnimationRun, AnimationSpec, Easing, Lerp};
