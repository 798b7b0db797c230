//! Millisecond clock helper for callers pumping the engine.

use web_time::Instant;

/// Monotonic milliseconds measured from construction.
///
/// The engine never reads a clock itself; consumers driving
/// [`MotionController::tick`](crate::MotionController::tick) from a native
/// or wasm frame loop can use this to produce the timestamps it expects.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was created.
    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
