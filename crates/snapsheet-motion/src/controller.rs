//! The sheet state machine: Idle at a snap point, Dragging, or Animating.
//!
//! Dragging always wins: starting a drag discards any in-flight animation
//! outright, and transition requests are rejected until the drag ends.
//! Interrupting an animation with a new request replaces the run; the new
//! run starts from the live interpolated offset, never from the old run's
//! nominal start.

use snapsheet_animation::{AnimationRun, AnimationSpec};
use snapsheet_core::{SnapPoint, SnapPointTable};
use snapsheet_foundation::GestureTracker;

/// Derived view of the controller's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    /// Resting at a snap point.
    Idle,
    /// Pointer down, offset under direct manipulation.
    Dragging,
    /// A transition run is in flight.
    Animating,
}

/// Snapshot of everything the rendering layer needs per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineState {
    /// Live offset along the axis, percentage of the viewport.
    pub offset: f32,
    /// The current (or intended, while animating) rest position.
    pub snap_point: SnapPoint,
    /// Whether the sheet is anywhere other than its most closed position.
    pub is_open: bool,
    pub phase: MotionPhase,
}

/// Errors surfaced by [`MotionController`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionError {
    /// The requested point is not declared in the snap table.
    UnknownSnapPoint { point: SnapPoint },
    /// Transitions are rejected while a drag is active.
    DragInProgress,
}

impl std::fmt::Display for MotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotionError::UnknownSnapPoint { point } => {
                write!(f, "snap point {point} is not declared in the table")
            }
            MotionError::DragInProgress => {
                write!(f, "transition rejected while a drag is active")
            }
        }
    }
}

impl std::error::Error for MotionError {}

/// Owns the authoritative sheet offset and advances it over time.
///
/// The controller performs no work between calls: pointer samples arrive via
/// the drag operations, and the animation is advanced by [`tick`] pumped
/// externally (conventionally once per display refresh), making the whole
/// engine a pure function of `(state, now)`.
///
/// [`tick`]: MotionController::tick
#[derive(Debug)]
pub struct MotionController {
    table: SnapPointTable,
    tracker: GestureTracker,
    spec: AnimationSpec,
    current_offset: f32,
    current_snap_point: SnapPoint,
    run: Option<AnimationRun>,
}

impl MotionController {
    /// Creates a controller resting at the table's most closed point.
    pub fn new(table: SnapPointTable) -> Self {
        let (point, offset) = table.most_closed();
        Self {
            table,
            tracker: GestureTracker::new(),
            spec: AnimationSpec::default(),
            current_offset: offset,
            current_snap_point: point,
            run: None,
        }
    }

    /// Requests an animated transition to `target`.
    ///
    /// The intended destination is authoritative the instant it is
    /// requested: `current_snap_point` flips immediately, before the
    /// animation lands. An in-flight run is replaced, starting from the
    /// live interpolated offset. Rejected while a drag is active.
    pub fn request_transition(&mut self, target: SnapPoint) -> Result<(), MotionError> {
        if self.tracker.is_dragging() {
            return Err(MotionError::DragInProgress);
        }
        let Some(target_offset) = self.table.offset_of(target) else {
            return Err(MotionError::UnknownSnapPoint { point: target });
        };

        log::debug!(
            "transition requested: {} -> {}",
            self.current_snap_point,
            target
        );
        self.run = Some(AnimationRun::new(
            self.current_offset,
            target_offset,
            self.spec,
        ));
        self.current_snap_point = target;
        Ok(())
    }

    /// Places the sheet at `target` immediately, without animating.
    pub fn snap_to(&mut self, target: SnapPoint) -> Result<(), MotionError> {
        if self.tracker.is_dragging() {
            return Err(MotionError::DragInProgress);
        }
        let Some(target_offset) = self.table.offset_of(target) else {
            return Err(MotionError::UnknownSnapPoint { point: target });
        };

        self.run = None;
        self.current_offset = target_offset;
        self.current_snap_point = target;
        Ok(())
    }

    /// Advances the active run, if any, and returns the current offset.
    ///
    /// Timestamps are milliseconds, monotonic for a session; a regressed
    /// clock clamps progress to zero rather than rewinding. When the run
    /// completes the offset lands exactly on the target and the controller
    /// returns to Idle.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        if let Some(run) = self.run.as_mut() {
            let (value, finished) = run.sample(now_ms);
            self.current_offset = value;
            if finished {
                self.run = None;
                log::trace!("transition settled at {}", self.current_snap_point);
            }
        }
        self.current_offset
    }

    /// Starts a drag at `position`, cancelling any in-flight animation.
    ///
    /// The offset freezes at its last interpolated value and stays put
    /// until a drag update or a new transition moves it. Returns `false`
    /// (and changes nothing) when a drag is already active; only one
    /// pointer is tracked.
    pub fn begin_drag(&mut self, position: f32, timestamp_ms: u64, viewport_extent: f32) -> bool {
        let started =
            self.tracker
                .begin_drag(position, timestamp_ms, self.current_offset, viewport_extent);
        if started && self.run.take().is_some() {
            log::debug!("animation cancelled by drag at offset {}", self.current_offset);
        }
        started
    }

    /// Feeds a pointer move sample and returns the current offset.
    ///
    /// The clamped offset becomes authoritative immediately; a drag is
    /// direct manipulation, with no interpolation. Without an active drag
    /// the sample is ignored.
    pub fn update_drag(&mut self, position: f32, timestamp_ms: u64) -> f32 {
        if let Some(offset) = self.tracker.update_drag(position, timestamp_ms, &self.table) {
            self.current_offset = offset;
        }
        self.current_offset
    }

    /// Ends the drag and animates toward the resolved snap point.
    ///
    /// Returns the destination, or `None` when no drag was active.
    pub fn end_drag(&mut self) -> Option<SnapPoint> {
        let (mut target, offset) = self.tracker.end_drag(&self.table)?;
        self.current_offset = offset;
        if !self.table.contains(target) {
            // A fling in a table without the pivot's neighbors can name a
            // point that was never declared; settle by proximity instead.
            target = self.table.nearest_by_distance(offset);
        }
        if let Err(err) = self.request_transition(target) {
            log::warn!("release transition rejected: {err}");
        }
        Some(target)
    }

    /// Live offset along the axis.
    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    /// The current rest position, or the intended one while animating.
    pub fn current_snap_point(&self) -> SnapPoint {
        self.current_snap_point
    }

    /// Whether the sheet is anywhere other than its most closed point.
    pub fn is_open(&self) -> bool {
        self.current_snap_point != self.table.most_closed().0
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    pub fn phase(&self) -> MotionPhase {
        if self.tracker.is_dragging() {
            MotionPhase::Dragging
        } else if self.run.is_some() {
            MotionPhase::Animating
        } else {
            MotionPhase::Idle
        }
    }

    /// The in-flight run, if any.
    pub fn active_run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// Per-frame snapshot for the rendering layer.
    pub fn state(&self) -> EngineState {
        EngineState {
            offset: self.current_offset,
            snap_point: self.current_snap_point,
            is_open: self.is_open(),
            phase: self.phase(),
        }
    }

    /// The snap table the controller was built with.
    pub fn table(&self) -> &SnapPointTable {
        &self.table
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
