//! Drag session tracking and release resolution.
//!
//! A session lives from pointer-down to pointer-up. Each move sample maps
//! the pointer delta onto the offset axis, clamps it to the table's extreme
//! snap offsets, and refreshes the instantaneous velocity estimate. On
//! release the tracker resolves the destination: a fling pivots around the
//! Half point in the gesture's direction, anything slower settles at the
//! nearest point.

use snapsheet_core::{SnapPoint, SnapPointTable, OFFSET_SPAN};

use crate::gesture_constants::{FLING_VELOCITY_THRESHOLD, MAX_DRAG_VELOCITY};

/// The most recent pointer sample, already mapped to offset units.
#[derive(Debug, Clone, Copy)]
pub struct DragSample {
    pub offset: f32,
    pub timestamp_ms: u64,
}

/// State held only while a drag is active.
#[derive(Debug, Clone)]
struct DragSession {
    /// Raw pointer position at pointer-down.
    start_position: f32,
    /// Sheet offset when the drag began.
    origin_offset: f32,
    /// Viewport extent cached at session start, used to normalize deltas.
    viewport_extent: f32,
    /// Last sample, unclamped, for velocity estimation.
    last_sample: DragSample,
    /// Clamped offset after the latest move.
    current_offset: f32,
    /// Instantaneous velocity in offset-units per millisecond.
    velocity: f32,
}

/// Converts raw pointer samples into drag state and snap decisions.
///
/// At most one session is tracked; a second pointer-down while a session is
/// active is ignored (multi-pointer input is out of scope).
#[derive(Debug, Default)]
pub struct GestureTracker {
    session: Option<DragSession>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag session at `position`, with the sheet currently at
    /// `origin_offset`.
    ///
    /// Returns `false` without touching state when a session is already
    /// active. A non-positive `viewport_extent` is clamped to 1.0 so delta
    /// normalization never divides by zero.
    pub fn begin_drag(
        &mut self,
        position: f32,
        timestamp_ms: u64,
        origin_offset: f32,
        viewport_extent: f32,
    ) -> bool {
        if self.session.is_some() {
            log::debug!("ignoring pointer-down: drag already active");
            return false;
        }

        log::debug!("drag begins at offset {origin_offset}");
        self.session = Some(DragSession {
            start_position: position,
            origin_offset,
            viewport_extent: viewport_extent.max(1.0),
            last_sample: DragSample {
                offset: origin_offset,
                timestamp_ms,
            },
            current_offset: origin_offset,
            velocity: 0.0,
        });
        true
    }

    /// Feeds a move sample, returning the new clamped offset.
    ///
    /// The pointer delta is normalized by the viewport extent and mapped
    /// onto the offset axis relative to the session's origin, then clamped
    /// to the table's extreme snap offsets: dragging can never move the
    /// sheet past its outermost rest positions. A sample with zero elapsed
    /// time updates the offset but leaves the velocity estimate unchanged.
    ///
    /// Returns `None` when no session is active.
    pub fn update_drag(
        &mut self,
        position: f32,
        timestamp_ms: u64,
        table: &SnapPointTable,
    ) -> Option<f32> {
        let session = self.session.as_mut()?;

        let delta = position - session.start_position;
        let raw_offset = session.origin_offset + delta / session.viewport_extent * OFFSET_SPAN;

        let (_, min_offset) = table.most_open();
        let (_, max_offset) = table.most_closed();
        session.current_offset = raw_offset.clamp(min_offset, max_offset);

        let elapsed = timestamp_ms.saturating_sub(session.last_sample.timestamp_ms);
        if elapsed > 0 {
            let offset_delta = raw_offset - session.last_sample.offset;
            session.velocity =
                (offset_delta / elapsed as f32).clamp(-MAX_DRAG_VELOCITY, MAX_DRAG_VELOCITY);
        }
        session.last_sample = DragSample {
            offset: raw_offset,
            timestamp_ms,
        };

        log::trace!(
            "drag sample: offset {} velocity {}",
            session.current_offset,
            session.velocity
        );
        Some(session.current_offset)
    }

    /// Ends the session and resolves the destination snap point.
    ///
    /// Returns the destination and the release offset, or `None` when no
    /// session was active. Resolution order:
    ///
    /// 1. Fling (|velocity| at or above the threshold): a two-way decision
    ///    pivoting on Half. Closing flings settle at Closed from above
    ///    Half's offset and at Half otherwise; opening flings settle at
    ///    Full from below Half's offset and at Half otherwise. A table with
    ///    no Half entry falls back to proximity.
    /// 2. Otherwise the point nearest the release offset, ties to the
    ///    first-declared candidate.
    pub fn end_drag(&mut self, table: &SnapPointTable) -> Option<(SnapPoint, f32)> {
        let session = self.session.take()?;
        let offset = session.current_offset;
        let velocity = session.velocity;

        let target = if velocity.abs() >= FLING_VELOCITY_THRESHOLD {
            match table.offset_of(SnapPoint::Half) {
                Some(half_offset) if velocity > 0.0 => {
                    // Closing fling: next rest position toward the bottom.
                    if offset > half_offset {
                        SnapPoint::Closed
                    } else {
                        SnapPoint::Half
                    }
                }
                Some(half_offset) => {
                    // Opening fling: next rest position toward the top.
                    if offset < half_offset {
                        SnapPoint::Full
                    } else {
                        SnapPoint::Half
                    }
                }
                None => table.nearest_by_distance(offset),
            }
        } else {
            table.nearest_by_distance(offset)
        };

        log::debug!("drag ends at offset {offset} velocity {velocity}, settling at {target}");
        Some((target, offset))
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Current velocity estimate, 0.0 when idle.
    pub fn velocity(&self) -> f32 {
        self.session.as_ref().map_or(0.0, |s| s.velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SnapPointTable {
        SnapPointTable::standard()
    }

    /// Extent of 100 px makes pointer deltas equal offset deltas.
    const EXTENT: f32 = 100.0;

    #[test]
    fn second_begin_is_ignored() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.begin_drag(0.0, 0, 85.0, EXTENT));
        assert!(!tracker.begin_drag(10.0, 5, 85.0, EXTENT));
        // The original session is untouched.
        let offset = tracker.update_drag(-10.0, 10, &table());
        assert_eq!(offset, Some(75.0));
    }

    #[test]
    fn update_maps_pointer_delta_onto_offset_axis() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(200.0, 0, 50.0, EXTENT);
        let offset = tracker.update_drag(220.0, 16, &table());
        assert_eq!(offset, Some(70.0));
    }

    #[test]
    fn update_normalizes_by_viewport_extent() {
        let mut tracker = GestureTracker::new();
        // 800 px viewport: a 200 px delta is a quarter of the extent.
        tracker.begin_drag(0.0, 0, 50.0, 800.0);
        let offset = tracker.update_drag(200.0, 16, &table());
        assert_eq!(offset, Some(75.0));
    }

    #[test]
    fn drag_is_clamped_to_extreme_snap_offsets() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(0.0, 0, 50.0, EXTENT);
        assert_eq!(tracker.update_drag(500.0, 16, &table()), Some(85.0));
        assert_eq!(tracker.update_drag(-500.0, 32, &table()), Some(10.0));
    }

    #[test]
    fn velocity_tracks_last_sample_pair() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(0.0, 0, 85.0, EXTENT);
        tracker.update_drag(-25.0, 100, &table());
        assert!((tracker.velocity() + 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_elapsed_sample_leaves_velocity_unchanged() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(0.0, 0, 50.0, EXTENT);
        tracker.update_drag(10.0, 10, &table());
        let before = tracker.velocity();
        tracker.update_drag(30.0, 10, &table());
        assert_eq!(tracker.velocity(), before);
        // The offset still moved.
        assert_eq!(tracker.update_drag(30.0, 11, &table()), Some(80.0));
    }

    #[test]
    fn velocity_is_capped() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(0.0, 0, 10.0, EXTENT);
        // 75 offset units in 1 ms would read as 75/ms.
        tracker.update_drag(75.0, 1, &table());
        assert_eq!(tracker.velocity(), MAX_DRAG_VELOCITY);
    }

    #[test]
    fn slow_release_settles_at_nearest_point() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(0.0, 0, 85.0, EXTENT);
        tracker.update_drag(-25.0, 100, &table());
        // Velocity 0.25/ms is under the fling threshold; 60 is nearest 50.
        let (target, offset) = tracker.end_drag(&table()).unwrap();
        assert_eq!(target, SnapPoint::Half);
        assert_eq!(offset, 60.0);
    }

    #[test]
    fn closing_fling_from_above_half_goes_closed() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(0.0, 0, 50.0, EXTENT);
        tracker.update_drag(10.0, 10, &table());
        let (target, _) = tracker.end_drag(&table()).unwrap();
        assert_eq!(target, SnapPoint::Closed);
    }

    #[test]
    fn closing_fling_from_below_half_goes_half() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(0.0, 0, 20.0, EXTENT);
        tracker.update_drag(10.0, 10, &table());
        let (target, _) = tracker.end_drag(&table()).unwrap();
        assert_eq!(target, SnapPoint::Half);
    }

    #[test]
    fn opening_fling_pivots_on_half_not_full() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(0.0, 0, 78.0, EXTENT);
        // Offset 70 with velocity -0.8/ms: 70 is not below half (50), so the
        // two-way pivot stops at Half rather than scanning on to Full.
        tracker.update_drag(-8.0, 10, &table());
        assert!((tracker.velocity() + 0.8).abs() < 1e-6);
        let (target, offset) = tracker.end_drag(&table()).unwrap();
        assert_eq!(target, SnapPoint::Half);
        assert_eq!(offset, 70.0);
    }

    #[test]
    fn opening_fling_from_below_half_goes_full() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(0.0, 0, 40.0, EXTENT);
        tracker.update_drag(-10.0, 10, &table());
        let (target, _) = tracker.end_drag(&table()).unwrap();
        assert_eq!(target, SnapPoint::Full);
    }

    #[test]
    fn fling_without_half_entry_falls_back_to_nearest() {
        let two_point =
            SnapPointTable::new([(SnapPoint::Full, 10.0), (SnapPoint::Closed, 90.0)]).unwrap();
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(0.0, 0, 20.0, EXTENT);
        tracker.update_drag(10.0, 10, &two_point);
        let (target, _) = tracker.end_drag(&two_point).unwrap();
        assert_eq!(target, SnapPoint::Full);
    }

    #[test]
    fn zero_length_drag_returns_to_origin() {
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(0.0, 0, 85.0, EXTENT);
        let (target, offset) = tracker.end_drag(&table()).unwrap();
        assert_eq!(target, SnapPoint::Closed);
        assert_eq!(offset, 85.0);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn end_without_session_is_none() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.end_drag(&table()), None);
        assert_eq!(tracker.update_drag(0.0, 0, &table()), None);
    }
}
