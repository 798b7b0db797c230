//! Snap point model for the snapsheet motion engine.
//!
//! A sheet rests at one of a fixed set of named positions along the vertical
//! axis. Offsets are percentages of the viewport: 0 = top edge, 100 = bottom
//! edge, so a more closed sheet has a larger offset.

use smallvec::SmallVec;

/// Length of the offset axis. Offsets are percentages, so a pointer delta of
/// one full viewport extent maps to this many offset units.
pub const OFFSET_SPAN: f32 = 100.0;

/// Named rest positions for the sheet, from most open to most closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SnapPoint {
    Full,
    Half,
    Closed,
}

impl std::fmt::Display for SnapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapPoint::Full => write!(f, "full"),
            SnapPoint::Half => write!(f, "half"),
            SnapPoint::Closed => write!(f, "closed"),
        }
    }
}

/// Errors raised while building a [`SnapPointTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A table needs at least two distinct points to snap between.
    TooFewPoints { count: usize },
    /// Offsets are percentages of the viewport and must stay in `[0, 100]`.
    OffsetOutOfRange { point: SnapPoint, offset: f32 },
    /// Each point may be declared at most once.
    DuplicatePoint { point: SnapPoint },
    /// Offsets must strictly increase from most open to most closed.
    NonMonotonic { point: SnapPoint, offset: f32 },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::TooFewPoints { count } => {
                write!(f, "snap table needs at least 2 points, got {count}")
            }
            ConfigurationError::OffsetOutOfRange { point, offset } => {
                write!(f, "offset {offset} for {point} outside [0, 100]")
            }
            ConfigurationError::DuplicatePoint { point } => {
                write!(f, "snap point {point} declared twice")
            }
            ConfigurationError::NonMonotonic { point, offset } => {
                write!(f, "offset {offset} for {point} does not increase toward closed")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Immutable table mapping snap points to viewport offsets.
///
/// Entries are kept in declaration order, which doubles as the
/// open-to-closed order; nearest-point ties resolve to the entry declared
/// first. The table is configuration: built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapPointTable {
    entries: SmallVec<[(SnapPoint, f32); 3]>,
}

impl SnapPointTable {
    /// Builds a table from `(point, offset)` pairs listed from most open to
    /// most closed.
    pub fn new(
        entries: impl IntoIterator<Item = (SnapPoint, f32)>,
    ) -> Result<Self, ConfigurationError> {
        let entries: SmallVec<[(SnapPoint, f32); 3]> = entries.into_iter().collect();

        for (i, &(point, offset)) in entries.iter().enumerate() {
            if !(0.0..=100.0).contains(&offset) {
                return Err(ConfigurationError::OffsetOutOfRange { point, offset });
            }
            if entries[..i].iter().any(|&(seen, _)| seen == point) {
                return Err(ConfigurationError::DuplicatePoint { point });
            }
        }
        if entries.len() < 2 {
            return Err(ConfigurationError::TooFewPoints {
                count: entries.len(),
            });
        }
        for window in entries.windows(2) {
            let (prev_point, prev_offset) = window[0];
            let (point, offset) = window[1];
            if offset <= prev_offset || point <= prev_point {
                return Err(ConfigurationError::NonMonotonic { point, offset });
            }
        }

        Ok(Self { entries })
    }

    /// The standard three-point layout: full 10, half 50, closed 85.
    pub fn standard() -> Self {
        // Validated literals; new() cannot fail on them.
        Self {
            entries: SmallVec::from_slice(&[
                (SnapPoint::Full, 10.0),
                (SnapPoint::Half, 50.0),
                (SnapPoint::Closed, 85.0),
            ]),
        }
    }

    /// Offset for `point`, or `None` when the table does not declare it.
    pub fn offset_of(&self, point: SnapPoint) -> Option<f32> {
        self.entries
            .iter()
            .find(|&&(p, _)| p == point)
            .map(|&(_, offset)| offset)
    }

    /// Whether the table declares `point`.
    pub fn contains(&self, point: SnapPoint) -> bool {
        self.offset_of(point).is_some()
    }

    /// Entries in declaration (open-to-closed) order.
    pub fn points(&self) -> impl Iterator<Item = (SnapPoint, f32)> + '_ {
        self.entries.iter().copied()
    }

    /// The point whose offset is closest to `offset`.
    ///
    /// Ties resolve to the first-declared candidate: the scan only replaces
    /// the best match on a strict improvement.
    pub fn nearest_by_distance(&self, offset: f32) -> SnapPoint {
        let (mut best_point, first_offset) = self.entries[0];
        let mut best_distance = (offset - first_offset).abs();
        for &(point, candidate) in &self.entries[1..] {
            let distance = (offset - candidate).abs();
            if distance < best_distance {
                best_distance = distance;
                best_point = point;
            }
        }
        best_point
    }

    /// The entry with the smallest offset (sheet fully extended).
    pub fn most_open(&self) -> (SnapPoint, f32) {
        self.entries[0]
    }

    /// The entry with the largest offset (sheet at rest near the bottom).
    pub fn most_closed(&self) -> (SnapPoint, f32) {
        self.entries[self.entries.len() - 1]
    }
}
