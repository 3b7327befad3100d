//! Immutable space-time trajectories.

use crate::error::TrajectoryError;
use crate::key::State;

/// A `(steps, width)` array of cell states.
///
/// Row 0 is the initial configuration; each later row is derived from the
/// one above it. Trajectories are immutable once constructed
/// (re-simulation produces a new value rather than mutating an old one),
/// so shared references can be handed to identification and persistence
/// without copies.
///
/// Storage is a flat row-major buffer. The type does not carry an alphabet
/// bound: validation against a particular `k` happens at the consuming
/// boundary (the simulator validates its input row, the identifier
/// validates every cell it reads).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trajectory {
    width: usize,
    cells: Vec<State>,
}

impl Trajectory {
    /// Build a trajectory from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::ZeroWidth`] if `width == 0`,
    /// [`TrajectoryError::Empty`] if `cells` is empty, and
    /// [`TrajectoryError::NotRectangular`] if `cells.len()` is not a
    /// multiple of `width`.
    pub fn from_flat(width: usize, cells: Vec<State>) -> Result<Self, TrajectoryError> {
        if width == 0 {
            return Err(TrajectoryError::ZeroWidth);
        }
        if cells.is_empty() {
            return Err(TrajectoryError::Empty);
        }
        if cells.len() % width != 0 {
            return Err(TrajectoryError::NotRectangular {
                len: cells.len(),
                width,
            });
        }
        Ok(Self { width, cells })
    }

    /// Build a trajectory from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::Empty`] if there are no rows,
    /// [`TrajectoryError::ZeroWidth`] if rows are empty, and
    /// [`TrajectoryError::Ragged`] if any row's length differs from the
    /// first row's.
    pub fn from_rows(rows: &[Vec<State>]) -> Result<Self, TrajectoryError> {
        let first = rows.first().ok_or(TrajectoryError::Empty)?;
        let width = first.len();
        if width == 0 {
            return Err(TrajectoryError::ZeroWidth);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TrajectoryError::Ragged {
                    row: index,
                    expected: width,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { width, cells })
    }

    /// Number of rows (time steps), including the initial row.
    pub fn steps(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Number of cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The row at time `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t >= steps()`.
    pub fn row(&self, t: usize) -> &[State] {
        &self.cells[t * self.width..(t + 1) * self.width]
    }

    /// Iterator over rows in time order.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> {
        self.cells.chunks_exact(self.width)
    }

    /// The cell at time `t`, position `i`, if in bounds.
    pub fn get(&self, t: usize, i: usize) -> Option<State> {
        if i >= self.width {
            return None;
        }
        self.cells.get(t * self.width + i).copied()
    }

    /// The flat row-major buffer.
    pub fn cells(&self) -> &[State] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Constructors ────────────────────────────────────────────

    #[test]
    fn from_flat_shapes_rows() {
        let traj = Trajectory::from_flat(3, vec![0, 1, 0, 1, 1, 1]).unwrap();
        assert_eq!(traj.steps(), 2);
        assert_eq!(traj.width(), 3);
        assert_eq!(traj.row(0), &[0, 1, 0]);
        assert_eq!(traj.row(1), &[1, 1, 1]);
    }

    #[test]
    fn from_flat_rejects_misaligned_buffer() {
        assert_eq!(
            Trajectory::from_flat(3, vec![0, 1, 0, 1]),
            Err(TrajectoryError::NotRectangular { len: 4, width: 3 })
        );
    }

    #[test]
    fn from_flat_rejects_zero_width() {
        assert_eq!(
            Trajectory::from_flat(0, vec![1]),
            Err(TrajectoryError::ZeroWidth)
        );
    }

    #[test]
    fn from_flat_rejects_empty_buffer() {
        assert_eq!(Trajectory::from_flat(3, vec![]), Err(TrajectoryError::Empty));
    }

    #[test]
    fn from_rows_matches_from_flat() {
        let a = Trajectory::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        let b = Trajectory::from_flat(2, vec![0, 1, 1, 0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        assert_eq!(
            Trajectory::from_rows(&[vec![0, 1], vec![1]]),
            Err(TrajectoryError::Ragged {
                row: 1,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn from_rows_rejects_no_rows() {
        assert_eq!(Trajectory::from_rows(&[]), Err(TrajectoryError::Empty));
    }

    // ── Accessors ───────────────────────────────────────────────

    #[test]
    fn get_is_bounds_checked() {
        let traj = Trajectory::from_flat(2, vec![0, 1, 1, 0]).unwrap();
        assert_eq!(traj.get(1, 0), Some(1));
        assert_eq!(traj.get(1, 2), None);
        assert_eq!(traj.get(2, 0), None);
    }

    #[test]
    fn rows_iterates_in_time_order() {
        let traj = Trajectory::from_flat(2, vec![0, 1, 1, 0]).unwrap();
        let rows: Vec<&[State]> = traj.rows().collect();
        assert_eq!(rows, vec![&[0, 1][..], &[1, 0][..]]);
    }
}
