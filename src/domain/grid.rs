use crate::error::{ModelError, Result};
use crate::math::Point2;

use super::Bounds;

/// A regular `nx` by `ny` lattice of cell centres over a box.
///
/// Sample `(i, j)` is the centre of the `i`-th column (along x) and `j`-th
/// row (along y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    bounds: Bounds,
    nx: usize,
    ny: usize,
}

impl SampleGrid {
    /// Creates a new grid.
    ///
    /// # Errors
    ///
    /// Returns an error if `nx` or `ny` is zero.
    pub fn new(bounds: Bounds, nx: usize, ny: usize) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(ModelError::InvalidArgument(format!(
                "grid must have at least one cell per axis, got {nx} x {ny}"
            ))
            .into());
        }
        Ok(Self { bounds, nx, ny })
    }

    /// Returns the sampled box.
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Number of columns.
    #[must_use]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of rows.
    #[must_use]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Returns the sample point of cell `(i, j)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn point(&self, i: usize, j: usize) -> Point2 {
        let dx = self.bounds.width() / self.nx as f64;
        let dy = self.bounds.height() / self.ny as f64;
        Point2::new(
            self.bounds.xmin + (i as f64 + 0.5) * dx,
            self.bounds.ymin + (j as f64 + 0.5) * dy,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_cells_rejected() {
        let b = Bounds::new(0.0, 1.0, 0.0, 1.0).unwrap();
        assert!(SampleGrid::new(b, 0, 4).is_err());
        assert!(SampleGrid::new(b, 4, 0).is_err());
    }

    #[test]
    fn points_are_cell_centres() {
        let b = Bounds::new(0.0, 4.0, -1.0, 1.0).unwrap();
        let g = SampleGrid::new(b, 4, 2).unwrap();
        let first = g.point(0, 0);
        assert_relative_eq!(first.x, 0.5);
        assert_relative_eq!(first.y, -0.5);
        let last = g.point(3, 1);
        assert_relative_eq!(last.x, 3.5);
        assert_relative_eq!(last.y, 0.5);
    }
}
