//! Bounded domains of prioritised regions and their point classification.

mod bounds;
mod grid;

pub use bounds::Bounds;
pub use grid::SampleGrid;

use nalgebra::DMatrix;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::csg::Region;
use crate::error::Result;
use crate::math::Point2;

/// Region index reported for a point covered by no region.
pub const NO_REGION: isize = -1;

/// A bounded 2D domain holding an ordered list of regions.
///
/// Region order is priority order: where regions overlap, the one added
/// first wins. The bounds are advisory. Queries outside them still answer
/// and only log an [`UnboundedDomain`](crate::error::UnboundedDomain) warning.
///
/// Once built, a `Geometry` is read-only and may be queried from many
/// threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    bounds: Bounds,
    regions: Vec<Region>,
}

impl Geometry {
    /// Creates an empty geometry over `[xmin, xmax] x [ymin, ymax]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are empty or not finite.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self> {
        Ok(Self::with_bounds(Bounds::new(xmin, xmax, ymin, ymax)?))
    }

    /// Creates an empty geometry over already validated bounds.
    #[must_use]
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            bounds,
            regions: Vec::new(),
        }
    }

    /// Appends a region at the lowest priority and returns its index.
    pub fn add_region(&mut self, region: Region) -> usize {
        self.regions.push(region);
        let index = self.regions.len() - 1;
        debug!(index, "region added to geometry");
        index
    }

    /// Returns the declared bounds.
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Returns the regions in priority order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Returns the index of the first region containing `p`.
    #[must_use]
    pub fn locate(&self, p: &Point2) -> Option<usize> {
        if let Some(warning) = self.bounds.check(p) {
            warn!(%warning, "query outside geometry bounds");
        }
        self.first_containing(p)
    }

    /// Returns the index of the first region containing `p`, or [`NO_REGION`].
    #[must_use]
    pub fn find_region(&self, p: &Point2) -> isize {
        to_region_index(self.locate(p))
    }

    /// Cell-centred grid of `nx` by `ny` samples over this geometry's bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `nx` or `ny` is zero.
    pub fn sample_grid(&self, nx: usize, ny: usize) -> Result<SampleGrid> {
        SampleGrid::new(self.bounds, nx, ny)
    }

    /// Resolves every sample of `grid` to a region index or [`NO_REGION`].
    ///
    /// Entry `(i, j)` of the result belongs to `grid.point(i, j)`.
    #[must_use]
    pub fn classify(&self, grid: &SampleGrid) -> DMatrix<isize> {
        self.warn_if_grid_escapes(grid);
        let map = DMatrix::from_fn(grid.nx(), grid.ny(), |i, j| {
            to_region_index(self.first_containing(&grid.point(i, j)))
        });
        trace!(nx = grid.nx(), ny = grid.ny(), "grid classified");
        map
    }

    /// Same as [`Geometry::classify`], spreading samples over the rayon pool.
    #[must_use]
    pub fn classify_par(&self, grid: &SampleGrid) -> DMatrix<isize> {
        self.warn_if_grid_escapes(grid);
        let (nx, ny) = (grid.nx(), grid.ny());
        // Column-major, matching DMatrix storage.
        let data: Vec<isize> = (0..nx * ny)
            .into_par_iter()
            .map(|k| to_region_index(self.first_containing(&grid.point(k % nx, k / nx))))
            .collect();
        trace!(nx, ny, "grid classified in parallel");
        DMatrix::from_vec(nx, ny, data)
    }

    fn first_containing(&self, p: &Point2) -> Option<usize> {
        self.regions.iter().position(|r| r.contains(p))
    }

    fn warn_if_grid_escapes(&self, grid: &SampleGrid) {
        if !self.bounds.encloses(grid.bounds()) {
            warn!(
                grid = ?grid.bounds(),
                domain = ?self.bounds,
                "sampling grid extends outside geometry bounds"
            );
        }
    }
}

fn to_region_index(found: Option<usize>) -> isize {
    found
        .and_then(|i| isize::try_from(i).ok())
        .unwrap_or(NO_REGION)
}
