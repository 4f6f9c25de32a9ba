mod quadratic;

pub use quadratic::QuadraticSurface;

use crate::error::Result;
use crate::geometry::Ray;
use crate::math::Point2;

/// A boundary curve in the plane, described implicitly.
///
/// The sign of [`Surface::evaluate`] splits the plane into two sides:
/// negative on one, non-negative on the other and on the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// A general conic.
    Quadratic(QuadraticSurface),
}

impl Surface {
    /// Evaluates the signed implicit function at `p`. Not a distance.
    #[must_use]
    pub fn evaluate(&self, p: &Point2) -> f64 {
        match self {
            Self::Quadratic(q) => q.evaluate(p),
        }
    }

    /// Returns the ray parameters `t >= 0` where the ray crosses the surface,
    /// sorted ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the crossing set is not finite.
    pub fn intersect(&self, ray: &Ray) -> Result<Vec<f64>> {
        match self {
            Self::Quadratic(q) => q.intersect(ray),
        }
    }
}

impl From<QuadraticSurface> for Surface {
    fn from(q: QuadraticSurface) -> Self {
        Self::Quadratic(q)
    }
}
