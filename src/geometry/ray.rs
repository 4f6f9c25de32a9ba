use std::fmt;

use nalgebra::Unit;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A half-line in the plane.
///
/// The parametric form is: `P(t) = origin + t * direction` for `t >= 0`,
/// with `direction` always of unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point2,
    direction: Unit<Vector2>,
}

impl Ray {
    /// Creates a new ray, normalizing `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the origin or direction is not
    /// finite, and [`GeometryError::ZeroDirection`] if the direction has (near)
    /// zero length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        if !origin.iter().chain(direction.iter()).all(|v| v.is_finite()) {
            return Err(
                GeometryError::Degenerate("ray origin and direction must be finite".into()).into(),
            );
        }
        let direction = Unit::try_new(direction, TOLERANCE).ok_or(GeometryError::ZeroDirection)?;
        Ok(Self { origin, direction })
    }

    /// Creates a ray from `origin` aimed at `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroDirection`] if the two points coincide.
    pub fn through(origin: Point2, target: Point2) -> Result<Self> {
        Self::new(origin, target - origin)
    }

    /// Returns the origin of the ray.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the unit direction of the ray.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        self.direction.as_ref()
    }

    /// Evaluates the ray at parameter `t`.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f64) -> Point2 {
        self.origin + self.direction.as_ref() * t
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ray: r_0({:10.6}, {:10.6}), d({:.6}, {:.6})",
            self.origin.x, self.origin.y, self.direction.x, self.direction.y
        )
    }
}
