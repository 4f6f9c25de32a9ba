use crate::error::{ModelError, Result, UnboundedDomain};
use crate::math::Point2;

/// Axis-aligned extent of a 2D domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    /// Creates new bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is not finite or a range is empty.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self> {
        if ![xmin, xmax, ymin, ymax].iter().all(|v| v.is_finite()) {
            return Err(ModelError::InvalidArgument("bounds must be finite".into()).into());
        }
        if xmin >= xmax || ymin >= ymax {
            return Err(ModelError::InvalidArgument(format!(
                "empty bounds [{xmin}, {xmax}] x [{ymin}, {ymax}]"
            ))
            .into());
        }
        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Returns whether `p` lies in the closed box.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        (self.xmin..=self.xmax).contains(&p.x) && (self.ymin..=self.ymax).contains(&p.y)
    }

    /// Returns whether `other` lies entirely inside `self`.
    #[must_use]
    pub fn encloses(&self, other: &Bounds) -> bool {
        other.xmin >= self.xmin
            && other.xmax <= self.xmax
            && other.ymin >= self.ymin
            && other.ymax <= self.ymax
    }

    /// Returns the warning for `p` if it lies outside the box.
    #[must_use]
    pub fn check(&self, p: &Point2) -> Option<UnboundedDomain> {
        (!self.contains(p)).then_some(UnboundedDomain {
            x: p.x,
            y: p.y,
            xmin: self.xmin,
            xmax: self.xmax,
            ymin: self.ymin,
            ymax: self.ymax,
        })
    }
}
