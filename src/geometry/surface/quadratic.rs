use crate::error::{GeometryError, Result};
use crate::geometry::Ray;
use crate::math::{flush_cancellation, solve_quadratic, Point2, Vector2};

/// A general conic in the plane.
///
/// `f(x, y) = A x^2 + B y^2 + C x y + D x + E y + F`
///
/// The zero set of `f` is the surface. Points with `f < 0` are on its
/// negative side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticSurface {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl QuadraticSurface {
    /// Creates a conic from its six coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if every coefficient is zero or any is not finite.
    #[allow(clippy::many_single_char_names)]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Result<Self> {
        let coefficients = [a, b, c, d, e, f];
        if coefficients.iter().any(|k| !k.is_finite()) {
            return Err(
                GeometryError::Degenerate("conic coefficients must be finite".into()).into(),
            );
        }
        if coefficients.iter().all(|k| *k == 0.0) {
            return Err(GeometryError::Degenerate("all conic coefficients are zero".into()).into());
        }
        Ok(Self { a, b, c, d, e, f })
    }

    /// Creates a conic from `[A, B, C, D, E, F]`.
    ///
    /// # Errors
    ///
    /// Returns an error if every coefficient is zero or any is not finite.
    pub fn from_coefficients(k: [f64; 6]) -> Result<Self> {
        Self::new(k[0], k[1], k[2], k[3], k[4], k[5])
    }

    /// Circle `(x - cx)^2 + (y - cy)^2 - r^2`, negative inside.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive and finite.
    pub fn circle(center: Point2, radius: f64) -> Result<Self> {
        Self::ellipse(center, radius, radius)
    }

    /// Axis-aligned ellipse `((x - cx) / rx)^2 + ((y - cy) / ry)^2 - 1`,
    /// negative inside.
    ///
    /// # Errors
    ///
    /// Returns an error if either semi-axis is not positive and finite.
    pub fn ellipse(center: Point2, rx: f64, ry: f64) -> Result<Self> {
        if !(rx > 0.0 && ry > 0.0 && rx.is_finite() && ry.is_finite()) {
            return Err(
                GeometryError::Degenerate("ellipse semi-axes must be positive".into()).into(),
            );
        }
        let ia = 1.0 / (rx * rx);
        let ib = 1.0 / (ry * ry);
        Self::new(
            ia,
            ib,
            0.0,
            -2.0 * center.x * ia,
            -2.0 * center.y * ib,
            center.x * center.x * ia + center.y * center.y * ib - 1.0,
        )
    }

    /// Line `a x + b y + c`.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` and `b` are both zero.
    pub fn line(a: f64, b: f64, c: f64) -> Result<Self> {
        if a == 0.0 && b == 0.0 {
            return Err(GeometryError::Degenerate("line normal is zero".into()).into());
        }
        Self::new(0.0, 0.0, 0.0, a, b, c)
    }

    /// Vertical line `x - x0`, negative for `x < x0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x0` is not finite.
    pub fn x_plane(x0: f64) -> Result<Self> {
        Self::new(0.0, 0.0, 0.0, 1.0, 0.0, -x0)
    }

    /// Horizontal line `y - y0`, negative for `y < y0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `y0` is not finite.
    pub fn y_plane(y0: f64) -> Result<Self> {
        Self::new(0.0, 0.0, 0.0, 0.0, 1.0, -y0)
    }

    /// Returns `[A, B, C, D, E, F]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Evaluates the implicit function at `p`.
    #[must_use]
    pub fn evaluate(&self, p: &Point2) -> f64 {
        let (x, y) = (p.x, p.y);
        self.a * x * x + self.b * y * y + self.c * x * y + self.d * x + self.e * y + self.f
    }

    /// Gradient of the implicit function at `p`. Points toward increasing `f`.
    #[must_use]
    pub fn gradient(&self, p: &Point2) -> Vector2 {
        Vector2::new(
            2.0 * self.a * p.x + self.c * p.y + self.d,
            2.0 * self.b * p.y + self.c * p.x + self.e,
        )
    }

    /// Returns the ray parameters `t >= 0` where the ray meets the conic, ascending.
    ///
    /// Substituting `P(t)` into `f` gives `a t^2 + b t + c` with
    /// `a = A dx^2 + B dy^2 + C dx dy`,
    /// `b = 2A ox dx + 2B oy dy + C (ox dy + oy dx) + D dx + E dy`,
    /// `c = f(origin)`.
    /// A coefficient that is only rounding residue of its own terms is
    /// treated as zero. A tangent ray yields a single parameter.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the ray lies entirely on the conic.
    pub fn intersect(&self, ray: &Ray) -> Result<Vec<f64>> {
        let o = ray.origin();
        let d = ray.direction();

        let qa_terms = [
            self.a * d.x * d.x,
            self.b * d.y * d.y,
            self.c * d.x * d.y,
        ];
        let qb_terms = [
            2.0 * self.a * o.x * d.x,
            2.0 * self.b * o.y * d.y,
            self.c * o.x * d.y,
            self.c * o.y * d.x,
            self.d * d.x,
            self.e * d.y,
        ];
        let qc_terms = [
            self.a * o.x * o.x,
            self.b * o.y * o.y,
            self.c * o.x * o.y,
            self.d * o.x,
            self.e * o.y,
            self.f,
        ];

        let qa = flush_cancellation(qa_terms.iter().sum(), magnitude(&qa_terms));
        let qb = flush_cancellation(qb_terms.iter().sum(), magnitude(&qb_terms));
        let qc = flush_cancellation(qc_terms.iter().sum(), magnitude(&qc_terms));

        let mut roots = solve_quadratic(qa, qb, qc)?;
        roots.retain(|t| *t >= 0.0);
        Ok(roots)
    }
}

fn magnitude(terms: &[f64]) -> f64 {
    terms.iter().map(|t| t.abs()).sum()
}
