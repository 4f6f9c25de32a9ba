use crate::error::Result;
use crate::geometry::Ray;
use crate::math::TOLERANCE;

use super::node::Node;

/// Step taken behind a crossing that sits at the ray origin.
const BACKSTEP: f64 = 1e-6;

/// Direction of a boundary crossing along a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingKind {
    Entering,
    Exiting,
}

/// A ray parameter where containment in a solid changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub t: f64,
    pub kind: CrossingKind,
}

impl Node {
    /// Ray parameters where the ray enters or leaves the solid.
    ///
    /// Filters [`Node::intersections`] by sampling containment between
    /// consecutive candidates. Surface hits masked by the boolean structure
    /// and tangencies drop out.
    ///
    /// # Errors
    ///
    /// Propagates any degenerate surface intersection.
    pub fn crossings(&self, ray: &Ray) -> Result<Vec<Crossing>> {
        let params = self.intersections(ray)?;
        let (Some(&first), Some(&last)) = (params.first(), params.last()) else {
            return Ok(vec![]);
        };

        let before = if first > TOLERANCE {
            first * 0.5
        } else {
            first - BACKSTEP
        };
        let samples: Vec<f64> = std::iter::once(before)
            .chain(params.windows(2).map(|w| 0.5 * (w[0] + w[1])))
            .chain(std::iter::once(last + 1.0))
            .collect();
        let states: Vec<bool> = samples.iter().map(|t| self.contains(&ray.at(*t))).collect();

        Ok(params
            .iter()
            .zip(states.windows(2))
            .filter_map(|(&t, w)| match (w[0], w[1]) {
                (false, true) => Some(Crossing {
                    t,
                    kind: CrossingKind::Entering,
                }),
                (true, false) => Some(Crossing {
                    t,
                    kind: CrossingKind::Exiting,
                }),
                _ => None,
            })
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::QuadraticSurface;
    use crate::math::{Point2, Vector2};
    use approx::assert_relative_eq;

    fn disc(cx: f64, r: f64) -> Node {
        Node::primitive(QuadraticSurface::circle(Point2::new(cx, 0.0), r).unwrap(), true)
    }

    fn x_ray(x0: f64) -> Ray {
        Ray::new(Point2::new(x0, 0.0), Vector2::new(1.0, 0.0)).unwrap()
    }

    #[test]
    fn lens_keeps_only_inner_boundaries() {
        let lens = Node::intersection(disc(-0.5, 1.0), disc(0.5, 1.0));
        let ray = x_ray(-3.0);
        assert_eq!(lens.intersections(&ray).unwrap().len(), 4);

        let c = lens.crossings(&ray).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].kind, CrossingKind::Entering);
        assert_relative_eq!(c[0].t, 2.5, epsilon = 1e-12);
        assert_eq!(c[1].kind, CrossingKind::Exiting);
        assert_relative_eq!(c[1].t, 3.5, epsilon = 1e-12);
    }

    #[test]
    fn disjoint_union_alternates() {
        let pair = Node::union(disc(-2.0, 1.0), disc(2.0, 1.0));
        let kinds: Vec<_> = pair
            .crossings(&x_ray(-4.0))
            .unwrap()
            .into_iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                CrossingKind::Entering,
                CrossingKind::Exiting,
                CrossingKind::Entering,
                CrossingKind::Exiting
            ]
        );
    }

    #[test]
    fn ray_from_inside_exits_once() {
        let c = disc(0.0, 1.0).crossings(&x_ray(0.0)).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].kind, CrossingKind::Exiting);
    }

    #[test]
    fn tangent_touch_is_not_a_crossing() {
        let node = disc(0.0, 1.0);
        let ray = Ray::new(Point2::new(-2.0, 1.0), Vector2::new(1.0, 0.0)).unwrap();
        assert_eq!(node.intersections(&ray).unwrap().len(), 1);
        assert!(node.crossings(&ray).unwrap().is_empty());
    }

    #[test]
    fn complement_swaps_kinds() {
        let hole = Node::complement(disc(0.0, 1.0));
        let c = hole.crossings(&x_ray(-2.0)).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].kind, CrossingKind::Exiting);
        assert_eq!(c[1].kind, CrossingKind::Entering);
    }

    #[test]
    fn miss_gives_nothing() {
        let node = disc(0.0, 1.0);
        let ray = Ray::new(Point2::new(-2.0, 5.0), Vector2::new(1.0, 0.0)).unwrap();
        assert!(node.crossings(&ray).unwrap().is_empty());
    }
}
