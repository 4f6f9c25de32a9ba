use crate::error::Result;
use crate::geometry::{Ray, Surface};
use crate::math::{Point2, TOLERANCE};

use super::op::BooleanOp;

/// A directed surface: one side of a [`Surface`] taken as a solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    surface: Surface,
    sense: bool,
}

impl Primitive {
    /// Creates a new primitive.
    ///
    /// With `sense == true` the solid is where the surface evaluates
    /// negative; with `sense == false` it is the complementary side.
    #[must_use]
    pub fn new(surface: impl Into<Surface>, sense: bool) -> Self {
        Self {
            surface: surface.into(),
            sense,
        }
    }

    /// Returns the underlying surface.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Returns the sense flag.
    #[must_use]
    pub fn sense(&self) -> bool {
        self.sense
    }

    /// Returns whether `p` lies on the selected side of the surface.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        (self.surface.evaluate(p) < 0.0) == self.sense
    }

    /// Ray parameters where the ray crosses the surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface intersection is degenerate.
    pub fn intersections(&self, ray: &Ray) -> Result<Vec<f64>> {
        self.surface.intersect(ray)
    }
}

/// A node in a CSG tree.
///
/// Operator nodes exclusively own their children; the tree has no shared
/// subtrees and is never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A single directed surface.
    Primitive(Primitive),
    /// Points in either child.
    Union(Box<Node>, Box<Node>),
    /// Points in both children.
    Intersection(Box<Node>, Box<Node>),
    /// Points not in the child.
    Complement(Box<Node>),
}

impl Node {
    /// Creates a primitive leaf.
    #[must_use]
    pub fn primitive(surface: impl Into<Surface>, sense: bool) -> Self {
        Self::Primitive(Primitive::new(surface, sense))
    }

    /// Points in `left` or `right`.
    #[must_use]
    pub fn union(left: Node, right: Node) -> Self {
        Self::Union(Box::new(left), Box::new(right))
    }

    /// Points in both `left` and `right`.
    #[must_use]
    pub fn intersection(left: Node, right: Node) -> Self {
        Self::Intersection(Box::new(left), Box::new(right))
    }

    /// Points not in `child`.
    #[must_use]
    pub fn complement(child: Node) -> Self {
        Self::Complement(Box::new(child))
    }

    /// `left \ right`, expressed as `Intersection(left, Complement(right))`.
    #[must_use]
    pub fn difference(left: Node, right: Node) -> Self {
        Self::intersection(left, Self::complement(right))
    }

    /// Combines `self` (left) with `other` (right) under `op`.
    #[must_use]
    pub fn combine(self, op: BooleanOp, other: Node) -> Self {
        match op {
            BooleanOp::Union => Self::union(self, other),
            BooleanOp::Intersection => Self::intersection(self, other),
            BooleanOp::Difference => Self::difference(self, other),
        }
    }

    /// Returns whether `p` lies inside the solid described by this tree.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        match self {
            Self::Primitive(prim) => prim.contains(p),
            Self::Union(l, r) => l.contains(p) || r.contains(p),
            Self::Intersection(l, r) => l.contains(p) && r.contains(p),
            Self::Complement(child) => !child.contains(p),
        }
    }

    /// Ray parameters where the ray crosses any surface in the tree.
    ///
    /// The result is sorted ascending with parameters closer than
    /// [`TOLERANCE`] merged. It is a superset of the points where
    /// containment actually changes; see [`Node::crossings`].
    ///
    /// # Errors
    ///
    /// Propagates the first degenerate surface intersection unchanged.
    pub fn intersections(&self, ray: &Ray) -> Result<Vec<f64>> {
        match self {
            Self::Primitive(prim) => prim.intersections(ray),
            Self::Union(l, r) | Self::Intersection(l, r) => {
                let mut params = l.intersections(ray)?;
                params.extend(r.intersections(ray)?);
                Ok(merge_parameters(params))
            }
            Self::Complement(child) => child.intersections(ray),
        }
    }

    /// Number of primitive leaves in the tree.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        match self {
            Self::Primitive(_) => 1,
            Self::Union(l, r) | Self::Intersection(l, r) => {
                l.primitive_count() + r.primitive_count()
            }
            Self::Complement(child) => child.primitive_count(),
        }
    }
}

impl From<Primitive> for Node {
    fn from(prim: Primitive) -> Self {
        Self::Primitive(prim)
    }
}

/// Sorts ray parameters and collapses near-duplicates.
pub(crate) fn merge_parameters(mut params: Vec<f64>) -> Vec<f64> {
    params.sort_by(f64::total_cmp);
    params.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);
    params
}
