use tracing::debug;

use crate::error::{ModelError, Result};
use crate::geometry::{QuadraticSurface, Ray, Surface};
use crate::math::Point2;

use super::crossing::Crossing;
use super::node::Node;
use super::op::BooleanOp;

/// One `(coefficients, sense, op)` step of a region description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionTerm {
    /// Conic coefficients `[A, B, C, D, E, F]`.
    pub coefficients: [f64; 6],
    pub sense: bool,
    /// Ignored for the first term of a region.
    pub op: BooleanOp,
}

/// A labeled area built by folding operands into a single CSG tree.
///
/// The first operand becomes the root. Each later operand is combined
/// with the current root as `op(root, operand)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    root: Option<Node>,
}

impl Region {
    /// Creates an empty region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a region from an ordered sequence of terms.
    ///
    /// # Errors
    ///
    /// Returns an error if any term's coefficients are degenerate.
    pub fn from_terms<I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = RegionTerm>,
    {
        let mut region = Self::new();
        for term in terms {
            let surface = QuadraticSurface::from_coefficients(term.coefficients)?;
            region.append_surface(surface, term.sense, term.op);
        }
        Ok(region)
    }

    /// Appends a directed surface.
    pub fn append_surface(&mut self, surface: impl Into<Surface>, sense: bool, op: BooleanOp) {
        self.append_node(Node::primitive(surface, sense), op);
    }

    /// Appends an already-built subtree.
    pub fn append_node(&mut self, node: Node, op: BooleanOp) {
        self.root = Some(match self.root.take() {
            None => node,
            Some(root) => root.combine(op, node),
        });
        debug!(
            op = %op,
            primitives = self.root.as_ref().map_or(0, Node::primitive_count),
            "region extended"
        );
    }

    /// Appends exactly one of `node` or `surface`, with the operation given
    /// as a token (`"U"`, `"I"` or `"D"`). `sense` applies to `surface` only.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidArgument`] if both or neither operand is
    /// supplied, and [`ModelError::UnknownOperation`] for an unrecognised token.
    pub fn append(
        &mut self,
        node: Option<Node>,
        surface: Option<Surface>,
        operation: &str,
        sense: bool,
    ) -> Result<()> {
        let op: BooleanOp = operation.parse()?;
        match (node, surface) {
            (Some(node), None) => self.append_node(node, op),
            (None, Some(surface)) => self.append_surface(surface, sense, op),
            (Some(_), Some(_)) => {
                return Err(ModelError::InvalidArgument(
                    "supply either a node or a surface, not both".into(),
                )
                .into())
            }
            (None, None) => {
                return Err(
                    ModelError::InvalidArgument("supply a node or a surface".into()).into(),
                )
            }
        }
        Ok(())
    }

    /// Returns the root of the tree, if anything has been appended.
    #[must_use]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns whether nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns whether `p` is inside the region. An empty region contains nothing.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        self.root.as_ref().is_some_and(|n| n.contains(p))
    }

    /// Candidate boundary parameters along `ray`. Empty for an empty region.
    ///
    /// # Errors
    ///
    /// Propagates degenerate surface intersections.
    pub fn intersections(&self, ray: &Ray) -> Result<Vec<f64>> {
        self.root
            .as_ref()
            .map_or_else(|| Ok(vec![]), |n| n.intersections(ray))
    }

    /// Parameters where `ray` enters or leaves the region.
    ///
    /// # Errors
    ///
    /// Propagates degenerate surface intersections.
    pub fn crossings(&self, ray: &Ray) -> Result<Vec<Crossing>> {
        self.root
            .as_ref()
            .map_or_else(|| Ok(vec![]), |n| n.crossings(ray))
    }
}
