//! Constructive solid geometry in the plane over quadratic surfaces.
//!
//! Regions are boolean trees of directed conics. A [`domain::Geometry`]
//! holds regions in priority order and resolves points to the first region
//! that contains them.

pub mod csg;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod math;

pub use error::{CsgError, Result};
