//! Boolean trees over directed surfaces.

mod crossing;
mod node;
mod op;
mod region;

pub use crossing::{Crossing, CrossingKind};
pub use node::{Node, Primitive};
pub use op::BooleanOp;
pub use region::{Region, RegionTerm};
