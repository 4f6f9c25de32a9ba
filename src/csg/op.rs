use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The boolean operation used to fold a new operand into a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BooleanOp {
    #[default]
    Union,
    Intersection,
    /// Existing tree minus the operand.
    Difference,
}

impl BooleanOp {
    /// Returns the single-letter token for this operation.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Union => "U",
            Self::Intersection => "I",
            Self::Difference => "D",
        }
    }
}

impl FromStr for BooleanOp {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Self::Union),
            "I" => Ok(Self::Intersection),
            "D" => Ok(Self::Difference),
            other => Err(ModelError::UnknownOperation(other.to_owned())),
        }
    }
}

impl fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
