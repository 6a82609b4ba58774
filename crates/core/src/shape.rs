//! The shapes a scatter scene can be built around.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

const SHAPE_NAMES: &[&str] = &["sphere", "cube", "aircraft"];

/// Target geometry for a scatter scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Sphere,
    Cube,
    #[default]
    Aircraft,
}

impl ShapeKind {
    /// Looks up a shape by its lowercase name.
    ///
    /// Returns `SimError::UnknownShape` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        match name {
            "sphere" => Ok(ShapeKind::Sphere),
            "cube" => Ok(ShapeKind::Cube),
            "aircraft" => Ok(ShapeKind::Aircraft),
            other => Err(SimError::UnknownShape(other.to_owned())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Aircraft => "aircraft",
        }
    }

    /// All recognized shape names, in form order.
    pub fn list_names() -> &'static [&'static str] {
        SHAPE_NAMES
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
