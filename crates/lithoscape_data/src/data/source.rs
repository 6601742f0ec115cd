use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Opaque identifier of a raw material source (quarry).
///
/// Sourced from the `ID` attribute of the quarry vector dataset. Wraps a
/// shared string so that toolkit and assemblage entries are cheap value
/// copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(Arc<str>);

impl SourceId {
    #[must_use]
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One quarry point feature, pre-transformed into grid coordinate space.
///
/// Produced by the (out-of-scope) vector dataset loader. Coordinates are
/// fractional grid units; the registry floors them to a cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarryFeature {
    /// Identifier from the dataset's `ID` field.
    pub id: SourceId,
    /// Descriptive name from the dataset's `Name` field; not used in logic.
    pub name: String,
    /// X coordinate in grid units.
    pub x: f64,
    /// Y coordinate in grid units.
    pub y: f64,
}

impl QuarryFeature {
    #[must_use]
    pub fn new(id: impl Into<Arc<str>>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: SourceId::new(id),
            name: name.into(),
            x,
            y,
        }
    }
}
