use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of a pane or container in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size along the axis a container of `orientation` partitions.
    pub fn along(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Row => self.width,
            Orientation::Column => self.height,
        }
    }

    /// Replace the size along `orientation`, keeping the cross axis.
    pub fn with_along(self, orientation: Orientation, size: u32) -> Self {
        match orientation {
            Orientation::Row => Self {
                width: size,
                ..self
            },
            Orientation::Column => Self {
                height: size,
                ..self
            },
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Top-left corner of a node within the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub x: u32,
    pub y: u32,
}

/// How a container lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Side by side; children partition the width.
    Row,
    /// Stacked; children partition the height.
    Column,
}

/// Parse-order index of a pane within one window layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PaneId(pub u32);

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane-{}", self.0)
    }
}
