use std::fmt;
use std::str::FromStr;

use evenpane_common::Orientation;

/// One structural change requested from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `x`: close the active pane.
    Close,
    /// `v` (side by side) or `s` (stacked).
    Split(Orientation),
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Operation::Close),
            "v" => Ok(Operation::Split(Orientation::Row)),
            "s" => Ok(Operation::Split(Orientation::Column)),
            other => Err(format!("unknown operation '{other}' (expected x, v or s)")),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Close => write!(f, "x"),
            Operation::Split(Orientation::Row) => write!(f, "v"),
            Operation::Split(Orientation::Column) => write!(f, "s"),
        }
    }
}
