use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four sides of an axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
    Unknown,
}

impl Edge {
    /// The four named edges, in the order touch queries report them
    pub const NAMED: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Returns false only for `Edge::Unknown`
    pub fn is_named(self) -> bool {
        !matches!(self, Edge::Unknown)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Top => "Top",
            Edge::Right => "Right",
            Edge::Bottom => "Bottom",
            Edge::Left => "Left",
            Edge::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}
