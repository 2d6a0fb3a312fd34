use serde::Serialize;

use crate::geometry::{Edge, EdgeCoordinates, Rectangle};

/// Which query a report answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Validate layouts and summarize every set
    Check,
    /// Children of each set overlapped by every other set's bound
    Overlaps,
    /// Children of each set touched by every other set's bound
    Touches,
    /// The child of each set closest to an edge
    Edge,
}

/// Result of running a query over a list of sets
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "query", rename_all = "lowercase")]
pub enum Report {
    Check {
        sets: Vec<SetSummary>,
    },
    Overlaps {
        pairs: Vec<OverlapPair>,
    },
    Touches {
        pairs: Vec<TouchPair>,
    },
    Edge {
        priority: Edge,
        secondary: Edge,
        sets: Vec<EdgeChoice>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct SetSummary {
    pub id: String,
    pub bounds: Rectangle<String>,
    pub area: i64,
    pub children: usize,
}

/// Children of `target` overlapped by the bound of `receiver`
#[derive(Debug, Clone, Serialize)]
pub struct OverlapPair {
    pub receiver: String,
    pub target: String,
    pub children: Vec<OverlapMatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverlapMatch {
    pub id: String,
    /// Region shared with the receiver's bound
    pub region: Rectangle<String>,
}

/// Children of `target` touched by the bound of `receiver`
#[derive(Debug, Clone, Serialize)]
pub struct TouchPair {
    pub receiver: String,
    pub target: String,
    pub children: Vec<TouchMatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TouchMatch {
    pub id: String,
    /// Edges of the receiver's bound that lie on the child
    pub edges: Vec<Edge>,
    /// Shared segment for each entry of `edges`
    pub segments: Vec<EdgeCoordinates<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeChoice {
    pub set: String,
    /// Chosen child in world coordinates, absent for an empty set
    pub child: Option<Rectangle<String>>,
}
