use serde::{Deserialize, Serialize};

/// The boundary segment two rectangles share along one edge.
///
/// Same layout as [`Rectangle`](super::Rectangle): `x`/`y` is the start of
/// the segment and `w`/`z` its end. A horizontal segment has `y == z`, a
/// vertical one `x == w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeCoordinates<Id> {
    pub id: Id,
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub z: i64,
}

impl<Id> EdgeCoordinates<Id> {
    pub fn new(id: Id, x: i64, y: i64, w: i64, z: i64) -> Self {
        Self { id, x, y, w, z }
    }
}

