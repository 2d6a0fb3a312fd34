use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::Rectangle;

/// A group of rectangles inside a bounding rectangle that grows to fit them.
///
/// Children are stored relative to the set's anchor (`x`, `y`). After every
/// accepted child the bound's `w` and `z` hold the largest `child.x + child.w`
/// and `child.y + child.z` seen so far. The bound never shrinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "SetLayout<Id>",
    into = "SetLayout<Id>",
    bound(
        serialize = "Id: Serialize + Clone",
        deserialize = "Id: Deserialize<'de>"
    )
)]
pub struct Set<Id> {
    bounds: Rectangle<Id>,
    children: Vec<Rectangle<Id>>,
}

/// Serialized shape of a [`Set`].
///
/// The bound is not stored; it is recomputed when the layout is turned
/// back into a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetLayout<Id> {
    pub id: Id,
    pub x: i64,
    pub y: i64,
    #[serde(default = "Vec::new")]
    pub children: Vec<Rectangle<Id>>,
}

impl<Id> Set<Id> {
    /// Create a set anchored at (`x`, `y`) and add `children` in order.
    ///
    /// Fails with the first child's error; no partially built set is returned.
    pub fn new(
        id: Id,
        x: i64,
        y: i64,
        children: impl IntoIterator<Item = Rectangle<Id>>,
    ) -> Result<Self, GeometryError> {
        let mut set = Self {
            bounds: Rectangle::new(id, x, y, 0, 0),
            children: Vec::new(),
        };

        for child in children {
            set.add_rectangle(child)?;
        }

        debug!(
            "Built set at ({}, {}) with {} children, bounds {}x{}",
            set.bounds.x,
            set.bounds.y,
            set.children.len(),
            set.bounds.w,
            set.bounds.z
        );

        Ok(set)
    }

    /// Add a child in set-relative coordinates.
    ///
    /// The child must pass [`Rectangle::validate`] and sit at a non-negative
    /// position. Its far corner must fit in `i64` both relative to the set
    /// (`x + w`, `y + z`) and in world coordinates (anchor plus `w`, `z`).
    /// A rejected child leaves the set unchanged.
    pub fn add_rectangle(&mut self, rect: Rectangle<Id>) -> Result<(), GeometryError> {
        if let Err(err) = rect.validate() {
            debug!(
                "Rejected child ({}, {}, {}, {}): {}",
                rect.x, rect.y, rect.w, rect.z, err
            );
            return Err(err);
        }

        if rect.x < 0 || rect.y < 0 {
            debug!("Rejected child at negative position ({}, {})", rect.x, rect.y);
            return Err(GeometryError::NegativePosition);
        }

        let Some((far_w, far_z)) = self.far_corner(&rect) else {
            debug!(
                "Rejected child ({}, {}, {}, {}): {}",
                rect.x,
                rect.y,
                rect.w,
                rect.z,
                GeometryError::Overflow
            );
            return Err(GeometryError::Overflow);
        };

        self.bounds.w = self.bounds.w.max(far_w);
        self.bounds.z = self.bounds.z.max(far_z);
        self.children.push(rect);

        Ok(())
    }

    fn far_corner(&self, rect: &Rectangle<Id>) -> Option<(i64, i64)> {
        self.bounds.x.checked_add(rect.w)?;
        self.bounds.y.checked_add(rect.z)?;

        Some((rect.x.checked_add(rect.w)?, rect.y.checked_add(rect.z)?))
    }

    pub fn id(&self) -> &Id {
        &self.bounds.id
    }

    pub fn x(&self) -> i64 {
        self.bounds.x
    }

    pub fn y(&self) -> i64 {
        self.bounds.y
    }

    pub fn w(&self) -> i64 {
        self.bounds.w
    }

    pub fn z(&self) -> i64 {
        self.bounds.z
    }

    /// The bounding rectangle, carrying the set's id
    pub fn bounds(&self) -> &Rectangle<Id> {
        &self.bounds
    }

    pub fn area(&self) -> i64 {
        self.bounds.area()
    }

    /// Children in insertion order, in set-relative coordinates
    pub fn children(&self) -> &[Rectangle<Id>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<Id: Clone> Set<Id> {
    /// Children translated by the set's anchor into world coordinates
    pub fn offset_children(&self) -> Vec<Rectangle<Id>> {
        self.children
            .iter()
            .map(|child| child.offset(&self.bounds))
            .collect()
    }
}

impl<Id> TryFrom<SetLayout<Id>> for Set<Id> {
    type Error = GeometryError;

    fn try_from(layout: SetLayout<Id>) -> Result<Self, Self::Error> {
        Set::new(layout.id, layout.x, layout.y, layout.children)
    }
}

impl<Id> From<Set<Id>> for SetLayout<Id> {
    fn from(set: Set<Id>) -> Self {
        SetLayout {
            id: set.bounds.id,
            x: set.bounds.x,
            y: set.bounds.y,
            children: set.children,
        }
    }
}
