use serde::{Deserialize, Serialize};

use super::{Edge, EdgeCoordinates};
use crate::error::GeometryError;

/// An axis-aligned rectangle tagged with an identifier.
///
/// The top-left corner is `x`/`y` and the bottom-right corner is `w`/`z`.
/// `w` and `z` are coordinates, not a width and height.
///
/// Any four integers are accepted, inverted or degenerate ones included.
/// Call [`Rectangle::validate`] before relying on the points being ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle<Id> {
    pub id: Id,
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub z: i64,
}

impl<Id> Rectangle<Id> {
    pub fn new(id: Id, x: i64, y: i64, w: i64, z: i64) -> Self {
        Self { id, x, y, w, z }
    }

    /// Check if this rectangle overlaps another.
    ///
    /// The far edges are exclusive, so rectangles that only share a
    /// boundary do not overlap.
    pub fn overlaps<T>(&self, target: &Rectangle<T>) -> bool {
        self.x < target.w && target.x < self.w && self.y < target.z && target.y < self.z
    }

    /// Area regardless of point ordering, saturating at `i64::MAX`
    pub fn area(&self) -> i64 {
        self.width().saturating_mul(self.height())
    }

    pub fn width(&self) -> i64 {
        saturate(self.w.abs_diff(self.x))
    }

    pub fn height(&self) -> i64 {
        saturate(self.z.abs_diff(self.y))
    }

    /// Zero area is reported before badly ordered points.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.area() == 0 {
            return Err(GeometryError::ZeroArea);
        }

        if self.x > self.w || self.y > self.z {
            return Err(GeometryError::BadPoints);
        }

        Ok(())
    }

    /// Check whether this rectangle touches `target` along a single edge.
    ///
    /// The shared boundary must have a non-zero length, so corner contact
    /// never counts. `Edge::Unknown` never touches.
    pub fn touches_on<T>(&self, target: &Rectangle<T>, edge: Edge) -> bool {
        let spans_x = self.x < target.w && self.w > target.x;
        let spans_y = self.y < target.z && self.z > target.y;

        match edge {
            Edge::Top => (self.y == target.z || self.y == target.y) && spans_x,
            Edge::Right => (self.w == target.x || self.w == target.w) && spans_y,
            Edge::Bottom => (self.z == target.y || self.z == target.z) && spans_x,
            Edge::Left => (self.x == target.w || self.x == target.x) && spans_y,
            Edge::Unknown => false,
        }
    }

    /// Every edge of this rectangle that lies on an edge of `target`.
    ///
    /// Overlap is not considered: a rectangle inside another still reports
    /// any edge the two have in common.
    pub fn touches<T>(&self, target: &Rectangle<T>) -> Vec<Edge> {
        Edge::NAMED
            .into_iter()
            .filter(|&edge| self.touches_on(target, edge))
            .collect()
    }
}

impl<Id: Clone> Rectangle<Id> {
    /// Move the rectangle by `dx` horizontally and `dy` vertically.
    ///
    /// Coordinates saturate at the bounds of `i64`.
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        Self {
            id: self.id.clone(),
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            w: self.w.saturating_add(dx),
            z: self.z.saturating_add(dy),
        }
    }

    /// Move the rectangle by the top-left point of `target`.
    ///
    /// Only `target.x` and `target.y` are used.
    pub fn offset<T>(&self, target: &Rectangle<T>) -> Self {
        self.translate(target.x, target.y)
    }

    /// The region shared by both rectangles, carrying the id of `target`
    pub fn overlapping_area(&self, target: &Rectangle<Id>) -> Option<Self> {
        if !self.overlaps(target) {
            return None;
        }

        Some(Self {
            id: target.id.clone(),
            x: self.x.max(target.x),
            y: self.y.max(target.y),
            w: self.w.min(target.w),
            z: self.z.min(target.z),
        })
    }

    /// The segment shared with `target` along `edge`, carrying the id of `target`
    pub fn touch_coordinates(
        &self,
        target: &Rectangle<Id>,
        edge: Edge,
    ) -> Option<EdgeCoordinates<Id>> {
        if !self.touches_on(target, edge) {
            return None;
        }

        let id = target.id.clone();
        let coords = match edge {
            Edge::Top => EdgeCoordinates::new(
                id,
                self.x.max(target.x),
                self.y,
                self.w.min(target.w),
                self.y,
            ),
            Edge::Right => EdgeCoordinates::new(
                id,
                self.w,
                self.y.max(target.y),
                self.w,
                self.z.min(target.z),
            ),
            Edge::Bottom => EdgeCoordinates::new(
                id,
                self.x.max(target.x),
                self.z,
                self.w.min(target.w),
                self.z,
            ),
            Edge::Left => EdgeCoordinates::new(
                id,
                self.x,
                self.y.max(target.y),
                self.x,
                self.z.min(target.z),
            ),
            Edge::Unknown => return None,
        };

        Some(coords)
    }
}

fn saturate(extent: u64) -> i64 {
    i64::try_from(extent).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(id: &'static str, x: i64, y: i64, w: i64, z: i64) -> Rectangle<&'static str> {
        Rectangle::new(id, x, y, w, z)
    }

    struct PairCase {
        a: Rectangle<&'static str>,
        b: Rectangle<&'static str>,
        overlaps: bool,
        touches_a: &'static [Edge],
        touches_b: &'static [Edge],
    }

    const ALL: &[Edge] = &[Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    fn pair_cases() -> Vec<PairCase> {
        vec![
            PairCase {
                a: rect("above", 0, 0, 10, 10),
                b: rect("below", 0, 20, 10, 30),
                overlaps: false,
                touches_a: &[],
                touches_b: &[],
            },
            PairCase {
                a: rect("left", 0, 0, 10, 10),
                b: rect("right", 20, 0, 30, 10),
                overlaps: false,
                touches_a: &[],
                touches_b: &[],
            },
            PairCase {
                a: rect("touching-above", 0, 0, 10, 10),
                b: rect("touching-below", 0, 10, 10, 20),
                overlaps: false,
                touches_a: &[Edge::Bottom],
                touches_b: &[Edge::Top],
            },
            PairCase {
                a: rect("touching-left", 0, 0, 10, 10),
                b: rect("touching-right", 10, 0, 20, 10),
                overlaps: false,
                touches_a: &[Edge::Right],
                touches_b: &[Edge::Left],
            },
            PairCase {
                a: rect("full-overlap", 0, 0, 10, 10),
                b: rect("full-overlap", 0, 0, 10, 10),
                overlaps: true,
                touches_a: ALL,
                touches_b: ALL,
            },
            PairCase {
                a: rect("inside-of", 5, 5, 10, 10),
                b: rect("surrounding", 0, 0, 15, 15),
                overlaps: true,
                touches_a: &[],
                touches_b: &[],
            },
            PairCase {
                a: rect("top-left", 0, 0, 10, 10),
                b: rect("top-left-surrounding", 0, 0, 15, 15),
                overlaps: true,
                touches_a: &[Edge::Top, Edge::Left],
                touches_b: &[Edge::Top, Edge::Left],
            },
            PairCase {
                a: rect("bottom-right", 5, 5, 15, 15),
                b: rect("bottom-right-surrounding", 0, 0, 15, 15),
                overlaps: true,
                touches_a: &[Edge::Right, Edge::Bottom],
                touches_b: &[Edge::Right, Edge::Bottom],
            },
            PairCase {
                a: rect("overlap-above", 0, 0, 10, 10),
                b: rect("overlap-below", 0, 9, 10, 19),
                overlaps: true,
                touches_a: &[Edge::Right, Edge::Left],
                touches_b: &[Edge::Right, Edge::Left],
            },
            PairCase {
                a: rect("overlap-left", 0, 0, 10, 10),
                b: rect("overlap-right", 9, 0, 19, 10),
                overlaps: true,
                touches_a: &[Edge::Top, Edge::Bottom],
                touches_b: &[Edge::Top, Edge::Bottom],
            },
            PairCase {
                a: rect("bottom-right-corner", 0, 0, 10, 10),
                b: rect("top-left-corner", 9, 9, 19, 19),
                overlaps: true,
                touches_a: &[],
                touches_b: &[],
            },
            PairCase {
                a: rect("bottom-left-corner", 9, 0, 19, 10),
                b: rect("top-right-corner", 0, 9, 10, 19),
                overlaps: true,
                touches_a: &[],
                touches_b: &[],
            },
            PairCase {
                a: rect("corner-contact", 0, 0, 10, 10),
                b: rect("corner-contact-diagonal", 10, 10, 20, 20),
                overlaps: false,
                touches_a: &[],
                touches_b: &[],
            },
        ]
    }

    #[test]
    fn test_overlaps_is_symmetric() {
        for case in pair_cases() {
            assert_eq!(case.a.overlaps(&case.b), case.overlaps, "{}", case.a.id);
            assert_eq!(case.b.overlaps(&case.a), case.overlaps, "{}", case.b.id);
        }
    }

    #[test]
    fn test_touches() {
        for case in pair_cases() {
            assert_eq!(case.a.touches(&case.b), case.touches_a, "{}", case.a.id);
            assert_eq!(case.b.touches(&case.a), case.touches_b, "{}", case.b.id);
        }
    }

    #[test]
    fn test_overlaps_self_requires_area() {
        let cases = [
            rect("square", 0, 0, 10, 10),
            rect("line", 0, 0, 10, 0),
            rect("point", 3, 3, 3, 3),
            rect("inverted", 0, 0, -10, -10),
        ];

        for r in cases {
            // Inverted rectangles have area but no interior under the strict test
            let expected = r.area() != 0 && r.x < r.w && r.y < r.z;
            assert_eq!(r.overlaps(&r), expected, "{}", r.id);
        }
    }

    #[test]
    fn test_area() {
        let cases = [
            (rect("zero height", 0, 0, 10, 0), 0),
            (rect("zero width", 0, 0, 0, 10), 0),
            (rect("zero size", 0, 0, 0, 0), 0),
            (rect("positive area", 0, 0, 10, 10), 100),
            (rect("negative area", 0, 0, -10, -10), 100),
        ];

        for (r, expected) in cases {
            assert_eq!(r.area(), expected, "{}", r.id);
        }
    }

    #[test]
    fn test_width_height() {
        let cases = [
            (rect("simple", 0, 0, 10, 10), 10, 10),
            (rect("negative", -20, -20, -10, -10), 10, 10),
            (rect("negative-to-positive", -10, -10, 10, 10), 20, 20),
            (rect("zero-size", 0, 0, 0, 0), 0, 0),
            (rect("wide", 0, 0, 30, 5), 30, 5),
        ];

        for (r, width, height) in cases {
            assert_eq!(r.width(), width, "{}", r.id);
            assert_eq!(r.height(), height, "{}", r.id);
        }
    }

    #[test]
    fn test_validate() {
        let cases = [
            (rect("zero height", 0, 0, 10, 0), Err(GeometryError::ZeroArea)),
            (rect("zero width", 0, 0, 0, 10), Err(GeometryError::ZeroArea)),
            (rect("zero size", 0, 0, 0, 0), Err(GeometryError::ZeroArea)),
            (
                rect("flipped points", 0, 0, -10, -10),
                Err(GeometryError::BadPoints),
            ),
            (rect("flipped x", 10, 0, 0, 10), Err(GeometryError::BadPoints)),
            (rect("valid", 0, 0, 10, 10), Ok(())),
            (rect("valid in negative", -10, -10, 0, 0), Ok(())),
        ];

        for (r, expected) in cases {
            assert_eq!(r.validate(), expected, "{}", r.id);
        }
    }

    #[test]
    fn test_extreme_coordinates() {
        let full = rect("full range", i64::MIN, 0, i64::MAX, 1);
        assert_eq!(full.width(), i64::MAX);
        assert_eq!(full.area(), i64::MAX);
        assert_eq!(full.validate(), Ok(()));

        let inverted = rect("inverted range", i64::MAX, i64::MAX, i64::MIN, i64::MIN);
        assert_eq!((inverted.width(), inverted.height()), (i64::MAX, i64::MAX));
        assert_eq!(inverted.validate(), Err(GeometryError::BadPoints));

        let thin = rect("thin", i64::MIN, 5, i64::MAX, 5);
        assert_eq!(thin.area(), 0);
        assert_eq!(thin.validate(), Err(GeometryError::ZeroArea));

        let edge = rect("edge", i64::MAX - 10, 0, i64::MAX, 10);
        assert_eq!(edge.area(), 100);
        assert_eq!(
            edge.translate(20, -20),
            rect("edge", i64::MAX, -20, i64::MAX, -10)
        );
    }

    #[test]
    fn test_offset_ignores_target_extent() {
        let r = rect("moved", 0, 0, 10, 20);
        let by = rect("anchor", 5, 7, -1000, 1000);

        assert_eq!(r.offset(&by), rect("moved", 5, 7, 15, 27));
        assert_eq!(r.translate(5, 7), r.offset(&by));
        assert_eq!(r.translate(-5, 0), rect("moved", -5, 0, 5, 20));
    }

    #[test]
    fn test_overlapping_area() {
        let one = rect("overlap-1", 0, 0, 10, 10);
        let two = rect("overlap-2", 5, 5, 15, 15);

        assert_eq!(
            one.overlapping_area(&two),
            Some(rect("overlap-2", 5, 5, 10, 10))
        );
        assert_eq!(
            two.overlapping_area(&one),
            Some(rect("overlap-1", 5, 5, 10, 10))
        );

        let diagonal = rect("no-overlap", 10, 10, 20, 20);
        assert_eq!(one.overlapping_area(&diagonal), None);
        assert_eq!(diagonal.overlapping_area(&one), None);
    }

    #[test]
    fn test_overlapping_area_matches_overlaps() {
        for case in pair_cases() {
            let forward = case.a.overlapping_area(&case.b);
            let backward = case.b.overlapping_area(&case.a);

            assert_eq!(forward.is_some(), case.overlaps, "{}", case.a.id);
            if let (Some(forward), Some(backward)) = (forward, backward) {
                assert_eq!(forward.id, case.b.id);
                assert_eq!(backward.id, case.a.id);
                assert_eq!(
                    (forward.x, forward.y, forward.w, forward.z),
                    (backward.x, backward.y, backward.w, backward.z)
                );
            }
        }
    }

    #[test]
    fn test_touch_coordinates() {
        let base = rect("base", 0, 0, 10, 10);

        let above = rect("above", 5, -10, 20, 0);
        assert_eq!(
            base.touch_coordinates(&above, Edge::Top),
            Some(EdgeCoordinates::new("above", 5, 0, 10, 0))
        );

        let right = rect("right", 10, 2, 20, 8);
        assert_eq!(
            base.touch_coordinates(&right, Edge::Right),
            Some(EdgeCoordinates::new("right", 10, 2, 10, 8))
        );

        let below = rect("below", -5, 10, 4, 20);
        assert_eq!(
            base.touch_coordinates(&below, Edge::Bottom),
            Some(EdgeCoordinates::new("below", 0, 10, 4, 10))
        );

        let left = rect("left", -10, 5, 0, 15);
        assert_eq!(
            base.touch_coordinates(&left, Edge::Left),
            Some(EdgeCoordinates::new("left", 0, 5, 0, 10))
        );
    }

    #[test]
    fn test_touch_coordinates_missing_edge() {
        let base = rect("base", 0, 0, 10, 10);
        let below = rect("below", 0, 10, 10, 20);

        assert_eq!(base.touch_coordinates(&below, Edge::Top), None);
        assert_eq!(base.touch_coordinates(&below, Edge::Unknown), None);
        assert!(base.touch_coordinates(&below, Edge::Bottom).is_some());

        let corner = rect("corner", 10, 10, 20, 20);
        for edge in Edge::NAMED {
            assert_eq!(base.touch_coordinates(&corner, edge), None);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let r = Rectangle::new("json".to_string(), -3, 4, 10, 12);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"id":"json","x":-3,"y":4,"w":10,"z":12}"#);

        let back: Rectangle<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
