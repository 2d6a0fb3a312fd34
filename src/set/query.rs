use std::cmp::Ordering;

use log::debug;

use super::Set;
use crate::error::GeometryError;
use crate::geometry::{Edge, Rectangle};

impl<Id> Set<Id> {
    /// Children of `target` that this set's bound overlaps.
    ///
    /// The children are compared as stored, without translating them by
    /// `target`'s anchor, and the two bounds are not checked against each
    /// other first.
    pub fn overlaps_children<'a, T>(&self, target: &'a Set<T>) -> Vec<&'a Rectangle<T>> {
        let found: Vec<_> = target
            .children()
            .iter()
            .filter(|child| self.bounds().overlaps(*child))
            .collect();

        debug!(
            "{} of {} children overlapped",
            found.len(),
            target.children().len()
        );
        found
    }

    /// Children of `target` that share an edge with this set's bound
    pub fn touches_children<'a, T>(&self, target: &'a Set<T>) -> Vec<&'a Rectangle<T>> {
        let found: Vec<_> = target
            .children()
            .iter()
            .filter(|child| {
                Edge::NAMED
                    .iter()
                    .any(|&edge| self.bounds().touches_on(*child, edge))
            })
            .collect();

        debug!(
            "{} of {} children touched",
            found.len(),
            target.children().len()
        );
        found
    }

    /// The child closest to `priority`, ties broken by `secondary`.
    ///
    /// Top prefers the smallest `y`, Right the largest `w`, Bottom the
    /// largest `z` and Left the smallest `x`. When both edges tie, the
    /// child added first wins. Returns `Ok(None)` for an empty set.
    pub fn child_on_edge(
        &self,
        priority: Edge,
        secondary: Edge,
    ) -> Result<Option<&Rectangle<Id>>, GeometryError> {
        if !priority.is_named() || !secondary.is_named() {
            return Err(GeometryError::UnknownEdge);
        }

        let mut children = self.children().iter();
        let Some(mut best) = children.next() else {
            return Ok(None);
        };

        for child in children {
            let ordering = closer_to_edge(priority, child, best)
                .then_with(|| closer_to_edge(secondary, child, best));

            if ordering == Ordering::Greater {
                best = child;
            }
        }

        Ok(Some(best))
    }
}

/// `Greater` when `candidate` is closer to `edge` than `best`
fn closer_to_edge<Id>(edge: Edge, candidate: &Rectangle<Id>, best: &Rectangle<Id>) -> Ordering {
    match edge {
        Edge::Top => best.y.cmp(&candidate.y),
        Edge::Right => candidate.w.cmp(&best.w),
        Edge::Bottom => candidate.z.cmp(&best.z),
        Edge::Left => best.x.cmp(&candidate.x),
        // rejected by child_on_edge
        Edge::Unknown => Ordering::Equal,
    }
}
