use anyhow::Result;
use log::{debug, info};

use super::{
    EdgeChoice, OverlapMatch, OverlapPair, Query, Report, SetSummary, TouchMatch, TouchPair,
};
use crate::geometry::Edge;
use crate::set::Set;

/// Configuration for running a query over loaded sets
pub struct ReportBuilder {
    pub query: Query,
    pub priority: Edge,
    pub secondary: Edge,
}

impl ReportBuilder {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            priority: Edge::Top,
            secondary: Edge::Left,
        }
    }

    pub fn priority(mut self, priority: Edge) -> Self {
        self.priority = priority;
        self
    }

    pub fn secondary(mut self, secondary: Edge) -> Self {
        self.secondary = secondary;
        self
    }

    /// Run the query over `sets`
    pub fn build(&self, sets: &[Set<String>]) -> Result<Report> {
        let report = match self.query {
            Query::Check => Report::Check {
                sets: sets.iter().map(summarize).collect(),
            },
            Query::Overlaps => Report::Overlaps {
                pairs: overlap_pairs(sets),
            },
            Query::Touches => Report::Touches {
                pairs: touch_pairs(sets),
            },
            Query::Edge => Report::Edge {
                priority: self.priority,
                secondary: self.secondary,
                sets: self.edge_choices(sets)?,
            },
        };

        info!("Ran {:?} query over {} sets", self.query, sets.len());

        Ok(report)
    }

    fn edge_choices(&self, sets: &[Set<String>]) -> Result<Vec<EdgeChoice>> {
        sets.iter()
            .map(|set| {
                let child = set
                    .child_on_edge(self.priority, self.secondary)?
                    .map(|child| child.offset(set.bounds()));

                Ok(EdgeChoice {
                    set: set.id().clone(),
                    child,
                })
            })
            .collect()
    }
}

fn summarize(set: &Set<String>) -> SetSummary {
    SetSummary {
        id: set.id().clone(),
        bounds: set.bounds().clone(),
        area: set.area(),
        children: set.len(),
    }
}

/// Every ordered pair of distinct sets, by position in `sets`
fn ordered_pairs(sets: &[Set<String>]) -> impl Iterator<Item = (&Set<String>, &Set<String>)> {
    sets.iter().enumerate().flat_map(move |(i, receiver)| {
        sets.iter()
            .enumerate()
            .filter(move |&(j, _)| j != i)
            .map(move |(_, target)| (receiver, target))
    })
}

fn overlap_pairs(sets: &[Set<String>]) -> Vec<OverlapPair> {
    ordered_pairs(sets)
        .filter_map(|(receiver, target)| {
            let children: Vec<_> = receiver
                .overlaps_children(target)
                .into_iter()
                .filter_map(|child| {
                    receiver
                        .bounds()
                        .overlapping_area(child)
                        .map(|region| OverlapMatch {
                            id: child.id.clone(),
                            region,
                        })
                })
                .collect();

            if children.is_empty() {
                return None;
            }

            debug!(
                "{} overlaps {} children of {}",
                receiver.id(),
                children.len(),
                target.id()
            );

            Some(OverlapPair {
                receiver: receiver.id().clone(),
                target: target.id().clone(),
                children,
            })
        })
        .collect()
}

fn touch_pairs(sets: &[Set<String>]) -> Vec<TouchPair> {
    ordered_pairs(sets)
        .filter_map(|(receiver, target)| {
            let bounds = receiver.bounds();
            let children: Vec<_> = receiver
                .touches_children(target)
                .into_iter()
                .map(|child| {
                    let edges = bounds.touches(child);
                    let segments = edges
                        .iter()
                        .filter_map(|&edge| bounds.touch_coordinates(child, edge))
                        .collect();

                    TouchMatch {
                        id: child.id.clone(),
                        edges,
                        segments,
                    }
                })
                .collect();

            if children.is_empty() {
                return None;
            }

            debug!(
                "{} touches {} children of {}",
                receiver.id(),
                children.len(),
                target.id()
            );

            Some(TouchPair {
                receiver: receiver.id().clone(),
                target: target.id().clone(),
                children,
            })
        })
        .collect()
}
