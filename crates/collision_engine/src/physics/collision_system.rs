//! Core collision detection system
//!
//! Two-phase detection over an [`Octree`]: the tree is the broad phase,
//! [`Polygon::intersects`] the narrow phase. Every polygon is tested against
//! the other polygons of its own node and against the polygons of the
//! descendant nodes its shape actually reaches. A polygon can only be
//! stored in a node whose box fully contains it, so ancestors and unrelated
//! subtrees never need a second look.

use std::collections::BTreeSet;

use crate::foundation::logging::debug;
use crate::physics::collision::Polygon;
use crate::spatial::octree::{NodeId, Octree};

/// Outcome of a detection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Indices of every polygon intersecting at least one other polygon, ascending
    pub indices: BTreeSet<usize>,
    /// Number of narrow-phase tests performed
    pub pair_tests: usize,
}

/// Collision detector walking a built octree
pub struct CollisionDetector<'a> {
    tree: &'a Octree,
    report: CollisionReport,
}

impl<'a> CollisionDetector<'a> {
    /// Create a detector over a built tree
    pub fn new(tree: &'a Octree) -> Self {
        Self {
            tree,
            report: CollisionReport::default(),
        }
    }

    /// Run detection and return the report
    pub fn run(mut self) -> CollisionReport {
        let tree = self.tree;
        let mut stack: Vec<NodeId> = tree.root().into_iter().collect();

        while let Some(id) = stack.pop() {
            let Some(node) = tree.node(id) else {
                continue;
            };

            let polygons = node.polygons();
            for (i, first) in polygons.iter().enumerate() {
                for second in &polygons[i + 1..] {
                    self.test_pair(first, second);
                }
            }

            for polygon in polygons {
                self.test_against_descendants(polygon, id);
            }

            stack.extend(node.children());
        }

        debug!(
            "Collision detection: {} intersecting polygons after {} pair tests",
            self.report.indices.len(),
            self.report.pair_tests
        );
        self.report
    }

    /// Test `polygon` against every polygon stored below `start` in a
    /// subtree whose box the polygon reaches
    fn test_against_descendants(&mut self, polygon: &Polygon, start: NodeId) {
        let tree = self.tree;
        let reached_children = move |id: NodeId| {
            tree.node(id).into_iter().flat_map(move |node| {
                node.children().filter(move |&child| {
                    tree.node(child)
                        .is_some_and(|child| child.bounds().overlaps_polygon(polygon))
                })
            })
        };

        let mut stack: Vec<NodeId> = reached_children(start).collect();
        while let Some(id) = stack.pop() {
            let Some(node) = tree.node(id) else {
                continue;
            };
            for other in node.polygons() {
                self.test_pair(polygon, other);
            }
            stack.extend(reached_children(id));
        }
    }

    fn test_pair(&mut self, first: &Polygon, second: &Polygon) {
        let indices = &mut self.report.indices;
        if indices.contains(&first.index()) && indices.contains(&second.index()) {
            return;
        }

        self.report.pair_tests += 1;
        if first.intersects(second) {
            indices.insert(first.index());
            indices.insert(second.index());
        }
    }
}

/// Run detection over a built tree, returning the detailed report
pub fn detect(tree: &Octree) -> CollisionReport {
    CollisionDetector::new(tree).run()
}

/// Indices of every polygon in the tree that intersects another, ascending
pub fn find_intersecting(tree: &Octree) -> BTreeSet<usize> {
    detect(tree).indices
}

/// Reference detector testing every pair directly, without a tree
pub fn find_intersecting_brute_force(polygons: &[Polygon]) -> BTreeSet<usize> {
    let mut indices = BTreeSet::new();
    for (i, first) in polygons.iter().enumerate() {
        for second in &polygons[i + 1..] {
            if first.intersects(second) {
                indices.insert(first.index());
                indices.insert(second.index());
            }
        }
    }
    debug!("Brute-force detection: {} intersecting polygons", indices.len());
    indices
}
