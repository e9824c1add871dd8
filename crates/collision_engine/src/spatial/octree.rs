//! Octree spatial partitioning structure
//!
//! Recursively divides a root box into eight octants, pushing each polygon
//! down into the deepest child that fully contains it. A polygon straddling
//! an octant boundary stays in the node where it first failed to fit, so
//! every polygon is stored exactly once.
//!
//! Nodes live in a [`SlotMap`] arena and refer to their children by
//! [`NodeId`]; construction is iterative, so depth is bounded only by
//! [`OctreeConfig::max_depth`].

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use crate::foundation::logging::{debug, trace};
use crate::physics::collision::Polygon;

use super::aabb::AABB;

new_key_type! {
    /// Handle to a node in an [`Octree`]
    pub struct NodeId;
}

/// Number of children per node
pub const OCTANTS: usize = 8;

/// Configuration for octree construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctreeConfig {
    /// Nodes holding fewer polygons than this are not subdivided.
    /// Values below 2 behave as 2.
    pub min_leaf_size: usize,

    /// Maximum subdivision depth (root = 0)
    pub max_depth: u32,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            min_leaf_size: 50,
            max_depth: 32,
        }
    }
}

impl OctreeConfig {
    /// Config with the given leaf threshold and the default depth limit
    pub fn with_min_leaf_size(min_leaf_size: usize) -> Self {
        Self {
            min_leaf_size,
            ..Self::default()
        }
    }

    fn split_threshold(&self) -> usize {
        self.min_leaf_size.max(2)
    }
}

/// Single node in the octree hierarchy
#[derive(Debug, Clone)]
pub struct OctreeNode {
    bounds: AABB,
    polygons: Vec<Polygon>,
    children: [Option<NodeId>; OCTANTS],
    depth: u32,
    is_leaf: bool,
}

impl OctreeNode {
    fn new(bounds: AABB, polygons: Vec<Polygon>, depth: u32) -> Self {
        Self {
            bounds,
            polygons,
            children: [None; OCTANTS],
            depth,
            is_leaf: true,
        }
    }

    /// Space covered by this node
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    /// Polygons held directly by this node
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Child in the given octant, if it was created
    pub fn child(&self, octant: usize) -> Option<NodeId> {
        self.children.get(octant).copied().flatten()
    }

    /// True if the child in the given octant exists
    pub fn is_child_valid(&self, octant: usize) -> bool {
        self.child(octant).is_some()
    }

    /// Existing children in octant order
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().flatten().copied()
    }

    /// Depth in the tree (0 = root)
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// True if no polygon was pushed below this node
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }
}

/// Shape summary of a built octree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OctreeStats {
    /// Polygons stored across all nodes
    pub polygons: usize,
    /// Nodes allocated
    pub nodes: usize,
    /// Nodes flagged as leaves
    pub leaves: usize,
    /// Deepest node depth
    pub max_depth: u32,
}

impl std::fmt::Display for OctreeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} polygons in {} nodes ({} leaves), depth {}",
            self.polygons, self.nodes, self.leaves, self.max_depth
        )
    }
}

/// Octree over a fixed set of polygons
#[derive(Debug, Clone, Default)]
pub struct Octree {
    nodes: SlotMap<NodeId, OctreeNode>,
    root: Option<NodeId>,
    config: OctreeConfig,
}

impl Octree {
    /// Build an octree over `polygons` inside `bounds`.
    ///
    /// An empty polygon list gives a tree with no root. Polygons that are
    /// not strictly inside `bounds` stay in the root.
    pub fn build(polygons: Vec<Polygon>, bounds: AABB, config: &OctreeConfig) -> Self {
        let mut tree = Self {
            nodes: SlotMap::with_key(),
            root: None,
            config: config.clone(),
        };

        if polygons.is_empty() {
            debug!("Octree build skipped: no polygons");
            return tree;
        }

        let root = tree.nodes.insert(OctreeNode::new(bounds, polygons, 0));
        tree.root = Some(root);
        tree.subdivide(root);

        debug!("Octree built: {}", tree.stats());
        tree
    }

    fn subdivide(&mut self, root: NodeId) {
        let threshold = self.config.split_threshold();
        let max_depth = self.config.max_depth;
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get_mut(id) else {
                continue;
            };

            if node.polygons.len() < threshold || node.depth >= max_depth {
                node.is_leaf = true;
                continue;
            }

            let bounds = node.bounds;
            let depth = node.depth;
            let polygons = std::mem::take(&mut node.polygons);
            let total = polygons.len();

            let octants: [AABB; OCTANTS] = std::array::from_fn(|octant| bounds.octant(octant));
            let mut buckets: [Vec<Polygon>; OCTANTS] = Default::default();
            let mut retained = Vec::new();

            for polygon in polygons {
                match octants.iter().position(|child| child.contains_polygon(&polygon)) {
                    Some(octant) => buckets[octant].push(polygon),
                    None => retained.push(polygon),
                }
            }

            let is_leaf = retained.len() == total;
            let mut children = [None; OCTANTS];
            for (octant, bucket) in buckets.into_iter().enumerate() {
                if bucket.is_empty() {
                    continue;
                }
                let child = self.nodes.insert(OctreeNode::new(octants[octant], bucket, depth + 1));
                children[octant] = Some(child);
                stack.push(child);
            }

            trace!(
                "Split node at depth {}: {} retained, {} pushed down",
                depth,
                retained.len(),
                total - retained.len()
            );

            if let Some(node) = self.nodes.get_mut(id) {
                node.polygons = retained;
                node.children = children;
                node.is_leaf = is_leaf;
            }
        }
    }

    /// Root node, `None` for an empty tree
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> Option<&OctreeNode> {
        self.nodes.get(id)
    }

    /// Configuration the tree was built with
    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// True if the tree holds no polygons
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total polygon count
    pub fn len(&self) -> usize {
        self.nodes.values().map(|node| node.polygons.len()).sum()
    }

    /// Number of allocated nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf nodes
    pub fn leaf_count(&self) -> usize {
        self.nodes.values().filter(|node| node.is_leaf).count()
    }

    /// Depth of the deepest node
    pub fn max_depth(&self) -> u32 {
        self.nodes.values().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Nodes at a given depth, in traversal order
    pub fn nodes_at_depth(&self, depth: u32) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.depth == depth)
            .map(|(id, _)| id)
            .collect()
    }

    /// Depth-first traversal from the root
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Shape summary
    pub fn stats(&self) -> OctreeStats {
        OctreeStats {
            polygons: self.len(),
            nodes: self.node_count(),
            leaves: self.leaf_count(),
            max_depth: self.max_depth(),
        }
    }
}

/// Depth-first iterator over the nodes of an [`Octree`]
pub struct DepthFirst<'a> {
    tree: &'a Octree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (NodeId, &'a OctreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.nodes.get(id)?;
        self.stack.extend(node.children.iter().rev().flatten().copied());
        Some((id, node))
    }
}

/// Build an octree with the given leaf threshold and the default depth limit
pub fn build_octree(polygons: Vec<Polygon>, root_box: AABB, min_leaf_size: usize) -> Octree {
    Octree::build(polygons, root_box, &OctreeConfig::with_min_leaf_size(min_leaf_size))
}
