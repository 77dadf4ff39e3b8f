//! Arena-backed octree with lazy subdivision.
//!
//! Nodes live in a single `Vec` and refer to their children by index,
//! so the tree has no ownership cycles and no back-references. A node is
//! a leaf until a point is routed through it; at that moment all eight
//! children are allocated contiguously.
//!
//! ## Query pruning
//!
//! Radius queries prune subtrees whose box misses the *cube* of
//! half-extent `radius` around the query point. This is coarser than a
//! sphere test and visits some extra nodes, but every stored point is
//! still checked against the true Euclidean distance before it is
//! returned, so results contain no false positives.

use mollis_math::{Aabb, Vec3};
use mollis_types::constants::MIN_OCTREE_DIAGONAL;

/// One node of the octree.
#[derive(Debug, Clone)]
pub struct OctreeNode {
    /// Region covered by this node.
    pub bounds: Aabb,
    /// Depth below the root (root = 0).
    pub depth: u32,
    /// Arena index of the first of eight contiguous children, if subdivided.
    pub first_child: Option<u32>,
    /// Points stored directly in this node (only non-empty for leaves).
    pub points: Vec<(u32, Vec3)>,
}

impl OctreeNode {
    fn new(bounds: Aabb, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            first_child: None,
            points: Vec::new(),
        }
    }

    /// Returns true if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }

    /// Arena indices of the eight children, if subdivided.
    #[inline]
    pub fn children(&self) -> Option<std::ops::Range<usize>> {
        self.first_child.map(|c| c as usize..c as usize + 8)
    }
}

/// Result of inserting a point into the octree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The point was stored in a leaf.
    Stored,
    /// The point lies outside the root bounds and was ignored.
    OutOfBounds,
    /// The point was inside a parent but no child accepted it
    /// (floating-point boundary effect). It was not stored.
    EdgeDropped,
}

/// Octree over a fixed bounding box, storing `(index, position)` pairs.
#[derive(Debug, Clone)]
pub struct Octree {
    nodes: Vec<OctreeNode>,
    max_depth: u32,
    len: usize,
    edge_drops: usize,
}

impl Octree {
    /// Creates an empty octree covering `bounds`.
    pub fn new(bounds: Aabb, max_depth: u32) -> Self {
        Self {
            nodes: vec![OctreeNode::new(bounds, 0)],
            max_depth,
            len: 0,
            edge_drops: 0,
        }
    }

    /// Bounds of the root node.
    pub fn bounds(&self) -> Aabb {
        self.nodes[0].bounds
    }

    /// Maximum subdivision depth.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no point has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes (root included).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of points lost to [`InsertOutcome::EdgeDropped`].
    pub fn edge_drop_count(&self) -> usize {
        self.edge_drops
    }

    /// All nodes in arena order (root first).
    pub fn nodes(&self) -> &[OctreeNode] {
        &self.nodes
    }

    /// Iterates over leaves that hold at least one point.
    pub fn occupied_leaves(&self) -> impl Iterator<Item = &OctreeNode> {
        self.nodes.iter().filter(|n| !n.points.is_empty())
    }

    /// Inserts point `index` at position `p`.
    ///
    /// Descends from the root, subdividing on demand, until it reaches a
    /// node at `max_depth` or one too small to split.
    pub fn insert(&mut self, p: Vec3, index: u32) -> InsertOutcome {
        if !self.nodes[0].bounds.contains(p) {
            return InsertOutcome::OutOfBounds;
        }

        let mut current = 0usize;
        loop {
            let OctreeNode {
                bounds,
                depth,
                first_child,
                ..
            } = self.nodes[current];

            if depth >= self.max_depth || bounds.diagonal_length() < MIN_OCTREE_DIAGONAL {
                self.nodes[current].points.push((index, p));
                self.len += 1;
                return InsertOutcome::Stored;
            }

            let first_child = match first_child {
                Some(c) => c as usize,
                None => self.subdivide(current),
            };

            let child = first_child + bounds.octant_index(p);
            if !self.nodes[child].bounds.contains(p) {
                self.edge_drops += 1;
                tracing::warn!(index, ?p, depth, "octree edge drop");
                return InsertOutcome::EdgeDropped;
            }
            current = child;
        }
    }

    /// Allocates the eight children of `node` and returns the first index.
    fn subdivide(&mut self, node: usize) -> usize {
        let first = self.nodes.len();
        let bounds = self.nodes[node].bounds;
        let depth = self.nodes[node].depth + 1;
        for i in 0..8 {
            self.nodes.push(OctreeNode::new(bounds.octant(i), depth));
        }
        self.nodes[node].first_child = Some(first as u32);
        first
    }

    /// Returns the indices of all stored points within `radius` of `center`.
    ///
    /// Results are in traversal order.
    pub fn query(&self, center: Vec3, radius: f32) -> Vec<u32> {
        let mut results = Vec::new();
        self.query_into(center, radius, &mut results);
        results
    }

    /// Like [`Octree::query`], appending into an existing buffer.
    pub fn query_into(&self, center: Vec3, radius: f32, results: &mut Vec<u32>) {
        let window = Aabb::from_center_half_extent(center, radius);
        let mut stack = vec![0usize];

        while let Some(i) = stack.pop() {
            let node = &self.nodes[i];
            if !node.bounds.intersects(&window) {
                continue;
            }

            results.extend(
                node.points
                    .iter()
                    .filter(|(_, p)| p.distance(center) <= radius)
                    .map(|&(idx, _)| idx),
            );

            if let Some(children) = node.children() {
                // Reverse so children pop in octant order.
                stack.extend(children.rev());
            }
        }
    }
}
