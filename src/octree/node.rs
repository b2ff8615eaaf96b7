//! OctreeNode - owned tree node with diagnostic traversal.
//!
//! Each node exclusively owns its children: either none (leaf, or pruned
//! empty interior) or exactly eight. Nodes are built once by the builder
//! and never mutated afterward.

use glam::DVec3;

use crate::bounds::Cube;

/// Signs of the eight octant center offsets, in the fixed build and
/// traversal order: +x halves before -x, +y before -y, +z before -z.
///
/// Child center = parent center + sign * parent_size / 4.
pub(crate) const OCTANT_SIGNS: [DVec3; 8] = [
  DVec3::new(1.0, 1.0, 1.0),
  DVec3::new(1.0, 1.0, -1.0),
  DVec3::new(1.0, -1.0, 1.0),
  DVec3::new(1.0, -1.0, -1.0),
  DVec3::new(-1.0, 1.0, 1.0),
  DVec3::new(-1.0, 1.0, -1.0),
  DVec3::new(-1.0, -1.0, 1.0),
  DVec3::new(-1.0, -1.0, -1.0),
];

/// One cube in the subdivision hierarchy.
///
/// Invariants, upheld by the builder:
/// - a node has exactly 0 or exactly 8 children
/// - children are present iff the node is occupied and not a leaf
/// - every node at the tree's maximum depth is a leaf
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeNode {
  pub(crate) center: DVec3,
  pub(crate) size: f64,
  pub(crate) depth: u32,
  pub(crate) is_leaf: bool,
  pub(crate) occupied: bool,
  pub(crate) children: Option<Box<[OctreeNode; 8]>>,
}

impl OctreeNode {
  /// Center of this node's cube in world space.
  #[inline]
  pub fn center(&self) -> DVec3 {
    self.center
  }

  /// Full edge length of this node's cube.
  #[inline]
  pub fn size(&self) -> f64 {
    self.size
  }

  /// Distance from the root (root = 0).
  #[inline]
  pub fn depth(&self) -> u32 {
    self.depth
  }

  /// True iff this node sits at the tree's maximum depth.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.is_leaf
  }

  /// True iff the oracle reported geometry intersecting this node's cube.
  /// Computed once at construction; this is the polled-boolean form of the
  /// occupied/unoccupied visualization hook.
  #[inline]
  pub fn occupied(&self) -> bool {
    self.occupied
  }

  /// True iff this node was expanded into eight children.
  #[inline]
  pub fn has_children(&self) -> bool {
    self.children.is_some()
  }

  /// The eight children, if this node was expanded.
  #[inline]
  pub fn children(&self) -> Option<&[OctreeNode; 8]> {
    self.children.as_deref()
  }

  /// This node's cube.
  #[inline]
  pub fn cube(&self) -> Cube {
    Cube::from_center_size(self.center, self.size)
  }

  /// Pre-order depth-first traversal in the fixed octant order.
  pub fn visit<F: FnMut(&OctreeNode)>(&self, f: &mut F) {
    f(self);
    if let Some(children) = &self.children {
      for child in children.iter() {
        child.visit(f);
      }
    }
  }
}

/// Node filter for diagnostic traversal.
///
/// The original tool drew wireframes for these three subsets; the drawing
/// is a host concern, the filtered walk is kept here for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeFilter {
  /// Every node of the tree.
  All,
  /// Only maximum-depth nodes, occupied or not.
  Leaves,
  /// Only occupied maximum-depth nodes (the cells of the ideal volume).
  IdealVolume,
}

impl NodeFilter {
  /// Whether a node belongs to the filtered subset.
  pub fn matches(&self, node: &OctreeNode) -> bool {
    match self {
      NodeFilter::All => true,
      NodeFilter::Leaves => node.is_leaf,
      NodeFilter::IdealVolume => node.is_leaf && node.occupied,
    }
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
