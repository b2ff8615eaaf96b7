//! LeafDescriptor / IdealVolume - the occupied-leaf output of a build.
//!
//! The ideal volume is owned by the caller and independent of the tree's
//! own lifetime: the tree can be dropped while the leaf list keeps driving
//! occupant materialization.

use glam::DVec3;

/// Record of one occupied maximum-depth cell.
///
/// Emitted exactly when a leaf node is found occupied. Leaf cells are
/// uniform, so only the position is carried; the edge length lives on
/// [`VolumeTree::leaf_size`](crate::VolumeTree::leaf_size).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafDescriptor {
  /// Center of the occupied leaf cell.
  pub position: DVec3,
}

/// The complete set of occupied leaves produced by one build pass.
///
/// Order-preserving: leaves appear in the fixed depth-first octant
/// traversal order, never sorted afterward.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdealVolume {
  leaves: Vec<LeafDescriptor>,
}

impl IdealVolume {
  /// Empty volume.
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn push(&mut self, leaf: LeafDescriptor) {
    self.leaves.push(leaf);
  }

  /// Number of occupied leaves.
  pub fn len(&self) -> usize {
    self.leaves.len()
  }

  /// Check if empty.
  pub fn is_empty(&self) -> bool {
    self.leaves.is_empty()
  }

  /// Iterate over leaves in accumulation order.
  pub fn iter(&self) -> impl Iterator<Item = &LeafDescriptor> {
    self.leaves.iter()
  }

  /// Iterate over leaf positions in accumulation order.
  pub fn positions(&self) -> impl Iterator<Item = DVec3> + '_ {
    self.leaves.iter().map(|leaf| leaf.position)
  }

  /// View the leaves as a slice.
  pub fn as_slice(&self) -> &[LeafDescriptor] {
    &self.leaves
  }
}

impl<'a> IntoIterator for &'a IdealVolume {
  type Item = &'a LeafDescriptor;
  type IntoIter = std::slice::Iter<'a, LeafDescriptor>;

  fn into_iter(self) -> Self::IntoIter {
    self.leaves.iter()
  }
}

#[cfg(test)]
#[path = "leaves_test.rs"]
mod leaves_test;
