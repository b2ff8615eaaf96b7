//! VolumeTree - the recursive occupancy build pass.
//!
//! Depth-first, synchronous, one oracle query per node visited. The worst
//! case (everything occupied) visits `sum_{d=0}^{D} 8^d` nodes; an empty
//! root costs a single query.

use glam::DVec3;

use crate::error::{BuildError, OracleUnavailable};
use crate::oracle::OccupancyOracle;

use super::config::BuildConfig;
use super::leaves::{IdealVolume, LeafDescriptor};
use super::node::{NodeFilter, OctreeNode, OCTANT_SIGNS};

/// An occupancy octree plus the ideal volume accumulated while building it.
///
/// Built in one pass, immutable afterward. A regeneration request builds a
/// fresh `VolumeTree` and the caller swaps it in wholesale; there is no
/// incremental update and no hidden "current tree" state in the crate.
#[derive(Clone, Debug, PartialEq)]
pub struct VolumeTree {
  root: OctreeNode,
  max_depth: u32,
  leaf_size: f64,
  ideal_volume: IdealVolume,
}

impl VolumeTree {
  /// Build the tree for `config` against an occupancy oracle.
  ///
  /// Validates the configuration before the first oracle query, then
  /// recurses depth-first in the fixed octant order. An oracle failure
  /// anywhere aborts the whole build: partial trees are not a meaningful
  /// state and are never returned.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "octree::build")
  )]
  pub fn build<O: OccupancyOracle>(
    config: &BuildConfig,
    oracle: &O,
  ) -> Result<Self, BuildError> {
    let max_depth = config.max_depth()?;

    let mut ideal_volume = IdealVolume::new();
    let root = build_node(
      config.root_center,
      config.root_size,
      0,
      max_depth,
      oracle,
      &mut ideal_volume,
    )?;

    Ok(Self {
      root,
      max_depth,
      leaf_size: config.root_size / f64::from(max_depth).exp2(),
      ideal_volume,
    })
  }

  /// Root node of the tree.
  pub fn root(&self) -> &OctreeNode {
    &self.root
  }

  /// Leaf depth of the tree (`log2(root_size / min_leaf_size)`).
  pub fn max_depth(&self) -> u32 {
    self.max_depth
  }

  /// Edge length of leaf cells (`root_size / 2^max_depth`).
  pub fn leaf_size(&self) -> f64 {
    self.leaf_size
  }

  /// The occupied leaves accumulated during the build, in traversal order.
  pub fn ideal_volume(&self) -> &IdealVolume {
    &self.ideal_volume
  }

  /// Consume the tree, keeping only the ideal volume.
  pub fn into_ideal_volume(self) -> IdealVolume {
    self.ideal_volume
  }

  /// Total number of nodes in the tree.
  pub fn node_count(&self) -> usize {
    let mut count = 0;
    self.root.visit(&mut |_| count += 1);
    count
  }

  /// Collect the nodes matching a diagnostic filter, in traversal order.
  pub fn nodes_matching(&self, filter: NodeFilter) -> Vec<&OctreeNode> {
    let mut nodes = Vec::new();
    collect_matching(&self.root, filter, &mut nodes);
    nodes
  }
}

fn collect_matching<'a>(
  node: &'a OctreeNode,
  filter: NodeFilter,
  out: &mut Vec<&'a OctreeNode>,
) {
  if filter.matches(node) {
    out.push(node);
  }
  if let Some(children) = node.children() {
    for child in children {
      collect_matching(child, filter, out);
    }
  }
}

fn build_node<O: OccupancyOracle>(
  center: DVec3,
  size: f64,
  depth: u32,
  max_depth: u32,
  oracle: &O,
  out: &mut IdealVolume,
) -> Result<OctreeNode, OracleUnavailable> {
  let occupied = oracle.test_cube(center, size * 0.5)?;

  if depth == max_depth {
    if occupied {
      out.push(LeafDescriptor { position: center });
    }
    return Ok(OctreeNode {
      center,
      size,
      depth,
      is_leaf: true,
      occupied,
      children: None,
    });
  }

  if !occupied {
    // Emptiness is trusted for the whole cube; nothing inside it is ever
    // re-tested (requires the oracle's monotonicity contract).
    return Ok(OctreeNode {
      center,
      size,
      depth,
      is_leaf: false,
      occupied: false,
      children: None,
    });
  }

  let child_size = size * 0.5;
  let quarter = size * 0.25;
  let mut children = Vec::with_capacity(8);
  for signs in OCTANT_SIGNS {
    children.push(build_node(
      center + signs * quarter,
      child_size,
      depth + 1,
      max_depth,
      oracle,
      out,
    )?);
  }
  let children: Box<[OctreeNode; 8]> = match children.into_boxed_slice().try_into() {
    Ok(children) => children,
    Err(_) => unreachable!("octant loop yields exactly 8 children"),
  };

  Ok(OctreeNode {
    center,
    size,
    depth,
    is_leaf: false,
    occupied: true,
    children: Some(children),
  })
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
