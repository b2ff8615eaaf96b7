use glam::DVec3;

use super::*;
use crate::error::BuildError;
use crate::oracles::{ConstantOracle, PointOracle, SphereOracle};
use crate::test_oracles::{CountingOracle, FailingOracle, RecordingOracle};

fn config(root_size: f64, min_leaf_size: f64) -> BuildConfig {
  BuildConfig::new(DVec3::ZERO, root_size, min_leaf_size)
}

/// An empty root terminates immediately: one node, one query, no leaves.
#[test]
fn test_empty_root_is_terminal() {
  let oracle = CountingOracle::new(ConstantOracle::all_empty());
  let tree = VolumeTree::build(&config(16.0, 1.0), &oracle).unwrap();

  assert_eq!(tree.max_depth(), 4);
  assert!(!tree.root().occupied());
  assert!(!tree.root().has_children());
  assert!(tree.ideal_volume().is_empty());
  assert_eq!(tree.node_count(), 1);
  assert_eq!(oracle.count(), 1, "empty root costs exactly one query");
}

/// Full occupancy visits every node down to max depth, one query each.
#[test]
fn test_full_occupancy_counts() {
  let oracle = CountingOracle::new(ConstantOracle::all_occupied());
  let tree = VolumeTree::build(&config(8.0, 1.0), &oracle).unwrap();

  assert_eq!(tree.max_depth(), 3);
  // sum of 8^d for d = 0..=3
  let expected_nodes = 1 + 8 + 64 + 512;
  assert_eq!(tree.node_count(), expected_nodes);
  assert_eq!(oracle.count(), expected_nodes, "one query per node visited");
  assert_eq!(tree.ideal_volume().len(), 512);
  assert_eq!(tree.leaf_size(), 1.0);
}

/// Leaves accumulate in the fixed depth-first octant order, unsorted.
#[test]
fn test_leaf_accumulation_order() {
  let tree = VolumeTree::build(&config(2.0, 1.0), &ConstantOracle::all_occupied()).unwrap();

  let expected: Vec<DVec3> = [
    (1.0, 1.0, 1.0),
    (1.0, 1.0, -1.0),
    (1.0, -1.0, 1.0),
    (1.0, -1.0, -1.0),
    (-1.0, 1.0, 1.0),
    (-1.0, 1.0, -1.0),
    (-1.0, -1.0, 1.0),
    (-1.0, -1.0, -1.0),
  ]
  .iter()
  .map(|(x, y, z)| DVec3::new(*x, *y, *z) * 0.5)
  .collect();

  let actual: Vec<DVec3> = tree.ideal_volume().positions().collect();
  assert_eq!(actual, expected, "octant order must be fixed");
}

/// A point strictly inside one leaf cell produces a single branch: one
/// occupied node per depth and exactly one leaf descriptor.
#[test]
fn test_single_point_single_branch() {
  let oracle = CountingOracle::new(PointOracle::single(DVec3::splat(0.5)));
  let tree = VolumeTree::build(&config(8.0, 1.0), &oracle).unwrap();

  assert_eq!(tree.max_depth(), 3);
  let positions: Vec<DVec3> = tree.ideal_volume().positions().collect();
  assert_eq!(positions, vec![DVec3::splat(0.5)]);

  let mut occupied = 0;
  tree.root().visit(&mut |node| {
    if node.occupied() {
      occupied += 1;
    }
  });
  assert_eq!(occupied, 4, "one occupied node per depth 0..=3");

  // root + 3 levels of 8 children along the single expanded branch
  assert_eq!(tree.node_count(), 1 + 8 + 8 + 8);
  assert_eq!(oracle.count(), 1 + 8 + 8 + 8);

  // 7 of the root's children are unexpanded and unoccupied
  let children = tree.root().children().expect("root must expand");
  let pruned = children
    .iter()
    .filter(|c| !c.occupied() && !c.has_children())
    .count();
  assert_eq!(pruned, 7);
}

/// No query is ever issued inside a cube reported empty: emptiness of an
/// interior cube is trusted wholesale.
#[test]
fn test_empty_interior_never_reprobed() {
  // Sphere well inside the +x+y+z octant; the -x-y-z octant stays empty.
  let sphere = SphereOracle::new(1.0).with_center(DVec3::splat(2.0));
  let oracle = RecordingOracle::new(sphere);
  VolumeTree::build(&config(8.0, 1.0), &oracle).unwrap();

  // Strictly inside the -x-y-z octant (-4, 0)^3. The closed-boundary
  // Aabb3 test would also catch the root query at the shared (0,0,0)
  // corner, which is a legitimate probe of a different cube.
  let probes_inside = oracle
    .queries()
    .iter()
    .filter(|(center, _)| center.max_element() < 0.0)
    .count();
  assert_eq!(
    probes_inside, 1,
    "only the empty octant itself may be probed, never its interior"
  );
}

/// Structural invariants hold for every node of a mixed-occupancy tree.
#[test]
fn test_tree_invariants() {
  let oracle = SphereOracle::new(2.5).with_center(DVec3::new(0.6, 0.2, -0.4));
  let tree = VolumeTree::build(&config(8.0, 0.5), &oracle).unwrap();
  let max_depth = tree.max_depth();
  assert_eq!(max_depth, 4);

  tree.root().visit(&mut |node| {
    // hasChildren implies occupied
    if node.has_children() {
      assert!(node.occupied(), "expanded node must be occupied");
    }
    // leaf iff at max depth
    assert_eq!(node.is_leaf(), node.depth() == max_depth);
    if node.is_leaf() {
      assert!(!node.has_children(), "leaves are never expanded");
      assert_eq!(node.size(), tree.leaf_size());
    }
    // the 8 children exactly tile the parent cube
    if let Some(children) = node.children() {
      for (i, child) in children.iter().enumerate() {
        assert_eq!(child.size(), node.size() * 0.5, "child {i} size");
        assert_eq!(child.depth(), node.depth() + 1, "child {i} depth");
        let offset = (child.center() - node.center()) / (node.size() * 0.25);
        assert_eq!(offset, crate::octree::node::OCTANT_SIGNS[i], "child {i} offset");
      }
    }
  });
}

/// Leaf-list cardinality equals the occupied max-depth node count, and the
/// diagnostic filter walks them in the same order.
#[test]
fn test_ideal_volume_matches_filtered_nodes() {
  let oracle = SphereOracle::new(3.0);
  let tree = VolumeTree::build(&config(8.0, 1.0), &oracle).unwrap();
  assert!(!tree.ideal_volume().is_empty());

  let ideal_nodes = tree.nodes_matching(NodeFilter::IdealVolume);
  assert_eq!(ideal_nodes.len(), tree.ideal_volume().len());
  for (node, leaf) in ideal_nodes.iter().zip(tree.ideal_volume().iter()) {
    assert_eq!(node.center(), leaf.position);
  }

  let leaves = tree.nodes_matching(NodeFilter::Leaves);
  assert!(leaves.len() >= ideal_nodes.len());
  assert!(leaves.iter().all(|n| n.is_leaf()));

  assert_eq!(tree.nodes_matching(NodeFilter::All).len(), tree.node_count());
}

/// Rebuilding against identical oracle answers yields a structurally
/// identical tree and an identical, order-preserving leaf list.
#[test]
fn test_rebuild_is_idempotent() {
  let oracle = SphereOracle::new(2.5).with_center(DVec3::new(0.6, 0.2, -0.4));
  let config = config(8.0, 0.5);

  let first = VolumeTree::build(&config, &oracle).unwrap();
  let second = VolumeTree::build(&config, &oracle).unwrap();

  assert_eq!(first, second);
  assert_eq!(first.ideal_volume(), second.ideal_volume());
}

/// A minimum leaf size at or above the root size yields a single-node tree
/// whose root is itself the leaf.
#[test]
fn test_single_node_tree() {
  let center = DVec3::new(1.0, 2.0, 3.0);
  let config = BuildConfig::new(center, 4.0, 6.0);
  let oracle = CountingOracle::new(ConstantOracle::all_occupied());
  let tree = VolumeTree::build(&config, &oracle).unwrap();

  assert_eq!(tree.max_depth(), 0);
  assert!(tree.root().is_leaf());
  assert!(!tree.root().has_children());
  assert_eq!(tree.node_count(), 1);
  assert_eq!(oracle.count(), 1);
  assert_eq!(tree.leaf_size(), 4.0);

  let positions: Vec<DVec3> = tree.ideal_volume().positions().collect();
  assert_eq!(positions, vec![center]);
}

/// An oracle failure mid-build aborts the whole build.
#[test]
fn test_oracle_failure_aborts_build() {
  let oracle = FailingOracle::new(ConstantOracle::all_occupied(), 10);
  let result = VolumeTree::build(&config(8.0, 1.0), &oracle);
  assert!(matches!(result, Err(BuildError::Oracle(_))));
}

/// Configuration errors surface before the oracle is ever consulted.
#[test]
fn test_config_error_precedes_queries() {
  let oracle = CountingOracle::new(ConstantOracle::all_occupied());
  let result = VolumeTree::build(&config(10.0, 1.0), &oracle);
  assert!(matches!(
    result,
    Err(BuildError::NonPowerOfTwoRatio { .. })
  ));
  assert_eq!(oracle.count(), 0, "no query before validation passes");
}

/// into_ideal_volume hands the leaf list to the caller independent of the
/// tree's lifetime.
#[test]
fn test_into_ideal_volume() {
  let tree = VolumeTree::build(&config(4.0, 1.0), &ConstantOracle::all_occupied()).unwrap();
  let expected_len = tree.ideal_volume().len();
  let volume = tree.into_ideal_volume();
  assert_eq!(volume.len(), expected_len);
}
