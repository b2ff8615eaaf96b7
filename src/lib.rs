//! volume_octree - engine-independent octree spatial-occupancy decomposition
//!
//! This crate turns a cubic region of space plus an injected "is this box
//! occupied by geometry" test into a fixed-depth occupancy octree. Empty
//! subtrees are pruned early with a single query per cube, and the occupied
//! maximum-depth leaves are collected into a flat "ideal volume" that a host
//! can materialize as scene objects.
//!
//! # Features
//!
//! - **Octree Builder**: recursive depth-first subdivision down to a
//!   configured minimum leaf size, one oracle query per node visited
//! - **Ideal Volume**: order-preserving list of occupied leaf positions
//! - **Slice Selector**: full-replacement selection of materialized
//!   occupants overlapping a movable box
//! - **Oracle seam**: occupancy and overlap queries are traits, so any
//!   geometry backend works (collider query, mesh voxelization, SDF
//!   sampling)
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use volume_octree::oracles::SphereOracle;
//! use volume_octree::{BuildConfig, VolumeTree};
//!
//! // 8-unit root cube at the origin, subdivided down to 1-unit leaves.
//! let config = BuildConfig::new(DVec3::ZERO, 8.0, 1.0);
//! let oracle = SphereOracle::new(2.0);
//!
//! let tree = VolumeTree::build(&config, &oracle).unwrap();
//!
//! assert_eq!(tree.max_depth(), 3);
//! assert!(!tree.ideal_volume().is_empty());
//! ```

pub mod bounds;
pub mod error;
pub mod occupant;
pub mod oracle;

// Simple deterministic oracles for testing and debugging
pub mod oracles;

// Octree builder and tree types
pub mod octree;

// Slice selection over materialized occupants
pub mod slice;

// Test utilities
#[cfg(test)]
pub mod test_oracles;

// Re-export commonly used items
pub use bounds::{Aabb3, Cube};
pub use error::{BuildError, OracleUnavailable};
pub use occupant::OccupantId;
pub use oracle::{OccupancyOracle, OverlapOracle};
pub use octree::{BuildConfig, IdealVolume, LeafDescriptor, NodeFilter, OctreeNode, VolumeTree};
pub use slice::{SelectionSet, SliceSelector, SliceTransitions};
