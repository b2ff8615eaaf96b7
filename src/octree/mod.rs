//! Octree spatial-occupancy decomposition.
//!
//! A root cube is recursively split into eight octants down to a configured
//! minimum leaf size. Each node costs exactly one occupancy-oracle query:
//! interior cubes reported empty are never subdivided (early pruning), and
//! occupied maximum-depth leaves are accumulated into the ideal volume.
//!
//! The whole tree is built in one recursive pass and is immutable
//! afterward. Regeneration builds a fresh tree; nothing is patched in
//! place, and no module-level state survives between builds.
//!
//! # Module Structure
//!
//! - [`config`]: `BuildConfig` - root cube, leaf size, depth math
//! - [`node`]: `OctreeNode` - owned tree node, diagnostic traversal
//! - [`builder`]: `VolumeTree` - the recursive build pass
//! - [`leaves`]: `LeafDescriptor` / `IdealVolume` - occupied leaf output

pub mod builder;
pub mod config;
pub mod leaves;
pub mod node;

// Re-exports
pub use builder::VolumeTree;
pub use config::BuildConfig;
pub use leaves::{IdealVolume, LeafDescriptor};
pub use node::{NodeFilter, OctreeNode};
