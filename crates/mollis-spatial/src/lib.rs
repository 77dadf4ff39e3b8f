//! # mollis-spatial
//!
//! Spatial acceleration for proximity queries during soft-body construction.
//!
//! The [`Octree`] partitions a fixed bounding box into nested octants.
//! Points are inserted once during the build phase; afterwards the tree
//! is read-only and answers radius queries for the interior connector.

pub mod octree;

pub use octree::{InsertOutcome, Octree, OctreeNode};
