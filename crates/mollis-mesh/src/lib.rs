//! # mollis-mesh
//!
//! Read-only triangle mesh input with Structure-of-Arrays (SoA) layout,
//! plus the geometric queries the soft-body builder needs from it.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`]: Vertex positions and flat triangle indices.
//! - [`Topology`]: Canonical edge → triangle adjacency, interior edges
//!   with their opposite ("wing") vertices.
//! - [`InsideTester`]: Six-ray parity classifier for interior sampling.
//! - Procedural generators (cube, box, UV sphere, quad grid).

pub mod generators;
pub mod inside;
pub mod mesh;
pub mod topology;

pub use inside::InsideTester;
pub use mesh::TriangleMesh;
pub use topology::Topology;
