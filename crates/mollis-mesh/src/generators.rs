//! Procedural mesh generators for tests, benchmarks, and the CLI.
//!
//! These generators produce deterministic, resolution-configurable meshes
//! with consistent outward winding.

use mollis_math::Vec3;

use crate::mesh::TriangleMesh;

/// Triangulation of an axis-aligned box, two triangles per face.
const BOX_TRIANGLES: [[u32; 3]; 12] = [
    [0, 3, 2], [0, 2, 1], // -Z
    [4, 5, 6], [4, 6, 7], // +Z
    [0, 1, 5], [0, 5, 4], // -Y
    [3, 7, 6], [3, 6, 2], // +Y
    [0, 4, 7], [0, 7, 3], // -X
    [1, 2, 6], [1, 6, 5], // +X
];

/// Generates an axis-aligned box centered at the origin.
///
/// Vertex `i` sits at the corner whose X/Y/Z signs follow the usual
/// bottom-ring-then-top-ring layout: 0–3 at `-Z`, 4–7 at `+Z`.
pub fn box_mesh(size: Vec3) -> TriangleMesh {
    let h = size * 0.5;
    let corners = [
        Vec3::new(-h.x, -h.y, -h.z),
        Vec3::new(h.x, -h.y, -h.z),
        Vec3::new(h.x, h.y, -h.z),
        Vec3::new(-h.x, h.y, -h.z),
        Vec3::new(-h.x, -h.y, h.z),
        Vec3::new(h.x, -h.y, h.z),
        Vec3::new(h.x, h.y, h.z),
        Vec3::new(-h.x, h.y, h.z),
    ];

    let mut mesh = TriangleMesh::with_capacity(8, 12);
    for c in corners {
        mesh.push_vertex(c);
    }
    for [a, b, c] in BOX_TRIANGLES {
        mesh.push_triangle(a, b, c);
    }
    mesh
}

/// Generates the unit cube `[-0.5, 0.5]³`: 8 vertices, 12 triangles.
///
/// # Example
/// ```
/// use mollis_mesh::generators::unit_cube;
/// let mesh = unit_cube();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn unit_cube() -> TriangleMesh {
    box_mesh(Vec3::ONE)
}

/// Generates a closed UV sphere centered at the origin.
///
/// Unlike a texture-mapped sphere, the poles are single vertices and the
/// longitude seam is welded, so the surface has no boundary edges.
///
/// # Arguments
/// - `radius`: Sphere radius in meters.
/// - `stacks`: Number of latitude bands (at least 2).
/// - `slices`: Number of longitude segments (at least 3).
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let stacks = stacks.max(2);
    let slices = slices.max(3);
    let ring_count = stacks - 1;
    let vertex_count = 2 + ring_count * slices;
    let tri_count = 2 * slices * ring_count;
    let mut mesh = TriangleMesh::with_capacity(vertex_count, tri_count);

    let north = mesh.push_vertex(Vec3::new(0.0, radius, 0.0));
    for i in 1..stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for j in 0..slices {
            let theta = 2.0 * std::f32::consts::PI * j as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            mesh.push_vertex(Vec3::new(
                radius * sin_phi * cos_theta,
                radius * cos_phi,
                radius * sin_phi * sin_theta,
            ));
        }
    }
    let south = mesh.push_vertex(Vec3::new(0.0, -radius, 0.0));

    let ring = |i: usize, j: usize| (1 + i * slices + j % slices) as u32;

    for j in 0..slices {
        mesh.push_triangle(north, ring(0, j + 1), ring(0, j));
    }
    for i in 0..ring_count - 1 {
        for j in 0..slices {
            let a = ring(i, j);
            let b = ring(i + 1, j);
            let c = ring(i + 1, j + 1);
            let d = ring(i, j + 1);
            mesh.push_triangle(a, d, b);
            mesh.push_triangle(d, c, b);
        }
    }
    for j in 0..slices {
        mesh.push_triangle(ring(ring_count - 1, j), ring(ring_count - 1, j + 1), south);
    }

    mesh
}

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0. Vertex rows run top to bottom.
///
/// # Example
/// ```
/// use mollis_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let mut mesh = TriangleMesh::with_capacity(verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            mesh.push_vertex(Vec3::new(-half_w + u * width, half_h - v * height, 0.0));
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            mesh.push_triangle(top_left, bot_left, top_right);
            mesh.push_triangle(top_right, bot_left, bot_right);
        }
    }

    mesh
}
