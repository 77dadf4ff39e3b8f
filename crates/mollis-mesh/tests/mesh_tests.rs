//! Integration tests for mollis-mesh.

use mollis_math::{Mat4, Vec3};
use mollis_mesh::generators::{box_mesh, quad_grid, unit_cube, uv_sphere};
use mollis_mesh::topology::Topology;
use mollis_mesh::{InsideTester, TriangleMesh};

// ─── TriangleMesh Tests ───────────────────────────────────────

fn make_single_triangle() -> TriangleMesh {
    TriangleMesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 1.0],
        pos_z: vec![0.0, 0.0, 0.0],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
    assert_eq!(mesh.position_vec3(2), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn world_position_applies_transform() {
    let mesh = make_single_triangle();
    let t = Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(mesh.world_position(1, &t), Vec3::new(1.0, 2.0, 0.0));
}

#[test]
fn validate_ok() {
    assert!(make_single_triangle().validate().is_ok());
}

#[test]
fn validate_rejects_empty_vertices() {
    let mesh = TriangleMesh::default();
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_rejects_empty_triangles() {
    let mut mesh = make_single_triangle();
    mesh.indices.clear();
    let err = mesh.validate().unwrap_err();
    assert!(err.to_string().contains("no triangles"));
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_degenerate() {
    let mut mesh = make_single_triangle();
    mesh.indices = vec![0, 0, 1];
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_non_finite_vertex() {
    let mut mesh = make_single_triangle();
    mesh.pos_z[1] = f32::NAN;
    assert!(mesh.validate().is_err());
}

#[test]
fn from_interleaved() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let mesh = TriangleMesh::from_interleaved(&positions, &[0, 1, 2]).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.pos_x, vec![0.0, 1.0, 0.0]);
}

#[test]
fn from_vertices_rejects_empty() {
    assert!(TriangleMesh::from_vertices(&[], &[]).is_err());
}

#[test]
fn mesh_serialization() {
    let mesh = unit_cube();
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.indices, mesh.indices);
    assert_eq!(recovered.pos_x, mesh.pos_x);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn unit_cube_counts() {
    let mesh = unit_cube();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.validate().is_ok());
    for i in 0..8 {
        let p = mesh.position_vec3(i);
        assert!((p.abs() - Vec3::splat(0.5)).abs().max_element() < 1e-6);
    }
}

#[test]
fn box_mesh_extent() {
    let mesh = box_mesh(Vec3::new(2.0, 1.0, 4.0));
    assert_eq!(mesh.position_vec3(6), Vec3::new(1.0, 0.5, 2.0));
    assert_eq!(mesh.position_vec3(0), Vec3::new(-1.0, -0.5, -2.0));
}

#[test]
fn quad_grid_2x2() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_dimensions() {
    let mesh = quad_grid(4, 4, 2.0, 2.0);
    assert!((mesh.pos_x[0] - (-1.0)).abs() < 1e-6);
    assert!((mesh.pos_y[0] - 1.0).abs() < 1e-6);
    assert!((mesh.pos_x[4] - 1.0).abs() < 1e-6);
}

#[test]
fn uv_sphere_counts() {
    let mesh = uv_sphere(1.0, 8, 16);
    assert_eq!(mesh.vertex_count(), 2 + 7 * 16);
    assert_eq!(mesh.triangle_count(), 2 * 16 * 7);
    assert!(mesh.validate().is_ok());
}

#[test]
fn uv_sphere_radius() {
    let mesh = uv_sphere(2.5, 8, 16);
    for i in 0..mesh.vertex_count() {
        let dist = mesh.position_vec3(i).length();
        assert!((dist - 2.5).abs() < 1e-4, "Vertex {} at distance {}", i, dist);
    }
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn topology_single_quad() {
    let mesh = quad_grid(1, 1, 1.0, 1.0);
    let topo = Topology::build(&mesh);
    assert_eq!(topo.edges.len(), 5);
    assert_eq!(topo.interior_edges.len(), 1);
    assert_eq!(topo.boundary_edge_count(), 4);
    assert!(!topo.is_closed());

    let ie = topo.interior_edges[0];
    assert_eq!((ie.v0, ie.v1), (1, 2));
    assert_eq!((ie.wing_a, ie.wing_b), (0, 3));
}

#[test]
fn topology_edges_are_canonical_and_sorted() {
    let mesh = unit_cube();
    let topo = Topology::build(&mesh);
    assert!(topo.edges.iter().all(|[a, b]| a < b));
    assert!(topo.edges.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn cube_is_closed_manifold() {
    let topo = Topology::build(&unit_cube());
    assert_eq!(topo.edges.len(), 18);
    assert_eq!(topo.interior_edges.len(), 18);
    assert!(topo.is_closed());
    assert_eq!(topo.non_manifold_edge_count(), 0);
}

#[test]
fn sphere_is_closed() {
    let mesh = uv_sphere(1.0, 8, 16);
    let topo = Topology::build(&mesh);
    assert!(topo.is_closed(), "Welded UV sphere should have no boundary");
    // Euler characteristic of a sphere: V - E + F = 2
    let v = mesh.vertex_count() as i64;
    let e = topo.edges.len() as i64;
    let f = mesh.triangle_count() as i64;
    assert_eq!(v - e + f, 2);
}

#[test]
fn non_manifold_edge_is_not_interior() {
    // Three triangles fanning around edge (0, 1)
    let verts = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.5, 1.0, 0.0),
        Vec3::new(0.5, -1.0, 0.0),
        Vec3::new(0.5, 0.0, 1.0),
    ];
    let mesh = TriangleMesh::from_vertices(&verts, &[[0, 1, 2], [1, 0, 3], [0, 1, 4]]).unwrap();
    let topo = Topology::build(&mesh);
    assert_eq!(topo.non_manifold_edge_count(), 1);
    assert!(topo
        .interior_edges
        .iter()
        .all(|ie| (ie.v0, ie.v1) != (0, 1)));
}

#[test]
fn interior_edges_have_wings() {
    let mesh = quad_grid(3, 3, 1.0, 1.0);
    let topo = Topology::build(&mesh);
    for ie in &topo.interior_edges {
        assert_ne!(ie.wing_a, ie.v0);
        assert_ne!(ie.wing_a, ie.v1);
        assert_ne!(ie.wing_b, ie.v0);
        assert_ne!(ie.wing_b, ie.v1);
        assert_ne!(ie.wing_a, ie.wing_b);
    }
}

// ─── Inside Tests ─────────────────────────────────────────────

#[test]
fn cube_classifies_interior_point() {
    let tester = InsideTester::new(&unit_cube(), Mat4::IDENTITY).unwrap();
    assert!(tester.is_inside(Vec3::new(0.1, 0.2, 0.3)));
    assert_eq!(tester.inside_votes(Vec3::new(0.1, -0.2, 0.3)), 6);
}

#[test]
fn cube_classifies_exterior_points() {
    let tester = InsideTester::new(&unit_cube(), Mat4::IDENTITY).unwrap();
    assert!(!tester.is_inside(Vec3::new(0.9, 0.2, 0.3)));
    assert!(!tester.is_inside(Vec3::new(2.0, 2.0, 2.0)));
    assert!(!tester.is_inside(Vec3::new(-0.1, -0.7, 0.3)));
}

#[test]
fn ray_crossings_through_cube() {
    let tester = InsideTester::new(&unit_cube(), Mat4::IDENTITY).unwrap();
    // From outside, through both +X/-X faces
    assert_eq!(tester.crossing_count(Vec3::new(-2.0, 0.1, 0.3), Vec3::X), 2);
    // From inside, exits once
    assert_eq!(tester.crossing_count(Vec3::new(0.1, 0.2, 0.3), Vec3::X), 1);
}

#[test]
fn inside_respects_world_transform() {
    let transform = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0))
        * Mat4::from_scale(Vec3::splat(2.0));
    let tester = InsideTester::new(&unit_cube(), transform).unwrap();
    assert!(tester.is_inside(Vec3::new(5.2, 0.4, 0.6)));
    assert!(!tester.is_inside(Vec3::new(0.1, 0.2, 0.3)));
}

#[test]
fn inside_rejects_singular_transform() {
    let result = InsideTester::new(&unit_cube(), Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0)));
    assert!(result.is_err());
}

#[test]
fn inside_accepts_tiny_scale() {
    let tester = InsideTester::new(
        &box_mesh(Vec3::splat(1000.0)),
        Mat4::from_scale(Vec3::splat(0.001)),
    )
    .unwrap();
    assert!(tester.is_inside(Vec3::new(0.11, -0.23, 0.37)));
    assert!(!tester.is_inside(Vec3::new(0.6, 0.0, 0.0)));
}

#[test]
fn sphere_classification() {
    let tester = InsideTester::new(&uv_sphere(1.0, 12, 24), Mat4::IDENTITY).unwrap();
    assert!(tester.is_inside(Vec3::new(0.11, 0.23, 0.37)));
    assert!(!tester.is_inside(Vec3::new(1.3, 0.23, 0.37)));
}
