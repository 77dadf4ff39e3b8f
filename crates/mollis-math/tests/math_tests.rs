//! Integration tests for mollis-math.

use mollis_math::{ray_triangle_intersection, Aabb, Vec3};

fn unit_box() -> Aabb {
    Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))
}

// ─── Aabb Tests ───────────────────────────────────────────────

#[test]
fn from_points_encloses_all() {
    let pts = [
        Vec3::new(1.0, -2.0, 0.5),
        Vec3::new(-3.0, 4.0, 0.0),
        Vec3::new(0.0, 0.0, 2.0),
    ];
    let b = Aabb::from_points(pts).unwrap();
    assert_eq!(b.min, Vec3::new(-3.0, -2.0, 0.0));
    assert_eq!(b.max, Vec3::new(1.0, 4.0, 2.0));
    assert!(pts.iter().all(|&p| b.contains(p)));
}

#[test]
fn from_points_empty_is_none() {
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}

#[test]
fn contains_is_inclusive() {
    let b = unit_box();
    assert!(b.contains(Vec3::new(1.0, 1.0, 1.0)));
    assert!(b.contains(Vec3::new(-1.0, 0.0, 0.0)));
    assert!(!b.contains(Vec3::new(1.0001, 0.0, 0.0)));
}

#[test]
fn intersects_touching_and_disjoint() {
    let a = unit_box();
    let touching = Aabb::new(Vec3::new(1.0, -1.0, -1.0), Vec3::new(2.0, 1.0, 1.0));
    let apart = Aabb::new(Vec3::new(1.5, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    assert!(a.intersects(&touching));
    assert!(!a.intersects(&apart));
    assert!(!apart.intersects(&a));
}

#[test]
fn octants_partition_the_box() {
    let b = unit_box();
    let mut volume = 0.0;
    for i in 0..8 {
        let o = b.octant(i);
        let s = o.size();
        volume += s.x * s.y * s.z;
        assert!(b.contains(o.min) && b.contains(o.max));
    }
    assert!((volume - 8.0).abs() < 1e-5);
}

#[test]
fn octant_index_matches_octant_box() {
    let b = unit_box();
    let queries = [
        Vec3::new(-0.5, -0.5, -0.5),
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(-0.2, 0.7, 0.1),
        Vec3::new(0.9, 0.9, 0.9),
        Vec3::ZERO,
    ];
    for p in queries {
        let i = b.octant_index(p);
        assert!(b.octant(i).contains(p), "octant {i} should contain {p:?}");
    }
}

#[test]
fn diagonal_length() {
    assert!((unit_box().diagonal_length() - 12.0f32.sqrt()).abs() < 1e-6);
}

// ─── Ray Tests ────────────────────────────────────────────────

#[test]
fn ray_hits_triangle_in_front() {
    let t = ray_triangle_intersection(
        Vec3::new(0.2, 0.2, -1.0),
        Vec3::Z,
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert!((t.unwrap() - 1.0).abs() < 1e-6);
}

#[test]
fn ray_misses_behind_origin() {
    let t = ray_triangle_intersection(
        Vec3::new(0.2, 0.2, 1.0),
        Vec3::Z,
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert!(t.is_none());
}

#[test]
fn ray_parallel_to_plane_is_rejected() {
    let t = ray_triangle_intersection(
        Vec3::new(0.2, 0.2, 0.0),
        Vec3::X,
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert!(t.is_none());
}

#[test]
fn ray_outside_triangle_misses() {
    let t = ray_triangle_intersection(
        Vec3::new(0.8, 0.8, -1.0),
        Vec3::Z,
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert!(t.is_none());
}
