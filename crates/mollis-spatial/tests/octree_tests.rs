//! Integration tests for mollis-spatial.

use std::collections::BTreeSet;

use mollis_math::{Aabb, Vec3};
use mollis_spatial::{InsertOutcome, Octree};

/// Deterministic pseudo-random points inside `[-1, 1]³`.
fn scattered_points(n: usize) -> Vec<Vec3> {
    let mut state: u32 = 0x2545_f491;
    let mut next = || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (state >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0
    };
    (0..n).map(|_| Vec3::new(next(), next(), next())).collect()
}

fn cube_bounds() -> Aabb {
    Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))
}

fn build(points: &[Vec3], max_depth: u32) -> Octree {
    let mut tree = Octree::new(cube_bounds(), max_depth);
    for (i, &p) in points.iter().enumerate() {
        assert_eq!(tree.insert(p, i as u32), InsertOutcome::Stored);
    }
    tree
}

// ─── Insert Tests ─────────────────────────────────────────────

#[test]
fn new_tree_is_a_single_leaf() {
    let tree = Octree::new(cube_bounds(), 5);
    assert_eq!(tree.node_count(), 1);
    assert!(tree.nodes()[0].is_leaf());
    assert!(tree.is_empty());
}

#[test]
fn subdivision_is_lazy() {
    let mut tree = Octree::new(cube_bounds(), 2);
    tree.insert(Vec3::new(0.5, 0.5, 0.5), 0);
    // Root splits once, then the touched child splits once.
    assert_eq!(tree.node_count(), 1 + 8 + 8);

    tree.insert(Vec3::new(0.6, 0.6, 0.6), 1);
    assert_eq!(tree.node_count(), 17, "same path must not reallocate");
}

#[test]
fn out_of_bounds_is_ignored() {
    let mut tree = Octree::new(cube_bounds(), 3);
    assert_eq!(tree.insert(Vec3::new(1.5, 0.0, 0.0), 7), InsertOutcome::OutOfBounds);
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn zero_depth_stores_in_root() {
    let tree = build(&scattered_points(20), 0);
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.nodes()[0].points.len(), 20);
}

#[test]
fn tiny_box_is_not_subdivided() {
    let mut tree = Octree::new(Aabb::new(Vec3::ZERO, Vec3::splat(1e-4)), 8);
    tree.insert(Vec3::splat(5e-5), 0);
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.len(), 1);
}

#[test]
fn every_point_lands_in_exactly_one_containing_leaf() {
    let points = scattered_points(500);
    let tree = build(&points, 4);

    let mut seen = vec![0usize; points.len()];
    for leaf in tree.occupied_leaves() {
        assert!(leaf.is_leaf());
        for &(idx, p) in &leaf.points {
            assert_eq!(p, points[idx as usize]);
            assert!(leaf.bounds.contains(p), "leaf {:?} misses {:?}", leaf.bounds, p);
            seen[idx as usize] += 1;
        }
    }
    assert!(seen.iter().all(|&c| c == 1));
    assert_eq!(tree.len(), points.len());
    assert_eq!(tree.edge_drop_count(), 0);
}

#[test]
fn points_on_split_planes_are_stored_once() {
    let points = [
        Vec3::ZERO,
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.5, 0.0, -0.5),
    ];
    let tree = build(&points, 3);
    let stored: usize = tree.occupied_leaves().map(|l| l.points.len()).sum();
    assert_eq!(stored, points.len());
}

// ─── Query Tests ──────────────────────────────────────────────

#[test]
fn query_matches_brute_force() {
    let points = scattered_points(400);
    let tree = build(&points, 5);

    for (center, radius) in [
        (Vec3::ZERO, 0.3),
        (Vec3::new(0.7, -0.2, 0.4), 0.25),
        (Vec3::new(-1.0, -1.0, -1.0), 0.6),
        (Vec3::new(0.1, 0.1, 0.1), 2.0),
    ] {
        let found: BTreeSet<u32> = tree.query(center, radius).into_iter().collect();
        let expected: BTreeSet<u32> = points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.distance(center) <= radius)
            .map(|(i, _)| i as u32)
            .collect();
        assert_eq!(found, expected, "query at {center:?} r={radius}");
    }
}

#[test]
fn query_has_no_false_positives_in_box_corners() {
    // Points in the corners of the pruning cube but outside the sphere.
    let points = [
        Vec3::new(0.45, 0.45, 0.45),
        Vec3::new(-0.45, 0.45, -0.45),
        Vec3::new(0.1, 0.0, 0.0),
    ];
    let tree = build(&points, 3);
    assert_eq!(tree.query(Vec3::ZERO, 0.5), vec![2]);
}

#[test]
fn query_returns_each_index_once() {
    let points = scattered_points(200);
    let tree = build(&points, 4);
    let found = tree.query(Vec3::ZERO, 1.0);
    let unique: BTreeSet<u32> = found.iter().copied().collect();
    assert_eq!(unique.len(), found.len());
}

#[test]
fn query_far_away_is_empty() {
    let tree = build(&scattered_points(50), 3);
    assert!(tree.query(Vec3::splat(10.0), 0.5).is_empty());
}
