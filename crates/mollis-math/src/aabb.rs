//! Axis-aligned bounding boxes.
//!
//! Containment and overlap tests are inclusive on every face, so a
//! point lying exactly on a shared face is contained by both boxes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box given by its two extreme corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from its corners.
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a zero-volume box around a single point.
    #[inline]
    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Creates a cube centered at `center` with the given half-extent.
    #[inline]
    pub fn from_center_half_extent(center: Vec3, half_extent: f32) -> Self {
        let h = Vec3::splat(half_extent);
        Self {
            min: center - h,
            max: center + h,
        }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first);
        for p in iter {
            bounds.encapsulate(p);
        }
        Some(bounds)
    }

    /// Grows the box to include `p`.
    #[inline]
    pub fn encapsulate(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the main diagonal.
    #[inline]
    pub fn diagonal_length(&self) -> f32 {
        self.size().length()
    }

    /// Returns true if `p` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Returns true if the two boxes overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }

    /// Index (0..8) of the octant that `p` falls in, relative to the center.
    ///
    /// Bit 0 selects +X, bit 1 selects +Y, bit 2 selects +Z. Points on a
    /// splitting plane go to the upper octant.
    #[inline]
    pub fn octant_index(&self, p: Vec3) -> usize {
        let c = self.center();
        let mut i = 0;
        if p.x >= c.x {
            i |= 1;
        }
        if p.y >= c.y {
            i |= 2;
        }
        if p.z >= c.z {
            i |= 4;
        }
        i
    }

    /// Box of octant `i`, using the same bit layout as [`Aabb::octant_index`].
    pub fn octant(&self, i: usize) -> Aabb {
        let c = self.center();
        let pick = |bit: usize, lo: f32, mid: f32, hi: f32| {
            if i & bit == 0 {
                (lo, mid)
            } else {
                (mid, hi)
            }
        };
        let (x0, x1) = pick(1, self.min.x, c.x, self.max.x);
        let (y0, y1) = pick(2, self.min.y, c.y, self.max.y);
        let (z0, z1) = pick(4, self.min.z, c.z, self.max.z);
        Aabb::new(Vec3::new(x0, y0, z0), Vec3::new(x1, y1, z1))
    }
}
