//! Springs and deduplicated spring storage.
//!
//! A spring joins two distinct points. Endpoints are stored in canonical
//! order (`a < b`), so `(i, j)` and `(j, i)` are the same spring and
//! [`SpringSet`] keeps at most one spring per unordered pair, whatever
//! category created it.

use std::collections::HashSet;

use mollis_math::Vec3;
use mollis_types::constants::MIN_SPRING_LENGTH_SQ;
use serde::{Deserialize, Serialize};

/// Category of a generated spring. Only used while building; a spring
/// does not remember its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpringKind {
    /// Along a triangle edge.
    Structural,
    /// Between two structural neighbors of a common point.
    Angular,
    /// Across a shared edge, between the two opposite vertices.
    Torsional,
    /// Between two nearby interior points.
    Volumetric,
}

impl SpringKind {
    /// Stiffness of this category for base stiffness `k`.
    pub fn stiffness(self, k: f32) -> f32 {
        match self {
            SpringKind::Structural | SpringKind::Volumetric => k,
            SpringKind::Angular | SpringKind::Torsional => k * 0.5,
        }
    }
}

/// A Hookean spring between points `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    a: u32,
    b: u32,
    /// Length at which the spring exerts no force.
    pub rest_length: f32,
    /// Hooke constant.
    pub stiffness: f32,
}

impl Spring {
    /// Creates a spring, ordering the endpoints. Returns `None` if `a == b`.
    pub fn new(a: u32, b: u32, rest_length: f32, stiffness: f32) -> Option<Self> {
        if a == b {
            return None;
        }
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        Some(Self {
            a,
            b,
            rest_length,
            stiffness,
        })
    }

    /// Smaller endpoint index.
    #[inline]
    pub fn a(&self) -> u32 {
        self.a
    }

    /// Larger endpoint index.
    #[inline]
    pub fn b(&self) -> u32 {
        self.b
    }

    /// Canonical `(a, b)` pair.
    #[inline]
    pub fn pair(&self) -> (u32, u32) {
        (self.a, self.b)
    }

    /// Force exerted on endpoint `a`; endpoint `b` receives the negation.
    ///
    /// A stretched spring pulls the endpoints together and a compressed
    /// one pushes them apart. Returns `None` when the endpoints nearly
    /// coincide and no direction is defined.
    pub fn force_on_a(&self, pa: Vec3, pb: Vec3) -> Option<Vec3> {
        let d = pb - pa;
        let len_sq = d.length_squared();
        if len_sq < MIN_SPRING_LENGTH_SQ {
            return None;
        }
        let len = len_sq.sqrt();
        Some(d * (self.stiffness * (len - self.rest_length) / len))
    }

    /// Stored energy `0.5 * k * (|pb - pa| - rest)²`.
    pub fn potential_energy(&self, pa: Vec3, pb: Vec3) -> f64 {
        let stretch = (pb.distance(pa) - self.rest_length) as f64;
        0.5 * self.stiffness as f64 * stretch * stretch
    }
}

/// Ordered spring list with unordered-pair deduplication.
///
/// Iteration order is insertion order, which makes force accumulation
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct SpringSet {
    springs: Vec<Spring>,
    pairs: HashSet<(u32, u32)>,
}

impl SpringSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `spring` unless its pair is already present.
    ///
    /// Returns true if the spring was added.
    pub fn insert(&mut self, spring: Spring) -> bool {
        if !self.pairs.insert(spring.pair()) {
            return false;
        }
        self.springs.push(spring);
        true
    }

    /// Returns true if a spring joins `a` and `b` (in either order).
    pub fn contains(&self, a: u32, b: u32) -> bool {
        let key = if a < b { (a, b) } else { (b, a) };
        self.pairs.contains(&key)
    }

    /// Number of springs.
    #[inline]
    pub fn len(&self) -> usize {
        self.springs.len()
    }

    /// Returns true if no spring is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    /// Springs in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Spring] {
        &self.springs
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Spring> {
        self.springs.iter()
    }
}

impl<'a> IntoIterator for &'a SpringSet {
    type Item = &'a Spring;
    type IntoIter = std::slice::Iter<'a, Spring>;

    fn into_iter(self) -> Self::IntoIter {
        self.springs.iter()
    }
}
