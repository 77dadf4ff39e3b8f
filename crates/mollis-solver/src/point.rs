//! Point masses.

use mollis_math::Vec3;

/// A particle of the mass-spring network.
///
/// Forces are accumulated between integrations and cleared by
/// [`PointMass::integrate`]. A mass ≤ 0 marks the point as fixed: it
/// still receives forces but never moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    /// Current position (world space).
    pub position: Vec3,
    /// Current velocity.
    pub velocity: Vec3,
    mass: f32,
    force: Vec3,
}

impl PointMass {
    /// Creates a point at rest.
    pub fn new(position: Vec3, mass: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            mass,
            force: Vec3::ZERO,
        }
    }

    /// Mass, fixed at creation.
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Changes the mass. A value ≤ 0 pins the point in place.
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
    }

    /// Returns true if the point never moves.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        !(self.mass > 0.0)
    }

    /// Force accumulated since the last integration.
    #[inline]
    pub fn accumulated_force(&self) -> Vec3 {
        self.force
    }

    /// Adds `f` to the force buffer.
    #[inline]
    pub fn add_force(&mut self, f: Vec3) {
        self.force += f;
    }

    /// Semi-implicit Euler: velocity first, then position with the new velocity.
    ///
    /// Fixed points keep their position and velocity. The force buffer is
    /// cleared either way.
    pub fn integrate(&mut self, dt: f32) {
        if !self.is_fixed() {
            let acceleration = self.force / self.mass;
            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;
        }
        self.force = Vec3::ZERO;
    }

    /// Returns true if every position component is finite.
    #[inline]
    pub fn has_finite_position(&self) -> bool {
        self.position.is_finite()
    }

    /// Moves the point to the origin and stops it.
    pub fn reset(&mut self) {
        self.position = Vec3::ZERO;
        self.velocity = Vec3::ZERO;
        self.force = Vec3::ZERO;
    }

    /// Kinetic energy `0.5 * m * |v|²` (zero for fixed points).
    pub fn kinetic_energy(&self) -> f64 {
        if self.is_fixed() {
            return 0.0;
        }
        0.5 * self.mass as f64 * self.velocity.length_squared() as f64
    }
}
