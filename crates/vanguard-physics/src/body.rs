//! Discrete Newtonian integrator for a single shape.
//!
//! One call to [`RigidBody::integrate`] is one simulation tick; nothing is
//! scaled by elapsed real time. Linear and angular channels are independent.

use vanguard_core::{Mat4, Transform, Vec3};

/// Smallest acceptable mass to avoid numerically unstable accelerations.
const MIN_MASS: f32 = 1e-6;

/// Canonical forward direction in local space. Screen Y grows downward, so
/// "up" on screen is negative Y.
const LOCAL_UP: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// Unit forward direction for a rotation in degrees.
///
/// Any angle is accepted; values outside `[0, 360)` wrap naturally.
pub fn heading(rotation_degrees: f32) -> Vec3 {
    Mat4::from_rotation_z(rotation_degrees.to_radians())
        .transform_vector3(LOCAL_UP)
        .normalize_or(LOCAL_UP)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub acceleration: Vec3,
    /// Net force accumulated since the last integration
    pub forces: Vec3,
    pub velocity: Vec3,
    /// Must be positive; a zero mass makes forces inert
    pub mass: f32,
    /// Per-tick velocity multiplier
    pub damping: f32,
    pub angular_force: f32,
    pub angular_velocity: f32,
    pub angular_acceleration: f32,
    pub angular_damping: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            acceleration: Vec3::ZERO,
            forces: Vec3::ZERO,
            velocity: Vec3::ZERO,
            mass: 1.0,
            damping: 0.96,
            angular_force: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            angular_damping: 0.96,
        }
    }
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a force, consumed by the next `integrate`
    pub fn add_forces(&mut self, force: Vec3) {
        self.forces += force;
    }

    /// Accumulate an angular force, consumed by the next `integrate`
    pub fn add_angular_forces(&mut self, force: f32) {
        self.angular_force += force;
    }

    fn inverse_mass(&self) -> f32 {
        if self.mass > MIN_MASS {
            1.0 / self.mass
        } else {
            0.0
        }
    }

    /// Advance one tick, moving and rotating `transform`.
    ///
    /// `a = F/m; v += a; v *= damping; p += v`, mirrored on the angular
    /// channel. Both force accumulators are zero afterwards.
    pub fn integrate(&mut self, transform: &mut Transform) {
        let inverse_mass = self.inverse_mass();

        self.acceleration = self.forces * inverse_mass;
        self.velocity += self.acceleration;
        self.velocity *= self.damping;
        transform.position += self.velocity;
        self.forces = Vec3::ZERO;

        self.angular_acceleration = self.angular_force * inverse_mass;
        self.angular_velocity += self.angular_acceleration;
        self.angular_velocity *= self.angular_damping;
        transform.rotation += self.angular_velocity;
        self.angular_force = 0.0;
    }
}
