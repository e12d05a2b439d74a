//! Per-tick motion policies applied to every live entity of an emitter

use crate::entity::Entity;
use vanguard_core::Vec3;

/// Alignment tolerance: headings whose dot with the target direction reaches
/// `1 - HOMING_EPSILON` are considered aligned and stop turning
pub const HOMING_EPSILON: f32 = 0.0005;

/// Where a homing entity should steer, passed in explicitly each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub position: Vec3,
    pub heading: Vec3,
}

impl Target {
    pub fn of(entity: &Entity) -> Self {
        Self {
            position: entity.position(),
            heading: entity.heading(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionPattern {
    /// Move along the current velocity with no steering
    #[default]
    Ballistic,
    /// Turn toward the target and push toward it, then move ballistically
    Homing,
}

impl MotionPattern {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ballistic" => Some(Self::Ballistic),
            "homing" => Some(Self::Homing),
            _ => None,
        }
    }

    /// Advance `entity` one tick. `steering` is the per-tick force magnitude
    /// used by homing. Homing without a target degrades to ballistic.
    pub fn apply(&self, entity: &mut Entity, target: Option<&Target>, steering: f32) {
        if let (MotionPattern::Homing, Some(target)) = (self, target) {
            steer_toward(entity, target.position, steering);
        }
        ballistic_step(entity);
    }
}

/// Translate by the current per-tick velocity
pub fn ballistic_step(entity: &mut Entity) {
    let velocity = entity.velocity();
    entity.transform.position += velocity;
}

/// Rotate one `rotation_speed` increment toward `target` unless already
/// aligned, add a steering force along the target direction and integrate.
///
/// The turn direction follows the sign of `cross(heading, to_target).z`.
/// When the entity sits exactly on the target there is no direction, so it
/// neither turns nor gets pushed, but it is still integrated.
/// Returns the applied rotation delta in degrees.
pub fn steer_toward(entity: &mut Entity, target: Vec3, steering: f32) -> f32 {
    let Some(to_target) = (target - entity.position()).try_normalize() else {
        entity.integrate();
        return 0.0;
    };

    let heading = entity.heading();
    let mut delta = 0.0;
    if heading.dot(to_target) < 1.0 - HOMING_EPSILON {
        delta = if heading.cross(to_target).z > 0.0 {
            entity.rotation_speed
        } else {
            -entity.rotation_speed
        };
        entity.transform.rotation += delta;
    }

    entity.add_forces(to_target * steering);
    entity.integrate();
    delta
}
