//! Entity-level hit and border tests

use crate::entity::Entity;
use vanguard_physics::{bounce_off_border, BounceAxis};
use vanguard_runtime::Bounds;

/// True when any world-space vertex of either entity lies inside the other.
/// Symmetric in its arguments.
pub fn check_collision(a: &Entity, b: &Entity) -> bool {
    a.world_triangle().overlaps(&b.world_triangle())
}

/// Bounce `entity` off the play-area edge it crossed, if any
pub fn check_border(entity: &mut Entity, bounds: &Bounds) -> Option<BounceAxis> {
    let position = entity.position();
    let size = (entity.width, entity.height);
    bounce_off_border(position, size, &mut entity.body.velocity, bounds)
}
