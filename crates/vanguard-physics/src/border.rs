//! Screen-edge bounce

use vanguard_core::Vec3;
use vanguard_runtime::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    Horizontal,
    Vertical,
}

/// Reflect `velocity` when the box `size` centred on `position` crosses the
/// play area.
///
/// The offending component is negated and doubled (`v = -2v`) so the shape is
/// kicked back inside even when it is deep past the edge. Horizontal edges
/// win: at most one axis flips per call. The Z component is zeroed.
pub fn bounce_off_border(
    position: Vec3,
    size: (f32, f32),
    velocity: &mut Vec3,
    bounds: &Bounds,
) -> Option<BounceAxis> {
    let (width, height) = size;
    if !bounds.contains_x(position.x, width / 2.0) {
        *velocity = Vec3::new(-2.0 * velocity.x, velocity.y, 0.0);
        Some(BounceAxis::Horizontal)
    } else if !bounds.contains_y(position.y, height / 2.0) {
        *velocity = Vec3::new(velocity.x, -2.0 * velocity.y, 0.0);
        Some(BounceAxis::Vertical)
    } else {
        None
    }
}
