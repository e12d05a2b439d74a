//! Spatial and common types

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Elapsed time in milliseconds, as reported by the clock provider
pub type Millis = f64;

/// A 2D transform: position, rotation about the screen-facing Z axis, and scale.
///
/// Z of `position` is carried but unused by the 2D simulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation in degrees (single axis, Z)
    pub rotation: f32,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: 0.0,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Composed transform `translate * rotate * scale`.
    ///
    /// Scale is innermost and translation outermost, so local geometry is
    /// scaled and rotated about the local origin before it is moved.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_z(self.rotation.to_radians())
            * Mat4::from_scale(self.scale)
    }

    /// Map a local-space point into world space
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.to_matrix().transform_point3(local)
    }
}

/// Duration after which a spawned entity expires
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Lifespan {
    #[default]
    Infinite,
    Finite(Millis),
}

impl Lifespan {
    /// Negative durations (conventionally `-1`) and non-finite input mean "never expires"
    pub fn from_ms(ms: Millis) -> Self {
        if ms < 0.0 || !ms.is_finite() {
            Lifespan::Infinite
        } else {
            Lifespan::Finite(ms)
        }
    }

    pub fn as_ms(&self) -> Millis {
        match self {
            Lifespan::Infinite => -1.0,
            Lifespan::Finite(ms) => *ms,
        }
    }

    /// True once `age` is strictly past a finite lifespan
    pub fn is_expired(&self, age: Millis) -> bool {
        match self {
            Lifespan::Infinite => false,
            Lifespan::Finite(ms) => age > *ms,
        }
    }
}

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    pub const AQUA: Self = Self::new(0.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_transform_default() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.to_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_scale_applies_before_translation() {
        let mut t = Transform::from_position(Vec3::new(100.0, 50.0, 0.0));
        t.set_scale(Vec3::splat(2.0));
        let p = t.transform_point(Vec3::new(10.0, 0.0, 0.0));
        assert!(close(p, Vec3::new(120.0, 50.0, 0.0)));
    }

    #[test]
    fn test_rotation_about_local_origin() {
        let mut t = Transform::from_position(Vec3::new(10.0, 10.0, 0.0));
        t.set_rotation(90.0);
        // (1, 0) rotated +90 degrees about Z lands on (0, 1), then moves
        let p = t.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(close(p, Vec3::new(10.0, 11.0, 0.0)));
    }

    #[test]
    fn test_lifespan_expiry() {
        assert_eq!(Lifespan::from_ms(-1.0), Lifespan::Infinite);
        assert!(!Lifespan::Infinite.is_expired(1e12));

        let life = Lifespan::from_ms(1000.0);
        assert!(!life.is_expired(1000.0));
        assert!(life.is_expired(1000.5));
        assert_eq!(life.as_ms(), 1000.0);
    }

    #[test]
    fn test_lifespan_non_finite_never_expires() {
        assert_eq!(Lifespan::from_ms(f64::NAN), Lifespan::Infinite);
        assert_eq!(Lifespan::from_ms(f64::INFINITY), Lifespan::Infinite);
        assert!(!Lifespan::from_ms(f64::NAN).is_expired(1e12));
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex(0xFF8844);
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.533).abs() < 0.01);
        assert!((c.b - 0.267).abs() < 0.01);
    }
}
