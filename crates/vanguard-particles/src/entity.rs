//! Entity: a transformed shape with physics state, energy and a lifespan.
//!
//! Geometry is always the local-space [`Triangle`]. An attached image only
//! changes how the entity is drawn and its width/height, so containment and
//! collision stay well defined whether or not a bitmap is shown.

use crate::draw::{DrawCommand, DrawList, SpriteImage};
use vanguard_core::{Color, Lifespan, Millis, Transform, Vec3};
use vanguard_physics::{heading, RigidBody, Triangle};

pub const DEFAULT_ENERGY: u32 = 5;
pub const DEFAULT_MAX_ENERGY: u32 = 10;

#[derive(Debug, Clone)]
pub struct Entity {
    pub name: String,
    pub transform: Transform,
    pub body: RigidBody,
    /// Clock value at creation
    pub birthtime: Millis,
    pub lifespan: Lifespan,
    /// Degrees per tick used by steering
    pub rotation_speed: f32,
    pub move_speed: f32,
    pub width: f32,
    pub height: f32,
    pub geometry: Triangle,
    image: Option<SpriteImage>,
    energy: u32,
    max_energy: u32,
    pub highlighted: bool,
    pub selected: bool,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            name: "unnamed".to_string(),
            transform: Transform::default(),
            body: RigidBody::default(),
            birthtime: 0.0,
            lifespan: Lifespan::Infinite,
            rotation_speed: 0.0,
            move_speed: 50.0,
            width: 0.0,
            height: 0.0,
            geometry: Triangle::SHIP,
            image: None,
            energy: DEFAULT_ENERGY,
            max_energy: DEFAULT_MAX_ENERGY,
            highlighted: false,
            selected: false,
        }
    }
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Show `image` instead of the triangle; width/height follow the image
    pub fn set_image(&mut self, image: SpriteImage) {
        self.width = image.width;
        self.height = image.height;
        self.image = Some(image);
    }

    pub fn image(&self) -> Option<&SpriteImage> {
        self.image.as_ref()
    }

    pub fn shows_image(&self) -> bool {
        self.image.is_some()
    }

    /// Fallback when no image is attached: highlighted triangle sized by its
    /// absolute vertex extents
    pub fn fit_to_geometry(&mut self) {
        let (width, height) = self.geometry.extents();
        self.highlighted = true;
        self.width = width;
        self.height = height;
    }

    // --- Physics ---

    /// One discrete physics step; see [`RigidBody::integrate`]
    pub fn integrate(&mut self) {
        self.body.integrate(&mut self.transform);
    }

    pub fn add_forces(&mut self, force: Vec3) {
        self.body.add_forces(force);
    }

    pub fn add_angular_forces(&mut self, force: f32) {
        self.body.add_angular_forces(force);
    }

    /// Unit forward direction for the current rotation
    pub fn heading(&self) -> Vec3 {
        heading(self.transform.rotation)
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    // --- Geometry ---

    /// The entity's triangle mapped through its current transform
    pub fn world_triangle(&self) -> Triangle {
        self.geometry.transformed(&self.transform)
    }

    /// World-space containment against the transformed triangle
    pub fn inside_triangle(&self, point: Vec3) -> bool {
        self.world_triangle().contains(point)
    }

    /// Pointer-pick and collision test. Image-backed entities keep their
    /// triangle geometry, so this is the same test as [`Self::inside_triangle`].
    pub fn inside_point(&self, point: Vec3) -> bool {
        self.inside_triangle(point)
    }

    // --- Energy ---

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn max_energy(&self) -> u32 {
        self.max_energy
    }

    /// Set energy, clamped to the ceiling
    pub fn set_energy(&mut self, energy: u32) {
        self.energy = energy.min(self.max_energy);
    }

    pub fn set_max_energy(&mut self, max: u32) {
        self.max_energy = max;
        self.energy = self.energy.min(max);
    }

    /// Energy never drops below zero; reaching zero is a signal for the caller
    pub fn decrease_energy(&mut self, d: u32) {
        self.energy = self.energy.saturating_sub(d);
    }

    pub fn increase_energy(&mut self, d: u32) {
        self.energy = self.energy.saturating_add(d).min(self.max_energy);
    }

    pub fn is_depleted(&self) -> bool {
        self.energy == 0
    }

    // --- Lifetime ---

    /// Time since creation; `now` comes from the same monotonic clock as `birthtime`
    pub fn age(&self, now: Millis) -> Millis {
        (now - self.birthtime).max(0.0)
    }

    pub fn is_expired(&self, now: Millis) -> bool {
        self.lifespan.is_expired(self.age(now))
    }

    // --- Setters (ranges are enforced by the tuning layer) ---

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Uniform scale on every axis
    pub fn set_scale(&mut self, scale: f32) {
        self.transform.set_scale(Vec3::splat(scale));
    }

    pub fn set_move_speed(&mut self, move_speed: f32) {
        self.move_speed = move_speed;
    }

    pub fn set_rotation_speed(&mut self, rotation_speed: f32) {
        self.rotation_speed = rotation_speed;
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.body.velocity = velocity;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn set_highlight(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Image if one is shown, otherwise the triangle (white when highlighted, green otherwise)
    pub fn draw(&self, list: &mut DrawList) {
        match &self.image {
            Some(image) => list.push(DrawCommand::Image {
                image: image.clone(),
                transform: self.transform.to_matrix(),
                tint: Color::WHITE,
            }),
            None => {
                let color = if self.highlighted {
                    Color::WHITE
                } else {
                    Color::GREEN
                };
                list.push(DrawCommand::Polygon {
                    points: self.world_triangle().verts.to_vec(),
                    color,
                });
            }
        }
    }
}
