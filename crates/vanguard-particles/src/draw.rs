//! Draw commands consumed by the renderer.
//!
//! The simulation never talks to a graphics API. Each `draw` call appends
//! transformed polygons, bitmaps, lines and text to a [`DrawList`] that the
//! host replays in order.

use vanguard_core::{Color, Mat4, Vec3};

/// Opaque renderable image: a key the host resolves plus its pixel size
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteImage {
    pub key: String,
    pub width: f32,
    pub height: f32,
}

impl SpriteImage {
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled convex polygon, vertices already in world space
    Polygon { points: Vec<Vec3>, color: Color },
    /// Bitmap centred on the local origin of `transform`
    Image {
        image: SpriteImage,
        transform: Mat4,
        tint: Color,
    },
    Rect {
        center: Vec3,
        width: f32,
        height: f32,
        color: Color,
    },
    Line { from: Vec3, to: Vec3, color: Color },
    Text {
        text: String,
        position: Vec3,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            position: Vec3::new(x, y, 0.0),
            color,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of polygons and bitmaps, i.e. drawn shapes
    pub fn shape_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. } | DrawCommand::Image { .. }))
            .count()
    }
}
