//! Vanguard Particles - entity emitters for the arcade simulation
//!
//! Provides pooled per-emitter entity simulation with:
//! - `Entity`: transformed triangle (or image) with physics, energy and lifespan
//! - `EmissionSystem`: ordered pool with expiry and batched index removal
//! - `Emitter`: rate-gated spawning with radial, forward-fire and burst placement
//! - Ballistic and homing motion, entity collision and border bounce
//! - `DrawList` output for the host renderer

pub mod collision;
pub mod draw;
pub mod emitter;
pub mod entity;
pub mod motion;
pub mod system;

pub use collision::{check_border, check_collision};
pub use draw::{DrawCommand, DrawList, SpriteImage};
pub use emitter::{Emitter, EmitterBehavior, EmitterConfig, EmitterSettings, SpawnContext};
pub use entity::Entity;
pub use motion::{MotionPattern, Target};
pub use system::EmissionSystem;
