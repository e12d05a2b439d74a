//! Vanguard Core - Foundational types for the Vanguard arcade simulation
//!
//! This crate provides the types that all other Vanguard crates depend on:
//! - `Transform` - position, single-axis rotation and scale of a 2D shape
//! - `Lifespan`, `Millis` - duration-based expiry
//! - `Color` - RGBA color for draw commands
//! - Error types and Result alias

mod error;
mod types;

pub use error::{Result, VanguardError};
pub use glam::{Mat4, Vec3};
pub use types::{Color, Lifespan, Millis, Transform};
