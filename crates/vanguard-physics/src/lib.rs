//! Vanguard Physics - discrete rigid-body integration and triangle geometry
//!
//! Provides the physics layer of the arcade simulation:
//! - `RigidBody`: force accumulation, damping and one-step integration
//! - `heading`: unit forward vector for a rotation
//! - `Triangle`: point containment and vertex-overlap tests
//! - `bounce_off_border`: screen-edge velocity reflection

pub mod body;
pub mod border;
pub mod geometry;

pub use body::{heading, RigidBody};
pub use border::{bounce_off_border, BounceAxis};
pub use geometry::{point_in_triangle, Triangle};
