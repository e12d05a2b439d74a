//! Vanguard Game - the arcade shooter built on the particle emitters
//!
//! - `Game`: per-frame orchestration of the player, enemies, beams and explosions
//! - `GameConfig` / `Tuning`: TOML configuration, difficulty presets and sliders
//! - Engine, beam and explosion signal state machines
//! - `AssetProvider`: image lookup with a triangle fallback

pub mod assets;
pub mod config;
pub mod game;
pub mod logging;
pub mod signals;

pub use assets::{AssetProvider, DirectoryAssets, StaticAssets};
pub use config::{AssetConfig, Difficulty, EmitterTables, GameConfig, Tuning, TuningOverrides};
pub use game::{Game, GameStats};
pub use signals::{BeamSignal, EngineSignal, ExplosionSignal};
