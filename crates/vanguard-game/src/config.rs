//! Game configuration: TOML file, difficulty presets and the tuning slider bank

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use vanguard_core::{Lifespan, Result, VanguardError, Vec3};
use vanguard_particles::{EmitterConfig, EmitterSettings};
use vanguard_runtime::Bounds;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Scales the default spawn rate, enemy life and enemy velocity
    pub fn multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Menu label, e.g. "Normal Selected"
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = VanguardError;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VanguardError::InvalidEnumValue {
                value: s.to_string(),
                allowed: Difficulty::ALL.iter().map(|d| d.name().to_string()).collect(),
            })
    }
}

/// The slider bank. Each field has a fixed range; see [`Tuning::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Enemy spawn events per second
    pub rate: f32,
    /// Enemy lifespan in seconds
    pub enemy_life: f32,
    /// Enemy initial velocity, pixels per second
    pub velocity: [f32; 3],
    pub n_agents: u32,
    /// Enemy and beam scale
    pub scale: f32,
    /// Enemy turn rate, degrees per tick
    pub rotation_speed: f32,
    /// Starting player energy
    pub n_energy: u32,
    pub player_move_speed: f32,
    pub player_rotation_speed: f32,
    pub player_scale: f32,
    /// Beam lifespan in seconds
    pub beam_life: f32,
    pub beam_speed: f32,
}

const RATE: (f32, f32) = (1.0, 10.0);
const ENEMY_LIFE: (f32, f32) = (0.1, 15.0);
const VELOCITY: (f32, f32) = (0.0, 1000.0);
const N_AGENTS: (u32, u32) = (1, 3);
const SCALE: (f32, f32) = (0.1, 1.0);
const ROTATION_SPEED: (f32, f32) = (1.0, 5.0);
const N_ENERGY: (u32, u32) = (0, 10);
const PLAYER_MOVE_SPEED: (f32, f32) = (100.0, 5000.0);
const PLAYER_ROTATION_SPEED: (f32, f32) = (0.0, 3000.0);
const PLAYER_SCALE: (f32, f32) = (0.0, 5.0);
const BEAM_LIFE: (f32, f32) = (0.1, 10.0);
const BEAM_SPEED: (f32, f32) = (100.0, 5000.0);

fn check(field: &str, value: f32, (min, max): (f32, f32)) -> Result<()> {
    if value.is_nan() || value < min || value > max {
        return Err(VanguardError::ValueOutOfRange {
            field: field.to_string(),
            min: min as f64,
            max: max as f64,
            value: value as f64,
        });
    }
    Ok(())
}

fn check_count(field: &str, value: u32, (min, max): (u32, u32)) -> Result<()> {
    check(field, value as f32, (min as f32, max as f32))
}

fn clamp(value: f32, (min, max): (f32, f32)) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::Normal)
    }
}

impl Tuning {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let d = difficulty.multiplier();
        Self {
            rate: d * 1.0,
            enemy_life: d * 5.0,
            velocity: [d * 150.0, d * 150.0, 0.0],
            n_agents: 1,
            scale: 0.8,
            rotation_speed: 3.0,
            n_energy: 5,
            player_move_speed: 1500.0,
            player_rotation_speed: 500.0,
            player_scale: 1.0,
            beam_life: 2.0,
            beam_speed: 1500.0,
        }
    }

    /// Report the first slider outside its range
    pub fn validate(&self) -> Result<()> {
        check("rate", self.rate, RATE)?;
        check("enemy_life", self.enemy_life, ENEMY_LIFE)?;
        for (axis, value) in ["velocity.x", "velocity.y", "velocity.z"]
            .into_iter()
            .zip(self.velocity)
        {
            check(axis, value, VELOCITY)?;
        }
        check_count("n_agents", self.n_agents, N_AGENTS)?;
        check("scale", self.scale, SCALE)?;
        check("rotation_speed", self.rotation_speed, ROTATION_SPEED)?;
        check_count("n_energy", self.n_energy, N_ENERGY)?;
        check("player_move_speed", self.player_move_speed, PLAYER_MOVE_SPEED)?;
        check(
            "player_rotation_speed",
            self.player_rotation_speed,
            PLAYER_ROTATION_SPEED,
        )?;
        check("player_scale", self.player_scale, PLAYER_SCALE)?;
        check("beam_life", self.beam_life, BEAM_LIFE)?;
        check("beam_speed", self.beam_speed, BEAM_SPEED)?;
        Ok(())
    }

    /// Copy with every slider forced into its range
    pub fn clamped(&self) -> Self {
        Self {
            rate: clamp(self.rate, RATE),
            enemy_life: clamp(self.enemy_life, ENEMY_LIFE),
            velocity: self.velocity.map(|v| clamp(v, VELOCITY)),
            n_agents: self.n_agents.clamp(N_AGENTS.0, N_AGENTS.1),
            scale: clamp(self.scale, SCALE),
            rotation_speed: clamp(self.rotation_speed, ROTATION_SPEED),
            n_energy: self.n_energy.clamp(N_ENERGY.0, N_ENERGY.1),
            player_move_speed: clamp(self.player_move_speed, PLAYER_MOVE_SPEED),
            player_rotation_speed: clamp(self.player_rotation_speed, PLAYER_ROTATION_SPEED),
            player_scale: clamp(self.player_scale, PLAYER_SCALE),
            beam_life: clamp(self.beam_life, BEAM_LIFE),
            beam_speed: clamp(self.beam_speed, BEAM_SPEED),
        }
    }

    pub fn with_overrides(self, overrides: &TuningOverrides) -> Self {
        Self {
            rate: overrides.rate.unwrap_or(self.rate),
            enemy_life: overrides.enemy_life.unwrap_or(self.enemy_life),
            velocity: overrides.velocity.unwrap_or(self.velocity),
            n_agents: overrides.n_agents.unwrap_or(self.n_agents),
            scale: overrides.scale.unwrap_or(self.scale),
            rotation_speed: overrides.rotation_speed.unwrap_or(self.rotation_speed),
            n_energy: overrides.n_energy.unwrap_or(self.n_energy),
            player_move_speed: overrides
                .player_move_speed
                .unwrap_or(self.player_move_speed),
            player_rotation_speed: overrides
                .player_rotation_speed
                .unwrap_or(self.player_rotation_speed),
            player_scale: overrides.player_scale.unwrap_or(self.player_scale),
            beam_life: overrides.beam_life.unwrap_or(self.beam_life),
            beam_speed: overrides.beam_speed.unwrap_or(self.beam_speed),
        }
    }

    /// Enemy emitter snapshot for this frame
    pub fn enemy_settings(&self) -> EmitterSettings {
        EmitterSettings {
            rate: self.rate,
            lifespan: Lifespan::Finite(self.enemy_life as f64 * 1000.0),
            velocity: Vec3::from_array(self.velocity),
            n_agents: self.n_agents,
        }
    }

    /// Beam emitter snapshot: one shot per second along `heading`
    pub fn beam_settings(&self, heading: Vec3) -> EmitterSettings {
        EmitterSettings {
            rate: 1.0,
            lifespan: Lifespan::Finite(self.beam_life as f64 * 1000.0),
            velocity: heading * self.beam_speed,
            n_agents: 1,
        }
    }
}

/// Partial slider values from the `[tuning]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningOverrides {
    pub rate: Option<f32>,
    pub enemy_life: Option<f32>,
    pub velocity: Option<[f32; 3]>,
    pub n_agents: Option<u32>,
    pub scale: Option<f32>,
    pub rotation_speed: Option<f32>,
    pub n_energy: Option<u32>,
    pub player_move_speed: Option<f32>,
    pub player_rotation_speed: Option<f32>,
    pub player_scale: Option<f32>,
    pub beam_life: Option<f32>,
    pub beam_speed: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub root: PathBuf,
    pub enemy: String,
    pub beam: String,
    pub background: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("images"),
            enemy: "Missile2.png".to_string(),
            beam: "Beam.png".to_string(),
            background: "Background1.png".to_string(),
        }
    }
}

/// Optional `[emitters.*]` tables, parsed with [`EmitterConfig::with_toml`].
///
/// They tune emitter internals such as cooldown, jitter and forces. Rate,
/// lifespan, velocity and count of the enemy and beam emitters follow the
/// sliders every frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterTables {
    pub enemy: Option<toml::Table>,
    pub beam: Option<toml::Table>,
    pub explosion: Option<toml::Table>,
}

impl EmitterTables {
    fn merge(table: Option<&toml::Table>, base: EmitterConfig) -> EmitterConfig {
        match table {
            Some(table) => base.with_toml(table),
            None => base,
        }
    }

    pub fn enemy(&self, base: EmitterConfig) -> EmitterConfig {
        Self::merge(self.enemy.as_ref(), base)
    }

    pub fn beam(&self, base: EmitterConfig) -> EmitterConfig {
        Self::merge(self.beam.as_ref(), base)
    }

    pub fn explosion(&self, base: EmitterConfig) -> EmitterConfig {
        Self::merge(self.explosion.as_ref(), base)
    }
}

/// Top-level `vanguard.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub screen: Bounds,
    pub tuning: TuningOverrides,
    pub assets: AssetConfig,
    pub emitters: EmitterTables,
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
    pub frame_rate: f32,
    /// Attach images to entities when they resolve
    pub custom_sprites: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            screen: Bounds::default(),
            tuning: TuningOverrides::default(),
            assets: AssetConfig::default(),
            emitters: EmitterTables::default(),
            seed: None,
            frame_rate: 60.0,
            custom_sprites: true,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(source)?;
        config.check()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    fn check(&self) -> Result<()> {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(VanguardError::ValidationError(format!(
                "frame_rate must be positive, got {}",
                self.frame_rate
            )));
        }
        if self.screen.width <= 0.0 || self.screen.height <= 0.0 {
            return Err(VanguardError::ValidationError(format!(
                "screen must have a positive size, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        Ok(())
    }

    /// Seconds per simulation tick
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate
    }

    /// Difficulty defaults with the file's overrides applied
    pub fn tuning(&self) -> Tuning {
        Tuning::for_difficulty(self.difficulty).with_overrides(&self.tuning)
    }
}
