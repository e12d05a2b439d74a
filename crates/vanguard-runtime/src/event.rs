//! Events the simulation reports to its host

use crate::state::GamePhase;
use vanguard_core::Vec3;

/// Looping sound channels the host is expected to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Engine,
    Beam,
    Explosion,
}

/// Start or stop a looping sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Play(SoundKind),
    Stop(SoundKind),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    /// A beam destroyed an enemy at `position`
    EnemyDestroyed { position: Vec3 },
    /// An enemy rammed the player
    PlayerHit { energy_left: u32 },
    Sound(SoundCue),
}
