//! Game phase machine: sequences ready, playable and game-over.
//!
//! Each phase carries a [`PhaseConfig`] that tells the host which parts of
//! the frame to run. Only the transitions of the arcade loop are legal:
//! ready → playable → game over → ready.

use std::collections::HashMap;
use std::fmt;
use vanguard_core::{Result, VanguardError};

/// Controls whether a frame stage runs, pauses, or is completely hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemPolicy {
    /// Stage runs normally.
    Run,
    /// Stage is paused (state preserved but not ticked).
    Pause,
    /// Stage is hidden (not ticked and not rendered).
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Ready,
    Playable,
    GameOver,
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            GamePhase::Ready => "ready",
            GamePhase::Playable => "playable",
            GamePhase::GameOver => "game_over",
        }
    }

    fn can_enter(&self, next: GamePhase) -> bool {
        matches!(
            (self, next),
            (GamePhase::Ready, GamePhase::Playable)
                | (GamePhase::Playable, GamePhase::GameOver)
                | (GamePhase::GameOver, GamePhase::Ready)
        )
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which frame stages run while a phase is active
#[derive(Debug, Clone)]
pub struct PhaseConfig {
    /// Emitters, physics and collision response
    pub simulation: SystemPolicy,
    /// Emission systems and the player
    pub world_rendering: SystemPolicy,
    /// Menu text (ready / game over screens)
    pub menu: SystemPolicy,
}

impl PhaseConfig {
    pub fn ready() -> Self {
        Self {
            simulation: SystemPolicy::Pause,
            world_rendering: SystemPolicy::Hidden,
            menu: SystemPolicy::Run,
        }
    }

    pub fn playable() -> Self {
        Self {
            simulation: SystemPolicy::Run,
            world_rendering: SystemPolicy::Run,
            menu: SystemPolicy::Hidden,
        }
    }

    pub fn game_over() -> Self {
        Self {
            simulation: SystemPolicy::Pause,
            world_rendering: SystemPolicy::Hidden,
            menu: SystemPolicy::Run,
        }
    }
}

pub struct PhaseMachine {
    current: GamePhase,
    configs: HashMap<GamePhase, PhaseConfig>,
}

impl PhaseMachine {
    /// Starts in [`GamePhase::Ready`] with the built-in phase configs
    pub fn new() -> Self {
        let mut configs = HashMap::new();
        configs.insert(GamePhase::Ready, PhaseConfig::ready());
        configs.insert(GamePhase::Playable, PhaseConfig::playable());
        configs.insert(GamePhase::GameOver, PhaseConfig::game_over());
        Self {
            current: GamePhase::Ready,
            configs,
        }
    }

    /// Override the config of one phase
    pub fn register_phase(&mut self, phase: GamePhase, config: PhaseConfig) {
        self.configs.insert(phase, config);
    }

    pub fn current(&self) -> GamePhase {
        self.current
    }

    pub fn is(&self, phase: GamePhase) -> bool {
        self.current == phase
    }

    /// Move to `next`, returning the phase that was left
    pub fn transition(&mut self, next: GamePhase) -> Result<GamePhase> {
        if !self.current.can_enter(next) {
            return Err(VanguardError::InvalidTransition {
                from: self.current.to_string(),
                to: next.to_string(),
            });
        }
        let previous = self.current;
        self.current = next;
        log::info!("phase {previous} -> {next}");
        Ok(previous)
    }

    /// Returns the active configuration
    pub fn active_config(&self) -> PhaseConfig {
        self.configs
            .get(&self.current)
            .cloned()
            .unwrap_or_else(|| match self.current {
                GamePhase::Ready => PhaseConfig::ready(),
                GamePhase::Playable => PhaseConfig::playable(),
                GamePhase::GameOver => PhaseConfig::game_over(),
            })
    }
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self::new()
    }
}
