//! Small state machines behind the engine, beam and explosion sound cues.
//!
//! Each transition that should start or stop a sound returns the
//! [`SoundCue`]; the orchestrator forwards it to the event bus.

use vanguard_core::Millis;
use vanguard_runtime::{SoundCue, SoundKind};

/// How long the beam sound keeps playing after the trigger is released
pub const BEAM_COOLDOWN_MS: Millis = 1000.0;

/// How long one explosion stays active after the latest trigger
pub const EXPLOSION_DURATION_MS: Millis = 1000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EngineSignal {
    #[default]
    Off,
    On,
}

impl EngineSignal {
    pub fn set(&mut self, on: bool) -> Option<SoundCue> {
        match (*self, on) {
            (EngineSignal::Off, true) => {
                *self = EngineSignal::On;
                Some(SoundCue::Play(SoundKind::Engine))
            }
            (EngineSignal::On, false) => {
                *self = EngineSignal::Off;
                Some(SoundCue::Stop(SoundKind::Engine))
            }
            _ => None,
        }
    }

    pub fn is_on(&self) -> bool {
        *self == EngineSignal::On
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum BeamSignal {
    #[default]
    Idle,
    Firing {
        since: Millis,
    },
    Cooldown {
        since: Millis,
    },
}

impl BeamSignal {
    pub fn press(&mut self, now: Millis) -> Option<SoundCue> {
        match *self {
            BeamSignal::Idle => {
                *self = BeamSignal::Firing { since: now };
                Some(SoundCue::Play(SoundKind::Beam))
            }
            // Sound is still playing
            BeamSignal::Cooldown { .. } => {
                *self = BeamSignal::Firing { since: now };
                None
            }
            BeamSignal::Firing { .. } => None,
        }
    }

    pub fn release(&mut self, now: Millis) {
        if let BeamSignal::Firing { .. } = *self {
            *self = BeamSignal::Cooldown { since: now };
        }
    }

    pub fn tick(&mut self, now: Millis) -> Option<SoundCue> {
        match *self {
            BeamSignal::Cooldown { since } if now - since > BEAM_COOLDOWN_MS => {
                *self = BeamSignal::Idle;
                Some(SoundCue::Stop(SoundKind::Beam))
            }
            _ => None,
        }
    }

    pub fn is_firing(&self) -> bool {
        matches!(self, BeamSignal::Firing { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ExplosionSignal {
    #[default]
    Idle,
    Active {
        since: Millis,
    },
}

impl ExplosionSignal {
    /// Start (or extend) the explosion window
    pub fn trigger(&mut self, now: Millis) -> Option<SoundCue> {
        let cue = match self {
            ExplosionSignal::Idle => Some(SoundCue::Play(SoundKind::Explosion)),
            ExplosionSignal::Active { .. } => None,
        };
        *self = ExplosionSignal::Active { since: now };
        cue
    }

    /// Ends the window once it has lasted [`EXPLOSION_DURATION_MS`]
    pub fn tick(&mut self, now: Millis) -> Option<SoundCue> {
        match *self {
            ExplosionSignal::Active { since } if now - since > EXPLOSION_DURATION_MS => {
                *self = ExplosionSignal::Idle;
                Some(SoundCue::Stop(SoundKind::Explosion))
            }
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ExplosionSignal::Active { .. })
    }
}
