//! Event bus for broadcasting game events

use crate::event::GameEvent;

/// A simple event queue that the game pushes to and the host drains
pub struct EventBus {
    events: Vec<GameEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event onto the bus
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events from the bus, returning them
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pending events, oldest first
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{SoundCue, SoundKind};
    use vanguard_core::Vec3;

    #[test]
    fn test_push_and_drain() {
        let mut bus = EventBus::new();
        assert!(bus.is_empty());

        bus.push(GameEvent::Sound(SoundCue::Play(SoundKind::Beam)));
        bus.push(GameEvent::EnemyDestroyed {
            position: Vec3::new(5.0, 6.0, 0.0),
        });

        assert_eq!(bus.len(), 2);
        assert_eq!(
            bus.pending()[0],
            GameEvent::Sound(SoundCue::Play(SoundKind::Beam))
        );

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_drain_clears() {
        let mut bus = EventBus::new();
        bus.push(GameEvent::PlayerHit { energy_left: 4 });

        let _ = bus.drain();
        let events = bus.drain();
        assert!(events.is_empty());
    }
}
