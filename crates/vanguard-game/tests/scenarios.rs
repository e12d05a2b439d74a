//! Whole-game scenarios driven with a manual clock and a fixed seed

use vanguard_core::{Lifespan, Millis, Vec3};
use vanguard_game::{Game, GameConfig, StaticAssets};
use vanguard_particles::Entity;
use vanguard_runtime::{
    Bounds, Clock, GameEvent, GamePhase, InputState, Key, ManualClock, SoundCue, SoundKind,
};

const STEP: Millis = 1000.0 / 60.0;

fn new_game(seed: u64) -> Game {
    let config = GameConfig {
        seed: Some(seed),
        screen: Bounds::new(800.0, 600.0),
        ..GameConfig::default()
    };
    Game::new(config, Box::new(StaticAssets::new()))
}

/// A started game with enemy spawning switched off
fn quiet_game() -> Game {
    let mut game = new_game(11);
    game.start(0.0);
    game.enemies_mut().stop();
    game.drain_events();
    game
}

fn enemy_at(x: f32, y: f32) -> Entity {
    let mut enemy = Entity::new("enemy");
    enemy.fit_to_geometry();
    enemy.transform.set_position(Vec3::new(x, y, 0.0));
    enemy
}

fn run(game: &mut Game, clock: &mut ManualClock, input: &InputState, frames: usize) {
    for _ in 0..frames {
        clock.advance(STEP);
        game.update(clock.now_ms(), input);
    }
}

#[test]
fn beam_destroys_enemy_in_its_path() {
    let mut game = quiet_game();
    let mut clock = ManualClock::new();
    // Heading 0 points up the screen, so the beam travels toward smaller y
    game.enemies_mut().system_mut().add(enemy_at(400.0, 180.0));

    game.press_fire(clock.now_ms());
    assert_eq!(game.beams().system().len(), 1);

    let input = InputState::new();
    let mut destroyed = None;
    for _ in 0..30 {
        clock.advance(STEP);
        game.update(clock.now_ms(), &input);
        if game.enemies().system().is_empty() {
            destroyed = Some(game.drain_events());
            break;
        }
    }

    let events = destroyed.expect("enemy survived the beam");
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::EnemyDestroyed { .. })));
    assert!(events.contains(&GameEvent::Sound(SoundCue::Play(SoundKind::Explosion))));
    assert_eq!(game.stats().enemies_destroyed, 1);
    assert_eq!(game.explosions().system().len(), 10);
    assert!(game.explosion_signal().is_active());
}

#[test]
fn explosion_signal_expires_after_a_second() {
    let mut game = quiet_game();
    let mut clock = ManualClock::new();
    game.enemies_mut().system_mut().add(enemy_at(400.0, 300.0));
    game.player_mut().set_energy(5);

    let input = InputState::new();
    run(&mut game, &mut clock, &input, 1);
    assert!(game.explosion_signal().is_active());

    run(&mut game, &mut clock, &input, 70);
    assert!(!game.explosion_signal().is_active());
    assert!(game
        .drain_events()
        .contains(&GameEvent::Sound(SoundCue::Stop(SoundKind::Explosion))));
    // Particles live for one second too
    assert!(game.explosions().system().is_empty());
}

#[test]
fn ramming_enemies_drain_energy_and_end_the_round() {
    let mut game = quiet_game();
    let mut clock = ManualClock::new();
    game.player_mut().set_energy(2);
    // Two enemies hit in the same frame: both removed, no index confusion
    game.enemies_mut().system_mut().add(enemy_at(400.0, 300.0));
    game.enemies_mut().system_mut().add(enemy_at(405.0, 300.0));
    game.enemies_mut().system_mut().add(enemy_at(50.0, 50.0));

    let input = InputState::new();
    run(&mut game, &mut clock, &input, 1);
    assert_eq!(game.player().energy(), 0);
    assert_eq!(game.stats().hits_taken, 2);
    assert_eq!(game.enemies().system().len(), 1);
    let far = game.enemies().system().get(0).map(Entity::position);
    assert!(far.is_some_and(|p| p.x < 100.0 && p.y < 100.0));

    let events = game.drain_events();
    assert!(events.contains(&GameEvent::PlayerHit { energy_left: 1 }));
    assert!(events.contains(&GameEvent::PlayerHit { energy_left: 0 }));

    // Depletion is noticed on the next frame
    run(&mut game, &mut clock, &input, 1);
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.drain_events().contains(&GameEvent::PhaseChanged {
        from: GamePhase::Playable,
        to: GamePhase::GameOver,
    }));

    // Nothing moves once the round is over
    let frozen = game.player().position();
    run(&mut game, &mut clock, &input, 10);
    assert_eq!(game.player().position(), frozen);
}

#[test]
fn space_after_game_over_returns_to_menu() {
    let mut game = quiet_game();
    game.player_mut().set_energy(0);
    let mut input = InputState::new();
    game.update(STEP, &input);
    assert_eq!(game.phase(), GamePhase::GameOver);

    input.process_key_down(Key::Space);
    game.update(2.0 * STEP, &input);
    assert_eq!(game.phase(), GamePhase::Ready);
    assert_eq!(game.player().energy(), 5);
    assert!(game.enemies().system().is_empty());
}

#[test]
fn enemies_never_outlive_their_lifespan() {
    let mut game = new_game(3);
    game.tuning_mut().enemy_life = 0.5;
    game.tuning_mut().rate = 10.0;
    game.tuning_mut().n_agents = 3;
    game.start(0.0);

    let mut clock = ManualClock::new();
    let input = InputState::new();
    let mut peak = 0;
    for _ in 0..180 {
        clock.advance(STEP);
        let now = clock.now_ms();
        game.update(now, &input);
        if game.phase() != GamePhase::Playable {
            break;
        }
        peak = peak.max(game.enemies().system().len());
        for enemy in game.enemies().system().iter() {
            assert!(!enemy.is_expired(now));
            assert_eq!(enemy.lifespan, Lifespan::Finite(500.0));
        }
    }
    assert!(peak > 0);
}

#[test]
fn same_seed_same_game() {
    let input = InputState::new();
    let mut positions = Vec::new();
    for _ in 0..2 {
        let mut game = new_game(1234);
        game.tuning_mut().n_agents = 4;
        game.start(0.0);
        let mut clock = ManualClock::new();
        run(&mut game, &mut clock, &input, 30);
        let snapshot: Vec<Vec3> = game.enemies().system().iter().map(Entity::position).collect();
        positions.push(snapshot);
    }
    assert!(!positions[0].is_empty());
    assert_eq!(positions[0], positions[1]);
}

#[test]
fn held_fire_keeps_shooting_once_per_cooldown() {
    let mut game = quiet_game();
    let mut clock = ManualClock::new();
    let mut input = InputState::new();
    input.process_key_down(Key::Space);
    game.update(clock.now_ms(), &input);
    input.end_frame();
    assert!(game.beam_signal().is_firing());

    // 3.5 seconds of held fire; every beam lives 2 s, so each one is seen
    let mut births: Vec<Millis> = Vec::new();
    for _ in 0..210 {
        run(&mut game, &mut clock, &input, 1);
        for beam in game.beams().system().iter() {
            if !births.contains(&beam.birthtime) {
                births.push(beam.birthtime);
            }
        }
    }
    assert_eq!(births.len(), 4, "beams born at {births:?}");
    assert_eq!(births[0], 0.0);
    for pair in births.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap > 1000.0 && gap <= 1000.0 + 2.0 * STEP, "gap {gap}");
    }

    input.process_key_up(Key::Space);
    game.update(clock.now_ms(), &input);
    assert!(!game.beam_signal().is_firing());
    assert!(!game.beams().is_active());
}
