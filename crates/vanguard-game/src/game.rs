//! The arcade orchestrator: owns the player and the three emitters, wires the
//! tuning sliders into them each frame, resolves hits and sequences phases.

use crate::assets::{load_or_warn, AssetProvider};
use crate::config::{Difficulty, GameConfig, Tuning};
use crate::signals::{BeamSignal, EngineSignal, ExplosionSignal};
use vanguard_core::{Color, Mat4, Millis, Vec3};
use vanguard_particles::{
    check_border, check_collision, DrawCommand, DrawList, Emitter, EmitterBehavior,
    EmitterConfig, Entity, MotionPattern, SpawnContext, SpriteImage, Target,
};
use vanguard_runtime::{
    Bounds, EventBus, GameEvent, GamePhase, InputState, PhaseMachine, RandomSource, SeededRandom,
    SoundCue, SoundKind, SystemPolicy,
};

/// Length of the aim line drawn from the player along its heading
const AIM_LINE_LENGTH: f32 = 3000.0;

const EXPLOSION_RATE: f32 = 10.0;
const EXPLOSION_LIFESPAN_MS: Millis = 1000.0;
const EXPLOSION_PARTICLES: u32 = 10;
const EXPLOSION_SCALE: f32 = 0.3;
/// Explosion drift, pixels per second on each axis
const EXPLOSION_DRIFT: f32 = 5.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub frames: u64,
    pub enemies_destroyed: u32,
    pub hits_taken: u32,
}

#[derive(Debug, Clone, Default)]
struct Images {
    enemy: Option<SpriteImage>,
    beam: Option<SpriteImage>,
    background: Option<SpriteImage>,
}

pub struct Game {
    config: GameConfig,
    difficulty: Difficulty,
    tuning: Tuning,
    custom_sprites: bool,
    phases: PhaseMachine,
    events: EventBus,
    rng: Box<dyn RandomSource>,
    assets: Box<dyn AssetProvider>,
    images: Images,
    player: Entity,
    enemies: Emitter,
    beams: Emitter,
    explosions: Emitter,
    engine: EngineSignal,
    beam_signal: BeamSignal,
    explosion_signal: ExplosionSignal,
    hud_visible: bool,
    fullscreen: bool,
    dragging: bool,
    /// Clock value when the current round started
    epoch: Millis,
    survived_seconds: u64,
    measured_frame_rate: f32,
    stats: GameStats,
}

impl Game {
    /// Seeded from `config.seed` when present, otherwise from the OS
    pub fn new(config: GameConfig, assets: Box<dyn AssetProvider>) -> Self {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(SeededRandom::from_entropy()),
        };
        Self::with_rng(config, assets, rng)
    }

    pub fn with_rng(
        config: GameConfig,
        assets: Box<dyn AssetProvider>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let difficulty = config.difficulty;
        let tuning = config.tuning();
        let custom_sprites = config.custom_sprites;
        let measured_frame_rate = config.frame_rate;

        let mut game = Self {
            config,
            difficulty,
            tuning,
            custom_sprites,
            phases: PhaseMachine::new(),
            events: EventBus::new(),
            rng,
            assets,
            images: Images::default(),
            player: Entity::new("player"),
            enemies: Emitter::new("enemy", EmitterBehavior::RadialSpawner, MotionPattern::Homing),
            beams: Emitter::new("beam", EmitterBehavior::ForwardFire, MotionPattern::Ballistic),
            explosions: Emitter::new("explosion", EmitterBehavior::Burst, MotionPattern::Ballistic),
            engine: EngineSignal::default(),
            beam_signal: BeamSignal::default(),
            explosion_signal: ExplosionSignal::default(),
            hud_visible: false,
            fullscreen: false,
            dragging: false,
            epoch: 0.0,
            survived_seconds: 0,
            measured_frame_rate,
            stats: GameStats::default(),
        };
        game.load_images();
        game.setup_objects();
        game
    }

    fn load_images(&mut self) {
        let names = &self.config.assets;
        self.images = Images {
            enemy: load_or_warn(self.assets.as_ref(), &names.enemy),
            beam: load_or_warn(self.assets.as_ref(), &names.beam),
            background: load_or_warn(self.assets.as_ref(), &names.background),
        };
    }

    fn bounds(&self) -> Bounds {
        self.config.screen
    }

    /// Rebuild the player and all emitters from the current tuning
    fn setup_objects(&mut self) {
        let (cx, cy) = self.bounds().center();
        let center = Vec3::new(cx, cy, 0.0);

        let mut player = Entity::new("player");
        player.fit_to_geometry();
        player.transform.set_position(center);
        player.set_energy(self.tuning.n_energy);
        player.set_move_speed(self.tuning.player_move_speed);
        player.set_rotation_speed(self.tuning.player_rotation_speed);
        player.set_scale(self.tuning.player_scale);
        self.player = player;

        let sprite = |image: &Option<SpriteImage>, on: bool| if on { image.clone() } else { None };

        let tables = &self.config.emitters;

        let enemy_config = tables.enemy(EmitterConfig {
            behavior: EmitterBehavior::RadialSpawner,
            motion: MotionPattern::Homing,
            drawable: true,
            ..EmitterConfig::default()
        });
        let mut enemies = Emitter::from_config("enemy", &enemy_config);
        enemies.set_position(center);
        enemies.apply(&self.tuning.enemy_settings());
        enemies.set_child_image(sprite(&self.images.enemy, self.custom_sprites));
        enemies.start();

        let beam_config = tables.beam(EmitterConfig {
            behavior: EmitterBehavior::ForwardFire,
            motion: MotionPattern::Ballistic,
            drawable: true,
            ..EmitterConfig::default()
        });
        let mut beams = Emitter::from_config("beam", &beam_config);
        beams.set_position(center);
        beams.apply(&self.tuning.beam_settings(self.player.heading()));
        beams.set_child_image(sprite(&self.images.beam, self.custom_sprites));

        let explosion_config = tables.explosion(EmitterConfig {
            behavior: EmitterBehavior::Burst,
            motion: MotionPattern::Ballistic,
            rate: EXPLOSION_RATE,
            lifespan_ms: EXPLOSION_LIFESPAN_MS,
            velocity: [0.0; 3],
            n_agents: EXPLOSION_PARTICLES,
            drawable: true,
            ..EmitterConfig::default()
        });
        let explosions = Emitter::from_config("explosion", &explosion_config);

        self.enemies = enemies;
        self.beams = beams;
        self.explosions = explosions;

        self.engine = EngineSignal::default();
        self.beam_signal = BeamSignal::default();
        self.explosion_signal = ExplosionSignal::default();
        self.dragging = false;

        log::info!(
            "objects ready: difficulty {}, custom sprites {}, energy {}",
            self.difficulty,
            self.custom_sprites,
            self.player.energy()
        );
    }

    // --- Accessors ---

    pub fn phase(&self) -> GamePhase {
        self.phases.current()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Slider bank; changes take effect on the next `update`
    pub fn tuning_mut(&mut self) -> &mut Tuning {
        &mut self.tuning
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.player
    }

    pub fn enemies(&self) -> &Emitter {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut Emitter {
        &mut self.enemies
    }

    pub fn beams(&self) -> &Emitter {
        &self.beams
    }

    pub fn explosions(&self) -> &Emitter {
        &self.explosions
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn survived_seconds(&self) -> u64 {
        self.survived_seconds
    }

    pub fn custom_sprites(&self) -> bool {
        self.custom_sprites
    }

    pub fn hud_visible(&self) -> bool {
        self.hud_visible
    }

    /// Whether the host should be fullscreen
    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn engine(&self) -> EngineSignal {
        self.engine
    }

    pub fn beam_signal(&self) -> BeamSignal {
        self.beam_signal
    }

    pub fn explosion_signal(&self) -> ExplosionSignal {
        self.explosion_signal
    }

    /// Frame rate shown in the HUD, as measured by the host
    pub fn set_frame_rate(&mut self, fps: f32) {
        self.measured_frame_rate = fps;
    }

    /// Events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    fn cue(&mut self, cue: Option<SoundCue>) {
        if let Some(cue) = cue {
            self.events.push(GameEvent::Sound(cue));
        }
    }

    fn enter(&mut self, next: GamePhase) {
        match self.phases.transition(next) {
            Ok(from) => self.events.push(GameEvent::PhaseChanged { from, to: next }),
            Err(e) => log::warn!("{e}"),
        }
    }

    // --- Phase actions ---

    /// Pick a difficulty from the ready screen
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if !self.phases.is(GamePhase::Ready) {
            return;
        }
        self.difficulty = difficulty;
        self.tuning = Tuning::for_difficulty(difficulty).with_overrides(&self.config.tuning);
        self.setup_objects();
    }

    /// Toggle custom sprites from the ready screen
    pub fn toggle_sprites(&mut self) {
        if !self.phases.is(GamePhase::Ready) {
            return;
        }
        self.custom_sprites = !self.custom_sprites;
        self.setup_objects();
    }

    /// Leave the ready screen; the round clock starts at `now`
    pub fn start(&mut self, now: Millis) {
        if !self.phases.is(GamePhase::Ready) {
            return;
        }
        self.epoch = now;
        self.hud_visible = true;
        self.stats = GameStats::default();
        self.enter(GamePhase::Playable);
    }

    /// Back to the ready screen with the configured difficulty and sprites
    pub fn restart(&mut self) {
        if !self.phases.is(GamePhase::GameOver) {
            return;
        }
        self.difficulty = self.config.difficulty;
        self.tuning = self.config.tuning();
        self.custom_sprites = self.config.custom_sprites;
        self.hud_visible = false;
        self.load_images();
        self.setup_objects();
        self.enter(GamePhase::Ready);
    }

    /// Fire once (cooldown permitting) and hold the beam on
    pub fn press_fire(&mut self, now: Millis) {
        if !self.phases.is(GamePhase::Playable) {
            return;
        }
        let dt = self.config.frame_dt();
        let bounds = self.bounds();
        let mut ctx = SpawnContext::new(now, bounds, self.rng.as_mut(), dt);
        self.beams.spawn_sprite(&mut ctx);
        let cue = self.beam_signal.press(now);
        self.cue(cue);
    }

    pub fn release_fire(&mut self, now: Millis) {
        self.beam_signal.release(now);
    }

    fn end_round(&mut self, now: Millis) {
        self.survived_seconds = ((now - self.epoch).max(0.0) / 1000.0) as u64;
        log::info!(
            "game over after {}s: {} destroyed, {} hits taken",
            self.survived_seconds,
            self.stats.enemies_destroyed,
            self.stats.hits_taken
        );
        let engine = self.engine.set(false);
        self.cue(engine);
        if self.beam_signal != BeamSignal::Idle {
            self.beam_signal = BeamSignal::Idle;
            self.cue(Some(SoundCue::Stop(SoundKind::Beam)));
        }
        if self.explosion_signal.is_active() {
            self.explosion_signal = ExplosionSignal::Idle;
            self.cue(Some(SoundCue::Stop(SoundKind::Explosion)));
        }
        self.enter(GamePhase::GameOver);
    }

    // --- Frame ---

    fn handle_keys(&mut self, now: Millis, input: &InputState) {
        if input.is_action_just_pressed("toggle_fullscreen") {
            self.fullscreen = !self.fullscreen;
        }
        if input.is_action_just_pressed("toggle_hud") {
            self.hud_visible = !self.hud_visible;
        }

        match self.phases.current() {
            GamePhase::Ready => {
                let picks = [
                    ("difficulty_easy", Difficulty::Easy),
                    ("difficulty_normal", Difficulty::Normal),
                    ("difficulty_hard", Difficulty::Hard),
                ];
                for (action, difficulty) in picks {
                    if input.is_action_just_pressed(action) {
                        self.select_difficulty(difficulty);
                    }
                }
                if input.is_action_just_pressed("toggle_sprites") {
                    self.toggle_sprites();
                }
                if input.is_action_just_pressed("fire") {
                    self.start(now);
                }
            }
            GamePhase::Playable => {
                if input.is_action_just_pressed("fire") {
                    self.press_fire(now);
                }
                if input.is_action_just_released("fire") {
                    self.release_fire(now);
                }
            }
            GamePhase::GameOver => {
                if input.is_action_just_pressed("fire") {
                    self.restart();
                }
            }
        }
    }

    fn handle_pointer(&mut self, input: &InputState) {
        if input.is_pointer_just_pressed() {
            let (x, y) = input.pointer_position;
            self.dragging = self.player.inside_point(Vec3::new(x, y, 0.0));
        } else if self.dragging && input.is_pointer_down() {
            let (dx, dy) = input.pointer_delta();
            self.player.transform.position += Vec3::new(dx, dy, 0.0);
        }
        if input.is_pointer_just_released() {
            self.dragging = false;
        }
    }

    /// Advance one frame. Keys and the pointer are handled in every phase;
    /// the simulation only runs while playable.
    pub fn update(&mut self, now: Millis, input: &InputState) {
        self.handle_keys(now, input);
        self.handle_pointer(input);

        if self.phases.active_config().simulation != SystemPolicy::Run {
            return;
        }
        self.stats.frames += 1;

        self.update_controls(input);
        if !self.update_player(now) {
            return;
        }
        self.update_beams(now);
        self.update_enemies(now);
        self.update_explosions(now);

        let beam = self.beam_signal.tick(now);
        self.cue(beam);
        let explosion = self.explosion_signal.tick(now);
        self.cue(explosion);
    }

    fn update_controls(&mut self, input: &InputState) {
        let dt = self.config.frame_dt();
        let thrust = self.tuning.player_move_speed * dt * dt;
        let turn = self.tuning.player_rotation_speed * dt * dt;
        let heading = self.player.heading();

        let mut engine_on = false;
        if input.is_action_pressed("thrust") {
            self.player.add_forces(heading * thrust);
            engine_on = true;
        }
        if input.is_action_pressed("reverse") {
            self.player.add_forces(-heading * thrust);
            engine_on = true;
        }
        if input.is_action_pressed("turn_left") {
            self.player.add_angular_forces(-turn);
            engine_on = true;
        }
        if input.is_action_pressed("turn_right") {
            self.player.add_angular_forces(turn);
            engine_on = true;
        }
        let cue = self.engine.set(engine_on);
        self.cue(cue);
    }

    /// Returns false when the round ended this frame
    fn update_player(&mut self, now: Millis) -> bool {
        let bounds = self.bounds();
        self.player.integrate();
        self.player.set_rotation_speed(self.tuning.player_rotation_speed);
        self.player.set_move_speed(self.tuning.player_move_speed);
        self.player.set_scale(self.tuning.player_scale);
        check_border(&mut self.player, &bounds);

        if self.player.is_depleted() {
            self.end_round(now);
            return false;
        }
        true
    }

    fn update_beams(&mut self, now: Millis) {
        let dt = self.config.frame_dt();
        let bounds = self.bounds();

        self.beams.set_position(self.player.position());
        self.beams.set_rotation(self.player.transform.rotation);
        self.beams
            .apply(&self.tuning.beam_settings(self.player.heading()));
        if self.beam_signal.is_firing() {
            self.beams.start();
        } else {
            self.beams.stop();
        }
        let mut ctx = SpawnContext::new(now, bounds, self.rng.as_mut(), dt);
        self.beams.update(&mut ctx, None);

        let mut hits: Vec<usize> = Vec::new();
        for beam in self.beams.system_mut().iter_mut() {
            beam.set_scale(self.tuning.scale);
            beam.set_rotation_speed(self.tuning.rotation_speed);
            check_border(beam, &bounds);
            for (j, enemy) in self.enemies.system().iter().enumerate() {
                if !hits.contains(&j) && check_collision(beam, enemy) {
                    hits.push(j);
                }
            }
        }

        for &j in &hits {
            let Some(position) = self.enemies.system().get(j).map(Entity::position) else {
                continue;
            };
            self.explode_at(now, position);
            self.stats.enemies_destroyed += 1;
            self.events.push(GameEvent::EnemyDestroyed { position });
            log::debug!("beam hit enemy at ({:.0}, {:.0})", position.x, position.y);
        }
        self.enemies.system_mut().remove_indices(&hits);
    }

    fn update_enemies(&mut self, now: Millis) {
        let dt = self.config.frame_dt();
        let bounds = self.bounds();

        self.enemies.apply(&self.tuning.enemy_settings());
        let target = Target::of(&self.player);
        let mut ctx = SpawnContext::new(now, bounds, self.rng.as_mut(), dt);
        self.enemies.update(&mut ctx, Some(&target));

        let mut rammed: Vec<usize> = Vec::new();
        for (i, enemy) in self.enemies.system_mut().iter_mut().enumerate() {
            enemy.set_scale(self.tuning.scale);
            enemy.set_rotation_speed(self.tuning.rotation_speed);
            if check_collision(enemy, &self.player) {
                rammed.push(i);
            }
        }

        for &i in &rammed {
            let Some(position) = self.enemies.system().get(i).map(Entity::position) else {
                continue;
            };
            self.explode_at(now, position);
            self.player.decrease_energy(1);
            self.stats.hits_taken += 1;
            let energy_left = self.player.energy();
            self.events.push(GameEvent::PlayerHit { energy_left });
            log::debug!("player hit, {energy_left} energy left");
        }
        self.enemies.system_mut().remove_indices(&rammed);
    }

    fn update_explosions(&mut self, now: Millis) {
        let dt = self.config.frame_dt();
        let bounds = self.bounds();

        self.explosions.set_position(self.player.position());
        self.explosions.set_rotation(self.player.transform.rotation);
        let drift = Vec3::new(EXPLOSION_DRIFT, EXPLOSION_DRIFT, 0.0);
        let velocity = self.rng.vec_range(-drift, drift);
        self.explosions.set_velocity(velocity);
        let mut ctx = SpawnContext::new(now, bounds, self.rng.as_mut(), dt);
        self.explosions.update(&mut ctx, None);

        for particle in self.explosions.system_mut().iter_mut() {
            particle.set_scale(EXPLOSION_SCALE);
            particle.set_rotation_speed(self.tuning.rotation_speed);
            particle.integrate();
        }
    }

    /// One burst of explosion particles at `position`
    fn explode_at(&mut self, now: Millis, position: Vec3) {
        let dt = self.config.frame_dt();
        let bounds = self.bounds();
        self.explosions.set_position(position);
        let mut ctx = SpawnContext::new(now, bounds, self.rng.as_mut(), dt);
        self.explosions.spawn_sprite(&mut ctx);
        let cue = self.explosion_signal.trigger(now);
        self.cue(cue);
    }

    // --- Draw ---

    pub fn draw(&self, now: Millis, list: &mut DrawList) {
        let config = self.phases.active_config();
        if config.world_rendering == SystemPolicy::Run {
            self.draw_world(now, list);
        }
        if config.menu == SystemPolicy::Run {
            match self.phases.current() {
                GamePhase::GameOver => self.draw_game_over(list),
                _ => self.draw_ready(list),
            }
        }
    }

    fn draw_world(&self, now: Millis, list: &mut DrawList) {
        let bounds = self.bounds();
        if let Some(background) = &self.images.background {
            list.push(DrawCommand::Image {
                image: background.clone(),
                transform: Mat4::from_translation(Vec3::new(
                    background.width / 2.0,
                    background.height / 2.0,
                    0.0,
                )),
                tint: Color::WHITE,
            });
        }

        self.enemies.draw(list);
        self.beams.draw(list);
        self.explosions.draw(list);

        let from = self.player.position();
        list.push(DrawCommand::Line {
            from,
            to: from + self.player.heading() * AIM_LINE_LENGTH,
            color: Color::AQUA,
        });
        self.player.draw(list);

        let x = bounds.width - 100.0;
        let seconds = ((now - self.epoch).max(0.0) / 1000.0) as u64;
        list.text("nEnergy = ", x, 25.0, Color::WHITE);
        list.text(
            self.player.energy().to_string(),
            bounds.width - 20.0,
            25.0,
            Color::WHITE,
        );
        list.text(
            format!("{:.1}", self.measured_frame_rate),
            x,
            50.0,
            Color::WHITE,
        );
        list.text(seconds.to_string(), x, 75.0, Color::WHITE);
    }

    fn draw_ready(&self, list: &mut DrawList) {
        let (cx, cy) = self.bounds().center();
        let x = cx - 100.0;
        list.text("To start game press space bar", x, cy, Color::WHITE);
        list.text("1 = easy    2 = normal    3 = hard", x, cy + 25.0, Color::WHITE);
        list.text(
            format!("{} Selected", self.difficulty.label()),
            x,
            cy + 50.0,
            Color::WHITE,
        );
        list.text("Press 'h' to show GUI menu", x, cy + 75.0, Color::WHITE);
        list.text("Press 'q' to toggle sprites", x, cy + 100.0, Color::WHITE);
        list.text("Custom Sprites = ", x, cy + 125.0, Color::WHITE);
        let flag = if self.custom_sprites { "True" } else { "False" };
        list.text(flag, cx + 50.0, cy + 125.0, Color::WHITE);
    }

    fn draw_game_over(&self, list: &mut DrawList) {
        let (cx, cy) = self.bounds().center();
        let x = cx - 50.0;
        list.text("Game Over", x, cy, Color::WHITE);
        list.text("Total Time Survived = ", x, cy + 25.0, Color::WHITE);
        list.text(
            self.survived_seconds.to_string(),
            cx + 125.0,
            cy + 25.0,
            Color::WHITE,
        );
        list.text("Press space to return to menu", x, cy + 50.0, Color::WHITE);
    }
}
