//! Vanguard - headless arcade runner
//!
//! Plays one round with a simple autopilot (hold fire, turn slowly) and
//! prints what happened.
//!
//! Usage:
//!   vanguard [--config <vanguard.toml>] [--difficulty hard] [--frames 600] [--seed 42]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use vanguard_core::Millis;
use vanguard_game::{logging, DirectoryAssets, Difficulty, Game, GameConfig, TuningOverrides};
use vanguard_particles::DrawList;
use vanguard_runtime::{Clock, GameClock, GamePhase, InputState, Key, ManualClock};

#[derive(Parser)]
#[command(name = "vanguard")]
#[command(about = "Run a headless round of the Vanguard arcade shooter")]
#[command(version)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// easy, normal or hard (overrides the config file)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Random seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Image directory (overrides the config file)
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Pace frames against the wall clock instead of simulated time
    #[arg(long)]
    realtime: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

/// Simulated or wall-clock frame pacing
enum Pacing {
    Simulated { clock: ManualClock, step: Millis },
    Realtime { clock: GameClock, step: Duration },
}

impl Pacing {
    fn new(realtime: bool, frame_rate: f32) -> Self {
        let step = 1000.0 / frame_rate as Millis;
        if realtime {
            Pacing::Realtime {
                clock: GameClock::new(),
                step: Duration::from_secs_f64(step / 1000.0),
            }
        } else {
            Pacing::Simulated {
                clock: ManualClock::new(),
                step,
            }
        }
    }

    fn now(&self) -> Millis {
        match self {
            Pacing::Simulated { clock, .. } => clock.now_ms(),
            Pacing::Realtime { clock, .. } => clock.now_ms(),
        }
    }

    /// Wait for the next frame; returns the measured frame rate when real time is used
    fn next_frame(&mut self) -> Option<f32> {
        match self {
            Pacing::Simulated { clock, step } => {
                clock.advance(*step);
                None
            }
            Pacing::Realtime { clock, step } => {
                std::thread::sleep(*step);
                clock.tick();
                Some(clock.frame_rate() as f32)
            }
        }
    }
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(root) = &args.assets {
        config.assets.root = root.clone();
    }
    Ok(config)
}

/// Keys held by the autopilot on `frame`
fn autopilot(frame: u64, input: &mut InputState) {
    let turning = frame % 90 < 30;
    if turning {
        input.process_key_down(Key::ArrowRight);
    } else {
        input.process_key_up(Key::ArrowRight);
    }
    input.process_key_down(Key::Space);
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = load_config(&args)?;
    let has_overrides = config.tuning != TuningOverrides::default();

    let assets = DirectoryAssets::new(config.assets.root.clone());
    let mut pacing = Pacing::new(args.realtime, config.frame_rate);
    let mut game = Game::new(config, Box::new(assets));

    // Difficulty presets may sit below a slider minimum; only user overrides are clamped
    if has_overrides {
        if let Err(e) = game.tuning().validate() {
            log::warn!("{e}; sliders will be clamped");
            let clamped = game.tuning().clamped();
            *game.tuning_mut() = clamped;
        }
    }

    let mut input = InputState::new();
    let mut draw_list = DrawList::new();

    // Leave the ready screen
    input.process_key_down(Key::Space);
    game.update(pacing.now(), &input);
    input.end_frame();
    input.process_key_up(Key::Space);

    let mut frames = 0;
    while frames < args.frames && game.phase() == GamePhase::Playable {
        autopilot(frames, &mut input);
        let now = pacing.now();
        game.update(now, &input);
        draw_list.clear();
        game.draw(now, &mut draw_list);
        input.end_frame();

        for event in game.drain_events() {
            log::debug!("{event:?}");
        }
        if let Some(fps) = pacing.next_frame() {
            game.set_frame_rate(fps);
        }
        frames += 1;
    }

    let stats = game.stats();
    let seconds = match game.phase() {
        GamePhase::GameOver => game.survived_seconds() as f64,
        _ => pacing.now() / 1000.0,
    };
    println!("Frames simulated:   {frames}");
    println!("Difficulty:         {}", game.difficulty());
    println!("Time survived:      {seconds:.1}s");
    println!("Enemies destroyed:  {}", stats.enemies_destroyed);
    println!("Hits taken:         {}", stats.hits_taken);
    println!("Energy left:        {}", game.player().energy());
    println!(
        "Live entities:      {} enemies, {} beams, {} explosion particles",
        game.enemies().system().len(),
        game.beams().system().len(),
        game.explosions().system().len()
    );
    println!("Final phase:        {}", game.phase());
    println!("Last frame draws:   {} commands", draw_list.len());

    Ok(())
}
