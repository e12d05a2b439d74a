//! Vanguard Runtime - Game loop collaborators
//!
//! Provides the providers the simulation core calls into:
//! - `Clock`: monotonic millisecond time (`GameClock`, `ManualClock`)
//! - `RandomSource`: uniform scalar/vector ranges (`SeededRandom`)
//! - `Bounds`: the play-area size
//! - `InputState`: keyboard and pointer tracking with action bindings
//! - `GameEvent` / `EventBus`: typed event queue for the host
//! - `PhaseMachine`: ready / playable / game-over sequencing

mod bounds;
mod clock;
mod event;
mod event_bus;
mod input;
mod random;
mod state;

pub use bounds::Bounds;
pub use clock::{Clock, GameClock, ManualClock};
pub use event::{GameEvent, SoundCue, SoundKind};
pub use event_bus::EventBus;
pub use input::{InputState, Key};
pub use random::{RandomSource, SeededRandom};
pub use state::{GamePhase, PhaseConfig, PhaseMachine, SystemPolicy};
