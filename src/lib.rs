//! Flappy Core - gameplay simulation for a side-scrolling obstacle game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (transforms, colliders, pipes, bird, state machine)
//! - `tuning`: Data-driven game balance
//! - `hud`: Score digit layout for the overlay
//! - `scene`: Opaque asset handles and the per-frame draw list
//! - `timing`: Wall-clock to delta-time conversion for hosts

pub mod error;
pub mod hud;
pub mod scene;
pub mod sim;
pub mod timing;
pub mod tuning;

pub use error::ConfigError;
pub use scene::{DrawItem, MeshHandle, SceneAssets, TextureHandle};
pub use sim::{GameEvent, GamePhase, LossCause, Session, TickInput, TickOutcome, tick};
pub use tuning::SimConfig;

/// Game configuration constants (defaults for `SimConfig`)
pub mod consts {
    /// Fixed step used by the headless runner (60 Hz)
    pub const HEADLESS_DT: f32 = 1.0 / 60.0;

    /// Bird physics
    pub const GRAVITY: f32 = -9.81 * 4.0;
    pub const DRAG: f32 = 0.9;
    pub const JUMP_FORCE: f32 = 30.0;
    /// Flying at or above this height loses the run
    pub const CEILING_Y: f32 = 12.0;

    /// Pipe layout
    pub const PIPE_PAIRS: usize = 10;
    pub const PIPE_X_SPACING: f32 = 6.0;
    pub const PIPE_Y_SPACING: f32 = 6.0;
    pub const PIPE_START_X: f32 = 12.0;
    pub const PIPE_SPEED: f32 = -5.0;
    /// Pairs whose top pipe is at or left of this are recycled
    pub const PIPE_RECYCLE_X: f32 = -12.0;
    pub const PIPE_INITIAL_BAND: f32 = 4.0;
    pub const PIPE_RECYCLE_BAND: f32 = 5.0;

    /// Colliders sit slightly in front of their sprite
    pub const COLLIDER_Z_OFFSET: f32 = 0.1;
}

/// Randomized vertical offset in `[-band, band]`, mirrored with 50% probability
#[inline]
pub fn random_offset<R: rand::Rng>(rng: &mut R, band: f32) -> f32 {
    let offset = rng.random::<f32>() * band;
    if rng.random::<f32>() > 0.5 { -offset } else { offset }
}
