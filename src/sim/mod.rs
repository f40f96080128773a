//! Frame-stepped gameplay simulation
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - Caller supplies `dt` and decoded input edges
//! - Seeded RNG only
//! - Stable iteration order (pool index order)

pub mod autopilot;
pub mod bird;
pub mod collider;
pub mod pipes;
pub mod score;
pub mod state;
pub mod tick;
pub mod transform;

pub use bird::Bird;
pub use collider::{Aabb, BoxCollider, Collider, overlaps};
pub use pipes::{GateId, Pipe, PipePool};
pub use score::ScoreTracker;
pub use state::{GameEvent, GamePhase, Ground, LossCause, Session};
pub use tick::{TickInput, TickOutcome, tick};
pub use transform::Transform;
