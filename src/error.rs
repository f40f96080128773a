//! Construction-time errors
//!
//! The frame step never fails; only building a session from a bad
//! configuration (or loading one from disk) can.

use thiserror::Error;

/// Errors rejected when a session is configured.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The pipe pool must hold at least one top/bottom pair.
    #[error("pipe pool needs at least one pair")]
    NoPipes,

    /// A spacing, extent or scale that must be strictly positive was not.
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    /// Every tuning value has to be a finite number.
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    /// The starting ladder has to begin right of the recycle threshold.
    #[error("pipe_start_x ({start}) must be right of pipe_recycle_x ({recycle})")]
    StartBehindRecycle { start: f32, recycle: f32 },

    /// Gravity has to pull downward.
    #[error("gravity must be negative, got {0}")]
    GravityNotDownward(f32),

    /// Drag is a multiplicative decay factor.
    #[error("drag must be in (0, 1], got {0}")]
    DragOutOfRange(f32),

    /// Pipes have to scroll toward the recycle threshold.
    #[error("pipe velocity must move left, got x = {0}")]
    PipesNotScrolling(f32),

    /// Reading a tuning file failed.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// A tuning file was not valid JSON for `SimConfig`.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for session construction.
pub type ConfigResult<T> = Result<T, ConfigError>;
