//! Data-driven game balance
//!
//! Every gameplay constant lives in `SimConfig`. Defaults reproduce the
//! classic feel; hosts can override any subset from a JSON tuning file.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Bird ===
    /// Vertical acceleration (units/s², negative = down)
    pub gravity: f32,
    /// Multiplicative decay applied to upward velocity each frame
    pub drag: f32,
    /// Vertical velocity set (not added) on jump
    pub jump_force: f32,
    /// Bird height at or above which the run is lost
    pub ceiling_y: f32,
    pub bird_spawn: Vec3,
    pub bird_scale: Vec3,
    /// Collider width/height before scaling
    pub bird_collider: (f32, f32),

    // === Pipes ===
    pub pipe_pairs: usize,
    pub pipe_x_spacing: f32,
    /// Vertical opening between the top and bottom pipe
    pub pipe_y_spacing: f32,
    pub pipe_start_x: f32,
    pub pipe_z: f32,
    pub pipe_scale: Vec3,
    pub pipe_velocity: Vec3,
    pub pipe_recycle_x: f32,
    /// Offset band used at session start and on restart
    pub pipe_initial_band: f32,
    /// Offset band used when a pair is recycled mid-run
    pub pipe_recycle_band: f32,
    /// Scale of the thin scoring collider in the gap
    pub gate_scale: Vec3,

    // === Static scenery ===
    pub ground_position: Vec3,
    pub ground_scale: Vec3,
    pub background_scale: Vec3,

    pub collider_z_offset: f32,

    // === HUD ===
    pub digit_row_y: f32,
    pub digit_z: f32,
    pub digit_scale: f32,
    pub digit_spacing: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            drag: DRAG,
            jump_force: JUMP_FORCE,
            ceiling_y: CEILING_Y,
            bird_spawn: Vec3::new(-5.0, 0.0, 2.0),
            bird_scale: Vec3::new(1.5, 2.0, 1.0),
            bird_collider: (1.0, 1.0),

            pipe_pairs: PIPE_PAIRS,
            pipe_x_spacing: PIPE_X_SPACING,
            pipe_y_spacing: PIPE_Y_SPACING,
            pipe_start_x: PIPE_START_X,
            pipe_z: 1.0,
            pipe_scale: Vec3::new(2.0, 20.0, 1.0),
            pipe_velocity: Vec3::new(PIPE_SPEED, 0.0, 0.0),
            pipe_recycle_x: PIPE_RECYCLE_X,
            pipe_initial_band: PIPE_INITIAL_BAND,
            pipe_recycle_band: PIPE_RECYCLE_BAND,
            gate_scale: Vec3::new(0.1, 30.0, 1.0),

            ground_position: Vec3::new(0.0, -11.0, 1.1),
            ground_scale: Vec3::new(20.0, 5.0, 1.0),
            background_scale: Vec3::new(20.0, 20.0, 1.0),

            collider_z_offset: COLLIDER_Z_OFFSET,

            digit_row_y: 9.0,
            digit_z: 7.0,
            digit_scale: 1.5,
            digit_spacing: 1.6,
        }
    }
}

fn require_positive(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn require_finite(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn require_finite_vec(field: &'static str, value: Vec3) -> ConfigResult<()> {
    match value.to_array().into_iter().find(|c| !c.is_finite()) {
        Some(c) => Err(ConfigError::NotFinite { field, value: c }),
        None => Ok(()),
    }
}

fn require_positive_vec(field: &'static str, value: Vec3) -> ConfigResult<()> {
    match value.to_array().into_iter().find(|c| !(c.is_finite() && *c > 0.0)) {
        Some(c) => Err(ConfigError::NotPositive { field, value: c }),
        None => Ok(()),
    }
}

impl SimConfig {
    /// Reject configurations that would break pool or physics invariants
    pub fn validate(&self) -> ConfigResult<()> {
        if self.pipe_pairs == 0 {
            return Err(ConfigError::NoPipes);
        }

        for (field, value) in [
            ("gravity", self.gravity),
            ("drag", self.drag),
            ("ceiling_y", self.ceiling_y),
            ("pipe_start_x", self.pipe_start_x),
            ("pipe_z", self.pipe_z),
            ("pipe_recycle_x", self.pipe_recycle_x),
            ("pipe_initial_band", self.pipe_initial_band),
            ("pipe_recycle_band", self.pipe_recycle_band),
            ("collider_z_offset", self.collider_z_offset),
            ("digit_row_y", self.digit_row_y),
            ("digit_z", self.digit_z),
            ("digit_scale", self.digit_scale),
            ("digit_spacing", self.digit_spacing),
        ] {
            require_finite(field, value)?;
        }
        for (field, value) in [
            ("bird_spawn", self.bird_spawn),
            ("pipe_velocity", self.pipe_velocity),
            ("ground_position", self.ground_position),
            ("background_scale", self.background_scale),
        ] {
            require_finite_vec(field, value)?;
        }
        require_positive_vec("bird_scale", self.bird_scale)?;
        require_positive_vec("ground_scale", self.ground_scale)?;
        require_positive_vec("pipe_scale", self.pipe_scale)?;
        require_positive_vec("gate_scale", self.gate_scale)?;

        if self.pipe_start_x <= self.pipe_recycle_x {
            return Err(ConfigError::StartBehindRecycle {
                start: self.pipe_start_x,
                recycle: self.pipe_recycle_x,
            });
        }
        require_positive("pipe_x_spacing", self.pipe_x_spacing)?;
        require_positive("pipe_y_spacing", self.pipe_y_spacing)?;
        require_positive("jump_force", self.jump_force)?;
        require_positive("bird_collider.width", self.bird_collider.0)?;
        require_positive("bird_collider.height", self.bird_collider.1)?;

        if !(self.gravity.is_finite() && self.gravity < 0.0) {
            return Err(ConfigError::GravityNotDownward(self.gravity));
        }
        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return Err(ConfigError::DragOutOfRange(self.drag));
        }
        if !(self.pipe_velocity.x.is_finite() && self.pipe_velocity.x < 0.0) {
            return Err(ConfigError::PipesNotScrolling(self.pipe_velocity.x));
        }
        Ok(())
    }

    /// Parse a (possibly partial) tuning document; missing fields keep defaults
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a tuning file from disk (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(config)
    }

    /// Vertical offset of the pipe centres from the gap centre
    #[inline]
    pub fn pipe_center_offset(&self) -> f32 {
        self.pipe_scale.y * 0.5 + self.pipe_y_spacing * 0.5
    }
}
