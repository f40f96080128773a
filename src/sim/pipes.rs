//! Fixed-size pool of scrolling pipe pairs
//!
//! The pool is laid out as a flat sequence where index `2k` is the top pipe
//! of pair `k` and `2k + 1` its bottom pipe. Pairs are never added or
//! removed; once a pair scrolls past the left threshold it is moved back to
//! the right end of the line with a fresh vertical offset.

use glam::{EulerRot, Quat, Vec3};
use rand::Rng;

use super::collider::{BoxCollider, Collider};
use super::transform::Transform;
use crate::error::{ConfigError, ConfigResult};
use crate::random_offset;
use crate::scene::{DrawItem, MeshHandle, Sprite, TextureHandle};
use crate::tuning::SimConfig;

/// Stable identity of a pair's scoring gate (the pair index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GateId(pub usize);

/// One pipe sprite with its colliders
#[derive(Debug, Clone)]
pub struct Pipe {
    pub sprite: Sprite,
    /// Solid collider; touching it loses the run
    pub body: Collider,
    /// Thin scoring collider spanning the gap (top pipes only)
    pub gate: Option<Collider>,
}

impl Pipe {
    fn new(is_top: bool, config: &SimConfig, mesh: MeshHandle, texture: TextureHandle) -> Self {
        let mut sprite = Sprite::new(mesh, texture);
        let orientation = if is_top {
            Quat::from_euler(EulerRot::XYZ, 0.0, 90f32.to_radians(), 180f32.to_radians())
        } else {
            Quat::from_euler(EulerRot::XYZ, 0.0, 90f32.to_radians(), 0.0)
        };
        sprite.transform.set_orientation(orientation);
        sprite.transform.set_scale(config.pipe_scale);

        let mut body_pose = Transform::new();
        body_pose.set_scale(config.pipe_scale);
        let body = Collider::new(BoxCollider::new(1.0, 1.0), body_pose);

        let gate = is_top.then(|| {
            let mut gate_pose = Transform::new();
            gate_pose.set_scale(config.gate_scale);
            Collider::new(BoxCollider::new(1.0, 1.0), gate_pose)
        });

        Self { sprite, body, gate }
    }

    #[inline]
    pub fn is_top(&self) -> bool {
        self.gate.is_some()
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.sprite.transform.position()
    }

    fn sync_colliders(&mut self, z_offset: f32) {
        self.body.follow(&self.sprite.transform, z_offset);
        if let Some(gate) = &mut self.gate {
            gate.follow(&self.sprite.transform, 0.0);
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipePool {
    pipes: Vec<Pipe>,
}

impl PipePool {
    /// Build `config.pipe_pairs` pairs on the starting ladder
    pub fn new<R: Rng>(
        config: &SimConfig,
        mesh: MeshHandle,
        texture: TextureHandle,
        rng: &mut R,
    ) -> ConfigResult<Self> {
        if config.pipe_pairs == 0 {
            return Err(ConfigError::NoPipes);
        }

        let mut pipes = Vec::with_capacity(config.pipe_pairs * 2);
        for _ in 0..config.pipe_pairs {
            pipes.push(Pipe::new(true, config, mesh, texture));
            pipes.push(Pipe::new(false, config, mesh, texture));
        }

        let mut pool = Self { pipes };
        pool.reseed(config, rng);
        Ok(pool)
    }

    /// Put every pair back on the starting ladder with fresh offsets
    pub fn reseed<R: Rng>(&mut self, config: &SimConfig, rng: &mut R) {
        for pair in 0..self.pair_count() {
            let x = config.pipe_start_x + pair as f32 * config.pipe_x_spacing;
            let offset = random_offset(rng, config.pipe_initial_band);
            self.place_pair(pair, x, offset, config);
        }
    }

    fn place_pair(&mut self, pair: usize, x: f32, offset: f32, config: &SimConfig) {
        let dy = config.pipe_center_offset();
        let (top, bottom) = (2 * pair, 2 * pair + 1);

        self.pipes[top]
            .sprite
            .transform
            .set_position(Vec3::new(x, offset + dy, config.pipe_z));
        self.pipes[bottom]
            .sprite
            .transform
            .set_position(Vec3::new(x, offset - dy, config.pipe_z));

        self.pipes[top].sync_colliders(config.collider_z_offset);
        self.pipes[bottom].sync_colliders(config.collider_z_offset);
    }

    /// Scroll every pipe by `velocity * dt` and drag its colliders along
    pub fn advance(&mut self, dt: f32, velocity: Vec3, z_offset: f32) {
        let delta = velocity * dt;
        for pipe in &mut self.pipes {
            pipe.sprite.transform.translate(delta);
            pipe.sync_colliders(z_offset);
        }
    }

    /// Move pairs that scrolled past the threshold to the right end
    ///
    /// The rightmost x is sampled once before the pass, so pairs recycled in
    /// the same call all target `max_x + spacing`. Returns recycled pair indices.
    pub fn recycle_if_needed<R: Rng>(
        &mut self,
        config: &SimConfig,
        rng: &mut R,
    ) -> Vec<usize> {
        let max_x = self.max_x();
        let mut recycled = Vec::new();

        for pair in 0..self.pair_count() {
            if self.pipes[2 * pair].position().x > config.pipe_recycle_x {
                continue;
            }

            let offset = random_offset(rng, config.pipe_recycle_band);
            self.place_pair(pair, max_x + config.pipe_x_spacing, offset, config);
            recycled.push(pair);
        }

        recycled
    }

    /// Rightmost pipe x
    pub fn max_x(&self) -> f32 {
        self.pipes
            .iter()
            .map(|p| p.position().x)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    #[inline]
    pub fn pair_count(&self) -> usize {
        self.pipes.len() / 2
    }

    #[inline]
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    /// Top and bottom pipe of a pair
    pub fn pair(&self, pair: usize) -> (&Pipe, &Pipe) {
        (&self.pipes[2 * pair], &self.pipes[2 * pair + 1])
    }

    /// X of each pair, in pool order
    pub fn pair_xs(&self) -> Vec<f32> {
        self.pipes.iter().step_by(2).map(|p| p.position().x).collect()
    }

    /// Y of the centre of a pair's gap
    pub fn gap_center(&self, pair: usize) -> f32 {
        let (top, bottom) = self.pair(pair);
        (top.position().y + bottom.position().y) * 0.5
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Collider> {
        self.pipes.iter().map(|p| &p.body)
    }

    pub fn gates(&self) -> impl Iterator<Item = (GateId, &Collider)> {
        self.pipes
            .iter()
            .step_by(2)
            .enumerate()
            .filter_map(|(pair, p)| p.gate.as_ref().map(|g| (GateId(pair), g)))
    }

    pub fn draw_items(&mut self) -> impl Iterator<Item = DrawItem> + '_ {
        self.pipes.iter_mut().map(|p| p.sprite.draw_item())
    }

    /// Place a pair at `x` with its gap centred on `offset`
    #[cfg(test)]
    pub(crate) fn set_pair(&mut self, pair: usize, x: f32, offset: f32, config: &SimConfig) {
        self.place_pair(pair, x, offset, config);
    }
}
