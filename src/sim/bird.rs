//! The player-controlled bird

use glam::Vec3;

use super::collider::{BoxCollider, Collider};
use super::transform::Transform;
use crate::scene::{MeshHandle, Sprite, TextureHandle};
use crate::tuning::SimConfig;

#[derive(Debug, Clone)]
pub struct Bird {
    pub sprite: Sprite,
    pub collider: Collider,
    pub velocity: Vec3,
}

impl Bird {
    pub fn new(config: &SimConfig, mesh: MeshHandle, texture: TextureHandle) -> Self {
        let (w, h) = config.bird_collider;
        let mut bird = Self {
            sprite: Sprite::new(mesh, texture),
            collider: Collider::new(BoxCollider::new(w, h), Transform::new()),
            velocity: Vec3::ZERO,
        };
        bird.sprite.transform.set_scale(config.bird_scale);
        bird.respawn(config);
        bird
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.sprite.transform
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.sprite.transform.position()
    }

    /// Back to the spawn point with no velocity
    pub fn respawn(&mut self, config: &SimConfig) {
        self.velocity = Vec3::ZERO;
        self.sprite.transform.set_position(config.bird_spawn);
        self.sync_collider(config);
    }

    /// Integrate one frame: drag (only while rising), gravity, jump override, move
    pub fn update(&mut self, dt: f32, jump: bool, config: &SimConfig) {
        if self.velocity.y > 0.0 {
            self.velocity.y *= config.drag;
        }
        self.velocity.y += config.gravity * dt;
        if jump {
            self.velocity.y = config.jump_force;
        }

        self.sprite.transform.translate(self.velocity * dt);
        self.sync_collider(config);
    }

    pub fn sync_collider(&mut self, config: &SimConfig) {
        self.collider
            .follow_scaled(&self.sprite.transform, config.collider_z_offset);
    }
}
