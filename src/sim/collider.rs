//! Axis-aligned box colliders
//!
//! A `BoxCollider` only knows its unscaled width and height. Its corners are
//! derived on demand from whichever `Transform` it is asked about, so the box
//! never holds a stale copy of the pose it tracks.

use glam::{Vec2, Vec3};

use super::transform::Transform;

/// Fixed-size box shape; corners are `center ± extent * scale / 2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    width: f32,
    height: f32,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn bottom_left(&self, pose: &Transform) -> Vec2 {
        let pos = pose.position();
        let scale = pose.scale();
        Vec2::new(
            pos.x - self.width * scale.x * 0.5,
            pos.y - self.height * scale.y * 0.5,
        )
    }

    pub fn top_right(&self, pose: &Transform) -> Vec2 {
        let pos = pose.position();
        let scale = pose.scale();
        Vec2::new(
            pos.x + self.width * scale.x * 0.5,
            pos.y + self.height * scale.y * 0.5,
        )
    }

    /// Snapshot of the box at the given pose
    pub fn bounds(&self, pose: &Transform) -> Aabb {
        Aabb {
            min: self.bottom_left(pose),
            max: self.top_right(pose),
        }
    }
}

/// World-space box corners at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap: boxes that only touch along an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        overlaps(self, other)
    }
}

/// Strict AABB overlap test
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && b.min.y < a.max.y && a.min.y < b.max.y
}

/// A box shape paired with the pose it is tested at
///
/// The pose is a separate transform (so the collider can be drawn as a debug
/// quad) that is re-synced from its owner with [`Collider::follow`].
#[derive(Debug, Clone)]
pub struct Collider {
    pub shape: BoxCollider,
    pose: Transform,
}

impl Collider {
    pub fn new(shape: BoxCollider, pose: Transform) -> Self {
        Self { shape, pose }
    }

    #[inline]
    pub fn pose(&self) -> &Transform {
        &self.pose
    }

    #[inline]
    pub fn pose_mut(&mut self) -> &mut Transform {
        &mut self.pose
    }

    /// Move to the owner's position, nudged along z
    pub fn follow(&mut self, owner: &Transform, z_offset: f32) {
        self.pose
            .set_position(owner.position() + Vec3::new(0.0, 0.0, z_offset));
    }

    /// Move to the owner's position and copy its scale
    pub fn follow_scaled(&mut self, owner: &Transform, z_offset: f32) {
        self.follow(owner, z_offset);
        self.pose.set_scale(owner.scale());
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.shape.bounds(&self.pose)
    }

    #[inline]
    pub fn overlaps(&self, other: &Collider) -> bool {
        overlaps(&self.bounds(), &other.bounds())
    }
}
