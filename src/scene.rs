//! Opaque asset handles and draw-list types
//!
//! The core never loads or interprets assets. The host hands in ids for the
//! textures and meshes it has loaded and gets them back, paired with model
//! matrices, in a `DrawItem` list each frame.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::sim::Transform;

/// Host-side texture id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u32);

/// Host-side mesh id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeshHandle(pub u32);

/// Every handle a session forwards to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAssets {
    pub quad: MeshHandle,
    pub bird: TextureHandle,
    pub pipe: TextureHandle,
    pub background: TextureHandle,
    pub ground: TextureHandle,
    /// Textures for digits 0-9, indexed by digit
    pub digits: [TextureHandle; 10],
}

impl Default for SceneAssets {
    /// Sequential placeholder ids, useful for headless runs
    fn default() -> Self {
        Self {
            quad: MeshHandle(0),
            bird: TextureHandle(1),
            pipe: TextureHandle(2),
            background: TextureHandle(3),
            ground: TextureHandle(4),
            digits: std::array::from_fn(|i| TextureHandle(10 + i as u32)),
        }
    }
}

/// A drawable entity: a transform plus the handles it is drawn with
#[derive(Debug, Clone)]
pub struct Sprite {
    pub transform: Transform,
    pub mesh: MeshHandle,
    pub texture: TextureHandle,
}

impl Sprite {
    pub fn new(mesh: MeshHandle, texture: TextureHandle) -> Self {
        Self {
            transform: Transform::new(),
            mesh,
            texture,
        }
    }

    /// Draw item for the current pose (refreshes the cached matrix if needed)
    pub fn draw_item(&mut self) -> DrawItem {
        DrawItem::new(self.transform.model_matrix(), self.mesh, self.texture)
    }
}

/// One quad to draw, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawItem {
    /// Column-major model matrix
    pub model: [f32; 16],
    pub texture: u32,
    pub mesh: u32,
}

impl DrawItem {
    pub fn new(model: Mat4, mesh: MeshHandle, texture: TextureHandle) -> Self {
        Self {
            model: model.to_cols_array(),
            texture: texture.0,
            mesh: mesh.0,
        }
    }

    #[inline]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array(&self.model)
    }
}
