//! Spatial transform with a lazily rebuilt model matrix
//!
//! Position, scale and orientation are private. Reads hand out copies; every
//! write path (setters and the `*_mut` borrows) marks the cached matrix dirty,
//! so a stale matrix can never be observed through `model_matrix`.

use glam::{Mat4, Quat, Vec3};

#[derive(Debug, Clone)]
pub struct Transform {
    position: Vec3,
    scale: Vec3,
    orientation: Quat,
    /// Cached model matrix, valid iff `!dirty`
    model: Mat4,
    dirty: bool,
    /// Number of times the matrix has been rebuilt
    rebuilds: u64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform (origin, unit scale, no rotation)
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            orientation: Quat::IDENTITY,
            model: Mat4::IDENTITY,
            dirty: false,
            rebuilds: 0,
        }
    }

    pub fn from_position_scale(position: Vec3, scale: Vec3) -> Self {
        let mut t = Self::new();
        t.set_position(position);
        t.set_scale(scale);
        t
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    #[inline]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.dirty = true;
        self.position = position;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.dirty = true;
        self.scale = scale;
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        self.dirty = true;
        self.orientation = orientation;
    }

    /// Mutable view of the position; marks the matrix dirty up front
    pub fn position_mut(&mut self) -> &mut Vec3 {
        self.dirty = true;
        &mut self.position
    }

    /// Mutable view of the scale; marks the matrix dirty up front
    pub fn scale_mut(&mut self) -> &mut Vec3 {
        self.dirty = true;
        &mut self.scale
    }

    /// Mutable view of the orientation; marks the matrix dirty up front
    pub fn orientation_mut(&mut self) -> &mut Quat {
        self.dirty = true;
        &mut self.orientation
    }

    #[inline]
    pub fn translate(&mut self, delta: Vec3) {
        *self.position_mut() += delta;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// How many times the cached matrix has been rebuilt
    #[inline]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Model matrix, rebuilt first if any field changed since the last read
    ///
    /// Built as identity, then scale, then translate, then rotate: the scale
    /// and translation are written into the identity directly and the
    /// rotation is post-multiplied, giving `T * S * R`.
    pub fn model_matrix(&mut self) -> Mat4 {
        if self.dirty {
            let mut m = Mat4::from_scale(self.scale);
            m.w_axis = self.position.extend(1.0);
            self.model = m * Mat4::from_quat(self.orientation);
            self.dirty = false;
            self.rebuilds += 1;
        }
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_mat(a: Mat4, b: Mat4) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn test_new_is_identity_and_clean() {
        let mut t = Transform::new();
        assert!(!t.is_dirty());
        assert_eq!(t.model_matrix(), Mat4::IDENTITY);
        assert_eq!(t.rebuild_count(), 0);
    }

    #[test]
    fn test_write_marks_dirty_and_read_rebuilds() {
        let mut t = Transform::new();
        t.set_position(Vec3::new(1.0, 2.0, 3.0));
        assert!(t.is_dirty());

        let m = t.model_matrix();
        assert!(!t.is_dirty());
        assert_eq!(t.rebuild_count(), 1);
        assert_eq!(m.w_axis, glam::Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn test_consecutive_reads_use_cache() {
        let mut t = Transform::from_position_scale(Vec3::new(4.0, -1.0, 0.5), Vec3::splat(2.0));
        let a = t.model_matrix();
        let b = t.model_matrix();
        assert_eq!(a.to_cols_array(), b.to_cols_array());
        assert_eq!(t.rebuild_count(), 1);
    }

    #[test]
    fn test_mut_borrow_marks_dirty() {
        let mut t = Transform::new();
        t.model_matrix();
        t.position_mut().x += 5.0;
        assert!(t.is_dirty());
        assert_eq!(t.model_matrix().w_axis.x, 5.0);

        t.scale_mut().y = 3.0;
        assert_eq!(t.model_matrix().y_axis.y, 3.0);

        *t.orientation_mut() = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        assert!(t.is_dirty());
        t.model_matrix();
        assert_eq!(t.rebuild_count(), 3);
    }

    #[test]
    fn test_read_accessors_return_copies() {
        let mut t = Transform::new();
        t.model_matrix();
        let mut p = t.position();
        p.x = 100.0;
        assert_eq!(t.position().x, 0.0);
        assert!(!t.is_dirty());
    }

    #[test]
    fn test_matrix_composition_order() {
        let mut t = Transform::new();
        let rot = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        t.set_position(Vec3::new(1.0, 2.0, 0.0));
        t.set_scale(Vec3::new(2.0, 3.0, 1.0));
        t.set_orientation(rot);

        let expected = Mat4::from_translation(Vec3::new(1.0, 2.0, 0.0))
            * Mat4::from_scale(Vec3::new(2.0, 3.0, 1.0))
            * Mat4::from_quat(rot);
        assert!(approx_mat(t.model_matrix(), expected));

        // Rotate first, then scale along world axes, then translate
        let p = t.model_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_translate_accumulates() {
        let mut t = Transform::new();
        t.translate(Vec3::new(-1.0, 0.0, 0.0));
        t.translate(Vec3::new(-1.0, 0.5, 0.0));
        assert_eq!(t.position(), Vec3::new(-2.0, 0.5, 0.0));
        assert_eq!(t.model_matrix().w_axis.truncate(), Vec3::new(-2.0, 0.5, 0.0));
    }
}
