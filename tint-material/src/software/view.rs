use glam::{Mat4, Vec3, Vec4};

/// Camera state shared by every invocation of a draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub clip_from_world: Mat4,
    /// Camera position in world space
    pub world_position: Vec3,
}

impl Default for View {
    fn default() -> Self {
        Self {
            clip_from_world: Mat4::IDENTITY,
            world_position: Vec3::ZERO,
        }
    }
}

impl View {
    /// Right-handed perspective camera at `eye` looking at `target`
    ///
    /// `fov_y` is in radians. Depth maps to [0, 1].
    pub fn look_at(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let projection = Mat4::perspective_rh(fov_y, aspect, near, far);
        let view = Mat4::look_at_rh(eye, target, up);
        Self {
            clip_from_world: projection * view,
            world_position: eye,
        }
    }

    #[inline]
    pub fn world_to_clip(&self, world_position: Vec3) -> Vec4 {
        self.clip_from_world * world_position.extend(1.0)
    }
}
