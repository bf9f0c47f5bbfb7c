//! Camera for view and projection matrix generation.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Uniform buffer contents for a camera: view-projection matrix plus the
/// camera's world position (for specular shading).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4], // 64 bytes, mat4x4
    pub camera_pos: [f32; 4],     // xyz + pad
}

/// A perspective look-at camera.
///
/// Projection uses reverse-Z (near and far swapped), matching the rest of
/// the pipeline layer; the renderers here draw sorted transparent layers
/// without depth testing, so this only affects clip-space z values.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up direction.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance (always positive).
    pub near: f32,
    /// Far clip plane distance (always positive, > near).
    pub far: f32,
}

impl Camera {
    /// Compute the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Compute the reverse-Z projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        // Reverse-Z: near plane maps to z=1, far plane maps to z=0,
        // achieved by swapping near/far.
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.far, self.near)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// The normalized direction the camera looks along.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// Update the aspect ratio after a surface resize.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        self.aspect_ratio = width / height.max(1.0);
    }

    /// Convert the camera to a uniform suitable for GPU upload.
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection_matrix().to_cols_array_2d(),
            camera_pos: [self.eye.x, self.eye.y, self.eye.z, 0.0],
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 8.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 75.0_f32.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_looks_at_origin() {
        let camera = Camera::default();
        let forward = camera.forward();
        assert!(forward.x.abs() < 1e-6);
        assert!(forward.y.abs() < 1e-6);
        assert!((forward.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_set_aspect_ratio() {
        let mut camera = Camera::default();
        camera.set_aspect_ratio(800.0, 600.0);
        assert!((camera.aspect_ratio - 4.0 / 3.0).abs() < 1e-6);
        // Zero height must not produce NaN.
        camera.set_aspect_ratio(800.0, 0.0);
        assert!(camera.aspect_ratio.is_finite());
    }

    #[test]
    fn test_view_matrix_moves_target_to_neg_z() {
        let camera = Camera::default();
        let v = camera.view_matrix().transform_point3(camera.target);
        assert!(v.x.abs() < 1e-5);
        assert!(v.y.abs() < 1e-5);
        assert!((v.z + 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_uniform_carries_eye_position() {
        let camera = Camera {
            eye: Vec3::new(1.0, 2.0, 3.0),
            ..Default::default()
        };
        let uniform = camera.to_uniform();
        assert_eq!(uniform.camera_pos, [1.0, 2.0, 3.0, 0.0]);
    }
}
