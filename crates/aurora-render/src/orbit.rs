//! Auto-rotating orbit camera with drag-to-rotate and damping.
//!
//! The camera orbits a target at a fixed radius. Zoom and pan are not
//! supported at all: the only user input is a drag that adds angular
//! velocity, which decays exponentially (damping). Without input the orbit
//! advances at a constant auto-rotate speed.

use glam::{Vec2, Vec3};

use crate::camera::Camera;

/// Orbit camera state. Radius is fixed for the lifetime of the control.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Point the camera orbits and looks at.
    pub target: Vec3,
    radius: f32,
    /// Horizontal orbit angle in radians.
    azimuth: f32,
    /// Angle from the +Y pole in radians, in (0, π).
    polar: f32,
    /// Drag-induced angular velocity (azimuth, polar), radians per frame.
    velocity: Vec2,
    /// Auto-rotate speed in radians per second.
    pub auto_rotate_speed: f32,
    /// Multiplier applied to drag input.
    pub rotate_speed: f32,
    /// Velocity decay factor per frame, in (0, 1).
    pub damping: f32,
    /// Allowed polar range. Defaults to nearly the full sphere.
    pub polar_range: (f32, f32),
}

impl OrbitCamera {
    /// Create an orbit control at the given distance from the origin.
    pub fn new(radius: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            radius,
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            velocity: Vec2::ZERO,
            auto_rotate_speed: 0.5,
            rotate_speed: 0.2,
            damping: 0.05,
            polar_range: (0.01, std::f32::consts::PI - 0.01),
        }
    }

    /// Restrict the polar angle to `[min, max]` radians from the +Y pole.
    pub fn with_polar_range(mut self, min: f32, max: f32) -> Self {
        self.polar_range = (min, max);
        self.polar = self.polar.clamp(min, max);
        self
    }

    /// Feed a pointer drag delta in logical pixels. A drag across the full
    /// viewport height sweeps π radians before `rotate_speed` scaling.
    pub fn apply_drag(&mut self, delta: Vec2, viewport_height: f32) {
        let scale = std::f32::consts::PI / viewport_height.max(1.0) * self.rotate_speed;
        self.velocity.x -= delta.x * scale;
        self.velocity.y -= delta.y * scale;
    }

    /// Advance the orbit by one frame: auto-rotation plus decaying drag
    /// velocity. `dt` is the frame time in seconds.
    pub fn update(&mut self, dt: f32) {
        self.azimuth += self.auto_rotate_speed * dt + self.velocity.x;
        self.polar =
            (self.polar + self.velocity.y).clamp(self.polar_range.0, self.polar_range.1);
        self.velocity *= 1.0 - self.damping;
    }

    /// Current eye position on the orbit sphere.
    pub fn eye(&self) -> Vec3 {
        self.target
            + self.radius
                * Vec3::new(
                    self.polar.sin() * self.azimuth.sin(),
                    self.polar.cos(),
                    self.polar.sin() * self.azimuth.cos(),
                )
    }

    /// The fixed orbit radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current azimuth in radians.
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Build a [`Camera`] for this orbit position.
    pub fn camera(&self, fov_y: f32, aspect_ratio: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            fov_y,
            aspect_ratio,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_rotate_advances_azimuth() {
        let mut orbit = OrbitCamera::new(8.0);
        let before = orbit.azimuth();
        orbit.update(1.0 / 60.0);
        assert!(orbit.azimuth() > before);
    }

    #[test]
    fn test_radius_never_changes() {
        let mut orbit = OrbitCamera::new(8.0);
        orbit.apply_drag(Vec2::new(500.0, 300.0), 720.0);
        for _ in 0..100 {
            orbit.update(1.0 / 60.0);
        }
        assert_eq!(orbit.radius(), 8.0);
        let dist = orbit.eye().distance(orbit.target);
        assert!((dist - 8.0).abs() < 1e-4, "eye drifted to {dist}");
    }

    #[test]
    fn test_drag_velocity_decays() {
        let mut orbit = OrbitCamera::new(8.0);
        orbit.auto_rotate_speed = 0.0;
        orbit.apply_drag(Vec2::new(100.0, 0.0), 720.0);
        orbit.update(1.0 / 60.0);
        let first = orbit.azimuth();
        let mut last = first;
        for _ in 0..500 {
            orbit.update(1.0 / 60.0);
            last = orbit.azimuth();
        }
        // Motion must settle: the tail of the decay contributes a bounded total.
        assert!((last - first).abs() < first.abs() * 25.0);
        orbit.update(1.0 / 60.0);
        assert!((orbit.azimuth() - last).abs() < 1e-6);
    }

    #[test]
    fn test_polar_clamp_holds_under_drag() {
        let (min, max) = (
            std::f32::consts::PI / 2.2,
            std::f32::consts::PI / 1.8,
        );
        let mut orbit = OrbitCamera::new(5.0).with_polar_range(min, max);
        orbit.apply_drag(Vec2::new(0.0, 10000.0), 720.0);
        for _ in 0..50 {
            orbit.update(1.0 / 60.0);
            assert!(orbit.polar >= min - 1e-6 && orbit.polar <= max + 1e-6);
        }
    }

    #[test]
    fn test_eye_starts_on_positive_z() {
        let orbit = OrbitCamera::new(8.0);
        let eye = orbit.eye();
        assert!(eye.x.abs() < 1e-6);
        assert!(eye.y.abs() < 1e-5);
        assert!((eye.z - 8.0).abs() < 1e-5);
    }
}
