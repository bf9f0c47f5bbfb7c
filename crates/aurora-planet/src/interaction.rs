//! Hover and click state for the planet.
//!
//! Hovered and clicked are independent booleans: pointer-enter on the
//! sphere sets hovered, pointer-leave clears it, and a click while hovered
//! toggles clicked. Clicked survives the pointer leaving.

use aurora_render::Camera;
use glam::{Vec2, Vec3};

/// Scale multiplier while clicked.
pub const CLICKED_SCALE: f32 = 1.2;
/// Scale multiplier while hovered but not clicked.
pub const HOVERED_SCALE: f32 = 1.1;

/// Emissive intensity while hovered.
pub const HOVERED_EMISSIVE: f32 = 0.1;
/// Emissive intensity at rest.
pub const IDLE_EMISSIVE: f32 = 0.05;

/// Planet interaction state machine.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanetInteraction {
    pub hovered: bool,
    pub clicked: bool,
}

impl PlanetInteraction {
    /// Fold this frame's pointer facts into the state. `over_sphere` is
    /// whether the pointer ray currently hits the planet; `pressed` is
    /// whether the primary button went down this frame.
    pub fn update(&mut self, over_sphere: bool, pressed: bool) {
        self.hovered = over_sphere;
        if pressed && over_sphere {
            self.clicked = !self.clicked;
        }
    }

    /// The scale multiplier for the current state. Clicked wins over
    /// hovered.
    pub fn scale_multiplier(&self) -> f32 {
        if self.clicked {
            CLICKED_SCALE
        } else if self.hovered {
            HOVERED_SCALE
        } else {
            1.0
        }
    }

    pub fn emissive_intensity(&self) -> f32 {
        if self.hovered {
            HOVERED_EMISSIVE
        } else {
            IDLE_EMISSIVE
        }
    }

    /// Rotation speed multiplier: hovering doubles the spin.
    pub fn spin_multiplier(&self) -> f32 {
        if self.hovered { 2.0 } else { 1.0 }
    }
}

/// Cast a ray from the camera through a pointer position (logical pixels)
/// and test it against a sphere. This is how hover detection works without
/// a scene-graph raycaster.
pub fn pointer_hits_sphere(
    camera: &Camera,
    pointer: Vec2,
    viewport: Vec2,
    center: Vec3,
    radius: f32,
) -> bool {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return false;
    }

    let ndc = Vec2::new(
        pointer.x / viewport.x * 2.0 - 1.0,
        1.0 - pointer.y / viewport.y * 2.0,
    );

    let inverse = camera.view_projection_matrix().inverse();
    // Unproject a point on the near plane (reverse-Z puts it at clip z=1).
    let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
    let direction = (near - camera.eye).normalize();

    ray_sphere_intersects(camera.eye, direction, center, radius)
}

fn ray_sphere_intersects(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> bool {
    let to_center = center - origin;
    let projected = to_center.dot(direction);
    if projected < 0.0 {
        return false;
    }
    let closest_sq = to_center.length_squared() - projected * projected;
    closest_sq <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_states() {
        let mut state = PlanetInteraction::default();
        assert_eq!(state.scale_multiplier(), 1.0);

        state.hovered = true;
        assert_eq!(state.scale_multiplier(), HOVERED_SCALE);

        state.clicked = true;
        assert_eq!(state.scale_multiplier(), CLICKED_SCALE);

        // Clicked holds even after the pointer leaves.
        state.hovered = false;
        assert_eq!(state.scale_multiplier(), CLICKED_SCALE);
    }

    #[test]
    fn test_click_toggles_only_over_sphere() {
        let mut state = PlanetInteraction::default();
        state.update(false, true);
        assert!(!state.clicked);

        state.update(true, true);
        assert!(state.clicked);

        state.update(true, true);
        assert!(!state.clicked);
    }

    #[test]
    fn test_hover_drives_emissive_and_spin() {
        let mut state = PlanetInteraction::default();
        assert_eq!(state.emissive_intensity(), IDLE_EMISSIVE);
        assert_eq!(state.spin_multiplier(), 1.0);

        state.update(true, false);
        assert_eq!(state.emissive_intensity(), HOVERED_EMISSIVE);
        assert_eq!(state.spin_multiplier(), 2.0);
    }

    #[test]
    fn test_center_ray_hits_centered_sphere() {
        let camera = Camera::default();
        let viewport = Vec2::new(800.0, 600.0);
        let center = Vec2::new(400.0, 300.0);
        assert!(pointer_hits_sphere(
            &camera,
            center,
            viewport,
            Vec3::ZERO,
            1.0
        ));
    }

    #[test]
    fn test_corner_ray_misses_small_sphere() {
        let camera = Camera::default();
        let viewport = Vec2::new(800.0, 600.0);
        assert!(!pointer_hits_sphere(
            &camera,
            Vec2::new(5.0, 5.0),
            viewport,
            Vec3::ZERO,
            1.0
        ));
    }

    #[test]
    fn test_ray_behind_origin_misses() {
        assert!(!ray_sphere_intersects(
            Vec3::ZERO,
            Vec3::Z,
            Vec3::new(0.0, 0.0, -5.0),
            1.0
        ));
    }
}
