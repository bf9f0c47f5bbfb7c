//! Idle motion for the planet: two-axis spin and a gentle vertical bob.

use glam::{Mat4, Vec3};

/// Bob amplitude in world units.
pub const BOB_AMPLITUDE: f32 = 0.1;
/// Bob frequency multiplier on elapsed seconds.
pub const BOB_RATE: f32 = 0.5;
/// Pitch advances at a tenth of the yaw rate.
pub const PITCH_RATIO: f32 = 0.1;

/// Accumulated planet rotation. Yaw and pitch advance per frame; the bob is
/// a pure function of elapsed wall time.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanetMotion {
    pub yaw: f32,
    pub pitch: f32,
}

impl PlanetMotion {
    /// Advance one frame. `rotation_speed` is radians per frame;
    /// `spin_multiplier` doubles the yaw while hovered.
    pub fn advance(&mut self, rotation_speed: f32, spin_multiplier: f32) {
        self.yaw += rotation_speed * spin_multiplier;
        self.pitch += rotation_speed * PITCH_RATIO;
    }

    /// Vertical offset at the given elapsed time in seconds.
    pub fn bob_offset(elapsed_seconds: f32) -> f32 {
        (elapsed_seconds * BOB_RATE).sin() * BOB_AMPLITUDE
    }

    /// Model matrix for the planet body: bob translation, then rotation,
    /// then uniform scale.
    pub fn model_matrix(&self, elapsed_seconds: f32, scale: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, Self::bob_offset(elapsed_seconds), 0.0))
            * Mat4::from_rotation_y(self.yaw)
            * Mat4::from_rotation_x(self.pitch)
            * Mat4::from_scale(Vec3::splat(scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_doubles_yaw_only() {
        let mut idle = PlanetMotion::default();
        let mut hovered = PlanetMotion::default();
        for _ in 0..10 {
            idle.advance(0.01, 1.0);
            hovered.advance(0.01, 2.0);
        }
        assert!((hovered.yaw - idle.yaw * 2.0).abs() < 1e-6);
        assert!((hovered.pitch - idle.pitch).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_tracks_tenth_of_yaw_rate() {
        let mut motion = PlanetMotion::default();
        motion.advance(0.01, 1.0);
        assert!((motion.pitch - 0.001).abs() < 1e-7);
    }

    #[test]
    fn test_bob_is_bounded_and_periodic() {
        for t in [0.0_f32, 1.0, 3.5, 100.0] {
            assert!(PlanetMotion::bob_offset(t).abs() <= BOB_AMPLITUDE + 1e-6);
        }
        let period = std::f32::consts::TAU / BOB_RATE;
        assert!(
            (PlanetMotion::bob_offset(1.0) - PlanetMotion::bob_offset(1.0 + period)).abs() < 1e-4
        );
    }

    #[test]
    fn test_model_matrix_applies_scale() {
        let motion = PlanetMotion::default();
        let m = motion.model_matrix(0.0, 1.2);
        let p = m.transform_point3(Vec3::X);
        assert!((p.length() - 1.2).abs() < 1e-5);
    }
}
