//! Light rig for the orb core: ambient plus two point lights orbiting in
//! circles of different radius and phase.

use aurora_render::LightsUniform;

const VIOLET: [f32; 3] = [
    0x8b as f32 / 255.0,
    0x5c as f32 / 255.0,
    0xf6 as f32 / 255.0,
];
const BLUE: [f32; 3] = [
    0x3b as f32 / 255.0,
    0x82 as f32 / 255.0,
    0xf6 as f32 / 255.0,
];

/// Build this frame's light rig from the scene clock. The first light
/// circles at radius 3, the second at radius 4 in anti-phase, both at z = 5.
pub fn orb_lights(time: f32) -> LightsUniform {
    let p0 = [(time * 0.5).sin() * 3.0, (time * 0.5).cos() * 3.0, 5.0];
    let phase = time * 0.3 + std::f32::consts::PI;
    let p1 = [phase.sin() * 4.0, phase.cos() * 4.0, 5.0];

    LightsUniform {
        ambient: [1.0, 1.0, 1.0, 0.3],
        // No directional light in this rig.
        dir_direction: [0.0, 1.0, 0.0, 0.0],
        dir_color: [0.0; 4],
        point0_position: [p0[0], p0[1], p0[2], 1.0],
        point0_color: [VIOLET[0], VIOLET[1], VIOLET[2], 1.0],
        point1_position: [p1[0], p1[1], p1[2], 0.8],
        point1_color: [BLUE[0], BLUE[1], BLUE[2], 1.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lights_orbit_on_fixed_radii()  {
        for time in [0.0, 1.7, 12.3] {
            let rig = orb_lights(time);
            let r0 = (rig.point0_position[0].powi(2) + rig.point0_position[1].powi(2)).sqrt();
            let r1 = (rig.point1_position[0].powi(2) + rig.point1_position[1].powi(2)).sqrt();
            assert!((r0 - 3.0).abs() < 1e-4);
            assert!((r1 - 4.0).abs() < 1e-4);
            assert_eq!(rig.point0_position[2], 5.0);
            assert_eq!(rig.point1_position[2], 5.0);
        }
    }

    #[test]
    fn test_directional_light_is_off() {
        let rig = orb_lights(0.5);
        assert_eq!(rig.dir_direction[3], 0.0);
    }

    #[test]
    fn test_second_light_starts_in_antiphase() {
        let rig = orb_lights(0.0);
        // sin(π) = 0, cos(π) = -1.
        assert!(rig.point1_position[0].abs() < 1e-5);
        assert!((rig.point1_position[1] + 4.0).abs() < 1e-5);
    }
}
