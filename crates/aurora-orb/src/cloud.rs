//! Background particle cloud: 1000 points scattered through a cube, tinted
//! in a narrow cosmic hue band.

use aurora_render::PointInstance;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of cloud particles.
pub const PARTICLE_COUNT: usize = 1000;
/// Side length of the scatter cube, centered on the origin.
pub const CLOUD_EXTENT: f32 = 30.0;
/// World-space particle size.
pub const PARTICLE_SIZE: f32 = 0.05;
/// Shared particle opacity.
pub const PARTICLE_OPACITY: f32 = 0.4;

/// Generate the cloud. Deterministic for a given seed; the instances are
/// static and only the cloud's model rotation animates.
pub fn generate_cloud(seed: u64) -> Vec<PointInstance> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut particles = Vec::with_capacity(PARTICLE_COUNT);

    for _ in 0..PARTICLE_COUNT {
        let position = [
            (rng.random::<f32>() - 0.5) * CLOUD_EXTENT,
            (rng.random::<f32>() - 0.5) * CLOUD_EXTENT,
            (rng.random::<f32>() - 0.5) * CLOUD_EXTENT,
        ];

        // Hue in [0.5, 0.7): cyan through violet.
        let hue = rng.random::<f32>() * 0.2 + 0.5;
        let lightness = rng.random::<f32>() * 0.3 + 0.4;
        let color = hsl_to_rgb(hue, 0.6, lightness);

        particles.push(PointInstance {
            position,
            size: PARTICLE_SIZE,
            color,
            opacity: PARTICLE_OPACITY,
        });
    }

    particles
}

/// Convert an HSL color (all components in [0, 1]) to linear-ish RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_count_and_bounds() {
        let cloud = generate_cloud(1);
        assert_eq!(cloud.len(), PARTICLE_COUNT);
        let half = CLOUD_EXTENT / 2.0;
        for p in &cloud {
            for axis in p.position {
                assert!(axis >= -half && axis < half);
            }
            assert_eq!(p.size, PARTICLE_SIZE);
            assert_eq!(p.opacity, PARTICLE_OPACITY);
        }
    }

    #[test]
    fn test_cloud_is_deterministic() {
        let a = generate_cloud(99);
        let b = generate_cloud(99);
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.color, pb.color);
        }
    }

    #[test]
    fn test_hsl_primaries() {
        let red = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((red[0] - 1.0).abs() < 1e-5);
        assert!(red[1].abs() < 1e-5);
        assert!(red[2].abs() < 1e-5);

        let gray = hsl_to_rgb(0.3, 0.0, 0.25);
        assert_eq!(gray, [0.25, 0.25, 0.25]);
    }

    #[test]
    fn test_cloud_hues_sit_in_cosmic_band() {
        // Hue [0.5, 0.7) at saturation 0.6 always has blue >= red.
        for p in generate_cloud(7) {
            assert!(p.color[2] >= p.color[0] - 1e-5);
        }
    }
}
