//! Companion layers around the planet: atmosphere halo, cloud shell, and
//! the background star scatter.

use aurora_render::PointInstance;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Atmosphere shell scale relative to the planet radius.
pub const ATMOSPHERE_SCALE: f32 = 1.05;
/// Atmosphere tint, soft blue.
pub const ATMOSPHERE_COLOR: [f32; 3] = [
    0x4a as f32 / 255.0,
    0x90 as f32 / 255.0,
    0xe2 as f32 / 255.0,
];
pub const ATMOSPHERE_OPACITY: f32 = 0.1;
/// Atmosphere y rotation per frame.
pub const ATMOSPHERE_SPIN_RATE: f32 = 0.005;

/// Cloud shell scale relative to the planet radius.
pub const CLOUD_SCALE: f32 = 1.01;
pub const CLOUD_OPACITY: f32 = 0.2;
pub const CLOUD_SPIN_RATE: f32 = 0.002;

/// Background star scatter.
pub const STAR_COUNT: usize = 500;
pub const STAR_EXTENT: f32 = 15.0;
pub const STAR_SIZE: f32 = 0.01;
pub const STAR_OPACITY: f32 = 0.6;
pub const STAR_SPIN_RATE: f32 = 0.001;

/// Accumulated per-layer y rotation.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayerSpin {
    pub atmosphere: f32,
    pub clouds: f32,
    pub stars: f32,
}

impl LayerSpin {
    pub fn advance(&mut self) {
        self.atmosphere += ATMOSPHERE_SPIN_RATE;
        self.clouds += CLOUD_SPIN_RATE;
        self.stars += STAR_SPIN_RATE;
    }
}

/// Scatter the background stars through a cube around the scene. White,
/// uniform size, deterministic for a seed.
pub fn generate_stars(seed: u64) -> Vec<PointInstance> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut stars = Vec::with_capacity(STAR_COUNT);
    for _ in 0..STAR_COUNT {
        stars.push(PointInstance {
            position: [
                (rng.random::<f32>() - 0.5) * STAR_EXTENT,
                (rng.random::<f32>() - 0.5) * STAR_EXTENT,
                (rng.random::<f32>() - 0.5) * STAR_EXTENT,
            ],
            size: STAR_SIZE,
            color: [1.0, 1.0, 1.0],
            opacity: STAR_OPACITY,
        });
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_scatter_bounds() {
        let stars = generate_stars(5);
        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            for axis in star.position {
                assert!(axis.abs() <= STAR_EXTENT / 2.0);
            }
            assert_eq!(star.color, [1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn test_star_scatter_deterministic() {
        let a = generate_stars(123);
        let b = generate_stars(123);
        assert_eq!(a.len(), b.len());
        for (sa, sb) in a.iter().zip(&b) {
            assert_eq!(sa.position, sb.position);
        }
    }

    #[test]
    fn test_layer_spins_advance_at_their_rates() {
        let mut spin = LayerSpin::default();
        for _ in 0..100 {
            spin.advance();
        }
        assert!((spin.atmosphere - 0.5).abs() < 1e-5);
        assert!((spin.clouds - 0.2).abs() < 1e-5);
        assert!((spin.stars - 0.1).abs() < 1e-5);
    }
}
