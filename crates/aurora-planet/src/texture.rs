//! Seeded equirectangular surface texture for the planet.
//!
//! Bakes an RGBA map once at scene startup: fractal simplex elevation
//! sampled on the unit sphere (so the seam wraps cleanly), classified into
//! ocean, continents, desert, and polar ice.

use glam::DVec3;
use noise::{NoiseFn, Simplex};

/// Baked texture width in texels. Height is half of this.
pub const TEXTURE_WIDTH: u32 = 1024;
pub const TEXTURE_HEIGHT: u32 = 512;

const OCTAVES: u32 = 5;
const BASE_FREQUENCY: f64 = 1.6;
const LACUNARITY: f64 = 2.0;
const PERSISTENCE: f64 = 0.5;

/// Elevation above which a sample is land.
const SEA_LEVEL: f64 = 0.05;
/// Absolute latitude (0..1) above which ice takes over, before jitter.
const ICE_LATITUDE: f64 = 0.82;

const OCEAN_SHALLOW: [f64; 3] = srgb(0x1e, 0x40, 0xaf);
const OCEAN_DEEP: [f64; 3] = srgb(0x0f, 0x17, 0x2a);
const LAND_LUSH: [f64; 3] = srgb(0x65, 0xa3, 0x0d);
const LAND_DARK: [f64; 3] = srgb(0x36, 0x53, 0x14);
const DESERT_LIGHT: [f64; 3] = srgb(0xfb, 0xbf, 0x24);
const DESERT_DARK: [f64; 3] = srgb(0xd9, 0x77, 0x06);
const ICE_BRIGHT: [f64; 3] = srgb(0xf8, 0xfa, 0xfc);
const ICE_DIM: [f64; 3] = srgb(0xe2, 0xe8, 0xf0);

const fn srgb(r: u8, g: u8, b: u8) -> [f64; 3] {
    [r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0]
}

/// Bakes planet surface colors from layered simplex noise.
pub struct SurfaceBaker {
    elevation: Simplex,
    climate: Simplex,
}

impl SurfaceBaker {
    pub fn new(seed: u64) -> Self {
        Self {
            elevation: Simplex::new(seed as u32),
            climate: Simplex::new(seed.wrapping_add(0x5EA5_0A11) as u32),
        }
    }

    /// Bake the full RGBA8 texture, row-major, `TEXTURE_WIDTH * TEXTURE_HEIGHT`
    /// texels.
    pub fn bake(&self) -> Vec<u8> {
        let mut data =
            Vec::with_capacity((TEXTURE_WIDTH * TEXTURE_HEIGHT * 4) as usize);

        for y in 0..TEXTURE_HEIGHT {
            let v = (y as f64 + 0.5) / TEXTURE_HEIGHT as f64;
            let polar = v * std::f64::consts::PI;

            for x in 0..TEXTURE_WIDTH {
                let u = (x as f64 + 0.5) / TEXTURE_WIDTH as f64;
                let azimuth = u * std::f64::consts::TAU;

                let point = DVec3::new(
                    polar.sin() * azimuth.cos(),
                    polar.cos(),
                    polar.sin() * azimuth.sin(),
                );

                let color = self.sample_color(point);
                data.push((color[0] * 255.0) as u8);
                data.push((color[1] * 255.0) as u8);
                data.push((color[2] * 255.0) as u8);
                data.push(255);
            }
        }

        data
    }

    /// Color for a unit-sphere surface point.
    pub fn sample_color(&self, point: DVec3) -> [f64; 3] {
        let elevation = self.fbm(&self.elevation, point);
        let climate = self.fbm(&self.climate, point * 0.7);

        // Latitude in [0, 1] from equator to pole, with noisy coastlines.
        let latitude = point.y.abs() + climate * 0.06;
        if latitude > ICE_LATITUDE {
            let t = ((latitude - ICE_LATITUDE) / (1.0 - ICE_LATITUDE)).clamp(0.0, 1.0);
            return lerp3(ICE_DIM, ICE_BRIGHT, t);
        }

        if elevation > SEA_LEVEL {
            let height = ((elevation - SEA_LEVEL) / (1.0 - SEA_LEVEL)).clamp(0.0, 1.0);
            // Hot dry regions become desert.
            if climate > 0.25 {
                return lerp3(DESERT_DARK, DESERT_LIGHT, height);
            }
            return lerp3(LAND_LUSH, LAND_DARK, height);
        }

        let depth = ((SEA_LEVEL - elevation) / (SEA_LEVEL + 1.0)).clamp(0.0, 1.0);
        lerp3(OCEAN_SHALLOW, OCEAN_DEEP, depth)
    }

    fn fbm(&self, noise: &Simplex, point: DVec3) -> f64 {
        let mut total = 0.0;
        let mut frequency = BASE_FREQUENCY;
        let mut amplitude = 1.0;
        let mut range = 0.0;

        for _ in 0..OCTAVES {
            total += noise.get([
                point.x * frequency,
                point.y * frequency,
                point.z * frequency,
            ]) * amplitude;
            range += amplitude;
            frequency *= LACUNARITY;
            amplitude *= PERSISTENCE;
        }

        total / range
    }
}

fn lerp3(a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bake_size() {
        let baker = SurfaceBaker::new(1);
        let data = baker.bake();
        assert_eq!(data.len(), (TEXTURE_WIDTH * TEXTURE_HEIGHT * 4) as usize);
    }

    #[test]
    fn test_bake_is_deterministic() {
        let a = SurfaceBaker::new(42).bake();
        let b = SurfaceBaker::new(42).bake();
        assert_eq!(a, b);
    }

    #[test]
    fn test_poles_are_icy() {
        let baker = SurfaceBaker::new(7);
        let north = baker.sample_color(DVec3::new(0.0, 1.0, 0.0));
        // Ice is near-white: every channel bright.
        for channel in north {
            assert!(channel > 0.8, "pole channel too dark: {channel}");
        }
    }

    #[test]
    fn test_colors_stay_in_range() {
        let baker = SurfaceBaker::new(3);
        for i in 0..64 {
            let theta = i as f64 * 0.1;
            let point =
                DVec3::new(theta.cos() * 0.8, (i as f64 / 64.0) * 2.0 - 1.0, theta.sin() * 0.8)
                    .normalize();
            for channel in baker.sample_color(point) {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_seam_columns_match() {
        // u=0 and u=1 map to the same sphere point, so the noise must agree.
        let baker = SurfaceBaker::new(9);
        let polar = std::f64::consts::FRAC_PI_2;
        let a = baker.sample_color(DVec3::new(
            polar.sin() * 0.0_f64.cos(),
            polar.cos(),
            polar.sin() * 0.0_f64.sin(),
        ));
        let b = baker.sample_color(DVec3::new(
            polar.sin() * std::f64::consts::TAU.cos(),
            polar.cos(),
            polar.sin() * std::f64::consts::TAU.sin(),
        ));
        for (ca, cb) in a.iter().zip(&b) {
            assert!((ca - cb).abs() < 1e-9);
        }
    }
}
