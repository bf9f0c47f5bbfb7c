//! Starfield particle simulation: deterministic seeding, downward drift with
//! wrap-around, twinkle, and pointer attraction.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::palette::ATTRACTION_RADIUS;

/// Default logical pixels of surface area per star.
pub const AREA_PER_STAR: f32 = 5000.0;
/// Twinkle phase advance per frame.
pub const TWINKLE_STEP: f32 = 0.02;

/// A single drifting star.
#[derive(Clone, Debug)]
pub struct Star {
    /// Current position in logical pixels, y down.
    pub position: Vec2,
    /// Seeded size in logical pixels, before pointer inflation.
    pub size: f32,
    /// Seeded opacity, before twinkle and pointer inflation.
    pub opacity: f32,
    /// Downward drift in pixels per frame.
    pub speed: f32,
    /// Twinkle phase in radians.
    pub twinkle_phase: f32,
    /// Spawn position, refreshed on wrap-around.
    pub original_position: Vec2,
}

impl Star {
    /// Twinkle factor in [0, 1] at the current phase.
    pub fn twinkle(&self) -> f32 {
        0.5 + 0.5 * self.twinkle_phase.sin()
    }
}

/// The simulated field. Star count is fixed at construction; stars are only
/// ever repositioned, never added or removed.
pub struct StarField {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    rng: ChaCha8Rng,
}

/// Per-star pointer influence for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInfluence {
    /// Distance from the star to the pointer.
    pub distance: f32,
    /// Size and opacity multiplier, 1.0 outside the attraction radius and up
    /// to 3.0 at distance zero.
    pub factor: f32,
}

impl PointerInfluence {
    fn at(distance: f32, attracting: bool) -> Self {
        if attracting && distance < ATTRACTION_RADIUS {
            let strength = (ATTRACTION_RADIUS - distance) / ATTRACTION_RADIUS;
            Self {
                distance,
                factor: 1.0 + strength * 2.0,
            }
        } else {
            Self {
                distance,
                factor: 1.0,
            }
        }
    }
}

impl StarField {
    /// Seed a field sized to the given logical surface. Star count is
    /// `floor(area / area_per_star)`.
    pub fn new(seed: u64, width: f32, height: f32, area_per_star: f32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let count = ((width * height) / area_per_star).floor() as usize;
        log::debug!("seeding starfield: {count} stars for {width}x{height}");

        let mut stars = Vec::with_capacity(count);
        for _ in 0..count {
            let position = Vec2::new(
                rng.random::<f32>() * width,
                rng.random::<f32>() * height,
            );
            stars.push(Star {
                position,
                size: rng.random::<f32>() * 2.0 + 0.2,
                opacity: rng.random::<f32>() * 0.8 + 0.1,
                speed: rng.random::<f32>() * 0.2 + 0.02,
                twinkle_phase: rng.random::<f32>() * std::f32::consts::TAU,
                original_position: position,
            });
        }

        Self {
            stars,
            width,
            height,
            rng,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    /// Update the wrap bounds after a resize. Existing stars keep their
    /// positions; only respawns use the new extent.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance one frame. `cursor` is the last known pointer position in
    /// logical pixels; distances are always measured against it, so the
    /// proximity palette lingers after the pointer leaves. `attracting` is
    /// true only while the pointer is over the surface, and gates the pull
    /// and the size/opacity inflation. Returns the per-star influence so the
    /// draw pass can reuse the distances without recomputing them.
    pub fn update(&mut self, cursor: Vec2, attracting: bool) -> Vec<PointerInfluence> {
        let mut influences = Vec::with_capacity(self.stars.len());

        for star in &mut self.stars {
            let offset = cursor - star.position;
            let distance = offset.length();
            let influence = PointerInfluence::at(distance, attracting);

            if attracting && distance < ATTRACTION_RADIUS {
                let strength = (ATTRACTION_RADIUS - distance) / ATTRACTION_RADIUS;
                let force = strength * 0.5;
                star.position += offset * force * 0.01;
            }

            star.position.y += star.speed;
            star.twinkle_phase += TWINKLE_STEP;

            if star.position.y > self.height {
                star.position.y = 0.0;
                star.position.x = self.rng.random::<f32>() * self.width;
                star.original_position = star.position;
            }

            influences.push(influence);
        }

        influences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_count_from_area() {
        let field = StarField::new(7, 1000.0, 500.0, AREA_PER_STAR);
        assert_eq!(field.star_count(), 100);

        let field = StarField::new(7, 99.0, 50.0, AREA_PER_STAR);
        assert_eq!(field.star_count(), 0);
    }

    #[test]
    fn test_area_per_star_scales_density() {
        let dense = StarField::new(7, 1000.0, 500.0, 2500.0);
        let sparse = StarField::new(7, 1000.0, 500.0, 10000.0);
        assert_eq!(dense.star_count(), 200);
        assert_eq!(sparse.star_count(), 50);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = StarField::new(42, 800.0, 600.0, AREA_PER_STAR);
        let b = StarField::new(42, 800.0, 600.0, AREA_PER_STAR);
        for (sa, sb) in a.stars().iter().zip(b.stars()) {
            assert_eq!(sa.position, sb.position);
            assert_eq!(sa.size, sb.size);
            assert_eq!(sa.speed, sb.speed);
        }
    }

    #[test]
    fn test_stars_seed_inside_surface() {
        let field = StarField::new(3, 640.0, 480.0, AREA_PER_STAR);
        for star in field.stars() {
            assert!((0.0..640.0).contains(&star.position.x));
            assert!((0.0..480.0).contains(&star.position.y));
            assert!((0.2..2.2).contains(&star.size));
            assert!((0.1..0.9).contains(&star.opacity));
            assert!((0.02..0.22).contains(&star.speed));
        }
    }

    #[test]
    fn test_twinkle_is_periodic() {
        let star = Star {
            position: Vec2::ZERO,
            size: 1.0,
            opacity: 0.5,
            speed: 0.1,
            twinkle_phase: 1.3,
            original_position: Vec2::ZERO,
        };
        let mut shifted = star.clone();
        shifted.twinkle_phase += std::f32::consts::TAU;
        assert!((star.twinkle() - shifted.twinkle()).abs() < 1e-5);
    }

    #[test]
    fn test_wrap_around_respawns_at_top() {
        let mut field = StarField::new(9, 400.0, 300.0, AREA_PER_STAR);
        for star in &mut field.stars {
            star.position.y = 301.0;
        }
        field.update(Vec2::new(10_000.0, 10_000.0), false);
        for star in field.stars() {
            assert_eq!(star.position.y, 0.0, "respawned stars start at the top");
            assert!((0.0..400.0).contains(&star.position.x));
            assert_eq!(star.original_position.y, 0.0);
        }
    }

    #[test]
    fn test_attraction_pulls_toward_pointer() {
        let mut field = StarField::new(11, 400.0, 300.0, AREA_PER_STAR);
        if field.star_count() == 0 {
            return;
        }
        let star = field.stars()[0].clone();
        let cursor = star.position + Vec2::new(50.0, 0.0);
        let influences = field.update(cursor, true);

        let moved = &field.stars()[0];
        assert!(moved.position.x > star.position.x, "star drifts toward cursor");
        assert!(influences[0].factor > 1.0);
        assert!(influences[0].factor <= 3.0);
    }

    #[test]
    fn test_pointer_outside_surface_disables_attraction_only() {
        let mut field = StarField::new(11, 400.0, 300.0, AREA_PER_STAR);
        if field.star_count() == 0 {
            return;
        }
        let star = field.stars()[0].clone();
        let cursor = star.position + Vec2::new(50.0, 0.0);
        let influences = field.update(cursor, false);

        // Distance is still measured against the last cursor position, but
        // neither the pull nor the inflation applies.
        let unmoved = &field.stars()[0];
        assert_eq!(unmoved.position.x, star.position.x);
        assert!((influences[0].distance - 50.0).abs() < 1e-4);
        assert_eq!(influences[0].factor, 1.0);
    }

    #[test]
    fn test_update_keeps_count_fixed() {
        let mut field = StarField::new(2, 500.0, 500.0, AREA_PER_STAR);
        let before = field.star_count();
        for _ in 0..100 {
            field.update(Vec2::new(250.0, 250.0), true);
        }
        assert_eq!(field.star_count(), before);
    }
}
