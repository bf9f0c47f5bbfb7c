//! Starfield scene: turns the simulated field into gradient disc instances
//! and draws them through the glow sprite pipeline.

use aurora_config::StarfieldConfig;
use aurora_input::PointerState;
use aurora_render::{GlowInstance, GlowSpriteRenderer, RenderContext};
use glam::Vec2;

use crate::field::{PointerInfluence, Star, StarField};
use crate::palette;

/// Discs per star: gradient halo, core, optional sparkle.
const DISCS_PER_STAR: usize = 3;

/// The complete starfield scene.
pub struct StarfieldScene {
    field: StarField,
    sprites: GlowSpriteRenderer,
    logical_size: Vec2,
}

impl StarfieldScene {
    /// Build the scene for a surface of the given logical size.
    pub fn new(
        context: &RenderContext,
        config: &StarfieldConfig,
        logical_width: f32,
        logical_height: f32,
    ) -> Self {
        let field = StarField::new(
            config.seed,
            logical_width,
            logical_height,
            config.area_per_star,
        );
        let capacity = (field.star_count() * DISCS_PER_STAR + 1) as u32;
        let sprites =
            GlowSpriteRenderer::new(&context.device, context.surface_format, capacity.max(1));
        log::info!("starfield scene ready: {} stars", field.star_count());

        Self {
            field,
            sprites,
            logical_size: Vec2::new(logical_width, logical_height),
        }
    }

    /// Track a logical resize. Star positions survive; only the wrap bounds
    /// and viewport change.
    pub fn resize(&mut self, logical_width: f32, logical_height: f32) {
        self.logical_size = Vec2::new(logical_width, logical_height);
        self.field
            .set_surface_size(logical_width, logical_height);
    }

    /// Advance the simulation one frame and upload this frame's discs.
    /// Distances use the last known cursor position even after the pointer
    /// leaves; only attraction and the trail require it to be over the
    /// surface.
    pub fn update(&mut self, queue: &wgpu::Queue, pointer: &PointerState) {
        let cursor = pointer.position();
        let hovering = pointer.in_surface();
        let influences = self.field.update(cursor, hovering);
        let instances = build_instances(self.field.stars(), &influences, cursor, hovering);
        self.sprites
            .update(queue, self.logical_size.x, self.logical_size.y, &instances);
    }

    /// Draw the field into the current pass.
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        self.sprites.render(pass);
    }

    pub fn star_count(&self) -> usize {
        self.field.star_count()
    }
}

/// Build the disc list for one frame: per star a gradient halo, a brighter
/// core, and a sparkle inside the sparkle radius, then, while the pointer is
/// over the surface, the trail on top of everything.
pub fn build_instances(
    stars: &[Star],
    influences: &[PointerInfluence],
    cursor: Vec2,
    hovering: bool,
) -> Vec<GlowInstance> {
    let mut instances = Vec::with_capacity(stars.len() * DISCS_PER_STAR + 1);

    for (star, influence) in stars.iter().zip(influences) {
        let near = influence.distance < palette::NEAR_COLOR_RADIUS;
        let opacity = (star.opacity * star.twinkle() * influence.factor).min(1.0);
        let size = star.size * influence.factor;
        let center = [star.position.x, star.position.y];

        let ramp = if near {
            palette::NEAR_RAMP
        } else {
            palette::FAR_RAMP
        };
        instances.push(GlowInstance::gradient(center, size * 3.0, ramp, opacity));

        let core = if near {
            palette::NEAR_CORE
        } else {
            palette::FAR_CORE
        };
        instances.push(GlowInstance::solid(
            center,
            size * 0.8,
            core,
            (opacity * 1.5).min(1.0),
        ));

        if influence.distance < palette::SPARKLE_RADIUS {
            instances.push(GlowInstance::solid(
                center,
                size * 0.3,
                palette::SPARKLE_COLOR,
                (opacity * 0.8).min(1.0),
            ));
        }
    }

    if hovering {
        instances.push(GlowInstance::gradient(
            [cursor.x, cursor.y],
            palette::TRAIL_RADIUS,
            palette::TRAIL_RAMP,
            palette::TRAIL_ALPHA,
        ));
    }

    instances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star_at(x: f32, y: f32) -> Star {
        Star {
            position: Vec2::new(x, y),
            size: 1.0,
            opacity: 0.5,
            speed: 0.1,
            twinkle_phase: 0.0,
            original_position: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_far_star_emits_halo_and_core() {
        let stars = [star_at(10.0, 10.0)];
        let influences = [PointerInfluence {
            distance: f32::INFINITY,
            factor: 1.0,
        }];
        let instances = build_instances(&stars, &influences, Vec2::ZERO, false);

        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].hard_edge, 0.0);
        assert_eq!(instances[0].radius, 3.0);
        assert_eq!(instances[1].hard_edge, 1.0);
        assert_eq!(instances[1].radius, 0.8);
        // Far ramp starts white.
        assert_eq!(instances[0].color_inner[0], 1.0);
    }

    #[test]
    fn test_near_star_gains_sparkle_and_cosmic_ramp() {
        let stars = [star_at(100.0, 100.0)];
        let influences = [PointerInfluence {
            distance: 50.0,
            factor: 2.0,
        }];
        let cursor = Vec2::new(150.0, 100.0);
        let instances = build_instances(&stars, &influences, cursor, true);

        // halo + core + sparkle + trail
        assert_eq!(instances.len(), 4);
        assert_eq!(instances[0].color_inner[0], palette::NEAR_RAMP[0][0]);
        assert_eq!(instances[2].radius, 0.3 * 2.0);
        let trail = instances.last().unwrap();
        assert_eq!(trail.radius, palette::TRAIL_RADIUS);
        assert_eq!(trail.color_inner[3], palette::TRAIL_ALPHA);
    }

    #[test]
    fn test_pointer_left_keeps_palette_drops_trail() {
        // A star right where the cursor last was keeps the cosmic ramp and
        // sparkle after the pointer leaves; only the trail disappears.
        let cursor = Vec2::new(200.0, 150.0);
        let stars = [star_at(200.0, 150.0)];
        let influences = [PointerInfluence {
            distance: 0.0,
            factor: 1.0,
        }];
        let instances = build_instances(&stars, &influences, cursor, false);

        // halo + core + sparkle, no trail
        assert_eq!(instances.len(), 3);
        assert_eq!(instances[0].color_inner[0], palette::NEAR_RAMP[0][0]);
        assert_eq!(instances[1].color_inner[0], palette::NEAR_CORE[0]);
        assert!(instances.iter().all(|i| i.radius != palette::TRAIL_RADIUS));
    }

    #[test]
    fn test_alpha_is_clamped() {
        let stars = [Star {
            twinkle_phase: std::f32::consts::FRAC_PI_2,
            opacity: 0.9,
            ..star_at(0.0, 0.0)
        }];
        let influences = [PointerInfluence {
            distance: 0.0,
            factor: 3.0,
        }];
        let instances = build_instances(&stars, &influences, Vec2::ZERO, false);
        for instance in &instances {
            assert!(instance.color_inner[3] <= 1.0);
        }
    }
}
