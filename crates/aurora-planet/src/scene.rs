//! The planet scene: a lit textured sphere with hover/click interaction,
//! atmosphere and cloud shells, and a background star scatter, behind a
//! gently auto-rotating orbit camera clamped near the equator.

use std::time::Duration;

use aurora_config::PlanetConfig;
use aurora_input::PointerState;
use aurora_render::{
    draw_lit, draw_shell, uv_sphere, BufferAllocator, IndexData, LitObjectUniform, LitPipeline,
    LightsUniform, MeshBuffer, OrbitCamera, PointCloudRenderer, PointCloudUniform, RenderContext,
    ShellBlend, ShellPipeline, ShellUniform, Texture2d, TextureError,
};
use glam::{Mat4, Vec2, Vec3};
use winit::event::MouseButton;

use crate::interaction::{pointer_hits_sphere, PlanetInteraction};
use crate::motion::PlanetMotion;
use crate::shells::{self, LayerSpin};
use crate::texture::{SurfaceBaker, TEXTURE_HEIGHT, TEXTURE_WIDTH};

const FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
const CAMERA_DISTANCE: f32 = 5.0;
const AUTO_ROTATE_SPEED: f32 = 0.3;
/// Polar clamp keeping the view near the equator.
const MIN_POLAR: f32 = std::f32::consts::PI / 2.2;
const MAX_POLAR: f32 = std::f32::consts::PI / 1.8;

const EMISSIVE_COLOR: [f32; 3] = [0.0, 0x11 as f32 / 255.0, 0x22 as f32 / 255.0];
const SPECULAR_GRAY: f32 = 0x22 as f32 / 255.0;
const SHININESS: f32 = 100.0;

/// The complete planet scene.
pub struct PlanetScene {
    config: PlanetConfig,
    orbit: OrbitCamera,
    interaction: PlanetInteraction,
    motion: PlanetMotion,
    spin: LayerSpin,
    elapsed: f32,
    aspect_ratio: f32,
    viewport: Vec2,

    camera_buffer: wgpu::Buffer,

    stars: PointCloudRenderer,
    star_instances: Vec<aurora_render::PointInstance>,

    lit_pipeline: LitPipeline,
    planet_mesh: MeshBuffer,
    planet_buffer: wgpu::Buffer,
    planet_camera_bg: wgpu::BindGroup,
    planet_texture_bg: wgpu::BindGroup,
    planet_lights_bg: wgpu::BindGroup,
    planet_bg: wgpu::BindGroup,

    atmosphere_pipeline: ShellPipeline,
    cloud_pipeline: ShellPipeline,
    shell_mesh: MeshBuffer,
    atmosphere_buffer: wgpu::Buffer,
    cloud_buffer: wgpu::Buffer,
    atmosphere_camera_bg: wgpu::BindGroup,
    atmosphere_bg: wgpu::BindGroup,
    cloud_camera_bg: wgpu::BindGroup,
    cloud_bg: wgpu::BindGroup,
}

impl PlanetScene {
    /// Build the scene, baking the surface texture from the configured seed.
    pub fn new(
        context: &RenderContext,
        config: &PlanetConfig,
        aspect_ratio: f32,
        viewport: Vec2,
    ) -> Result<Self, TextureError> {
        let device = &context.device;
        let format = context.surface_format;
        let allocator = BufferAllocator::new(device);

        let mut orbit = OrbitCamera::new(CAMERA_DISTANCE).with_polar_range(MIN_POLAR, MAX_POLAR);
        orbit.auto_rotate_speed = AUTO_ROTATE_SPEED;
        orbit.rotate_speed = 1.0;

        let camera = orbit.camera(FOV_Y, aspect_ratio);
        let camera_buffer = allocator.create_uniform("planet-camera", &camera.to_uniform());

        let star_instances = shells::generate_stars(config.seed);
        let stars = PointCloudRenderer::new(device, format, star_instances.len() as u32);

        // Planet body.
        let lit_pipeline = LitPipeline::new(device, format);
        let sphere = uv_sphere(1.0, 64, 64);
        let planet_mesh = allocator.create_mesh(
            "planet-body",
            bytemuck::cast_slice(&sphere.textured_vertices()),
            IndexData::U32(&sphere.indices),
        );

        log::info!("baking planet surface texture (seed {})", config.seed);
        let surface = SurfaceBaker::new(config.seed).bake();
        let texture = Texture2d::from_rgba8(
            device,
            &context.queue,
            "planet-surface",
            TEXTURE_WIDTH,
            TEXTURE_HEIGHT,
            &surface,
        )?;

        let planet_uniform = LitObjectUniform {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            emissive: [
                EMISSIVE_COLOR[0],
                EMISSIVE_COLOR[1],
                EMISSIVE_COLOR[2],
                PlanetInteraction::default().emissive_intensity(),
            ],
            specular: [SPECULAR_GRAY, SPECULAR_GRAY, SPECULAR_GRAY, SHININESS],
        };
        let planet_buffer = allocator.create_uniform("planet-uniform", &planet_uniform);
        // The light rig never moves; the bind group keeps the buffer alive.
        let lights_buffer = allocator.create_uniform("planet-lights", &planet_lights());

        let planet_camera_bg = lit_pipeline.uniform_bind_group(
            device,
            &lit_pipeline.camera_bind_group_layout,
            &camera_buffer,
            "planet-camera-bg",
        );
        let planet_texture_bg = lit_pipeline.texture_bind_group(device, &texture);
        let planet_lights_bg = lit_pipeline.uniform_bind_group(
            device,
            &lit_pipeline.lights_bind_group_layout,
            &lights_buffer,
            "planet-lights-bg",
        );
        let planet_bg = lit_pipeline.uniform_bind_group(
            device,
            &lit_pipeline.object_bind_group_layout,
            &planet_buffer,
            "planet-bg",
        );

        // Atmosphere halo renders back faces only; clouds are a thin front
        // shell. Both reuse one unit sphere mesh and scale in the model.
        let atmosphere_pipeline = ShellPipeline::new(
            device,
            format,
            wgpu::PrimitiveTopology::TriangleList,
            ShellBlend::Alpha,
            Some(wgpu::Face::Front),
        );
        let cloud_pipeline = ShellPipeline::new(
            device,
            format,
            wgpu::PrimitiveTopology::TriangleList,
            ShellBlend::Alpha,
            Some(wgpu::Face::Back),
        );
        let shell_sphere = uv_sphere(1.0, 32, 32);
        let shell_mesh = allocator.create_mesh(
            "planet-shells",
            bytemuck::cast_slice(&shell_sphere.position_vertices()),
            IndexData::U32(&shell_sphere.indices),
        );

        let atmosphere_uniform = ShellUniform {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [
                shells::ATMOSPHERE_COLOR[0],
                shells::ATMOSPHERE_COLOR[1],
                shells::ATMOSPHERE_COLOR[2],
                shells::ATMOSPHERE_OPACITY,
            ],
        };
        let atmosphere_buffer =
            allocator.create_uniform("planet-atmosphere", &atmosphere_uniform);
        let cloud_uniform = ShellUniform {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [1.0, 1.0, 1.0, shells::CLOUD_OPACITY],
        };
        let cloud_buffer = allocator.create_uniform("planet-clouds", &cloud_uniform);

        let atmosphere_camera_bg = atmosphere_pipeline.camera_bind_group(device, &camera_buffer);
        let atmosphere_bg = atmosphere_pipeline.object_bind_group(device, &atmosphere_buffer);
        let cloud_camera_bg = cloud_pipeline.camera_bind_group(device, &camera_buffer);
        let cloud_bg = cloud_pipeline.object_bind_group(device, &cloud_buffer);

        Ok(Self {
            config: config.clone(),
            orbit,
            interaction: PlanetInteraction::default(),
            motion: PlanetMotion::default(),
            spin: LayerSpin::default(),
            elapsed: 0.0,
            aspect_ratio,
            viewport,
            camera_buffer,
            stars,
            star_instances,
            lit_pipeline,
            planet_mesh,
            planet_buffer,
            planet_camera_bg,
            planet_texture_bg,
            planet_lights_bg,
            planet_bg,
            atmosphere_pipeline,
            cloud_pipeline,
            shell_mesh,
            atmosphere_buffer,
            cloud_buffer,
            atmosphere_camera_bg,
            atmosphere_bg,
            cloud_camera_bg,
            cloud_bg,
        })
    }

    /// Track a resize.
    pub fn resize(&mut self, aspect_ratio: f32, viewport: Vec2) {
        self.aspect_ratio = aspect_ratio;
        self.viewport = viewport;
    }

    pub fn interaction(&self) -> PlanetInteraction {
        self.interaction
    }

    /// Advance one frame and upload all per-frame uniforms.
    pub fn update(&mut self, queue: &wgpu::Queue, pointer: &PointerState, dt: Duration) {
        self.elapsed += dt.as_secs_f32();

        if pointer.is_pressed(MouseButton::Left) {
            self.orbit.apply_drag(pointer.delta(), self.viewport.y);
        }
        self.orbit.update(dt.as_secs_f32());

        let camera = self.orbit.camera(FOV_Y, self.aspect_ratio);

        // Hover tests against the displayed sphere, bob offset included.
        let scale = self.config.base_scale * self.interaction.scale_multiplier();
        let center = Vec3::new(0.0, PlanetMotion::bob_offset(self.elapsed), 0.0);
        let over_sphere = pointer
            .active_position()
            .map(|p| pointer_hits_sphere(&camera, p, self.viewport, center, scale))
            .unwrap_or(false);
        self.interaction
            .update(over_sphere, pointer.just_pressed(MouseButton::Left));

        self.motion.advance(
            self.config.rotation_speed,
            self.interaction.spin_multiplier(),
        );
        self.spin.advance();

        let scale = self.config.base_scale * self.interaction.scale_multiplier();
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&camera.to_uniform()),
        );

        let star_uniform = PointCloudUniform {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            model: Mat4::from_rotation_y(self.spin.stars).to_cols_array_2d(),
        };
        self.stars.update(queue, &star_uniform, &self.star_instances);

        let planet_uniform = LitObjectUniform {
            model: self.motion.model_matrix(self.elapsed, scale).to_cols_array_2d(),
            emissive: [
                EMISSIVE_COLOR[0],
                EMISSIVE_COLOR[1],
                EMISSIVE_COLOR[2],
                self.interaction.emissive_intensity(),
            ],
            specular: [SPECULAR_GRAY, SPECULAR_GRAY, SPECULAR_GRAY, SHININESS],
        };
        queue.write_buffer(&self.planet_buffer, 0, bytemuck::bytes_of(&planet_uniform));

        let atmosphere_uniform = ShellUniform {
            model: (Mat4::from_rotation_y(self.spin.atmosphere)
                * Mat4::from_scale(Vec3::splat(shells::ATMOSPHERE_SCALE)))
            .to_cols_array_2d(),
            color: [
                shells::ATMOSPHERE_COLOR[0],
                shells::ATMOSPHERE_COLOR[1],
                shells::ATMOSPHERE_COLOR[2],
                shells::ATMOSPHERE_OPACITY,
            ],
        };
        queue.write_buffer(
            &self.atmosphere_buffer,
            0,
            bytemuck::bytes_of(&atmosphere_uniform),
        );

        let cloud_uniform = ShellUniform {
            model: (Mat4::from_rotation_y(self.spin.clouds)
                * Mat4::from_scale(Vec3::splat(shells::CLOUD_SCALE)))
            .to_cols_array_2d(),
            color: [1.0, 1.0, 1.0, shells::CLOUD_OPACITY],
        };
        queue.write_buffer(&self.cloud_buffer, 0, bytemuck::bytes_of(&cloud_uniform));
    }

    /// Draw all layers into the current pass, back to front.
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        self.stars.render(pass);
        draw_shell(
            pass,
            &self.atmosphere_pipeline,
            &self.atmosphere_camera_bg,
            &self.atmosphere_bg,
            &self.shell_mesh,
        );
        draw_lit(
            pass,
            &self.lit_pipeline,
            &self.planet_camera_bg,
            &self.planet_texture_bg,
            &self.planet_lights_bg,
            &self.planet_bg,
            &self.planet_mesh,
        );
        draw_shell(
            pass,
            &self.cloud_pipeline,
            &self.cloud_camera_bg,
            &self.cloud_bg,
            &self.shell_mesh,
        );
    }
}

/// The fixed planet light rig: white key light from the upper front, a cool
/// blue fill from behind, and a white rim from the camera side.
fn planet_lights() -> LightsUniform {
    let blue = [
        0x4a as f32 / 255.0,
        0x90 as f32 / 255.0,
        0xe2 as f32 / 255.0,
    ];
    LightsUniform {
        ambient: [1.0, 1.0, 1.0, 0.3],
        dir_direction: [5.0, 5.0, 5.0, 1.0],
        dir_color: [1.0, 1.0, 1.0, 1.0],
        point0_position: [-5.0, -5.0, -5.0, 0.3],
        point0_color: [blue[0], blue[1], blue[2], 1.0],
        point1_position: [0.0, 0.0, 10.0, 0.5],
        point1_color: [1.0, 1.0, 1.0, 1.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_clamp_brackets_equator() {
        assert!(MIN_POLAR < std::f32::consts::FRAC_PI_2);
        assert!(MAX_POLAR > std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_planet_light_rig() {
        let rig = planet_lights();
        assert_eq!(rig.ambient[3], 0.3);
        assert_eq!(rig.dir_direction[3], 1.0);
        assert_eq!(rig.point0_position[3], 0.3);
        assert_eq!(rig.point1_position[3], 0.5);
    }
}
