//! The orb scene: particle cloud, energy field, wireframe, solid core, and
//! inner glow around an auto-rotating orbit camera.
//!
//! Layers are drawn back to front (cloud, energy, wireframe, core, glow) so
//! transparency composites correctly without a depth buffer.

use aurora_config::OrbConfig;
use aurora_input::PointerState;
use aurora_render::{
    draw_energy, draw_lit, draw_shell, uv_sphere, BufferAllocator, CameraUniform, EnergyPipeline,
    EnergyUniform, IndexData, LitObjectUniform, LitPipeline, LightsUniform, MeshBuffer,
    OrbitCamera, PointCloudRenderer, PointCloudUniform, RenderContext, ShellBlend, ShellPipeline,
    ShellUniform, Texture2d, TextureError,
};
use glam::Mat4;
use winit::event::MouseButton;

use crate::cloud;
use crate::color_cycle::ColorCycle;
use crate::hint::HintTimer;
use crate::lights::orb_lights;
use crate::shells::{self, ShellSpin};

/// Scene clock advance per frame. The shader wave and pulse are tied to the
/// frame rate, like the shell spins.
pub const TIME_STEP: f32 = 0.01;

const FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;

/// The complete orb scene.
pub struct OrbScene {
    orbit: OrbitCamera,
    cycle: ColorCycle,
    spin: ShellSpin,
    hint: HintTimer,
    time: f32,
    aspect_ratio: f32,

    camera_buffer: wgpu::Buffer,

    particles: PointCloudRenderer,
    cloud_instances: Vec<aurora_render::PointInstance>,

    energy_pipeline: EnergyPipeline,
    energy_mesh: MeshBuffer,
    energy_buffer: wgpu::Buffer,
    energy_camera_bg: wgpu::BindGroup,
    energy_bg: wgpu::BindGroup,

    wire_pipeline: ShellPipeline,
    wire_mesh: MeshBuffer,
    wire_buffer: wgpu::Buffer,
    wire_camera_bg: wgpu::BindGroup,
    wire_bg: wgpu::BindGroup,

    lit_pipeline: LitPipeline,
    core_mesh: MeshBuffer,
    core_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,
    core_camera_bg: wgpu::BindGroup,
    core_texture_bg: wgpu::BindGroup,
    core_lights_bg: wgpu::BindGroup,
    core_bg: wgpu::BindGroup,

    glow_pipeline: ShellPipeline,
    glow_mesh: MeshBuffer,
    glow_buffer: wgpu::Buffer,
    glow_camera_bg: wgpu::BindGroup,
    glow_bg: wgpu::BindGroup,
}

impl OrbScene {
    /// Build the scene.
    pub fn new(
        context: &RenderContext,
        config: &OrbConfig,
        aspect_ratio: f32,
    ) -> Result<Self, TextureError> {
        let device = &context.device;
        let format = context.surface_format;
        let allocator = BufferAllocator::new(device);

        let mut orbit = OrbitCamera::new(config.camera_distance);
        orbit.auto_rotate_speed = config.auto_rotate_speed;

        let camera = orbit.camera(FOV_Y, aspect_ratio);
        let camera_buffer = allocator.create_uniform("orb-camera", &camera.to_uniform());

        // Background cloud.
        let cloud_instances = cloud::generate_cloud(config.seed);
        let particles =
            PointCloudRenderer::new(device, format, cloud_instances.len() as u32);

        // Energy field: oversized back-face shell, additive.
        let energy_pipeline = EnergyPipeline::new(device, format);
        let energy_sphere = uv_sphere(shells::OUTER_RADIUS, 64, 64);
        let energy_mesh = allocator.create_mesh(
            "orb-energy",
            bytemuck::cast_slice(&energy_sphere.textured_vertices()),
            IndexData::U32(&energy_sphere.indices),
        );
        let energy_uniform = EnergyUniform {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            color: ColorCycle::new().color(),
            time: 0.0,
        };
        let energy_buffer = allocator.create_uniform("orb-energy-uniform", &energy_uniform);
        let energy_camera_bg = energy_pipeline.camera_bind_group(device, &camera_buffer);
        let energy_bg = energy_pipeline.energy_bind_group(device, &energy_buffer);

        // Wireframe shell: line-list edges of a coarser sphere.
        let wire_pipeline = ShellPipeline::new(
            device,
            format,
            wgpu::PrimitiveTopology::LineList,
            ShellBlend::Alpha,
            None,
        );
        let wire_sphere = uv_sphere(shells::OUTER_RADIUS, 32, 32);
        let wire_mesh = allocator.create_mesh(
            "orb-wireframe",
            bytemuck::cast_slice(&wire_sphere.position_vertices()),
            IndexData::U32(&wire_sphere.wireframe_indices()),
        );
        let wire_uniform = ShellUniform {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [1.0, 1.0, 1.0, shells::WIREFRAME_OPACITY],
        };
        let wire_buffer = allocator.create_uniform("orb-wireframe-uniform", &wire_uniform);
        let wire_camera_bg = wire_pipeline.camera_bind_group(device, &camera_buffer);
        let wire_bg = wire_pipeline.object_bind_group(device, &wire_buffer);

        // Solid core: Phong-lit with a flat 1x1 base texture carrying the
        // indigo tint and the core's 0.8 opacity.
        let lit_pipeline = LitPipeline::new(device, format);
        let core_sphere = uv_sphere(shells::CORE_RADIUS, 64, 64);
        let core_mesh = allocator.create_mesh(
            "orb-core",
            bytemuck::cast_slice(&core_sphere.textured_vertices()),
            IndexData::U32(&core_sphere.indices),
        );
        let core_texel = [
            (shells::CORE_COLOR[0] * 255.0) as u8,
            (shells::CORE_COLOR[1] * 255.0) as u8,
            (shells::CORE_COLOR[2] * 255.0) as u8,
            (shells::CORE_OPACITY * 255.0) as u8,
        ];
        let core_texture =
            Texture2d::from_rgba8(device, &context.queue, "orb-core-tint", 1, 1, &core_texel)?;

        let core_uniform = LitObjectUniform {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            emissive: [0.0, 0.0, 0.0, 0.0],
            specular: [1.0, 1.0, 1.0, shells::CORE_SHININESS],
        };
        let core_buffer = allocator.create_uniform("orb-core-uniform", &core_uniform);
        let lights_buffer = allocator.create_uniform("orb-lights", &orb_lights(0.0));
        let core_camera_bg = lit_pipeline.uniform_bind_group(
            device,
            &lit_pipeline.camera_bind_group_layout,
            &camera_buffer,
            "orb-core-camera-bg",
        );
        let core_texture_bg = lit_pipeline.texture_bind_group(device, &core_texture);
        let core_lights_bg = lit_pipeline.uniform_bind_group(
            device,
            &lit_pipeline.lights_bind_group_layout,
            &lights_buffer,
            "orb-lights-bg",
        );
        let core_bg = lit_pipeline.uniform_bind_group(
            device,
            &lit_pipeline.object_bind_group_layout,
            &core_buffer,
            "orb-core-bg",
        );

        // Inner glow: translucent solid sphere.
        let glow_pipeline = ShellPipeline::new(
            device,
            format,
            wgpu::PrimitiveTopology::TriangleList,
            ShellBlend::Alpha,
            Some(wgpu::Face::Back),
        );
        let glow_sphere = uv_sphere(shells::GLOW_RADIUS, 32, 32);
        let glow_mesh = allocator.create_mesh(
            "orb-glow",
            bytemuck::cast_slice(&glow_sphere.position_vertices()),
            IndexData::U32(&glow_sphere.indices),
        );
        let glow_uniform = ShellUniform {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [
                shells::GLOW_COLOR[0],
                shells::GLOW_COLOR[1],
                shells::GLOW_COLOR[2],
                shells::GLOW_OPACITY,
            ],
        };
        let glow_buffer = allocator.create_uniform("orb-glow-uniform", &glow_uniform);
        let glow_camera_bg = glow_pipeline.camera_bind_group(device, &camera_buffer);
        let glow_bg = glow_pipeline.object_bind_group(device, &glow_buffer);

        log::info!("orb scene ready: {} cloud particles", cloud_instances.len());

        Ok(Self {
            orbit,
            cycle: ColorCycle::new(),
            spin: ShellSpin::default(),
            hint: HintTimer::new(),
            time: 0.0,
            aspect_ratio,
            camera_buffer,
            particles,
            cloud_instances,
            energy_pipeline,
            energy_mesh,
            energy_buffer,
            energy_camera_bg,
            energy_bg,
            wire_pipeline,
            wire_mesh,
            wire_buffer,
            wire_camera_bg,
            wire_bg,
            lit_pipeline,
            core_mesh,
            core_buffer,
            lights_buffer,
            core_camera_bg,
            core_texture_bg,
            core_lights_bg,
            core_bg,
            glow_pipeline,
            glow_mesh,
            glow_buffer,
            glow_camera_bg,
            glow_bg,
        })
    }

    /// Track a resize.
    pub fn resize(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Whether the "drag to explore" hint is still in its display window.
    pub fn hint_visible(&self) -> bool {
        self.hint.visible()
    }

    /// Advance one frame and upload all per-frame uniforms.
    pub fn update(
        &mut self,
        queue: &wgpu::Queue,
        pointer: &PointerState,
        dt: std::time::Duration,
        viewport_height: f32,
    ) {
        self.time += TIME_STEP;
        self.cycle.advance();
        self.spin.advance();
        self.hint.tick(dt);

        if pointer.is_pressed(MouseButton::Left) {
            self.orbit.apply_drag(pointer.delta(), viewport_height);
        }
        self.orbit.update(dt.as_secs_f32());

        let camera = self.orbit.camera(FOV_Y, self.aspect_ratio);
        let camera_uniform: CameraUniform = camera.to_uniform();
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera_uniform));

        let color = self.cycle.color();
        let view = camera.view_matrix();

        let cloud_uniform = PointCloudUniform {
            view: view.to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            model: Mat4::from_rotation_y(self.spin.cloud).to_cols_array_2d(),
        };
        self.particles
            .update(queue, &cloud_uniform, &self.cloud_instances);

        let energy_uniform = EnergyUniform {
            model: (Mat4::from_rotation_y(self.spin.energy)
                * Mat4::from_scale(glam::Vec3::splat(shells::ENERGY_SCALE)))
            .to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            color,
            time: self.time,
        };
        queue.write_buffer(&self.energy_buffer, 0, bytemuck::bytes_of(&energy_uniform));

        let wire_uniform = ShellUniform {
            model: Mat4::from_rotation_y(self.spin.wireframe).to_cols_array_2d(),
            color: [color[0], color[1], color[2], shells::WIREFRAME_OPACITY],
        };
        queue.write_buffer(&self.wire_buffer, 0, bytemuck::bytes_of(&wire_uniform));

        let core_uniform = LitObjectUniform {
            model: Mat4::from_rotation_y(self.spin.core).to_cols_array_2d(),
            emissive: [0.0, 0.0, 0.0, 0.0],
            specular: [color[0], color[1], color[2], shells::CORE_SHININESS],
        };
        queue.write_buffer(&self.core_buffer, 0, bytemuck::bytes_of(&core_uniform));

        let lights: LightsUniform = orb_lights(self.time);
        queue.write_buffer(&self.lights_buffer, 0, bytemuck::bytes_of(&lights));

        let glow_uniform = ShellUniform {
            model: Mat4::from_rotation_y(self.spin.glow).to_cols_array_2d(),
            color: [
                shells::GLOW_COLOR[0],
                shells::GLOW_COLOR[1],
                shells::GLOW_COLOR[2],
                shells::GLOW_OPACITY,
            ],
        };
        queue.write_buffer(&self.glow_buffer, 0, bytemuck::bytes_of(&glow_uniform));
    }

    /// Draw all layers into the current pass, back to front.
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        self.particles.render(pass);
        draw_energy(
            pass,
            &self.energy_pipeline,
            &self.energy_camera_bg,
            &self.energy_bg,
            &self.energy_mesh,
        );
        draw_shell(
            pass,
            &self.wire_pipeline,
            &self.wire_camera_bg,
            &self.wire_bg,
            &self.wire_mesh,
        );
        draw_lit(
            pass,
            &self.lit_pipeline,
            &self.core_camera_bg,
            &self.core_texture_bg,
            &self.core_lights_bg,
            &self.core_bg,
            &self.core_mesh,
        );
        draw_shell(
            pass,
            &self.glow_pipeline,
            &self.glow_camera_bg,
            &self.glow_bg,
            &self.glow_mesh,
        );
    }
}
