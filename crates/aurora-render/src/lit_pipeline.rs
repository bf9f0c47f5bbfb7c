//! Phong-lit textured pipeline for the planet.
//!
//! Camera at group 0, diffuse texture at group 1, lights at group 2, and a
//! per-object uniform at group 3 carrying the model transform, emissive
//! term, and specular parameters. The light rig is fixed: one ambient term,
//! one directional key light, and two point fills.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::buffer::{MeshBuffer, VertexPositionNormalUv};
use crate::camera::CameraUniform;
use crate::texture::Texture2d;

/// Fragment-stage lighting rig.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LightsUniform {
    /// Ambient color (rgb) and intensity (a).
    pub ambient: [f32; 4],
    /// Directional light direction (xyz, pointing from surface to light)
    /// and intensity (w).
    pub dir_direction: [f32; 4],
    /// Directional light color.
    pub dir_color: [f32; 4],
    /// First point light position (xyz) and intensity (w).
    pub point0_position: [f32; 4],
    /// First point light color.
    pub point0_color: [f32; 4],
    /// Second point light position (xyz) and intensity (w).
    pub point1_position: [f32; 4],
    /// Second point light color.
    pub point1_color: [f32; 4],
}

/// Per-object uniform: transform plus material response.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LitObjectUniform {
    pub model: [[f32; 4]; 4],
    /// Emissive color (rgb) and intensity (a).
    pub emissive: [f32; 4],
    /// Specular color (rgb) and shininess exponent (a).
    pub specular: [f32; 4],
}

/// Phong-lit textured pipeline.
pub struct LitPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    pub texture_bind_group_layout: wgpu::BindGroupLayout,
    pub lights_bind_group_layout: wgpu::BindGroupLayout,
    pub object_bind_group_layout: wgpu::BindGroupLayout,
}

impl LitPipeline {
    /// Create the lit pipeline.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lit-shader"),
            source: wgpu::ShaderSource::Wgsl(LIT_SHADER_SOURCE.into()),
        });

        let uniform_entry = |size: u64| wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: NonZeroU64::new(size),
            },
            count: None,
        };

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("lit-camera-bgl"),
                entries: &[uniform_entry(std::mem::size_of::<CameraUniform>() as u64)],
            });

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("lit-texture-bgl"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let lights_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("lit-lights-bgl"),
                entries: &[uniform_entry(std::mem::size_of::<LightsUniform>() as u64)],
            });

        let object_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("lit-object-bgl"),
                entries: &[uniform_entry(std::mem::size_of::<LitObjectUniform>() as u64)],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lit-pipeline-layout"),
            bind_group_layouts: &[
                &camera_bind_group_layout,
                &texture_bind_group_layout,
                &lights_bind_group_layout,
                &object_bind_group_layout,
            ],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("lit-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[VertexPositionNormalUv::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            camera_bind_group_layout,
            texture_bind_group_layout,
            lights_bind_group_layout,
            object_bind_group_layout,
        }
    }

    /// Build a bind group for a single uniform buffer against one of this
    /// pipeline's single-entry layouts.
    pub fn uniform_bind_group(
        &self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
        label: &str,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        })
    }

    /// Build the texture bind group from an uploaded [`Texture2d`].
    pub fn texture_bind_group(
        &self,
        device: &wgpu::Device,
        texture: &Texture2d,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lit-texture-bg"),
            layout: &self.texture_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        })
    }
}

/// Draw a lit textured mesh.
pub fn draw_lit<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipeline: &LitPipeline,
    camera_bind_group: &'a wgpu::BindGroup,
    texture_bind_group: &'a wgpu::BindGroup,
    lights_bind_group: &'a wgpu::BindGroup,
    object_bind_group: &'a wgpu::BindGroup,
    mesh: &'a MeshBuffer,
) {
    render_pass.set_pipeline(&pipeline.pipeline);
    render_pass.set_bind_group(0, camera_bind_group, &[]);
    render_pass.set_bind_group(1, texture_bind_group, &[]);
    render_pass.set_bind_group(2, lights_bind_group, &[]);
    render_pass.set_bind_group(3, object_bind_group, &[]);
    mesh.bind(render_pass);
    mesh.draw(render_pass);
}

/// The WGSL source for the Phong-lit textured shader.
pub const LIT_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

struct LightsUniform {
    ambient: vec4<f32>,
    dir_direction: vec4<f32>,
    dir_color: vec4<f32>,
    point0_position: vec4<f32>,
    point0_color: vec4<f32>,
    point1_position: vec4<f32>,
    point1_color: vec4<f32>,
};

struct LitObjectUniform {
    model: mat4x4<f32>,
    emissive: vec4<f32>,
    specular: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@group(1) @binding(0)
var t_diffuse: texture_2d<f32>;
@group(1) @binding(1)
var s_diffuse: sampler;

@group(2) @binding(0)
var<uniform> lights: LightsUniform;

@group(3) @binding(0)
var<uniform> object: LitObjectUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = object.model * vec4<f32>(in.position, 1.0);
    out.clip_position = camera.view_proj * world;
    out.world_pos = world.xyz;
    // Rotation plus uniform scale only, so the model matrix works on normals.
    out.world_normal = normalize((object.model * vec4<f32>(in.normal, 0.0)).xyz);
    out.uv = in.uv;
    return out;
}

fn light_contribution(
    n: vec3<f32>,
    view_dir: vec3<f32>,
    light_dir: vec3<f32>,
    color: vec3<f32>,
    intensity: f32,
    specular: vec4<f32>,
) -> vec3<f32> {
    let ndotl = max(dot(n, light_dir), 0.0);
    let diffuse = color * ndotl * intensity;

    let halfway = normalize(light_dir + view_dir);
    let spec = pow(max(dot(n, halfway), 0.0), specular.a) * intensity;
    return diffuse + specular.rgb * spec;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let base = textureSample(t_diffuse, s_diffuse, in.uv);
    let n = normalize(in.world_normal);
    let view_dir = normalize(camera.camera_pos.xyz - in.world_pos);

    var lighting = lights.ambient.rgb * lights.ambient.a;

    lighting += light_contribution(
        n, view_dir,
        normalize(lights.dir_direction.xyz),
        lights.dir_color.rgb, lights.dir_direction.w,
        object.specular,
    );
    lighting += light_contribution(
        n, view_dir,
        normalize(lights.point0_position.xyz - in.world_pos),
        lights.point0_color.rgb, lights.point0_position.w,
        object.specular,
    );
    lighting += light_contribution(
        n, view_dir,
        normalize(lights.point1_position.xyz - in.world_pos),
        lights.point1_color.rgb, lights.point1_position.w,
        object.specular,
    );

    let emissive = object.emissive.rgb * object.emissive.a;
    let color = base.rgb * lighting + emissive;
    return vec4<f32>(color, base.a);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<LightsUniform>(), 112);
        assert_eq!(std::mem::size_of::<LitObjectUniform>(), 96);
        assert_eq!(std::mem::size_of::<LightsUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<LitObjectUniform>() % 16, 0);
    }
}
