//! Energy-field shell pipeline for the orb.
//!
//! Renders the back faces of an oversized sphere with an additive shader:
//! rim intensity from the view-space normal, a vertical traveling wave, and
//! a slow pulse. Color and time uniforms are rewritten every frame by the
//! color cycle.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::buffer::{MeshBuffer, VertexPositionNormalUv};
use crate::camera::CameraUniform;

/// Uniform for the energy shader. `color` is the current cycle color; `time`
/// advances by a fixed step per frame.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct EnergyUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub time: f32,
}

/// Additive back-face energy shell pipeline.
pub struct EnergyPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    pub energy_bind_group_layout: wgpu::BindGroupLayout,
}

impl EnergyPipeline {
    /// Create the energy pipeline.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("energy-shader"),
            source: wgpu::ShaderSource::Wgsl(ENERGY_SHADER_SOURCE.into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("energy-camera-bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(
                            std::mem::size_of::<CameraUniform>() as u64
                        ),
                    },
                    count: None,
                }],
            });

        let energy_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("energy-uniform-bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(
                            std::mem::size_of::<EnergyUniform>() as u64
                        ),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("energy-pipeline-layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &energy_bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("energy-pipeline"),
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
                // Back faces only: the field wraps around the scene.
                cull_mode: Some(wgpu::Face::Front),
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
                    blend: Some(wgpu::BlendState {
                        color: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::One,
                            dst_factor: wgpu::BlendFactor::One,
                            operation: wgpu::BlendOperation::Add,
                        },
                        alpha: wgpu::BlendComponent::OVER,
                    }),
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
            energy_bind_group_layout,
        }
    }

    /// Build a bind group for a camera uniform buffer.
    pub fn camera_bind_group(
        &self,
        device: &wgpu::Device,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("energy-camera-bg"),
            layout: &self.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        })
    }

    /// Build a bind group for an energy uniform buffer.
    pub fn energy_bind_group(
        &self,
        device: &wgpu::Device,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("energy-uniform-bg"),
            layout: &self.energy_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        })
    }
}

/// Draw the energy shell.
pub fn draw_energy<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipeline: &EnergyPipeline,
    camera_bind_group: &'a wgpu::BindGroup,
    energy_bind_group: &'a wgpu::BindGroup,
    mesh: &'a MeshBuffer,
) {
    render_pass.set_pipeline(&pipeline.pipeline);
    render_pass.set_bind_group(0, camera_bind_group, &[]);
    render_pass.set_bind_group(1, energy_bind_group, &[]);
    mesh.bind(render_pass);
    mesh.draw(render_pass);
}

/// The WGSL source for the energy-field shader.
///
/// Intensity peaks where the view-space normal turns away from the camera,
/// modulated by a vertical wave traveling along the object-space y axis and
/// a global pulse.
pub const ENERGY_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

struct EnergyUniform {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    color: vec3<f32>,
    time: f32,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@group(1) @binding(0)
var<uniform> energy: EnergyUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) view_normal: vec3<f32>,
    @location(1) local_pos: vec3<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = camera.view_proj * energy.model * vec4<f32>(in.position, 1.0);
    out.view_normal =
        normalize((energy.view * energy.model * vec4<f32>(in.normal, 0.0)).xyz);
    out.local_pos = in.position;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.view_normal);
    let intensity = pow(max(0.7 - dot(n, vec3<f32>(0.0, 0.0, 1.0)), 0.0), 2.0);
    let wave = sin(in.local_pos.y * 10.0 + energy.time * 2.0) * 0.5 + 0.5;
    let pulse = sin(energy.time * 3.0) * 0.3 + 0.7;
    let strength = intensity * wave * pulse;
    return vec4<f32>(energy.color * strength, strength);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_uniform_size() {
        // Two mat4s plus vec3 + f32, 16-byte aligned.
        assert_eq!(std::mem::size_of::<EnergyUniform>(), 144);
    }

    #[test]
    fn test_pulse_envelope_range() {
        // The shader's pulse term sin(3t)*0.3 + 0.7 stays within [0.4, 1.0].
        for i in 0..1000 {
            let t = i as f32 * 0.01;
            let pulse = (t * 3.0).sin() * 0.3 + 0.7;
            assert!((0.4..=1.0).contains(&pulse));
        }
    }
}
