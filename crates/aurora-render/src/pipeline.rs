//! Unlit shell pipeline: uniform-colored translucent geometry.
//!
//! One shader serves the orb's wireframe (line-list topology), the solid
//! core tint layers, the inner glow, and the planet's atmosphere/cloud
//! shells. Color and model transform come from a per-object uniform that is
//! rewritten every frame (the color cycle feeds the wireframe through it).

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::buffer::{MeshBuffer, VertexPosition};
use crate::camera::CameraUniform;

/// Per-object uniform: model transform plus flat RGBA color.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ShellUniform {
    pub model: [[f32; 4]; 4], // 64 bytes
    pub color: [f32; 4],      // rgb + alpha
}

/// How a shell is composited over what is already in the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellBlend {
    /// Standard source-over alpha blending.
    Alpha,
    /// Additive blending (energy/glow layers).
    Additive,
}

impl ShellBlend {
    fn state(self) -> wgpu::BlendState {
        match self {
            ShellBlend::Alpha => wgpu::BlendState::ALPHA_BLENDING,
            ShellBlend::Additive => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent::OVER,
            },
        }
    }
}

/// Unlit uniform-color pipeline.
pub struct ShellPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    pub object_bind_group_layout: wgpu::BindGroupLayout,
}

impl ShellPipeline {
    /// Create a shell pipeline for the given topology, blend, and cull mode.
    ///
    /// `cull_mode: Some(Face::Front)` renders back faces only, which is how
    /// the atmosphere halo surrounds its sphere.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        topology: wgpu::PrimitiveTopology,
        blend: ShellBlend,
        cull_mode: Option<wgpu::Face>,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shell-shader"),
            source: wgpu::ShaderSource::Wgsl(SHELL_SHADER_SOURCE.into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("shell-camera-bgl"),
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

        let object_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("shell-object-bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(
                            std::mem::size_of::<ShellUniform>() as u64
                        ),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shell-pipeline-layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &object_bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shell-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[VertexPosition::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode,
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
                    blend: Some(blend.state()),
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
            object_bind_group_layout,
        }
    }

    /// Build a bind group for a camera uniform buffer.
    pub fn camera_bind_group(
        &self,
        device: &wgpu::Device,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shell-camera-bg"),
            layout: &self.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        })
    }

    /// Build a bind group for a per-object uniform buffer.
    pub fn object_bind_group(
        &self,
        device: &wgpu::Device,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shell-object-bg"),
            layout: &self.object_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        })
    }
}

/// Draw a shell mesh with the given camera and object bind groups.
pub fn draw_shell<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipeline: &ShellPipeline,
    camera_bind_group: &'a wgpu::BindGroup,
    object_bind_group: &'a wgpu::BindGroup,
    mesh: &'a MeshBuffer,
) {
    render_pass.set_pipeline(&pipeline.pipeline);
    render_pass.set_bind_group(0, camera_bind_group, &[]);
    render_pass.set_bind_group(1, object_bind_group, &[]);
    mesh.bind(render_pass);
    mesh.draw(render_pass);
}

/// The WGSL source code for the shell shader.
pub const SHELL_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

struct ShellUniform {
    model: mat4x4<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@group(1) @binding(0)
var<uniform> object: ShellUniform;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return camera.view_proj * object.model * vec4<f32>(position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return object.color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_uniform_size_and_alignment() {
        assert_eq!(std::mem::size_of::<ShellUniform>(), 80);
        assert_eq!(std::mem::size_of::<ShellUniform>() % 16, 0);
    }

    #[test]
    fn test_additive_blend_uses_one_one() {
        let state = ShellBlend::Additive.state();
        assert_eq!(state.color.src_factor, wgpu::BlendFactor::One);
        assert_eq!(state.color.dst_factor, wgpu::BlendFactor::One);
    }
}
