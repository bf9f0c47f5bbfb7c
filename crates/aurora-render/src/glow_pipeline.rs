//! 2D radial-gradient sprite pipeline for the starfield.
//!
//! Replicates canvas-style radial gradients on the GPU: each instance is a
//! screen-space disc with three color stops fading to transparent at the
//! rim, or a hard-edged solid disc for star cores and sparkles. Instances
//! are rebuilt every frame by the starfield simulation.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Viewport uniform: logical surface size for pixel-to-NDC conversion.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ViewportUniform {
    /// Logical width and height.
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

/// One gradient disc. Coordinates are logical pixels with y down, matching
/// the simulation space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GlowInstance {
    /// Disc center in logical pixels.
    pub center: [f32; 2],
    /// Disc radius in logical pixels.
    pub radius: f32,
    /// 0.0 = radial gradient fading to transparent, 1.0 = solid disc.
    pub hard_edge: f32,
    /// Color at the center (rgb) and overall alpha (a).
    pub color_inner: [f32; 4],
    /// Color at the 0.3 radius stop.
    pub color_mid: [f32; 4],
    /// Color at the 0.7 radius stop; fades to transparent at the rim.
    pub color_outer: [f32; 4],
}

impl GlowInstance {
    /// Vertex buffer layout for instanced rendering.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<GlowInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 0,
                shader_location: 1,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 16,
                shader_location: 2,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 32,
                shader_location: 3,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 48,
                shader_location: 4,
            },
        ],
    };

    /// A solid disc of one color.
    pub fn solid(center: [f32; 2], radius: f32, color: [f32; 3], alpha: f32) -> Self {
        let rgba = [color[0], color[1], color[2], alpha];
        Self {
            center,
            radius,
            hard_edge: 1.0,
            color_inner: rgba,
            color_mid: rgba,
            color_outer: rgba,
        }
    }

    /// A gradient disc through three color stops, transparent at the rim.
    pub fn gradient(
        center: [f32; 2],
        radius: f32,
        stops: [[f32; 3]; 3],
        alpha: f32,
    ) -> Self {
        Self {
            center,
            radius,
            hard_edge: 0.0,
            color_inner: [stops[0][0], stops[0][1], stops[0][2], alpha],
            color_mid: [stops[1][0], stops[1][1], stops[1][2], alpha],
            color_outer: [stops[2][0], stops[2][1], stops[2][2], alpha],
        }
    }
}

/// Quad corner vertex.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct QuadVertex {
    position: [f32; 2],
}

impl QuadVertex {
    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: 0,
        }],
    };
}

/// Renderer for 2D gradient discs with a per-frame instance budget.
pub struct GlowSpriteRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    viewport_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_count: u32,
    capacity: u32,
}

impl GlowSpriteRenderer {
    /// Create a glow sprite renderer with room for `capacity` discs.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat, capacity: u32) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("glow-sprite-shader"),
            source: wgpu::ShaderSource::Wgsl(GLOW_SHADER_SOURCE.into()),
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("glow-sprite-bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(16),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glow-sprite-layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glow-sprite-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[QuadVertex::LAYOUT, GlowInstance::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
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

        let quad_verts = [
            QuadVertex {
                position: [-1.0, -1.0],
            },
            QuadVertex {
                position: [1.0, -1.0],
            },
            QuadVertex {
                position: [1.0, 1.0],
            },
            QuadVertex {
                position: [-1.0, 1.0],
            },
        ];
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glow-sprite-verts"),
            contents: bytemuck::cast_slice(&quad_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let indices: [u16; 6] = [0, 1, 2, 2, 3, 0];
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glow-sprite-indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glow-sprite-instances"),
            size: (capacity as usize * std::mem::size_of::<GlowInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let viewport = ViewportUniform {
            size: [1.0, 1.0],
            _padding: [0.0; 2],
        };
        let viewport_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glow-sprite-viewport"),
            contents: bytemuck::bytes_of(&viewport),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glow-sprite-bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_buffer.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            instance_buffer,
            viewport_buffer,
            bind_group,
            instance_count: 0,
            capacity,
        }
    }

    /// Upload the viewport size and this frame's disc instances.
    pub fn update(
        &mut self,
        queue: &wgpu::Queue,
        logical_width: f32,
        logical_height: f32,
        instances: &[GlowInstance],
    ) {
        let count = instances.len().min(self.capacity as usize);
        self.instance_count = count as u32;

        let viewport = ViewportUniform {
            size: [logical_width, logical_height],
            _padding: [0.0; 2],
        };
        queue.write_buffer(&self.viewport_buffer, 0, bytemuck::bytes_of(&viewport));

        if count > 0 {
            queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&instances[..count]),
            );
        }
    }

    /// Render all active discs in instance order (painter's algorithm).
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        if self.instance_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..6, 0, 0..self.instance_count);
    }
}

/// WGSL shader for canvas-style radial gradient discs.
const GLOW_SHADER_SOURCE: &str = r#"
struct ViewportUniform {
    size: vec2<f32>,
    _padding: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> viewport: ViewportUniform;

struct VertexInput {
    @location(0) quad_pos: vec2<f32>,
    @location(1) center_radius_edge: vec4<f32>,
    @location(2) color_inner: vec4<f32>,
    @location(3) color_mid: vec4<f32>,
    @location(4) color_outer: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) hard_edge: f32,
    @location(2) color_inner: vec4<f32>,
    @location(3) color_mid: vec4<f32>,
    @location(4) color_outer: vec4<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    let center = in.center_radius_edge.xy;
    let radius = in.center_radius_edge.z;

    let pixel = center + in.quad_pos * radius;
    // Pixel space is y-down; NDC is y-up.
    let ndc = vec2<f32>(
        pixel.x / viewport.size.x * 2.0 - 1.0,
        1.0 - pixel.y / viewport.size.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.uv = in.quad_pos;
    out.hard_edge = in.center_radius_edge.w;
    out.color_inner = in.color_inner;
    out.color_mid = in.color_mid;
    out.color_outer = in.color_outer;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let d = length(in.uv);
    if d > 1.0 {
        discard;
    }

    if in.hard_edge > 0.5 {
        return in.color_inner;
    }

    // Color stops at 0.0, 0.3, 0.7, and transparent at 1.0.
    var color: vec3<f32>;
    var alpha = in.color_inner.a;
    if d < 0.3 {
        color = mix(in.color_inner.rgb, in.color_mid.rgb, d / 0.3);
    } else if d < 0.7 {
        color = mix(in.color_mid.rgb, in.color_outer.rgb, (d - 0.3) / 0.4);
    } else {
        color = in.color_outer.rgb;
        alpha = alpha * (1.0 - (d - 0.7) / 0.3);
    }
    return vec4<f32>(color, alpha);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_instance_stride() {
        assert_eq!(std::mem::size_of::<GlowInstance>(), 64);
        assert_eq!(GlowInstance::LAYOUT.array_stride, 64);
    }

    #[test]
    fn test_solid_disc_has_uniform_stops() {
        let disc = GlowInstance::solid([10.0, 20.0], 2.0, [1.0, 0.5, 0.0], 0.8);
        assert_eq!(disc.hard_edge, 1.0);
        assert_eq!(disc.color_inner, disc.color_mid);
        assert_eq!(disc.color_mid, disc.color_outer);
        assert_eq!(disc.color_inner[3], 0.8);
    }

    #[test]
    fn test_gradient_disc_carries_stops() {
        let stops = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let disc = GlowInstance::gradient([0.0, 0.0], 5.0, stops, 0.5);
        assert_eq!(disc.hard_edge, 0.0);
        assert_eq!(disc.color_inner[0], 1.0);
        assert_eq!(disc.color_mid[1], 1.0);
        assert_eq!(disc.color_outer[2], 1.0);
    }
}
