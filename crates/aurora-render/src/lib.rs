//! GPU plumbing shared by every scene: surface and device setup, cameras,
//! mesh and buffer helpers, and the render pipelines the scenes compose.

pub mod buffer;
pub mod camera;
pub mod energy_pipeline;
pub mod glow_pipeline;
pub mod gpu;
pub mod lit_pipeline;
pub mod mesh;
pub mod orbit;
pub mod pipeline;
pub mod point_pipeline;
pub mod surface;
pub mod texture;

pub use buffer::{BufferAllocator, IndexData, MeshBuffer, VertexPosition, VertexPositionNormalUv};
pub use camera::{Camera, CameraUniform};
pub use energy_pipeline::{EnergyPipeline, EnergyUniform, draw_energy, ENERGY_SHADER_SOURCE};
pub use glow_pipeline::{GlowInstance, GlowSpriteRenderer, ViewportUniform};
pub use gpu::{
    init_render_context_blocking, RenderContext, RenderContextError, SurfaceError,
};
pub use lit_pipeline::{
    draw_lit, LitObjectUniform, LitPipeline, LightsUniform, LIT_SHADER_SOURCE,
};
pub use mesh::{uv_sphere, SphereMesh};
pub use orbit::OrbitCamera;
pub use pipeline::{draw_shell, ShellBlend, ShellPipeline, ShellUniform, SHELL_SHADER_SOURCE};
pub use point_pipeline::{PointCloudRenderer, PointCloudUniform, PointInstance};
pub use surface::{SurfaceResizeEvent, SurfaceWrapper, MIN_SURFACE_DIMENSION};
pub use texture::{Texture2d, TextureError};
