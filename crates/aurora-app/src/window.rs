//! Window creation and event handling via winit.
//!
//! Provides [`AppState`] which implements winit's [`ApplicationHandler`]
//! trait, and [`run_with_config`] to start the event loop. The app owns the
//! window, GPU context, and pointer snapshot, and drives exactly one scene
//! update per redraw.

use std::sync::Arc;

use aurora_config::{Config, SceneKind};
use aurora_input::PointerState;
use aurora_orb::OrbScene;
use aurora_planet::PlanetScene;
use aurora_render::{
    RenderContext, SurfaceError, SurfaceResizeEvent, SurfaceWrapper, init_render_context_blocking,
};
use aurora_starfield::StarfieldScene;
use glam::Vec2;
use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::frame_clock::{FrameClock, FrameScheduler};

/// Decorative effects cap the device pixel ratio so dense displays don't
/// quadruple the fill cost. The starfield renders at native density.
const MAX_SCENE_SCALE_FACTOR: f64 = 2.0;

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// The active renderer, selected from configuration at startup.
enum ActiveScene {
    Starfield(StarfieldScene),
    Orb(OrbScene),
    Planet(PlanetScene),
}

/// Application state that manages the window, GPU context, and the scene.
pub struct AppState {
    /// The window handle, wrapped in `Arc` for sharing with the renderer.
    window: Option<Arc<Window>>,
    /// GPU context owning device, queue, and surface. `None` when GPU
    /// initialization failed; the app then shows an empty window.
    gpu: Option<RenderContext>,
    /// Cross-platform surface wrapper that normalizes resize/DPI behavior.
    surface_wrapper: SurfaceWrapper,
    /// The selected scene, built once the GPU is up.
    scene: Option<ActiveScene>,
    /// Frame-coherent pointer snapshot.
    pointer: PointerState,
    /// Wall-clock frame timer.
    clock: FrameClock,
    /// Gates per-frame updates; cancelled on shutdown.
    scheduler: FrameScheduler,
    /// Whether the orb's interaction hint was visible last frame.
    hint_was_visible: bool,
    /// Application configuration.
    config: Config,
}

impl AppState {
    /// Creates a new `AppState` from a [`Config`]. No window or GPU
    /// resources exist until [`ApplicationHandler::resumed`] fires.
    pub fn with_config(config: Config) -> Self {
        let max_scale = match config.scene {
            SceneKind::Starfield => f64::INFINITY,
            SceneKind::Orb | SceneKind::Planet => MAX_SCENE_SCALE_FACTOR,
        };
        Self {
            window: None,
            gpu: None,
            surface_wrapper: SurfaceWrapper::with_max_scale_factor(
                config.window.width,
                config.window.height,
                1.0,
                max_scale,
            ),
            scene: None,
            pointer: PointerState::new(),
            clock: FrameClock::new(),
            scheduler: FrameScheduler::new(),
            hint_was_visible: false,
            config,
        }
    }

    /// Build the configured scene against a live GPU context.
    fn build_scene(&self, gpu: &RenderContext) -> Option<ActiveScene> {
        let logical_w = self.surface_wrapper.logical_width() as f32;
        let logical_h = self.surface_wrapper.logical_height() as f32;
        let aspect = self.surface_wrapper.aspect_ratio();

        match self.config.scene {
            SceneKind::Starfield => Some(ActiveScene::Starfield(StarfieldScene::new(
                gpu,
                &self.config.starfield,
                logical_w,
                logical_h,
            ))),
            SceneKind::Orb => match OrbScene::new(gpu, &self.config.orb, aspect) {
                Ok(scene) => Some(ActiveScene::Orb(scene)),
                Err(e) => {
                    warn!("Orb scene initialization failed: {e}");
                    None
                }
            },
            SceneKind::Planet => match PlanetScene::new(
                gpu,
                &self.config.planet,
                aspect,
                Vec2::new(logical_w, logical_h),
            ) {
                Ok(scene) => Some(ActiveScene::Planet(scene)),
                Err(e) => {
                    warn!("Planet scene initialization failed: {e}");
                    None
                }
            },
        }
    }

    /// Propagate new surface dimensions to the GPU surface and scene.
    fn apply_resize(&mut self, resize: SurfaceResizeEvent) {
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(resize.physical_width, resize.physical_height);
        }
        let logical_w = resize.logical_width as f32;
        let logical_h = resize.logical_height as f32;
        let aspect = logical_w / logical_h.max(1.0);
        match &mut self.scene {
            Some(ActiveScene::Starfield(scene)) => scene.resize(logical_w, logical_h),
            Some(ActiveScene::Orb(scene)) => scene.resize(aspect),
            Some(ActiveScene::Planet(scene)) => {
                scene.resize(aspect, Vec2::new(logical_w, logical_h))
            }
            None => {}
        }
        info!(
            "Surface resized to {}x{} (scale: {:.2})",
            resize.physical_width, resize.physical_height, resize.scale_factor
        );
    }

    /// Advance the scene one frame and draw it.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick();
        let viewport_height = self.surface_wrapper.logical_height() as f32;

        let Some(gpu) = &self.gpu else {
            // GPU never came up; keep the window alive but draw nothing.
            return;
        };

        match &mut self.scene {
            Some(ActiveScene::Starfield(scene)) => scene.update(&gpu.queue, &self.pointer),
            Some(ActiveScene::Orb(scene)) => {
                scene.update(&gpu.queue, &self.pointer, dt, viewport_height);
                if self.hint_was_visible && !scene.hint_visible() {
                    info!("Interaction hint dismissed");
                }
                self.hint_was_visible = scene.hint_visible();
            }
            Some(ActiveScene::Planet(scene)) => scene.update(&gpu.queue, &self.pointer, dt),
            None => {}
        }

        let surface_texture = match gpu.get_current_texture() {
            Ok(texture) => texture,
            Err(SurfaceError::Timeout) => {
                warn!("Surface timeout, skipping frame");
                return;
            }
            Err(SurfaceError::Lost) => {
                warn!("Surface lost and not recovered, skipping frame");
                return;
            }
            Err(SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, shutting down");
                event_loop.exit();
                return;
            }
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene-encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(scene_clear_color(self.config.scene)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            match &self.scene {
                Some(ActiveScene::Starfield(scene)) => scene.render(&mut pass),
                Some(ActiveScene::Orb(scene)) => scene.render(&mut pass),
                Some(ActiveScene::Planet(scene)) => scene.render(&mut pass),
                None => {}
            }
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }
}

/// Background clear color for each scene.
fn scene_clear_color(scene: SceneKind) -> wgpu::Color {
    match scene {
        // Deep indigo matching the starfield's page backdrop.
        SceneKind::Starfield => wgpu::Color {
            r: 0.010,
            g: 0.010,
            b: 0.028,
            a: 1.0,
        },
        SceneKind::Orb | SceneKind::Planet => wgpu::Color {
            r: 0.02,
            g: 0.02,
            b: 0.08,
            a: 1.0,
        },
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = window_attributes_from_config(&self.config);
            let window = event_loop
                .create_window(attrs)
                .expect("Failed to create window");
            let window = Arc::new(window);

            // Seed the surface wrapper with actual window dimensions and scale.
            let inner_size = window.inner_size();
            self.surface_wrapper
                .handle_scale_factor_change(window.scale_factor());
            self.surface_wrapper
                .handle_resize(inner_size.width, inner_size.height);
            info!(
                "Surface initialized: {}x{} (scale: {:.2})",
                self.surface_wrapper.physical_width(),
                self.surface_wrapper.physical_height(),
                self.surface_wrapper.scale_factor()
            );

            // Decorative scenes degrade rather than abort: a machine without
            // a usable GPU still gets a window, just an empty one.
            match init_render_context_blocking(window.clone(), self.config.window.vsync) {
                Ok(gpu) => {
                    self.scene = self.build_scene(&gpu);
                    self.gpu = Some(gpu);
                }
                Err(e) => {
                    warn!("GPU initialization failed, continuing without rendering: {e}");
                }
            }

            window.request_redraw();
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                self.scheduler.cancel();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(resize) = self
                    .surface_wrapper
                    .handle_resize(new_size.width, new_size.height)
                {
                    self.apply_resize(resize);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let resize = self.surface_wrapper.handle_scale_factor_change(scale_factor);
                self.apply_resize(resize);
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Scenes work in logical pixels.
                let scale = self.surface_wrapper.scale_factor();
                self.pointer
                    .on_cursor_moved(position.x / scale, position.y / scale);
            }
            WindowEvent::CursorEntered { .. } => {
                self.pointer.on_cursor_entered();
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.on_cursor_left();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.pointer.on_button(button, state);
            }
            WindowEvent::RedrawRequested => {
                // Redraws already queued when the scheduler is cancelled
                // must not run a frame.
                if !self.scheduler.begin_frame() {
                    return;
                }
                self.redraw(event_loop);
                self.pointer.clear_transients();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Create the event loop and run the configured scene until the window
/// closes.
pub fn run_with_config(config: Config) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = AppState::with_config(config);
    event_loop
        .run_app(&mut app)
        .expect("Event loop terminated abnormally");
}
