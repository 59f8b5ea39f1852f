use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use imbridge_core::time::FrameClock;
use imbridge_core::{GraphicsDevice, GuiRenderer, TextureId};
use imbridge_wgpu::{Gpu, SurfaceErrorAction, WgpuDevice, WinitPlatform};

use crate::config::DemoConfig;
use crate::gui::DemoGui;

/// Checkerboard bound as a user texture.
const CHECKER_SIZE: u32 = 8;

struct WindowState {
    window: Arc<Window>,
    gpu: Gpu,
    device: WgpuDevice,
    platform: WinitPlatform,
    renderer: GuiRenderer<DemoGui, WgpuDevice>,
    checker: TextureId,
    clock: FrameClock,
}

pub struct DemoApp {
    config: DemoConfig,
    state: Option<WindowState>,
    error: Option<anyhow::Error>,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            state: None,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_window_state(&self, event_loop: &ActiveEventLoop) -> Result<WindowState> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = pollster::block_on(Gpu::new(window.clone(), self.config.gpu.clone()))
            .context("GPU initialization failed")?;

        let size = gpu.size();
        let mut device = WgpuDevice::new(
            gpu.device(),
            gpu.queue(),
            gpu.surface_format(),
            (size.width, size.height),
        );

        let mut platform = WinitPlatform::new(window.clone());
        let mut renderer = GuiRenderer::new(DemoGui::new(), self.config.renderer.clone());
        renderer.initialize(&mut platform);
        renderer.rebuild_font_atlas(&mut device)?;

        let pixels = checkerboard(CHECKER_SIZE);
        let texture = device.create_texture_rgba8(CHECKER_SIZE, CHECKER_SIZE, &pixels);
        let checker = renderer.bind_texture(texture);

        Ok(WindowState {
            window,
            gpu,
            device,
            platform,
            renderer,
            checker,
            clock: FrameClock::new(),
        })
    }
}

impl WindowState {
    fn layout(&mut self, elapsed: std::time::Duration) -> Result<()> {
        self.renderer
            .begin_layout(&mut self.platform, &self.device, elapsed)?;
        self.renderer.gui_mut().layout(Some(self.checker));
        let stats = self.renderer.end_layout(&mut self.device)?;
        log::trace!("{stats:?}");
        Ok(())
    }

    /// Runs one GUI frame and presents it. `Ok(false)` asks to exit.
    fn redraw(&mut self, clear_color: wgpu::Color) -> Result<bool> {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            return Ok(true);
        }
        self.device.set_target_size(size.width, size.height);

        // Acquire first so a skipped frame records nothing.
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return Ok(match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => false,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => true,
                });
            }
        };

        let elapsed = self.clock.tick();
        if let Err(e) = self.layout(elapsed) {
            self.device.discard();
            return Err(e);
        }

        frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("imbridge demo clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        self.device.encode(&mut frame.encoder, &frame.view);
        self.gpu.submit(frame);
        Ok(true)
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match self.create_window_state(event_loop) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => self.fail(event_loop, e.context("failed to create the demo window")),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw.
        if let Some(state) = self.state.as_ref() {
            state.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let clear_color = self.config.clear_color;
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if state.window.id() != window_id {
            return;
        }

        state.platform.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                self.state = None;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                state.gpu.resize(new_size);
                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = state.window.inner_size();
                state.gpu.resize(new_size);
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => match state.redraw(clear_color) {
                Ok(true) => {}
                Ok(false) => {
                    self.state = None;
                    self.fail(event_loop, anyhow::anyhow!("surface out of memory"));
                }
                Err(e) => {
                    self.state = None;
                    self.fail(event_loop, e.context("frame failed"));
                }
            },

            _ => {}
        }
    }
}

fn checkerboard(size: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let v = if (x + y) % 2 == 0 { 235 } else { 40 };
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    pixels
}
