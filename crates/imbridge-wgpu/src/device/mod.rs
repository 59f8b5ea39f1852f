//! [`GraphicsDevice`] on top of wgpu.
//!
//! wgpu has no immediate state: draws live inside a render pass that borrows
//! an encoder. [`WgpuDevice`] records the calls the bridge makes during
//! `end_layout` and [`WgpuDevice::encode`] replays them into one pass over
//! the frame's color target.

mod commands;
mod pipeline;
mod recording;
mod transforms;

use std::sync::Arc;

use imbridge_core::device::{
    GraphicsDevice, IndexFormat, IndexedDraw, RenderState, ScissorRect, VertexLayout, Viewport,
};

use commands::{PassCommand, align_up, clamp_scissor, viewport_args};
use pipeline::GuiPipeline;
use recording::PassRecording;

/// Device-side geometry buffer.
#[derive(Debug, Clone)]
pub struct WgpuBuffer {
    buffer: Arc<wgpu::Buffer>,
    index_format: Option<wgpu::IndexFormat>,
}

impl WgpuBuffer {
    pub fn size(&self) -> u64 {
        self.buffer.size()
    }
}

/// Texture as the GUI pipeline samples it: view + sampler bind group.
#[derive(Debug, Clone)]
pub struct WgpuTexture {
    bind_group: Arc<wgpu::BindGroup>,
}

pub struct WgpuDevice {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: GuiPipeline,

    target_size: (u32, u32),
    viewport: Viewport,
    scissor: ScissorRect,

    recording: PassRecording,
    warned_render_state: bool,
}

impl WgpuDevice {
    /// Creates the GUI pipeline for `target_format`.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target_format: wgpu::TextureFormat,
        target_size: (u32, u32),
    ) -> Self {
        let pipeline = GuiPipeline::new(device, target_format);
        let recording =
            PassRecording::new(device.limits().min_uniform_buffer_offset_alignment);

        Self {
            device: device.clone(),
            queue: queue.clone(),
            pipeline,
            target_size,
            viewport: Viewport::full(target_size.0, target_size.1),
            scissor: ScissorRect::new(0, 0, target_size.0 as i32, target_size.1 as i32),
            recording,
            warned_render_state: false,
        }
    }

    /// Sets the size of the next frame's color target and resets viewport
    /// and scissor to cover it.
    pub fn set_target_size(&mut self, width: u32, height: u32) {
        self.target_size = (width, height);
        self.viewport = Viewport::full(width, height);
        self.scissor = ScissorRect::new(0, 0, width as i32, height as i32);
    }

    /// Wraps an existing texture view so the GUI can draw it.
    ///
    /// Bind the result with
    /// [`GuiRenderer::bind_texture`](imbridge_core::GuiRenderer::bind_texture).
    pub fn register_texture(&self, view: &wgpu::TextureView) -> WgpuTexture {
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("imbridge texture bind group"),
            layout: &self.pipeline.texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.pipeline.sampler),
                },
            ],
        });

        WgpuTexture {
            bind_group: Arc::new(bind_group),
        }
    }

    /// Number of recorded pass commands waiting for [`WgpuDevice::encode`].
    pub fn pending_commands(&self) -> usize {
        self.recording.len()
    }

    /// Drops recorded calls that will never be encoded, e.g. when the frame's
    /// surface could not be acquired.
    pub fn discard(&mut self) {
        self.recording.discard();
    }

    /// Replays the recorded calls into one render pass over `target`.
    ///
    /// The target is loaded, not cleared. Does nothing if no draw was
    /// recorded since the last call.
    pub fn encode(&mut self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        if !self.recording.has_draws() {
            self.recording.discard();
            return;
        }

        let commands = self.recording.take_commands();
        let target_size = self.target_size;

        let Some(transform_group) = self.recording.transforms.upload(
            &self.device,
            &self.queue,
            &self.pipeline.transform_layout,
        ) else {
            self.recording.discard();
            return;
        };

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("imbridge gui pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline.pipeline);

        // Draws under an empty scissor are dropped.
        let mut clipped_out = false;

        for command in &commands {
            match command {
                PassCommand::Viewport(v) => {
                    if let Some([x, y, w, h, min_depth, max_depth]) = viewport_args(*v) {
                        rpass.set_viewport(x, y, w, h, min_depth, max_depth);
                    }
                }
                PassCommand::Scissor(rect) => match clamp_scissor(*rect, target_size) {
                    Some((x, y, w, h)) => {
                        rpass.set_scissor_rect(x, y, w, h);
                        clipped_out = false;
                    }
                    None => clipped_out = true,
                },
                PassCommand::Geometry {
                    vertices,
                    indices,
                    index_format,
                } => {
                    rpass.set_vertex_buffer(0, vertices.slice(..));
                    rpass.set_index_buffer(indices.slice(..), *index_format);
                }
                PassCommand::Draw {
                    texture,
                    transform_offset,
                    indices,
                    base_vertex,
                } => {
                    if clipped_out || indices.is_empty() {
                        continue;
                    }
                    rpass.set_bind_group(0, transform_group, &[*transform_offset]);
                    rpass.set_bind_group(1, &**texture, &[]);
                    rpass.draw_indexed(indices.clone(), *base_vertex, 0..1);
                }
            }
        }

        drop(rpass);
        self.recording.discard();
    }

    fn create_buffer(
        &self,
        label: &'static str,
        size: u64,
        usage: wgpu::BufferUsages,
    ) -> Arc<wgpu::Buffer> {
        Arc::new(self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: align_up(size.max(1), wgpu::COPY_BUFFER_ALIGNMENT),
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }))
    }
}

impl GraphicsDevice for WgpuDevice {
    type Texture = WgpuTexture;
    type Buffer = WgpuBuffer;

    fn create_vertex_buffer(&mut self, layout: &VertexLayout, vertex_count: usize) -> WgpuBuffer {
        let size = vertex_count as u64 * layout.stride as u64;
        WgpuBuffer {
            buffer: self.create_buffer("imbridge gui vbo", size, wgpu::BufferUsages::VERTEX),
            index_format: None,
        }
    }

    fn create_index_buffer(&mut self, format: IndexFormat, index_count: usize) -> WgpuBuffer {
        let size = index_count as u64 * format.size() as u64;
        WgpuBuffer {
            buffer: self.create_buffer("imbridge gui ibo", size, wgpu::BufferUsages::INDEX),
            index_format: Some(match format {
                IndexFormat::U16 => wgpu::IndexFormat::Uint16,
                IndexFormat::U32 => wgpu::IndexFormat::Uint32,
            }),
        }
    }

    fn release_buffer(&mut self, buffer: WgpuBuffer) {
        log::trace!("releasing gui buffer ({} bytes)", buffer.size());
        drop(buffer);
    }

    fn write_buffer(&mut self, buffer: &WgpuBuffer, data: &[u8]) {
        // wgpu copies in 4-byte units; buffers are sized with the padding in mind.
        let padded = align_up(data.len() as u64, wgpu::COPY_BUFFER_ALIGNMENT) as usize;
        if padded == data.len() {
            self.queue.write_buffer(&buffer.buffer, 0, data);
        } else {
            let mut bytes = Vec::with_capacity(padded);
            bytes.extend_from_slice(data);
            bytes.resize(padded, 0);
            self.queue.write_buffer(&buffer.buffer, 0, &bytes);
        }
    }

    fn create_texture_rgba8(&mut self, width: u32, height: u32, pixels: &[u8]) -> WgpuTexture {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("imbridge gui texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        self.register_texture(&view)
    }

    fn back_buffer_size(&self) -> (u32, u32) {
        self.target_size
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.recording.push(PassCommand::Viewport(viewport));
    }

    fn scissor_rect(&self) -> ScissorRect {
        self.scissor
    }

    fn set_scissor_rect(&mut self, rect: ScissorRect) {
        self.scissor = rect;
        self.recording.push(PassCommand::Scissor(rect));
    }

    fn apply_render_state(&mut self, state: &RenderState) {
        // The pipeline is built for the GUI state only.
        if *state != RenderState::gui() && !self.warned_render_state {
            log::warn!("unsupported render state {state:?}; using the GUI pipeline state");
            self.warned_render_state = true;
        }
    }

    fn set_geometry(&mut self, vertices: &WgpuBuffer, indices: &WgpuBuffer) {
        self.recording.push(PassCommand::Geometry {
            vertices: vertices.buffer.clone(),
            indices: indices.buffer.clone(),
            index_format: indices.index_format.unwrap_or(wgpu::IndexFormat::Uint16),
        });
    }

    fn draw_indexed(&mut self, draw: &IndexedDraw<'_, WgpuTexture>) {
        let mvp = draw.effect.world_view_projection().to_cols_array();
        let transform_offset = self.recording.transforms.push(mvp);

        let first = draw.start_index;
        let count = draw.primitive_count * 3;

        self.recording.push(PassCommand::Draw {
            texture: draw.texture.bind_group.clone(),
            transform_offset,
            indices: first..first + count,
            base_vertex: draw.base_vertex as i32,
        });
    }
}
