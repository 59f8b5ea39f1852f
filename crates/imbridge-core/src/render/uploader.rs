use crate::device::{
    BasicEffect, DRAW_VERT_LAYOUT, GraphicsDevice, IndexFormat, IndexedDraw, RenderState,
    ScissorRect, Viewport,
};
use crate::error::Result;
use crate::gui::DrawData;
use crate::texture::TextureRegistry;

use super::buffer::{GeometryBuffer, GeometryKind};

/// Counters for one rendered frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RenderStats {
    pub draw_calls: u32,
    pub vertices: usize,
    pub indices: usize,
}

/// Turns a frame's [`DrawData`] into device draws.
///
/// Owns one vertex and one index [`GeometryBuffer`]. Each frame packs every
/// draw list back to back, uploads once, then issues one indexed draw per
/// draw command with that command's texture and scissor rectangle.
#[derive(Debug)]
pub struct DrawDataUploader<B> {
    vertices: GeometryBuffer<B>,
    indices: GeometryBuffer<B>,
    state: RenderState,
    projection_offset: f32,
}

impl<B> DrawDataUploader<B> {
    pub fn new(projection_offset: f32) -> Self {
        Self {
            vertices: GeometryBuffer::new(GeometryKind::Vertices(DRAW_VERT_LAYOUT)),
            indices: GeometryBuffer::new(GeometryKind::Indices(IndexFormat::U16)),
            state: RenderState::gui(),
            projection_offset,
        }
    }

    /// Vertex capacity in elements.
    #[inline]
    pub fn vertex_capacity(&self) -> usize {
        self.vertices.capacity()
    }

    /// Index capacity in elements.
    #[inline]
    pub fn index_capacity(&self) -> usize {
        self.indices.capacity()
    }

    /// Renders one frame.
    ///
    /// Does nothing when the frame has no vertices. Otherwise the device's
    /// viewport and scissor rectangle are saved and restored around the pass,
    /// also when a draw command references an unbound texture. Draws issued
    /// before such a command stay submitted.
    pub fn render<D>(
        &mut self,
        device: &mut D,
        textures: &TextureRegistry<D::Texture>,
        draw_data: &DrawData,
    ) -> Result<RenderStats>
    where
        D: GraphicsDevice<Buffer = B>,
    {
        let total_vtx = draw_data.total_vtx_count();
        if total_vtx == 0 {
            return Ok(RenderStats::default());
        }
        let total_idx = draw_data.total_idx_count();

        self.vertices.ensure_capacity(device, total_vtx);
        self.indices.ensure_capacity(device, total_idx);

        self.vertices.clear();
        self.indices.clear();
        for list in &draw_data.lists {
            self.vertices.extend(bytemuck::cast_slice(&list.vtx_buffer));
            self.indices.extend(bytemuck::cast_slice(&list.idx_buffer));
        }
        self.vertices.upload(device);
        self.indices.upload(device);

        let saved_viewport = device.viewport();
        let saved_scissor = device.scissor_rect();

        device.apply_render_state(&self.state);
        let (width, height) = device.back_buffer_size();
        device.set_viewport(Viewport::full(width, height));

        let result = self.draw_lists(device, textures, draw_data);

        device.set_viewport(saved_viewport);
        device.set_scissor_rect(saved_scissor);

        let draw_calls = result?;
        Ok(RenderStats {
            draw_calls,
            vertices: total_vtx,
            indices: total_idx,
        })
    }

    fn draw_lists<D>(
        &self,
        device: &mut D,
        textures: &TextureRegistry<D::Texture>,
        draw_data: &DrawData,
    ) -> Result<u32>
    where
        D: GraphicsDevice<Buffer = B>,
    {
        // Without indices nothing is drawn, but textures are still resolved.
        let geometry = match (self.vertices.gpu(), self.indices.gpu()) {
            (Some(vbo), Some(ibo)) if draw_data.total_idx_count() > 0 => Some((vbo, ibo)),
            _ => None,
        };
        if let Some((vbo, ibo)) = geometry {
            device.set_geometry(vbo, ibo);
        }

        let effect = BasicEffect::for_display(draw_data.display_size, self.projection_offset);

        let mut draw_calls = 0;
        let mut vtx_offset = 0u32;
        let mut idx_offset = 0u32;

        for list in &draw_data.lists {
            let num_vertices = list.vtx_buffer.len() as u32;

            for cmd in &list.commands {
                let texture = textures.lookup(cmd.texture_id)?;

                if geometry.is_some() {
                    device.set_scissor_rect(ScissorRect::from_clip_rect(
                        cmd.clip_rect,
                        draw_data.framebuffer_scale,
                    ));
                    device.draw_indexed(&IndexedDraw {
                        texture,
                        effect: &effect,
                        base_vertex: vtx_offset,
                        min_vertex_index: 0,
                        num_vertices,
                        start_index: idx_offset,
                        primitive_count: cmd.elem_count / 3,
                    });
                    draw_calls += 1;
                }

                idx_offset += cmd.elem_count;
            }

            vtx_offset += num_vertices;
        }

        Ok(draw_calls)
    }

    /// Releases both device buffers.
    pub fn release<D>(&mut self, device: &mut D)
    where
        D: GraphicsDevice<Buffer = B>,
    {
        self.vertices.release(device);
        self.indices.release(device);
    }
}
