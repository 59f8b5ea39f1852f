//! Host graphics-device seam.
//!
//! The device is modelled as a stateful immediate-style API: state setters,
//! resize-on-demand buffers and one indexed draw per call. Hosts whose native
//! API is pass-based (wgpu, Vulkan) record these calls and replay them.

mod effect;
mod state;
mod types;

pub use effect::BasicEffect;
pub use state::{BlendMode, CullMode, DepthMode, FillMode, RenderState, SamplerMode};
pub use types::{
    DRAW_VERT_LAYOUT, IndexFormat, IndexedDraw, ScissorRect, VertexElement, VertexFormat,
    VertexLayout, VertexUsage, Viewport,
};

/// Host graphics device.
///
/// All calls happen on the thread that owns the device, once per frame.
pub trait GraphicsDevice {
    /// Shared texture handle. Cloning must not copy pixel data.
    type Texture: Clone;

    /// Device-side geometry buffer.
    type Buffer;

    /// Allocates a vertex buffer for `vertex_count` vertices of `layout`.
    fn create_vertex_buffer(&mut self, layout: &VertexLayout, vertex_count: usize)
    -> Self::Buffer;

    /// Allocates an index buffer for `index_count` indices of `format`.
    fn create_index_buffer(&mut self, format: IndexFormat, index_count: usize) -> Self::Buffer;

    fn release_buffer(&mut self, buffer: Self::Buffer);

    /// Writes `data` at offset zero.
    fn write_buffer(&mut self, buffer: &Self::Buffer, data: &[u8]);

    /// Creates a texture from tightly packed RGBA8 pixels.
    fn create_texture_rgba8(&mut self, width: u32, height: u32, pixels: &[u8]) -> Self::Texture;

    /// Back buffer size in pixels.
    fn back_buffer_size(&self) -> (u32, u32);

    fn viewport(&self) -> Viewport;

    fn set_viewport(&mut self, viewport: Viewport);

    fn scissor_rect(&self) -> ScissorRect;

    fn set_scissor_rect(&mut self, rect: ScissorRect);

    fn apply_render_state(&mut self, state: &RenderState);

    /// Binds the vertex and index buffers used by subsequent draws.
    fn set_geometry(&mut self, vertices: &Self::Buffer, indices: &Self::Buffer);

    /// Issues one indexed triangle-list draw.
    fn draw_indexed(&mut self, draw: &IndexedDraw<'_, Self::Texture>);
}
