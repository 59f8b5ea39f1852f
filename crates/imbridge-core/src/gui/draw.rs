use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Opaque texture handle shared with the GUI library.
///
/// Unrelated to any native resource id; allocated by
/// [`TextureRegistry`](crate::TextureRegistry).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub usize);

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vertex as emitted by the GUI library (20 bytes):
///
///  offset  0  pos  [f32; 2]
///  offset  8  uv   [f32; 2]
///  offset 16  col  u32, packed RGBA8
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct DrawVert {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub col: u32,
}

pub type DrawIdx = u16;

/// One draw call worth of indices sharing a texture and clip rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub texture_id: TextureId,
    /// Left, top, right, bottom in display pixels.
    pub clip_rect: [f32; 4],
    pub elem_count: u32,
}

/// A partition of the frame's geometry with its own vertex/index range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub vtx_buffer: Vec<DrawVert>,
    pub idx_buffer: Vec<DrawIdx>,
    pub commands: Vec<DrawCmd>,
}

/// Everything the GUI library produced for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawData {
    pub lists: Vec<DrawList>,
    pub display_size: [f32; 2],
    pub framebuffer_scale: [f32; 2],
}

impl DrawData {
    pub fn total_vtx_count(&self) -> usize {
        self.lists.iter().map(|l| l.vtx_buffer.len()).sum()
    }

    pub fn total_idx_count(&self) -> usize {
        self.lists.iter().map(|l| l.idx_buffer.len()).sum()
    }
}

impl Default for DrawData {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            display_size: [0.0, 0.0],
            framebuffer_scale: [1.0, 1.0],
        }
    }
}
