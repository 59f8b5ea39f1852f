use super::effect::BasicEffect;

/// Viewport rectangle in back-buffer pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-target viewport with the default depth range.
    #[inline]
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::full(0, 0)
    }
}

/// Scissor rectangle in back-buffer pixels.
///
/// Signed like the GUI's clip rectangles; a negative or zero extent clips
/// everything.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ScissorRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScissorRect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds a scissor rectangle from a `[left, top, right, bottom]` clip
    /// rectangle scaled by `scale`. Coordinates are truncated toward zero.
    pub fn from_clip_rect(clip: [f32; 4], scale: [f32; 2]) -> Self {
        let left = clip[0] * scale[0];
        let top = clip[1] * scale[1];
        let right = clip[2] * scale[0];
        let bottom = clip[3] * scale[1];

        Self::new(
            left as i32,
            top as i32,
            (right - left) as i32,
            (bottom - top) as i32,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VertexFormat {
    Float32x2,
    /// Four normalized bytes packed into a `u32`.
    Color,
}

impl VertexFormat {
    pub const fn size(self) -> u32 {
        match self {
            VertexFormat::Float32x2 => 8,
            VertexFormat::Color => 4,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VertexUsage {
    Position,
    TextureCoordinate,
    Color,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VertexElement {
    pub offset: u32,
    pub format: VertexFormat,
    pub usage: VertexUsage,
}

/// Byte layout of one vertex.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VertexLayout {
    pub stride: u32,
    pub elements: &'static [VertexElement],
}

/// Layout of [`DrawVert`](crate::gui::DrawVert). Must match it byte for byte;
/// vertices are uploaded without conversion.
pub const DRAW_VERT_LAYOUT: VertexLayout = VertexLayout {
    stride: 20,
    elements: &[
        VertexElement {
            offset: 0,
            format: VertexFormat::Float32x2,
            usage: VertexUsage::Position,
        },
        VertexElement {
            offset: 8,
            format: VertexFormat::Float32x2,
            usage: VertexUsage::TextureCoordinate,
        },
        VertexElement {
            offset: 16,
            format: VertexFormat::Color,
            usage: VertexUsage::Color,
        },
    ],
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IndexFormat {
    U16,
    U32,
}

impl IndexFormat {
    pub const fn size(self) -> usize {
        match self {
            IndexFormat::U16 => 2,
            IndexFormat::U32 => 4,
        }
    }
}

/// Arguments of one indexed triangle-list draw.
///
/// `base_vertex` is added to every index; `start_index` and `primitive_count`
/// select the index range (`primitive_count * 3` indices).
#[derive(Debug, Clone)]
pub struct IndexedDraw<'a, T> {
    pub texture: &'a T,
    pub effect: &'a BasicEffect,
    pub base_vertex: u32,
    pub min_vertex_index: u32,
    pub num_vertices: u32,
    pub start_index: u32,
    pub primitive_count: u32,
}
