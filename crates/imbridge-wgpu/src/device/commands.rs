use std::ops::Range;
use std::sync::Arc;

use imbridge_core::device::{ScissorRect, Viewport};

/// One recorded pass operation, replayed in order by `WgpuDevice::encode`.
pub(super) enum PassCommand {
    Viewport(Viewport),
    Scissor(ScissorRect),
    Geometry {
        vertices: Arc<wgpu::Buffer>,
        indices: Arc<wgpu::Buffer>,
        index_format: wgpu::IndexFormat,
    },
    Draw {
        texture: Arc<wgpu::BindGroup>,
        transform_offset: u32,
        indices: Range<u32>,
        base_vertex: i32,
    },
}

/// Clamps `rect` to the render target. `None` when nothing is left.
pub(super) fn clamp_scissor(rect: ScissorRect, target: (u32, u32)) -> Option<(u32, u32, u32, u32)> {
    let (tw, th) = (target.0 as i64, target.1 as i64);

    let x = (rect.x as i64).clamp(0, tw);
    let y = (rect.y as i64).clamp(0, th);
    let x2 = (rect.x as i64 + rect.width as i64).clamp(0, tw);
    let y2 = (rect.y as i64 + rect.height as i64).clamp(0, th);

    let (w, h) = (x2 - x, y2 - y);
    if w <= 0 || h <= 0 {
        return None;
    }
    Some((x as u32, y as u32, w as u32, h as u32))
}

/// Viewport in wgpu's float form. `None` for an empty viewport.
pub(super) fn viewport_args(v: Viewport) -> Option<[f32; 6]> {
    if v.width == 0 || v.height == 0 {
        return None;
    }
    Some([
        v.x as f32,
        v.y as f32,
        v.width as f32,
        v.height as f32,
        v.min_depth,
        v.max_depth,
    ])
}

/// Rounds `size` up to a multiple of `align` (a power of two).
#[inline]
pub(super) fn align_up(size: u64, align: u64) -> u64 {
    (size + align - 1) & !(align - 1)
}
