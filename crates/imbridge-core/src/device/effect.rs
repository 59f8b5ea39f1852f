use glam::Mat4;

/// Fixed-function textured effect: vertex color times texture sample,
/// transformed by `projection * view * world`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BasicEffect {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl BasicEffect {
    /// Effect for GUI geometry: identity world/view and an orthographic
    /// off-center projection mapping `(0, 0)..display_size` onto clip space,
    /// y pointing down. `offset` is added to every edge.
    pub fn for_display(display_size: [f32; 2], offset: f32) -> Self {
        let [w, h] = display_size;
        Self {
            world: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::orthographic_rh(offset, w + offset, h + offset, offset, -1.0, 1.0),
        }
    }

    /// Combined transform in the order the vertex stage applies it.
    #[inline]
    pub fn world_view_projection(&self) -> Mat4 {
        self.projection * self.view * self.world
    }
}
