/// Renderer configuration.
///
/// Keep this structure small. Fields exist only where two reasonable
/// behaviors were observed in deployed hosts.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Offset added to every edge of the orthographic projection, in pixels.
    ///
    /// `0.0` maps GUI coordinates straight onto pixel corners. Some hosts
    /// shift by `0.5` to sample pixel centers.
    pub projection_offset: f32,

    /// Skip the per-frame input update while the host window is unfocused.
    ///
    /// Typed text is still forwarded; only the sampled key/mouse state is frozen.
    pub require_focus: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            projection_offset: 0.0,
            require_focus: true,
        }
    }
}
