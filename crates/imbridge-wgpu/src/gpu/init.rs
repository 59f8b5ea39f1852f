/// How [`crate::Gpu`] sets up the adapter, device and window surface.
///
/// The defaults suit a GUI overlay: GUI vertex colors are already
/// gamma-encoded, so the surface is a linear (non-sRGB) format and the
/// shader output is written unchanged.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Picks an sRGB surface format instead of a linear one. Only set this if
    /// the rest of the frame renders in linear space; GUI colors will then
    /// come out brighter.
    pub prefer_srgb: bool,

    /// Fifo waits for vblank, which caps the GUI at the display rate.
    pub present_mode: wgpu::PresentMode,

    /// Compositor alpha handling. `None`, or a mode the surface lacks, falls
    /// back to the first mode the surface reports.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// The GUI pipeline needs no optional features.
    pub required_features: wgpu::Features,

    pub required_limits: wgpu::Limits,

    /// Frames the CPU may queue ahead of presentation. Drivers may ignore it.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
