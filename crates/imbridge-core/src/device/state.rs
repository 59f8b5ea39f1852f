/// Blend equation applied to the color target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BlendMode {
    Opaque,
    /// `src * src.a + dst * (1 - src.a)` with straight alpha.
    NonPremultiplied,
    AlphaBlend,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CullMode {
    None,
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FillMode {
    Solid,
    Wireframe,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DepthMode {
    None,
    Default,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SamplerMode {
    PointClamp,
    LinearClamp,
    LinearWrap,
}

/// Pipeline state for one pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderState {
    pub blend: BlendMode,
    pub blend_factor: [f32; 4],
    pub cull: CullMode,
    pub fill: FillMode,
    pub depth: DepthMode,
    pub scissor_test: bool,
    pub sampler: SamplerMode,
}

impl RenderState {
    /// State used for GUI geometry.
    pub const fn gui() -> Self {
        Self {
            blend: BlendMode::NonPremultiplied,
            blend_factor: [1.0; 4],
            cull: CullMode::None,
            fill: FillMode::Solid,
            depth: DepthMode::None,
            scissor_test: true,
            sampler: SamplerMode::PointClamp,
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::gui()
    }
}
