use super::key::GuiKey;

/// Per-frame input block read by the GUI library.
///
/// Mirrors the subset of the library's IO structure that the bridge writes.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiIo {
    /// Seconds since the previous frame.
    pub delta_time: f32,

    /// Display size in pixels.
    pub display_size: [f32; 2],

    /// Framebuffer pixels per display pixel.
    pub display_framebuffer_scale: [f32; 2],

    pub mouse_pos: [f32; 2],

    /// Left, right, middle.
    pub mouse_down: [bool; 3],

    /// Vertical wheel steps this frame.
    pub mouse_wheel: f32,

    pub key_ctrl: bool,
    pub key_shift: bool,
    pub key_alt: bool,
    pub key_super: bool,

    pub keys_down: [bool; GuiKey::COUNT],
}

impl GuiIo {
    #[inline]
    pub fn key_down(&self, key: GuiKey) -> bool {
        self.keys_down[key.index()]
    }

    #[inline]
    pub fn set_key_down(&mut self, key: GuiKey, down: bool) {
        self.keys_down[key.index()] = down;
    }
}

impl Default for GuiIo {
    fn default() -> Self {
        Self {
            delta_time: 1.0 / 60.0,
            display_size: [0.0, 0.0],
            display_framebuffer_scale: [1.0, 1.0],
            mouse_pos: [0.0, 0.0],
            mouse_down: [false; 3],
            mouse_wheel: 0.0,
            key_ctrl: false,
            key_shift: false,
            key_alt: false,
            key_super: false,
            keys_down: [false; GuiKey::COUNT],
        }
    }
}
