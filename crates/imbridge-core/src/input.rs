//! Per-frame input forwarding from the host into the GUI context.

use crate::error::Result;
use crate::gui::{GuiContext, GuiKey, MouseCursor};
use crate::platform::{CursorShape, Key, Platform, TextInputSink};

/// GUI navigation keys and the host keys that drive them.
pub const DEFAULT_KEY_MAP: [(GuiKey, Key); GuiKey::COUNT] = [
    (GuiKey::Tab, Key::Tab),
    (GuiKey::LeftArrow, Key::Left),
    (GuiKey::RightArrow, Key::Right),
    (GuiKey::UpArrow, Key::Up),
    (GuiKey::DownArrow, Key::Down),
    (GuiKey::PageUp, Key::PageUp),
    (GuiKey::PageDown, Key::PageDown),
    (GuiKey::Home, Key::Home),
    (GuiKey::End, Key::End),
    (GuiKey::Delete, Key::Delete),
    (GuiKey::Backspace, Key::Back),
    (GuiKey::Enter, Key::Enter),
    (GuiKey::Escape, Key::Escape),
    (GuiKey::A, Key::A),
    (GuiKey::C, Key::C),
    (GuiKey::V, Key::V),
    (GuiKey::X, Key::X),
    (GuiKey::Y, Key::Y),
    (GuiKey::Z, Key::Z),
];

/// Host cursor for a GUI cursor kind.
pub fn cursor_shape(cursor: MouseCursor) -> CursorShape {
    match cursor {
        MouseCursor::None | MouseCursor::Arrow => CursorShape::Arrow,
        MouseCursor::TextInput => CursorShape::IBeam,
        MouseCursor::ResizeAll => CursorShape::SizeAll,
        MouseCursor::ResizeNS => CursorShape::SizeNS,
        MouseCursor::ResizeEW => CursorShape::SizeWE,
        MouseCursor::ResizeNESW => CursorShape::SizeNESW,
        MouseCursor::ResizeNWSE => CursorShape::SizeNWSE,
        MouseCursor::Hand => CursorShape::Hand,
        MouseCursor::NotAllowed => CursorShape::No,
        MouseCursor::Wait => CursorShape::Wait,
    }
}

/// Samples the host once per frame and writes the result into the GUI IO
/// block.
#[derive(Debug)]
pub struct InputBridge {
    key_map: Vec<(GuiKey, Key)>,
    scroll_wheel: i32,
    text: TextInputSink,
    require_focus: bool,
}

impl InputBridge {
    pub fn new(require_focus: bool) -> Self {
        Self {
            key_map: Vec::new(),
            scroll_wheel: 0,
            text: TextInputSink::new(),
            require_focus,
        }
    }

    /// Builds the key map, hooks text input into `platform` and adds the
    /// GUI's default font. The font is not uploaded here.
    pub fn initialize<G, P>(&mut self, gui: &mut G, platform: &mut P)
    where
        G: GuiContext + ?Sized,
        P: Platform + ?Sized,
    {
        self.key_map = DEFAULT_KEY_MAP.to_vec();
        platform.register_text_input(self.text.clone());
        gui.add_default_font();
    }

    #[inline]
    pub fn key_map(&self) -> &[(GuiKey, Key)] {
        &self.key_map
    }

    /// Absolute wheel value seen at the last focused update.
    #[inline]
    pub fn scroll_wheel(&self) -> i32 {
        self.scroll_wheel
    }

    /// Forwards queued text, then (if the host is focused, or focus is not
    /// required) keys, modifiers, display size, mouse and cursor shape.
    ///
    /// `display_size` is the back buffer size in pixels.
    pub fn update<G, P>(
        &mut self,
        gui: &mut G,
        platform: &mut P,
        display_size: (u32, u32),
    ) -> Result<()>
    where
        G: GuiContext + ?Sized,
        P: Platform + ?Sized,
    {
        for c in self.text.drain() {
            gui.add_input_character(c);
        }

        if self.require_focus && !platform.is_active() {
            return Ok(());
        }

        let mouse = platform.mouse_state();
        let io = gui.io_mut();

        for &(gui_key, key) in &self.key_map {
            io.set_key_down(gui_key, platform.is_key_down(key));
        }

        let either = |l: Key, r: Key| platform.is_key_down(l) || platform.is_key_down(r);
        io.key_shift = either(Key::LeftShift, Key::RightShift);
        io.key_ctrl = either(Key::LeftControl, Key::RightControl);
        io.key_alt = either(Key::LeftAlt, Key::RightAlt);
        io.key_super = either(Key::LeftSuper, Key::RightSuper);

        io.display_size = [display_size.0 as f32, display_size.1 as f32];
        io.display_framebuffer_scale = [1.0, 1.0];

        io.mouse_pos = [mouse.x, mouse.y];
        io.mouse_down = [mouse.left, mouse.right, mouse.middle];

        let delta = mouse.scroll_wheel.wrapping_sub(self.scroll_wheel);
        io.mouse_wheel = delta.signum() as f32;
        self.scroll_wheel = mouse.scroll_wheel;

        let cursor = MouseCursor::try_from(gui.mouse_cursor())?;
        platform.set_cursor(cursor_shape(cursor));

        Ok(())
    }
}
