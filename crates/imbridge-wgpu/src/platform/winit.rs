use std::collections::HashSet;
use std::sync::Arc;

use imbridge_core::platform::{CursorShape, Key, MouseState, Platform, TextInputSink};
use winit::event::{ElementState, Ime, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorIcon, Window};

/// Wheel units per line, matching the classic Windows `WHEEL_DELTA`.
const WHEEL_DELTA: f32 = 120.0;

/// [`Platform`] state tracked from winit window events.
///
/// Feed every event for the window through
/// [`WinitPlatform::handle_window_event`]. Mouse positions are in physical
/// pixels, the same space as the surface.
pub struct WinitPlatform {
    window: Arc<Window>,
    focused: bool,
    keys_down: HashSet<Key>,
    mouse: MouseState,
    wheel: f32,
    sinks: Vec<TextInputSink>,
    cursor: Option<CursorShape>,
}

impl WinitPlatform {
    pub fn new(window: Arc<Window>) -> Self {
        window.set_ime_allowed(true);
        Self {
            focused: window.has_focus(),
            window,
            keys_down: HashSet::new(),
            mouse: MouseState::default(),
            wheel: 0.0,
            sinks: Vec::new(),
            cursor: None,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Focused(focused) => {
                self.focused = *focused;
                if !*focused {
                    // Releases that happen while unfocused are never delivered.
                    self.keys_down.clear();
                    self.mouse.left = false;
                    self.mouse.right = false;
                    self.mouse.middle = false;
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.mouse.x = position.x as f32;
                self.mouse.y = position.y as f32;
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let down = *state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.mouse.left = down,
                    MouseButton::Right => self.mouse.right = down,
                    MouseButton::Middle => self.mouse.middle = down,
                    _ => {}
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.wheel += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y * WHEEL_DELTA,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32,
                };
                self.mouse.scroll_wheel = self.wheel.round() as i32;
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let key = map_key(event.physical_key);
                match event.state {
                    ElementState::Pressed => {
                        self.keys_down.insert(key);
                        if let Some(text) = event.text.as_deref() {
                            self.push_text(text);
                        }
                    }
                    ElementState::Released => {
                        self.keys_down.remove(&key);
                    }
                }
            }

            WindowEvent::Ime(Ime::Commit(text)) => self.push_text(text),

            _ => {}
        }
    }

    fn push_text(&self, text: &str) {
        // Control characters (backspace, enter, escape) arrive as keys.
        for c in text.chars().filter(|c| !c.is_control()) {
            for sink in &self.sinks {
                sink.push(c);
            }
        }
    }
}

impl Platform for WinitPlatform {
    fn is_active(&self) -> bool {
        self.focused
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    fn mouse_state(&self) -> MouseState {
        self.mouse
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        if self.cursor == Some(cursor) {
            return;
        }
        self.window.set_cursor(cursor_icon(cursor));
        self.cursor = Some(cursor);
    }

    fn register_text_input(&mut self, sink: TextInputSink) {
        self.sinks.push(sink);
    }
}

fn cursor_icon(cursor: CursorShape) -> CursorIcon {
    match cursor {
        CursorShape::Arrow => CursorIcon::Default,
        CursorShape::IBeam => CursorIcon::Text,
        CursorShape::SizeAll => CursorIcon::Move,
        CursorShape::SizeNS => CursorIcon::NsResize,
        CursorShape::SizeWE => CursorIcon::EwResize,
        CursorShape::SizeNESW => CursorIcon::NeswResize,
        CursorShape::SizeNWSE => CursorIcon::NwseResize,
        CursorShape::Hand => CursorIcon::Pointer,
        CursorShape::No => CursorIcon::NotAllowed,
        CursorShape::Wait => CursorIcon::Wait,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Tab => Key::Tab,
            KeyCode::ArrowLeft => Key::Left,
            KeyCode::ArrowRight => Key::Right,
            KeyCode::ArrowUp => Key::Up,
            KeyCode::ArrowDown => Key::Down,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::Delete => Key::Delete,
            KeyCode::Backspace => Key::Back,
            KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
            KeyCode::Escape => Key::Escape,

            KeyCode::KeyA => Key::A,
            KeyCode::KeyC => Key::C,
            KeyCode::KeyV => Key::V,
            KeyCode::KeyX => Key::X,
            KeyCode::KeyY => Key::Y,
            KeyCode::KeyZ => Key::Z,

            KeyCode::ShiftLeft => Key::LeftShift,
            KeyCode::ShiftRight => Key::RightShift,
            KeyCode::ControlLeft => Key::LeftControl,
            KeyCode::ControlRight => Key::RightControl,
            KeyCode::AltLeft => Key::LeftAlt,
            KeyCode::AltRight => Key::RightAlt,
            KeyCode::SuperLeft => Key::LeftSuper,
            KeyCode::SuperRight => Key::RightSuper,

            other => Key::Unknown(other as u32),
        },

        // winit 0.30 uses NativeKeyCode; no stable numeric is guaranteed here.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_are_mapped() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowLeft)), Key::Left);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Backspace)), Key::Back);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadEnter)), Key::Enter);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyZ)), Key::Z);
    }

    #[test]
    fn modifier_sides_stay_distinct() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftLeft)), Key::LeftShift);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftRight)), Key::RightShift);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::SuperRight)), Key::RightSuper);
    }

    #[test]
    fn unmapped_keys_are_unknown() {
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::F5)), Key::Unknown(_)));
    }

    #[test]
    fn every_cursor_shape_has_an_icon() {
        assert_eq!(cursor_icon(CursorShape::Arrow), CursorIcon::Default);
        assert_eq!(cursor_icon(CursorShape::IBeam), CursorIcon::Text);
        assert_eq!(cursor_icon(CursorShape::Hand), CursorIcon::Pointer);
        assert_eq!(cursor_icon(CursorShape::No), CursorIcon::NotAllowed);
    }
}
