//! Host windowing/input seam.
//!
//! The bridge samples the host once per frame through [`Platform`]. Hosts
//! translate their own event streams into the polled state it exposes.

mod key;
mod text;

pub use key::Key;
pub use text::TextInputSink;

/// Cursor shapes a host can display.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CursorShape {
    Arrow,
    IBeam,
    SizeAll,
    SizeNS,
    SizeWE,
    SizeNESW,
    SizeNWSE,
    Hand,
    No,
    Wait,
}

/// Polled mouse state.
///
/// `scroll_wheel` is the cumulative wheel value since the host started, not a
/// per-frame delta.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left: bool,
    pub right: bool,
    pub middle: bool,
    pub scroll_wheel: i32,
}

/// Host windowing and input layer.
pub trait Platform {
    /// Whether the host window currently has focus.
    fn is_active(&self) -> bool;

    fn is_key_down(&self, key: Key) -> bool;

    fn mouse_state(&self) -> MouseState;

    fn set_cursor(&mut self, cursor: CursorShape);

    /// Registers a sink that receives every character the user types.
    fn register_text_input(&mut self, sink: TextInputSink);
}
