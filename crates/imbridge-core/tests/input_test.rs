//! Input forwarding against a scripted platform.

mod common;

use common::*;
use imbridge_core::gui::{GuiKey, MouseCursor};
use imbridge_core::platform::{CursorShape, Key, MouseState};
use imbridge_core::{Error, InputBridge};

fn bridge(require_focus: bool) -> (InputBridge, FakeGui, ScriptedPlatform) {
    let mut input = InputBridge::new(require_focus);
    let mut gui = FakeGui::new();
    let mut platform = ScriptedPlatform::focused();
    input.initialize(&mut gui, &mut platform);
    (input, gui, platform)
}

#[test]
fn initialize_registers_text_input_and_default_font() {
    let (input, gui, platform) = bridge(true);

    assert_eq!(platform.sinks.len(), 1);
    assert!(gui.default_font_added);
    assert_eq!(input.key_map().len(), GuiKey::COUNT);
}

#[test]
fn mapped_keys_are_forwarded() {
    let (mut input, mut gui, mut platform) = bridge(true);
    platform.keys.extend([Key::Tab, Key::Back, Key::Z]);

    input.update(&mut gui, &mut platform, (640, 480)).unwrap();

    assert!(gui.io.key_down(GuiKey::Tab));
    assert!(gui.io.key_down(GuiKey::Backspace));
    assert!(gui.io.key_down(GuiKey::Z));
    assert!(!gui.io.key_down(GuiKey::Enter));

    platform.keys.clear();
    input.update(&mut gui, &mut platform, (640, 480)).unwrap();
    assert!(!gui.io.key_down(GuiKey::Tab));
}

#[test]
fn modifiers_accept_either_side() {
    let (mut input, mut gui, mut platform) = bridge(true);
    platform.keys.extend([Key::RightShift, Key::LeftControl, Key::RightAlt]);

    input.update(&mut gui, &mut platform, (640, 480)).unwrap();

    assert!(gui.io.key_shift);
    assert!(gui.io.key_ctrl);
    assert!(gui.io.key_alt);
    assert!(!gui.io.key_super);
}

#[test]
fn display_and_mouse_state_are_written() {
    let (mut input, mut gui, mut platform) = bridge(true);
    gui.io.display_framebuffer_scale = [2.0, 2.0];
    platform.mouse = MouseState {
        x: 12.0,
        y: 34.0,
        left: true,
        right: false,
        middle: true,
        scroll_wheel: 0,
    };

    input.update(&mut gui, &mut platform, (1024, 768)).unwrap();

    assert_eq!(gui.io.display_size, [1024.0, 768.0]);
    assert_eq!(gui.io.display_framebuffer_scale, [1.0, 1.0]);
    assert_eq!(gui.io.mouse_pos, [12.0, 34.0]);
    assert_eq!(gui.io.mouse_down, [true, false, true]);
}

#[test]
fn wheel_reports_the_sign_of_the_change() {
    let (mut input, mut gui, mut platform) = bridge(true);

    let mut wheel_after = |value: i32| {
        platform.mouse.scroll_wheel = value;
        input.update(&mut gui, &mut platform, (1, 1)).unwrap();
        gui.io.mouse_wheel
    };

    assert_eq!(wheel_after(120), 1.0);
    assert_eq!(wheel_after(120), 0.0);
    assert_eq!(wheel_after(-240), -1.0);
    assert_eq!(wheel_after(-120), 1.0);
}

#[test]
fn wheel_deltas_collapse_to_unit_steps() {
    let (mut input, mut gui, mut platform) = bridge(true);
    let mut reported = Vec::new();

    // Deltas of +5, 0, -3.
    for wheel in [5, 5, 2] {
        platform.mouse.scroll_wheel = wheel;
        input.update(&mut gui, &mut platform, (1, 1)).unwrap();
        reported.push(gui.io.mouse_wheel);
    }

    assert_eq!(reported, vec![1.0, 0.0, -1.0]);
    assert_eq!(input.scroll_wheel(), 2);
}

#[test]
fn cursor_is_forwarded() {
    let (mut input, mut gui, mut platform) = bridge(true);

    gui.cursor = MouseCursor::TextInput as i32;
    input.update(&mut gui, &mut platform, (1, 1)).unwrap();
    assert_eq!(platform.cursor, Some(CursorShape::IBeam));

    gui.cursor = MouseCursor::None as i32;
    input.update(&mut gui, &mut platform, (1, 1)).unwrap();
    assert_eq!(platform.cursor, Some(CursorShape::Arrow));

    gui.cursor = MouseCursor::Wait as i32;
    input.update(&mut gui, &mut platform, (1, 1)).unwrap();
    assert_eq!(platform.cursor, Some(CursorShape::Wait));
}

#[test]
fn unsupported_cursor_is_an_error() {
    let (mut input, mut gui, mut platform) = bridge(true);
    gui.cursor = 42;

    let err = input.update(&mut gui, &mut platform, (1, 1)).unwrap_err();
    assert_eq!(err, Error::UnsupportedCursor(42));
}

#[test]
fn typed_text_is_forwarded_without_tabs() {
    let (mut input, mut gui, mut platform) = bridge(true);
    platform.type_text("a\tb");

    input.update(&mut gui, &mut platform, (1, 1)).unwrap();
    assert_eq!(gui.chars, vec!['a', 'b']);

    input.update(&mut gui, &mut platform, (1, 1)).unwrap();
    assert_eq!(gui.chars, vec!['a', 'b']);
}

#[test]
fn unfocused_platform_leaves_input_untouched() {
    let (mut input, mut gui, mut platform) = bridge(true);
    platform.active = false;
    platform.keys.insert(Key::Enter);
    platform.mouse.x = 99.0;
    platform.mouse.scroll_wheel = 120;
    platform.type_text("x");
    gui.cursor = MouseCursor::Hand as i32;

    input.update(&mut gui, &mut platform, (640, 480)).unwrap();

    assert!(!gui.io.key_down(GuiKey::Enter));
    assert_eq!(gui.io.mouse_pos, [0.0, 0.0]);
    assert_eq!(gui.io.mouse_wheel, 0.0);
    assert_eq!(gui.io.display_size, [0.0, 0.0]);
    assert_eq!(platform.cursor, None);
    assert_eq!(gui.chars, vec!['x']);
}

#[test]
fn focus_check_can_be_disabled() {
    let (mut input, mut gui, mut platform) = bridge(false);
    platform.active = false;
    platform.keys.insert(Key::Enter);

    input.update(&mut gui, &mut platform, (640, 480)).unwrap();

    assert!(gui.io.key_down(GuiKey::Enter));
    assert_eq!(gui.io.display_size, [640.0, 480.0]);
}
