//! Full frames through the orchestrating renderer.

mod common;

use std::time::Duration;

use common::*;
use imbridge_core::gui::TextureId;
use imbridge_core::{Error, GuiRenderer, RendererConfig};

type Renderer = GuiRenderer<FakeGui, RecordingDevice>;

fn setup() -> (Renderer, RecordingDevice, ScriptedPlatform) {
    let mut renderer = Renderer::new(FakeGui::new(), RendererConfig::default());
    let mut platform = ScriptedPlatform::focused();
    renderer.initialize(&mut platform);
    (renderer, RecordingDevice::new(800, 600), platform)
}

#[test]
fn begin_layout_writes_delta_time_and_starts_a_frame() {
    let (mut renderer, device, mut platform) = setup();

    renderer
        .begin_layout(&mut platform, &device, Duration::from_millis(20))
        .unwrap();

    let gui = renderer.gui();
    assert!((gui.io.delta_time - 0.02).abs() < 1e-6);
    assert_eq!(gui.frames_started, 1);
    assert_eq!(gui.io.display_size, [800.0, 600.0]);
}

#[test]
fn font_rebuild_registers_exactly_one_font_texture() {
    let (mut renderer, mut device, _) = setup();

    let first = renderer.rebuild_font_atlas(&mut device).unwrap();
    assert_eq!(first, TextureId(0));
    assert_eq!(renderer.gui().font_texture_id, Some(first));
    assert!(renderer.gui().atlas_cleared);

    let second = renderer.rebuild_font_atlas(&mut device).unwrap();
    assert_eq!(second, TextureId(1));
    assert_eq!(renderer.textures().len(), 1);
    assert!(!renderer.textures().contains(first));
    assert_eq!(renderer.textures().font_texture(), Some(second));
    assert_eq!(renderer.gui().font_texture_id, Some(second));

    assert_eq!(device.count(|c| matches!(c, Call::CreateTexture { width: 2, height: 2, .. })), 2);
}

#[test]
fn font_rebuild_uploads_only_the_atlas_pixels() {
    let (mut renderer, mut device, _) = setup();
    // Trailing bytes past width * height * 4 are not part of the image.
    renderer.gui_mut().atlas.extend([0; 12]);

    renderer.rebuild_font_atlas(&mut device).unwrap();
    assert_eq!(device.count(|c| matches!(c, Call::CreateTexture { width: 2, height: 2, .. })), 1);
}

#[test]
fn font_rebuild_rejects_non_rgba32_atlas() {
    let (mut renderer, mut device, _) = setup();
    renderer.gui_mut().atlas_bpp = 1;

    let err = renderer.rebuild_font_atlas(&mut device).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidFontAtlas {
            width: 2,
            height: 2,
            bytes_per_pixel: 1,
            len: 16,
        }
    );
    assert!(device.calls.is_empty());
    assert_eq!(renderer.textures().len(), 0);
    assert!(!renderer.gui().atlas_cleared);
}

#[test]
fn font_rebuild_rejects_short_atlas_and_keeps_previous_font() {
    let (mut renderer, mut device, _) = setup();
    let font = renderer.rebuild_font_atlas(&mut device).unwrap();

    renderer.gui_mut().atlas.truncate(8);
    let err = renderer.rebuild_font_atlas(&mut device).unwrap_err();

    assert!(matches!(err, Error::InvalidFontAtlas { len: 8, .. }));
    assert_eq!(renderer.textures().font_texture(), Some(font));
    assert!(renderer.textures().contains(font));
}

#[test]
fn frame_renders_bound_textures() {
    let (mut renderer, mut device, mut platform) = setup();
    let font = renderer.rebuild_font_atlas(&mut device).unwrap();
    let image = renderer.bind_texture(TestTexture(500));
    assert_eq!(image, TextureId(1));

    renderer.gui_mut().frame = frame(
        vec![
            quad_list(font, 2, [0.0, 0.0, 800.0, 600.0]),
            quad_list(image, 1, [0.0, 0.0, 800.0, 600.0]),
        ],
        [800.0, 600.0],
    );

    renderer
        .begin_layout(&mut platform, &device, Duration::from_millis(16))
        .unwrap();
    let stats = renderer.end_layout(&mut device).unwrap();

    assert_eq!(stats.draw_calls, 3);
    let textures: Vec<_> = device.draws().iter().map(|d| d.texture).collect();
    assert_eq!(textures[2], TestTexture(500));
    assert_ne!(textures[0], TestTexture(500));
}

#[test]
fn unbound_texture_fails_the_frame() {
    let (mut renderer, mut device, mut platform) = setup();
    let image = renderer.bind_texture(TestTexture(500));
    assert_eq!(renderer.unbind_texture(image), Some(TestTexture(500)));
    assert_eq!(renderer.unbind_texture(image), None);

    renderer.gui_mut().frame = frame(vec![quad_list(image, 1, [0.0, 0.0, 8.0, 8.0])], [800.0, 600.0]);

    renderer
        .begin_layout(&mut platform, &device, Duration::from_millis(16))
        .unwrap();
    let err = renderer.end_layout(&mut device).unwrap_err();
    assert_eq!(err, Error::MissingTexture(image));
}

#[test]
fn cursor_error_propagates_from_begin_layout() {
    let (mut renderer, device, mut platform) = setup();
    renderer.gui_mut().cursor = -7;

    let err = renderer
        .begin_layout(&mut platform, &device, Duration::from_millis(16))
        .unwrap_err();
    assert_eq!(err, Error::UnsupportedCursor(-7));
}

#[test]
fn out_of_order_calls_still_render() {
    let (mut renderer, mut device, mut platform) = setup();
    let font = renderer.rebuild_font_atlas(&mut device).unwrap();
    renderer.gui_mut().frame = frame(vec![quad_list(font, 1, [0.0, 0.0, 8.0, 8.0])], [800.0, 600.0]);

    let stats = renderer.end_layout(&mut device).unwrap();
    assert_eq!(stats.draw_calls, 1);

    renderer
        .begin_layout(&mut platform, &device, Duration::from_millis(16))
        .unwrap();
    renderer
        .begin_layout(&mut platform, &device, Duration::from_millis(16))
        .unwrap();
    assert_eq!(renderer.gui().frames_started, 2);
}

#[test]
fn text_typed_between_frames_reaches_the_gui() {
    let (mut renderer, device, mut platform) = setup();
    platform.type_text("hey");

    renderer
        .begin_layout(&mut platform, &device, Duration::from_millis(16))
        .unwrap();
    assert_eq!(renderer.gui().chars, vec!['h', 'e', 'y']);
}
