//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use glam::Mat4;
use imbridge_core::device::{
    GraphicsDevice, IndexFormat, IndexedDraw, RenderState, ScissorRect, VertexLayout, Viewport,
};
use imbridge_core::gui::{
    DrawCmd, DrawData, DrawList, DrawVert, FontAtlasImage, GuiContext, GuiIo, TextureId,
};
use imbridge_core::platform::{CursorShape, Key, MouseState, Platform, TextInputSink};

// ── device ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TestBuffer(pub u32);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TestTexture(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateVertexBuffer { buffer: TestBuffer, count: usize },
    CreateIndexBuffer { buffer: TestBuffer, count: usize },
    ReleaseBuffer(TestBuffer),
    WriteBuffer { buffer: TestBuffer, len: usize },
    CreateTexture { texture: TestTexture, width: u32, height: u32 },
    SetViewport(Viewport),
    SetScissor(ScissorRect),
    ApplyRenderState(RenderState),
    SetGeometry(TestBuffer, TestBuffer),
    Draw(DrawRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub texture: TestTexture,
    pub projection: Mat4,
    pub scissor: ScissorRect,
    pub viewport: Viewport,
    pub base_vertex: u32,
    pub num_vertices: u32,
    pub start_index: u32,
    pub primitive_count: u32,
}

/// Records every device call and keeps the latest contents of each buffer.
#[derive(Debug)]
pub struct RecordingDevice {
    pub calls: Vec<Call>,
    pub contents: HashMap<TestBuffer, Vec<u8>>,
    pub back_buffer: (u32, u32),
    pub viewport: Viewport,
    pub scissor: ScissorRect,
    next_handle: u32,
}

impl RecordingDevice {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            calls: Vec::new(),
            contents: HashMap::new(),
            back_buffer: (width, height),
            viewport: Viewport {
                x: 3,
                y: 4,
                width: 50,
                height: 60,
                min_depth: 0.0,
                max_depth: 1.0,
            },
            scissor: ScissorRect::new(7, 8, 9, 10),
            next_handle: 1,
        }
    }

    fn handle(&mut self) -> u32 {
        let h = self.next_handle;
        self.next_handle += 1;
        h
    }

    pub fn draws(&self) -> Vec<DrawRecord> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Draw(d) => Some(d.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl GraphicsDevice for RecordingDevice {
    type Texture = TestTexture;
    type Buffer = TestBuffer;

    fn create_vertex_buffer(&mut self, layout: &VertexLayout, count: usize) -> TestBuffer {
        assert_eq!(layout.stride, 20);
        let buffer = TestBuffer(self.handle());
        self.calls.push(Call::CreateVertexBuffer { buffer, count });
        buffer
    }

    fn create_index_buffer(&mut self, format: IndexFormat, count: usize) -> TestBuffer {
        assert_eq!(format, IndexFormat::U16);
        let buffer = TestBuffer(self.handle());
        self.calls.push(Call::CreateIndexBuffer { buffer, count });
        buffer
    }

    fn release_buffer(&mut self, buffer: TestBuffer) {
        self.contents.remove(&buffer);
        self.calls.push(Call::ReleaseBuffer(buffer));
    }

    fn write_buffer(&mut self, buffer: &TestBuffer, data: &[u8]) {
        self.contents.insert(*buffer, data.to_vec());
        self.calls.push(Call::WriteBuffer {
            buffer: *buffer,
            len: data.len(),
        });
    }

    fn create_texture_rgba8(&mut self, width: u32, height: u32, pixels: &[u8]) -> TestTexture {
        assert_eq!(pixels.len(), (width * height * 4) as usize);
        let texture = TestTexture(self.handle());
        self.calls.push(Call::CreateTexture {
            texture,
            width,
            height,
        });
        texture
    }

    fn back_buffer_size(&self) -> (u32, u32) {
        self.back_buffer
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.calls.push(Call::SetViewport(viewport));
    }

    fn scissor_rect(&self) -> ScissorRect {
        self.scissor
    }

    fn set_scissor_rect(&mut self, rect: ScissorRect) {
        self.scissor = rect;
        self.calls.push(Call::SetScissor(rect));
    }

    fn apply_render_state(&mut self, state: &RenderState) {
        self.calls.push(Call::ApplyRenderState(*state));
    }

    fn set_geometry(&mut self, vertices: &TestBuffer, indices: &TestBuffer) {
        self.calls.push(Call::SetGeometry(*vertices, *indices));
    }

    fn draw_indexed(&mut self, draw: &IndexedDraw<'_, TestTexture>) {
        self.calls.push(Call::Draw(DrawRecord {
            texture: *draw.texture,
            projection: draw.effect.projection,
            scissor: self.scissor,
            viewport: self.viewport,
            base_vertex: draw.base_vertex,
            num_vertices: draw.num_vertices,
            start_index: draw.start_index,
            primitive_count: draw.primitive_count,
        }));
    }
}

// ── platform ──────────────────────────────────────────────────────────────

/// Platform whose state is set directly by the test.
#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    pub active: bool,
    pub keys: HashSet<Key>,
    pub mouse: MouseState,
    pub cursor: Option<CursorShape>,
    pub sinks: Vec<TextInputSink>,
}

impl ScriptedPlatform {
    pub fn focused() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    pub fn type_text(&self, text: &str) {
        for sink in &self.sinks {
            sink.push_str(text);
        }
    }
}

impl Platform for ScriptedPlatform {
    fn is_active(&self) -> bool {
        self.active
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn mouse_state(&self) -> MouseState {
        self.mouse
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = Some(cursor);
    }

    fn register_text_input(&mut self, sink: TextInputSink) {
        self.sinks.push(sink);
    }
}

// ── gui ───────────────────────────────────────────────────────────────────

/// GUI context that replays a prepared frame.
#[derive(Debug)]
pub struct FakeGui {
    pub io: GuiIo,
    pub frame: DrawData,
    pub cursor: i32,
    pub chars: Vec<char>,
    pub frames_started: u32,
    pub default_font_added: bool,
    pub atlas: Vec<u8>,
    pub atlas_size: (u32, u32),
    pub atlas_bpp: u32,
    pub font_texture_id: Option<TextureId>,
    pub atlas_cleared: bool,
}

impl FakeGui {
    pub fn new() -> Self {
        Self {
            io: GuiIo::default(),
            frame: DrawData::default(),
            cursor: 0,
            chars: Vec::new(),
            frames_started: 0,
            default_font_added: false,
            atlas: vec![255; 2 * 2 * 4],
            atlas_size: (2, 2),
            atlas_bpp: 4,
            font_texture_id: None,
            atlas_cleared: false,
        }
    }
}

impl GuiContext for FakeGui {
    fn io(&self) -> &GuiIo {
        &self.io
    }

    fn io_mut(&mut self) -> &mut GuiIo {
        &mut self.io
    }

    fn new_frame(&mut self) {
        self.frames_started += 1;
    }

    fn render(&mut self) -> &DrawData {
        &self.frame
    }

    fn mouse_cursor(&self) -> i32 {
        self.cursor
    }

    fn add_input_character(&mut self, c: char) {
        self.chars.push(c);
    }

    fn add_default_font(&mut self) {
        self.default_font_added = true;
    }

    fn font_atlas_rgba32(&mut self) -> FontAtlasImage<'_> {
        FontAtlasImage {
            width: self.atlas_size.0,
            height: self.atlas_size.1,
            bytes_per_pixel: self.atlas_bpp,
            pixels: &self.atlas,
        }
    }

    fn set_font_texture_id(&mut self, id: TextureId) {
        self.font_texture_id = Some(id);
    }

    fn clear_font_texture_data(&mut self) {
        self.atlas_cleared = true;
    }
}

// ── draw data builders ────────────────────────────────────────────────────

pub fn vert(x: f32, y: f32) -> DrawVert {
    DrawVert {
        pos: [x, y],
        uv: [0.0, 0.0],
        col: 0xffff_ffff,
    }
}

/// A list with `quads` quads, one command per quad, all using `texture`.
pub fn quad_list(texture: TextureId, quads: usize, clip: [f32; 4]) -> DrawList {
    let mut list = DrawList::default();
    for q in 0..quads {
        let base = (q * 4) as u16;
        let x = q as f32 * 10.0;
        list.vtx_buffer
            .extend([vert(x, 0.0), vert(x + 10.0, 0.0), vert(x + 10.0, 10.0), vert(x, 10.0)]);
        list.idx_buffer
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
        list.commands.push(DrawCmd {
            texture_id: texture,
            clip_rect: clip,
            elem_count: 6,
        });
    }
    list
}

pub fn frame(lists: Vec<DrawList>, display_size: [f32; 2]) -> DrawData {
    DrawData {
        lists,
        display_size,
        framebuffer_scale: [1.0, 1.0],
    }
}
