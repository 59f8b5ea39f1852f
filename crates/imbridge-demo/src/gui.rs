//! A scripted stand-in for an immediate-mode GUI library.
//!
//! It emits a panel that follows the mouse, an image quad and a row of
//! blocks, one per typed character, so every part of the bridge shows up on
//! screen.

use imbridge_core::gui::{
    DrawCmd, DrawData, DrawList, DrawVert, FontAtlasImage, GuiContext, GuiIo, GuiKey, MouseCursor,
    TextureId,
};

const ATLAS_SIZE: u32 = 4;
const PANEL_SIZE: [f32; 2] = [240.0, 140.0];
const BLOCK: f32 = 14.0;
const MAX_TYPED: usize = 64;

const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_le_bytes([r, g, b, a])
}

pub struct DemoGui {
    io: GuiIo,
    draw_data: DrawData,
    atlas: Vec<u8>,
    font_texture: Option<TextureId>,
    typed: String,
    hovered: bool,
}

impl DemoGui {
    pub fn new() -> Self {
        Self {
            io: GuiIo::default(),
            draw_data: DrawData::default(),
            atlas: Vec::new(),
            font_texture: None,
            typed: String::new(),
            hovered: false,
        }
    }

    /// Emits this frame's widgets. `image` is drawn inside the panel.
    pub fn layout(&mut self, image: Option<TextureId>) {
        let Some(font) = self.font_texture else {
            return;
        };

        let [mx, my] = self.io.mouse_pos;
        let [dw, dh] = self.io.display_size;
        let full_clip = [0.0, 0.0, dw, dh];

        let x = mx.clamp(0.0, (dw - PANEL_SIZE[0]).max(0.0));
        let y = my.clamp(0.0, (dh - PANEL_SIZE[1]).max(0.0));
        let panel = [x, y, x + PANEL_SIZE[0], y + PANEL_SIZE[1]];

        self.hovered = mx >= panel[0] && mx < panel[2] && my >= panel[1] && my < panel[3];

        let fill = if self.io.mouse_down[0] {
            rgba(70, 110, 200, 235)
        } else {
            rgba(45, 50, 62, 220)
        };

        let mut window = DrawList::default();
        push_quad(&mut window, font, full_clip, panel, [0.0, 0.0, 0.0, 0.0], fill);

        if let Some(image) = image {
            let inner = [panel[0] + 10.0, panel[1] + 10.0, panel[0] + 74.0, panel[1] + 74.0];
            push_quad(&mut window, image, panel, inner, [0.0, 0.0, 1.0, 1.0], rgba(255, 255, 255, 255));
        }

        // Blocks run past the panel edge; the panel's clip rect cuts them off.
        let mut bx = panel[0] + 84.0;
        for _ in self.typed.chars() {
            let block = [bx, panel[1] + 10.0, bx + BLOCK, panel[1] + 10.0 + BLOCK];
            push_quad(&mut window, font, panel, block, [0.0; 4], rgba(230, 200, 90, 255));
            bx += BLOCK + 2.0;
        }

        self.draw_data.lists.push(window);
    }
}

impl Default for DemoGui {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiContext for DemoGui {
    fn io(&self) -> &GuiIo {
        &self.io
    }

    fn io_mut(&mut self) -> &mut GuiIo {
        &mut self.io
    }

    fn new_frame(&mut self) {
        self.draw_data.lists.clear();

        if self.io.key_down(GuiKey::Escape) || self.io.key_down(GuiKey::Backspace) {
            self.typed.clear();
        }
    }

    fn render(&mut self) -> &DrawData {
        self.draw_data.display_size = self.io.display_size;
        self.draw_data.framebuffer_scale = self.io.display_framebuffer_scale;
        &self.draw_data
    }

    fn mouse_cursor(&self) -> i32 {
        let cursor = if self.hovered {
            MouseCursor::Hand
        } else {
            MouseCursor::Arrow
        };
        cursor as i32
    }

    fn add_input_character(&mut self, c: char) {
        if self.typed.chars().count() < MAX_TYPED {
            self.typed.push(c);
        }
    }

    fn add_default_font(&mut self) {
        self.atlas = vec![255; (ATLAS_SIZE * ATLAS_SIZE * 4) as usize];
    }

    fn font_atlas_rgba32(&mut self) -> FontAtlasImage<'_> {
        if self.atlas.is_empty() {
            self.add_default_font();
        }
        FontAtlasImage {
            width: ATLAS_SIZE,
            height: ATLAS_SIZE,
            bytes_per_pixel: 4,
            pixels: &self.atlas,
        }
    }

    fn set_font_texture_id(&mut self, id: TextureId) {
        self.font_texture = Some(id);
    }

    fn clear_font_texture_data(&mut self) {
        self.atlas = Vec::new();
    }
}

fn push_quad(
    list: &mut DrawList,
    texture: TextureId,
    clip: [f32; 4],
    rect: [f32; 4],
    uv: [f32; 4],
    col: u32,
) {
    let base = list.vtx_buffer.len() as u16;
    let [x0, y0, x1, y1] = rect;
    let [u0, v0, u1, v1] = uv;

    list.vtx_buffer.extend([
        DrawVert { pos: [x0, y0], uv: [u0, v0], col },
        DrawVert { pos: [x1, y0], uv: [u1, v0], col },
        DrawVert { pos: [x1, y1], uv: [u1, v1], col },
        DrawVert { pos: [x0, y1], uv: [u0, v1], col },
    ]);
    list.idx_buffer
        .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    list.commands.push(DrawCmd {
        texture_id: texture,
        clip_rect: clip,
        elem_count: 6,
    });
}
