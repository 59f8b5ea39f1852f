use super::draw::{DrawData, TextureId};
use super::io::GuiIo;

/// RGBA32 font atlas pixels borrowed from the GUI context.
#[derive(Debug, Clone, Copy)]
pub struct FontAtlasImage<'a> {
    pub width: u32,
    pub height: u32,
    pub bytes_per_pixel: u32,
    pub pixels: &'a [u8],
}

/// Owned handle to an immediate-mode GUI library context.
///
/// Implementations wrap the real library. Widget code talks to the concrete
/// type directly; the bridge only needs the operations below.
pub trait GuiContext {
    fn io(&self) -> &GuiIo;

    fn io_mut(&mut self) -> &mut GuiIo;

    /// Starts a new frame. Widget calls are valid until [`GuiContext::render`].
    fn new_frame(&mut self);

    /// Ends the frame and returns the draw data produced by it.
    fn render(&mut self) -> &DrawData;

    /// Cursor kind requested by the last frame, as the library's raw value.
    ///
    /// See [`MouseCursor`](super::MouseCursor) for the recognized values.
    fn mouse_cursor(&self) -> i32;

    /// Queues one typed character.
    fn add_input_character(&mut self, c: char);

    /// Adds the library's built-in font to the atlas.
    fn add_default_font(&mut self);

    /// Rasterizes the font atlas and returns its RGBA32 pixels.
    fn font_atlas_rgba32(&mut self) -> FontAtlasImage<'_>;

    /// Tells the library which handle refers to the uploaded atlas.
    fn set_font_texture_id(&mut self, id: TextureId);

    /// Drops the CPU-side atlas pixels once they live on the GPU.
    fn clear_font_texture_data(&mut self);
}
