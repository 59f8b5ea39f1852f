use std::time::Duration;

use crate::config::RendererConfig;
use crate::device::GraphicsDevice;
use crate::error::{Error, Result};
use crate::gui::{GuiContext, TextureId};
use crate::input::InputBridge;
use crate::platform::Platform;
use crate::render::{DrawDataUploader, RenderStats};
use crate::texture::TextureRegistry;

/// Drives one GUI context against one graphics device.
///
/// Per frame:
///
/// ```text
/// begin_layout(platform, device, elapsed)
///   ... widget calls through gui_mut() ...
/// end_layout(device)
/// ```
///
/// The renderer owns the GUI context. The host owns the device and platform
/// and lends them per call.
pub struct GuiRenderer<G, D: GraphicsDevice> {
    gui: G,
    config: RendererConfig,
    textures: TextureRegistry<D::Texture>,
    input: InputBridge,
    uploader: DrawDataUploader<D::Buffer>,
    in_frame: bool,
}

impl<G, D> GuiRenderer<G, D>
where
    G: GuiContext,
    D: GraphicsDevice,
{
    pub fn new(gui: G, config: RendererConfig) -> Self {
        Self {
            input: InputBridge::new(config.require_focus),
            uploader: DrawDataUploader::new(config.projection_offset),
            textures: TextureRegistry::new(),
            gui,
            config,
            in_frame: false,
        }
    }

    /// Hooks text input into `platform` and adds the default font.
    ///
    /// Call [`GuiRenderer::rebuild_font_atlas`] afterwards to upload it.
    pub fn initialize<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        self.input.initialize(&mut self.gui, platform);
    }

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    #[inline]
    pub fn gui(&self) -> &G {
        &self.gui
    }

    /// GUI context for widget calls between the layout calls.
    #[inline]
    pub fn gui_mut(&mut self) -> &mut G {
        &mut self.gui
    }

    #[inline]
    pub fn textures(&self) -> &TextureRegistry<D::Texture> {
        &self.textures
    }

    /// Starts a GUI frame: delta time, input, new frame.
    pub fn begin_layout<P: Platform + ?Sized>(
        &mut self,
        platform: &mut P,
        device: &D,
        elapsed: Duration,
    ) -> Result<()> {
        if self.in_frame {
            log::warn!("begin_layout called twice without end_layout");
        }

        self.gui.io_mut().delta_time = elapsed.as_secs_f32();
        self.input
            .update(&mut self.gui, platform, device.back_buffer_size())?;
        self.gui.new_frame();
        self.in_frame = true;
        Ok(())
    }

    /// Ends the GUI frame and renders its draw data.
    pub fn end_layout(&mut self, device: &mut D) -> Result<RenderStats> {
        if !self.in_frame {
            log::warn!("end_layout called without begin_layout");
        }
        self.in_frame = false;

        let draw_data = self.gui.render();
        let stats = self.uploader.render(device, &self.textures, draw_data)?;

        log::trace!(
            "gui frame: {} draw calls, {} vertices, {} indices",
            stats.draw_calls,
            stats.vertices,
            stats.indices
        );
        Ok(stats)
    }

    /// Makes `texture` addressable from widget calls.
    pub fn bind_texture(&mut self, texture: D::Texture) -> TextureId {
        self.textures.bind(texture)
    }

    pub fn unbind_texture(&mut self, id: TextureId) -> Option<D::Texture> {
        self.textures.unbind(id)
    }

    /// Uploads the GUI's font atlas and binds it, replacing any previous
    /// font texture. The GUI's CPU-side copy is dropped afterwards.
    ///
    /// Exactly `width * height * 4` bytes are uploaded. Fails without touching
    /// the device or the registry if the atlas is not RGBA32 or is too short.
    pub fn rebuild_font_atlas(&mut self, device: &mut D) -> Result<TextureId> {
        let atlas = self.gui.font_atlas_rgba32();
        let (width, height) = (atlas.width, atlas.height);
        let len = width as usize * height as usize * atlas.bytes_per_pixel as usize;
        if atlas.bytes_per_pixel != 4 || atlas.pixels.len() < len {
            return Err(Error::InvalidFontAtlas {
                width,
                height,
                bytes_per_pixel: atlas.bytes_per_pixel,
                len: atlas.pixels.len(),
            });
        }
        let texture = device.create_texture_rgba8(width, height, &atlas.pixels[..len]);

        let id = self.textures.replace_font_texture(texture);
        self.gui.set_font_texture_id(id);
        self.gui.clear_font_texture_data();

        log::debug!("font atlas uploaded: {width}x{height}, texture {id}");
        Ok(id)
    }

    /// Releases device buffers. The renderer can keep rendering afterwards;
    /// buffers are reallocated on the next frame.
    pub fn release(&mut self, device: &mut D) {
        self.uploader.release(device);
    }

    /// Gives back the GUI context.
    pub fn into_gui(self) -> G {
        self.gui
    }
}
