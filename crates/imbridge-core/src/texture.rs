//! Handle-to-texture registry.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::gui::TextureId;

/// Maps the opaque handles the GUI library sees to host textures.
///
/// Handles are allocated sequentially from zero and never reused. The
/// registry holds shared handles only; releasing the underlying texture is
/// the owner's business.
#[derive(Debug)]
pub struct TextureRegistry<T> {
    loaded: HashMap<TextureId, T>,
    next_id: usize,
    font_texture: Option<TextureId>,
}

impl<T> TextureRegistry<T> {
    pub fn new() -> Self {
        Self {
            loaded: HashMap::new(),
            next_id: 0,
            font_texture: None,
        }
    }

    /// Records `texture` under a fresh handle.
    pub fn bind(&mut self, texture: T) -> TextureId {
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.loaded.insert(id, texture);
        id
    }

    /// Forgets `id`. Unknown handles are ignored.
    pub fn unbind(&mut self, id: TextureId) -> Option<T> {
        if self.font_texture == Some(id) {
            self.font_texture = None;
        }
        self.loaded.remove(&id)
    }

    pub fn lookup(&self, id: TextureId) -> Result<&T> {
        self.loaded.get(&id).ok_or(Error::MissingTexture(id))
    }

    #[inline]
    pub fn contains(&self, id: TextureId) -> bool {
        self.loaded.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    /// Handle of the current font atlas texture, if one was uploaded.
    #[inline]
    pub fn font_texture(&self) -> Option<TextureId> {
        self.font_texture
    }

    /// Unbinds the previous font texture (if any) and binds `texture` as the
    /// new one.
    pub fn replace_font_texture(&mut self, texture: T) -> TextureId {
        if let Some(previous) = self.font_texture.take() {
            self.loaded.remove(&previous);
        }
        let id = self.bind(texture);
        self.font_texture = Some(id);
        id
    }
}

impl<T> Default for TextureRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
