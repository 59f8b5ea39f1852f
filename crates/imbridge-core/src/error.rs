use crate::gui::TextureId;

/// Errors surfaced by the bridge.
///
/// Every variant points at a binding mistake in the embedding application
/// rather than a transient condition; callers are not expected to retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A draw command referenced a handle that is not bound in the registry.
    #[error("could not find a texture with id {0}, please check your bindings")]
    MissingTexture(TextureId),

    /// The GUI context requested a cursor kind with no platform equivalent.
    #[error("unsupported mouse cursor kind {0}")]
    UnsupportedCursor(i32),

    /// The font atlas is not tightly packed RGBA32.
    #[error(
        "font atlas {width}x{height} with {bytes_per_pixel} bytes per pixel \
         does not fit RGBA32 ({len} bytes given)"
    )]
    InvalidFontAtlas {
        width: u32,
        height: u32,
        bytes_per_pixel: u32,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
