//! GUI-library seam.
//!
//! The immediate-mode GUI library is external. This module defines the
//! context trait the bridge drives and the plain data it exchanges with the
//! library: the IO block, draw data, key identifiers and cursor kinds.
//!
//! The context is an explicitly owned value. Nothing here relies on a
//! process-wide "current context".

mod context;
mod cursor;
mod draw;
mod io;
mod key;

pub use context::{FontAtlasImage, GuiContext};
pub use cursor::MouseCursor;
pub use draw::{DrawCmd, DrawData, DrawIdx, DrawList, DrawVert, TextureId};
pub use io::GuiIo;
pub use key::GuiKey;
