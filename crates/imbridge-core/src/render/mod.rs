//! Draw-data upload: geometry buffers and the per-frame pass.

mod buffer;
mod uploader;

pub use buffer::{GeometryBuffer, GeometryKind, grown_capacity};
pub use uploader::{DrawDataUploader, RenderStats};
