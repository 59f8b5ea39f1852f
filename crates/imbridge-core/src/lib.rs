//! imbridge core crate.
//!
//! Glue between an immediate-mode GUI context and a host graphics device:
//! input goes in once per frame, the GUI's draw data comes out as indexed
//! draws with per-command textures and scissor rectangles.
//!
//! The GUI library, the graphics device and the windowing layer are external.
//! They are reached through the [`GuiContext`], [`GraphicsDevice`] and
//! [`Platform`] traits; concrete hosts live in sibling crates.

pub mod config;
pub mod device;
pub mod error;
pub mod gui;
pub mod input;
pub mod logging;
pub mod platform;
pub mod render;
pub mod texture;
pub mod time;

mod renderer;

pub use config::RendererConfig;
pub use device::GraphicsDevice;
pub use error::{Error, Result};
pub use gui::{GuiContext, TextureId};
pub use input::InputBridge;
pub use platform::Platform;
pub use render::{DrawDataUploader, RenderStats};
pub use renderer::GuiRenderer;
pub use texture::TextureRegistry;
