//! Platform backends.

mod winit;

pub use self::winit::WinitPlatform;
