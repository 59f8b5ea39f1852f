//! wgpu + winit host for imbridge.
//!
//! - [`Gpu`]: instance/adapter/device/surface bootstrap for one window
//! - [`WgpuDevice`]: [`GraphicsDevice`](imbridge_core::GraphicsDevice) that
//!   records the GUI pass and replays it into a `wgpu::RenderPass`
//! - [`WinitPlatform`]: [`Platform`](imbridge_core::Platform) fed from
//!   `winit` window events

pub mod device;
pub mod gpu;
pub mod platform;

pub use device::{WgpuBuffer, WgpuDevice, WgpuTexture};
pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
pub use platform::WinitPlatform;
