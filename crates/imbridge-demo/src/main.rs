//! Opens a window and drives a scripted GUI through imbridge.

mod app;
mod config;
mod gui;

use anyhow::{Context, Result};
use winit::event_loop::EventLoop;

use imbridge_core::logging::init_logging;

use crate::app::DemoApp;
use crate::config::DemoConfig;

fn main() -> Result<()> {
    let config = DemoConfig::default();
    init_logging(config.logging.clone());

    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut app = DemoApp::new(config);

    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    app.into_result()
}
