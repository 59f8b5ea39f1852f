use imbridge_core::RendererConfig;
use imbridge_core::logging::LoggingConfig;
use imbridge_wgpu::GpuInit;
use winit::dpi::LogicalSize;

/// Window and bridge configuration for the demo.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub clear_color: wgpu::Color,
    pub gpu: GpuInit,
    pub renderer: RendererConfig,
    pub logging: LoggingConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "imbridge demo".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            clear_color: wgpu::Color {
                r: 0.08,
                g: 0.09,
                b: 0.11,
                a: 1.0,
            },
            gpu: GpuInit::default(),
            renderer: RendererConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
