mod app;
mod feed;

use anyhow::Result;
use winit::dpi::LogicalSize;

use gauge_engine::device::GpuInit;
use gauge_engine::logging::{init_logging, LoggingConfig};
use gauge_engine::window::{Runtime, RuntimeConfig};
use gauge_meter::MeterConfig;

use app::GaugeApp;
use feed::FeedProfile;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let meter = MeterConfig::default();
    let (w, h) = meter.size;
    let config = RuntimeConfig {
        title: "Speed test".to_string(),
        initial_size: LogicalSize::new(w, h),
    };

    log::info!("space restarts a finished test, escape quits");
    Runtime::run(config, GpuInit::default(), GaugeApp::new(meter, FeedProfile::default()))
}
