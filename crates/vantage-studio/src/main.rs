//! `vantage`: interactive viewer for box scenes drawn with the painter's algorithm.

mod app;
mod bindings;
mod load;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use winit::dpi::LogicalSize;

use vantage_core::Viewer;
use vantage_engine::device::GpuInit;
use vantage_engine::logging::{init_logging, LoggingConfig};
use vantage_engine::window::{Runtime, RuntimeConfig};

use crate::app::ViewerApp;

#[derive(Parser, Debug)]
#[command(version, about = "Painter's-algorithm scene viewer")]
struct Args {
    /// Scene file: JSON object mapping figure names to points or figure records
    scene: PathBuf,

    /// Viewer configuration (JSON); omitted fields keep their defaults
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Log filter in env_logger syntax, e.g. "debug" or "vantage_core=trace"
    #[arg(long)]
    log: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(LoggingConfig { env_filter: args.log.clone(), ..LoggingConfig::default() });

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load::config(args.config.as_deref())?;
    let scene = load::scene(&args.scene)?;

    let name = args
        .scene
        .file_stem()
        .map_or_else(|| "scene".to_string(), |s| s.to_string_lossy().into_owned());
    let title = format!("vantage - {name}");

    let window = RuntimeConfig {
        title: title.clone(),
        initial_size: LogicalSize::new(config.screen.width, config.screen.height),
        resizable: true,
    };
    // Palette bytes go to the surface unconverted.
    let gpu = GpuInit { prefer_srgb: false, ..GpuInit::default() };

    let viewer = Viewer::new(scene, &config);
    Runtime::run(window, gpu, ViewerApp::new(viewer, title))
}
