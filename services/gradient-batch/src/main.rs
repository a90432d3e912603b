//! Shoreline gradient batch processor.
//!
//! Matches shoreline polylines against transects via a grid spatial index and
//! writes a gradient-colored shoreline collection.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use shore_gradient::GradientConfig;

#[derive(Parser, Debug)]
#[command(name = "gradient-batch")]
#[command(about = "Builds gradient-colored shorelines from transect intersections")]
struct Args {
    /// Shorelines GeoJSON file
    #[arg(long, default_value = "shorelines.geojson")]
    shorelines: PathBuf,

    /// Transects GeoJSON file
    #[arg(long, default_value = "transects_extended.geojson")]
    transects: PathBuf,

    /// Output GeoJSON file
    #[arg(short, long, default_value = "shorelines_with_gradients.geojson")]
    output: PathBuf,

    /// Process only the first N shorelines
    #[arg(long)]
    limit: Option<usize>,

    /// Grid cell size in degrees for the transect index
    #[arg(long)]
    cell_size: Option<f64>,

    /// Bounding-box overlap buffer in degrees
    #[arg(long)]
    bbox_buffer: Option<f64>,

    /// Intersection acceptance tolerance in degrees
    #[arg(long)]
    snap_tolerance: Option<f64>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Environment supplies the tuning baseline; CLI flags override it.
    let mut config = GradientConfig::from_env();
    if let Some(cell_size) = args.cell_size {
        config.cell_size = cell_size;
    }
    if let Some(bbox_buffer) = args.bbox_buffer {
        config.bbox_buffer = bbox_buffer;
    }
    if let Some(snap_tolerance) = args.snap_tolerance {
        config.snap_tolerance = snap_tolerance;
    }

    gradient_batch::run(
        &args.shorelines,
        &args.transects,
        &args.output,
        args.limit,
        config,
    )?;

    Ok(())
}
