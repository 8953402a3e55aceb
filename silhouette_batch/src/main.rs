use anyhow::{Result, bail};
use clap::Parser;
use silhouette_counter::{
    BoundaryPolicy, ImageSummary, ParallelPipeline, PipelineConfig, SilhouettePipeline,
};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "silhouette_batch")]
#[command(about = "Count dark objects and probable people in images")]
struct Cli {
    /// Images to process, one report line each
    #[arg(value_name = "IMAGE", default_values = ["action.jpg", "f.jpg", "a.png", "4in1.jpg"])]
    images: Vec<PathBuf>,

    /// Every RGB channel must be below this (0-255) for a pixel to be dark
    #[arg(long, default_value_t = 128)]
    threshold: u8,

    /// Regions smaller than width*height/DIVISOR pixels are ignored as noise (0 disables)
    #[arg(long, value_name = "DIVISOR", default_value_t = 1000)]
    noise_divisor: usize,

    /// Let regions touching the right or bottom edge spill one pixel past it
    #[arg(long)]
    edge_spill: bool,

    /// Abort a flood fill once its work list holds this many pixels
    #[arg(long, value_name = "FRAMES")]
    stack_budget: Option<usize>,

    /// Process images concurrently on a worker pool
    #[arg(long)]
    parallel: bool,

    /// Worker count for --parallel (defaults to the number of CPUs)
    #[arg(long, requires = "parallel")]
    workers: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            dark_threshold: self.threshold,
            boundary_policy: if self.edge_spill {
                BoundaryPolicy::EdgeSpill
            } else {
                BoundaryPolicy::Strict
            },
            stack_budget: self.stack_budget,
            noise_area_divisor: self.noise_divisor,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.pipeline_config();
    info!(
        images = args.images.len(),
        parallel = args.parallel,
        "starting batch"
    );

    let results: Vec<silhouette_counter::Result<ImageSummary>> = if args.parallel {
        let pipeline = match args.workers {
            Some(workers) => ParallelPipeline::new(config, workers),
            None => ParallelPipeline::with_default_workers(config),
        };
        let results = pipeline.process_files(&args.images).await;
        let failed_tasks = pipeline.shutdown().await;
        if failed_tasks > 0 {
            warn!(failed_tasks, "worker pool did not shut down cleanly");
        }
        results
    } else {
        let pipeline = SilhouettePipeline::new(config);
        args.images
            .iter()
            .map(|path| pipeline.process_file(path))
            .collect()
    };

    let mut failures = 0;
    for (path, result) in args.images.iter().zip(results) {
        match result {
            Ok(summary) => println!("{summary}"),
            Err(e) => {
                error!(path = %path.display(), "failed to process image: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} images failed", args.images.len());
    }
    Ok(())
}
