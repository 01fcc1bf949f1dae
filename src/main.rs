use anyhow::{Context, Result};
use clap::Parser;

use lanes::app::{Cli, detect_format, infer_roads, init_sink, load_roads, write_layouts};
use lanes::config::RuntimeConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("CLI: Failed to initialize thread pool")?;
    }

    let roads = load_roads(&cli)?;
    let runtime = RuntimeConfig::resolve(cli.driving_side, cli.keep_going, &roads);
    tracing::info!(
        "Roads: {} (driving side: {})",
        roads.roads.len(),
        runtime.driving_side
    );

    let start = std::time::Instant::now();
    let inferred = infer_roads(&roads.roads, &runtime)?;

    let format = detect_format(cli.format, &cli.output);
    let mut sink = init_sink(&format, &cli.output)?;
    let written = write_layouts(inferred.layouts, sink.as_mut())?;

    tracing::info!(
        "Done! Written {} roads in {:.3}s",
        written,
        start.elapsed().as_secs_f64()
    );

    if inferred.failed > 0 {
        anyhow::bail!(
            "Pipeline: {} of {} roads could not be interpreted",
            inferred.failed,
            roads.roads.len()
        );
    }

    Ok(())
}
