use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::{RoadEntry, RoadsConfig, RuntimeConfig, parse_tag_arg};
use crate::error::LaneError;
use crate::lane::DrivingSide;
use crate::sinks::{JsonSink, JsonlSink, LaneSink, RoadLayout, TextSink, YamlSink};
use crate::tags::Tags;

#[derive(Parser, Debug)]
#[command(author, version, about = "Infer lane layouts from OSM road tags", long_about = None)]
pub struct Cli {
    /// Roads file (YAML, JSON or TOML)
    #[arg(short, long, conflicts_with_all = ["tags_file", "tag"])]
    pub input: Option<PathBuf>,

    /// Single road as key=value lines
    #[arg(long, conflicts_with = "tag")]
    pub tags_file: Option<PathBuf>,

    /// Single road tag, repeatable (e.g. --tag lanes=2 --tag oneway=yes)
    #[arg(short, long, value_parser = parse_tag_arg)]
    pub tag: Vec<(String, String)>,

    /// Output file, '-' for stdout
    #[arg(short, long, default_value = "-")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if omitted)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Traffic convention recorded in the output
    #[arg(long, env = "LANES_DRIVING_SIDE")]
    pub driving_side: Option<DrivingSide>,

    /// Number of threads (default: all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Skip roads whose tags cannot be interpreted instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum OutputFormat {
    #[value(name = "jsonl")]
    Jsonl,
    #[value(name = "json")]
    Json,
    #[value(name = "yaml", alias = "yml")]
    Yaml,
    #[value(name = "ascii")]
    Ascii,
    #[value(name = "utf8")]
    Utf8,
}

pub fn output_format_label(format: &OutputFormat) -> &'static str {
    match format {
        OutputFormat::Jsonl => "jsonl",
        OutputFormat::Json => "json",
        OutputFormat::Yaml => "yaml",
        OutputFormat::Ascii => "ascii",
        OutputFormat::Utf8 => "utf8",
    }
}

/// Pick the output format from the flag, then the output extension, then jsonl.
pub fn detect_format(requested: Option<OutputFormat>, output: &Path) -> OutputFormat {
    requested
        .or_else(|| {
            let ext = output.extension()?.to_str()?;
            match ext.to_lowercase().as_str() {
                "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
                "json" => Some(OutputFormat::Json),
                "yaml" | "yml" => Some(OutputFormat::Yaml),
                "txt" => Some(OutputFormat::Ascii),
                _ => None,
            }
        })
        .unwrap_or(OutputFormat::Jsonl)
}

pub fn init_sink(format: &OutputFormat, output: &Path) -> Result<Box<dyn LaneSink>> {
    let to_stdout = output == Path::new("-");
    if to_stdout {
        tracing::info!("Sink: {} -> stdout", output_format_label(format));
    } else {
        tracing::info!("Sink: {} -> {:?}", output_format_label(format), output);
    }

    let sink: Box<dyn LaneSink> = match (format, to_stdout) {
        (OutputFormat::Jsonl, true) => Box::new(JsonlSink::stdout()?),
        (OutputFormat::Jsonl, false) => Box::new(JsonlSink::new(output)?),
        (OutputFormat::Json, true) => Box::new(JsonSink::stdout()?),
        (OutputFormat::Json, false) => Box::new(JsonSink::new(output)?),
        (OutputFormat::Yaml, true) => Box::new(YamlSink::stdout()?),
        (OutputFormat::Yaml, false) => Box::new(YamlSink::new(output)?),
        (OutputFormat::Ascii, true) => Box::new(TextSink::stdout(false)?),
        (OutputFormat::Ascii, false) => Box::new(TextSink::new(output, false)?),
        (OutputFormat::Utf8, true) => Box::new(TextSink::stdout(true)?),
        (OutputFormat::Utf8, false) => Box::new(TextSink::new(output, true)?),
    };
    Ok(sink)
}

/// Collect the roads named on the command line.
pub fn load_roads(cli: &Cli) -> Result<RoadsConfig> {
    if let Some(path) = &cli.input {
        tracing::info!("Loading roads from {:?}", path);
        return RoadsConfig::load(path)
            .with_context(|| format!("Config: Failed to load roads from {:?}", path));
    }
    if let Some(path) = &cli.tags_file {
        tracing::info!("Loading tags from {:?}", path);
        return RoadsConfig::from_tags_file(path)
            .with_context(|| format!("Config: Failed to read tags from {:?}", path));
    }
    if cli.tag.is_empty() {
        anyhow::bail!("CLI: No roads given; use --input, --tags-file or --tag");
    }
    let tags: Tags = cli.tag.iter().cloned().collect();
    Ok(RoadsConfig::single(tags))
}

/// Layouts of the roads that could be interpreted, in input order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InferredRoads {
    pub layouts: Vec<RoadLayout>,
    pub failed: u64,
}

fn describe(index: usize, entry: &RoadEntry) -> String {
    match &entry.name {
        Some(name) => format!("road {} ('{}')", index + 1, name),
        None => format!("road {}", index + 1),
    }
}

/// Infer every road in parallel.
///
/// Without `keep_going` the first failing road (in input order) is returned
/// as the error and no layouts are kept, so nothing reaches a sink.
pub fn infer_roads(roads: &[RoadEntry], runtime: &RuntimeConfig) -> Result<InferredRoads> {
    let results: Vec<Result<RoadLayout, LaneError>> = roads
        .par_iter()
        .map(|entry| {
            entry.road().lanes().map(|lanes| RoadLayout {
                name: entry.name.clone(),
                driving_side: runtime.driving_side,
                lanes,
            })
        })
        .collect();

    let mut inferred = InferredRoads::default();
    for (index, (entry, result)) in roads.iter().zip(results).enumerate() {
        match result {
            Ok(layout) => {
                tracing::debug!("{}: {} lanes", describe(index, entry), layout.lanes.len());
                inferred.layouts.push(layout);
            }
            Err(err) if runtime.keep_going => {
                tracing::warn!("Skipping {}: {}", describe(index, entry), err);
                inferred.failed += 1;
            }
            Err(err) => {
                return Err(anyhow!(err).context(format!(
                    "Pipeline: Failed to infer lanes for {}",
                    describe(index, entry)
                )));
            }
        }
    }
    Ok(inferred)
}

/// Write layouts to the sink and finalize it.
pub fn write_layouts(layouts: Vec<RoadLayout>, sink: &mut dyn LaneSink) -> Result<u64> {
    let mut written = 0u64;
    for layout in layouts {
        sink.add_road(layout)
            .with_context(|| format!("Pipeline: Failed writing road {}", written + 1))?;
        written += 1;
    }
    sink.finish().context("Pipeline: Failed to finalize sink")?;
    Ok(written)
}
