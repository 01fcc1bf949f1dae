use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::lane::{DrivingSide, Lane};

pub mod json;
pub mod jsonl;
pub mod text;
pub mod yaml;

pub use self::json::JsonSink;
pub use self::jsonl::JsonlSink;
pub use self::text::TextSink;
pub use self::yaml::YamlSink;

/// Inferred cross-section of one input road.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoadLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub driving_side: DrivingSide,
    pub lanes: Vec<Lane>,
}

pub trait LaneSink: Send {
    fn add_road(&mut self, layout: RoadLayout) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

pub(crate) type SinkWriter = BufWriter<Box<dyn Write + Send>>;

pub(crate) fn file_writer<P: AsRef<Path>>(path: P) -> Result<SinkWriter> {
    let file = File::create(path)?;
    Ok(BufWriter::new(Box::new(file)))
}

pub(crate) fn stdout_writer() -> SinkWriter {
    BufWriter::new(Box::new(std::io::stdout()))
}
