use super::{LaneSink, RoadLayout, SinkWriter, file_writer, stdout_writer};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// A single `{"roads": [...]}` document, streamed road by road.
pub struct JsonSink {
    writer: SinkWriter,
    first_road: bool,
}

impl JsonSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_writer(file_writer(path)?)
    }

    pub fn stdout() -> Result<Self> {
        Self::with_writer(stdout_writer())
    }

    fn with_writer(mut writer: SinkWriter) -> Result<Self> {
        writeln!(writer, "{{")?;
        writeln!(writer, "  \"roads\": [")?;
        Ok(Self {
            writer,
            first_road: true,
        })
    }
}

impl LaneSink for JsonSink {
    fn add_road(&mut self, layout: RoadLayout) -> Result<()> {
        if !self.first_road {
            writeln!(self.writer, ",")?;
        }
        self.first_road = false;

        write!(self.writer, "    ")?;
        serde_json::to_writer(&mut self.writer, &layout)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "  ]")?;
        writeln!(self.writer, "}}")?;
        self.writer.flush()?;
        Ok(())
    }
}
