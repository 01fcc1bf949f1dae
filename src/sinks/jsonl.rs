use super::{LaneSink, RoadLayout, SinkWriter, file_writer, stdout_writer};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// One JSON object per road, newline separated.
pub struct JsonlSink {
    writer: SinkWriter,
}

impl JsonlSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            writer: file_writer(path)?,
        })
    }

    pub fn stdout() -> Result<Self> {
        Ok(Self {
            writer: stdout_writer(),
        })
    }
}

impl LaneSink for JsonlSink {
    fn add_road(&mut self, layout: RoadLayout) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &layout)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
