use super::{LaneSink, RoadLayout, SinkWriter, file_writer, stdout_writer};
use crate::lane::Printable;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// One line of lane symbols per road, optionally prefixed by the road name.
pub struct TextSink {
    writer: SinkWriter,
    utf8: bool,
}

impl TextSink {
    pub fn new<P: AsRef<Path>>(path: P, utf8: bool) -> Result<Self> {
        Ok(Self {
            writer: file_writer(path)?,
            utf8,
        })
    }

    pub fn stdout(utf8: bool) -> Result<Self> {
        Ok(Self {
            writer: stdout_writer(),
            utf8,
        })
    }
}

impl LaneSink for TextSink {
    fn add_road(&mut self, layout: RoadLayout) -> Result<()> {
        let symbols = if self.utf8 {
            layout.lanes.as_utf8()
        } else {
            layout.lanes.as_ascii()
        };
        match layout.name {
            Some(name) => writeln!(self.writer, "{name}\t{symbols}")?,
            None => writeln!(self.writer, "{symbols}")?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
