use super::{LaneSink, RoadLayout, SinkWriter, file_writer, stdout_writer};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct Document<'a> {
    roads: &'a [RoadLayout],
}

/// YAML document; roads are buffered until `finish`.
pub struct YamlSink {
    writer: SinkWriter,
    roads: Vec<RoadLayout>,
}

impl YamlSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            writer: file_writer(path)?,
            roads: Vec::new(),
        })
    }

    pub fn stdout() -> Result<Self> {
        Ok(Self {
            writer: stdout_writer(),
            roads: Vec::new(),
        })
    }
}

impl LaneSink for YamlSink {
    fn add_road(&mut self, layout: RoadLayout) -> Result<()> {
        self.roads.push(layout);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = Document { roads: &self.roads };
        serde_yaml::to_writer(&mut self.writer, &document)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::{Direction, DrivingSide, Lane, LaneType};

    #[test]
    fn test_yaml_document() {
        let file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
        let mut sink = YamlSink::new(file.path()).unwrap();
        sink.add_road(RoadLayout {
            name: Some("side street".into()),
            driving_side: DrivingSide::Left,
            lanes: vec![Lane::new(LaneType::Cycleway, Direction::Forward)],
        })
        .unwrap();
        sink.finish().unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
        let road = &doc["roads"][0];
        assert_eq!(road["name"].as_str(), Some("side street"));
        assert_eq!(road["driving_side"].as_str(), Some("left"));
        assert_eq!(road["lanes"][0]["type"].as_str(), Some("cycleway"));
    }
}
