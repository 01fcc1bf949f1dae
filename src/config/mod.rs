use crate::lane::DrivingSide;
use crate::road::Road;
use crate::tags::Tags;
use serde::Deserialize;
use std::path::Path;

/// A batch of roads to lay out, as read from a YAML/JSON/TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct RoadsConfig {
    #[serde(default)]
    pub driving_side: Option<DrivingSide>,
    #[serde(default)]
    pub roads: Vec<RoadEntry>,
}

impl RoadsConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Read a single road from `key=value` lines.
    pub fn from_tags_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let tags: Tags = text.parse().map_err(|err: String| anyhow::anyhow!(err))?;
        Ok(Self::single(tags))
    }

    pub fn single(tags: Tags) -> Self {
        RoadsConfig {
            driving_side: None,
            roads: vec![RoadEntry { name: None, tags }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoadEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Tags,
}

impl RoadEntry {
    pub fn road(&self) -> Road {
        Road::new(self.tags.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub driving_side: DrivingSide,
    pub keep_going: bool,
}

impl RuntimeConfig {
    /// CLI values take precedence over the roads file.
    pub fn resolve(
        cli_driving_side: Option<DrivingSide>,
        keep_going: bool,
        roads: &RoadsConfig,
    ) -> Self {
        Self {
            driving_side: cli_driving_side
                .or(roads.driving_side)
                .unwrap_or_default(),
            keep_going,
        }
    }
}

/// Parse a `key=value` CLI argument.
pub fn parse_tag_arg(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("invalid tag '{arg}': expected KEY=VALUE"))?;
    if key.is_empty() {
        return Err(format!("invalid tag '{arg}': empty key"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_yaml() {
        let file = write_file(
            ".yaml",
            r#"
driving_side: left
roads:
  - name: high street
    tags:
      lanes: "2"
      oneway: "yes"
  - tags:
      sidewalk: both
"#,
        );
        let config = RoadsConfig::load(file.path()).unwrap();
        assert_eq!(config.driving_side, Some(DrivingSide::Left));
        assert_eq!(config.roads.len(), 2);
        assert_eq!(config.roads[0].name.as_deref(), Some("high street"));
        assert!(config.roads[0].tags.is("oneway", "yes"));
        assert!(config.roads[1].name.is_none());
        assert!(config.roads[1].tags.is("sidewalk", "both"));
    }

    #[test]
    fn test_load_json() {
        let file = write_file(
            ".json",
            r#"{"roads": [{"tags": {"cycleway:left": "lane"}}]}"#,
        );
        let config = RoadsConfig::load(file.path()).unwrap();
        assert_eq!(config.driving_side, None);
        assert!(config.roads[0].tags.is("cycleway:left", "lane"));
    }

    #[test]
    fn test_tags_file() {
        let file = write_file(".txt", "lanes=3\noneway=yes\n");
        let config = RoadsConfig::from_tags_file(file.path()).unwrap();
        assert_eq!(config.roads.len(), 1);
        assert_eq!(config.roads[0].tags.get("lanes"), Some("3"));
    }

    #[test]
    fn test_runtime_precedence() {
        let roads = RoadsConfig {
            driving_side: Some(DrivingSide::Left),
            roads: Vec::new(),
        };
        let from_file = RuntimeConfig::resolve(None, false, &roads);
        assert_eq!(from_file.driving_side, DrivingSide::Left);

        let from_cli = RuntimeConfig::resolve(Some(DrivingSide::Right), true, &roads);
        assert_eq!(from_cli.driving_side, DrivingSide::Right);
        assert!(from_cli.keep_going);

        let default = RuntimeConfig::resolve(None, false, &RoadsConfig::default());
        assert_eq!(default.driving_side, DrivingSide::Right);
    }

    #[test]
    fn test_parse_tag_arg() {
        assert_eq!(
            parse_tag_arg("cycleway:left=lane").unwrap(),
            ("cycleway:left".to_string(), "lane".to_string())
        );
        assert!(parse_tag_arg("oneway").is_err());
        assert!(parse_tag_arg("=yes").is_err());
    }
}
