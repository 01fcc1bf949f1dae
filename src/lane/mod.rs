//! Lane vocabulary.
//!
//! Closed enumerations for lane designation, direction and the traffic
//! convention, plus the `Lane` record built from them.

mod printable;

pub use printable::Printable;

use crate::error::LaneError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// Bidirectional traffic practice of a jurisdiction.
///
/// Not consulted by inference; the cross-section order is always the
/// right-hand-traffic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrivingSide {
    #[default]
    Right,
    Left,
}

impl DrivingSide {
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            DrivingSide::Right => DrivingSide::Left,
            DrivingSide::Left => DrivingSide::Right,
        }
    }
}

impl FromStr for DrivingSide {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "right" => Ok(DrivingSide::Right),
            "left" => Ok(DrivingSide::Left),
            _ => Err(format!("invalid driving side: {value}")),
        }
    }
}

impl Display for DrivingSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrivingSide::Right => write!(f, "right"),
            DrivingSide::Left => write!(f, "left"),
        }
    }
}

/// Lane direction relative to the way's digitized direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl FromStr for Direction {
    type Err = LaneError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "forward" => Ok(Direction::Forward),
            "backward" => Ok(Direction::Backward),
            _ => Err(LaneError::invalid_tag_value("direction", value)),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// Lane designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneType {
    Sidewalk,
    Cycleway,
    Driveway,
}

impl FromStr for LaneType {
    type Err = LaneError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sidewalk" => Ok(LaneType::Sidewalk),
            "cycleway" => Ok(LaneType::Cycleway),
            "driveway" => Ok(LaneType::Driveway),
            _ => Err(LaneError::invalid_tag_value("type", value)),
        }
    }
}

impl Display for LaneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaneType::Sidewalk => write!(f, "sidewalk"),
            LaneType::Cycleway => write!(f, "cycleway"),
            LaneType::Driveway => write!(f, "driveway"),
        }
    }
}

/// A single lane of a road cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "LaneStructure")]
pub struct Lane {
    #[serde(rename = "type")]
    pub lane_type: LaneType,
    pub direction: Direction,
}

/// Raw `{"type": ..., "direction": ...}` record before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct LaneStructure {
    #[serde(rename = "type")]
    pub lane_type: String,
    pub direction: String,
}

impl Lane {
    pub const fn new(lane_type: LaneType, direction: Direction) -> Self {
        Lane {
            lane_type,
            direction,
        }
    }

    /// Parse a lane from a `type`/`direction` text structure.
    pub fn from_structure(structure: &HashMap<String, String>) -> Result<Self, LaneError> {
        let lane_type = structure
            .get("type")
            .ok_or(LaneError::MissingField("type"))?;
        let direction = structure
            .get("direction")
            .ok_or(LaneError::MissingField("direction"))?;
        Ok(Lane::new(lane_type.parse()?, direction.parse()?))
    }
}

impl TryFrom<LaneStructure> for Lane {
    type Error = LaneError;

    fn try_from(structure: LaneStructure) -> Result<Self, Self::Error> {
        Ok(Lane::new(
            structure.lane_type.parse()?,
            structure.direction.parse()?,
        ))
    }
}

impl Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.lane_type, self.direction)
    }
}
