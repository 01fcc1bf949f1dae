//! Roads and lane layout inference.
//!
//! A road is only its tags. Inference evaluates fixed rule groups
//! (driveways, sidewalks, cycleways) and concatenates their lanes in
//! cross-section order. `lanes_to_tags` maps a cross-section back to the
//! tags those rules read.

mod lanes_to_tags;
mod rules;

pub use lanes_to_tags::{LanesToTagsConfig, lanes_to_tags};
pub use rules::parse_lanes;

use crate::error::LaneError;
use crate::lane::Lane;
use crate::tags::Tags;

/// OpenStreetMap way or relation describing part of a road.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Road {
    pub tags: Tags,
}

impl Road {
    pub fn new(tags: Tags) -> Self {
        Road { tags }
    }

    /// Infer the left-to-right lane cross-section of this road.
    pub fn lanes(&self) -> Result<Vec<Lane>, LaneError> {
        parse_lanes(&self.tags)
    }
}
