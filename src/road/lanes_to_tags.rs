//! Reverse mapping from a lane cross-section back to road tags.

use super::parse_lanes;
use super::rules::{CYCLEWAY_LEFT, CYCLEWAY_RIGHT, LANES, ONEWAY, SIDEWALK};
use crate::error::LaneError;
use crate::lane::{Direction, Lane, LaneType, Printable};
use crate::tags::Tags;

#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct LanesToTagsConfig {
    /// Re-infer lanes from the produced tags and fail if they differ.
    pub check_roundtrip: bool,
}

impl LanesToTagsConfig {
    pub fn new(check_roundtrip: bool) -> Self {
        Self { check_roundtrip }
    }
}

impl Default for LanesToTagsConfig {
    fn default() -> Self {
        Self {
            check_roundtrip: true,
        }
    }
}

fn is(lane: &Lane, lane_type: LaneType) -> bool {
    lane.lane_type == lane_type
}

/// Describe a cross-section with the tags `parse_lanes` reads.
pub fn lanes_to_tags(lanes: &[Lane], config: &LanesToTagsConfig) -> Result<Tags, LaneError> {
    let mut tags = Tags::default();

    let driveways: Vec<&Lane> = lanes
        .iter()
        .filter(|lane| is(lane, LaneType::Driveway))
        .collect();
    if !driveways.is_empty() {
        tags.insert(LANES, driveways.len().to_string());
        if driveways
            .iter()
            .all(|lane| lane.direction == Direction::Forward)
        {
            tags.insert(ONEWAY, "yes");
        }
    }

    // Sidewalks are recognized on the outer edges only.
    let left_sidewalk = lanes
        .first()
        .is_some_and(|lane| is(lane, LaneType::Sidewalk));
    let right_sidewalk =
        lanes.len() > 1 && lanes.last().is_some_and(|lane| is(lane, LaneType::Sidewalk));
    match (left_sidewalk, right_sidewalk) {
        (true, true) => tags.insert(SIDEWALK, "both"),
        (true, false) => tags.insert(SIDEWALK, "left"),
        (false, true) => tags.insert(SIDEWALK, "right"),
        (false, false) => None,
    };

    // Without driveways every cycleway counts as left.
    let first_driveway = lanes
        .iter()
        .position(|lane| is(lane, LaneType::Driveway))
        .unwrap_or(lanes.len());
    let after_last_driveway = lanes
        .iter()
        .rposition(|lane| is(lane, LaneType::Driveway))
        .map_or(lanes.len(), |i| i + 1);
    let left_cycleway = lanes[..first_driveway]
        .iter()
        .find(|lane| is(lane, LaneType::Cycleway));
    let right_cycleway = lanes[after_last_driveway..]
        .iter()
        .rev()
        .find(|lane| is(lane, LaneType::Cycleway));
    for (key, cycleway) in [(CYCLEWAY_LEFT, left_cycleway), (CYCLEWAY_RIGHT, right_cycleway)] {
        let Some(cycleway) = cycleway else {
            continue;
        };
        tags.insert(key, "lane");
        if cycleway.direction == Direction::Backward {
            tags.insert(format!("{key}:oneway"), "-1");
        }
    }

    if config.check_roundtrip {
        let actual = parse_lanes(&tags)?;
        if actual != lanes {
            return Err(LaneError::RoundTripMismatch {
                expected: lanes.as_ascii(),
                actual: actual.as_ascii(),
                tags: tags.to_string(),
            });
        }
    }

    tracing::trace!("Derived {} tags from {} lanes", tags.len(), lanes.len());
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs.iter().copied().collect()
    }

    fn roundtrip(pairs: &[(&str, &str)]) -> Tags {
        let lanes = parse_lanes(&tags(pairs)).unwrap();
        let derived = lanes_to_tags(&lanes, &LanesToTagsConfig::default()).unwrap();
        assert_eq!(parse_lanes(&derived).unwrap(), lanes);
        derived
    }

    #[test]
    fn test_full_cross_section() {
        let derived = roundtrip(&[
            ("sidewalk", "both"),
            ("cycleway:left", "lane"),
            ("lanes", "2"),
            ("oneway", "yes"),
            ("highway", "primary"),
        ]);
        assert_eq!(
            derived,
            tags(&[
                ("sidewalk", "both"),
                ("cycleway:left", "lane"),
                ("lanes", "2"),
                ("oneway", "yes"),
            ])
        );
    }

    #[test]
    fn test_roundtrip_partial_layouts() {
        assert_eq!(roundtrip(&[("sidewalk", "both")]), tags(&[("sidewalk", "both")]));
        assert_eq!(
            roundtrip(&[("cycleway:left", "lane")]),
            tags(&[("cycleway:left", "lane")])
        );
        assert_eq!(
            roundtrip(&[("lanes", "1"), ("oneway", "yes")]),
            tags(&[("lanes", "1"), ("oneway", "yes")])
        );
    }

    #[test]
    fn test_empty_layout_has_no_tags() {
        assert!(roundtrip(&[("lanes", "0"), ("oneway", "yes")]).is_empty());
        assert!(roundtrip(&[("highway", "track")]).is_empty());
    }

    #[test]
    fn test_backward_driveway_is_not_oneway() {
        let lanes = [Lane::new(LaneType::Driveway, Direction::Backward)];
        let derived = lanes_to_tags(&lanes, &LanesToTagsConfig::new(false)).unwrap();
        assert_eq!(derived, tags(&[("lanes", "1")]));

        let err = lanes_to_tags(&lanes, &LanesToTagsConfig::default()).unwrap_err();
        assert_eq!(
            err,
            LaneError::RoundTripMismatch {
                expected: "dv".to_string(),
                actual: String::new(),
                tags: "lanes=1".to_string(),
            }
        );
    }

    #[test]
    fn test_right_cycleway_is_not_inferred_back() {
        let lanes = [
            Lane::new(LaneType::Driveway, Direction::Forward),
            Lane::new(LaneType::Cycleway, Direction::Backward),
        ];
        let derived = lanes_to_tags(&lanes, &LanesToTagsConfig::new(false)).unwrap();
        assert_eq!(
            derived,
            tags(&[
                ("lanes", "1"),
                ("oneway", "yes"),
                ("cycleway:right", "lane"),
                ("cycleway:right:oneway", "-1"),
            ])
        );
        assert!(matches!(
            lanes_to_tags(&lanes, &LanesToTagsConfig::default()),
            Err(LaneError::RoundTripMismatch { .. })
        ));
    }

    #[test]
    fn test_single_sidewalk_is_left() {
        let lanes = [Lane::new(LaneType::Sidewalk, Direction::Forward)];
        let derived = lanes_to_tags(&lanes, &LanesToTagsConfig::new(false)).unwrap();
        assert_eq!(derived, tags(&[("sidewalk", "left")]));
    }
}
