//! Tag rules producing lanes per category.

use crate::error::LaneError;
use crate::lane::{Direction, Lane, LaneType};
use crate::tags::Tags;

pub(super) const LANES: &str = "lanes";
pub(super) const ONEWAY: &str = "oneway";
pub(super) const SIDEWALK: &str = "sidewalk";
pub(super) const CYCLEWAY_LEFT: &str = "cycleway:left";
pub(super) const CYCLEWAY_RIGHT: &str = "cycleway:right";

/// Infer the lane cross-section from road tags.
///
/// Lanes are ordered left to right: left sidewalk, left cycleway, driveways,
/// right cycleway, right sidewalk. Absent tags never fail; only a malformed
/// or unallocatable `lanes` value on a one-way road does.
pub fn parse_lanes(tags: &Tags) -> Result<Vec<Lane>, LaneError> {
    let driveways = driveway_count(tags)?;
    let (sidewalk_left, sidewalk_right) = sidewalk_lanes(tags);
    let cycleway_left = cycleway_left_lanes(tags);
    let cycleway_right = cycleway_right_lanes(tags);

    let sides = sidewalk_left.len()
        + cycleway_left.len()
        + cycleway_right.len()
        + sidewalk_right.len();

    let mut lanes = Vec::new();
    driveways
        .checked_add(sides)
        .ok_or(LaneError::LaneCountTooLarge { count: driveways })
        .and_then(|total| {
            lanes
                .try_reserve_exact(total)
                .map_err(|_| LaneError::LaneCountTooLarge { count: driveways })
        })?;

    lanes.extend(sidewalk_left);
    lanes.extend(cycleway_left);
    lanes.extend(std::iter::repeat_n(
        Lane::new(LaneType::Driveway, Direction::Forward),
        driveways,
    ));
    lanes.extend(cycleway_right);
    lanes.extend(sidewalk_right);

    tracing::trace!("Inferred {} lanes from {} tags", lanes.len(), tags.len());
    Ok(lanes)
}

/// Number of forward driveways for `lanes=N` on `oneway=yes` roads.
fn driveway_count(tags: &Tags) -> Result<usize, LaneError> {
    let Some(count) = tags.get(LANES) else {
        return Ok(0);
    };

    if !tags.is(ONEWAY, "yes") {
        // Splitting lanes between directions is not supported.
        tracing::debug!(
            "Skipping lanes={} on non-oneway road (oneway={:?})",
            count,
            tags.get(ONEWAY)
        );
        return Ok(0);
    }

    count
        .trim()
        .parse()
        .map_err(|source| LaneError::InvalidLaneCount {
            value: count.to_string(),
            source,
        })
}

/// Sidewalks as `(left, right)`; only `sidewalk=both` produces any.
fn sidewalk_lanes(tags: &Tags) -> (Vec<Lane>, Vec<Lane>) {
    match tags.get(SIDEWALK) {
        Some("both") => (
            vec![Lane::new(LaneType::Sidewalk, Direction::Backward)],
            vec![Lane::new(LaneType::Sidewalk, Direction::Forward)],
        ),
        Some(other) => {
            tracing::debug!("Ignoring unsupported sidewalk={}", other);
            (Vec::new(), Vec::new())
        }
        None => (Vec::new(), Vec::new()),
    }
}

fn cycleway_left_lanes(tags: &Tags) -> Vec<Lane> {
    if tags.is(CYCLEWAY_LEFT, "lane") {
        vec![Lane::new(LaneType::Cycleway, Direction::Forward)]
    } else {
        Vec::new()
    }
}

/// Placeholder for the right-side mirror of `cycleway:left`; never yields lanes.
fn cycleway_right_lanes(tags: &Tags) -> Vec<Lane> {
    if let Some(value) = tags.get(CYCLEWAY_RIGHT) {
        tracing::trace!("cycleway:right={} is not interpreted", value);
    }
    Vec::new()
}
