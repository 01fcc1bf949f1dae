//! Single-character rendering of lanes.

use super::{Direction, Lane, LaneType};

/// Display lane detail as printable characters.
pub trait Printable {
    fn as_ascii(&self) -> String;
    fn as_utf8(&self) -> String;
}

impl Printable for LaneType {
    fn as_ascii(&self) -> String {
        match self {
            LaneType::Sidewalk => "s",
            LaneType::Cycleway => "b",
            LaneType::Driveway => "d",
        }
        .to_string()
    }

    fn as_utf8(&self) -> String {
        match self {
            LaneType::Sidewalk => "🚶",
            LaneType::Cycleway => "🚲",
            LaneType::Driveway => "🚗",
        }
        .to_string()
    }
}

impl Printable for Direction {
    fn as_ascii(&self) -> String {
        match self {
            Direction::Forward => "^",
            Direction::Backward => "v",
        }
        .to_string()
    }

    fn as_utf8(&self) -> String {
        match self {
            Direction::Forward => "↑",
            Direction::Backward => "↓",
        }
        .to_string()
    }
}

impl Printable for Lane {
    fn as_ascii(&self) -> String {
        format!("{}{}", self.lane_type.as_ascii(), self.direction.as_ascii())
    }

    fn as_utf8(&self) -> String {
        format!("{}{}", self.lane_type.as_utf8(), self.direction.as_utf8())
    }
}

impl Printable for [Lane] {
    fn as_ascii(&self) -> String {
        self.iter().map(Printable::as_ascii).collect()
    }

    fn as_utf8(&self) -> String {
        self.iter().map(Printable::as_utf8).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_section_ascii() {
        let lanes = [
            Lane::new(LaneType::Sidewalk, Direction::Backward),
            Lane::new(LaneType::Cycleway, Direction::Forward),
            Lane::new(LaneType::Driveway, Direction::Forward),
            Lane::new(LaneType::Sidewalk, Direction::Forward),
        ];
        assert_eq!(lanes[..].as_ascii(), "svb^d^s^");
    }

    #[test]
    fn test_cross_section_utf8() {
        let lanes = [
            Lane::new(LaneType::Driveway, Direction::Forward),
            Lane::new(LaneType::Sidewalk, Direction::Backward),
        ];
        assert_eq!(lanes[..].as_utf8(), "🚗↑🚶↓");
    }

    #[test]
    fn test_empty_cross_section() {
        let lanes: [Lane; 0] = [];
        assert_eq!(lanes[..].as_ascii(), "");
    }
}
