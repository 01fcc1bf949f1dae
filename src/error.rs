use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaneError {
    #[error("invalid value '{value}' for lane field '{key}'")]
    InvalidTagValue { key: String, value: String },
    #[error("invalid lane count '{value}': {source}")]
    InvalidLaneCount {
        value: String,
        source: ParseIntError,
    },
    #[error("lane count {count} is too large to lay out")]
    LaneCountTooLarge { count: usize },
    #[error("lane structure is missing field '{0}'")]
    MissingField(&'static str),
    #[error("lanes '{expected}' do not survive a tags round trip, got '{actual}' from tags:\n{tags}")]
    RoundTripMismatch {
        expected: String,
        actual: String,
        tags: String,
    },
}

impl LaneError {
    pub fn invalid_tag_value(key: &str, value: &str) -> Self {
        LaneError::InvalidTagValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}
