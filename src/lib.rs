//! Lane layout inference for OpenStreetMap roads.
//!
//! [`road::parse_lanes`] turns a road's tags into an ordered, left-to-right
//! sequence of typed and directed [`lane::Lane`]s. The remaining modules wrap
//! it for batch use from the command line.

pub mod app;
pub mod config;
pub mod error;
pub mod lane;
pub mod road;
pub mod sinks;
pub mod tags;

pub use error::LaneError;
pub use lane::{Direction, DrivingSide, Lane, LaneStructure, LaneType, Printable};
pub use road::{LanesToTagsConfig, Road, lanes_to_tags, parse_lanes};
pub use tags::Tags;
