//! Core types for the marga route planner.
//!
//! - [`GridCoord`]: integer cell coordinates, plus neighbor and direction helpers
//! - [`WorldPoint`]: continuous world-space position

mod point;

pub use point::{GridCoord, WorldPoint};
