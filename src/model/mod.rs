//! Data models for the resort.
//!
//! This module defines the core data structures:
//!
//! - [`Lift`]: a chairlift, gondola, or rope tow
//! - [`Trail`]: a ski run reachable from one or more lifts
//! - [`LiftStatus`]: operational states (OPEN, CLOSED, HOLD)
//! - [`TrailStatus`]: operational states (OPEN, CLOSED)
//! - [`TrailDifficulty`]: trail ratings (beginner through expert)

mod lift;
mod trail;
mod types;

pub use lift::Lift;
pub use trail::Trail;
pub use types::{LiftStatus, TrailDifficulty, TrailStatus};
