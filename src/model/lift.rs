use super::types::LiftStatus;
use serde::{Deserialize, Serialize};

/// A lift carrying skiers up the mountain.
///
/// Lifts own the lift-to-trail relation: `trail_ids` is the canonical list of
/// trails reachable from the top of the lift, in snapshot order. The reverse
/// view (which lifts access a trail) is computed from this list, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lift {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub status: LiftStatus,

    pub capacity: u32,

    #[serde(default)]
    pub night: bool,

    #[serde(rename = "elevationGain", default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<i32>,

    #[serde(rename = "trails", default, skip_serializing_if = "Vec::is_empty")]
    pub trail_ids: Vec<String>,
}

impl Lift {
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: LiftStatus::default(),
            capacity,
            night: false,
            elevation_gain: None,
            trail_ids: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: LiftStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_night(mut self, night: bool) -> Self {
        self.night = night;
        self
    }

    pub fn with_elevation_gain(mut self, elevation_gain: i32) -> Self {
        self.elevation_gain = Some(elevation_gain);
        self
    }

    pub fn with_trails(mut self, trail_ids: Vec<String>) -> Self {
        self.trail_ids = trail_ids;
        self
    }

    pub fn accesses(&self, trail_id: &str) -> bool {
        self.trail_ids.iter().any(|t| t == trail_id)
    }
}
