use super::types::{TrailDifficulty, TrailStatus};
use serde::{Deserialize, Serialize};

/// A ski run.
///
/// Trails do not store which lifts access them; that relation lives on
/// [`Lift::trail_ids`](super::Lift) and is inverted on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub id: String,
    pub name: String,

    pub difficulty: TrailDifficulty,

    #[serde(default)]
    pub status: TrailStatus,

    #[serde(default)]
    pub groomed: bool,

    #[serde(default)]
    pub snowmaking: bool,

    #[serde(default)]
    pub trees: bool,

    #[serde(default)]
    pub night: bool,
}

impl Trail {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        difficulty: TrailDifficulty,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            difficulty,
            status: TrailStatus::default(),
            groomed: false,
            snowmaking: false,
            trees: false,
            night: false,
        }
    }

    pub fn with_status(mut self, status: TrailStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_groomed(mut self, groomed: bool) -> Self {
        self.groomed = groomed;
        self
    }

    pub fn with_trees(mut self, trees: bool) -> Self {
        self.trees = trees;
        self
    }

    pub fn with_night(mut self, night: bool) -> Self {
        self.night = night;
        self
    }
}
