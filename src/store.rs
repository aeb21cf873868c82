//! In-memory entity store for the resort.
//!
//! The store holds the authoritative state of all lifts and trails for the
//! process lifetime. It is an owned value, constructed once from a snapshot
//! and handed to the GraphQL layer; tests build their own isolated instances.

use crate::model::{Lift, LiftStatus, Trail, TrailStatus};

#[derive(Debug)]
pub struct ResortStore {
    lifts: Vec<Lift>,
    trails: Vec<Trail>,
}

impl ResortStore {
    pub fn new(lifts: Vec<Lift>, trails: Vec<Trail>) -> Self {
        Self { lifts, trails }
    }

    pub fn lift_count(&self) -> usize {
        self.lifts.len()
    }

    pub fn trail_count(&self) -> usize {
        self.trails.len()
    }

    /// All lifts, in snapshot order.
    pub fn all_lifts(&self) -> &[Lift] {
        &self.lifts
    }

    /// All trails, in snapshot order.
    pub fn all_trails(&self) -> &[Trail] {
        &self.trails
    }

    pub fn find_lift(&self, id: &str) -> Option<&Lift> {
        self.lifts.iter().find(|lift| lift.id == id)
    }

    pub fn find_trail(&self, id: &str) -> Option<&Trail> {
        self.trails.iter().find(|trail| trail.id == id)
    }

    /// Overwrite a lift's status in place and return the mutated record.
    pub fn set_lift_status(&mut self, id: &str, status: LiftStatus) -> Option<&Lift> {
        let lift = self.lifts.iter_mut().find(|lift| lift.id == id)?;
        lift.status = status;
        Some(lift)
    }

    /// Overwrite a trail's status in place and return the mutated record.
    pub fn set_trail_status(&mut self, id: &str, status: TrailStatus) -> Option<&Trail> {
        let trail = self.trails.iter_mut().find(|trail| trail.id == id)?;
        trail.status = status;
        Some(trail)
    }

    /// Lifts whose trail list contains `trail_id`, in snapshot order.
    ///
    /// This is the computed reverse of the canonical lift-to-trail relation.
    pub fn lifts_accessing(&self, trail_id: &str) -> Vec<&Lift> {
        self.lifts
            .iter()
            .filter(|lift| lift.accesses(trail_id))
            .collect()
    }
}
