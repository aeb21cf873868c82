use crate::model;
use async_graphql::{ComplexObject, Context, Enum, ID, SimpleObject};

use super::scalar::Date;
use super::schema::SharedStore;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum LiftStatus {
    Open,
    Closed,
    Hold,
}

impl From<model::LiftStatus> for LiftStatus {
    fn from(s: model::LiftStatus) -> Self {
        match s {
            model::LiftStatus::Open => LiftStatus::Open,
            model::LiftStatus::Closed => LiftStatus::Closed,
            model::LiftStatus::Hold => LiftStatus::Hold,
        }
    }
}

impl From<LiftStatus> for model::LiftStatus {
    fn from(s: LiftStatus) -> Self {
        match s {
            LiftStatus::Open => model::LiftStatus::Open,
            LiftStatus::Closed => model::LiftStatus::Closed,
            LiftStatus::Hold => model::LiftStatus::Hold,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum TrailStatus {
    Open,
    Closed,
}

impl From<model::TrailStatus> for TrailStatus {
    fn from(s: model::TrailStatus) -> Self {
        match s {
            model::TrailStatus::Open => TrailStatus::Open,
            model::TrailStatus::Closed => TrailStatus::Closed,
        }
    }
}

impl From<TrailStatus> for model::TrailStatus {
    fn from(s: TrailStatus) -> Self {
        match s {
            TrailStatus::Open => model::TrailStatus::Open,
            TrailStatus::Closed => model::TrailStatus::Closed,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(rename_items = "lowercase")]
pub enum TrailDifficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl From<model::TrailDifficulty> for TrailDifficulty {
    fn from(d: model::TrailDifficulty) -> Self {
        match d {
            model::TrailDifficulty::Beginner => TrailDifficulty::Beginner,
            model::TrailDifficulty::Intermediate => TrailDifficulty::Intermediate,
            model::TrailDifficulty::Advanced => TrailDifficulty::Advanced,
            model::TrailDifficulty::Expert => TrailDifficulty::Expert,
        }
    }
}

impl From<TrailDifficulty> for model::TrailDifficulty {
    fn from(d: TrailDifficulty) -> Self {
        match d {
            TrailDifficulty::Beginner => model::TrailDifficulty::Beginner,
            TrailDifficulty::Intermediate => model::TrailDifficulty::Intermediate,
            TrailDifficulty::Advanced => model::TrailDifficulty::Advanced,
            TrailDifficulty::Expert => model::TrailDifficulty::Expert,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Lift {
    pub id: ID,
    pub name: String,
    pub status: LiftStatus,
    pub capacity: u32,
    pub night: bool,
    pub elevation_gain: Option<i32>,

    #[graphql(skip)]
    pub trail_ids: Vec<String>,
}

#[ComplexObject]
impl Lift {
    /// Trails reachable from the top of this lift.
    ///
    /// Ids that resolve to no trail are skipped; a dangling reference is a
    /// snapshot-integrity concern, not a request failure.
    async fn trail_access(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Trail>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        let mut trails = Vec::with_capacity(self.trail_ids.len());
        for trail_id in &self.trail_ids {
            match store.find_trail(trail_id) {
                Some(trail) => trails.push(trail.clone().into()),
                None => tracing::warn!(
                    lift_id = %self.id.as_str(),
                    trail_id = %trail_id,
                    "skipping dangling trail reference"
                ),
            }
        }
        Ok(trails)
    }
}

impl From<model::Lift> for Lift {
    fn from(l: model::Lift) -> Self {
        Self {
            id: ID(l.id),
            name: l.name,
            status: l.status.into(),
            capacity: l.capacity,
            night: l.night,
            elevation_gain: l.elevation_gain,
            trail_ids: l.trail_ids,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Trail {
    pub id: ID,
    pub name: String,
    pub difficulty: TrailDifficulty,
    pub status: TrailStatus,
    pub groomed: bool,
    pub snowmaking: bool,
    pub trees: bool,
    pub night: bool,
}

#[ComplexObject]
impl Trail {
    /// Lifts that provide access to this trail.
    ///
    /// Computed by inverting the lift-to-trail relation, so this view can
    /// never disagree with `Lift.trailAccess`.
    async fn accessed_by_lifts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Lift>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(store
            .lifts_accessing(self.id.as_str())
            .into_iter()
            .map(|lift| lift.clone().into())
            .collect())
    }
}

impl From<model::Trail> for Trail {
    fn from(t: model::Trail) -> Self {
        Self {
            id: ID(t.id),
            name: t.name,
            difficulty: t.difficulty.into(),
            status: t.status.into(),
            groomed: t.groomed,
            snowmaking: t.snowmaking,
            trees: t.trees,
            night: t.night,
        }
    }
}

/// Payload of the `setLiftStatus` mutation.
///
/// Carries the mutated lift and the instant the change was applied. The
/// trail mutation returns the bare entity instead; the asymmetry is kept for
/// wire compatibility with the original schema.
#[derive(SimpleObject)]
pub struct SetLiftStatusPayload {
    pub lift: Lift,
    pub changed: Date,
}
