use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};
use tokio::sync::RwLock;

use crate::store::ResortStore;

use super::scalar::Date;
use super::types::*;

pub type SnowtoothSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// The entity store as shared by resolvers.
///
/// Mutations apply immediately and are visible to all subsequent reads;
/// concurrent writers get last-writer-wins semantics through the lock.
pub type SharedStore = Arc<RwLock<ResortStore>>;

pub fn build_schema(store: ResortStore) -> SnowtoothSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data::<SharedStore>(Arc::new(RwLock::new(store)))
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Number of lifts at the resort
    async fn lift_count(&self, ctx: &Context<'_>) -> async_graphql::Result<usize> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(store.lift_count())
    }

    /// All lifts, in snapshot order
    async fn all_lifts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Lift>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(store.all_lifts().iter().cloned().map(Into::into).collect())
    }

    /// Find a single lift by id; null when no lift matches
    async fn find_lift_by_id(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Lift>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(store.find_lift(id.as_str()).cloned().map(Into::into))
    }

    /// Number of trails at the resort
    async fn trail_count(&self, ctx: &Context<'_>) -> async_graphql::Result<usize> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(store.trail_count())
    }

    /// All trails, in snapshot order
    async fn all_trails(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Trail>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(store.all_trails().iter().cloned().map(Into::into).collect())
    }

    /// Find a single trail by id; null when no trail matches
    async fn find_trail_by_id(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Trail>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(store.find_trail(id.as_str()).cloned().map(Into::into))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Set the status of a lift
    ///
    /// Returns the updated lift together with the instant of the change,
    /// or null when no lift matches the id.
    async fn set_lift_status(
        &self,
        ctx: &Context<'_>,
        id: ID,
        status: LiftStatus,
    ) -> async_graphql::Result<Option<SetLiftStatusPayload>> {
        let mut store = ctx.data::<SharedStore>()?.write().await;
        Ok(store
            .set_lift_status(id.as_str(), status.into())
            .cloned()
            .map(|lift| SetLiftStatusPayload {
                lift: lift.into(),
                changed: Date::now(),
            }))
    }

    /// Set the status of a trail
    ///
    /// Returns the updated trail, or null when no trail matches the id.
    async fn set_trail_status(
        &self,
        ctx: &Context<'_>,
        id: ID,
        status: TrailStatus,
    ) -> async_graphql::Result<Option<Trail>> {
        let mut store = ctx.data::<SharedStore>()?.write().await;
        Ok(store
            .set_trail_status(id.as_str(), status.into())
            .cloned()
            .map(Into::into))
    }
}
