//! GraphQL schema and resolvers for the resort.
//!
//! Exposes the entity store through a typed query/mutation surface and
//! resolves the lift/trail relationship in both directions.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! snowtooth serve --port 4000
//!
//! # Execute a query from the CLI
//! snowtooth query '{ liftCount allLifts { id status } }'
//!
//! # Execute a mutation from the CLI
//! snowtooth mutate 'setLiftStatus(id: "panorama", status: OPEN) { lift { id status } changed }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `liftCount`, `allLifts`, `findLiftById`, `trailCount`,
//!   `allTrails`, `findTrailById`
//! - **Mutations**: `setLiftStatus`, `setTrailStatus`
//! - **Scalars**: `Date` (ISO-8601 instant)

mod scalar;
mod schema;
mod server;
mod types;

pub use scalar::Date;
pub use schema::{SharedStore, SnowtoothSchema, build_schema};
pub use server::run_server;
pub use types::*;
