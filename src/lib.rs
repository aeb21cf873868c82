//! # Snowtooth - a GraphQL API for ski resort status
//!
//! Snowtooth exposes the lifts and trails of a ski resort as a typed GraphQL
//! graph. Lift and trail records live in an in-memory store loaded once at
//! startup; mutations flip operational status in place and are visible to
//! all subsequent reads for the process lifetime.
//!
//! ## Quick start
//!
//! ```bash
//! # Serve the embedded resort dataset
//! snowtooth serve
//!
//! # How many lifts are spinning?
//! snowtooth query 'allLifts { name status }'
//!
//! # Put a lift on hold
//! snowtooth mutate 'setLiftStatus(id: "astra-express", status: HOLD) { lift { status } changed }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Data models (Lift, Trail, status enums)
//! - [`storage`]: Snapshot loading from JSON files
//! - [`store`]: The in-memory entity store

/// Command-line interface definitions using clap.
pub mod cli;

/// Error types and result aliases.
///
/// Defines the `SnowtoothError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum HTTP server.
pub mod graphql;

pub mod logging;

/// Data models for the resort.
///
/// Includes `Lift`, `Trail`, and their status/difficulty enums.
pub mod model;

/// Snapshot loading.
///
/// Reads lifts and trails from JSON files, or from the embedded dataset.
pub mod storage;

/// The in-memory entity store.
///
/// Holds the authoritative lift and trail collections for the process.
pub mod store;
