use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::{LiftStatus, TrailDifficulty, TrailStatus};

#[derive(Parser)]
#[command(name = "snowtooth")]
#[command(
    author,
    version,
    about = "A GraphQL API for ski resort lift and trail status"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing lifts.json and trails.json (embedded defaults otherwise)
    #[arg(long, global = true, env = "SNOWTOOTH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 4000, env = "SNOWTOOTH_PORT")]
        port: u16,
    },

    /// Execute a GraphQL query against the store
    #[command(visible_alias = "q")]
    Query {
        /// Query selection set, without the outer `query { }` wrapper
        selection: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation against the store
    #[command(visible_alias = "m")]
    Mutate {
        /// Mutation selection set, without the outer `mutation { }` wrapper
        selection: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Set the status of a lift
    SetLift {
        /// Lift id
        id: String,

        /// New status (OPEN, CLOSED, HOLD)
        status: LiftStatus,
    },

    /// Set the status of a trail
    SetTrail {
        /// Trail id
        id: String,

        /// New status (OPEN, CLOSED)
        status: TrailStatus,
    },

    /// List trails, optionally filtered by difficulty
    Trails {
        /// Only show trails with this rating (beginner, intermediate, advanced, expert)
        #[arg(long)]
        difficulty: Option<TrailDifficulty>,
    },
}
