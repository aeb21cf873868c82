use anyhow::{Context, Result};
use clap::Parser;

use snowtooth::cli::{Cli, Commands};
use snowtooth::graphql::{SnowtoothSchema, build_schema, run_server};
use snowtooth::model::TrailDifficulty;
use snowtooth::{logging, storage};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let store = match &cli.data_dir {
        Some(dir) => storage::load_snapshot(dir)
            .with_context(|| format!("Failed to load snapshot from {}", dir.display()))?,
        None => storage::default_snapshot().context("Failed to load embedded snapshot")?,
    };
    let schema = build_schema(store);

    match cli.command {
        Commands::Serve { port } => {
            println!("Starting GraphQL server on http://localhost:{}/graphql", port);
            println!("GraphQL Playground: http://localhost:{}", port);

            tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, port).await })?;
            Ok(())
        }
        Commands::Query {
            selection,
            variables,
        } => execute(schema, "query", &selection, variables),
        Commands::Mutate {
            selection,
            variables,
        } => execute(schema, "mutation", &selection, variables),
        Commands::SetLift { id, status } => execute(
            schema,
            "mutation",
            &format!(
                r#"setLiftStatus(id: "{}", status: {}) {{ lift {{ id name status }} changed }}"#,
                id, status
            ),
            None,
        ),
        Commands::SetTrail { id, status } => execute(
            schema,
            "mutation",
            &format!(
                r#"setTrailStatus(id: "{}", status: {}) {{ id name status }}"#,
                id, status
            ),
            None,
        ),
        Commands::Trails { difficulty } => list_trails(schema, difficulty),
    }
}

/// Print trails as pretty JSON, optionally narrowed to one difficulty.
fn list_trails(schema: SnowtoothSchema, difficulty: Option<TrailDifficulty>) -> Result<()> {
    let document = "query { allTrails { id name difficulty status } }";
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(document));
    let data = response.data.into_json()?;

    let trails = data["allTrails"].as_array().cloned().unwrap_or_default();
    let trails: Vec<_> = match difficulty {
        Some(d) => trails
            .into_iter()
            .filter(|t| t["difficulty"] == d.to_string())
            .collect(),
        None => trails,
    };

    println!("{}", serde_json::to_string_pretty(&trails)?);
    Ok(())
}

/// Run a one-shot operation against the in-process schema and print the
/// response as pretty JSON.
fn execute(
    schema: SnowtoothSchema,
    operation: &str,
    selection: &str,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Failed to parse variables as JSON")?
    } else {
        async_graphql::Variables::default()
    };

    // Auto-wrap the selection in the operation braces
    let document = format!("{} {{ {} }}", operation, selection);
    let request = async_graphql::Request::new(&document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
