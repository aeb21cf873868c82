use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};

use crate::error::Result;

use super::schema::SnowtoothSchema;

async fn graphql_handler(
    State(schema): State<SnowtoothSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Serve the schema over HTTP until the process is stopped.
pub async fn run_server(schema: SnowtoothSchema, port: u16) -> Result<()> {
    let app = Router::new()
        .route("/", get(playground))
        .route("/graphql", post(graphql_handler))
        .with_state(schema);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Snowtooth server running at http://localhost:{}/graphql", port);
    axum::serve(listener, app).await?;
    Ok(())
}
