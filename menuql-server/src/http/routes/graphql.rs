//! GraphQL endpoint

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};

use crate::http::server::AppState;

/// POST /graphql - execute one GraphQL request
async fn graphql_handler(State(state): State<Arc<AppState>>, req: GraphQLRequest) -> GraphQLResponse {
    let req = req.into_inner();
    tracing::debug!(operation = ?req.operation_name, "GraphQL request");

    state.schema.execute(req).await.into()
}

/// GET /graphql - interactive GraphiQL page
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// GraphQL routes
pub fn router(playground: bool) -> Router<Arc<AppState>> {
    if playground {
        Router::new().route("/graphql", get(graphiql).post(graphql_handler))
    } else {
        Router::new().route("/graphql", post(graphql_handler))
    }
}
