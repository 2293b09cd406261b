use axum::{middleware, routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorBodyDto, ErrorDto},
        bug::{BugDto, CreateBugDto, DeleteBugDto, UpdateBugDto},
    },
    server::{
        controller::{bug, health::health, procedure::procedure_not_found},
        middleware::cors::preflight_no_content,
        state::AppState,
    },
};

/// Path prefix every RPC procedure is served under.
pub const RPC_PREFIX: &str = "/v1/trpc";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::bug::get_bugs,
        crate::server::controller::bug::create_bug,
        crate::server::controller::bug::update_bug,
        crate::server::controller::bug::delete_bug,
    ),
    components(schemas(
        BugDto,
        CreateBugDto,
        UpdateBugDto,
        DeleteBugDto,
        ErrorDto,
        ErrorBodyDto
    )),
    tags((name = "bugs", description = "Bug tracking procedures"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/v1/openapi.json", get(openapi))
        .nest(RPC_PREFIX, rpc_router())
}

/// Composes every procedure namespace into the single RPC entry point.
fn rpc_router() -> Router<AppState> {
    Router::new()
        .merge(bug::procedures())
        .fallback(procedure_not_found)
}

/// Builds the complete HTTP application around the router.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(preflight_no_content))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
