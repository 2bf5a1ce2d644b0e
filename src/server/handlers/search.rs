// src/server/handlers/search.rs
//! Package search endpoint

use super::{json_response, ApiError};
use crate::query::{Query, SearchParams};
use crate::search;
use crate::server::ServerState;
use axum::{
    extract::{self, State},
    response::Response,
};
use std::sync::Arc;

/// GET /search
///
/// Query parameters: `kibana`, `category`, `package`, `internal`.
/// Returns the newest version of each matching package, or every version
/// when `package` is set.
pub async fn search(
    State(state): State<Arc<ServerState>>,
    extract::Query(params): extract::Query<SearchParams>,
) -> Result<Response, ApiError> {
    let query = Query::from_params(&params)?;

    let snapshot = state.store.snapshot();
    let body = search::evaluate(&query, snapshot.manifests())?;

    Ok(json_response(body, state.config.search_cache))
}
