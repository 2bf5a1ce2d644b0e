// src/server/handlers/categories.rs
//! Category listing endpoint

use super::{json_response, ApiError};
use crate::categories;
use crate::query::parse_bool;
use crate::server::ServerState;
use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the category listing
#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    /// Count internal packages too
    pub internal: Option<String>,
}

/// GET /categories
///
/// Returns every category of the newest package versions with a count.
pub async fn categories(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<CategoryParams>,
) -> Result<Response, ApiError> {
    let include_internal = params
        .internal
        .as_deref()
        .and_then(parse_bool)
        .unwrap_or(false);

    let snapshot = state.store.snapshot();
    let listing = categories::aggregate(snapshot.manifests(), include_internal);
    let body = categories::render(&listing)?;

    Ok(json_response(body, state.config.categories_cache))
}
