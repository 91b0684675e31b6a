//! Categories API endpoints.

use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Used categories merged with the defaults.
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<String>>, ServerError> {
    Ok(Json(state.engine.categories().await?))
}
