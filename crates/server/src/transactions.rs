//! Transactions API endpoints

use api_types::transaction::{TransactionDraft, TransactionQuery, TransactionView};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

/// Empty query values (`?category=`) mean "no filter".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<TransactionQuery>, QueryRejection>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let Query(query) = query?;
    let filter = engine::TransactionFilter {
        start_date: non_blank(query.start_date),
        end_date: non_blank(query.end_date),
        category: non_blank(query.category),
        kind: query.kind.map(Into::into),
    };

    let transactions = state.engine.list_transactions(&filter).await?;
    Ok(Json(
        transactions.into_iter().map(TransactionView::from).collect(),
    ))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TransactionDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let Json(payload) = payload?;
    let tx = state.engine.add_transaction(&engine::TransactionDraft::from(&payload)).await?;
    Ok((StatusCode::CREATED, Json(tx.into())))
}

pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TransactionDraft>, JsonRejection>,
) -> Result<Json<TransactionView>, ServerError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let tx = state
        .engine
        .update_transaction(id, &engine::TransactionDraft::from(&payload))
        .await?;
    Ok(Json(tx.into()))
}

/// Always `204`, also when `id` does not exist.
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = id?;
    if !state.engine.delete_transaction(id).await? {
        tracing::debug!(id, "delete of absent transaction");
    }
    Ok(StatusCode::NO_CONTENT)
}
