//! Accounts API endpoints

use api_types::account::{AccountNew, AccountView};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<AccountView>>, ServerError> {
    let accounts = state.engine.list_accounts().await?;
    Ok(Json(accounts.into_iter().map(AccountView::from).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<AccountNew>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountView>), ServerError> {
    let Json(payload) = payload?;
    let account = state
        .engine
        .new_account(&engine::AccountNew::from(payload))
        .await?;
    Ok((StatusCode::CREATED, Json(account.into())))
}
