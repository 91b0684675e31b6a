//! Budget goals endpoints. Every response carries the recomputed allocation.

use api_types::budget::{BudgetGoals, BudgetGoalsView};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{ServerError, server::ServerState};

pub async fn get(State(state): State<ServerState>) -> Result<Json<BudgetGoalsView>, ServerError> {
    let goals = state.engine.budget_goals().await?;
    Ok(Json(BudgetGoalsView::try_from(goals)?))
}

pub async fn save(
    State(state): State<ServerState>,
    payload: Result<Json<BudgetGoals>, JsonRejection>,
) -> Result<Json<BudgetGoalsView>, ServerError> {
    let Json(payload) = payload?;
    let goals = state
        .engine
        .save_budget_goals(&engine::BudgetGoals::from(&payload))
        .await?;
    Ok(Json(BudgetGoalsView::try_from(goals)?))
}
