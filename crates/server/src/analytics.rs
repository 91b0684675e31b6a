//! Aggregation endpoints over a trailing window.

use api_types::analytics::{CategorySpending, FinancialOverview, PeriodQuery};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{ServerError, server::ServerState};

pub async fn financial_overview(
    State(state): State<ServerState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<FinancialOverview>, ServerError> {
    let Query(query) = query?;
    let period = query.period.unwrap_or_default();
    let (overview, net_worth) = state
        .engine
        .financial_overview(period.into(), state.clock.today())
        .await?;

    Ok(Json(FinancialOverview {
        period,
        income_minor: overview.income.cents(),
        expenses_minor: overview.expenses.cents(),
        savings_minor: overview.savings.cents(),
        net_worth_minor: net_worth.cents(),
    }))
}

pub async fn spending_by_category(
    State(state): State<ServerState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<Vec<CategorySpending>>, ServerError> {
    let Query(query) = query?;
    let period = query.period.unwrap_or_default();
    let groups = state
        .engine
        .spending_by_category(period.into(), state.clock.today())
        .await?;

    Ok(Json(groups.into_iter().map(CategorySpending::from).collect()))
}
