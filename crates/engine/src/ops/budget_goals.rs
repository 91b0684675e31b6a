use chrono::Utc;
use sea_orm::{QueryOrder, TransactionTrait, prelude::*};

use crate::{BudgetGoals, ResultEngine, budget_goals};

use super::{Engine, with_tx};

impl Engine {
    /// Most recently saved goals, or the defaults when none were saved.
    pub async fn budget_goals(&self) -> ResultEngine<BudgetGoals> {
        let latest = budget_goals::Entity::find()
            .order_by_desc(budget_goals::Column::CreatedAt)
            .order_by_desc(budget_goals::Column::Id)
            .one(&self.database)
            .await?;
        Ok(latest.map(BudgetGoals::from).unwrap_or_default())
    }

    /// Appends a new goals row; earlier rows are kept.
    pub async fn save_budget_goals(&self, goals: &BudgetGoals) -> ResultEngine<BudgetGoals> {
        goals.validate()?;
        let now = Utc::now();
        with_tx!(self, |db_tx| {
            budget_goals::ActiveModel::new_row(goals, now)
                .insert(&db_tx)
                .await?;
            tracing::debug!(
                monthly_income = goals.monthly_income.cents(),
                "budget goals saved"
            );
            Ok(*goals)
        })
    }
}
