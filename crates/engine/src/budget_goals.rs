//! Persisted budget goals. Rows are append-only; the newest one is current.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};

use crate::{BudgetGoals, MoneyCents};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budget_goals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub monthly_income_minor: i64,
    pub debt_payments_minor: i64,
    pub savings_minor: i64,
    pub investments_minor: i64,
    pub discretionary_minor: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BudgetGoals {
    fn from(value: Model) -> Self {
        Self {
            monthly_income: MoneyCents::new(value.monthly_income_minor),
            debt_payments: MoneyCents::new(value.debt_payments_minor),
            savings: MoneyCents::new(value.savings_minor),
            investments: MoneyCents::new(value.investments_minor),
            discretionary: MoneyCents::new(value.discretionary_minor),
        }
    }
}

impl ActiveModel {
    pub(crate) fn new_row(goals: &BudgetGoals, now: DateTime<Utc>) -> Self {
        Self {
            id: ActiveValue::NotSet,
            monthly_income_minor: ActiveValue::Set(goals.monthly_income.cents()),
            debt_payments_minor: ActiveValue::Set(goals.debt_payments.cents()),
            savings_minor: ActiveValue::Set(goals.savings.cents()),
            investments_minor: ActiveValue::Set(goals.investments.cents()),
            discretionary_minor: ActiveValue::Set(goals.discretionary.cents()),
            created_at: ActiveValue::Set(now),
        }
    }
}
