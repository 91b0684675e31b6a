//! Savings and investment accounts.

use sea_orm::{ActiveValue, entity::prelude::*};

use crate::{
    EngineError, MoneyCents, ResultEngine, money::out_of_range, util::normalize_required_text,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    /// Free-form label such as "Tax-Free Savings".
    pub kind: String,
    pub balance: MoneyCents,
    pub monthly_contribution: MoneyCents,
}

/// New account as submitted by a user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountNew {
    pub name: String,
    pub kind: String,
    pub balance: MoneyCents,
    pub monthly_contribution: MoneyCents,
}

impl AccountNew {
    /// Trims name and kind; both are required. Balance must not be negative.
    pub fn validate(&self) -> ResultEngine<AccountNew> {
        let name = normalize_required_text(&self.name, "account name")?;
        let kind = normalize_required_text(&self.kind, "account type")?;
        if self.balance.is_negative() {
            return Err(EngineError::InvalidAmount(
                "balance must not be negative".to_string(),
            ));
        }
        Ok(AccountNew {
            name,
            kind,
            balance: self.balance,
            monthly_contribution: self.monthly_contribution,
        })
    }
}

/// Sum of all balances.
pub fn net_worth<'a, I>(accounts: I) -> ResultEngine<MoneyCents>
where
    I: IntoIterator<Item = &'a Account>,
{
    MoneyCents::checked_sum(accounts.into_iter().map(|a| a.balance)).ok_or_else(out_of_range)
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub balance_minor: i64,
    pub monthly_contribution_minor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Account {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            kind: value.kind,
            balance: MoneyCents::new(value.balance_minor),
            monthly_contribution: MoneyCents::new(value.monthly_contribution_minor),
        }
    }
}

impl From<&AccountNew> for ActiveModel {
    fn from(value: &AccountNew) -> Self {
        Self {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(value.name.clone()),
            kind: ActiveValue::Set(value.kind.clone()),
            balance_minor: ActiveValue::Set(value.balance.cents()),
            monthly_contribution_minor: ActiveValue::Set(value.monthly_contribution.cents()),
        }
    }
}
