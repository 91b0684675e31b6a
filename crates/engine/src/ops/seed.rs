use chrono::Utc;
use sea_orm::{PaginatorTrait, TransactionTrait, prelude::*};

use crate::{
    ResultEngine, accounts,
    sample::{sample_accounts, sample_transactions},
    transactions,
};

use super::{Engine, with_tx};

impl Engine {
    /// Inserts the demo data set when there are no transactions yet.
    ///
    /// Accounts are only added when that table is empty too. Returns whether
    /// anything was inserted.
    pub async fn seed_sample_data(&self) -> ResultEngine<bool> {
        let now = Utc::now();
        with_tx!(self, |db_tx| {
            if transactions::Entity::find().count(&db_tx).await? > 0 {
                return Ok(false);
            }
            for tx in sample_transactions() {
                transactions::ActiveModel::new_record(&tx, now)
                    .insert(&db_tx)
                    .await?;
            }
            if accounts::Entity::find().count(&db_tx).await? == 0 {
                for account in sample_accounts() {
                    accounts::ActiveModel::from(&account).insert(&db_tx).await?;
                }
            }
            tracing::info!("sample data inserted");
            Ok(true)
        })
    }
}
