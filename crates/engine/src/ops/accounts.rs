use sea_orm::{QueryOrder, TransactionTrait, prelude::*};

use crate::{Account, AccountNew, ResultEngine, accounts};

use super::{Engine, with_tx};

impl Engine {
    /// All accounts ordered by name.
    pub async fn list_accounts(&self) -> ResultEngine<Vec<Account>> {
        let models = accounts::Entity::find()
            .order_by_asc(accounts::Column::Name)
            .order_by_asc(accounts::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Account::from).collect())
    }

    pub async fn new_account(&self, account: &AccountNew) -> ResultEngine<Account> {
        let account = account.validate()?;
        with_tx!(self, |db_tx| {
            let model = accounts::ActiveModel::from(&account).insert(&db_tx).await?;
            tracing::debug!(id = model.id, name = %model.name, "account created");
            Ok(Account::from(model))
        })
    }
}
