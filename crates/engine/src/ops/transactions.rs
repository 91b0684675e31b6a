use chrono::Utc;
use sea_orm::{QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*};

use crate::{
    EngineError, ResultEngine, Transaction, TransactionDraft, TransactionKind, transactions,
};

use super::{Engine, with_tx};

/// Filters for listing transactions.
///
/// `start_date` and `end_date` are both inclusive and compared as
/// `YYYY-MM-DD` text.
#[derive(Clone, Debug, Default)]
pub struct TransactionFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
}

trait ApplyTxFilters: QueryFilter + Sized {
    fn apply_tx_filters(self, filter: &TransactionFilter) -> Self;
}

impl<T> ApplyTxFilters for T
where
    T: QueryFilter + Sized,
{
    fn apply_tx_filters(mut self, filter: &TransactionFilter) -> Self {
        if let Some(start) = &filter.start_date {
            self = self.filter(transactions::Column::Date.gte(start.trim()));
        }
        if let Some(end) = &filter.end_date {
            self = self.filter(transactions::Column::Date.lte(end.trim()));
        }
        if let Some(category) = &filter.category {
            self = self.filter(transactions::Column::Category.eq(category.trim()));
        }
        if let Some(kind) = filter.kind {
            self = self.filter(transactions::Column::Kind.eq(kind.as_str()));
        }
        self
    }
}

impl Engine {
    /// Lists transactions newest first (`date DESC, id DESC`).
    pub async fn list_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> ResultEngine<Vec<Transaction>> {
        let models = transactions::Entity::find()
            .apply_tx_filters(filter)
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::Id)
            .all(&self.database)
            .await?;

        models.into_iter().map(Transaction::try_from).collect()
    }

    /// Validates `draft` and stores it under `max(id) + 1`.
    pub async fn add_transaction(&self, draft: &TransactionDraft) -> ResultEngine<Transaction> {
        let valid = draft.validate()?;
        let now = Utc::now();
        with_tx!(self, |db_tx| {
            let max_id: Option<i64> = transactions::Entity::find()
                .select_only()
                .column_as(transactions::Column::Id.max(), "max_id")
                .into_tuple::<Option<i64>>()
                .one(&db_tx)
                .await?
                .flatten();
            let tx = valid.into_transaction(max_id.map_or(1, |max| max + 1));

            transactions::ActiveModel::new_record(&tx, now)
                .insert(&db_tx)
                .await?;
            tracing::debug!(id = tx.id, kind = tx.kind.as_str(), "transaction added");
            Ok(tx)
        })
    }

    /// Replaces every user-editable field of transaction `id`.
    pub async fn update_transaction(
        &self,
        id: i64,
        draft: &TransactionDraft,
    ) -> ResultEngine<Transaction> {
        let valid = draft.validate()?;
        let now = Utc::now();
        with_tx!(self, |db_tx| {
            transactions::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound(format!("transaction {id}")))?;

            let tx = valid.into_transaction(id);
            transactions::ActiveModel::replacing(&tx, now)
                .update(&db_tx)
                .await?;
            tracing::debug!(id, "transaction updated");
            Ok(tx)
        })
    }

    /// Deletes transaction `id`. Returns whether a row was removed; an absent
    /// id is not an error.
    pub async fn delete_transaction(&self, id: i64) -> ResultEngine<bool> {
        with_tx!(self, |db_tx| {
            let result = transactions::Entity::delete_by_id(id).exec(&db_tx).await?;
            tracing::debug!(id, removed = result.rows_affected, "transaction deleted");
            Ok(result.rows_affected > 0)
        })
    }
}
