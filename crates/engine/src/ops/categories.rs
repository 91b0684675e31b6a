use sea_orm::{QueryOrder, QuerySelect, prelude::*};

use crate::{ResultEngine, categories::merge_categories, transactions};

use super::Engine;

impl Engine {
    /// Categories in use merged with the default set, sorted.
    pub async fn categories(&self) -> ResultEngine<Vec<String>> {
        let used: Vec<String> = transactions::Entity::find()
            .select_only()
            .column(transactions::Column::Category)
            .distinct()
            .order_by_asc(transactions::Column::Category)
            .into_tuple()
            .all(&self.database)
            .await?;
        Ok(merge_categories(used))
    }
}
