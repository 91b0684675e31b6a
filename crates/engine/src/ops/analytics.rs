use chrono::NaiveDate;

use crate::{
    CategorySpending, MoneyCents, Overview, ResultEngine, Transaction, Window, analytics,
    net_worth,
};

use super::{Engine, TransactionFilter};

impl Engine {
    /// Income, expenses and savings for `window`, plus the current net worth.
    pub async fn financial_overview(
        &self,
        window: Window,
        today: NaiveDate,
    ) -> ResultEngine<(Overview, MoneyCents)> {
        let transactions = self.dated_transactions().await?;
        let accounts = self.list_accounts().await?;
        Ok((
            analytics::overview(&transactions, window, today)?,
            net_worth(&accounts)?,
        ))
    }

    /// Expense totals per category for `window`.
    pub async fn spending_by_category(
        &self,
        window: Window,
        today: NaiveDate,
    ) -> ResultEngine<Vec<CategorySpending>> {
        let transactions = self.dated_transactions().await?;
        analytics::spending_by_category(&transactions, window, today)
    }

    /// All transactions; records whose date does not parse are reported and
    /// left for the aggregation to skip.
    async fn dated_transactions(&self) -> ResultEngine<Vec<Transaction>> {
        let transactions = self.list_transactions(&TransactionFilter::default()).await?;
        for tx in transactions.iter().filter(|tx| tx.parsed_date().is_none()) {
            tracing::warn!(id = tx.id, date = %tx.date, "skipping transaction with malformed date");
        }
        Ok(transactions)
    }
}
