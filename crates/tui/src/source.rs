//! Where the dashboard gets its numbers from.
//!
//! `Remote` talks to the REST API and refetches every panel after each
//! mutation. `Local` keeps an in-memory ledger seeded with sample data and
//! runs the engine's aggregation directly.

use api_types::{
    account::AccountView,
    analytics::{CategorySpending, FinancialOverview, Period},
    budget::{BudgetGoals, BudgetGoalsView},
    transaction::{TransactionDraft, TransactionView},
};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use engine::{Account, EngineError, Ledger, Window, analytics};

use crate::client::{Client, ClientError};

/// Everything the screens render, fetched in one go.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub transactions: Vec<TransactionView>,
    pub overview: FinancialOverview,
    pub spending: Vec<CategorySpending>,
    pub goals: BudgetGoalsView,
    pub accounts: Vec<AccountView>,
    pub categories: Vec<String>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            overview: FinancialOverview::default(),
            spending: Vec::new(),
            goals: BudgetGoalsView::try_from(engine::BudgetGoals::default()).unwrap_or_default(),
            accounts: Vec::new(),
            categories: engine::merge_categories(Vec::<String>::new()),
        }
    }
}

#[derive(Debug)]
pub enum SourceError {
    Remote(ClientError),
    Local(EngineError),
}

impl SourceError {
    pub fn message(&self) -> String {
        match self {
            Self::Remote(err) => err.message(),
            Self::Local(err) => err.to_string(),
        }
    }
}

impl From<ClientError> for SourceError {
    fn from(value: ClientError) -> Self {
        Self::Remote(value)
    }
}

impl From<EngineError> for SourceError {
    fn from(value: EngineError) -> Self {
        Self::Local(value)
    }
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;

#[derive(Debug)]
pub struct LocalStore {
    ledger: Ledger,
    goals: engine::BudgetGoals,
    accounts: Vec<Account>,
    timezone: Tz,
}

impl LocalStore {
    pub fn with_sample_data(timezone: Tz) -> Self {
        let accounts = engine::sample_accounts()
            .into_iter()
            .zip(1..)
            .map(|(account, id)| Account {
                id,
                name: account.name,
                kind: account.kind,
                balance: account.balance,
                monthly_contribution: account.monthly_contribution,
            })
            .collect();

        Self {
            ledger: Ledger::from_transactions(engine::sample_transactions()),
            goals: engine::BudgetGoals::default(),
            accounts,
            timezone,
        }
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }

    /// Runs the aggregation in process. A total that overflows empties its
    /// panel and is reported like a failed fetch.
    fn snapshot(&self, period: Period) -> (Snapshot, Option<String>) {
        let window = Window::from(period);
        let today = self.today();
        let mut banner = None;
        let mut fallback = Snapshot::default();
        fallback.overview.period = period;

        let overview = analytics::overview(self.ledger.iter(), window, today).and_then(|overview| {
            Ok(FinancialOverview {
                period,
                income_minor: overview.income.cents(),
                expenses_minor: overview.expenses.cents(),
                savings_minor: overview.savings.cents(),
                net_worth_minor: engine::net_worth(&self.accounts)?.cents(),
            })
        });
        let spending = analytics::spending_by_category(self.ledger.iter(), window, today)
            .map(|groups| groups.into_iter().map(CategorySpending::from).collect());

        let snapshot = Snapshot {
            transactions: self.ledger.iter().cloned().map(TransactionView::from).collect(),
            overview: panel("overview", overview, &mut banner).unwrap_or(fallback.overview),
            spending: panel("spending", spending, &mut banner).unwrap_or(fallback.spending),
            goals: panel("budget goals", BudgetGoalsView::try_from(self.goals), &mut banner)
                .unwrap_or(fallback.goals),
            accounts: self.accounts.iter().cloned().map(AccountView::from).collect(),
            categories: engine::merge_categories(
                self.ledger.iter().map(|tx| tx.category.as_str()),
            ),
        };

        (snapshot, banner)
    }
}

#[derive(Debug)]
pub enum DataSource {
    Remote(Client),
    Local(LocalStore),
}

impl DataSource {
    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    /// Fetches every panel. A failing panel keeps its default content and
    /// the first failure is returned for the banner.
    pub async fn load(&self, period: Period) -> (Snapshot, Option<String>) {
        let client = match self {
            Self::Local(store) => return store.snapshot(period),
            Self::Remote(client) => client,
        };

        let (transactions, overview, spending, goals, accounts, categories) = tokio::join!(
            client.transactions(),
            client.financial_overview(period),
            client.spending_by_category(period),
            client.budget_goals(),
            client.accounts(),
            client.categories(),
        );

        let mut banner = None;
        let mut fallback = Snapshot::default();
        fallback.overview.period = period;

        let snapshot = Snapshot {
            transactions: panel("transactions", transactions, &mut banner)
                .unwrap_or(fallback.transactions),
            overview: panel("overview", overview, &mut banner).unwrap_or(fallback.overview),
            spending: panel("spending", spending, &mut banner).unwrap_or(fallback.spending),
            goals: panel("budget goals", goals, &mut banner).unwrap_or(fallback.goals),
            accounts: panel("accounts", accounts, &mut banner).unwrap_or(fallback.accounts),
            categories: panel("categories", categories, &mut banner)
                .unwrap_or(fallback.categories),
        };

        (snapshot, banner)
    }

    pub async fn add_transaction(&mut self, draft: &TransactionDraft) -> SourceResult<()> {
        match self {
            Self::Remote(client) => {
                client.add_transaction(draft).await?;
            }
            Self::Local(store) => {
                store.ledger.add(&engine::TransactionDraft::from(draft))?;
            }
        }
        Ok(())
    }

    pub async fn update_transaction(
        &mut self,
        id: i64,
        draft: &TransactionDraft,
    ) -> SourceResult<()> {
        match self {
            Self::Remote(client) => {
                client.update_transaction(id, draft).await?;
            }
            Self::Local(store) => {
                store.ledger.update(id, &engine::TransactionDraft::from(draft))?;
            }
        }
        Ok(())
    }

    pub async fn delete_transaction(&mut self, id: i64) -> SourceResult<()> {
        match self {
            Self::Remote(client) => client.delete_transaction(id).await?,
            Self::Local(store) => {
                if !store.ledger.delete(id) {
                    tracing::debug!(id, "delete of absent transaction");
                }
            }
        }
        Ok(())
    }

    pub async fn save_goals(&mut self, goals: &BudgetGoals) -> SourceResult<()> {
        match self {
            Self::Remote(client) => {
                client.save_budget_goals(goals).await?;
            }
            Self::Local(store) => {
                let goals = engine::BudgetGoals::from(goals);
                goals.validate()?;
                store.goals = goals;
            }
        }
        Ok(())
    }
}

fn panel<T, E>(name: &str, result: Result<T, E>, banner: &mut Option<String>) -> Option<T>
where
    E: Into<SourceError>,
{
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let message = err.into().message();
            tracing::warn!(panel = name, "fetch failed: {message}");
            banner.get_or_insert(message);
            None
        }
    }
}
