//! Budget tracker domain: transactions, window aggregation, budget
//! allocation and accounts.
//!
//! Pure logic lives in [`analytics`] and [`budget`]; [`Ledger`] is the
//! in-memory store and [`Engine`] the SQLite-backed one. Conversions to and
//! from the `api_types` wire shapes are `From`/`TryFrom` impls.

pub use accounts::{Account, AccountNew, net_worth};
pub use analytics::{CategorySpending, Overview, Window};
pub use budget::{Allocation, AllocationStatus, BudgetGoals, Bucket};
pub use categories::{DEFAULT_CATEGORIES, merge_categories};
pub use error::EngineError;
pub use ledger::Ledger;
pub use money::MoneyCents;
pub use ops::{Engine, EngineBuilder, TransactionFilter};
pub use sample::{sample_accounts, sample_transactions};
pub use transactions::{DATE_FORMAT, Transaction, TransactionDraft, TransactionKind, ValidDraft};

pub mod analytics;
pub mod budget;

mod accounts;
mod budget_goals;
mod categories;
mod error;
mod ledger;
mod money;
mod ops;
mod sample;
mod transactions;
mod util;
mod views;

type ResultEngine<T> = Result<T, EngineError>;
