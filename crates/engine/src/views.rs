//! Conversions between engine values and the `api_types` wire shapes shared
//! by the server and the dashboard.

use api_types::{account, analytics, budget, transaction};

use crate::{
    Account, AccountNew, Allocation, AllocationStatus, BudgetGoals, CategorySpending, EngineError,
    MoneyCents, Transaction, TransactionDraft, TransactionKind, Window,
};

impl From<analytics::Period> for Window {
    fn from(period: analytics::Period) -> Self {
        match period {
            analytics::Period::Month => Self::Month,
            analytics::Period::SixMonths => Self::SixMonths,
            analytics::Period::Year => Self::Year,
        }
    }
}

impl From<transaction::TransactionKind> for TransactionKind {
    fn from(kind: transaction::TransactionKind) -> Self {
        match kind {
            transaction::TransactionKind::Income => Self::Income,
            transaction::TransactionKind::Expense => Self::Expense,
        }
    }
}

impl From<TransactionKind> for transaction::TransactionKind {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => Self::Income,
            TransactionKind::Expense => Self::Expense,
        }
    }
}

impl From<&transaction::TransactionDraft> for TransactionDraft {
    fn from(draft: &transaction::TransactionDraft) -> Self {
        Self {
            date: draft.date.clone(),
            description: draft.description.clone(),
            amount: draft.amount.clone(),
            kind: draft.kind.into(),
            category: draft.category.clone(),
            notes: draft.notes.clone(),
            recurring: draft.recurring,
        }
    }
}

impl From<Transaction> for transaction::TransactionView {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            date: tx.date,
            description: tx.description,
            amount_minor: tx.amount.cents(),
            kind: tx.kind.into(),
            category: tx.category,
            notes: tx.notes,
            recurring: tx.recurring,
        }
    }
}

impl From<Account> for account::AccountView {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            kind: account.kind,
            balance_minor: account.balance.cents(),
            monthly_contribution_minor: account.monthly_contribution.cents(),
        }
    }
}

impl From<account::AccountNew> for AccountNew {
    fn from(account: account::AccountNew) -> Self {
        Self {
            name: account.name,
            kind: account.kind,
            balance: MoneyCents::new(account.balance_minor),
            monthly_contribution: MoneyCents::new(account.monthly_contribution_minor),
        }
    }
}

impl From<CategorySpending> for analytics::CategorySpending {
    fn from(group: CategorySpending) -> Self {
        Self {
            category: group.category,
            amount_minor: group.amount.cents(),
        }
    }
}

impl From<&budget::BudgetGoals> for BudgetGoals {
    fn from(goals: &budget::BudgetGoals) -> Self {
        Self {
            monthly_income: MoneyCents::new(goals.monthly_income_minor),
            debt_payments: MoneyCents::new(goals.debt_payments_minor),
            savings: MoneyCents::new(goals.savings_minor),
            investments: MoneyCents::new(goals.investments_minor),
            discretionary: MoneyCents::new(goals.discretionary_minor),
        }
    }
}

impl From<BudgetGoals> for budget::BudgetGoals {
    fn from(goals: BudgetGoals) -> Self {
        Self {
            monthly_income_minor: goals.monthly_income.cents(),
            debt_payments_minor: goals.debt_payments.cents(),
            savings_minor: goals.savings.cents(),
            investments_minor: goals.investments.cents(),
            discretionary_minor: goals.discretionary.cents(),
        }
    }
}

impl From<Allocation> for budget::Allocation {
    fn from(allocation: Allocation) -> Self {
        let status = match allocation.status {
            AllocationStatus::FullyAllocated => budget::AllocationStatus::FullyAllocated,
            AllocationStatus::Unallocated(amount) => budget::AllocationStatus::Unallocated {
                amount_minor: amount.cents(),
            },
            AllocationStatus::OverBudget(amount) => budget::AllocationStatus::OverBudget {
                amount_minor: amount.cents(),
            },
        };
        Self {
            total_allocated_minor: allocation.total_allocated.cents(),
            remaining_minor: allocation.remaining.cents(),
            status,
        }
    }
}

/// Goals together with their recomputed allocation; fails when the bucket
/// total overflows.
impl TryFrom<BudgetGoals> for budget::BudgetGoalsView {
    type Error = EngineError;

    fn try_from(goals: BudgetGoals) -> Result<Self, Self::Error> {
        let allocation = goals.allocation()?;
        Ok(Self {
            goals: goals.into(),
            allocation: allocation.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use api_types::budget::BudgetGoalsView;

    use super::*;

    #[test]
    fn period_maps_to_window() {
        assert_eq!(Window::from(analytics::Period::Month), Window::Month);
        assert_eq!(Window::from(analytics::Period::SixMonths), Window::SixMonths);
        assert_eq!(Window::from(analytics::Period::Year), Window::Year);
    }

    #[test]
    fn goals_view_reports_over_budget() {
        let goals = BudgetGoals {
            monthly_income: MoneyCents::dollars(100),
            debt_payments: MoneyCents::dollars(150),
            ..BudgetGoals::default()
        };
        let view = BudgetGoalsView::try_from(goals).unwrap();
        assert_eq!(view.goals.monthly_income_minor, 10_000);
        assert_eq!(view.allocation.remaining_minor, -445_000);
        assert_eq!(
            view.allocation.status,
            budget::AllocationStatus::OverBudget {
                amount_minor: 445_000
            }
        );
        assert_eq!(BudgetGoals::from(&view.goals), goals);
    }

    #[test]
    fn overflowing_goals_have_no_view() {
        let wire = budget::BudgetGoals {
            debt_payments_minor: i64::MAX,
            savings_minor: 1,
            ..budget::BudgetGoals::default()
        };
        let err = BudgetGoalsView::try_from(BudgetGoals::from(&wire)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)));
    }

    #[test]
    fn expense_view_keeps_signed_amount() {
        let draft = transaction::TransactionDraft {
            date: "2025-07-27".to_string(),
            description: "Gas Station".to_string(),
            amount: "45.05".to_string(),
            kind: transaction::TransactionKind::Expense,
            category: "Transportation".to_string(),
            notes: None,
            recurring: false,
        };
        let tx = TransactionDraft::from(&draft)
            .validate()
            .unwrap()
            .into_transaction(3);
        let view = transaction::TransactionView::from(tx);
        assert_eq!(view.amount_minor, -4_505);
        assert_eq!(view.kind, transaction::TransactionKind::Expense);
    }
}
