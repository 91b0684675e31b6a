use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        #[default]
        Expense,
    }

    /// Form payload used by both create and full-record update.
    ///
    /// `amount` is the raw user input; numbers are accepted too and are
    /// converted to their decimal text before validation.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TransactionDraft {
        pub date: String,
        pub description: String,
        #[serde(deserialize_with = "amount_text::deserialize")]
        pub amount: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        #[serde(default)]
        pub category: String,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub recurring: bool,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: i64,
        pub date: String,
        pub description: String,
        /// Signed amount: positive for income, negative for expenses.
        pub amount_minor: i64,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub category: String,
        pub notes: Option<String>,
        pub recurring: bool,
    }

    /// Optional filters for `GET /transactions`. Dates are inclusive.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionQuery {
        pub start_date: Option<String>,
        pub end_date: Option<String>,
        pub category: Option<String>,
        #[serde(rename = "type")]
        pub kind: Option<TransactionKind>,
    }

    mod amount_text {
        use serde::{Deserialize, Deserializer};

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Integer(i64),
            Float(f64),
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(match Raw::deserialize(deserializer)? {
                Raw::Text(text) => text,
                Raw::Integer(value) => value.to_string(),
                Raw::Float(value) => value.to_string(),
            })
        }
    }
}

pub mod analytics {
    use super::*;

    /// Aggregation window selector.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub enum Period {
        #[default]
        #[serde(rename = "month")]
        Month,
        #[serde(rename = "6months")]
        SixMonths,
        #[serde(rename = "year")]
        Year,
    }

    impl Period {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Month => "month",
                Self::SixMonths => "6months",
                Self::Year => "year",
            }
        }
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PeriodQuery {
        pub period: Option<Period>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FinancialOverview {
        pub period: Period,
        pub income_minor: i64,
        pub expenses_minor: i64,
        pub savings_minor: i64,
        /// Sum of all account balances.
        pub net_worth_minor: i64,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CategorySpending {
        pub category: String,
        pub amount_minor: i64,
    }
}

pub mod budget {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BudgetGoals {
        pub monthly_income_minor: i64,
        pub debt_payments_minor: i64,
        pub savings_minor: i64,
        pub investments_minor: i64,
        pub discretionary_minor: i64,
    }

    /// How the monthly income relates to the allocated buckets.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(tag = "status", rename_all = "snake_case")]
    pub enum AllocationStatus {
        #[default]
        FullyAllocated,
        Unallocated { amount_minor: i64 },
        OverBudget { amount_minor: i64 },
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Allocation {
        pub total_allocated_minor: i64,
        pub remaining_minor: i64,
        #[serde(flatten)]
        pub status: AllocationStatus,
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BudgetGoalsView {
        #[serde(flatten)]
        pub goals: BudgetGoals,
        pub allocation: Allocation,
    }
}

pub mod account {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountNew {
        pub name: String,
        #[serde(rename = "type")]
        pub kind: String,
        #[serde(default)]
        pub balance_minor: i64,
        #[serde(default)]
        pub monthly_contribution_minor: i64,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AccountView {
        pub id: i64,
        pub name: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub balance_minor: i64,
        pub monthly_contribution_minor: i64,
    }
}

pub mod health {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
    }
}
