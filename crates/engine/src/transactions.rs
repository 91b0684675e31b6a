//! Transaction primitives.
//!
//! A `Transaction` is a single dated income or expense. Its sign always agrees
//! with its kind: income is `>= 0`, expense is `<= 0`.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};

use crate::{
    EngineError, MoneyCents, ResultEngine,
    categories::normalize_category_display,
    util::{normalize_optional_text, normalize_required_text},
};

/// Date format used for transaction dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Applies this kind's sign to a magnitude.
    #[must_use]
    pub fn signed(self, amount: MoneyCents) -> MoneyCents {
        match self {
            Self::Income => amount.abs(),
            Self::Expense => -amount.abs(),
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidDraft(format!(
                "invalid transaction type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    /// Calendar date as entered (`YYYY-MM-DD`). Kept verbatim even when it
    /// does not parse; aggregation skips such records.
    pub date: String,
    pub description: String,
    pub amount: MoneyCents,
    pub kind: TransactionKind,
    pub category: String,
    pub notes: Option<String>,
    pub recurring: bool,
}

impl Transaction {
    /// Parsed calendar date, `None` when the stored text is malformed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }
}

/// Raw transaction form as submitted by a user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub date: String,
    pub description: String,
    /// Unparsed amount; the sign is ignored and re-derived from `kind`.
    pub amount: String,
    pub kind: TransactionKind,
    pub category: String,
    pub notes: Option<String>,
    pub recurring: bool,
}

/// A draft that passed validation, ready to become a [`Transaction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidDraft {
    date: String,
    description: String,
    amount: MoneyCents,
    kind: TransactionKind,
    category: String,
    notes: Option<String>,
    recurring: bool,
}

const FALLBACK_CATEGORY: &str = "Other";

impl TransactionDraft {
    /// Validates the draft and normalizes the amount sign by kind.
    ///
    /// Fails when the description is blank or the amount is not a finite
    /// decimal with at most two fractional digits.
    pub fn validate(&self) -> ResultEngine<ValidDraft> {
        let description = normalize_required_text(&self.description, "description")
            .map_err(|_| EngineError::InvalidDraft("description must not be empty".to_string()))?;
        let magnitude: MoneyCents = self
            .amount
            .parse()
            .map_err(|err: EngineError| EngineError::InvalidDraft(err.to_string()))?;
        let category = normalize_category_display(&self.category)
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());

        Ok(ValidDraft {
            date: self.date.trim().to_string(),
            description,
            amount: self.kind.signed(magnitude),
            kind: self.kind,
            category,
            notes: normalize_optional_text(self.notes.as_deref()),
            recurring: self.recurring,
        })
    }
}

impl ValidDraft {
    pub fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            date: self.date,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            notes: self.notes,
            recurring: self.recurring,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub date: String,
    pub description: String,
    pub amount_minor: i64,
    pub kind: String,
    pub category: String,
    pub notes: Option<String>,
    pub recurring: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            date: value.date,
            description: value.description,
            amount: MoneyCents::new(value.amount_minor),
            kind: TransactionKind::try_from(value.kind.as_str())?,
            category: value.category,
            notes: value.notes,
            recurring: value.recurring,
        })
    }
}

impl ActiveModel {
    /// Full-record active model for insert (both timestamps set to `now`).
    pub(crate) fn new_record(tx: &Transaction, now: DateTime<Utc>) -> Self {
        let mut model = Self::replacing(tx, now);
        model.created_at = ActiveValue::Set(now);
        model
    }

    /// Active model that replaces every user-editable column of `tx`.
    pub(crate) fn replacing(tx: &Transaction, now: DateTime<Utc>) -> Self {
        Self {
            id: ActiveValue::Set(tx.id),
            date: ActiveValue::Set(tx.date.clone()),
            description: ActiveValue::Set(tx.description.clone()),
            amount_minor: ActiveValue::Set(tx.amount.cents()),
            kind: ActiveValue::Set(tx.kind.as_str().to_string()),
            category: ActiveValue::Set(tx.category.clone()),
            notes: ActiveValue::Set(tx.notes.clone()),
            recurring: ActiveValue::Set(tx.recurring),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(now),
        }
    }
}
