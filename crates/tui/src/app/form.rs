//! Editable forms: transaction entry and the budget goals editor.

use api_types::{
    budget::{BudgetGoals, BudgetGoalsView},
    transaction::{TransactionDraft, TransactionKind, TransactionView},
};
use chrono::NaiveDate;
use engine::{Bucket, DATE_FORMAT, EngineError, MoneyCents};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxField {
    #[default]
    Date,
    Description,
    Amount,
    Kind,
    Category,
    Notes,
    Recurring,
}

impl TxField {
    pub const ALL: [TxField; 7] = [
        TxField::Date,
        TxField::Description,
        TxField::Amount,
        TxField::Kind,
        TxField::Category,
        TxField::Notes,
        TxField::Recurring,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Kind => "Type",
            Self::Category => "Category",
            Self::Notes => "Notes",
            Self::Recurring => "Recurring",
        }
    }

    /// Toggle fields flip on any key instead of taking text.
    pub fn is_toggle(self) -> bool {
        matches!(self, Self::Kind | Self::Recurring)
    }
}

/// Cycles through `fields`, wrapping at both ends.
fn step<T: Copy + PartialEq>(fields: &[T], current: T, forward: bool) -> T {
    let len = fields.len();
    let index = fields.iter().position(|f| *f == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    fields[next]
}

/// Plain decimal text for a cent amount, without sign or grouping.
fn amount_text(cents: i64) -> String {
    let abs = cents.unsigned_abs();
    format!("{}.{:02}", abs / 100, abs % 100)
}

#[derive(Debug, Clone)]
pub struct TransactionForm {
    /// Id of the record being edited, `None` when adding.
    pub editing: Option<i64>,
    pub focus: TxField,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub category: String,
    pub notes: String,
    pub recurring: bool,
}

impl TransactionForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            editing: None,
            focus: TxField::default(),
            date: today.format(DATE_FORMAT).to_string(),
            description: String::new(),
            amount: String::new(),
            kind: TransactionKind::Expense,
            category: String::new(),
            notes: String::new(),
            recurring: false,
        }
    }

    pub fn edit(tx: &TransactionView) -> Self {
        Self {
            editing: Some(tx.id),
            focus: TxField::default(),
            date: tx.date.clone(),
            description: tx.description.clone(),
            amount: amount_text(tx.amount_minor),
            kind: tx.kind,
            category: tx.category.clone(),
            notes: tx.notes.clone().unwrap_or_default(),
            recurring: tx.recurring,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = step(&TxField::ALL, self.focus, true);
    }

    pub fn prev_field(&mut self) {
        self.focus = step(&TxField::ALL, self.focus, false);
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            TxField::Date => Some(&mut self.date),
            TxField::Description => Some(&mut self.description),
            TxField::Amount => Some(&mut self.amount),
            TxField::Category => Some(&mut self.category),
            TxField::Notes => Some(&mut self.notes),
            TxField::Kind | TxField::Recurring => None,
        }
    }

    pub fn input(&mut self, ch: char) {
        match self.focus {
            TxField::Kind => {
                self.kind = match self.kind {
                    TransactionKind::Income => TransactionKind::Expense,
                    TransactionKind::Expense => TransactionKind::Income,
                };
            }
            TxField::Recurring => self.recurring = !self.recurring,
            _ => {
                if let Some(text) = self.text_mut() {
                    text.push(ch);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    /// Display text of one field.
    pub fn value(&self, field: TxField) -> String {
        match field {
            TxField::Date => self.date.clone(),
            TxField::Description => self.description.clone(),
            TxField::Amount => self.amount.clone(),
            TxField::Kind => match self.kind {
                TransactionKind::Income => "Income".to_string(),
                TransactionKind::Expense => "Expense".to_string(),
            },
            TxField::Category => self.category.clone(),
            TxField::Notes => self.notes.clone(),
            TxField::Recurring => String::from(if self.recurring { "yes" } else { "no" }),
        }
    }

    pub fn draft(&self) -> TransactionDraft {
        let notes = self.notes.trim();
        TransactionDraft {
            date: self.date.clone(),
            description: self.description.clone(),
            amount: self.amount.clone(),
            kind: self.kind,
            category: self.category.clone(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            recurring: self.recurring,
        }
    }

    /// Blank descriptions and unparseable amounts keep the form open.
    pub fn is_submittable(&self) -> bool {
        engine::TransactionDraft::from(&self.draft())
            .validate()
            .is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalField {
    #[default]
    MonthlyIncome,
    DebtPayments,
    Savings,
    Investments,
    Discretionary,
}

impl GoalField {
    pub const ALL: [GoalField; 5] = [
        GoalField::MonthlyIncome,
        GoalField::DebtPayments,
        GoalField::Savings,
        GoalField::Investments,
        GoalField::Discretionary,
    ];

    /// Spending bucket edited by this field, `None` for the income.
    pub fn bucket(self) -> Option<Bucket> {
        match self {
            Self::MonthlyIncome => None,
            Self::DebtPayments => Some(Bucket::DebtPayments),
            Self::Savings => Some(Bucket::Savings),
            Self::Investments => Some(Bucket::Investments),
            Self::Discretionary => Some(Bucket::Discretionary),
        }
    }

    pub fn label(self) -> &'static str {
        self.bucket().map_or("Monthly income", Bucket::label)
    }

    /// Amount of this field in `goals`.
    pub fn amount(self, goals: &engine::BudgetGoals) -> MoneyCents {
        self.bucket()
            .map_or(goals.monthly_income, |bucket| goals.bucket(bucket))
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
pub struct GoalsForm {
    pub focus: GoalField,
    inputs: [String; 5],
}

impl GoalsForm {
    pub fn new(goals: &BudgetGoals) -> Self {
        let inputs = [
            goals.monthly_income_minor,
            goals.debt_payments_minor,
            goals.savings_minor,
            goals.investments_minor,
            goals.discretionary_minor,
        ]
        .map(amount_text);
        Self {
            focus: GoalField::default(),
            inputs,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = step(&GoalField::ALL, self.focus, true);
    }

    pub fn prev_field(&mut self) {
        self.focus = step(&GoalField::ALL, self.focus, false);
    }

    pub fn input(&mut self, ch: char) {
        if ch.is_ascii_digit() || matches!(ch, '.' | ',' | '$') {
            self.inputs[self.focus.index()].push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.inputs[self.focus.index()].pop();
    }

    pub fn value(&self, field: GoalField) -> &str {
        &self.inputs[field.index()]
    }

    fn amount(&self, field: GoalField) -> Option<MoneyCents> {
        self.value(field)
            .parse::<MoneyCents>()
            .ok()
            .filter(|amount| !amount.is_negative())
    }

    /// Goals when every field holds a valid non-negative amount.
    pub fn goals(&self) -> Option<BudgetGoals> {
        Some(BudgetGoals {
            monthly_income_minor: self.amount(GoalField::MonthlyIncome)?.cents(),
            debt_payments_minor: self.amount(GoalField::DebtPayments)?.cents(),
            savings_minor: self.amount(GoalField::Savings)?.cents(),
            investments_minor: self.amount(GoalField::Investments)?.cents(),
            discretionary_minor: self.amount(GoalField::Discretionary)?.cents(),
        })
    }

    /// What is typed so far; unparseable fields count as zero.
    pub fn entered(&self) -> engine::BudgetGoals {
        let amount = |field| self.amount(field).unwrap_or(MoneyCents::ZERO);
        engine::BudgetGoals {
            monthly_income: amount(GoalField::MonthlyIncome),
            debt_payments: amount(GoalField::DebtPayments),
            savings: amount(GoalField::Savings),
            investments: amount(GoalField::Investments),
            discretionary: amount(GoalField::Discretionary),
        }
    }

    /// Allocation of [`entered`](Self::entered); an error while the typed
    /// buckets overflow in total.
    pub fn preview(&self) -> Result<BudgetGoalsView, EngineError> {
        BudgetGoalsView::try_from(self.entered())
    }
}

#[cfg(test)]
mod tests {
    use api_types::budget::AllocationStatus;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 31).unwrap()
    }

    fn type_text(form: &mut TransactionForm, text: &str) {
        for ch in text.chars() {
            form.input(ch);
        }
    }

    #[test]
    fn new_form_defaults_to_today_expense() {
        let form = TransactionForm::new(today());
        assert_eq!(form.date, "2025-07-31");
        assert_eq!(form.kind, TransactionKind::Expense);
        assert!(!form.is_submittable());
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = TransactionForm::new(today());
        form.prev_field();
        assert_eq!(form.focus, TxField::Recurring);
        form.next_field();
        assert_eq!(form.focus, TxField::Date);
    }

    #[test]
    fn toggles_ignore_text() {
        let mut form = TransactionForm::new(today());
        form.focus = TxField::Kind;
        form.input('x');
        assert_eq!(form.kind, TransactionKind::Income);
        form.focus = TxField::Recurring;
        form.input(' ');
        assert!(form.recurring);
        form.backspace();
        assert!(form.recurring);
    }

    #[test]
    fn submittable_needs_description_and_amount() {
        let mut form = TransactionForm::new(today());
        form.focus = TxField::Description;
        type_text(&mut form, "Coffee");
        form.focus = TxField::Amount;
        type_text(&mut form, "abc");
        assert!(!form.is_submittable());

        form.amount.clear();
        type_text(&mut form, "4.50");
        assert!(form.is_submittable());
        assert_eq!(form.draft().notes, None);
    }

    #[test]
    fn edit_prefills_magnitude() {
        let tx = TransactionView {
            id: 3,
            date: "2025-07-27".to_string(),
            description: "Gas Station".to_string(),
            amount_minor: -4_505,
            kind: TransactionKind::Expense,
            category: "Transportation".to_string(),
            notes: Some("Fill-up".to_string()),
            recurring: false,
        };
        let form = TransactionForm::edit(&tx);
        assert_eq!(form.editing, Some(3));
        assert_eq!(form.amount, "45.05");
        assert_eq!(form.notes, "Fill-up");
    }

    #[test]
    fn goals_form_previews_while_typing() {
        let mut form = GoalsForm::new(&BudgetGoals {
            monthly_income_minor: 520_000,
            debt_payments_minor: 80_000,
            savings_minor: 100_000,
            investments_minor: 60_000,
            discretionary_minor: 280_000,
        });
        assert_eq!(
            form.preview().unwrap().allocation.status,
            AllocationStatus::FullyAllocated
        );

        form.backspace();
        form.backspace();
        form.backspace();
        form.backspace();
        form.backspace();
        form.backspace();
        form.backspace();
        assert_eq!(form.value(GoalField::MonthlyIncome), "");
        assert!(form.goals().is_none());
        assert_eq!(
            form.preview().unwrap().allocation.status,
            AllocationStatus::OverBudget {
                amount_minor: 520_000
            }
        );

        for ch in "6000a".chars() {
            form.input(ch);
        }
        assert_eq!(form.goals().unwrap().monthly_income_minor, 600_000);
        assert_eq!(
            form.preview().unwrap().allocation.status,
            AllocationStatus::Unallocated {
                amount_minor: 80_000
            }
        );
    }

    fn retype(form: &mut GoalsForm, field: GoalField, text: &str) {
        form.focus = field;
        while !form.value(field).is_empty() {
            form.backspace();
        }
        for ch in text.chars() {
            form.input(ch);
        }
    }

    #[test]
    fn huge_typed_buckets_give_an_error_preview() {
        let mut form = GoalsForm::new(&BudgetGoals::default());
        retype(&mut form, GoalField::DebtPayments, "90000000000000000");
        retype(&mut form, GoalField::Savings, "90000000000000000");

        assert_eq!(
            form.entered().debt_payments,
            MoneyCents::new(9_000_000_000_000_000_000)
        );
        assert!(matches!(form.preview(), Err(EngineError::InvalidAmount(_))));
        let typed = engine::BudgetGoals::from(&form.goals().unwrap());
        assert!(typed.validate().is_err());
    }

    #[test]
    fn field_labels_follow_buckets() {
        assert_eq!(GoalField::MonthlyIncome.label(), "Monthly income");
        assert_eq!(GoalField::Savings.label(), Bucket::Savings.label());
        let goals = engine::BudgetGoals::default();
        assert_eq!(GoalField::MonthlyIncome.amount(&goals), MoneyCents::dollars(5_200));
        assert_eq!(GoalField::Discretionary.amount(&goals), MoneyCents::dollars(2_800));
    }
}
