//! Window aggregation over transactions.
//!
//! All functions are pure: they take the transactions, a [`Window`] and the
//! caller's "today" and never touch storage.

use chrono::{Datelike, Months, NaiveDate};

use crate::{MoneyCents, ResultEngine, Transaction, TransactionKind, money::out_of_range};

/// Trailing range of dates covered by an overview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Window {
    /// From the first day of the current month.
    #[default]
    Month,
    /// From today minus six calendar months.
    SixMonths,
    /// From today minus one calendar year.
    Year,
}

impl Window {
    /// Inclusive start date of the window relative to `today`.
    ///
    /// Month arithmetic clamps to the last valid day (Aug 31 minus six months
    /// is Feb 28/29).
    pub fn start(self, today: NaiveDate) -> NaiveDate {
        let shifted = match self {
            Self::Month => today.with_day(1),
            Self::SixMonths => today.checked_sub_months(Months::new(6)),
            Self::Year => today.checked_sub_months(Months::new(12)),
        };
        shifted.unwrap_or(NaiveDate::MIN)
    }

    /// Whether the date of `tx` falls in the window. Malformed dates never do.
    pub fn contains(self, tx: &Transaction, today: NaiveDate) -> bool {
        tx.parsed_date()
            .is_some_and(|date| date >= self.start(today))
    }
}

/// Income, expenses and savings for one window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overview {
    pub income: MoneyCents,
    /// Magnitude of outflows (never negative).
    pub expenses: MoneyCents,
    /// `income - expenses`.
    pub savings: MoneyCents,
}

/// Total expense magnitude for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySpending {
    pub category: String,
    pub amount: MoneyCents,
}

/// Sums income and expenses of the transactions in `window`.
///
/// Income and expenses are split by sign, so `savings` always equals the sum
/// of the signed amounts in the window. A total that overflows is an
/// [`InvalidAmount`](crate::EngineError::InvalidAmount) error.
pub fn overview<'a, I>(transactions: I, window: Window, today: NaiveDate) -> ResultEngine<Overview>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut income = MoneyCents::ZERO;
    let mut expenses = MoneyCents::ZERO;
    for tx in transactions {
        if !window.contains(tx, today) {
            continue;
        }
        if tx.amount.is_positive() {
            income = income.checked_add(tx.amount).ok_or_else(out_of_range)?;
        } else if tx.amount.is_negative() {
            expenses = expenses.checked_sub(tx.amount).ok_or_else(out_of_range)?;
        }
    }
    Ok(Overview {
        income,
        expenses,
        savings: income.checked_sub(expenses).ok_or_else(out_of_range)?,
    })
}

/// Groups expense transactions in `window` by category.
///
/// Groups keep the order in which their category first appears in the input,
/// so the caller's ordering decides the output order (the database store
/// lists newest first). Groups summing to zero are dropped.
pub fn spending_by_category<'a, I>(
    transactions: I,
    window: Window,
    today: NaiveDate,
) -> ResultEngine<Vec<CategorySpending>>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut groups: Vec<CategorySpending> = Vec::new();
    for tx in transactions {
        if tx.kind != TransactionKind::Expense || !window.contains(tx, today) {
            continue;
        }
        let magnitude = tx.amount.abs();
        match groups.iter_mut().find(|g| g.category == tx.category) {
            Some(group) => {
                group.amount = group
                    .amount
                    .checked_add(magnitude)
                    .ok_or_else(out_of_range)?;
            }
            None => groups.push(CategorySpending {
                category: tx.category.clone(),
                amount: magnitude,
            }),
        }
    }
    groups.retain(|g| !g.amount.is_zero());
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use crate::EngineError;

    use super::*;

    fn tx(id: i64, date: &str, cents: i64, category: &str) -> Transaction {
        Transaction {
            id,
            date: date.to_string(),
            description: format!("tx {id}"),
            amount: MoneyCents::new(cents),
            kind: if cents >= 0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            },
            category: category.to_string(),
            notes: None,
            recurring: false,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Deterministic transaction lists: dates spread over eighteen months,
    /// amounts of both signs and zero.
    fn generated(len: usize, seed: u64, sign: Option<i64>) -> Vec<Transaction> {
        let mut state = seed;
        let mut next = move || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 33) as i64
        };
        (0..len)
            .map(|i| {
                let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
                    + chrono::Duration::days(next().rem_euclid(545));
                let magnitude = next().rem_euclid(500_000);
                let cents = match sign {
                    Some(sign) => sign * magnitude,
                    None => magnitude - 250_000,
                };
                let category = ["Groceries", "Housing", "Salary", "Dining"][i % 4];
                tx(i as i64 + 1, &day.format("%Y-%m-%d").to_string(), cents, category)
            })
            .collect()
    }

    fn signed_sum_in(txs: &[Transaction], window: Window, today: NaiveDate) -> MoneyCents {
        MoneyCents::checked_sum(
            txs.iter()
                .filter(|t| window.contains(t, today))
                .map(|t| t.amount),
        )
        .unwrap()
    }

    #[test]
    fn window_starts() {
        let today = date("2025-08-31");
        assert_eq!(Window::Month.start(today), date("2025-08-01"));
        assert_eq!(Window::SixMonths.start(today), date("2025-02-28"));
        assert_eq!(Window::Year.start(today), date("2024-08-31"));
    }

    #[test]
    fn savings_equals_signed_sum_in_window() {
        let today = date("2025-07-29");
        let txs = vec![
            tx(1, "2025-07-23", 520_000, "Salary"),
            tx(2, "2025-07-24", -8_550, "Groceries"),
            tx(3, "2025-07-25", -4_500, "Transportation"),
            tx(4, "2025-06-30", -99_900, "Housing"),
        ];
        let result = overview(&txs, Window::Month, today).unwrap();
        assert_eq!(result.income, MoneyCents::new(520_000));
        assert_eq!(result.expenses, MoneyCents::new(13_050));
        assert_eq!(result.savings, signed_sum_in(&txs, Window::Month, today));
    }

    #[test]
    fn savings_equals_signed_sum_for_any_list() {
        let today = date("2025-07-29");
        let mut lists = vec![
            Vec::new(),
            vec![tx(1, "2025-07-10", 0, "Other"), tx(2, "2025-07-11", 0, "Other")],
            generated(40, 7, Some(-1)),
            generated(40, 11, Some(1)),
        ];
        lists.extend((0..8).map(|seed| generated(60, seed, None)));

        for (n, txs) in lists.iter().enumerate() {
            for window in [Window::Month, Window::SixMonths, Window::Year] {
                let result = overview(txs, window, today).unwrap();
                assert_eq!(
                    result.savings,
                    signed_sum_in(txs, window, today),
                    "list {n}, {window:?}"
                );
                assert!(!result.income.is_negative());
                assert!(!result.expenses.is_negative());
            }
        }

        let expenses_only = overview(&lists[2], Window::Year, today).unwrap();
        assert_eq!(expenses_only.income, MoneyCents::ZERO);
        assert_eq!(
            expenses_only.savings,
            MoneyCents::ZERO.checked_sub(expenses_only.expenses).unwrap()
        );
        assert_eq!(overview(&lists[0], Window::Year, today).unwrap(), Overview::default());
        assert_eq!(overview(&lists[1], Window::Month, today).unwrap(), Overview::default());
    }

    #[test]
    fn overflowing_totals_are_errors() {
        let today = date("2025-07-29");
        let out_of_range = EngineError::InvalidAmount("total out of range".to_string());

        let incomes = vec![
            tx(1, "2025-07-10", 9_000_000_000_000_000_000, "Salary"),
            tx(2, "2025-07-11", 9_000_000_000_000_000_000, "Salary"),
        ];
        assert_eq!(overview(&incomes, Window::Month, today), Err(out_of_range));

        let expenses = vec![
            tx(1, "2025-07-10", -i64::MAX, "Housing"),
            tx(2, "2025-07-11", -1, "Housing"),
        ];
        assert!(overview(&expenses, Window::Month, today).is_err());
        assert!(spending_by_category(&expenses, Window::Month, today).is_err());
    }

    #[test]
    fn overflow_outside_window_is_ignored() {
        let today = date("2025-07-29");
        let txs = vec![
            tx(1, "2024-01-10", i64::MAX, "Salary"),
            tx(2, "2025-07-11", 100, "Salary"),
            tx(3, "2024-01-12", i64::MAX, "Salary"),
        ];
        assert_eq!(
            overview(&txs, Window::Month, today).unwrap().income,
            MoneyCents::new(100)
        );
    }

    #[test]
    fn boundary_date_is_included() {
        let today = date("2025-07-29");
        let txs = vec![tx(1, "2025-07-01", -1_000, "Groceries")];
        assert_eq!(
            overview(&txs, Window::Month, today).unwrap().expenses,
            MoneyCents::new(1_000)
        );
    }

    #[test]
    fn malformed_dates_are_skipped() {
        let today = date("2025-07-29");
        let txs = vec![
            tx(1, "not a date", -1_000, "Groceries"),
            tx(2, "2025-07-10", -2_000, "Groceries"),
        ];
        assert_eq!(
            overview(&txs, Window::Year, today).unwrap().expenses,
            MoneyCents::new(2_000)
        );
        assert_eq!(
            spending_by_category(&txs, Window::Year, today).unwrap(),
            vec![CategorySpending {
                category: "Groceries".to_string(),
                amount: MoneyCents::new(2_000)
            }]
        );
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let today = date("2025-07-29");
        let txs = vec![
            tx(1, "2025-07-29", -1_599, "Entertainment"),
            tx(2, "2025-07-28", -8_550, "Groceries"),
            tx(3, "2025-07-27", -500, "Entertainment"),
            tx(4, "2025-07-26", 80_000, "Freelance"),
        ];
        let groups = spending_by_category(&txs, Window::Month, today).unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Entertainment", "Groceries"]);
        assert_eq!(groups[0].amount, MoneyCents::new(2_099));
    }

    #[test]
    fn category_without_expenses_in_window_is_omitted() {
        let today = date("2025-07-29");
        let txs = vec![
            tx(1, "2025-01-10", -5_000, "Shopping"),
            tx(2, "2025-07-10", 0, "Other"),
            tx(3, "2025-07-11", -300, "Groceries"),
        ];
        let mut zero = txs[1].clone();
        zero.kind = TransactionKind::Expense;
        let txs = vec![txs[0].clone(), zero, txs[2].clone()];

        let groups = spending_by_category(&txs, Window::Month, today).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "Groceries");
    }
}
