//! Demo data for a fresh install and for the offline dashboard.

use crate::{AccountNew, MoneyCents, Transaction, TransactionKind};

/// One week of activity, newest first, with ids `1..=7`.
pub fn sample_transactions() -> Vec<Transaction> {
    use TransactionKind::{Expense, Income};

    let rows: [(&str, &str, i64, TransactionKind, &str, Option<&str>, bool); 7] = [
        ("2025-07-29", "Salary Deposit", 260_000, Income, "Salary", Some("Bi-weekly paycheck"), true),
        ("2025-07-28", "Grocery Store", -8_550, Expense, "Groceries", None, false),
        ("2025-07-27", "Gas Station", -4_500, Expense, "Transportation", None, false),
        ("2025-07-26", "Restaurant", -6_780, Expense, "Dining Out", Some("Dinner with friends"), false),
        ("2025-07-25", "Netflix Subscription", -1_599, Expense, "Entertainment", None, true),
        ("2025-07-24", "Rent Payment", -120_000, Expense, "Housing", Some("Monthly rent"), true),
        ("2025-07-23", "Freelance Work", 50_000, Income, "Freelance", Some("Web design project"), false),
    ];

    rows.into_iter()
        .zip(1..)
        .map(
            |((date, description, cents, kind, category, notes, recurring), id)| Transaction {
                id,
                date: date.to_string(),
                description: description.to_string(),
                amount: MoneyCents::new(cents),
                kind,
                category: category.to_string(),
                notes: notes.map(ToString::to_string),
                recurring,
            },
        )
        .collect()
}

pub fn sample_accounts() -> Vec<AccountNew> {
    [
        ("TFSA", "Tax-Free Savings", 15_000, 500),
        ("RRSP", "Retirement Savings", 25_000, 800),
        ("FHSA", "First Home Savings", 8_000, 300),
        ("Emergency Fund", "Savings", 5_000, 200),
    ]
    .into_iter()
    .map(|(name, kind, balance, contribution)| AccountNew {
        name: name.to_string(),
        kind: kind.to_string(),
        balance: MoneyCents::dollars(balance),
        monthly_contribution: MoneyCents::dollars(contribution),
    })
    .collect()
}
