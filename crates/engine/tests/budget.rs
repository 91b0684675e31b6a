use sea_orm::Database;

use engine::{
    AccountNew, AllocationStatus, BudgetGoals, DEFAULT_CATEGORIES, Engine, EngineError,
    MoneyCents, TransactionDraft, TransactionKind,
};
use migration::MigratorTrait;

async fn engine() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

#[tokio::test]
async fn goals_default_until_saved() {
    let engine = engine().await;
    let goals = engine.budget_goals().await.unwrap();
    assert_eq!(goals, BudgetGoals::default());
    assert_eq!(goals.allocation().unwrap().status, AllocationStatus::FullyAllocated);
}

#[tokio::test]
async fn latest_saved_goals_win() {
    let engine = engine().await;
    let first = BudgetGoals {
        monthly_income: MoneyCents::dollars(6_000),
        ..BudgetGoals::default()
    };
    let second = BudgetGoals {
        discretionary: MoneyCents::dollars(2_000),
        ..BudgetGoals::default()
    };
    engine.save_budget_goals(&first).await.unwrap();
    engine.save_budget_goals(&second).await.unwrap();

    let current = engine.budget_goals().await.unwrap();
    assert_eq!(current, second);
    assert_eq!(
        current.allocation().unwrap().status,
        AllocationStatus::Unallocated(MoneyCents::dollars(800))
    );
}

#[tokio::test]
async fn negative_goals_are_rejected() {
    let engine = engine().await;
    let goals = BudgetGoals {
        savings: MoneyCents::dollars(-1),
        ..BudgetGoals::default()
    };
    let err = engine.save_budget_goals(&goals).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
    assert_eq!(engine.budget_goals().await.unwrap(), BudgetGoals::default());
}

#[tokio::test]
async fn goals_whose_total_overflows_are_not_saved() {
    let engine = engine().await;
    let goals = BudgetGoals {
        debt_payments: MoneyCents::new(i64::MAX),
        savings: MoneyCents::new(1),
        ..BudgetGoals::default()
    };
    let err = engine.save_budget_goals(&goals).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidAmount("total out of range".to_string())
    );
    assert_eq!(engine.budget_goals().await.unwrap(), BudgetGoals::default());
}

#[tokio::test]
async fn accounts_are_listed_by_name() {
    let engine = engine().await;
    for (name, balance) in [("RRSP", 25_000), ("Emergency Fund", 5_000), ("TFSA", 15_000)] {
        engine
            .new_account(&AccountNew {
                name: name.to_string(),
                kind: "Savings".to_string(),
                balance: MoneyCents::dollars(balance),
                monthly_contribution: MoneyCents::dollars(100),
            })
            .await
            .unwrap();
    }

    let names: Vec<String> = engine
        .list_accounts()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Emergency Fund", "RRSP", "TFSA"]);
}

#[tokio::test]
async fn account_without_name_is_rejected() {
    let engine = engine().await;
    let err = engine
        .new_account(&AccountNew {
            name: " ".to_string(),
            kind: "Savings".to_string(),
            ..AccountNew::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidName(_)));
    assert!(engine.list_accounts().await.unwrap().is_empty());
}

#[tokio::test]
async fn categories_merge_used_with_defaults() {
    let engine = engine().await;
    for category in ["Pets", "groceries"] {
        engine
            .add_transaction(&TransactionDraft {
                date: "2025-07-28".to_string(),
                description: "Shop".to_string(),
                amount: "12".to_string(),
                kind: TransactionKind::Expense,
                category: category.to_string(),
                notes: None,
                recurring: false,
            })
            .await
            .unwrap();
    }

    let categories = engine.categories().await.unwrap();
    assert_eq!(categories.len(), DEFAULT_CATEGORIES.len() + 1);
    assert!(categories.contains(&"Pets".to_string()));
    assert!(categories.contains(&"groceries".to_string()));
    assert!(!categories.contains(&"Groceries".to_string()));
}
