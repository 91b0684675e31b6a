//! In-memory transaction store.
//!
//! Records live in a map keyed by id; a separate vector keeps the display
//! order (newest first). Used by the offline dashboard and as the reference
//! for the database-backed [`Engine`](crate::Engine).

use std::collections::HashMap;

use crate::{EngineError, ResultEngine, Transaction, TransactionDraft};

#[derive(Clone, Debug, Default)]
pub struct Ledger {
    records: HashMap<i64, Transaction>,
    order: Vec<i64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from transactions already in display order.
    ///
    /// Later duplicates of an id are ignored.
    pub fn from_transactions<I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut ledger = Self::new();
        for tx in transactions {
            if ledger.records.contains_key(&tx.id) {
                continue;
            }
            ledger.order.push(tx.id);
            ledger.records.insert(tx.id, tx);
        }
        ledger
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates in display order, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Snapshot in display order.
    pub fn to_vec(&self) -> Vec<Transaction> {
        self.iter().cloned().collect()
    }

    /// `max(id) + 1`, or 1 when empty.
    pub fn next_id(&self) -> i64 {
        self.records.keys().max().map_or(1, |max| max + 1)
    }

    /// Validates `draft` and prepends the new transaction.
    ///
    /// On error the ledger is left unchanged.
    pub fn add(&mut self, draft: &TransactionDraft) -> ResultEngine<Transaction> {
        let tx = draft.validate()?.into_transaction(self.next_id());
        self.order.insert(0, tx.id);
        self.records.insert(tx.id, tx.clone());
        Ok(tx)
    }

    /// Replaces the record `id` in place, keeping its position.
    pub fn update(&mut self, id: i64, draft: &TransactionDraft) -> ResultEngine<Transaction> {
        let valid = draft.validate()?;
        let slot = self
            .records
            .get_mut(&id)
            .ok_or_else(|| EngineError::KeyNotFound(format!("transaction {id}")))?;
        *slot = valid.into_transaction(id);
        Ok(slot.clone())
    }

    /// Removes `id`. Returns whether a record was removed; absent ids are a
    /// no-op.
    pub fn delete(&mut self, id: i64) -> bool {
        if self.records.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|existing| *existing != id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoneyCents, TransactionKind};

    fn draft(description: &str, amount: &str, kind: TransactionKind) -> TransactionDraft {
        TransactionDraft {
            date: "2025-07-28".to_string(),
            description: description.to_string(),
            amount: amount.to_string(),
            kind,
            category: "Groceries".to_string(),
            notes: None,
            recurring: false,
        }
    }

    #[test]
    fn add_prepends_with_next_id() {
        let mut ledger = Ledger::new();
        let first = ledger.add(&draft("Rent", "1200", TransactionKind::Expense)).unwrap();
        let second = ledger.add(&draft("Salary", "5200", TransactionKind::Income)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        let ids: Vec<i64> = ledger.iter().map(|tx| tx.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn next_id_follows_max_not_len() {
        let mut ledger = Ledger::new();
        ledger.add(&draft("A", "1", TransactionKind::Expense)).unwrap();
        ledger.add(&draft("B", "1", TransactionKind::Expense)).unwrap();
        ledger.delete(1);
        assert_eq!(ledger.next_id(), 3);
    }

    #[test]
    fn invalid_draft_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new();
        ledger.add(&draft("Rent", "1200", TransactionKind::Expense)).unwrap();

        assert!(ledger.add(&draft("  ", "10", TransactionKind::Expense)).is_err());
        assert!(ledger.add(&draft("Coffee", "abc", TransactionKind::Expense)).is_err());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut ledger = Ledger::new();
        ledger.add(&draft("Gas", "45", TransactionKind::Expense)).unwrap();
        ledger.add(&draft("Coffee", "5", TransactionKind::Expense)).unwrap();

        let updated = ledger
            .update(1, &draft("Gas Station", "45", TransactionKind::Income))
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.amount, MoneyCents::dollars(45));
        let ids: Vec<i64> = ledger.iter().map(|tx| tx.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut ledger = Ledger::new();
        let err = ledger
            .update(9, &draft("Gas", "45", TransactionKind::Expense))
            .unwrap_err();
        assert!(matches!(err, EngineError::KeyNotFound(_)));
    }

    #[test]
    fn delete_absent_id_is_noop() {
        let mut ledger = Ledger::new();
        ledger.add(&draft("Gas", "45", TransactionKind::Expense)).unwrap();
        let before = ledger.to_vec();

        assert!(!ledger.delete(42));
        assert_eq!(ledger.to_vec(), before);
        assert!(ledger.delete(1));
        assert!(ledger.is_empty());
    }
}
