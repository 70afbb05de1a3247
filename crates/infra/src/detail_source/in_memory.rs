//! In-memory detail query for tests and dev.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use vireo_core::TransactionId;
use vireo_fulfillment::InventoryDetailRecord;

use super::{DetailQueryError, InventoryDetailQuery};

/// In-memory query implementation keyed by transaction id.
///
/// Honors the port contract: rows without an expiration date are filtered
/// out at query time, as the production adapter filters them in SQL.
/// Supports injected failure so callers can exercise the degraded path.
/// Lock poisoning is recovered rather than swallowed — a silently-dropped
/// insert would make a failing caller look like a clean empty result.
#[derive(Debug, Default)]
pub struct InMemoryDetailQuery {
    inner: RwLock<HashMap<TransactionId, Vec<InventoryDetailRecord>>>,
    fail_with: RwLock<Option<String>>,
}

impl InMemoryDetailQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record detail rows against a transaction; repeated calls append.
    pub fn insert(&self, transaction_id: TransactionId, records: Vec<InventoryDetailRecord>) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.entry(transaction_id).or_default().extend(records);
    }

    /// Make every subsequent query fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        let mut slot = self.fail_with.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(message.into());
    }
}

#[async_trait::async_trait]
impl InventoryDetailQuery for InMemoryDetailQuery {
    async fn query_details(
        &self,
        transaction_id: &TransactionId,
    ) -> Result<Vec<InventoryDetailRecord>, DetailQueryError> {
        let slot = self.fail_with.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(message) = slot.as_ref() {
            return Err(DetailQueryError::Execute(message.clone()));
        }
        drop(slot);

        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map
            .get(transaction_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.expiration_date.is_some())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vireo_core::{ItemId, LocationId, Quantity};

    fn test_record(lot: &str) -> InventoryDetailRecord {
        InventoryDetailRecord {
            item: ItemId::new("I1").unwrap(),
            location: LocationId::new("L1").unwrap(),
            quantity: Quantity::from(1),
            expiration_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            lot_number: Some(lot.to_string()),
        }
    }

    #[tokio::test]
    async fn repeated_inserts_append_and_preserve_order() {
        let query = InMemoryDetailQuery::new();
        let txn = TransactionId::new("TXN-1").unwrap();
        query.insert(txn.clone(), vec![test_record("LOT1")]);
        query.insert(txn.clone(), vec![test_record("LOT2")]);

        let records = query.query_details(&txn).await.unwrap();
        let lots: Vec<_> = records.iter().filter_map(|r| r.lot_number.as_deref()).collect();
        assert_eq!(lots, vec!["LOT1", "LOT2"]);
    }

    #[tokio::test]
    async fn queries_are_scoped_to_the_transaction() {
        let query = InMemoryDetailQuery::new();
        query.insert(TransactionId::new("TXN-1").unwrap(), vec![test_record("LOT1")]);

        let other = TransactionId::new("TXN-2").unwrap();
        assert!(query.query_details(&other).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn expirationless_rows_are_filtered_like_the_production_adapter() {
        let query = InMemoryDetailQuery::new();
        let txn = TransactionId::new("TXN-1").unwrap();
        let undated = InventoryDetailRecord {
            expiration_date: None,
            ..test_record("UNDATED")
        };
        query.insert(txn.clone(), vec![test_record("LOT1"), undated]);

        let records = query.query_details(&txn).await.unwrap();
        let lots: Vec<_> = records.iter().filter_map(|r| r.lot_number.as_deref()).collect();
        assert_eq!(lots, vec!["LOT1"]);
    }

    #[tokio::test]
    async fn inserts_survive_a_poisoned_lock() {
        let query = InMemoryDetailQuery::new();
        let txn = TransactionId::new("TXN-1").unwrap();

        // Poison the store lock the way a panicking test thread would.
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = query.inner.write().unwrap();
            panic!("poison the store lock");
        }));

        query.insert(txn.clone(), vec![test_record("LOT1")]);
        assert_eq!(query.query_details(&txn).await.unwrap().len(), 1);
    }
}
