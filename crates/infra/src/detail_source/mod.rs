//! Inventory detail retrieval: the query port and its resilience wrapper.
//!
//! The port (`InventoryDetailQuery`) can fail like any remote query. The
//! wrapper (`InventoryDetailFetcher`) cannot: every failure is converted into
//! an empty record set plus a diagnostic, because a lookup failure must never
//! block the fulfillment save. Callers decide whether to forward the
//! diagnostic to an observability sink.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryDetailQuery;
pub use postgres::PostgresDetailQuery;

use std::sync::Arc;

use thiserror::Error;

use vireo_core::TransactionId;
use vireo_fulfillment::InventoryDetailRecord;

/// Query port failure.
#[derive(Debug, Error)]
pub enum DetailQueryError {
    /// The underlying query could not be executed (connectivity, permission,
    /// malformed filter).
    #[error("detail query failed: {0}")]
    Execute(String),

    /// A row came back in a shape the adapter could not decode.
    #[error("detail row decode failed: {0}")]
    Decode(String),
}

/// Read-only query port against the external transaction store.
///
/// Implementations return every inventory detail row recorded against the
/// transaction that has an item assigned and a non-empty expiration date,
/// draining all pages the store produces. Row order carries no meaning for
/// callers beyond aggregation encounter order.
#[async_trait::async_trait]
pub trait InventoryDetailQuery: Send + Sync {
    async fn query_details(
        &self,
        transaction_id: &TransactionId,
    ) -> Result<Vec<InventoryDetailRecord>, DetailQueryError>;
}

#[async_trait::async_trait]
impl<Q> InventoryDetailQuery for Arc<Q>
where
    Q: InventoryDetailQuery + ?Sized,
{
    async fn query_details(
        &self,
        transaction_id: &TransactionId,
    ) -> Result<Vec<InventoryDetailRecord>, DetailQueryError> {
        (**self).query_details(transaction_id).await
    }
}

/// Diagnostic captured when a fetch degraded to an empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchDiagnostic {
    pub transaction_id: TransactionId,
    pub message: String,
}

/// Outcome of a detail fetch: the records plus an optional diagnostic.
///
/// By records alone, a failed lookup and "no rows matched" are
/// indistinguishable; the diagnostic is the only trace of the former.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub records: Vec<InventoryDetailRecord>,
    pub diagnostic: Option<FetchDiagnostic>,
}

/// Resilience wrapper around the query port.
#[derive(Debug, Clone)]
pub struct InventoryDetailFetcher<Q> {
    query: Q,
}

impl<Q: InventoryDetailQuery> InventoryDetailFetcher<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    /// Fetch all detail rows for `transaction_id`.
    ///
    /// Never fails. An empty record set with no diagnostic means no rows
    /// matched; with a diagnostic, the query itself failed.
    pub async fn fetch(&self, transaction_id: &TransactionId) -> FetchOutcome {
        match self.query.query_details(transaction_id).await {
            Ok(records) => FetchOutcome {
                records,
                diagnostic: None,
            },
            Err(e) => FetchOutcome {
                records: Vec::new(),
                diagnostic: Some(FetchDiagnostic {
                    transaction_id: transaction_id.clone(),
                    message: e.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vireo_core::{ItemId, LocationId, Quantity};

    fn test_transaction_id() -> TransactionId {
        TransactionId::new("TXN-1").unwrap()
    }

    fn test_record() -> InventoryDetailRecord {
        InventoryDetailRecord {
            item: ItemId::new("I1").unwrap(),
            location: LocationId::new("L1").unwrap(),
            quantity: Quantity::from(5),
            expiration_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            lot_number: Some("LOT1".to_string()),
        }
    }

    #[tokio::test]
    async fn fetch_passes_records_through() {
        let query = InMemoryDetailQuery::new();
        query.insert(test_transaction_id(), vec![test_record()]);

        let fetcher = InventoryDetailFetcher::new(query);
        let outcome = fetcher.fetch(&test_transaction_id()).await;

        assert_eq!(outcome.records, vec![test_record()]);
        assert!(outcome.diagnostic.is_none());
    }

    #[tokio::test]
    async fn fetch_on_unknown_transaction_is_empty_not_failed() {
        let fetcher = InventoryDetailFetcher::new(InMemoryDetailQuery::new());
        let outcome = fetcher.fetch(&test_transaction_id()).await;

        assert!(outcome.records.is_empty());
        assert!(outcome.diagnostic.is_none());
    }

    #[tokio::test]
    async fn fetch_converts_query_failure_into_diagnostic() {
        let query = InMemoryDetailQuery::new();
        query.insert(test_transaction_id(), vec![test_record()]);
        query.fail_with("connection refused");

        let fetcher = InventoryDetailFetcher::new(query);
        let outcome = fetcher.fetch(&test_transaction_id()).await;

        assert!(outcome.records.is_empty());
        let diagnostic = outcome.diagnostic.unwrap();
        assert_eq!(diagnostic.transaction_id, test_transaction_id());
        assert!(diagnostic.message.contains("connection refused"));
    }
}
