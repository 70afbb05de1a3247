//! Postgres-backed detail query implementation.
//!
//! Reads the `transaction_inventory_detail` table, which mirrors the host
//! platform's joined inventory-detail sub-records: one row per lot/serial
//! assignment on a transaction line, distinct from the top-level transaction
//! fields.

use std::future::Future;

use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::{debug, instrument};

use vireo_core::{ItemId, LocationId, Quantity, TransactionId};
use vireo_fulfillment::InventoryDetailRecord;

use super::{DetailQueryError, InventoryDetailQuery};

/// Default page size when draining detail rows.
const DEFAULT_PAGE_SIZE: i64 = 500;

const SELECT_DETAIL_PAGE: &str = r#"
SELECT item_id, location_id, quantity::text AS quantity, lot_number, expiration_date
FROM transaction_inventory_detail
WHERE transaction_id = $1
  AND item_id IS NOT NULL
  AND expiration_date IS NOT NULL
ORDER BY id
LIMIT $2 OFFSET $3
"#;

/// Postgres-backed implementation of the detail query port.
///
/// Quantity is selected as text and normalized through `Quantity::parse`, so
/// the column's numeric formatting never leaks into key comparison. The item
/// and expiration filters run in SQL, matching the port contract.
#[derive(Debug, Clone)]
pub struct PostgresDetailQuery {
    pool: PgPool,
    page_size: i64,
}

impl PostgresDetailQuery {
    pub fn new(pool: PgPool) -> Self {
        Self::with_page_size(pool, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(pool: PgPool, page_size: i64) -> Self {
        Self {
            pool,
            page_size: page_size.max(1),
        }
    }

    fn decode_row(row: &PgRow) -> Result<InventoryDetailRecord, DetailQueryError> {
        let item: String = row
            .try_get("item_id")
            .map_err(|e| DetailQueryError::Decode(e.to_string()))?;
        let location: String = row
            .try_get("location_id")
            .map_err(|e| DetailQueryError::Decode(e.to_string()))?;
        let quantity_text: String = row
            .try_get("quantity")
            .map_err(|e| DetailQueryError::Decode(e.to_string()))?;
        let expiration_date: Option<NaiveDate> = row
            .try_get("expiration_date")
            .map_err(|e| DetailQueryError::Decode(e.to_string()))?;
        let lot_number: Option<String> = row
            .try_get("lot_number")
            .map_err(|e| DetailQueryError::Decode(e.to_string()))?;

        Ok(InventoryDetailRecord {
            item: ItemId::new(item).map_err(|e| DetailQueryError::Decode(e.to_string()))?,
            location: LocationId::new(location)
                .map_err(|e| DetailQueryError::Decode(e.to_string()))?,
            quantity: Quantity::parse(&quantity_text)
                .map_err(|e| DetailQueryError::Decode(e.to_string()))?,
            expiration_date,
            lot_number,
        })
    }
}

/// Drain every page from `fetch_page`; the store caps individual result sets
/// but the port must return the full set. A page shorter than `page_size`
/// ends the drain.
async fn drain_pages<F, Fut>(
    page_size: i64,
    mut fetch_page: F,
) -> Result<Vec<InventoryDetailRecord>, DetailQueryError>
where
    F: FnMut(i64) -> Fut,
    Fut: Future<Output = Result<Vec<InventoryDetailRecord>, DetailQueryError>>,
{
    let mut records = Vec::new();
    let mut offset: i64 = 0;

    loop {
        let page = fetch_page(offset).await?;
        let page_len = page.len() as i64;
        records.extend(page);

        if page_len < page_size {
            break;
        }
        offset += page_size;
    }

    Ok(records)
}

#[async_trait::async_trait]
impl InventoryDetailQuery for PostgresDetailQuery {
    #[instrument(skip(self), fields(transaction_id = %transaction_id))]
    async fn query_details(
        &self,
        transaction_id: &TransactionId,
    ) -> Result<Vec<InventoryDetailRecord>, DetailQueryError> {
        let records = drain_pages(self.page_size, |offset| {
            let pool = self.pool.clone();
            async move {
                let rows = sqlx::query(SELECT_DETAIL_PAGE)
                    .bind(transaction_id.as_str())
                    .bind(self.page_size)
                    .bind(offset)
                    .fetch_all(&pool)
                    .await
                    .map_err(|e| DetailQueryError::Execute(e.to_string()))?;

                rows.iter().map(Self::decode_row).collect()
            }
        })
        .await?;

        debug!(count = records.len(), "drained inventory detail rows");
        Ok(records)
    }
}
