use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vireo_core::{ItemId, LocationId, Quantity};

use crate::line::LineKey;

/// One row of lot/serial inventory detail recorded against a transaction.
///
/// A read-only snapshot, fetched fresh per save event and discarded after the
/// event completes. Several records may share an identical (item, location,
/// quantity) triple — split lots are expected and must be preserved, never
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryDetailRecord {
    pub item: ItemId,
    pub location: LocationId,
    pub quantity: Quantity,
    /// Absent when the lot carries no expiration; such rows contribute no
    /// segment to reconciliation output.
    pub expiration_date: Option<NaiveDate>,
    /// Lot/serial display string. A row with an expiration date but no lot
    /// number still occupies a position in the lot output.
    pub lot_number: Option<String>,
}

impl InventoryDetailRecord {
    pub fn key(&self) -> LineKey {
        LineKey {
            item: self.item.clone(),
            location: self.location.clone(),
            quantity: self.quantity,
        }
    }
}
