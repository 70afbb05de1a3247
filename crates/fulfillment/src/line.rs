use serde::{Deserialize, Serialize};

use vireo_core::{ItemId, LocationId, Quantity};

/// Composite join key associating inventory detail rows with fulfillment lines.
///
/// The key is NOT unique: a single (item, location, quantity) triple may be
/// shared by many detail rows (split lots) and by several lines. Quantity
/// equality is numeric, never textual (see `vireo_core::Quantity`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub item: ItemId,
    pub location: LocationId,
    pub quantity: Quantity,
}

/// One line of the fulfillment record being saved, snapshotted for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FulfillmentLine {
    /// 0-based position within the record's item sublist; stable for the
    /// duration of the save event.
    pub line_index: usize,
    pub key: LineKey,
}

impl FulfillmentLine {
    pub fn new(line_index: usize, item: ItemId, location: LocationId, quantity: Quantity) -> Self {
        Self {
            line_index,
            key: LineKey {
                item,
                location,
                quantity,
            },
        }
    }
}

/// The host record's mutable line-item sublist, addressed by 0-based position.
///
/// Reads expose the join key; writes target only the two resolved output
/// columns. Reconciliation never adds or removes lines.
pub trait LineTable {
    fn line_count(&self) -> usize;

    /// Join key of the line at `index`, or `None` when the line has no item
    /// assigned (such lines are skipped).
    fn line_key(&self, index: usize) -> Option<LineKey>;

    fn set_expiration_dates(&mut self, index: usize, value: &str);

    fn set_lot_numbers(&mut self, index: usize, value: &str);
}

/// Snapshot every keyed line of a table for matching.
pub fn keyed_lines(table: &dyn LineTable) -> Vec<FulfillmentLine> {
    (0..table.line_count())
        .filter_map(|index| {
            table.line_key(index).map(|key| FulfillmentLine {
                line_index: index,
                key,
            })
        })
        .collect()
}
