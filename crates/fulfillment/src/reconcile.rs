//! Line reconciliation: match inventory detail rows to fulfillment lines by
//! composite key and aggregate the matches into delimited output strings.

use std::collections::BTreeMap;

use crate::detail::InventoryDetailRecord;
use crate::line::FulfillmentLine;

/// Delimiter between aggregated segments.
const SEGMENT_SEPARATOR: &str = ", ";

/// Date format used for the expiration output column.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolved output values for one fulfillment line.
///
/// Both fields are parallel `", "`-joined lists with no trailing delimiter:
/// segment *i* of `expiration_dates` belongs to the same detail row as
/// segment *i* of `lot_numbers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResolution {
    pub expiration_dates: String,
    pub lot_numbers: String,
}

/// Match each line against the detail rows by (item, location, quantity) and
/// aggregate every match that carries an expiration date.
///
/// Pure and idempotent: no state is held across invocations, and identical
/// inputs always produce identical output. The host may fire the save event
/// on every edit, so re-running must be harmless.
///
/// A line may match zero, one, or many detail rows; matches are aggregated in
/// the iteration order of `details`. Lines with no contributing row are
/// absent from the returned map, so callers leave their output columns
/// untouched and any prior manually-entered value survives. Detail rows
/// without an expiration date contribute no segment to either list and do
/// not shift the alignment of rows that do; a row with an expiration date
/// but no lot number contributes an empty lot segment as a positional
/// placeholder.
pub fn reconcile(
    lines: &[FulfillmentLine],
    details: &[InventoryDetailRecord],
) -> BTreeMap<usize, LineResolution> {
    let mut resolutions = BTreeMap::new();

    for line in lines {
        let mut expiration_dates: Vec<String> = Vec::new();
        let mut lot_numbers: Vec<String> = Vec::new();

        for detail in details.iter().filter(|d| d.key() == line.key) {
            let Some(date) = detail.expiration_date else {
                continue;
            };
            expiration_dates.push(date.format(DATE_FORMAT).to_string());
            lot_numbers.push(detail.lot_number.clone().unwrap_or_default());
        }

        // No contributing row: never overwrite the output columns, not even
        // with an empty string.
        if expiration_dates.is_empty() {
            continue;
        }

        resolutions.insert(
            line.line_index,
            LineResolution {
                expiration_dates: expiration_dates.join(SEGMENT_SEPARATOR),
                lot_numbers: lot_numbers.join(SEGMENT_SEPARATOR),
            },
        );
    }

    resolutions
}
