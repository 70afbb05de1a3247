//! Save-event hook: fetch inventory detail, reconcile, write back.

use tracing::{debug, info, warn};

use vireo_core::TransactionId;
use vireo_fulfillment::{keyed_lines, reconcile, LineTable, UserEventType};

use crate::detail_source::{FetchDiagnostic, InventoryDetailFetcher, InventoryDetailQuery};

/// Summary of one hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    /// Number of lines whose output columns were written.
    pub lines_resolved: usize,
    /// Present when the detail fetch degraded to an empty result.
    pub fetch_diagnostic: Option<FetchDiagnostic>,
    /// True when the event type ruled the whole run out (delete).
    pub skipped: bool,
}

/// Orchestrates lot/expiration resolution for one fulfillment save event.
///
/// Best effort: the hook never fails the save. A fetch failure degrades to
/// "no data", leaving the output columns with whatever they held before, and
/// is reported through the outcome and the log rather than to the end user.
pub struct FulfillmentSaveHook<Q> {
    fetcher: InventoryDetailFetcher<Q>,
}

impl<Q: InventoryDetailQuery> FulfillmentSaveHook<Q> {
    pub fn new(query: Q) -> Self {
        Self {
            fetcher: InventoryDetailFetcher::new(query),
        }
    }

    /// Run the fetch → reconcile → write-back sequence for one save event.
    ///
    /// Delete events return immediately without touching the store or the
    /// lines. Lines without an item assigned are skipped; resolved lines get
    /// both output columns written, unresolved lines keep their prior values.
    pub async fn apply(
        &self,
        event: UserEventType,
        transaction_id: &TransactionId,
        lines: &mut dyn LineTable,
    ) -> HookOutcome {
        if !event.triggers_resolution() {
            debug!(%transaction_id, ?event, "skipping lot/expiration resolution");
            return HookOutcome {
                lines_resolved: 0,
                fetch_diagnostic: None,
                skipped: true,
            };
        }

        let outcome = self.fetcher.fetch(transaction_id).await;
        if let Some(diagnostic) = &outcome.diagnostic {
            warn!(
                %transaction_id,
                message = %diagnostic.message,
                "inventory detail fetch degraded to empty result"
            );
        }

        let snapshot = keyed_lines(&*lines);
        let resolutions = reconcile(&snapshot, &outcome.records);

        for (line_index, resolution) in &resolutions {
            lines.set_expiration_dates(*line_index, &resolution.expiration_dates);
            lines.set_lot_numbers(*line_index, &resolution.lot_numbers);
        }

        info!(
            %transaction_id,
            lines_resolved = resolutions.len(),
            "lot/expiration resolution complete"
        );

        HookOutcome {
            lines_resolved: resolutions.len(),
            fetch_diagnostic: outcome.diagnostic,
            skipped: false,
        }
    }
}
