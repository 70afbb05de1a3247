//! Infrastructure adapters and orchestration for fulfillment lot resolution.
//!
//! Domain crates stay pure; this crate owns the query port against the
//! external transaction store, its Postgres and in-memory implementations,
//! and the save hook that wires fetch → reconcile → write-back for one save
//! event.

pub mod detail_source;
pub mod hook;
pub mod line_table;

pub use detail_source::{
    DetailQueryError, FetchDiagnostic, FetchOutcome, InMemoryDetailQuery, InventoryDetailFetcher,
    InventoryDetailQuery, PostgresDetailQuery,
};
pub use hook::{FulfillmentSaveHook, HookOutcome};
pub use line_table::InMemoryLineTable;
