//! Fulfillment domain module.
//!
//! This crate contains the business rules for reconciling lot/serial
//! inventory detail against item-fulfillment lines, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod detail;
pub mod event;
pub mod line;
pub mod reconcile;

pub use detail::InventoryDetailRecord;
pub use event::UserEventType;
pub use line::{keyed_lines, FulfillmentLine, LineKey, LineTable};
pub use reconcile::{reconcile, LineResolution};
