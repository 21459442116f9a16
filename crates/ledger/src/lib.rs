//! Stock ledger domain module.
//!
//! This crate owns the stock-adjustment invariants ("on-hand never goes
//! negative", "alert never exceeds max at write time") and the category
//! lifecycle rules, implemented as deterministic domain logic over pluggable
//! store collaborators (no IO, no HTTP, no storage of its own).

pub mod category;
pub mod item;
pub mod ledger;
pub mod store;

pub use category::{CategoryRecord, display_order};
pub use item::{
    AdjustOp, DEFAULT_UNIT, ItemRecord, ItemUpdate, NewItem, StockMovement, is_low_stock,
};
pub use ledger::StockLedger;
pub use store::{CategoryStore, ItemStore};
