//! In-memory store collaborator for tests and development.
//!
//! A real deployment backs [`stocktile_ledger::ItemStore`] with a hosted
//! database whose per-row writes are atomic (ideally conditional, to close
//! the read-modify-write window in delta adjustments). This crate provides
//! the reference implementation the test suite runs against.

pub mod memory;

pub use memory::InMemoryInventoryStore;
