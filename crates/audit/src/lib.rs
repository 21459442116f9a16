//! Best-effort audit trail for stock operations.
//!
//! The ledger publishes one [`AuditEvent`] after each successful commit.
//! Delivery is fire-and-forget: a failed or dropped publish must never roll
//! back or delay the primary operation.

pub mod event;
pub mod in_memory;
pub mod sink;

pub use event::{AuditEntity, AuditEvent};
pub use in_memory::InMemoryAuditBus;
pub use sink::{AuditSink, NullSink, SinkError, Subscription};
