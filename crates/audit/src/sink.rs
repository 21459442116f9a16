//! Audit publishing/subscription abstraction (mechanics only).
//!
//! A sink is the transport seam between the ledger and whatever consumes the
//! audit trail (a log table writer, a test assertion, nothing at all). The
//! contract is intentionally weak:
//!
//! - **Best-effort**: delivery may be dropped; publishers must not depend on it.
//! - **At-least-once acceptable**: consumers must tolerate duplicates.
//! - **No persistence**: the sink distributes events, it does not store them.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crate::event::AuditEvent;

/// Publish-side failure. Publishers log and move on; they never propagate this
/// into the primary operation's result.
#[derive(Debug)]
pub enum SinkError {
    /// Internal lock poisoning; the bus is unusable until restart.
    Poisoned,
}

/// A subscription to the audit stream.
///
/// Each subscription gets a copy of every event published after it was opened
/// (broadcast semantics). Designed for single-threaded consumption.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<AuditEvent>,
}

impl Subscription {
    pub fn new(receiver: Receiver<AuditEvent>) -> Self {
        Self { receiver }
    }

    /// Block until the next event is available.
    pub fn recv(&self) -> Result<AuditEvent, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event without blocking.
    pub fn try_recv(&self) -> Result<AuditEvent, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for an event.
    pub fn recv_timeout(
        &self,
        timeout: Duration,
    ) -> Result<AuditEvent, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Audit event sink (pub/sub abstraction).
pub trait AuditSink: Send + Sync {
    fn publish(&self, event: AuditEvent) -> Result<(), SinkError>;

    fn subscribe(&self) -> Subscription;
}

impl<S> AuditSink for Arc<S>
where
    S: AuditSink + ?Sized,
{
    fn publish(&self, event: AuditEvent) -> Result<(), SinkError> {
        (**self).publish(event)
    }

    fn subscribe(&self) -> Subscription {
        (**self).subscribe()
    }
}

/// Sink that drops every event. Useful when no audit trail is wired up.
#[derive(Debug, Default)]
pub struct NullSink;

impl AuditSink for NullSink {
    fn publish(&self, _event: AuditEvent) -> Result<(), SinkError> {
        Ok(())
    }

    fn subscribe(&self) -> Subscription {
        let (_tx, rx) = std::sync::mpsc::channel();
        Subscription::new(rx)
    }
}
