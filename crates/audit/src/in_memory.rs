//! In-memory audit bus for tests/dev.

use std::sync::{Mutex, mpsc};

use crate::event::AuditEvent;
use crate::sink::{AuditSink, SinkError, Subscription};

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Best-effort fan-out
/// - At-least-once acceptable (subscribers must be idempotent)
#[derive(Debug, Default)]
pub struct InMemoryAuditBus {
    subscribers: Mutex<Vec<mpsc::Sender<AuditEvent>>>,
}

impl InMemoryAuditBus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuditSink for InMemoryAuditBus {
    fn publish(&self, event: AuditEvent) -> Result<(), SinkError> {
        let mut subs = self.subscribers.lock().map_err(|_| SinkError::Poisoned)?;

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(event.clone()).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();

        // If the lock is poisoned we still return a subscription; it just
        // won't receive anything until the process restarts.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::AuditEntity;

    fn sample_event(action: &str) -> AuditEvent {
        AuditEvent::new(action, AuditEntity::Item, None, serde_json::Value::Null)
    }

    #[test]
    fn every_subscriber_sees_every_event() {
        let bus = InMemoryAuditBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.publish(sample_event("item.created")).unwrap();

        assert_eq!(a.recv().unwrap().action, "item.created");
        assert_eq!(b.recv().unwrap().action, "item.created");
    }

    #[test]
    fn dropped_subscriber_does_not_fail_publish() {
        let bus = InMemoryAuditBus::new();
        drop(bus.subscribe());

        bus.publish(sample_event("item.deleted")).unwrap();

        let live = bus.subscribe();
        bus.publish(sample_event("item.updated")).unwrap();
        assert_eq!(live.recv().unwrap().action, "item.updated");
    }
}
