use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which kind of record an audit entry refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditEntity {
    Category,
    Item,
}

/// One audit trail entry.
///
/// Events are immutable facts: an `action` name (e.g. `"item.stock_adjusted"`),
/// the entity it happened to, free-form details, and business time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub action: String,
    pub entity: AuditEntity,
    pub entity_id: Option<Uuid>,
    pub details: serde_json::Value,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        entity: AuditEntity,
        entity_id: Option<Uuid>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            action: action.into(),
            entity,
            entity_id,
            details,
            occurred_at: Utc::now(),
        }
    }
}
