//! The stock ledger service: all item/category mutations go through here.

use serde_json::json;
use tracing::{debug, warn};

use stocktile_audit::{AuditEntity, AuditEvent, AuditSink};
use stocktile_core::{CategoryId, DomainError, DomainResult, ItemId};

use crate::category::CategoryRecord;
use crate::item::{AdjustOp, DEFAULT_UNIT, ItemRecord, ItemUpdate, NewItem, StockMovement, optional_qty};
use crate::store::{CategoryStore, ItemStore};

/// Stock ledger over explicit store and audit collaborators.
///
/// Owns two write-time invariants: `on_hand >= 0` (always) and
/// `alert_level <= max_capacity` (checked at create/update, deliberately not
/// re-checked by delta adjustments — lowering capacity after the fact can
/// leave `alert_level > max_capacity` until the next absolute update).
///
/// Every failure is a typed [`DomainError`] and leaves state untouched; every
/// success commits the single affected row and then emits one audit event,
/// best-effort.
pub struct StockLedger<S, C, A> {
    items: S,
    categories: C,
    audit: A,
}

impl<S, C, A> StockLedger<S, C, A>
where
    S: ItemStore,
    C: CategoryStore,
    A: AuditSink,
{
    pub fn new(items: S, categories: C, audit: A) -> Self {
        Self {
            items,
            categories,
            audit,
        }
    }

    // --- item operations ---

    pub fn create_item(&self, category_id: CategoryId, new: NewItem) -> DomainResult<ItemRecord> {
        let name = require_name(&new.name, "item name required")?;
        let unit = match new.unit.as_deref().map(str::trim) {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => DEFAULT_UNIT.to_string(),
        };
        let max_capacity = optional_qty(new.max_capacity);
        let alert_level = optional_qty(new.alert_level);
        ensure_alert_within_max(alert_level, max_capacity)?;

        // Reject creation against a missing category up front instead of
        // relying on the store's referential rules.
        self.categories.get(category_id)?;

        let record = ItemRecord {
            id: ItemId::new(),
            category_id,
            name,
            unit,
            on_hand: new.initial_qty.max(0),
            max_capacity,
            alert_level,
        };
        self.items.put(&record)?;

        debug!(item_id = %record.id, name = %record.name, "item created");
        self.record_audit(AuditEvent::new(
            "item.created",
            AuditEntity::Item,
            Some(*record.id.as_uuid()),
            json!({ "name": record.name, "on_hand": record.on_hand }),
        ));
        Ok(record)
    }

    /// Idempotent full replace of an item's editable fields.
    ///
    /// Validation order: name, then alert-vs-max; `on_hand` is floored at
    /// zero rather than rejected. Nothing persists unless everything passes.
    pub fn apply_absolute_update(
        &self,
        item_id: ItemId,
        update: ItemUpdate,
    ) -> DomainResult<ItemRecord> {
        let name = require_name(&update.name, "item name required")?;
        let max_capacity = optional_qty(update.max_capacity);
        let alert_level = optional_qty(update.alert_level);
        ensure_alert_within_max(alert_level, max_capacity)?;

        let current = self.items.get(item_id)?;
        let record = ItemRecord {
            id: current.id,
            category_id: current.category_id,
            name,
            unit: update.unit.trim().to_string(),
            on_hand: update.on_hand.max(0),
            max_capacity,
            alert_level,
        };
        self.items.put(&record)?;

        debug!(item_id = %record.id, "item updated");
        self.record_audit(AuditEvent::new(
            "item.updated",
            AuditEntity::Item,
            Some(*record.id.as_uuid()),
            json!({ "name": record.name, "on_hand": record.on_hand }),
        ));
        Ok(record)
    }

    /// Apply a signed delta to an item's on-hand quantity.
    ///
    /// Rejected whole (no partial application) when the result would go
    /// negative. The read-modify-write here is the only racy sequence in the
    /// ledger; see the note in [`crate::store`].
    pub fn apply_delta(&self, item_id: ItemId, delta: i64) -> DomainResult<StockMovement> {
        if delta == 0 {
            return Err(DomainError::validation("adjustment quantity must be at least 1"));
        }

        let mut current = self.items.get(item_id)?;
        let previous = current.on_hand;
        let next = previous + delta;
        if next < 0 {
            return Err(DomainError::insufficient_stock(previous, delta.abs()));
        }

        current.on_hand = next;
        self.items.put(&current)?;

        debug!(item_id = %item_id, previous, next, delta, "stock adjusted");
        self.record_audit(AuditEvent::new(
            "item.stock_adjusted",
            AuditEntity::Item,
            Some(*item_id.as_uuid()),
            json!({ "previous": previous, "next": next, "delta": delta }),
        ));
        Ok(StockMovement { previous, next, delta })
    }

    /// Request-layer form of [`Self::apply_delta`]: an op (`+`/`-`) plus a
    /// magnitude, which must be a positive integer.
    pub fn adjust(&self, item_id: ItemId, op: AdjustOp, qty: i64) -> DomainResult<StockMovement> {
        if qty < 1 {
            return Err(DomainError::validation("adjustment quantity must be at least 1"));
        }
        self.apply_delta(item_id, op.signed(qty))
    }

    pub fn delete_item(&self, item_id: ItemId) -> DomainResult<()> {
        let record = self.items.get(item_id)?;
        self.items.delete(item_id)?;

        self.record_audit(AuditEvent::new(
            "item.deleted",
            AuditEntity::Item,
            Some(*item_id.as_uuid()),
            json!({ "name": record.name }),
        ));
        Ok(())
    }

    // --- category operations ---

    pub fn create_category(&self, name: &str) -> DomainResult<CategoryRecord> {
        let name = require_name(name, "category name required")?;
        let record = CategoryRecord {
            id: CategoryId::new(),
            name,
            sort_order: None,
        };
        self.categories.put(&record)?;

        self.record_audit(AuditEvent::new(
            "category.created",
            AuditEntity::Category,
            Some(*record.id.as_uuid()),
            json!({ "name": record.name }),
        ));
        Ok(record)
    }

    pub fn rename_category(&self, id: CategoryId, name: &str) -> DomainResult<CategoryRecord> {
        let name = require_name(name, "category name required")?;
        let mut record = self.categories.get(id)?;
        record.name = name;
        self.categories.put(&record)?;

        self.record_audit(AuditEvent::new(
            "category.renamed",
            AuditEntity::Category,
            Some(*id.as_uuid()),
            json!({ "name": record.name }),
        ));
        Ok(record)
    }

    /// Delete a category. Cascading (or rejecting) its items is the store's
    /// referential concern, forwarded as-is.
    pub fn delete_category(&self, id: CategoryId) -> DomainResult<()> {
        self.categories.get(id)?;
        self.categories.delete(id)?;

        self.record_audit(AuditEvent::new(
            "category.deleted",
            AuditEntity::Category,
            Some(*id.as_uuid()),
            serde_json::Value::Null,
        ));
        Ok(())
    }

    /// Assign dense `sort_order = 1..N` following the supplied permutation.
    ///
    /// All ids are resolved before any row is written, so an unknown id
    /// rejects the whole reorder instead of leaving a half-applied sequence.
    pub fn reorder_categories(&self, ids: &[CategoryId]) -> DomainResult<()> {
        let mut records = Vec::with_capacity(ids.len());
        for &id in ids {
            records.push(self.categories.get(id)?);
        }

        for (position, record) in records.iter_mut().enumerate() {
            record.sort_order = Some(position as i64 + 1);
            self.categories.put(record)?;
        }

        self.record_audit(AuditEvent::new(
            "category.reordered",
            AuditEntity::Category,
            None,
            json!({ "count": ids.len() }),
        ));
        Ok(())
    }

    /// Audit delivery is best-effort: a failed publish is logged and dropped,
    /// never surfaced into the primary result.
    fn record_audit(&self, event: AuditEvent) {
        if let Err(e) = self.audit.publish(event) {
            warn!(error = ?e, "audit event dropped");
        }
    }
}

fn require_name(raw: &str, msg: &str) -> DomainResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(msg));
    }
    Ok(trimmed.to_string())
}

fn ensure_alert_within_max(alert_level: i64, max_capacity: i64) -> DomainResult<()> {
    if alert_level > max_capacity {
        return Err(DomainError::validation("alert cannot exceed max"));
    }
    Ok(())
}
