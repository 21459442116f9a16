use serde::{Deserialize, Serialize};

use stocktile_core::{CategoryId, Entity, ItemId, ValueObject};

/// Unit label applied when the caller leaves the field blank.
pub const DEFAULT_UNIT: &str = "each";

/// A tracked stock item, as stored.
///
/// `max_capacity = 0` means "no cap tracked"; such items never appear in a
/// replenishment plan. Low-stock status is derived, never stored — see
/// [`is_low_stock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub category_id: CategoryId,
    pub name: String,
    pub unit: String,
    pub on_hand: i64,
    pub max_capacity: i64,
    pub alert_level: i64,
}

impl Entity for ItemRecord {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ItemRecord {
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self.on_hand, self.alert_level)
    }
}

/// Single source of truth for the low-stock threshold rule.
///
/// Every consumer that renders or aggregates stock state goes through this
/// predicate; the threshold comparison exists nowhere else.
pub fn is_low_stock(on_hand: i64, alert_level: i64) -> bool {
    on_hand <= alert_level
}

/// Normalize an optional quantity field: missing/blank becomes 0, negative
/// values are floored to 0. Capacity and alert fields are always-zero-defaulted
/// non-null integers; there is no "null capacity" state.
pub fn optional_qty(value: Option<i64>) -> i64 {
    value.unwrap_or(0).max(0)
}

/// Fields for creating an item. `unit = None` defaults to [`DEFAULT_UNIT`];
/// blank capacity/alert default to 0 via [`optional_qty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub unit: Option<String>,
    pub initial_qty: i64,
    pub max_capacity: Option<i64>,
    pub alert_level: Option<i64>,
}

/// Full field set for an absolute update. This is an idempotent replace, not a
/// merge: callers always resupply every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub name: String,
    pub unit: String,
    pub on_hand: i64,
    pub max_capacity: Option<i64>,
    pub alert_level: Option<i64>,
}

/// Direction of a quantity adjustment, as submitted by the request layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustOp {
    /// Book stock in (`+`).
    Receive,
    /// Book stock out (`-`).
    Issue,
}

impl AdjustOp {
    /// Translate an op + magnitude into a signed delta.
    pub fn signed(self, qty: i64) -> i64 {
        match self {
            AdjustOp::Receive => qty,
            AdjustOp::Issue => -qty,
        }
    }
}

/// Audit snapshot of one applied delta.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub previous: i64,
    pub next: i64,
    pub delta: i64,
}

impl ValueObject for StockMovement {}
