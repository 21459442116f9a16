use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stocktile_core::{ItemId, ValueObject};
use stocktile_ledger::{ItemRecord, is_low_stock};

/// Planner input: ledger fields plus an optional category label.
///
/// `category` is `None` in single-category planning contexts; the text filter
/// and the exporters then leave the category out entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub item_id: ItemId,
    pub category: Option<String>,
    pub name: String,
    pub unit: String,
    pub on_hand: i64,
    pub max_capacity: i64,
    pub alert_level: i64,
}

impl PlanItem {
    /// Bridge from a stored item row.
    pub fn from_record(record: &ItemRecord, category: Option<&str>) -> Self {
        Self {
            item_id: record.id,
            category: category.map(str::to_string),
            name: record.name.clone(),
            unit: record.unit.clone(),
            on_hand: record.on_hand,
            max_capacity: record.max_capacity,
            alert_level: record.alert_level,
        }
    }

    /// Eligibility is not user-toggleable: untracked items
    /// (`max_capacity = 0`) and items at/above capacity never plan.
    fn is_eligible(&self) -> bool {
        self.max_capacity > 0 && self.on_hand < self.max_capacity
    }

    fn filter_haystack(&self) -> String {
        match &self.category {
            Some(category) => format!("{} {}", category, self.name).to_lowercase(),
            None => self.name.to_lowercase(),
        }
    }
}

/// User-toggleable plan filters. The default matches everything eligible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFilters {
    /// Case-insensitive substring match against `category + " " + name`.
    pub query: String,
    /// When set, additionally require the item to be at/below its alert level.
    pub only_below_alert: bool,
}

/// A caller-supplied need override for one item.
///
/// `Cleared` is the blank input: an explicit "nothing needed", distinct from
/// supplying no override at all (which falls back to the default need).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeedOverride {
    Cleared,
    Quantity(i64),
}

pub type NeedOverrides = HashMap<ItemId, NeedOverride>;

/// One computed plan row. Request-scoped; discarded after export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishRow {
    pub item_id: ItemId,
    pub category: Option<String>,
    pub name: String,
    pub unit: String,
    pub on_hand: i64,
    pub max_capacity: i64,
    pub alert_level: i64,
    pub default_need: i64,
    pub need: i64,
}

impl ValueObject for ReplenishRow {}

/// A computed plan: surviving rows (input order preserved) plus their total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub rows: Vec<ReplenishRow>,
    pub total_need: i64,
}

/// Build a replenishment plan.
///
/// Filter pipeline per item: eligibility, then the text filter, then the
/// opt-in alert filter. Need per surviving row is
/// `max(0, max_capacity - on_hand)` unless overridden; overrides are floored
/// at zero but deliberately not clamped to the capacity shortfall. The total
/// is summed after overrides, so it always agrees with the rows.
pub fn build_plan(items: &[PlanItem], filters: &PlanFilters, overrides: &NeedOverrides) -> Plan {
    let query = filters.query.trim().to_lowercase();

    let mut rows = Vec::new();
    let mut total_need = 0;

    for item in items {
        if !item.is_eligible() {
            continue;
        }
        if !query.is_empty() && !item.filter_haystack().contains(&query) {
            continue;
        }
        if filters.only_below_alert && !is_low_stock(item.on_hand, item.alert_level) {
            continue;
        }

        let default_need = (item.max_capacity - item.on_hand).max(0);
        let need = match overrides.get(&item.item_id) {
            None => default_need,
            Some(NeedOverride::Cleared) => 0,
            Some(NeedOverride::Quantity(n)) => (*n).max(0),
        };

        total_need += need;
        rows.push(ReplenishRow {
            item_id: item.item_id,
            category: item.category.clone(),
            name: item.name.clone(),
            unit: item.unit.clone(),
            on_hand: item.on_hand,
            max_capacity: item.max_capacity,
            alert_level: item.alert_level,
            default_need,
            need,
        });
    }

    Plan { rows, total_need }
}
