//! Replenishment planning.
//!
//! Pure, synchronous, reentrant: given a snapshot of items plus the caller's
//! filters and need overrides, compute the rows worth restocking and their
//! total need. No IO, no shared mutable state.

pub mod plan;

pub use plan::{
    NeedOverride, NeedOverrides, Plan, PlanFilters, PlanItem, ReplenishRow, build_plan,
};
