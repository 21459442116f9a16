//! Store collaborator contracts.
//!
//! The ledger never owns persistence; every operation is parameterized by
//! these traits (no process-wide store singleton). Single-row operations are
//! assumed atomic on the store side; multi-row transactions are not assumed.
//!
//! `apply_delta`'s read-then-write is the one place two concurrent requests
//! can interleave and lose an update. Real store implementations should back
//! `put` with a conditional update (compare-and-swap on the stored quantity
//! or an atomic increment); that obligation sits with the implementor, not
//! with the ledger.

use stocktile_core::{CategoryId, DomainResult, ItemId};

use crate::category::CategoryRecord;
use crate::item::ItemRecord;

/// Item row access. `put` is an upsert; `get`/`delete` fail with `NotFound`
/// for unknown ids, `Store` for infrastructure failures.
pub trait ItemStore: Send + Sync {
    fn get(&self, id: ItemId) -> DomainResult<ItemRecord>;

    fn put(&self, record: &ItemRecord) -> DomainResult<()>;

    fn delete(&self, id: ItemId) -> DomainResult<()>;

    /// List items, optionally scoped to one category.
    fn list(&self, category_id: Option<CategoryId>) -> DomainResult<Vec<ItemRecord>>;
}

/// Category row access. Deleting a category must cascade (or reject) its
/// items per the store's referential rules; the ledger does not re-implement
/// cascade logic.
pub trait CategoryStore: Send + Sync {
    fn get(&self, id: CategoryId) -> DomainResult<CategoryRecord>;

    fn put(&self, record: &CategoryRecord) -> DomainResult<()>;

    fn delete(&self, id: CategoryId) -> DomainResult<()>;

    fn list(&self) -> DomainResult<Vec<CategoryRecord>>;
}

impl<T> ItemStore for std::sync::Arc<T>
where
    T: ItemStore + ?Sized,
{
    fn get(&self, id: ItemId) -> DomainResult<ItemRecord> {
        (**self).get(id)
    }

    fn put(&self, record: &ItemRecord) -> DomainResult<()> {
        (**self).put(record)
    }

    fn delete(&self, id: ItemId) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn list(&self, category_id: Option<CategoryId>) -> DomainResult<Vec<ItemRecord>> {
        (**self).list(category_id)
    }
}

impl<T> CategoryStore for std::sync::Arc<T>
where
    T: CategoryStore + ?Sized,
{
    fn get(&self, id: CategoryId) -> DomainResult<CategoryRecord> {
        (**self).get(id)
    }

    fn put(&self, record: &CategoryRecord) -> DomainResult<()> {
        (**self).put(record)
    }

    fn delete(&self, id: CategoryId) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn list(&self) -> DomainResult<Vec<CategoryRecord>> {
        (**self).list()
    }
}
