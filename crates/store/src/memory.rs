use std::collections::HashMap;
use std::sync::RwLock;

use stocktile_core::{CategoryId, DomainError, DomainResult, ItemId};
use stocktile_ledger::{CategoryRecord, CategoryStore, ItemRecord, ItemStore};

/// In-memory item + category store.
///
/// Single-row operations are atomic under the `RwLock`s; there is no
/// cross-row transaction, matching what the ledger assumes of its real store.
/// Category deletion cascades to the category's items, playing the role a
/// hosted store's referential rules would.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    items: RwLock<HashMap<ItemId, ItemRecord>>,
    categories: RwLock<HashMap<CategoryId, CategoryRecord>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(_: impl std::fmt::Debug) -> DomainError {
    DomainError::store("store lock poisoned")
}

impl ItemStore for InMemoryInventoryStore {
    fn get(&self, id: ItemId) -> DomainResult<ItemRecord> {
        let items = self.items.read().map_err(poisoned)?;
        items.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn put(&self, record: &ItemRecord) -> DomainResult<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.insert(record.id, record.clone());
        Ok(())
    }

    fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.remove(&id).map(|_| ()).ok_or(DomainError::NotFound)
    }

    fn list(&self, category_id: Option<CategoryId>) -> DomainResult<Vec<ItemRecord>> {
        let items = self.items.read().map_err(poisoned)?;
        let mut records: Vec<ItemRecord> = items
            .values()
            .filter(|it| category_id.is_none_or(|c| it.category_id == c))
            .cloned()
            .collect();
        // Deterministic listing; callers wanting category-then-name order
        // re-sort after joining category names.
        records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.as_uuid().cmp(b.id.as_uuid())));
        Ok(records)
    }
}

impl CategoryStore for InMemoryInventoryStore {
    fn get(&self, id: CategoryId) -> DomainResult<CategoryRecord> {
        let categories = self.categories.read().map_err(poisoned)?;
        categories.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn put(&self, record: &CategoryRecord) -> DomainResult<()> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        categories.insert(record.id, record.clone());
        Ok(())
    }

    fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        categories.remove(&id).ok_or(DomainError::NotFound)?;

        // Referential cascade: a category owns its items exclusively.
        let mut items = self.items.write().map_err(poisoned)?;
        items.retain(|_, it| it.category_id != id);
        Ok(())
    }

    fn list(&self) -> DomainResult<Vec<CategoryRecord>> {
        let categories = self.categories.read().map_err(poisoned)?;
        let mut records: Vec<CategoryRecord> = categories.values().cloned().collect();
        records.sort_by(stocktile_ledger::display_order);
        Ok(records)
    }
}
