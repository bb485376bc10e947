//! Storage seam for inventory items and groups.
//!
//! The repository owns identity assignment, timestamps and referential checks
//! (an item's group must exist). Field rules for updates are enforced before a
//! request ever reaches it, by [`crate::update::validate`].

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use stockroom_core::{DomainError, DomainResult, InventoryGroupId, ItemId};

use crate::item::{InventoryGroup, InventoryItem, NewItem};
use crate::update::ItemUpdateRequest;

pub trait ItemRepository: Send + Sync {
    fn create_group(&self, name: &str) -> DomainResult<InventoryGroup>;

    fn create_item(&self, new: NewItem, at: DateTime<Utc>) -> DomainResult<InventoryItem>;

    fn get_item(&self, id: ItemId) -> DomainResult<InventoryItem>;

    /// All items ordered by id.
    fn list_items(&self) -> DomainResult<Vec<InventoryItem>>;

    /// Apply a validated update and stamp `updated_at = at`.
    ///
    /// Fails with `InvalidId` when the group reference is not an identifier and
    /// `NotFound` when the item or the referenced group does not exist.
    fn update_item(
        &self,
        id: ItemId,
        update: &ItemUpdateRequest,
        at: DateTime<Utc>,
    ) -> DomainResult<InventoryItem>;
}

impl<R> ItemRepository for Arc<R>
where
    R: ItemRepository + ?Sized,
{
    fn create_group(&self, name: &str) -> DomainResult<InventoryGroup> {
        (**self).create_group(name)
    }

    fn create_item(&self, new: NewItem, at: DateTime<Utc>) -> DomainResult<InventoryItem> {
        (**self).create_item(new, at)
    }

    fn get_item(&self, id: ItemId) -> DomainResult<InventoryItem> {
        (**self).get_item(id)
    }

    fn list_items(&self) -> DomainResult<Vec<InventoryItem>> {
        (**self).list_items()
    }

    fn update_item(
        &self,
        id: ItemId,
        update: &ItemUpdateRequest,
        at: DateTime<Utc>,
    ) -> DomainResult<InventoryItem> {
        (**self).update_item(id, update, at)
    }
}

#[derive(Debug, Default)]
struct State {
    groups: BTreeMap<InventoryGroupId, InventoryGroup>,
    items: BTreeMap<ItemId, InventoryItem>,
    next_group_id: i64,
    next_item_id: i64,
}

/// In-memory repository for tests/dev. Ids are assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    inner: RwLock<State>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::invariant("item store lock poisoned")
}

impl ItemRepository for InMemoryItemRepository {
    fn create_group(&self, name: &str) -> DomainResult<InventoryGroup> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("group name cannot be empty"));
        }

        let mut state = self.inner.write().map_err(poisoned)?;
        if state.groups.values().any(|g| g.name == name) {
            return Err(DomainError::conflict(format!("group '{name}' already exists")));
        }

        state.next_group_id += 1;
        let group = InventoryGroup {
            id: InventoryGroupId::new(state.next_group_id),
            name: name.to_string(),
        };
        state.groups.insert(group.id, group.clone());

        tracing::info!(group_id = %group.id, "inventory group created");
        Ok(group)
    }

    fn create_item(&self, new: NewItem, at: DateTime<Utc>) -> DomainResult<InventoryItem> {
        let mut state = self.inner.write().map_err(poisoned)?;
        if !state.groups.contains_key(&new.inventory_group_id) {
            return Err(DomainError::not_found(format!(
                "inventory group {}",
                new.inventory_group_id
            )));
        }

        let id = ItemId::new(state.next_item_id + 1);
        let item = InventoryItem::create(id, new, at)?;
        state.next_item_id += 1;
        state.items.insert(id, item.clone());

        tracing::info!(item_id = %id, "inventory item created");
        Ok(item)
    }

    fn get_item(&self, id: ItemId) -> DomainResult<InventoryItem> {
        let state = self.inner.read().map_err(poisoned)?;
        state
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("item {id}")))
    }

    fn list_items(&self) -> DomainResult<Vec<InventoryItem>> {
        let state = self.inner.read().map_err(poisoned)?;
        Ok(state.items.values().cloned().collect())
    }

    fn update_item(
        &self,
        id: ItemId,
        update: &ItemUpdateRequest,
        at: DateTime<Utc>,
    ) -> DomainResult<InventoryItem> {
        let group = update.group_id()?;

        let mut state = self.inner.write().map_err(poisoned)?;
        if !state.groups.contains_key(&group) {
            return Err(DomainError::not_found(format!("inventory group {group}")));
        }
        let item = state
            .items
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("item {id}")))?;

        item.apply_update(update, group, at);

        tracing::info!(item_id = %id, group_id = %group, "inventory item updated");
        Ok(item.clone())
    }
}
