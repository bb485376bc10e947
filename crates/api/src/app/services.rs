use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use stockroom_core::{DomainResult, ItemId};
use stockroom_inventory::{
    InventoryGroup, InventoryItem, ItemRepository, ItemUpdateRequest, NewItem, validate,
};

/// Handler-facing facade over the item repository.
///
/// Owns the clock: every mutation is stamped with the current UTC time.
#[derive(Clone)]
pub struct AppServices {
    repo: Arc<dyn ItemRepository>,
}

impl AppServices {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    pub fn create_group(&self, name: &str) -> DomainResult<InventoryGroup> {
        self.repo.create_group(name)
    }

    pub fn create_item(&self, new: NewItem) -> DomainResult<InventoryItem> {
        self.repo.create_item(new, Utc::now())
    }

    pub fn get_item(&self, id: ItemId) -> DomainResult<InventoryItem> {
        self.repo.get_item(id)
    }

    pub fn list_items(&self) -> DomainResult<Vec<InventoryItem>> {
        self.repo.list_items()
    }

    /// Validate only; nothing is persisted.
    pub fn check_update(&self, body: &Value) -> DomainResult<ItemUpdateRequest> {
        Ok(validate(body)?)
    }

    /// Validate an untyped update body, then persist it.
    pub fn update_item(&self, id: ItemId, body: &Value) -> DomainResult<InventoryItem> {
        let update = self.check_update(body)?;
        self.repo.update_item(id, &update, Utc::now())
    }
}
